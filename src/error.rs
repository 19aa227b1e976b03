use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid job: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Job not found: {0}")]
    JobNotFound(String),

    #[error("Duplicate job ID: {0}")]
    DuplicateId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] ron::error::SpannedError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
