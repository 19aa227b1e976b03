mod config;
mod error;
mod job;
mod store;
mod validate;

pub use config::{IdMatch, StoreConfig};
pub use error::{Result, StoreError};
pub use job::{JobLevel, JobRecord};
pub use store::JobStore;
pub use validate::{
    is_valid, is_valid_address, is_valid_date, is_valid_job_id, is_valid_job_type,
    is_valid_salary, is_valid_skills, validate, ValidationError,
};

/// Installs the global logger. Later calls are ignored.
pub fn init_logger(default_level: log::LevelFilter) {
    let _ = pretty_env_logger::formatted_timed_builder()
        .filter_level(default_level)
        .parse_default_env()
        .try_init();
}
