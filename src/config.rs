use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How an update picks the stored lines it replaces.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum IdMatch {
    /// The line's first field equals the job ID.
    #[default]
    Exact,
    /// The line starts with the job ID. Can over-match on malformed data.
    Prefix,
}

impl IdMatch {
    pub fn matches(self, line: &str, job_id: &str) -> bool {
        match self {
            IdMatch::Exact => crate::job::line_id(line) == job_id,
            IdMatch::Prefix => line.starts_with(job_id),
        }
    }
}

/// Settings for a [`crate::JobStore`].
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// The backing file.
    pub path: PathBuf,
    /// Refuse to add a job whose ID is already stored.
    #[serde(default)]
    pub reject_duplicate_ids: bool,
    #[serde(default)]
    pub id_match: IdMatch,
    /// Hold an advisory lock on `<path>.lock` during each operation.
    #[serde(default = "default_lock")]
    pub lock: bool,
    /// Copy the backing file to `<path>.backup` before an update replaces it.
    #[serde(default)]
    pub backup: bool,
}

fn default_lock() -> bool {
    true
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(crate::JobStore::DEFAULT_FILE_PATH)
    }
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            reject_duplicate_ids: false,
            id_match: IdMatch::Exact,
            lock: default_lock(),
            backup: false,
        }
    }

    /// Reads a config from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&config_str)?)
    }

    pub fn with_reject_duplicate_ids(mut self, reject: bool) -> Self {
        self.reject_duplicate_ids = reject;
        self
    }

    pub fn with_id_match(mut self, id_match: IdMatch) -> Self {
        self.id_match = id_match;
        self
    }

    pub fn with_lock(mut self, lock: bool) -> Self {
        self.lock = lock;
        self
    }

    pub fn with_backup(mut self, backup: bool) -> Self {
        self.backup = backup;
        self
    }

    pub(crate) fn lock_path(&self) -> PathBuf {
        sibling(&self.path, "lock")
    }

    pub(crate) fn backup_path(&self) -> PathBuf {
        sibling(&self.path, "backup")
    }
}

/// `jobs.txt` -> `jobs.txt.<ext>`
fn sibling(path: &Path, ext: &str) -> PathBuf {
    let mut path = path.as_os_str().to_owned();
    path.push(".");
    path.push(ext);
    path.into()
}
