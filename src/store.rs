use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufRead as _, BufReader, BufWriter, Write as _},
    path::Path,
};

use fs2::FileExt as _;
use tempfile::NamedTempFile;
use tiny_bail::prelude::*;

use crate::{
    config::StoreConfig,
    error::{Result, StoreError},
    job::{line_id, JobRecord},
    validate::validate,
};

/// A flat file of job postings, one per line.
///
/// Nothing is cached: every operation reads the backing file again.
pub struct JobStore {
    config: StoreConfig,
}

impl JobStore {
    pub const DEFAULT_FILE_PATH: &str = "jobs.txt";

    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Appends a job, creating the backing file if needed.
    pub fn add(&self, job: &JobRecord) -> Result<()> {
        log::debug!("[{}] Adding {}", self.path().display(), job.job_id);
        validate(job)?;
        let _lock = self.lock()?;

        if self.config.reject_duplicate_ids && self.contains(&job.job_id)? {
            return Err(StoreError::DuplicateId(job.job_id.clone()));
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.path())?;
        file.write_all(format!("{}\n", job).as_bytes())?;

        log::info!("[{}] Added: {}", self.path().display(), job);
        Ok(())
    }

    /// Replaces every stored line whose ID matches the job's ID.
    ///
    /// The new contents are written to a temporary file next to the backing
    /// file, which is then renamed over it in one step. If no line matches,
    /// the backing file is left as it was.
    pub fn update(&self, job: &JobRecord) -> Result<()> {
        log::debug!("[{}] Updating {}", self.path().display(), job.job_id);
        validate(job)?;
        let _lock = self.lock()?;

        let path = self.path();
        let original = File::open(path)?;
        let permissions = original.metadata()?.permissions();
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;

        // Copy the file line by line, swapping in the new job.
        let mut replaced = 0;
        {
            let mut writer = BufWriter::new(&mut temp);
            for line in BufReader::new(original).lines() {
                let line = line?;
                if self.config.id_match.matches(&line, &job.job_id) {
                    writeln!(writer, "{}", job)?;
                    replaced += 1;
                } else {
                    writeln!(writer, "{}", line)?;
                }
            }
            writer.flush()?;
        }

        if replaced == 0 {
            // Dropping `temp` deletes it.
            log::info!("[{}] Job not found: {}", path.display(), job.job_id);
            return Err(StoreError::JobNotFound(job.job_id.clone()));
        }

        if self.config.backup {
            fs::copy(path, self.config.backup_path())?;
        }
        temp.as_file().set_permissions(permissions)?;
        temp.as_file().sync_all()?;
        temp.persist(path).map_err(|err| err.error)?;
        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(dir) {
                let _ = dir.sync_all();
            }
        }

        log::info!(
            "[{}] Updated ({} lines): {}",
            path.display(),
            replaced,
            job,
        );
        Ok(())
    }

    /// Like [`Self::add`], but logs the failure and returns `false` instead.
    ///
    /// Build the job from its seven fields with [`JobRecord::new`].
    pub fn add_job(&self, job: &JobRecord) -> bool {
        match self.add(job) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("[{}] Error adding job: {}", self.path().display(), err);
                false
            }
        }
    }

    /// Like [`Self::update`], but logs the failure and returns `false` instead.
    ///
    /// Build the job from its seven fields with [`JobRecord::new`].
    pub fn update_job(&self, job: &JobRecord) -> bool {
        match self.update(job) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("[{}] Error updating job: {}", self.path().display(), err);
                false
            }
        }
    }

    /// Reads every stored job in file order, skipping lines that don't parse.
    pub fn records(&self) -> Result<Vec<JobRecord>> {
        let mut jobs = Vec::new();
        let Some(file) = self.open_existing()? else {
            return Ok(jobs);
        };

        for line in BufReader::new(file).lines() {
            let line = line?;
            jobs.push(c!(JobRecord::parse_line(&line)));
        }

        Ok(jobs)
    }

    /// Returns the first stored job with the given ID.
    pub fn find(&self, job_id: &str) -> Result<Option<JobRecord>> {
        Ok(self
            .records()?
            .into_iter()
            .find(|job| job.job_id == job_id))
    }

    fn contains(&self, job_id: &str) -> Result<bool> {
        let Some(file) = self.open_existing()? else {
            return Ok(false);
        };

        for line in BufReader::new(file).lines() {
            if line_id(&line?) == job_id {
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn open_existing(&self) -> Result<Option<File>> {
        match File::open(self.path()) {
            Ok(file) => Ok(Some(file)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Blocks until this process holds the store's advisory lock.
    /// The lock is released when the returned file is dropped.
    fn lock(&self) -> Result<Option<File>> {
        if !self.config.lock {
            return Ok(None);
        }

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.config.lock_path())?;
        file.lock_exclusive()?;

        Ok(Some(file))
    }
}
