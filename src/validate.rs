use thiserror::Error;

use crate::job::{JobLevel, JobRecord, SEPARATOR};

/// Minimum salary for senior and executive postings.
pub const SENIOR_MIN_SALARY: i32 = 100_000;
/// Salary band for junior postings.
pub const JUNIOR_SALARY: std::ops::RangeInclusive<i32> = 40_000..=70_000;
/// Maximum number of skills per posting.
pub const MAX_SKILLS: usize = 3;
/// Maximum number of words per skill.
pub const MAX_SKILL_WORDS: usize = 2;
/// The job type senior and executive postings may not have.
pub const PART_TIME: &str = "Part-time";

/// The first field of a record that failed validation.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ValidationError {
    #[error("invalid job ID: {0:?}")]
    JobId(String),
    #[error("invalid date: {0:?}")]
    Date(String),
    #[error("invalid address: {0:?}")]
    Address(String),
    #[error("invalid salary {salary:?} for level {level:?}")]
    Salary { level: String, salary: String },
    #[error("invalid skills: {0:?}")]
    Skills(String),
    #[error("invalid job type {job_type:?} for level {level:?}")]
    JobType { level: String, job_type: String },
}

macro_rules! re {
    ($name:ident, $($e:expr),* $(,)?) => {
        static $name: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(
            || regex::Regex::new(concat!($($e),*)).unwrap(),
        );
    };
}

/// Checks every field of a record, stopping at the first failure.
pub fn validate(job: &JobRecord) -> Result<(), ValidationError> {
    if !is_valid_job_id(&job.job_id) {
        return Err(ValidationError::JobId(job.job_id.clone()));
    }
    if !is_valid_date(&job.date_posted) {
        return Err(ValidationError::Date(job.date_posted.clone()));
    }
    if !is_valid_address(&job.address) {
        return Err(ValidationError::Address(job.address.clone()));
    }
    if !is_valid_salary(&job.level, &job.salary) {
        return Err(ValidationError::Salary {
            level: job.level.clone(),
            salary: job.salary.clone(),
        });
    }
    if !is_valid_skills(&job.skills) {
        return Err(ValidationError::Skills(job.skills.clone()));
    }
    if !is_valid_job_type(&job.level, &job.job_type) {
        return Err(ValidationError::JobType {
            level: job.level.clone(),
            job_type: job.job_type.clone(),
        });
    }

    Ok(())
}

pub fn is_valid(job: &JobRecord) -> bool {
    validate(job).is_ok()
}

pub fn is_valid_job_id(job_id: &str) -> bool {
    re!(JOB_ID_RE, r"^[1-5]{5}[A-Z]{3}_$");
    JOB_ID_RE.is_match(job_id)
}

/// Only the shape is checked; month 13 or day 99 still pass.
pub fn is_valid_date(date: &str) -> bool {
    re!(DATE_RE, r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$");
    DATE_RE.is_match(date)
}

pub fn is_valid_address(address: &str) -> bool {
    re!(ADDRESS_RE, r"^[A-Za-z]+, [A-Za-z]+, [A-Za-z]+$");
    ADDRESS_RE.is_match(address)
}

pub fn is_valid_salary(level: &str, salary: &str) -> bool {
    let Ok(salary) = salary.parse::<i32>() else {
        return false;
    };

    match level.parse::<JobLevel>() {
        Ok(level) if level.is_senior() => salary >= SENIOR_MIN_SALARY,
        Ok(_) => JUNIOR_SALARY.contains(&salary),
        Err(()) => false,
    }
}

pub fn is_valid_skills(skills: &str) -> bool {
    let skills = split_terminated(skills, SEPARATOR);
    (1..=MAX_SKILLS).contains(&skills.len())
        && skills
            .iter()
            .all(|skill| split_terminated(skill, " ").len() <= MAX_SKILL_WORDS)
}

pub fn is_valid_job_type(level: &str, job_type: &str) -> bool {
    match level.parse::<JobLevel>() {
        Ok(level) if level.is_senior() => job_type != PART_TIME,
        Ok(_) => true,
        Err(()) => false,
    }
}

/// Splits on `sep`, dropping any empty pieces at the end. A string without
/// `sep` is returned whole, even when empty.
fn split_terminated<'a>(s: &'a str, sep: &str) -> Vec<&'a str> {
    if !s.contains(sep) {
        return vec![s];
    }

    let mut pieces = s.split(sep).collect::<Vec<_>>();
    while pieces.last() == Some(&"") {
        pieces.pop();
    }
    pieces
}
