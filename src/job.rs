use std::{fmt::Display, str::FromStr};

/// Separator between fields in a stored line, and between skills.
pub const SEPARATOR: &str = ", ";

/// A job posting as submitted by the caller.
///
/// Every field is kept as the raw string the caller supplied, so a stored line
/// reproduces the input exactly. Use [`crate::is_valid`] to check it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct JobRecord {
    /// Five digits in `1..=5`, three uppercase letters, then `_`.
    pub job_id: String,
    /// `YYYY-MM-DD`.
    pub date_posted: String,
    /// `City, State, Country`.
    pub address: String,
    /// `Senior`, `Executive` or `Junior`.
    pub level: String,
    /// An integer whose allowed range depends on the level.
    pub salary: String,
    /// Up to three skills separated by `", "`.
    pub skills: String,
    /// Full-time, part-time, etc.
    pub job_type: String,
}

impl Display for JobRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}, {}",
            self.job_id,
            self.date_posted,
            self.address,
            self.level,
            self.salary,
            self.skills,
            self.job_type,
        )
    }
}

impl JobRecord {
    pub fn new(
        job_id: impl Into<String>,
        date_posted: impl Into<String>,
        address: impl Into<String>,
        level: impl Into<String>,
        salary: impl Into<String>,
        skills: impl Into<String>,
        job_type: impl Into<String>,
    ) -> Self {
        Self {
            job_id: job_id.into(),
            date_posted: date_posted.into(),
            address: address.into(),
            level: level.into(),
            salary: salary.into(),
            skills: skills.into(),
            job_type: job_type.into(),
        }
    }

    /// Parses a stored line back into a record.
    ///
    /// The address always spans three pieces and the job type is the last
    /// piece, so the skills are whatever lies in between. A job type that
    /// itself contains `", "` cannot be recovered.
    pub fn parse_line(line: &str) -> Option<Self> {
        let pieces = line.split(SEPARATOR).collect::<Vec<_>>();
        // id, date, 3 x address, level, salary, >= 1 skill, job type
        if pieces.len() < 9 {
            return None;
        }

        let (job_type, rest) = pieces.split_last()?;
        Some(Self {
            job_id: rest[0].to_string(),
            date_posted: rest[1].to_string(),
            address: rest[2..5].join(SEPARATOR),
            level: rest[5].to_string(),
            salary: rest[6].to_string(),
            skills: rest[7..].join(SEPARATOR),
            job_type: job_type.to_string(),
        })
    }
}

/// Returns the job ID field of a stored line.
pub(crate) fn line_id(line: &str) -> &str {
    line.split_once(SEPARATOR).map_or(line, |(id, _)| id)
}

/// The seniority levels a posting may have.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum JobLevel {
    Senior,
    Executive,
    Junior,
}

impl JobLevel {
    /// True for the levels held to the senior salary band and job type rule.
    pub fn is_senior(self) -> bool {
        matches!(self, JobLevel::Senior | JobLevel::Executive)
    }
}

impl FromStr for JobLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Senior" => Ok(JobLevel::Senior),
            "Executive" => Ok(JobLevel::Executive),
            "Junior" => Ok(JobLevel::Junior),
            _ => Err(()),
        }
    }
}

impl Display for JobLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            JobLevel::Senior => "Senior",
            JobLevel::Executive => "Executive",
            JobLevel::Junior => "Junior",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> JobRecord {
        JobRecord::new(
            "12345MMT_",
            "2023-02-05",
            "Melbourne, NSW, Australia",
            "Senior",
            "700000",
            "Software architecture, SQL, python",
            "Full-time",
        )
    }

    #[test]
    fn display() {
        assert_eq!(
            record().to_string(),
            "12345MMT_, 2023-02-05, Melbourne, NSW, Australia, Senior, 700000, \
             Software architecture, SQL, python, Full-time",
        );
    }

    #[test]
    fn parse_line() {
        for job in [
            record(),
            JobRecord::new(
                "11111AAA_",
                "2024-01-01",
                "Perth, WA, Australia",
                "Junior",
                "40000",
                "Rust",
                "Part-time",
            ),
        ] {
            assert_eq!(JobRecord::parse_line(&job.to_string()), Some(job.clone()));
        }
    }

    #[test]
    fn parse_line_too_short() {
        for line in ["", "12345MMT_", "12345MMT_, 2023-02-05, Melbourne, NSW"] {
            assert_eq!(JobRecord::parse_line(line), None, "{}", line);
        }
    }

    #[test]
    fn line_id_first_field() {
        assert_eq!(line_id("12345MMT_, 2023-02-05"), "12345MMT_");
        assert_eq!(line_id("12345MMT_"), "12345MMT_");
    }

    #[test]
    fn level() {
        for (s, level) in [
            ("Senior", Some(JobLevel::Senior)),
            ("Executive", Some(JobLevel::Executive)),
            ("Junior", Some(JobLevel::Junior)),
            ("senior", None),
            ("Mid", None),
            ("", None),
        ] {
            assert_eq!(s.parse::<JobLevel>().ok(), level, "{}", s);
        }
    }
}
