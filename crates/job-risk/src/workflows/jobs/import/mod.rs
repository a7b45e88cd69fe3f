//! CSV import of work orders exported from the job-tracking system.

mod parser;

use super::domain::{InvalidJobError, Job};
use std::io::Read;
use std::path::Path;
use tracing::warn;

#[derive(Debug, thiserror::Error)]
pub enum JobImportError {
    #[error("failed to read job export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid job CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Jobs that passed validation, plus the rows that did not.
#[derive(Debug, Default)]
pub struct JobImport {
    pub jobs: Vec<Job>,
    pub rejected: Vec<InvalidJobError>,
}

pub struct JobCsvImporter;

impl JobCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<JobImport, JobImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<JobImport, JobImportError> {
        let mut import = JobImport::default();

        for record in parser::parse_records(reader)? {
            match record.validate() {
                Ok(job) => import.jobs.push(job),
                Err(error) => {
                    warn!(%error, "skipping invalid job row");
                    import.rejected.push(error);
                }
            }
        }

        Ok(import)
    }
}
