use serde::{Deserialize, Serialize};
use std::fmt;

/// Work order identifier as issued by the job-tracking system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobNumber(pub String);

impl JobNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobNumber {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Job record exactly as supplied by the external job-tracking system.
///
/// Numeric fields are signed so that out-of-range values survive
/// deserialization and can be rejected by [`JobRecord::validate`] with a
/// meaningful error instead of a generic parse failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_number: String,
    pub department: String,
    pub operation: String,
    #[serde(default)]
    pub complete: bool,
    pub quantity: i64,
    pub estimated_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stages: Option<i64>,
}

impl JobRecord {
    pub fn validate(self) -> Result<Job, InvalidJobError> {
        let job_number = self.job_number.trim().to_string();
        if job_number.is_empty() {
            return Err(InvalidJobError::EmptyJobNumber);
        }

        if self.quantity < 1 {
            return Err(InvalidJobError::Quantity {
                job_number: JobNumber(job_number),
                quantity: self.quantity,
            });
        }
        let quantity =
            u32::try_from(self.quantity).map_err(|_| InvalidJobError::QuantityTooLarge {
                job_number: JobNumber(job_number.clone()),
                quantity: self.quantity,
            })?;

        if !self.estimated_hours.is_finite() || self.estimated_hours < 0.0 {
            return Err(InvalidJobError::EstimatedHours {
                job_number: JobNumber(job_number),
                hours: self.estimated_hours,
            });
        }

        // Zero stages carries the same meaning as an absent count.
        let stages = match self.stages {
            None | Some(0) => None,
            Some(count) if count < 0 => {
                return Err(InvalidJobError::Stages {
                    job_number: JobNumber(job_number),
                    stages: count,
                });
            }
            Some(count) => Some(u32::try_from(count).map_err(|_| {
                InvalidJobError::StagesTooLarge {
                    job_number: JobNumber(job_number.clone()),
                    stages: count,
                }
            })?),
        };

        Ok(Job {
            job_number: JobNumber(job_number),
            department: self.department.trim().to_string(),
            operation: self.operation,
            complete: self.complete,
            quantity,
            estimated_hours: self.estimated_hours,
            stages,
        })
    }
}

/// Validated work order ready for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JobRecord")]
pub struct Job {
    pub job_number: JobNumber,
    pub department: String,
    pub operation: String,
    pub complete: bool,
    pub quantity: u32,
    pub estimated_hours: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<u32>,
}

impl Job {
    pub fn is_multi_stage(&self) -> bool {
        self.stages.is_some()
    }
}

impl TryFrom<JobRecord> for Job {
    type Error = InvalidJobError;

    fn try_from(record: JobRecord) -> Result<Self, Self::Error> {
        record.validate()
    }
}

/// Structural problems that prevent a job record from being scored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidJobError {
    #[error("job number must not be empty")]
    EmptyJobNumber,
    #[error("job {job_number}: quantity must be at least 1 (got {quantity})")]
    Quantity { job_number: JobNumber, quantity: i64 },
    #[error("job {job_number}: quantity {quantity} exceeds the supported maximum")]
    QuantityTooLarge { job_number: JobNumber, quantity: i64 },
    #[error("job {job_number}: estimated hours must be a non-negative number (got {hours})")]
    EstimatedHours { job_number: JobNumber, hours: f64 },
    #[error("job {job_number}: stage count must not be negative (got {stages})")]
    Stages { job_number: JobNumber, stages: i64 },
    #[error("job {job_number}: stage count {stages} exceeds the supported maximum")]
    StagesTooLarge { job_number: JobNumber, stages: i64 },
}

impl InvalidJobError {
    pub fn job_number(&self) -> Option<&JobNumber> {
        match self {
            InvalidJobError::EmptyJobNumber => None,
            InvalidJobError::Quantity { job_number, .. }
            | InvalidJobError::QuantityTooLarge { job_number, .. }
            | InvalidJobError::EstimatedHours { job_number, .. }
            | InvalidJobError::Stages { job_number, .. }
            | InvalidJobError::StagesTooLarge { job_number, .. } => Some(job_number),
        }
    }
}

/// Job record that failed validation, kept so callers can flag or skip it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_number: Option<JobNumber>,
    pub reason: String,
}

impl From<&InvalidJobError> for RejectedJob {
    fn from(error: &InvalidJobError) -> Self {
        Self {
            job_number: error.job_number().cloned(),
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> JobRecord {
        JobRecord {
            job_number: "8624796".to_string(),
            department: "0042".to_string(),
            operation: "Saw - Magnet Cut Hand".to_string(),
            complete: true,
            quantity: 3,
            estimated_hours: 0.3,
            stages: None,
        }
    }

    #[test]
    fn validate_accepts_well_formed_record() {
        let job = record().validate().expect("valid job");
        assert_eq!(job.job_number.as_str(), "8624796");
        assert_eq!(job.quantity, 3);
        assert!(!job.is_multi_stage());
    }

    #[test]
    fn validate_rejects_empty_job_number() {
        let mut record = record();
        record.job_number = "   ".to_string();
        assert_eq!(record.validate(), Err(InvalidJobError::EmptyJobNumber));
    }

    #[test]
    fn validate_rejects_negative_quantity_and_hours() {
        let mut negative_quantity = record();
        negative_quantity.quantity = -2;
        match negative_quantity.validate() {
            Err(InvalidJobError::Quantity { quantity, .. }) => assert_eq!(quantity, -2),
            other => panic!("expected quantity error, got {other:?}"),
        }

        let mut negative_hours = record();
        negative_hours.estimated_hours = -0.5;
        let error = negative_hours.validate().expect_err("negative hours rejected");
        assert!(matches!(error, InvalidJobError::EstimatedHours { .. }));
        assert_eq!(error.job_number().map(JobNumber::as_str), Some("8624796"));
    }

    #[test]
    fn validate_reports_oversized_quantity_separately() {
        let mut record = record();
        record.quantity = 5_000_000_000;
        let error = record.validate().expect_err("oversized quantity rejected");
        assert!(matches!(
            error,
            InvalidJobError::QuantityTooLarge {
                quantity: 5_000_000_000,
                ..
            }
        ));
        assert_eq!(
            error.to_string(),
            "job 8624796: quantity 5000000000 exceeds the supported maximum"
        );
    }

    #[test]
    fn validate_separates_negative_and_oversized_stage_counts() {
        let mut negative = record();
        negative.stages = Some(-1);
        assert!(matches!(
            negative.validate(),
            Err(InvalidJobError::Stages { stages: -1, .. })
        ));

        let mut oversized = record();
        oversized.stages = Some(i64::from(u32::MAX) + 1);
        assert!(matches!(
            oversized.validate(),
            Err(InvalidJobError::StagesTooLarge { .. })
        ));
    }

    #[test]
    fn validate_treats_zero_stages_as_single_stage() {
        let mut record = record();
        record.stages = Some(0);
        let job = record.validate().expect("valid job");
        assert_eq!(job.stages, None);
    }

    #[test]
    fn job_deserialization_runs_validation() {
        let payload = r#"{"job_number":"8627125","department":"0043","operation":"Assembly - Heavy","quantity":0,"estimated_hours":0.0}"#;
        let error = serde_json::from_str::<Job>(payload).expect_err("zero quantity rejected");
        assert!(error.to_string().contains("quantity must be at least 1"));
    }
}
