//! Change-request risk scoring for manufacturing work orders.
//!
//! Reference data feeds the scoring engine, which the ranker applies across a
//! batch; the aggregator and explainer consume the scored output. Every stage
//! is a pure transformation over immutable inputs.

pub mod domain;
pub mod explain;
pub mod import;
mod normalizer;
mod ranking;
pub mod reference;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{InvalidJobError, Job, JobNumber, JobRecord, RejectedJob};
pub use explain::{explain, RiskFactor, RiskFactorKind};
pub use import::{JobCsvImporter, JobImport, JobImportError};
pub use ranking::rank_jobs;
pub use reference::{
    DepartmentEntry, OperationEntry, OperationPattern, ReferenceData, ReferenceDataError,
    ReferenceDocument, ReferenceHandle,
};
pub use report::{summarize, AggregateStats, CostModel};
pub use router::risk_router;
pub use scoring::{score_job, Recommendation, RiskBand, ScoredJob, ScoringConfig, ScoringEngine};
pub use service::JobRiskService;
