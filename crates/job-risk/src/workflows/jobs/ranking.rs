use super::domain::Job;
use super::reference::ReferenceData;
use super::scoring::{ScoredJob, ScoringEngine};
use std::cmp::Reverse;
use tracing::debug;

impl ScoringEngine {
    /// Scores every job and orders the batch from highest to lowest risk.
    ///
    /// Jobs with equal risk scores keep their input order.
    pub fn rank(&self, jobs: &[Job], reference: &ReferenceData) -> Vec<ScoredJob> {
        let mut scored: Vec<ScoredJob> = jobs
            .iter()
            .map(|job| self.score(job, reference))
            .collect();

        // `sort_by_key` is a stable sort.
        scored.sort_by_key(|job| Reverse(job.risk_score));

        debug!(
            jobs = scored.len(),
            top_score = scored.first().map(|job| job.risk_score),
            "ranked job batch"
        );
        scored
    }
}

/// Ranks `jobs` with the default model coefficients.
pub fn rank_jobs(jobs: &[Job], reference: &ReferenceData) -> Vec<ScoredJob> {
    ScoringEngine::default().rank(jobs, reference)
}
