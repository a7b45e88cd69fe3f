use super::domain::{InvalidJobError, Job, JobRecord, RejectedJob};
use super::explain::{explain, RiskFactor};
use super::reference::{ReferenceData, ReferenceDataError, ReferenceDocument, ReferenceHandle};
use super::report::views::{BatchAssessment, ScoredJobView};
use super::report::{generate_insights, CostModel};
use super::scoring::{ScoredJob, ScoringEngine};
use tracing::{debug, warn};

/// Service composing the reference tables, scoring engine, and cost model.
#[derive(Debug, Clone)]
pub struct JobRiskService {
    reference: ReferenceHandle,
    engine: ScoringEngine,
    costs: CostModel,
}

impl JobRiskService {
    pub fn new(reference: ReferenceHandle, engine: ScoringEngine, costs: CostModel) -> Self {
        Self {
            reference,
            engine,
            costs,
        }
    }

    pub fn reference(&self) -> &ReferenceHandle {
        &self.reference
    }

    pub fn costs(&self) -> &CostModel {
        &self.costs
    }

    pub fn score(&self, record: JobRecord) -> Result<ScoredJob, InvalidJobError> {
        let job = record.validate()?;
        Ok(self.engine.score(&job, &self.reference.snapshot()))
    }

    pub fn explain(
        &self,
        record: JobRecord,
    ) -> Result<(ScoredJob, Vec<RiskFactor>), InvalidJobError> {
        let scored = self.score(record)?;
        let factors = explain(&scored);
        Ok((scored, factors))
    }

    /// Validates, scores, and ranks a batch; invalid records are reported, not fatal.
    pub fn assess(&self, records: Vec<JobRecord>) -> BatchAssessment {
        let mut jobs = Vec::with_capacity(records.len());
        let mut rejected = Vec::new();
        for record in records {
            match record.validate() {
                Ok(job) => jobs.push(job),
                Err(error) => {
                    warn!(%error, "rejected job record");
                    rejected.push(error);
                }
            }
        }

        self.assess_jobs(&jobs, &rejected)
    }

    pub fn assess_jobs(&self, jobs: &[Job], rejected: &[InvalidJobError]) -> BatchAssessment {
        let reference = self.reference.snapshot();
        let ranked = self.engine.rank(jobs, &reference);
        let summary = self.costs.summarize(&ranked);
        let insights = generate_insights(&ranked);

        debug!(
            scored = ranked.len(),
            rejected = rejected.len(),
            high_risk = summary.high_risk_count,
            "assessed job batch"
        );

        BatchAssessment {
            ranked: ranked.into_iter().map(ScoredJobView::new).collect(),
            rejected: rejected.iter().map(RejectedJob::from).collect(),
            summary,
            insights,
        }
    }

    pub fn replace_reference(
        &self,
        document: ReferenceDocument,
    ) -> Result<(), ReferenceDataError> {
        let data = ReferenceData::from_document(document)?;
        self.reference.replace(data);
        Ok(())
    }
}

impl Default for JobRiskService {
    fn default() -> Self {
        Self::new(
            ReferenceHandle::default(),
            ScoringEngine::default(),
            CostModel::default(),
        )
    }
}
