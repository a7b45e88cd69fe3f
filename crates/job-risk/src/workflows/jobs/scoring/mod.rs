mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use policy::{Recommendation, RiskBand};
pub use rules::{MAX_CONFIDENCE, MAX_RISK_SCORE, MIN_CONFIDENCE};

pub(crate) use rules::round_to;

use super::domain::{Job, JobNumber};
use super::reference::ReferenceData;
use policy::decide_recommendation;
use serde::Serialize;

/// Stateless scorer that applies the model coefficients to one job at a time.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, job: &Job, reference: &ReferenceData) -> ScoredJob {
        let pattern = reference.operation_pattern(&job.operation);
        let department_multiplier = reference.department_multiplier(&job.department);

        let signals = rules::derive_signals(job, pattern, department_multiplier, &self.config);
        let risk_score = rules::risk_score(signals.predicted_incidents);
        let confidence = rules::confidence(signals.complexity_score, &self.config);
        let recommendation = decide_recommendation(risk_score, &self.config);

        ScoredJob {
            job: job.clone(),
            predicted_incidents: round_to(signals.predicted_incidents, 2),
            risk_score,
            confidence,
            base_probability: round_to(signals.base_probability, 3),
            complexity_score: signals.complexity_score,
            department_multiplier: signals.department_multiplier,
            stage_risk: signals.stage_risk,
            recurring_risks: pattern.risks.clone(),
            recommendation,
        }
    }
}

/// Scores `job` with the default model coefficients.
pub fn score_job(job: &Job, reference: &ReferenceData) -> ScoredJob {
    ScoringEngine::default().score(job, reference)
}

/// A job annotated with its predicted change-request exposure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: Job,
    pub predicted_incidents: f64,
    pub risk_score: u8,
    pub confidence: u8,
    pub base_probability: f64,
    pub complexity_score: u32,
    pub department_multiplier: f64,
    pub stage_risk: f64,
    pub recurring_risks: Vec<String>,
    pub recommendation: Recommendation,
}

impl ScoredJob {
    pub fn job_number(&self) -> &JobNumber {
        &self.job.job_number
    }

    pub fn primary_risk(&self) -> Option<&str> {
        self.recurring_risks.first().map(String::as_str)
    }

    pub fn secondary_risk(&self) -> Option<&str> {
        self.recurring_risks.get(1).map(String::as_str)
    }

    pub fn band(&self) -> RiskBand {
        RiskBand::from_score(self.risk_score)
    }
}
