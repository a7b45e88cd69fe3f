use super::super::domain::{JobNumber, RejectedJob};
use super::super::explain::RiskFactor;
use super::super::scoring::{RiskBand, ScoredJob};
use super::summary::AggregateStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoredJobView {
    #[serde(flatten)]
    pub scored: ScoredJob,
    pub recommendation_label: &'static str,
    pub band: RiskBand,
    pub band_label: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub factors: Vec<RiskFactor>,
}

impl ScoredJobView {
    pub fn new(scored: ScoredJob) -> Self {
        let band = scored.band();
        Self {
            recommendation_label: scored.recommendation.label(),
            band,
            band_label: band.label(),
            factors: Vec::new(),
            scored,
        }
    }

    pub fn with_factors(mut self, factors: Vec<RiskFactor>) -> Self {
        self.factors = factors;
        self
    }
}

/// Pre-release verification task for a high-risk job.
#[derive(Debug, Clone, Serialize)]
pub struct PreflightActionItem {
    pub position: usize,
    pub job_number: JobNumber,
    pub risk_score: u8,
    pub primary_risk: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_risk: Option<String>,
    pub instruction: String,
}

/// One point of the complexity-versus-risk scatter.
#[derive(Debug, Clone, Serialize)]
pub struct LandscapePoint {
    pub label: String,
    pub complexity: u32,
    pub risk_score: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct BandCount {
    pub band: RiskBand,
    pub band_label: &'static str,
    pub jobs: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskInsights {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub action_items: Vec<PreflightActionItem>,
    pub landscape: Vec<LandscapePoint>,
    pub band_counts: Vec<BandCount>,
}

/// Everything a dashboard needs to render one scored batch.
#[derive(Debug, Clone, Serialize)]
pub struct BatchAssessment {
    pub ranked: Vec<ScoredJobView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rejected: Vec<RejectedJob>,
    pub summary: AggregateStats,
    pub insights: RiskInsights,
}
