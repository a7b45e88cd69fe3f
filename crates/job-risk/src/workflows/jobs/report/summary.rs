use super::super::scoring::{round_to, RiskBand, ScoredJob};
use serde::{Deserialize, Serialize};

/// Rework cost assumptions used to price predicted change requests.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    pub hours_per_incident: f64,
    pub hourly_rate: f64,
}

impl CostModel {
    pub const DEFAULT_HOURS_PER_INCIDENT: f64 = 45.0;
    pub const DEFAULT_HOURLY_RATE: f64 = 85.0;

    pub fn cost_per_incident(&self) -> f64 {
        self.hours_per_incident * self.hourly_rate
    }

    pub fn summarize(&self, scored: &[ScoredJob]) -> AggregateStats {
        let job_count = scored.len();
        let risk_total: u64 = scored.iter().map(|job| u64::from(job.risk_score)).sum();
        let average_risk_score = if job_count == 0 {
            None
        } else {
            Some((risk_total as f64 / job_count as f64).round() as u8)
        };

        let high_risk_count = scored
            .iter()
            .filter(|job| job.band() == RiskBand::High)
            .count();

        let predicted_total: f64 = scored.iter().map(|job| job.predicted_incidents).sum();
        let estimated_cost = (predicted_total * self.cost_per_incident()).round();

        AggregateStats {
            job_count,
            average_risk_score,
            high_risk_count,
            total_predicted_incidents: round_to(predicted_total, 1),
            estimated_cost,
        }
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            hours_per_incident: Self::DEFAULT_HOURS_PER_INCIDENT,
            hourly_rate: Self::DEFAULT_HOURLY_RATE,
        }
    }
}

/// Batch-level totals shown above a ranked job list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub job_count: usize,
    /// Rounded mean risk score; absent for an empty batch.
    pub average_risk_score: Option<u8>,
    pub high_risk_count: usize,
    pub total_predicted_incidents: f64,
    pub estimated_cost: f64,
}

/// Summarizes a scored batch with the default cost model.
pub fn summarize(scored: &[ScoredJob]) -> AggregateStats {
    CostModel::default().summarize(scored)
}
