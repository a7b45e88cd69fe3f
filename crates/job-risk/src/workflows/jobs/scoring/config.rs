use serde::{Deserialize, Serialize};

/// Coefficients of the change-request prediction model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub complexity_weight: f64,
    pub stage_weight: f64,
    pub stage_risk_cap: f64,
    pub bulk_quantity_threshold: u32,
    pub bulk_quantity_increment: u32,
    pub long_routing_threshold: u32,
    pub long_routing_increment: u32,
    pub extended_hours_threshold: f64,
    pub extended_hours_increment: u32,
    pub confidence_penalty: f64,
    pub high_risk_threshold: u8,
    pub medium_risk_threshold: u8,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            complexity_weight: 0.03,
            stage_weight: 0.05,
            stage_risk_cap: 0.25,
            bulk_quantity_threshold: 3,
            bulk_quantity_increment: 2,
            long_routing_threshold: 8,
            long_routing_increment: 1,
            extended_hours_threshold: 1.0,
            extended_hours_increment: 1,
            confidence_penalty: 2.0,
            high_risk_threshold: 60,
            medium_risk_threshold: 35,
        }
    }
}
