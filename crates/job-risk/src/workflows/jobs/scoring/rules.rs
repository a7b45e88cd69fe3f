use super::super::domain::Job;
use super::super::reference::OperationPattern;
use super::config::ScoringConfig;

/// Highest risk score the model will report.
pub const MAX_RISK_SCORE: u8 = 95;
pub const MIN_CONFIDENCE: u8 = 65;
pub const MAX_CONFIDENCE: u8 = 95;

pub(crate) struct ScoreSignals {
    pub base_probability: f64,
    pub complexity_score: u32,
    pub stage_risk: f64,
    pub department_multiplier: f64,
    pub predicted_incidents: f64,
}

pub(crate) fn derive_signals(
    job: &Job,
    pattern: &OperationPattern,
    department_multiplier: f64,
    config: &ScoringConfig,
) -> ScoreSignals {
    let base_probability = pattern.incident_rate;

    let mut complexity_score = pattern.complexity;
    if job.quantity > config.bulk_quantity_threshold {
        complexity_score = complexity_score.saturating_add(config.bulk_quantity_increment);
    }
    if job
        .stages
        .is_some_and(|stages| stages > config.long_routing_threshold)
    {
        complexity_score = complexity_score.saturating_add(config.long_routing_increment);
    }
    if job.estimated_hours > config.extended_hours_threshold {
        complexity_score = complexity_score.saturating_add(config.extended_hours_increment);
    }

    let stage_risk = job
        .stages
        .map(|stages| (f64::from(stages) * config.stage_weight).min(config.stage_risk_cap))
        .unwrap_or(0.0);

    let predicted_incidents = (base_probability
        + f64::from(complexity_score) * config.complexity_weight
        + stage_risk)
        * department_multiplier;

    ScoreSignals {
        base_probability,
        complexity_score,
        stage_risk,
        department_multiplier,
        predicted_incidents,
    }
}

/// Risk on a 0-95 scale, derived from the unrounded incident prediction.
pub(crate) fn risk_score(predicted_incidents: f64) -> u8 {
    let scaled = (predicted_incidents * 100.0).round();
    scaled.clamp(0.0, f64::from(MAX_RISK_SCORE)) as u8
}

pub(crate) fn confidence(complexity_score: u32, config: &ScoringConfig) -> u8 {
    let raw = (f64::from(MAX_CONFIDENCE) - f64::from(complexity_score) * config.confidence_penalty)
        .round();
    raw.clamp(f64::from(MIN_CONFIDENCE), f64::from(MAX_CONFIDENCE)) as u8
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}
