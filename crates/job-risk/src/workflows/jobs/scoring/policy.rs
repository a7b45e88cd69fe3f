use super::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Review action recommended for a scored job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    HighRisk,
    MediumRisk,
    LowRisk,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighRisk => "HIGH RISK — pre-flight review required",
            Self::MediumRisk => "MEDIUM RISK — engineering review suggested",
            Self::LowRisk => "LOW RISK — standard processing",
        }
    }
}

/// Display severity used when colouring scores on dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Elevated,
    High,
}

impl RiskBand {
    /// Scores at or above this value count as high risk in batch summaries.
    pub const HIGH_THRESHOLD: u8 = 70;
    pub const ELEVATED_THRESHOLD: u8 = 45;

    pub const fn from_score(score: u8) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::ELEVATED_THRESHOLD {
            Self::Elevated
        } else {
            Self::Low
        }
    }

    pub const fn ordered() -> [Self; 3] {
        [Self::High, Self::Elevated, Self::Low]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Elevated => "Elevated",
            Self::Low => "Low",
        }
    }
}

pub(crate) fn decide_recommendation(risk_score: u8, config: &ScoringConfig) -> Recommendation {
    if risk_score > config.high_risk_threshold {
        Recommendation::HighRisk
    } else if risk_score > config.medium_risk_threshold {
        Recommendation::MediumRisk
    } else {
        Recommendation::LowRisk
    }
}
