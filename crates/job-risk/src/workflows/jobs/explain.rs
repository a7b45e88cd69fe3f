//! Breaks a scored job into bounded sub-factors for proportional-bar display.
//!
//! The factors only describe a score; nothing here feeds back into
//! [`ScoringEngine`](super::scoring::ScoringEngine).

use super::scoring::ScoredJob;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorKind {
    OperationType,
    Complexity,
    DepartmentRisk,
    MultiStageOps,
}

impl RiskFactorKind {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::OperationType,
            Self::Complexity,
            Self::DepartmentRisk,
            Self::MultiStageOps,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::OperationType => "Operation Type",
            Self::Complexity => "Complexity",
            Self::DepartmentRisk => "Department Risk",
            Self::MultiStageOps => "Multi-Stage Ops",
        }
    }

    pub const fn max(self) -> u32 {
        match self {
            Self::OperationType => 35,
            Self::Complexity => 40,
            Self::DepartmentRisk => 40,
            Self::MultiStageOps => 30,
        }
    }
}

/// One explained contribution, clamped to `0..=max`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskFactor {
    pub kind: RiskFactorKind,
    pub label: &'static str,
    pub value: u32,
    pub max: u32,
    /// Value before clamping; negative when a department lowers risk.
    pub raw_value: i64,
}

impl RiskFactor {
    fn new(kind: RiskFactorKind, raw_value: i64) -> Self {
        let max = kind.max();
        Self {
            kind,
            label: kind.label(),
            value: raw_value.clamp(0, i64::from(max)) as u32,
            max,
            raw_value,
        }
    }

    /// Share of the bar to fill, between 0.0 and 1.0.
    pub fn fill_ratio(&self) -> f64 {
        f64::from(self.value) / f64::from(self.max)
    }

    pub fn is_clamped(&self) -> bool {
        i64::from(self.value) != self.raw_value
    }
}

pub fn explain(scored: &ScoredJob) -> Vec<RiskFactor> {
    RiskFactorKind::ordered()
        .into_iter()
        .map(|kind| RiskFactor::new(kind, raw_factor(kind, scored)))
        .collect()
}

fn raw_factor(kind: RiskFactorKind, scored: &ScoredJob) -> i64 {
    match kind {
        RiskFactorKind::OperationType => (scored.base_probability * 100.0).round() as i64,
        RiskFactorKind::Complexity => {
            (f64::from(scored.complexity_score) * 10.0).round().min(40.0) as i64
        }
        RiskFactorKind::DepartmentRisk => {
            ((scored.department_multiplier - 1.0) * 50.0).round() as i64
        }
        RiskFactorKind::MultiStageOps => match scored.job.stages {
            Some(stages) => (f64::from(stages) * 5.0).min(30.0).round() as i64,
            None => 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::jobs::domain::JobRecord;
    use crate::workflows::jobs::reference::{
        DepartmentEntry, ReferenceData, ReferenceDocument,
    };
    use crate::workflows::jobs::scoring::score_job;

    fn scored(department: &str, operation: &str, stages: Option<i64>) -> ScoredJob {
        let job = JobRecord {
            job_number: "8627125".to_string(),
            department: department.to_string(),
            operation: operation.to_string(),
            complete: true,
            quantity: 1,
            estimated_hours: 0.0,
            stages,
        }
        .validate()
        .expect("valid job");
        score_job(&job, &ReferenceData::standard())
    }

    #[test]
    fn explains_multi_stage_heavy_assembly() {
        let factors = explain(&scored("0043", "Assembly - Heavy", Some(11)));
        let values: Vec<(&str, u32, u32)> = factors
            .iter()
            .map(|factor| (factor.label, factor.value, factor.max))
            .collect();

        assert_eq!(
            values,
            vec![
                ("Operation Type", 35, 35),
                ("Complexity", 40, 40),
                ("Department Risk", 40, 40),
                ("Multi-Stage Ops", 30, 30),
            ]
        );
    }

    #[test]
    fn operation_type_below_max_is_not_clamped() {
        let factors = explain(&scored("0042", "Saw - Magnet Cut Hand", None));
        assert_eq!(factors[0].value, 8);
        assert_eq!(factors[1].value, 20);
        assert!(!factors[0].is_clamped());
        assert_eq!(factors[3].value, 0);
    }

    #[test]
    fn department_factor_is_clamped_to_declared_range() {
        let low = explain(&scored("0042", "Saw - Magnet Cut Hand", None));
        assert_eq!(low[2].raw_value, -5);
        assert_eq!(low[2].value, 0);
        assert!(low[2].is_clamped());

        let reference = ReferenceData::from_document(ReferenceDocument {
            operations: Vec::new(),
            departments: vec![DepartmentEntry {
                code: "0099".to_string(),
                multiplier: 2.6,
            }],
            fallback: None,
        })
        .expect("reference builds");
        let job = JobRecord {
            job_number: "hot".to_string(),
            department: "0099".to_string(),
            operation: "Anything".to_string(),
            complete: false,
            quantity: 1,
            estimated_hours: 0.0,
            stages: None,
        }
        .validate()
        .expect("valid job");
        let factors = explain(&score_job(&job, &reference));
        assert_eq!(factors[2].raw_value, 80);
        assert_eq!(factors[2].value, 40);
        assert!(factors.iter().all(|factor| factor.value <= factor.max));
        assert!(factors.iter().all(|factor| factor.fill_ratio() <= 1.0));
    }
}
