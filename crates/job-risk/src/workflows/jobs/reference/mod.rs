//! Historical operation patterns and department multipliers consulted by the
//! scoring engine.
//!
//! Lookups never fail: unknown operations resolve to the fallback pattern and
//! unknown departments to a neutral multiplier. Tables are immutable once
//! built; [`ReferenceHandle`] swaps whole tables between scoring passes.

mod handle;
mod standard;

pub use handle::ReferenceHandle;

use super::normalizer::{normalize_department, normalize_operation};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Multiplier applied when a department has no recorded history.
pub const NEUTRAL_DEPARTMENT_MULTIPLIER: f64 = 1.0;

/// Historical change-request behavior for one operation type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationPattern {
    pub incident_rate: f64,
    pub complexity: u32,
    pub risks: Vec<String>,
}

impl OperationPattern {
    /// Pattern applied to operations with no recorded history.
    pub fn fallback() -> Self {
        Self {
            incident_rate: 0.15,
            complexity: 3,
            risks: vec!["Generic risk".to_string()],
        }
    }

    pub fn primary_risk(&self) -> Option<&str> {
        self.risks.first().map(String::as_str)
    }

    fn validate(&self, subject: &str) -> Result<(), ReferenceDataError> {
        if !(0.0..=1.0).contains(&self.incident_rate) {
            return Err(ReferenceDataError::IncidentRate {
                operation: subject.to_string(),
                rate: self.incident_rate,
            });
        }
        if self.risks.iter().all(|risk| risk.trim().is_empty()) {
            return Err(ReferenceDataError::MissingRisks {
                operation: subject.to_string(),
            });
        }
        Ok(())
    }
}

/// Serialized form of an operation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationEntry {
    pub description: String,
    #[serde(flatten)]
    pub pattern: OperationPattern,
}

/// Serialized form of a department entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentEntry {
    pub code: String,
    pub multiplier: f64,
}

/// Interchange document used to load or publish reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceDocument {
    #[serde(default)]
    pub operations: Vec<OperationEntry>,
    #[serde(default)]
    pub departments: Vec<DepartmentEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<OperationPattern>,
}

#[derive(Debug, thiserror::Error)]
pub enum ReferenceDataError {
    #[error("failed to read reference data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid reference data document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("operation '{operation}' has incident rate {rate}; expected a value between 0 and 1")]
    IncidentRate { operation: String, rate: f64 },
    #[error("operation '{operation}' must list at least one recurring risk")]
    MissingRisks { operation: String },
    #[error("department '{code}' has multiplier {multiplier}; expected a positive number")]
    Multiplier { code: String, multiplier: f64 },
    #[error("duplicate operation description '{0}'")]
    DuplicateOperation(String),
    #[error("duplicate department code '{0}'")]
    DuplicateDepartment(String),
}

/// Read-only lookup tables for one scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    operations: BTreeMap<String, OperationEntry>,
    departments: BTreeMap<String, DepartmentEntry>,
    fallback: OperationPattern,
}

impl ReferenceData {
    /// Historical tables gathered from the shop's change-request log.
    pub fn standard() -> Self {
        let document = standard::document();
        Self::assemble(
            document.operations,
            document.departments,
            document.fallback.unwrap_or_else(OperationPattern::fallback),
        )
    }

    /// Tables with no history at all; every lookup resolves to its default.
    pub fn empty() -> Self {
        Self {
            operations: BTreeMap::new(),
            departments: BTreeMap::new(),
            fallback: OperationPattern::fallback(),
        }
    }

    pub fn from_document(document: ReferenceDocument) -> Result<Self, ReferenceDataError> {
        let ReferenceDocument {
            operations: operation_entries,
            departments: department_entries,
            fallback,
        } = document;

        let fallback = fallback.unwrap_or_else(OperationPattern::fallback);
        fallback.validate("fallback")?;

        let mut operation_keys = BTreeSet::new();
        for entry in &operation_entries {
            entry.pattern.validate(&entry.description)?;
            if !operation_keys.insert(normalize_operation(&entry.description)) {
                return Err(ReferenceDataError::DuplicateOperation(entry.description.clone()));
            }
        }

        let mut department_keys = BTreeSet::new();
        for entry in &department_entries {
            if !entry.multiplier.is_finite() || entry.multiplier <= 0.0 {
                return Err(ReferenceDataError::Multiplier {
                    code: entry.code.clone(),
                    multiplier: entry.multiplier,
                });
            }
            if !department_keys.insert(normalize_department(&entry.code)) {
                return Err(ReferenceDataError::DuplicateDepartment(entry.code.clone()));
            }
        }

        Ok(Self::assemble(operation_entries, department_entries, fallback))
    }

    fn assemble(
        operations: Vec<OperationEntry>,
        departments: Vec<DepartmentEntry>,
        fallback: OperationPattern,
    ) -> Self {
        Self {
            operations: operations
                .into_iter()
                .map(|entry| (normalize_operation(&entry.description), entry))
                .collect(),
            departments: departments
                .into_iter()
                .map(|entry| (normalize_department(&entry.code), entry))
                .collect(),
            fallback,
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ReferenceDataError> {
        let document: ReferenceDocument = serde_json::from_reader(reader)?;
        Self::from_document(document)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ReferenceDataError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file))
    }

    pub fn to_document(&self) -> ReferenceDocument {
        ReferenceDocument {
            operations: self.operations.values().cloned().collect(),
            departments: self.departments.values().cloned().collect(),
            fallback: Some(self.fallback.clone()),
        }
    }

    /// Pattern recorded for `operation`, or the fallback pattern.
    pub fn operation_pattern(&self, operation: &str) -> &OperationPattern {
        match self.operations.get(&normalize_operation(operation)) {
            Some(entry) => &entry.pattern,
            None => {
                debug!(operation, "no operation history recorded; using fallback pattern");
                &self.fallback
            }
        }
    }

    /// Multiplier recorded for `department`, or the neutral multiplier.
    pub fn department_multiplier(&self, department: &str) -> f64 {
        self.departments
            .get(&normalize_department(department))
            .map(|entry| entry.multiplier)
            .unwrap_or(NEUTRAL_DEPARTMENT_MULTIPLIER)
    }

    pub fn fallback_pattern(&self) -> &OperationPattern {
        &self.fallback
    }

    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }

    pub fn department_count(&self) -> usize {
        self.departments.len()
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::standard()
    }
}
