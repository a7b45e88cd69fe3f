use super::{DepartmentEntry, OperationEntry, OperationPattern, ReferenceDocument};

pub(super) fn document() -> ReferenceDocument {
    ReferenceDocument {
        operations: standard_operations(),
        departments: standard_departments(),
        fallback: Some(OperationPattern::fallback()),
    }
}

fn standard_operations() -> Vec<OperationEntry> {
    vec![
        operation(
            "Saw - Magnet Cut Hand",
            0.08,
            2,
            &["Dimension accuracy", "Cut edge finish"],
        ),
        operation(
            "Assembly - Heavy",
            0.35,
            8,
            &["Fitment", "Hardware mismatch", "Clearance"],
        ),
        operation(
            "Deburr/Finish - Sandblast",
            0.14,
            3,
            &["Finish consistency", "Masking damage"],
        ),
        operation(
            "Lathe/Saw Operations",
            0.18,
            4,
            &["Tolerance stack", "Surface finish"],
        ),
    ]
}

fn standard_departments() -> Vec<DepartmentEntry> {
    [
        ("0041", 1.3),
        ("0042", 0.9),
        ("0043", 1.8),
        ("0044", 0.7),
        ("0045", 1.1),
    ]
    .into_iter()
    .map(|(code, multiplier)| DepartmentEntry {
        code: code.to_string(),
        multiplier,
    })
    .collect()
}

fn operation(
    description: &str,
    incident_rate: f64,
    complexity: u32,
    risks: &[&str],
) -> OperationEntry {
    OperationEntry {
        description: description.to_string(),
        pattern: OperationPattern {
            incident_rate,
            complexity,
            risks: risks.iter().map(|risk| risk.to_string()).collect(),
        },
    }
}
