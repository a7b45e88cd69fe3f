/// Canonical form used to match operation descriptions against reference data.
pub(crate) fn normalize_operation(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_lowercase()
}

pub(crate) fn normalize_department(value: &str) -> String {
    value.trim().to_string()
}
