use super::super::domain::JobRecord;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<JobRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<JobRow>() {
        records.push(record?.into_record());
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct JobRow {
    #[serde(rename = "Job Number")]
    job_number: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Operation")]
    operation: String,
    #[serde(rename = "Complete", default, deserialize_with = "completion_flag")]
    complete: bool,
    #[serde(rename = "Quantity")]
    quantity: i64,
    #[serde(rename = "Est Hours")]
    estimated_hours: f64,
    #[serde(rename = "Stages", default)]
    stages: Option<i64>,
}

impl JobRow {
    fn into_record(self) -> JobRecord {
        JobRecord {
            job_number: self.job_number,
            department: self.department,
            operation: self.operation,
            complete: self.complete,
            quantity: self.quantity,
            estimated_hours: self.estimated_hours,
            stages: self.stages,
        }
    }
}

fn completion_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(false),
        Some(value) => parse_flag(value).ok_or_else(|| {
            serde::de::Error::custom(format!("unrecognized completion flag '{value}'"))
        }),
    }
}

pub(super) fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}
