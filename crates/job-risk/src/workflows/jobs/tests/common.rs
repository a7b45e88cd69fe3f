use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::jobs::domain::{Job, JobRecord};
use crate::workflows::jobs::reference::{ReferenceData, ReferenceHandle};
use crate::workflows::jobs::report::CostModel;
use crate::workflows::jobs::router::risk_router;
use crate::workflows::jobs::scoring::ScoringEngine;
use crate::workflows::jobs::service::JobRiskService;

pub(super) fn record(
    job_number: &str,
    department: &str,
    operation: &str,
    quantity: i64,
    estimated_hours: f64,
    stages: Option<i64>,
) -> JobRecord {
    JobRecord {
        job_number: job_number.to_string(),
        department: department.to_string(),
        operation: operation.to_string(),
        complete: true,
        quantity,
        estimated_hours,
        stages,
    }
}

pub(super) fn job(
    job_number: &str,
    department: &str,
    operation: &str,
    quantity: i64,
    estimated_hours: f64,
    stages: Option<i64>,
) -> Job {
    record(
        job_number,
        department,
        operation,
        quantity,
        estimated_hours,
        stages,
    )
    .validate()
    .expect("valid job")
}

/// The six work orders shown on the shop-floor risk dashboard.
pub(super) fn dashboard_records() -> Vec<JobRecord> {
    vec![
        record("8624796", "0042", "Saw - Magnet Cut Hand", 3, 0.30, None),
        record("8624797", "0042", "Saw - Magnet Cut Hand", 3, 0.30, None),
        record("8625370", "0043", "Assembly - Heavy", 1, 0.25, None),
        record("8627039-500", "0045", "Deburr/Finish - Sandblast", 5, 0.94, None),
        record("8627125", "0043", "Assembly - Heavy", 1, 0.00, Some(11)),
        record("9396522-1-2", "0041", "Lathe/Saw Operations", 1, 0.75, None),
    ]
}

pub(super) fn dashboard_jobs() -> Vec<Job> {
    dashboard_records()
        .into_iter()
        .map(|record| record.validate().expect("valid job"))
        .collect()
}

pub(super) fn reference() -> ReferenceData {
    ReferenceData::standard()
}

pub(super) fn service() -> JobRiskService {
    JobRiskService::new(
        ReferenceHandle::default(),
        ScoringEngine::default(),
        CostModel::default(),
    )
}

pub(super) fn router_with_service(service: JobRiskService) -> axum::Router {
    risk_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
