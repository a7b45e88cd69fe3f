use crate::infra::AppState;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use job_risk::error::AppError;
use job_risk::workflows::jobs::report::views::BatchAssessment;
use job_risk::workflows::jobs::{risk_router, JobCsvImporter, JobRiskService};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct JobImportRequest {
    /// Raw CSV export from the job-tracking system, header row included.
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct JobImportResponse {
    pub(crate) generated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub(crate) assessment: BatchAssessment,
}

pub(crate) fn with_risk_routes(service: Arc<JobRiskService>) -> Router {
    let import_routes = Router::new()
        .route(
            "/api/v1/jobs/import",
            axum::routing::post(job_import_endpoint),
        )
        .with_state(Arc::clone(&service));

    risk_router(service)
        .merge(import_routes)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn job_import_endpoint(
    State(service): State<Arc<JobRiskService>>,
    Json(payload): Json<JobImportRequest>,
) -> Result<Json<JobImportResponse>, AppError> {
    let import = JobCsvImporter::from_reader(Cursor::new(payload.csv.into_bytes()))?;
    let assessment = service.assess_jobs(&import.jobs, &import.rejected);

    Ok(Json(JobImportResponse {
        generated_at: Utc::now(),
        assessment,
    }))
}
