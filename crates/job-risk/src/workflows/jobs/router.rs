use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{JobNumber, JobRecord};
use super::explain::RiskFactor;
use super::reference::ReferenceDocument;
use super::report::views::{BatchAssessment, ScoredJobView};
use super::service::JobRiskService;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub jobs: Vec<JobRecord>,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub job_number: JobNumber,
    pub risk_score: u8,
    pub factors: Vec<RiskFactor>,
}

/// Router builder exposing scoring, ranking, and reference-data endpoints.
pub fn risk_router(service: Arc<JobRiskService>) -> Router {
    Router::new()
        .route("/api/v1/jobs/score", post(score_handler))
        .route("/api/v1/jobs/rank", post(rank_handler))
        .route("/api/v1/jobs/explain", post(explain_handler))
        .route(
            "/api/v1/reference",
            get(reference_handler).put(replace_reference_handler),
        )
        .with_state(service)
}

pub(crate) async fn score_handler(
    State(service): State<Arc<JobRiskService>>,
    Json(record): Json<JobRecord>,
) -> Result<Json<ScoredJobView>, AppError> {
    let (scored, factors) = service.explain(record)?;
    Ok(Json(ScoredJobView::new(scored).with_factors(factors)))
}

pub(crate) async fn rank_handler(
    State(service): State<Arc<JobRiskService>>,
    Json(request): Json<RankRequest>,
) -> Json<BatchAssessment> {
    Json(service.assess(request.jobs))
}

pub(crate) async fn explain_handler(
    State(service): State<Arc<JobRiskService>>,
    Json(record): Json<JobRecord>,
) -> Result<Json<ExplainResponse>, AppError> {
    let (scored, factors) = service.explain(record)?;
    Ok(Json(ExplainResponse {
        job_number: scored.job.job_number,
        risk_score: scored.risk_score,
        factors,
    }))
}

pub(crate) async fn reference_handler(
    State(service): State<Arc<JobRiskService>>,
) -> Json<ReferenceDocument> {
    Json(service.reference().snapshot().to_document())
}

pub(crate) async fn replace_reference_handler(
    State(service): State<Arc<JobRiskService>>,
    Json(document): Json<ReferenceDocument>,
) -> Result<Json<serde_json::Value>, AppError> {
    service.replace_reference(document)?;
    let snapshot = service.reference().snapshot();
    Ok(Json(json!({
        "status": "replaced",
        "operations": snapshot.operation_count(),
        "departments": snapshot.department_count(),
    })))
}
