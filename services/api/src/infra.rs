use job_risk::config::ScoringSettings;
use job_risk::error::AppError;
use job_risk::workflows::jobs::{JobRiskService, ReferenceData, ReferenceHandle, ScoringEngine};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads reference tables from `path`, or the standard tables when unset.
pub(crate) fn load_reference(path: Option<&Path>) -> Result<ReferenceData, AppError> {
    let Some(path) = path else {
        return Ok(ReferenceData::standard());
    };

    let data = ReferenceData::from_path(path)?;
    info!(
        path = %path.display(),
        operations = data.operation_count(),
        departments = data.department_count(),
        "loaded reference data"
    );
    Ok(data)
}

pub(crate) fn build_service(settings: &ScoringSettings) -> Result<JobRiskService, AppError> {
    let reference = load_reference(settings.reference_path.as_deref())?;
    Ok(JobRiskService::new(
        ReferenceHandle::new(reference),
        ScoringEngine::default(),
        settings.costs,
    ))
}
