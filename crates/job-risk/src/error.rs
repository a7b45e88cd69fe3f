use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::jobs::{InvalidJobError, JobImportError, ReferenceDataError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    InvalidJob(InvalidJobError),
    Import(JobImportError),
    Reference(ReferenceDataError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::InvalidJob(err) => write!(f, "invalid job: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::Reference(err) => write!(f, "reference data error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::InvalidJob(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::Reference(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::InvalidJob(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Import(_) | AppError::Reference(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = match &self {
            AppError::InvalidJob(err) => json!({
                "error": self.to_string(),
                "job_number": err.job_number(),
            }),
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<InvalidJobError> for AppError {
    fn from(value: InvalidJobError) -> Self {
        Self::InvalidJob(value)
    }
}

impl From<JobImportError> for AppError {
    fn from(value: JobImportError) -> Self {
        Self::Import(value)
    }
}

impl From<ReferenceDataError> for AppError {
    fn from(value: ReferenceDataError) -> Self {
        Self::Reference(value)
    }
}
