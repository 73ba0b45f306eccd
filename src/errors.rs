use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failure kinds for the quiz generation pipeline. The first four cover the
/// untrusted model reply and map to 502; bad client input maps to 400 and
/// everything else to 500.
#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("AI returned invalid JSON: {0}")]
    MalformedJson(String),

    #[error("AI JSON did not match schema: {0}")]
    SchemaViolation(String),

    #[error("Expected {expected} questions but got {actual}.")]
    CountMismatch { expected: usize, actual: usize },

    #[error("Question {index} has {actual} options (expected 4).")]
    OptionCountMismatch { index: usize, actual: usize },

    #[error("{0}")]
    InvalidInput(String),

    #[error("Backend error: {0}")]
    Transport(String),

    #[error("Backend error: {0}")]
    Configuration(String),
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::MalformedJson(_) => "MALFORMED_JSON",
            AppError::SchemaViolation(_) => "SCHEMA_VIOLATION",
            AppError::CountMismatch { .. } => "COUNT_MISMATCH",
            AppError::OptionCountMismatch { .. } => "OPTION_COUNT_MISMATCH",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Transport(_) => "TRANSPORT",
            AppError::Configuration(_) => "CONFIGURATION",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MalformedJson(_)
            | AppError::SchemaViolation(_)
            | AppError::CountMismatch { .. }
            | AppError::OptionCountMismatch { .. } => StatusCode::BAD_GATEWAY,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Transport(_) | AppError::Configuration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::warn!("{}: {}", self.kind(), self);
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.to_string(),
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
