use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use psymetric_core::error::CoreError;
use psymetric_scoring::error::ScoringError;
use psymetric_scoring::validate::AnswerError;
use psymetric_storage::error::StorageError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    Unprocessable(String),
    /// A batch of answers with at least one rejected entry.
    InvalidAnswers(Vec<AnswerError>),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    answers: Vec<AnswerError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, answers) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, Vec::new()),
            ApiError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg, Vec::new()),
            ApiError::InvalidAnswers(answers) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("{} answer(s) rejected", answers.len()),
                answers,
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error: message, answers })).into_response()
    }
}

impl From<ScoringError> for ApiError {
    fn from(e: ScoringError) -> Self {
        match e {
            ScoringError::UnknownScale(_) | ScoringError::UnknownAdministration(_) => {
                ApiError::NotFound(e.to_string())
            }
            ScoringError::InvalidResponseType(_)
            | ScoringError::OutOfRangeAnswer { .. }
            | ScoringError::InvalidAnswer { .. }
            | ScoringError::InversionNotApplicable
            | ScoringError::Item { .. }
            | ScoringError::ScaleMismatch { .. }
            | ScoringError::InvalidScale { .. }
            | ScoringError::OverlappingCutPoints { .. } => ApiError::Unprocessable(e.to_string()),
            ScoringError::IncompleteAdministration { .. }
            | ScoringError::Core(CoreError::AlreadyCompleted(_)) => ApiError::Conflict(e.to_string()),
            ScoringError::InconsistentResponse { .. } | ScoringError::Storage(_) => {
                ApiError::Internal(e.to_string())
            }
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::ScaleNotFound(_) | StorageError::AdministrationNotFound(_) => {
                ApiError::NotFound(e.to_string())
            }
            StorageError::ScaleInUse(_) | StorageError::AdministrationCompleted(_) => {
                ApiError::Conflict(e.to_string())
            }
            StorageError::UnknownItem { .. } => ApiError::Unprocessable(e.to_string()),
            StorageError::Scoring(inner) => inner.into(),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
