use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    #[error("{0}")]
    InvalidResource(String),
    #[error("{0}")]
    SeatNotFound(String),
    #[error("{0}")]
    SeatUnavailable(String),
    #[error("{0}")]
    CapacityExceeded(String),
    #[error("failed to read the data file")]
    DataStoreReadError(#[source] std::io::Error),
    #[error("failed to write the data file")]
    DataStoreWriteError(#[source] std::io::Error),
    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Message rendered to the caller. The two seat failures are shown as
    /// one message on purpose: the form should not reveal whether a seat ID
    /// was invalid or merely taken.
    fn user_message(&self) -> String {
        match self {
            AppError::SeatNotFound(_) | AppError::SeatUnavailable(_) => {
                "Selected seat is not available".into()
            }
            AppError::InvalidResource(_) => "Invalid space selected".into(),
            AppError::CapacityExceeded(_) => "Occupancy cannot exceed capacity".into(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UnprocessableEntity(_)
            | AppError::InvalidResource(_)
            | AppError::SeatNotFound(_)
            | AppError::SeatUnavailable(_)
            | AppError::CapacityExceeded(_) => StatusCode::UNPROCESSABLE_ENTITY,
            e @ (AppError::DataStoreReadError(_)
            | AppError::DataStoreWriteError(_)
            | AppError::SerializationError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status_code,
            Json(serde_json::json!({ "error": self.user_message() })),
        )
            .into_response()
    }
}
