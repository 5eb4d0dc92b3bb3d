use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Rejections raised while adding a booking. The store is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter guest name.")]
    EmptyGuestName,

    #[error("Check-out date must be the same or after check-in date.")]
    CheckOutBeforeCheckIn,
}

/// Rejections raised while applying an action to an existing booking.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("no booking at index {index} (store holds {len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("unknown booking: {0}")]
    UnknownBooking(uuid::Uuid),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("export error: {0}")]
    Export(#[from] csv::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Action(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
