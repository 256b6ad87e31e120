pub mod eventos;
pub mod page;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eventos_core::EventosError;
use serde::Serialize;

use crate::state::AppState;

/// Every route the server answers, ready for `with_state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(eventos::router())
        .merge(page::router())
        .with_state(state)
}

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// An error carrying the HTTP status it should be reported with
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        AppError {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "request failed");
        }
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<EventosError> for AppError {
    fn from(err: EventosError) -> Self {
        let status = match &err {
            EventosError::EventNotFound(_) => StatusCode::NOT_FOUND,
            EventosError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = match &err {
            EventosError::EventNotFound(_) => "Event not found".to_string(),
            _ => err.to_string(),
        };
        AppError::new(status, message)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::new(
            StatusCode::BAD_REQUEST,
            format!("Invalid JSON body: {}", rejection.body_text()),
        )
    }
}
