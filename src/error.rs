use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::constants::CAR_NOT_FOUND_MESSAGE;
use crate::models::CarId;
use crate::repository::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Request body rejected: {1}")]
    BodyRejected(StatusCode, String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid car identifier: '{0}'")]
    InvalidIdentifier(String),

    #[error("Car not found: {0}")]
    NotFound(CarId),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection {
            JsonRejection::JsonSyntaxError(_) => AppError::MalformedBody(message),
            // Buffering failures (e.g. the body size limit) keep their own status
            JsonRejection::BytesRejection(_) => AppError::BodyRejected(rejection.status(), message),
            _ => AppError::Validation(message),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MalformedBody(_) | AppError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            AppError::BodyRejected(status, _) => *status,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::Store(e) => {
                tracing::error!("Storage error: {}", e);
                format!("Storage error: {}", e)
            }
            AppError::MalformedBody(msg) => {
                tracing::warn!("Malformed request body: {}", msg);
                msg.clone()
            }
            AppError::BodyRejected(_, msg) => {
                tracing::warn!("Request body rejected: {}", msg);
                msg.clone()
            }
            AppError::Validation(msg) => {
                tracing::warn!("Validation error: {}", msg);
                msg.clone()
            }
            AppError::InvalidIdentifier(raw) => {
                tracing::warn!("Invalid car identifier: {}", raw);
                self.to_string()
            }
            AppError::NotFound(id) => {
                tracing::warn!("Car not found: {}", id);
                CAR_NOT_FOUND_MESSAGE.to_string()
            }
        };

        let body = Json(json!({
            "message": message,
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
