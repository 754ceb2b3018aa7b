#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Image fetch error: {0}")]
    ImageFetch(String),

    #[error("Font loading error: {0}")]
    FontLoad(String),

    #[error("Failed to load any images. Please try again.")]
    NoImages,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message shown in the plugin panel. Network and font failures are
    /// collapsed into fixed, user-facing wording.
    pub fn user_message(&self) -> String {
        let message = match self {
            AppError::Internal(_) => "Unknown error occurred".to_string(),
            other => other.to_string(),
        };
        let lowered = message.to_lowercase();
        if lowered.contains("network") || lowered.contains("fetch") {
            "Network error: Please check your internet connection".to_string()
        } else if lowered.contains("font") {
            "Font loading error: Unable to load required fonts".to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::ImageFetch(msg) => {
                tracing::error!("Image fetch error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "IMAGE_FETCH_ERROR",
                    self.user_message(),
                )
            }
            AppError::FontLoad(msg) => {
                tracing::error!("Font loading error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "FONT_LOAD_ERROR",
                    self.user_message(),
                )
            }
            AppError::NoImages => (
                StatusCode::BAD_GATEWAY,
                "NO_IMAGES",
                self.to_string(),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
