//! API error type and its HTTP mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cryptext_core::{ConvertError, ErrorKind};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Convert(e) => match e.kind() {
                ErrorKind::BadRequest | ErrorKind::UnsupportedAlgorithm => {
                    (StatusCode::BAD_REQUEST, e.to_string())
                }
                // Both integrity failures share one message
                ErrorKind::Padding | ErrorKind::UnwrapFailure => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "Decryption failed".to_string())
                }
                ErrorKind::InvalidKeyMaterial
                | ErrorKind::MalformedEnvelope
                | ErrorKind::InvalidTextEncoding => {
                    (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
                }
            },
            AppError::Config(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.clone()),
            AppError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            AppError::Internal(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T, E = AppError> = core::result::Result<T, E>;
