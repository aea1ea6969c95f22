//! Conversion handler

use axum::Json;
use cryptext_core::ConversionRequest;

use crate::{
    error::{AppError, Result},
    models::convert::{ConvertRequest, ConvertResponse},
};

/// `POST /convert`
///
/// The conversion runs on the blocking pool; RSA work can take milliseconds.
pub async fn convert(Json(request): Json<ConvertRequest>) -> Result<Json<ConvertResponse>> {
    let request: ConversionRequest = request.into();
    tracing::info!(
        mode = %request.mode,
        action = request.action.as_deref().unwrap_or("-"),
        "conversion requested"
    );

    let result = tokio::task::spawn_blocking(move || cryptext_core::convert(&request))
        .await
        .map_err(|e| AppError::Internal(format!("conversion task failed: {}", e)))?;

    match result {
        Ok(result) => Ok(Json(ConvertResponse { result })),
        Err(e) => {
            tracing::warn!(kind = ?e.kind(), "conversion rejected");
            Err(e.into())
        }
    }
}
