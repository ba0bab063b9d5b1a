// src/handlers/transpile.rs

use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    config::Config,
    error::AppError,
    handlers::preview::{build_preview, ensure_within_limit},
    models::{preview::PreviewResponse, transpile::TranspileRequest},
    upstream::Transpiler,
};

/// Transpiles German markup through the remote service and prepares the
/// result for display.
///
/// The upstream output is treated as untrusted: it goes through the same
/// classify-then-sanitize path as `/api/preview`.
pub async fn transpile(
    State(config): State<Config>,
    State(upstream): State<Arc<dyn Transpiler>>,
    Json(payload): Json<TranspileRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }
    ensure_within_limit(&payload.content, config.max_input_bytes)?;

    let result = upstream.transpile(&payload.content).await.map_err(|e| {
        tracing::error!("Transpile request failed: {}", e);
        e
    })?;

    let preview = build_preview(result).await?;
    Ok(Json(PreviewResponse::from(preview)))
}
