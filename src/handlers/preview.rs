// src/handlers/preview.rs

use axum::{
    Json,
    extract::State,
    response::{Html, IntoResponse},
};

use crate::{
    config::Config,
    error::AppError,
    models::preview::{PreviewRequest, PreviewResponse},
    utils::{preview::Preview, risk::RiskVerdict},
};

/// Classifies and sanitizes markup supplied by the caller.
///
/// Returns the raw code, the verdict and, when no risk was found, the
/// sanitized document for a sandboxed frame.
pub async fn preview_html(
    State(config): State<Config>,
    Json(payload): Json<PreviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_within_limit(&payload.content, config.max_input_bytes)?;

    let preview = build_preview(payload.content).await?;
    Ok(Json(PreviewResponse::from(preview)))
}

/// Same as `preview_html`, but renders the output panel as HTML.
pub async fn render_html(
    State(config): State<Config>,
    Json(payload): Json<PreviewRequest>,
) -> Result<Html<String>, AppError> {
    ensure_within_limit(&payload.content, config.max_input_bytes)?;

    let preview = build_preview(payload.content).await?;
    Ok(Html(preview.render_panel()))
}

pub(crate) fn ensure_within_limit(content: &str, max_bytes: usize) -> Result<(), AppError> {
    if content.len() > max_bytes {
        return Err(AppError::PayloadTooLarge(max_bytes));
    }
    Ok(())
}

/// Runs the classifier and sanitizer on the blocking pool.
pub(crate) async fn build_preview(raw: String) -> Result<Preview, AppError> {
    let preview = tokio::task::spawn_blocking(move || Preview::build(raw))
        .await
        .map_err(|e| AppError::InternalServerError(format!("preview task failed: {}", e)))?;

    match preview.verdict() {
        RiskVerdict::Risk(reason) => tracing::warn!("Preview blocked: {}", reason),
        RiskVerdict::NoRisk => tracing::debug!(bytes = preview.raw().len(), "Preview rendered"),
    }
    Ok(preview)
}
