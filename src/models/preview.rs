// src/models/preview.rs

use serde::{Deserialize, Serialize};

use crate::utils::{html::PREVIEW_SANDBOX, preview::Preview, risk::RiskVerdict};

/// Body of `/api/preview` and `/api/render`.
/// Any string is accepted, including an empty one.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    #[serde(default)]
    pub content: String,
}

/// What the output panel needs to display one result.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    /// The candidate exactly as received, for the code view.
    pub raw: String,

    pub verdict: RiskVerdict,

    /// Sanitized standalone document. Omitted when the preview is blocked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,

    /// Value for the `sandbox` attribute of the embedding frame.
    pub sandbox: &'static str,
}

impl From<Preview> for PreviewResponse {
    fn from(preview: Preview) -> Self {
        let (raw, verdict, document) = preview.into_parts();
        Self {
            raw,
            verdict,
            document,
            sandbox: PREVIEW_SANDBOX,
        }
    }
}
