// src/upstream.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::{
    error::AppError,
    models::transpile::{Dictionary, TranspileRequest, TranspileResponse},
};

const FAILED_TO_TRANSPILE: &str = "Failed to transpile";
const FAILED_TO_FETCH_DICTIONARY: &str = "Failed to fetch dictionary";

/// The remote service that maps German tags to standard HTML.
#[async_trait]
pub trait Transpiler: Send + Sync {
    /// Transpiles German markup. The returned string is untrusted HTML.
    async fn transpile(&self, content: &str) -> Result<String, AppError>;

    async fn fetch_dictionary(&self) -> Result<Dictionary, AppError>;
}

/// `Transpiler` backed by the HTTP API (`POST transpile`, `GET dictionary`).
pub struct HttpTranspiler {
    client: Client,
    base_url: Url,
}

impl HttpTranspiler {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        // `Url::join` replaces the last path segment unless the base ends in '/'.
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }

        let base_url = Url::parse(&normalized).map_err(|e| {
            AppError::InternalServerError(format!("invalid upstream URL {:?}: {}", base_url, e))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(AppError::InternalServerError(format!(
                "unsupported upstream scheme: {}",
                base_url.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::InternalServerError(e.to_string()))
    }
}

#[async_trait]
impl Transpiler for HttpTranspiler {
    async fn transpile(&self, content: &str) -> Result<String, AppError> {
        let request = TranspileRequest {
            content: content.to_string(),
        };

        let response = self
            .client
            .post(self.endpoint("transpile")?)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body: TranspileResponse = response.json().await.map_err(|e| {
            tracing::warn!("Unreadable transpile response ({}): {}", status, e);
            AppError::Upstream(FAILED_TO_TRANSPILE.to_string())
        })?;

        let error = body.error.filter(|msg| !msg.is_empty());
        if !status.is_success() || error.is_some() {
            return Err(AppError::Upstream(
                error.unwrap_or_else(|| FAILED_TO_TRANSPILE.to_string()),
            ));
        }

        Ok(body.result.unwrap_or_default())
    }

    async fn fetch_dictionary(&self) -> Result<Dictionary, AppError> {
        let response = self.client.get(self.endpoint("dictionary")?).send().await?;

        if !response.status().is_success() {
            tracing::warn!("Dictionary request returned {}", response.status());
            return Err(AppError::Upstream(FAILED_TO_FETCH_DICTIONARY.to_string()));
        }

        Ok(response.json().await?)
    }
}
