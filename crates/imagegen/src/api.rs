//! REST client for the Gemini image-generation endpoint.
//!
//! Wraps `POST /v1beta/models/{model}:generateContent` using [`reqwest`].

use std::time::Duration;

use crate::messages::{GenerateContentRequest, GenerateContentResponse};

/// Connection settings for one Gemini deployment.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Base HTTP URL, e.g. `https://generativelanguage.googleapis.com`.
    pub api_url: String,
    pub api_key: String,
    /// Image-capable model name, e.g. `gemini-2.5-flash-image`.
    pub model: String,
    pub request_timeout: Duration,
}

/// HTTP client for a Gemini deployment.
pub struct GeminiApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

/// Errors from the Gemini REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiApiError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Gemini returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl GeminiApi {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_url, api_key)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Build a client whose requests time out after `config.request_timeout`.
    pub fn from_config(config: &GeminiConfig) -> Result<Self, GeminiApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self::with_client(
            client,
            config.api_url.clone(),
            config.api_key.clone(),
        ))
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Endpoint URL for `generateContent` on the given model.
    pub fn generate_content_url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.api_url, model)
    }

    /// Run one generation request and return the parsed response.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiApiError> {
        let response = self
            .client
            .post(self.generate_content_url(model))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code, or return an
    /// [`GeminiApiError::ApiError`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GeminiApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, GeminiApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}
