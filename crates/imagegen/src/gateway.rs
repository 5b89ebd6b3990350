//! The image gateway seam.
//!
//! The session only ever sees [`ArtGateway::request_art`]: a fallible,
//! possibly slow call that yields an image reference or nothing. Every
//! failure is logged here and collapses to `None`.

use async_trait::async_trait;
use base64::Engine;

use oratory_core::art_prompt::{compose, ArtPrompt};
use oratory_core::panel::{PanelPosition, PanelShape};
use oratory_core::types::ImageRef;

use crate::api::{GeminiApi, GeminiApiError, GeminiConfig};
use crate::messages::{GenerateContentRequest, GenerateContentResponse};

/// MIME type assumed when the service omits one.
const DEFAULT_IMAGE_MIME: &str = "image/png";

/// What to generate and where it will be framed.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtRequest {
    pub prompt: String,
    pub shape: PanelShape,
    pub position: PanelPosition,
}

impl ArtRequest {
    pub fn composed(&self) -> ArtPrompt {
        compose(&self.prompt, self.shape, self.position)
    }
}

#[async_trait]
pub trait ArtGateway: Send + Sync {
    /// Gateway identifier for logs.
    fn name(&self) -> &str;

    /// Generate an image for `request`. `None` on any failure.
    async fn request_art(&self, request: &ArtRequest) -> Option<ImageRef>;
}

/// Why a generation attempt produced no image.
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    #[error(transparent)]
    Api(#[from] GeminiApiError),

    #[error("Response contained no inline image")]
    NoImage,

    #[error("Inline image payload is not valid base64: {0}")]
    Undecodable(#[from] base64::DecodeError),
}

/// Convert the first inline image of a response into a `data:` reference.
///
/// The payload must be non-empty and decode as standard base64.
pub fn image_from_response(response: &GenerateContentResponse) -> Result<ImageRef, ArtError> {
    let inline = response.first_inline_data().ok_or(ArtError::NoImage)?;
    if inline.data.is_empty() {
        return Err(ArtError::NoImage);
    }
    base64::engine::general_purpose::STANDARD.decode(&inline.data)?;

    let mime = if inline.mime_type.is_empty() {
        DEFAULT_IMAGE_MIME
    } else {
        inline.mime_type.as_str()
    };
    Ok(ImageRef::data_url(mime, &inline.data))
}

/// [`ArtGateway`] backed by the Gemini `generateContent` endpoint.
pub struct GeminiGateway {
    api: GeminiApi,
    model: String,
}

impl GeminiGateway {
    pub fn new(api: GeminiApi, model: String) -> Self {
        Self { api, model }
    }

    pub fn from_config(config: &GeminiConfig) -> Result<Self, GeminiApiError> {
        Ok(Self::new(GeminiApi::from_config(config)?, config.model.clone()))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate an image, surfacing the failure reason.
    pub async fn generate(&self, request: &ArtRequest) -> Result<ImageRef, ArtError> {
        let body = GenerateContentRequest::from_prompt(&request.composed());
        let response = self.api.generate_content(&self.model, &body).await?;
        image_from_response(&response)
    }
}

#[async_trait]
impl ArtGateway for GeminiGateway {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn request_art(&self, request: &ArtRequest) -> Option<ImageRef> {
        match self.generate(request).await {
            Ok(image) => {
                tracing::info!(
                    model = %self.model,
                    position = %request.position,
                    "Sacred art generated",
                );
                Some(image)
            }
            Err(e) => {
                tracing::warn!(
                    model = %self.model,
                    position = %request.position,
                    error = %e,
                    "Sacred art generation failed",
                );
                None
            }
        }
    }
}
