//! Gemini `generateContent` request and response types.
//!
//! The endpoint speaks camelCase JSON. Requests carry one user turn with a
//! single text part; responses carry candidates whose parts may hold
//! `inlineData` image payloads (base64).

use serde::{Deserialize, Serialize};

use oratory_core::art_prompt::ArtPrompt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: &ArtPrompt) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(prompt.instruction.clone())],
            }],
            generation_config: GenerationConfig {
                image_config: ImageConfig {
                    aspect_ratio: prompt.aspect_ratio.as_str().to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub image_config: ImageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a content turn: text, inline binary data, or both absent
/// for part kinds this client does not use.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: String) -> Self {
        Self {
            text: Some(text),
            inline_data: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: String,
    /// Base64-encoded payload.
    pub data: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// First inline payload of the first candidate, if any.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .find_map(|part| part.inline_data.as_ref())
    }
}

/// Parse a raw response body.
pub fn parse_response(json: &str) -> Result<GenerateContentResponse, serde_json::Error> {
    serde_json::from_str(json)
}
