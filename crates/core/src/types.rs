use std::fmt;

use serde::{Deserialize, Serialize};

/// CSS-style hex color, e.g. `#d4af37`.
pub type HexColor = String;

/// Reference to a displayable image: either a remote URL or an inline
/// `data:` URL produced by an upload or the art generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Build an inline `data:` reference from a MIME type and base64 payload.
    pub fn data_url(mime_type: &str, base64_payload: &str) -> Self {
        Self(format!("data:{mime_type};base64,{base64_payload}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_inline(&self) -> bool {
        self.0.starts_with("data:")
    }
}

impl From<String> for ImageRef {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for ImageRef {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_has_expected_prefix() {
        let image = ImageRef::data_url("image/png", "AAAA");
        assert_eq!(image.as_str(), "data:image/png;base64,AAAA");
        assert!(image.is_inline());
    }

    #[test]
    fn remote_url_is_not_inline() {
        assert!(!ImageRef::from("https://example.com/a.png").is_inline());
    }
}
