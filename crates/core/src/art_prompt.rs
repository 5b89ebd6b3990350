//! Art-generation prompt composition.
//!
//! Turns a user prompt plus the target panel's shape and position into the
//! full instruction sent to the image model, together with the aspect
//! ratio the frame needs.

use serde::Serialize;

use crate::error::CoreError;
use crate::panel::{PanelPosition, PanelShape};

/// A prompt is usable when it contains non-whitespace text. Length is not
/// capped.
pub fn validate_prompt(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Art prompt must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AspectRatio {
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "3:4")]
    Portrait,
}

impl AspectRatio {
    pub fn for_shape(shape: PanelShape) -> Self {
        match shape {
            PanelShape::Oval => Self::Portrait,
            PanelShape::Square | PanelShape::Circle => Self::Square,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Portrait => "3:4",
        }
    }
}

/// Composition hint matching the frame's crop.
pub fn geometry_hint(shape: PanelShape) -> &'static str {
    match shape {
        PanelShape::Circle => {
            "centralized radial composition, optimized for a circular frame, vignette edges"
        }
        PanelShape::Oval => {
            "vertical elongated composition, focused central subject, optimized for an oval medallion format"
        }
        PanelShape::Square => "balanced square composition, classical proportions",
    }
}

/// Liturgical role of the panel within the oratory.
pub fn position_hint(position: PanelPosition) -> &'static str {
    match position {
        PanelPosition::Top => "celestial, divine, glory",
        PanelPosition::Center => "central devotional figure, high detail",
        PanelPosition::Bottom | PanelPosition::Left | PanelPosition::Right => {
            "supporting sacred symbols, meditative atmosphere"
        }
    }
}

/// A fully composed request for the image model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtPrompt {
    pub instruction: String,
    pub aspect_ratio: AspectRatio,
}

pub fn compose(prompt: &str, shape: PanelShape, position: PanelPosition) -> ArtPrompt {
    let instruction = format!(
        "Sacred art, high-end devotional quality, classical oil painting: {prompt}. \
         Context: {}. \
         Technical Layout: {}. \
         Rich textures, gold leaf accents, sfumato technique, cinematic liturgical lighting.",
        position_hint(position),
        geometry_hint(shape),
    );
    ArtPrompt {
        instruction,
        aspect_ratio: AspectRatio::for_shape(shape),
    }
}
