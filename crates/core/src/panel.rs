//! Per-panel configuration.
//!
//! An oratory has exactly five hinged panels. [`PanelPosition`] is the
//! closed key set; [`PanelConfig`] is the typed record for one panel with
//! every field enumerated and defaults applied at construction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::{default_ai_history, DEFAULT_PRAYER, DEFAULT_PRAYER_COLOR};
use crate::error::CoreError;
use crate::types::{HexColor, ImageRef};

// ---------------------------------------------------------------------------
// Input ranges
// ---------------------------------------------------------------------------

/// Default frame scale (fraction of the panel reserved for content).
pub const DEFAULT_FRAME_SCALE: f64 = 0.68;
pub const MIN_FRAME_SCALE: f64 = 0.3;
pub const MAX_FRAME_SCALE: f64 = 0.78;

pub const DEFAULT_CONTENT_ZOOM: f64 = 1.0;
pub const MIN_CONTENT_ZOOM: f64 = 1.0;
pub const MAX_CONTENT_ZOOM: f64 = 4.0;

/// Pixel offset bounds for panning the image inside its frame.
pub const MIN_IMAGE_OFFSET: i32 = -100;
pub const MAX_IMAGE_OFFSET: i32 = 100;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPosition {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl PanelPosition {
    /// Navigation order (top to bottom, left to right).
    pub const ALL: [PanelPosition; 5] = [
        Self::Top,
        Self::Left,
        Self::Center,
        Self::Right,
        Self::Bottom,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }

    pub fn is_center(self) -> bool {
        self == Self::Center
    }

    /// Dense index used by fixed-size lookup tables.
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Bottom => 1,
            Self::Left => 2,
            Self::Right => 3,
            Self::Center => 4,
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Self::Top => "Painel Superior",
            Self::Bottom => "Painel Inferior",
            Self::Left => "Ala Esquerda",
            Self::Right => "Ala Direita",
            Self::Center => "Painel Central",
        }
    }
}

impl fmt::Display for PanelPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelPosition {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| CoreError::UnknownId {
                kind: "panel position",
                id: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Shape / fit
// ---------------------------------------------------------------------------

/// Crop shape of the content frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelShape {
    #[default]
    Square,
    Circle,
    Oval,
}

impl PanelShape {
    pub const ALL: [PanelShape; 3] = [Self::Square, Self::Circle, Self::Oval];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Oval => "oval",
        }
    }
}

impl FromStr for PanelShape {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == s)
            .ok_or_else(|| CoreError::UnknownId {
                kind: "panel shape",
                id: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    #[default]
    Cover,
    Contain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetAxis {
    X,
    Y,
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

/// What a panel's frame displays. Image and prayer are mutually exclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum PanelContent {
    #[default]
    Empty,
    Image {
        url: ImageRef,
    },
    Prayer,
}

/// Prayer text and its ink color. Kept even while the panel shows
/// something else so toggling prayer mode back on restores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrayerText {
    pub text: String,
    pub color: HexColor,
}

impl Default for PrayerText {
    fn default() -> Self {
        Self {
            text: String::new(),
            color: DEFAULT_PRAYER_COLOR.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// PanelConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub label: String,
    pub content: PanelContent,
    pub prayer: PrayerText,
    pub fit_mode: FitMode,
    pub shape: PanelShape,
    pub frame_scale: f64,
    pub content_zoom: f64,
    pub offset_x: i32,
    pub offset_y: i32,
    /// Generated images, most recent first.
    pub ai_history: Vec<ImageRef>,
    pub last_prompt: String,
}

impl PanelConfig {
    /// Default configuration for the panel at `position`.
    ///
    /// The bottom panel starts in prayer mode with the default prayer;
    /// every other panel starts empty.
    pub fn for_position(position: PanelPosition) -> Self {
        let (content, prayer) = match position {
            PanelPosition::Bottom => (
                PanelContent::Prayer,
                PrayerText {
                    text: DEFAULT_PRAYER.to_string(),
                    color: DEFAULT_PRAYER_COLOR.to_string(),
                },
            ),
            _ => (PanelContent::Empty, PrayerText::default()),
        };

        Self {
            label: position.default_label().to_string(),
            content,
            prayer,
            fit_mode: FitMode::default(),
            shape: PanelShape::default(),
            frame_scale: DEFAULT_FRAME_SCALE,
            content_zoom: DEFAULT_CONTENT_ZOOM,
            offset_x: 0,
            offset_y: 0,
            ai_history: default_ai_history(),
            last_prompt: String::new(),
        }
    }

    pub fn image_url(&self) -> Option<&ImageRef> {
        match &self.content {
            PanelContent::Image { url } => Some(url),
            _ => None,
        }
    }

    pub fn is_prayer(&self) -> bool {
        matches!(self.content, PanelContent::Prayer)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.content, PanelContent::Empty)
    }

    /// Set or clear the displayed image.
    ///
    /// Setting an image always leaves prayer mode. Clearing an image empties
    /// the frame but leaves a prayer panel in prayer mode.
    pub fn set_image(&mut self, url: Option<ImageRef>) {
        self.content = match url {
            Some(url) => PanelContent::Image { url },
            None if self.is_prayer() => PanelContent::Prayer,
            None => PanelContent::Empty,
        };
    }

    /// Switch prayer mode on or off. Turning it off empties the frame.
    pub fn toggle_prayer(&mut self) {
        self.content = if self.is_prayer() {
            PanelContent::Empty
        } else {
            PanelContent::Prayer
        };
    }

    pub fn set_offset(&mut self, axis: OffsetAxis, value: i32) {
        match axis {
            OffsetAxis::X => self.offset_x = value,
            OffsetAxis::Y => self.offset_y = value,
        }
    }

    /// Install a freshly generated image: framing resets to defaults and the
    /// image is recorded at the front of the history.
    pub fn apply_generated_art(&mut self, url: ImageRef, prompt: &str) {
        self.ai_history.insert(0, url.clone());
        self.content = PanelContent::Image { url };
        self.offset_x = 0;
        self.offset_y = 0;
        self.content_zoom = DEFAULT_CONTENT_ZOOM;
        self.last_prompt = prompt.to_string();
    }
}
