//! Transient stage state: viewport pan/zoom and the fold/flip toggles.
//!
//! None of this is part of the design, so none of it goes through the
//! undo history.

use serde::{Deserialize, Serialize};

use crate::design::Face;

// ---------------------------------------------------------------------------
// Viewport constants
// ---------------------------------------------------------------------------

pub const DEFAULT_ZOOM: f64 = 0.85;
pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 4.0;

/// Preset zoom stops shown in the zoom bar.
pub const ZOOM_LEVELS: [f64; 6] = [0.225, 0.375, 0.75, 1.125, 1.5, 2.25];

/// A zoom stop is highlighted when the live zoom is within this distance.
const ZOOM_LEVEL_TOLERANCE: f64 = 0.05;

/// Multiplicative zoom step per wheel notch.
const WHEEL_ZOOM_OUT: f64 = 0.9;
const WHEEL_ZOOM_IN: f64 = 1.1;

pub const DEFAULT_GLOBAL_SCALE: f64 = 1.1;
pub const MIN_GLOBAL_SCALE: f64 = 0.5;
pub const MAX_GLOBAL_SCALE: f64 = 2.0;

/// Fixed downward tilt of the whole stage, plus extra tilt while folded.
pub const STAGE_TILT_DEG: f64 = 15.0;
pub const FOLDED_EXTRA_TILT_DEG: f64 = 5.0;

/// Mouse button that never starts a pan (secondary button).
const SECONDARY_BUTTON: u8 = 2;

// ---------------------------------------------------------------------------
// Inspector tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectorTab {
    #[default]
    Exterior,
    Interior,
    Panels,
    Art,
}

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pan {
    pub x: f64,
    pub y: f64,
}

/// Composite transform applied to the whole oratory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageTransform {
    pub translate: Pan,
    pub scale: f64,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl StageTransform {
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotateX({}deg) rotateY({}deg)",
            self.translate.x, self.translate.y, self.scale, self.rotate_x_deg, self.rotate_y_deg
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageState {
    pub zoom: f64,
    pub pan: Pan,
    pub global_scale: f64,
    pub is_folded: bool,
    /// Global flip: `true` shows the leather exterior facing the viewer.
    pub is_rotated: bool,
    pub active_tab: InspectorTab,
    #[serde(skip)]
    drag_anchor: Option<(f64, f64)>,
}

impl Default for StageState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan: Pan::default(),
            global_scale: DEFAULT_GLOBAL_SCALE,
            is_folded: false,
            is_rotated: true,
            active_tab: InspectorTab::Exterior,
            drag_anchor: None,
        }
    }
}

impl StageState {
    pub fn toggle_fold(&mut self) {
        self.is_folded = !self.is_folded;
    }

    pub fn toggle_rotation(&mut self) {
        self.is_rotated = !self.is_rotated;
    }

    /// Switch inspector tab. The exterior tab turns the leather side toward
    /// the viewer; every other tab shows the interior.
    pub fn set_tab(&mut self, tab: InspectorTab) {
        self.active_tab = tab;
        self.is_rotated = tab == InspectorTab::Exterior;
    }

    pub fn forward_face(&self) -> Face {
        if self.is_rotated {
            Face::Exterior
        } else {
            Face::Interior
        }
    }

    // ---- zoom ----

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Apply one mouse-wheel notch. Positive `delta_y` zooms out.
    pub fn wheel(&mut self, delta_y: f64) {
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_OUT
        } else {
            WHEEL_ZOOM_IN
        };
        self.set_zoom(self.zoom * factor);
    }

    /// The preset stop currently matching the live zoom, if any.
    pub fn active_zoom_level(&self) -> Option<f64> {
        ZOOM_LEVELS
            .into_iter()
            .find(|z| (self.zoom - z).abs() < ZOOM_LEVEL_TOLERANCE)
    }

    pub fn set_global_scale(&mut self, scale: f64) {
        self.global_scale = scale.clamp(MIN_GLOBAL_SCALE, MAX_GLOBAL_SCALE);
    }

    // ---- panning ----

    pub fn begin_pan(&mut self, x: f64, y: f64, button: u8) {
        if button != SECONDARY_BUTTON {
            self.drag_anchor = Some((x, y));
        }
    }

    pub fn drag_to(&mut self, x: f64, y: f64) {
        if let Some((last_x, last_y)) = self.drag_anchor {
            self.pan.x += x - last_x;
            self.pan.y += y - last_y;
            self.drag_anchor = Some((x, y));
        }
    }

    pub fn end_pan(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_panning(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn reset_view(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.pan = Pan::default();
    }

    pub fn transform(&self) -> StageTransform {
        let tilt = if self.is_folded {
            STAGE_TILT_DEG + FOLDED_EXTRA_TILT_DEG
        } else {
            STAGE_TILT_DEG
        };
        StageTransform {
            translate: self.pan,
            scale: self.zoom * self.global_scale,
            rotate_x_deg: tilt,
            rotate_y_deg: if self.is_rotated { 180.0 } else { 0.0 },
        }
    }
}

/// Zoom bar label for a preset stop, relative to the default zoom.
pub fn zoom_level_label(level: f64) -> String {
    format!("{}%", (level / DEFAULT_ZOOM * 100.0).round())
}
