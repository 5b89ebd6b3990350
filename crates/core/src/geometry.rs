//! Panel geometry resolver.
//!
//! Pure derivation of everything a renderer needs to draw one panel:
//! hinge rotation, transform origin, corner rounding, stacking order,
//! closure-button placement, stitching and the content frame. The
//! per-position facts live in one lookup table, [`HINGES`], indexed by
//! [`PanelPosition::index`].

use serde::Serialize;

use crate::catalog::{ButtonMetal, Engraving, StitchStyle};
use crate::design::{Design, Face};
use crate::panel::{FitMode, PanelConfig, PanelPosition, PanelShape, DEFAULT_FRAME_SCALE};
use crate::stage::{StageState, StageTransform};
use crate::types::{HexColor, ImageRef};

// ---------------------------------------------------------------------------
// Dimensions
// ---------------------------------------------------------------------------

/// Edge length of a square panel in pixels.
pub const PANEL_SIZE_PX: f64 = 180.0;

/// Hinge angle of a closed flap. Slightly under 180 so flaps don't z-fight.
pub const FOLD_ANGLE_DEG: f64 = 176.0;

/// Depth nudge applied to hinged flaps so they sit just above the center.
pub const HINGE_DEPTH_PX: f64 = 0.5;

pub const CORNER_RADIUS_PX: f64 = 40.0;

pub const STITCH_INSET_PX: f64 = 12.0;
const STITCH_OPACITY_INTERIOR: f64 = 0.7;
const STITCH_OPACITY_EXTERIOR: f64 = 0.9;

pub const BUTTON_SIZE_PX: f64 = 14.0;
/// Distance from the flap's free edge to the button.
pub const BUTTON_EDGE_OFFSET_PX: f64 = 25.0;
pub const BUTTON_DEPTH_PX: f64 = 2.0;

/// Oval frames keep a 3:4 medallion by narrowing the width.
pub const OVAL_WIDTH_FACTOR: f64 = 0.75;

pub const MIN_PRAYER_FONT_PX: f64 = 4.0;
const OVAL_FONT_FACTOR: f64 = 0.85;
/// Frame scale at which bucket font sizes apply unscaled.
const FONT_REFERENCE_SCALE: f64 = 0.8;

/// Character-count buckets for prayer text: (exclusive upper bound, font px).
const PRAYER_FONT_BUCKETS: [(usize, f64); 4] = [(50, 11.5), (150, 9.5), (300, 8.0), (450, 7.0)];
const PRAYER_FONT_FLOOR_BUCKET: f64 = 6.0;

// ---------------------------------------------------------------------------
// Primitive geometry types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Edge {
    /// The exterior face is seen from behind, so left and right swap.
    pub fn mirrored(self) -> Edge {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            other => other,
        }
    }

    pub fn corners(self) -> [Corner; 2] {
        match self {
            Self::Top => [Corner::TopLeft, Corner::TopRight],
            Self::Bottom => [Corner::BottomLeft, Corner::BottomRight],
            Self::Left => [Corner::TopLeft, Corner::BottomLeft],
            Self::Right => [Corner::TopRight, Corner::BottomRight],
        }
    }
}

/// Point a panel rotates around: the edge it shares with the center panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformOrigin {
    TopCenter,
    BottomCenter,
    LeftCenter,
    RightCenter,
    Center,
}

impl TransformOrigin {
    pub fn css(self) -> &'static str {
        match self {
            Self::TopCenter => "top center",
            Self::BottomCenter => "bottom center",
            Self::LeftCenter => "left center",
            Self::RightCenter => "right center",
            Self::Center => "center",
        }
    }
}

/// Closure hardware: a stud on the top flap, a socket on the bottom flap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Male,
    Female,
}

// ---------------------------------------------------------------------------
// Hinge table
// ---------------------------------------------------------------------------

/// Static per-position facts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hinge {
    pub position: PanelPosition,
    /// Rotation axis and direction; `None` for the fixed center panel.
    pub rotation: Option<(Axis, f64)>,
    pub origin: TransformOrigin,
    /// Outward edge whose corners are rounded (interior face).
    pub rounded_edge: Option<Edge>,
    pub button: Option<ButtonKind>,
    /// Stacking layer while folded.
    pub folded_layer: i32,
}

/// Indexed by [`PanelPosition::index`]: top, bottom, left, right, center.
pub const HINGES: [Hinge; 5] = [
    Hinge {
        position: PanelPosition::Top,
        rotation: Some((Axis::X, -1.0)),
        origin: TransformOrigin::BottomCenter,
        rounded_edge: Some(Edge::Top),
        button: Some(ButtonKind::Male),
        folded_layer: 60,
    },
    Hinge {
        position: PanelPosition::Bottom,
        rotation: Some((Axis::X, 1.0)),
        origin: TransformOrigin::TopCenter,
        rounded_edge: Some(Edge::Bottom),
        button: Some(ButtonKind::Female),
        folded_layer: 40,
    },
    Hinge {
        position: PanelPosition::Left,
        rotation: Some((Axis::Y, 1.0)),
        origin: TransformOrigin::RightCenter,
        rounded_edge: Some(Edge::Left),
        button: None,
        folded_layer: 20,
    },
    Hinge {
        position: PanelPosition::Right,
        rotation: Some((Axis::Y, -1.0)),
        origin: TransformOrigin::LeftCenter,
        rounded_edge: Some(Edge::Right),
        button: None,
        folded_layer: 20,
    },
    Hinge {
        position: PanelPosition::Center,
        rotation: None,
        origin: TransformOrigin::Center,
        rounded_edge: None,
        button: None,
        folded_layer: 1,
    },
];

/// Stacking layers while unfolded.
const UNFOLDED_CENTER_LAYER: i32 = 5;
const UNFOLDED_FLAP_LAYER: i32 = 10;

pub fn hinge(position: PanelPosition) -> &'static Hinge {
    &HINGES[position.index()]
}

// ---------------------------------------------------------------------------
// Fold / origin / stacking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoldTransform {
    /// Rotation axis; `None` for the center panel.
    pub axis: Option<Axis>,
    /// Signed rotation in degrees.
    pub angle_deg: f64,
    pub depth_px: f64,
}

impl FoldTransform {
    pub fn css(&self) -> String {
        match self.axis {
            Some(Axis::X) => format!("rotateX({}deg) translateZ({}px)", self.angle_deg, self.depth_px),
            Some(Axis::Y) => format!("rotateY({}deg) translateZ({}px)", self.angle_deg, self.depth_px),
            None => format!("translateZ({}px)", self.depth_px),
        }
    }
}

pub fn fold_transform(position: PanelPosition, is_folded: bool) -> FoldTransform {
    match hinge(position).rotation {
        Some((axis, sign)) => {
            let angle = if is_folded { FOLD_ANGLE_DEG } else { 0.0 };
            FoldTransform {
                axis: Some(axis),
                // `+ 0.0` normalizes a negative zero when unfolded.
                angle_deg: sign * angle + 0.0,
                depth_px: HINGE_DEPTH_PX,
            }
        }
        None => FoldTransform {
            axis: None,
            angle_deg: 0.0,
            depth_px: 0.0,
        },
    }
}

pub fn transform_origin(position: PanelPosition) -> TransformOrigin {
    hinge(position).origin
}

/// Front-to-back layer. Folded: top over bottom over the side wings over
/// the center. Unfolded: flaps over the center.
pub fn stacking_order(position: PanelPosition, is_folded: bool) -> i32 {
    if is_folded {
        hinge(position).folded_layer
    } else if position.is_center() {
        UNFOLDED_CENTER_LAYER
    } else {
        UNFOLDED_FLAP_LAYER
    }
}

// ---------------------------------------------------------------------------
// Rounding / stitching
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CornerRounding {
    pub edge: Option<Edge>,
    pub radius_px: f64,
}

impl CornerRounding {
    pub fn corners(&self) -> Vec<Corner> {
        self.edge.map(|e| e.corners().to_vec()).unwrap_or_default()
    }
}

pub fn corner_rounding(position: PanelPosition, face: Face) -> CornerRounding {
    let edge = hinge(position).rounded_edge.map(|edge| match face {
        Face::Interior => edge,
        Face::Exterior => edge.mirrored(),
    });
    CornerRounding {
        edge,
        radius_px: CORNER_RADIUS_PX,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stitching {
    pub inset_px: f64,
    pub weight_px: f64,
    pub style: StitchStyle,
    pub color: HexColor,
    pub opacity: f64,
    pub rounding: CornerRounding,
    pub drop_shadow: bool,
}

pub fn stitching(design: &Design, position: PanelPosition, face: Face) -> Stitching {
    let settings = design.stitch(face);
    let rounding = corner_rounding(position, face);
    Stitching {
        inset_px: STITCH_INSET_PX,
        weight_px: settings.style.effective_weight(settings.weight),
        style: settings.style,
        color: settings.color.clone(),
        opacity: match face {
            Face::Interior => STITCH_OPACITY_INTERIOR,
            Face::Exterior => STITCH_OPACITY_EXTERIOR,
        },
        rounding: CornerRounding {
            edge: rounding.edge,
            radius_px: CORNER_RADIUS_PX - STITCH_INSET_PX,
        },
        drop_shadow: face == Face::Exterior,
    }
}

// ---------------------------------------------------------------------------
// Closure buttons
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonPlacement {
    pub kind: ButtonKind,
    /// Free edge the button is measured from.
    pub anchor: Edge,
    pub edge_offset_px: f64,
    pub size_px: f64,
    pub depth_px: f64,
    pub color: &'static str,
    pub highlight: &'static str,
}

/// Closure button for a panel face, if one is drawn.
///
/// Only the exterior of the top (stud) and bottom (socket) flaps carry a
/// button, only when buttons are enabled. The socket is hidden while folded
/// because the top flap covers it.
pub fn button_placement(
    position: PanelPosition,
    face: Face,
    is_folded: bool,
    show_buttons: bool,
    metal: ButtonMetal,
) -> Option<ButtonPlacement> {
    if !show_buttons || face != Face::Exterior {
        return None;
    }
    let kind = hinge(position).button?;
    let anchor = match kind {
        ButtonKind::Male => Edge::Top,
        ButtonKind::Female if is_folded => return None,
        ButtonKind::Female => Edge::Bottom,
    };
    Some(ButtonPlacement {
        kind,
        anchor,
        edge_offset_px: BUTTON_EDGE_OFFSET_PX,
        size_px: BUTTON_SIZE_PX,
        depth_px: BUTTON_DEPTH_PX,
        color: metal.hex(),
        highlight: metal.highlight(),
    })
}

// ---------------------------------------------------------------------------
// Content frame
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImageTransform {
    pub offset_x: i32,
    pub offset_y: i32,
    pub zoom: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrayerLayout {
    pub text: String,
    pub color: HexColor,
    pub font_px: f64,
    /// Vertical and horizontal padding as percentages of the frame.
    pub padding_pct: (f64, f64),
}

/// What fills the frame, derived from the panel's content mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FrameFill {
    Image {
        url: ImageRef,
        fit: FitMode,
        transform: ImageTransform,
        gold_leaf: bool,
    },
    Prayer(PrayerLayout),
    /// Empty frame; the center shows a faint cross, flaps a plus sign.
    Placeholder { cross: bool },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentBox {
    pub width_pct: f64,
    pub height_pct: f64,
    pub shape: PanelShape,
    /// Aspect ratio as (width, height).
    pub aspect: (u8, u8),
    pub fully_round: bool,
    pub shadow: bool,
    pub fill: FrameFill,
}

/// Frame size as percentages of the panel: (width, height).
pub fn frame_size_pct(shape: PanelShape, frame_scale: f64) -> (f64, f64) {
    let height = frame_scale * 100.0;
    let width = match shape {
        PanelShape::Oval => height * OVAL_WIDTH_FACTOR,
        PanelShape::Square | PanelShape::Circle => height,
    };
    (width, height)
}

/// Prayer font size in pixels: a step function of text length scaled by
/// frame scale, shape and zoom, floored at a readable minimum.
///
/// Length is measured in UTF-16 code units, so characters outside the
/// Basic Multilingual Plane count twice.
pub fn prayer_font_size(text: &str, frame_scale: f64, zoom: f64, shape: PanelShape) -> f64 {
    let length = text.encode_utf16().count().max(1);
    let base = PRAYER_FONT_BUCKETS
        .iter()
        .find(|(limit, _)| length < *limit)
        .map(|(_, size)| *size)
        .unwrap_or(PRAYER_FONT_FLOOR_BUCKET);
    let shape_factor = match shape {
        PanelShape::Oval => OVAL_FONT_FACTOR,
        PanelShape::Square | PanelShape::Circle => 1.0,
    };
    let size = base * (frame_scale / FONT_REFERENCE_SCALE) * shape_factor * zoom;
    size.max(MIN_PRAYER_FONT_PX)
}

pub fn content_box(panel: &PanelConfig, position: PanelPosition, gold_leaf: bool) -> ContentBox {
    let scale = if panel.frame_scale > 0.0 {
        panel.frame_scale
    } else {
        DEFAULT_FRAME_SCALE
    };
    let (width_pct, height_pct) = frame_size_pct(panel.shape, scale);
    let (aspect, fully_round) = match panel.shape {
        PanelShape::Circle => ((1, 1), true),
        PanelShape::Oval => ((3, 4), true),
        PanelShape::Square => ((1, 1), false),
    };

    let fill = if let Some(url) = panel.image_url() {
        FrameFill::Image {
            url: url.clone(),
            fit: panel.fit_mode,
            transform: ImageTransform {
                offset_x: panel.offset_x,
                offset_y: panel.offset_y,
                zoom: panel.content_zoom,
            },
            gold_leaf,
        }
    } else if panel.is_prayer() {
        FrameFill::Prayer(PrayerLayout {
            text: panel.prayer.text.clone(),
            color: panel.prayer.color.clone(),
            font_px: prayer_font_size(&panel.prayer.text, scale, panel.content_zoom, panel.shape),
            padding_pct: match panel.shape {
                PanelShape::Oval => (12.0, 15.0),
                PanelShape::Square | PanelShape::Circle => (10.0, 10.0),
            },
        })
    } else {
        FrameFill::Placeholder {
            cross: position.is_center(),
        }
    };

    ContentBox {
        width_pct,
        height_pct,
        shape: panel.shape,
        aspect,
        fully_round,
        shadow: !panel.is_empty(),
        fill,
    }
}

// ---------------------------------------------------------------------------
// Full resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaceGeometry {
    pub face: Face,
    pub background: &'static str,
    pub texture_url: &'static str,
    pub rounding: CornerRounding,
    pub stitching: Stitching,
    pub button: Option<ButtonPlacement>,
    /// Content frame (interior face only).
    pub content: Option<ContentBox>,
    /// Leather engraving (center exterior only).
    pub engraving: Option<Engraving>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelGeometry {
    pub position: PanelPosition,
    pub size_px: f64,
    pub fold: FoldTransform,
    pub origin: TransformOrigin,
    pub z_index: i32,
    pub selected: bool,
    pub interior: FaceGeometry,
    pub exterior: FaceGeometry,
}

pub fn resolve_panel(design: &Design, position: PanelPosition, is_folded: bool) -> PanelGeometry {
    let panel = design.panel(position);

    let interior = FaceGeometry {
        face: Face::Interior,
        background: design.interior_fabric.hex(),
        texture_url: design.interior_fabric.texture_url(),
        rounding: corner_rounding(position, Face::Interior),
        stitching: stitching(design, position, Face::Interior),
        button: None,
        content: Some(content_box(panel, position, design.gold_leaf)),
        engraving: None,
    };

    let exterior = FaceGeometry {
        face: Face::Exterior,
        background: design.exterior_leather.hex(),
        texture_url: design.exterior_leather.texture_url(),
        rounding: corner_rounding(position, Face::Exterior),
        stitching: stitching(design, position, Face::Exterior),
        button: button_placement(
            position,
            Face::Exterior,
            is_folded,
            design.show_buttons,
            design.button_metal,
        ),
        content: None,
        engraving: position.is_center().then_some(design.exterior_engraving),
    };

    PanelGeometry {
        position,
        size_px: PANEL_SIZE_PX,
        fold: fold_transform(position, is_folded),
        origin: transform_origin(position),
        z_index: stacking_order(position, is_folded),
        selected: false,
        interior,
        exterior,
    }
}

/// Everything needed to draw the oratory in its current stage state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    pub stage: StageTransform,
    pub forward_face: Face,
    pub panels: Vec<PanelGeometry>,
}

pub fn resolve_preview(
    design: &Design,
    stage: &StageState,
    selected: Option<PanelPosition>,
) -> Preview {
    let panels = PanelPosition::ALL
        .into_iter()
        .map(|position| {
            let mut geometry = resolve_panel(design, position, stage.is_folded);
            geometry.selected = selected == Some(position);
            geometry
        })
        .collect();

    Preview {
        stage: stage.transform(),
        forward_face: stage.forward_face(),
        panels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ImageRef;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn hinge_table_is_indexed_by_position() {
        for position in PanelPosition::ALL {
            assert_eq!(hinge(position).position, position);
        }
    }

    #[test]
    fn folded_flaps_rotate_176_degrees() {
        let top = fold_transform(PanelPosition::Top, true);
        assert_eq!(top.axis, Some(Axis::X));
        assert_eq!(top.angle_deg, -176.0);
        assert_eq!(fold_transform(PanelPosition::Bottom, true).angle_deg, 176.0);
        assert_eq!(fold_transform(PanelPosition::Left, true).angle_deg, 176.0);
        assert_eq!(fold_transform(PanelPosition::Right, true).angle_deg, -176.0);
        assert_eq!(fold_transform(PanelPosition::Right, true).axis, Some(Axis::Y));
    }

    #[test]
    fn unfolded_angles_are_zero() {
        for position in PanelPosition::ALL {
            let fold = fold_transform(position, false);
            assert_eq!(fold.angle_deg, 0.0);
            assert!(fold.angle_deg.is_sign_positive());
        }
        assert_eq!(
            fold_transform(PanelPosition::Top, false).css(),
            "rotateX(0deg) translateZ(0.5px)"
        );
    }

    #[test]
    fn center_never_rotates() {
        let fold = fold_transform(PanelPosition::Center, true);
        assert_eq!(fold.axis, None);
        assert_eq!(fold.css(), "translateZ(0px)");
    }

    #[test]
    fn origins_sit_on_shared_edge() {
        assert_eq!(transform_origin(PanelPosition::Top).css(), "bottom center");
        assert_eq!(transform_origin(PanelPosition::Bottom).css(), "top center");
        assert_eq!(transform_origin(PanelPosition::Left).css(), "right center");
        assert_eq!(transform_origin(PanelPosition::Right).css(), "left center");
    }

    #[test]
    fn exterior_rounding_mirrors_side_wings() {
        assert_eq!(corner_rounding(PanelPosition::Left, Face::Interior).edge, Some(Edge::Left));
        assert_eq!(corner_rounding(PanelPosition::Left, Face::Exterior).edge, Some(Edge::Right));
        assert_eq!(corner_rounding(PanelPosition::Top, Face::Exterior).edge, Some(Edge::Top));
        assert!(corner_rounding(PanelPosition::Center, Face::Interior).corners().is_empty());
        assert_eq!(
            corner_rounding(PanelPosition::Right, Face::Interior).corners(),
            vec![Corner::TopRight, Corner::BottomRight]
        );
    }

    #[test]
    fn folded_stacking_puts_top_in_front() {
        let z = |p| stacking_order(p, true);
        assert!(z(PanelPosition::Top) > z(PanelPosition::Bottom));
        assert!(z(PanelPosition::Bottom) > z(PanelPosition::Left));
        assert!(z(PanelPosition::Top) > z(PanelPosition::Right));
        assert!(z(PanelPosition::Left) > z(PanelPosition::Center));

        assert_eq!(stacking_order(PanelPosition::Center, false), 5);
        assert_eq!(stacking_order(PanelPosition::Left, false), 10);
    }

    #[test]
    fn buttons_follow_fold_state() {
        let metal = ButtonMetal::Gold;
        let folded_top = button_placement(PanelPosition::Top, Face::Exterior, true, true, metal);
        assert_eq!(folded_top.map(|b| b.kind), Some(ButtonKind::Male));
        assert!(button_placement(PanelPosition::Bottom, Face::Exterior, true, true, metal).is_none());

        let bottom = button_placement(PanelPosition::Bottom, Face::Exterior, false, true, metal)
            .expect("socket visible while open");
        assert_eq!(bottom.kind, ButtonKind::Female);
        assert_eq!(bottom.anchor, Edge::Bottom);
    }

    #[test]
    fn buttons_only_on_exterior_of_top_and_bottom_when_enabled() {
        let metal = ButtonMetal::Silver;
        assert!(button_placement(PanelPosition::Top, Face::Interior, false, true, metal).is_none());
        assert!(button_placement(PanelPosition::Top, Face::Exterior, false, false, metal).is_none());
        for position in [PanelPosition::Left, PanelPosition::Right, PanelPosition::Center] {
            assert!(button_placement(position, Face::Exterior, false, true, metal).is_none());
        }
        let top = button_placement(PanelPosition::Top, Face::Exterior, false, true, metal).unwrap();
        assert_eq!(top.color, "#a8a9ad");
        assert_eq!(top.highlight, "#ffffff");
    }

    #[test]
    fn frame_scale_sets_content_box() {
        assert_eq!(frame_size_pct(PanelShape::Square, 0.5), (50.0, 50.0));
        assert_eq!(frame_size_pct(PanelShape::Oval, 0.5), (37.5, 50.0));
        assert_eq!(frame_size_pct(PanelShape::Circle, 0.5), (50.0, 50.0));
    }

    #[test]
    fn prayer_font_buckets() {
        let at_reference = |len: usize| prayer_font_size(&"a".repeat(len), 0.8, 1.0, PanelShape::Square);
        assert!(approx(at_reference(0), 11.5));
        assert!(approx(at_reference(49), 11.5));
        assert!(approx(at_reference(50), 9.5));
        assert!(approx(at_reference(299), 8.0));
        assert!(approx(at_reference(449), 7.0));
        assert!(approx(at_reference(1000), 6.0));
    }

    #[test]
    fn prayer_length_counts_utf16_units() {
        // 30 astral-plane letters are 60 code units
        let fraktur = "\u{1D504}".repeat(30);
        assert!(approx(prayer_font_size(&fraktur, 0.8, 1.0, PanelShape::Square), 9.5));
        assert!(approx(prayer_font_size(&"é".repeat(30), 0.8, 1.0, PanelShape::Square), 11.5));
    }

    #[test]
    fn prayer_font_scales_and_floors() {
        let oval = prayer_font_size("short", 0.8, 2.0, PanelShape::Oval);
        assert!(approx(oval, 11.5 * 0.85 * 2.0));
        let tiny = prayer_font_size(&"a".repeat(500), 0.3, 1.0, PanelShape::Oval);
        assert_eq!(tiny, MIN_PRAYER_FONT_PX);
    }

    #[test]
    fn content_box_fill_follows_content_mode() {
        let design = Design::default();
        let bottom = content_box(design.panel(PanelPosition::Bottom), PanelPosition::Bottom, true);
        assert!(matches!(bottom.fill, FrameFill::Prayer(_)));
        assert!(bottom.shadow);

        let center = content_box(design.panel(PanelPosition::Center), PanelPosition::Center, true);
        assert_eq!(center.fill, FrameFill::Placeholder { cross: true });
        assert!(!center.shadow);

        let mut left = design.panel(PanelPosition::Left).clone();
        left.set_image(Some(ImageRef::from("a.png")));
        left.shape = PanelShape::Oval;
        left.frame_scale = 0.5;
        let boxed = content_box(&left, PanelPosition::Left, false);
        assert_eq!((boxed.width_pct, boxed.height_pct), (37.5, 50.0));
        assert_eq!(boxed.aspect, (3, 4));
        assert!(matches!(boxed.fill, FrameFill::Image { gold_leaf: false, .. }));
    }

    #[test]
    fn stitching_uses_face_settings() {
        let design = Design::default();
        let outer = stitching(&design, PanelPosition::Left, Face::Exterior);
        assert_eq!(outer.style, StitchStyle::Dashed);
        assert_eq!(outer.opacity, 0.9);
        assert_eq!(outer.rounding.edge, Some(Edge::Right));
        assert_eq!(outer.rounding.radius_px, 28.0);
        assert!(outer.drop_shadow);

        let inner = stitching(&design, PanelPosition::Center, Face::Interior);
        assert_eq!(inner.weight_px, 0.8);
        assert!(!inner.drop_shadow);
    }

    #[test]
    fn preview_resolves_all_panels() {
        let design = Design::default();
        let mut stage = StageState::default();
        stage.toggle_fold();
        let preview = resolve_preview(&design, &stage, Some(PanelPosition::Left));

        assert_eq!(preview.panels.len(), 5);
        assert_eq!(preview.forward_face, Face::Exterior);
        let top = preview.panels.iter().find(|p| p.position == PanelPosition::Top).unwrap();
        assert_eq!(top.fold.angle_deg.abs(), 176.0);
        let bottom = preview.panels.iter().find(|p| p.position == PanelPosition::Bottom).unwrap();
        assert!(bottom.exterior.button.is_none());
        let center = preview.panels.iter().find(|p| p.position == PanelPosition::Center).unwrap();
        assert_eq!(center.exterior.engraving, Some(Engraving::Cross));
        assert_eq!(preview.panels.iter().filter(|p| p.selected).count(), 1);
    }

    #[test]
    fn unfolded_preview_shows_both_buttons() {
        let design = Design::default();
        let stage = StageState::default();
        let preview = resolve_preview(&design, &stage, None);

        for panel in &preview.panels {
            assert_eq!(panel.fold.angle_deg, 0.0);
        }
        let with_buttons: Vec<_> = preview
            .panels
            .iter()
            .filter_map(|p| p.exterior.button.as_ref().map(|b| b.kind))
            .collect();
        assert_eq!(with_buttons, vec![ButtonKind::Male, ButtonKind::Female]);
    }
}
