//! The design aggregate: five panels plus global materials and trim.

use serde::{Deserialize, Serialize};

use crate::catalog::{ButtonMetal, CrucifixStyle, Engraving, FabricPattern, LeatherColor, StitchStyle};
use crate::panel::{PanelConfig, PanelPosition};
use crate::types::HexColor;

/// Which side of the oratory a surface belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    /// Fabric-lined inside, where the panel content lives.
    Interior,
    /// Leather outside, viewed from behind.
    Exterior,
}

/// One panel record per position. A struct rather than a map so that
/// "exactly one config per position" holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panels {
    pub top: PanelConfig,
    pub bottom: PanelConfig,
    pub left: PanelConfig,
    pub right: PanelConfig,
    pub center: PanelConfig,
}

impl Panels {
    pub fn get(&self, position: PanelPosition) -> &PanelConfig {
        match position {
            PanelPosition::Top => &self.top,
            PanelPosition::Bottom => &self.bottom,
            PanelPosition::Left => &self.left,
            PanelPosition::Right => &self.right,
            PanelPosition::Center => &self.center,
        }
    }

    pub fn get_mut(&mut self, position: PanelPosition) -> &mut PanelConfig {
        match position {
            PanelPosition::Top => &mut self.top,
            PanelPosition::Bottom => &mut self.bottom,
            PanelPosition::Left => &mut self.left,
            PanelPosition::Right => &mut self.right,
            PanelPosition::Center => &mut self.center,
        }
    }

    /// Iterate panels in navigation order.
    pub fn iter(&self) -> impl Iterator<Item = (PanelPosition, &PanelConfig)> {
        PanelPosition::ALL.into_iter().map(move |p| (p, self.get(p)))
    }
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            top: PanelConfig::for_position(PanelPosition::Top),
            bottom: PanelConfig::for_position(PanelPosition::Bottom),
            left: PanelConfig::for_position(PanelPosition::Left),
            right: PanelConfig::for_position(PanelPosition::Right),
            center: PanelConfig::for_position(PanelPosition::Center),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StitchSettings {
    pub color: HexColor,
    pub style: StitchStyle,
    /// Thread weight in pixels.
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub panels: Panels,
    pub exterior_leather: LeatherColor,
    pub interior_fabric: FabricPattern,
    pub exterior_engraving: Engraving,
    pub crucifix_style: CrucifixStyle,
    pub gold_leaf: bool,
    pub show_medals: bool,
    pub button_metal: ButtonMetal,
    pub show_buttons: bool,
    pub interior_stitch: StitchSettings,
    pub exterior_stitch: StitchSettings,
}

impl Design {
    pub fn panel(&self, position: PanelPosition) -> &PanelConfig {
        self.panels.get(position)
    }

    pub fn panel_mut(&mut self, position: PanelPosition) -> &mut PanelConfig {
        self.panels.get_mut(position)
    }

    pub fn stitch(&self, face: Face) -> &StitchSettings {
        match face {
            Face::Interior => &self.interior_stitch,
            Face::Exterior => &self.exterior_stitch,
        }
    }

    pub fn stitch_mut(&mut self, face: Face) -> &mut StitchSettings {
        match face {
            Face::Interior => &mut self.interior_stitch,
            Face::Exterior => &mut self.exterior_stitch,
        }
    }
}

impl Default for Design {
    fn default() -> Self {
        Self {
            panels: Panels::default(),
            exterior_leather: LeatherColor::Tobacco,
            interior_fabric: FabricPattern::GoldenDamask,
            exterior_engraving: Engraving::Cross,
            crucifix_style: CrucifixStyle::Classic,
            gold_leaf: true,
            show_medals: true,
            button_metal: ButtonMetal::Gold,
            show_buttons: true,
            interior_stitch: StitchSettings {
                color: "#f5f5f5".to_string(),
                style: StitchStyle::Solid,
                weight: 0.8,
            },
            exterior_stitch: StitchSettings {
                color: "#d4af37".to_string(),
                style: StitchStyle::Dashed,
                weight: 1.2,
            },
        }
    }
}
