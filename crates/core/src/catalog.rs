//! Material and trim catalog.
//!
//! Closed enums for every material choice the configurator offers, each
//! with its display name and swatch color. Ids are the kebab-case strings
//! used on the wire and in the UI.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{HexColor, ImageRef};

// ---------------------------------------------------------------------------
// Texture overlays
// ---------------------------------------------------------------------------

pub const LEATHER_TEXTURE_URL: &str = "https://www.transparenttextures.com/patterns/leather.png";

/// Look up a catalog entry by id. Shared by every `FromStr` impl below.
fn parse_id<T: Copy>(
    all: &[T],
    id: &str,
    kind: &'static str,
    id_of: fn(T) -> &'static str,
) -> Result<T, CoreError> {
    all.iter()
        .copied()
        .find(|entry| id_of(*entry) == id)
        .ok_or_else(|| CoreError::UnknownId {
            kind,
            id: id.to_string(),
        })
}

/// Lenient lookup: unknown ids resolve to the first entry of the table.
fn id_or_first<T: Copy, const N: usize>(
    all: &[T; N],
    id: &str,
    id_of: fn(T) -> &'static str,
) -> T {
    all.iter()
        .copied()
        .find(|entry| id_of(*entry) == id)
        .unwrap_or(all[0])
}

// ---------------------------------------------------------------------------
// Exterior leather
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LeatherColor {
    Burgundy,
    Navy,
    Forest,
    Tobacco,
    Black,
}

impl LeatherColor {
    pub const ALL: [LeatherColor; 5] = [
        Self::Burgundy,
        Self::Navy,
        Self::Forest,
        Self::Tobacco,
        Self::Black,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Burgundy => "burgundy",
            Self::Navy => "navy",
            Self::Forest => "forest",
            Self::Tobacco => "tobacco",
            Self::Black => "black",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Burgundy => "Bordeaux",
            Self::Navy => "Azul Marinho",
            Self::Forest => "Verde Floresta",
            Self::Tobacco => "Tabaco",
            Self::Black => "Preto Nobre",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Burgundy => "#630d16",
            Self::Navy => "#0d1b2a",
            Self::Forest => "#1a2e1a",
            Self::Tobacco => "#3d2b1f",
            Self::Black => "#121212",
        }
    }

    pub fn texture_url(self) -> &'static str {
        LEATHER_TEXTURE_URL
    }
}

impl FromStr for LeatherColor {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(&Self::ALL, s, "leather color", Self::id)
    }
}

impl LeatherColor {
    /// Like [`str::parse`], but unknown ids fall back to the first entry.
    pub fn from_id_or_default(id: &str) -> Self {
        id_or_first(&Self::ALL, id, Self::id)
    }
}

// ---------------------------------------------------------------------------
// Interior fabric
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FabricPattern {
    GoldenDamask,
    WhiteBrocade,
    PurpleLiturgical,
    NaturalLinen,
}

impl FabricPattern {
    pub const ALL: [FabricPattern; 4] = [
        Self::GoldenDamask,
        Self::WhiteBrocade,
        Self::PurpleLiturgical,
        Self::NaturalLinen,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::GoldenDamask => "golden-damask",
            Self::WhiteBrocade => "white-brocade",
            Self::PurpleLiturgical => "purple-liturgical",
            Self::NaturalLinen => "natural-linen",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::GoldenDamask => "Damasco Dourado",
            Self::WhiteBrocade => "Brocado Branco",
            Self::PurpleLiturgical => "Roxo Quaresmal",
            Self::NaturalLinen => "Linho Rústico",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::GoldenDamask => "#d4af37",
            Self::WhiteBrocade => "#fcfcfc",
            Self::PurpleLiturgical => "#4b0082",
            Self::NaturalLinen => "#e5e1d5",
        }
    }

    pub fn texture_url(self) -> &'static str {
        match self {
            Self::GoldenDamask => "https://www.transparenttextures.com/patterns/cubes.png",
            Self::WhiteBrocade => "https://www.transparenttextures.com/patterns/shattered-island.png",
            Self::PurpleLiturgical => "https://www.transparenttextures.com/patterns/gplay.png",
            Self::NaturalLinen => "https://www.transparenttextures.com/patterns/natural-paper.png",
        }
    }
}

impl FromStr for FabricPattern {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(&Self::ALL, s, "fabric pattern", Self::id)
    }
}

impl FabricPattern {
    /// Like [`str::parse`], but unknown ids fall back to the first entry.
    pub fn from_id_or_default(id: &str) -> Self {
        id_or_first(&Self::ALL, id, Self::id)
    }
}

// ---------------------------------------------------------------------------
// Closure button metal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonMetal {
    Gold,
    Silver,
    AntiqueBrass,
    BlackNickel,
}

impl ButtonMetal {
    pub const ALL: [ButtonMetal; 4] = [
        Self::Gold,
        Self::Silver,
        Self::AntiqueBrass,
        Self::BlackNickel,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Gold => "gold",
            Self::Silver => "silver",
            Self::AntiqueBrass => "antique-brass",
            Self::BlackNickel => "black-nickel",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Gold => "Ouro Polido",
            Self::Silver => "Prata Cromo",
            Self::AntiqueBrass => "Latão Envelhecido",
            Self::BlackNickel => "Níquel Negro",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Gold => "#d4af37",
            Self::Silver => "#a8a9ad",
            Self::AntiqueBrass => "#8e7618",
            Self::BlackNickel => "#1a1a1a",
        }
    }

    /// Specular highlight used for the stud's inner ring.
    pub fn highlight(self) -> &'static str {
        match self {
            Self::Gold => "#fdf5e6",
            Self::Silver => "#ffffff",
            Self::AntiqueBrass => "#c5b358",
            Self::BlackNickel => "#4a4a4a",
        }
    }
}

impl FromStr for ButtonMetal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(&Self::ALL, s, "button metal", Self::id)
    }
}

impl ButtonMetal {
    /// Like [`str::parse`], but unknown ids fall back to the first entry.
    pub fn from_id_or_default(id: &str) -> Self {
        id_or_first(&Self::ALL, id, Self::id)
    }
}

// ---------------------------------------------------------------------------
// Stitching
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StitchStyle {
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl StitchStyle {
    pub const ALL: [StitchStyle; 4] = [Self::Dashed, Self::Solid, Self::Dotted, Self::Double];

    /// Double stitching needs at least this weight to render both lines.
    pub const DOUBLE_MIN_WEIGHT: f64 = 2.5;

    pub fn id(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Double => "double",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Dashed => "Ponto Corrido",
            Self::Solid => "Linha Direta",
            Self::Dotted => "Ponto de Agulha",
            Self::Double => "Ponto Duplo",
        }
    }

    /// Dash/gap pattern, `None` for continuous lines.
    pub fn spacing(self) -> Option<&'static str> {
        match self {
            Self::Dashed => Some("6px 4px"),
            Self::Dotted => Some("2px 3px"),
            Self::Solid | Self::Double => None,
        }
    }

    pub fn effective_weight(self, weight: f64) -> f64 {
        match self {
            Self::Double => weight.max(Self::DOUBLE_MIN_WEIGHT),
            _ => weight,
        }
    }
}

impl FromStr for StitchStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(&Self::ALL, s, "stitch style", Self::id)
    }
}

impl StitchStyle {
    /// Like [`str::parse`], but unknown ids fall back to the first entry.
    pub fn from_id_or_default(id: &str) -> Self {
        id_or_first(&Self::ALL, id, Self::id)
    }
}

/// A named color swatch offered by a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub id: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
}

pub const STITCH_COLORS: &[Swatch] = &[
    Swatch { id: "gold", name: "Ouro Ducado", hex: "#d4af37" },
    Swatch { id: "silver", name: "Prata Velha", hex: "#a8a9ad" },
    Swatch { id: "crimson", name: "Carmesim", hex: "#8b0000" },
    Swatch { id: "white", name: "Seda Branca", hex: "#f5f5f5" },
    Swatch { id: "black", name: "Preto Nanquim", hex: "#1a1a1a" },
];

pub const TEXT_COLORS: &[Swatch] = &[
    Swatch { id: "charcoal", name: "Nanquim", hex: "#1a1a1a" },
    Swatch { id: "sepia", name: "Sépia", hex: "#4a3728" },
    Swatch { id: "blood", name: "Carmesim", hex: "#7a0000" },
    Swatch { id: "gold", name: "Ouro Nobre", hex: "#b8860b" },
    Swatch { id: "white", name: "Branco Marfim", hex: "#fdf5e6" },
];

/// Find a swatch by id in one of the swatch tables.
pub fn find_swatch(table: &[Swatch], id: &str) -> Option<Swatch> {
    table.iter().copied().find(|s| s.id == id)
}

/// Convenience: a swatch's hex as an owned design color.
pub fn swatch_color(swatch: Swatch) -> HexColor {
    swatch.hex.to_string()
}

// ---------------------------------------------------------------------------
// Engraving / crucifix
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engraving {
    Cross,
    Monogram,
    Floral,
    None,
}

impl Engraving {
    pub const ALL: [Engraving; 4] = [Self::Cross, Self::Monogram, Self::Floral, Self::None];

    pub fn id(self) -> &'static str {
        match self {
            Self::Cross => "cross",
            Self::Monogram => "monogram",
            Self::Floral => "floral",
            Self::None => "none",
        }
    }

    /// Text stamped into the leather for monogram engravings.
    pub fn monogram_text(self) -> Option<&'static str> {
        match self {
            Self::Monogram => Some("IHS"),
            _ => None,
        }
    }
}

impl FromStr for Engraving {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(&Self::ALL, s, "engraving", Self::id)
    }
}

impl Engraving {
    /// Like [`str::parse`], but unknown ids fall back to the first entry.
    pub fn from_id_or_default(id: &str) -> Self {
        id_or_first(&Self::ALL, id, Self::id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrucifixStyle {
    Classic,
    SanDamiano,
    Metal,
}

impl CrucifixStyle {
    pub const ALL: [CrucifixStyle; 3] = [Self::Metal, Self::Classic, Self::SanDamiano];

    pub fn id(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::SanDamiano => "san-damiano",
            Self::Metal => "metal",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Metal => "Metal Prateado",
            Self::Classic => "Pintura Sacra",
            Self::SanDamiano => "São Damião",
        }
    }
}

impl FromStr for CrucifixStyle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_id(&Self::ALL, s, "crucifix style", Self::id)
    }
}

impl CrucifixStyle {
    /// Like [`str::parse`], but unknown ids fall back to the first entry.
    pub fn from_id_or_default(id: &str) -> Self {
        id_or_first(&Self::ALL, id, Self::id)
    }
}

// ---------------------------------------------------------------------------
// Preset content
// ---------------------------------------------------------------------------

/// A curated image offered in the panel gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetImage {
    pub id: &'static str,
    pub url: &'static str,
    pub title: &'static str,
}

pub const PRESET_IMAGES: &[PresetImage] = &[
    PresetImage {
        id: "sacred-1",
        url: "https://images.unsplash.com/photo-1594708767771-a7502209ff51?auto=format&fit=crop&q=80&w=800",
        title: "Virgem Maria",
    },
    PresetImage {
        id: "sacred-2",
        url: "https://images.unsplash.com/photo-1544427920-c49ccfb85579?auto=format&fit=crop&q=80&w=800",
        title: "Cristo Crucificado",
    },
    PresetImage {
        id: "sacred-3",
        url: "https://images.unsplash.com/photo-1579623261984-41f9a81d4044?auto=format&fit=crop&q=80&w=800",
        title: "Anjo Adorador",
    },
];

/// Seed for every panel's generated-art history.
pub fn default_ai_history() -> Vec<ImageRef> {
    PRESET_IMAGES.iter().map(|p| ImageRef::from(p.url)).collect()
}

pub const DEFAULT_PRAYER: &str = "ANIMA Christi, sanctifica me.
Corpus Christi, salva me.
Sanguis Christi, inebria me.
Aqua lateris Christi, lava me.
Passio Christi, conforta me.
O bone Iesu, exaudi me.
Intra tua vulnera absconde me.
Ne permittas me separari a te.
Amen.";

pub const DEFAULT_PRAYER_COLOR: &str = "#1a1a1a";

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn ids_round_trip_through_from_str() {
        for leather in LeatherColor::ALL {
            assert_eq!(leather.id().parse::<LeatherColor>().unwrap(), leather);
        }
        for fabric in FabricPattern::ALL {
            assert_eq!(fabric.id().parse::<FabricPattern>().unwrap(), fabric);
        }
        for metal in ButtonMetal::ALL {
            assert_eq!(metal.id().parse::<ButtonMetal>().unwrap(), metal);
        }
    }

    #[test]
    fn unknown_id_reports_kind() {
        let err = "velvet".parse::<FabricPattern>().unwrap_err();
        assert_matches!(err, CoreError::UnknownId { kind: "fabric pattern", .. });
        assert!(err.to_string().contains("velvet"));
    }

    #[test]
    fn unknown_id_falls_back_to_first_entry() {
        assert_eq!(LeatherColor::from_id_or_default("ivory"), LeatherColor::Burgundy);
        assert_eq!(FabricPattern::from_id_or_default(""), FabricPattern::ALL[0]);
        assert_eq!(ButtonMetal::from_id_or_default("bronze"), ButtonMetal::ALL[0]);
        assert_eq!(StitchStyle::from_id_or_default("zigzag"), StitchStyle::ALL[0]);
        assert_eq!(Engraving::from_id_or_default("dove"), Engraving::ALL[0]);
        assert_eq!(CrucifixStyle::from_id_or_default("byzantine"), CrucifixStyle::ALL[0]);
    }

    #[test]
    fn known_id_resolves_without_fallback() {
        assert_eq!(LeatherColor::from_id_or_default("tobacco"), LeatherColor::Tobacco);
        assert_eq!(
            CrucifixStyle::from_id_or_default("san-damiano"),
            CrucifixStyle::SanDamiano
        );
    }

    #[test]
    fn serde_uses_kebab_case_ids() {
        let json = serde_json::to_string(&ButtonMetal::AntiqueBrass).unwrap();
        assert_eq!(json, "\"antique-brass\"");
        let parsed: CrucifixStyle = serde_json::from_str("\"san-damiano\"").unwrap();
        assert_eq!(parsed, CrucifixStyle::SanDamiano);
    }

    #[test]
    fn double_stitch_weight_is_floored() {
        assert_eq!(StitchStyle::Double.effective_weight(0.8), 2.5);
        assert_eq!(StitchStyle::Double.effective_weight(3.0), 3.0);
        assert_eq!(StitchStyle::Dashed.effective_weight(0.8), 0.8);
    }

    #[test]
    fn default_ai_history_matches_presets() {
        let history = default_ai_history();
        assert_eq!(history.len(), PRESET_IMAGES.len());
        assert_eq!(history[0].as_str(), PRESET_IMAGES[0].url);
    }

    #[test]
    fn swatch_lookup() {
        let crimson = find_swatch(STITCH_COLORS, "crimson").unwrap();
        assert_eq!(swatch_color(crimson), "#8b0000");
        assert!(find_swatch(TEXT_COLORS, "crimson").is_none());
    }

    #[test]
    fn monogram_engraving_text() {
        assert_eq!(Engraving::Monogram.monogram_text(), Some("IHS"));
        assert_eq!(Engraving::Cross.monogram_text(), None);
    }
}
