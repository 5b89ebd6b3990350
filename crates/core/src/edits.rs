//! Named design edits.
//!
//! Every material picker, slider and text field maps to one of these
//! methods. Each one is a single [`DesignStore::update`] so that every
//! user action produces exactly one undo entry.

use crate::catalog::{ButtonMetal, CrucifixStyle, Engraving, FabricPattern, LeatherColor, StitchStyle};
use crate::design::Face;
use crate::history::DesignStore;
use crate::panel::{FitMode, OffsetAxis, PanelPosition, PanelShape};
use crate::types::{HexColor, ImageRef};

impl DesignStore {
    // ---- per-panel content ----

    pub fn update_panel_image(&mut self, position: PanelPosition, url: Option<ImageRef>) {
        self.update(|d| d.panel_mut(position).set_image(url));
    }

    pub fn toggle_prayer(&mut self, position: PanelPosition) {
        self.update(|d| d.panel_mut(position).toggle_prayer());
    }

    pub fn set_prayer_text(&mut self, position: PanelPosition, text: impl Into<String>) {
        let text = text.into();
        self.update(|d| d.panel_mut(position).prayer.text = text);
    }

    pub fn set_prayer_text_color(&mut self, position: PanelPosition, color: HexColor) {
        self.update(|d| d.panel_mut(position).prayer.color = color);
    }

    /// Install a generated image; see [`crate::panel::PanelConfig::apply_generated_art`].
    pub fn apply_generated_art(&mut self, position: PanelPosition, url: ImageRef, prompt: &str) {
        self.update(|d| d.panel_mut(position).apply_generated_art(url, prompt));
    }

    // ---- per-panel framing ----

    pub fn update_panel_shape(&mut self, position: PanelPosition, shape: PanelShape) {
        self.update(|d| d.panel_mut(position).shape = shape);
    }

    pub fn update_panel_scale(&mut self, position: PanelPosition, scale: f64) {
        self.update(|d| d.panel_mut(position).frame_scale = scale);
    }

    pub fn update_panel_zoom(&mut self, position: PanelPosition, zoom: f64) {
        self.update(|d| d.panel_mut(position).content_zoom = zoom);
    }

    pub fn update_panel_offset(&mut self, position: PanelPosition, axis: OffsetAxis, value: i32) {
        self.update(|d| d.panel_mut(position).set_offset(axis, value));
    }

    /// Recenter the image on both axes as one undoable step.
    pub fn reset_panel_offset(&mut self, position: PanelPosition) {
        self.update(|d| {
            let panel = d.panel_mut(position);
            panel.offset_x = 0;
            panel.offset_y = 0;
        });
    }

    pub fn set_fit_mode(&mut self, position: PanelPosition, fit_mode: FitMode) {
        self.update(|d| d.panel_mut(position).fit_mode = fit_mode);
    }

    // ---- materials and trim ----

    pub fn set_leather(&mut self, leather: LeatherColor) {
        self.update(|d| d.exterior_leather = leather);
    }

    pub fn set_fabric(&mut self, fabric: FabricPattern) {
        self.update(|d| d.interior_fabric = fabric);
    }

    pub fn set_button_metal(&mut self, metal: ButtonMetal) {
        self.update(|d| d.button_metal = metal);
    }

    pub fn toggle_buttons(&mut self) {
        self.update(|d| d.show_buttons = !d.show_buttons);
    }

    pub fn set_engraving(&mut self, engraving: Engraving) {
        self.update(|d| d.exterior_engraving = engraving);
    }

    pub fn set_crucifix_style(&mut self, style: CrucifixStyle) {
        self.update(|d| d.crucifix_style = style);
    }

    pub fn toggle_gold_leaf(&mut self) {
        self.update(|d| d.gold_leaf = !d.gold_leaf);
    }

    pub fn toggle_medals(&mut self) {
        self.update(|d| d.show_medals = !d.show_medals);
    }

    pub fn set_stitch_color(&mut self, face: Face, color: HexColor) {
        self.update(|d| d.stitch_mut(face).color = color);
    }

    pub fn set_stitch_style(&mut self, face: Face, style: StitchStyle) {
        self.update(|d| d.stitch_mut(face).style = style);
    }

    pub fn set_stitch_weight(&mut self, face: Face, weight: f64) {
        self.update(|d| d.stitch_mut(face).weight = weight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::Design;

    #[test]
    fn update_panel_image_turns_off_prayer() {
        let mut store = DesignStore::default();
        assert!(store.current().panel(PanelPosition::Center).image_url().is_none());

        store.update_panel_image(PanelPosition::Center, Some(ImageRef::from("data:x")));

        let center = store.current().panel(PanelPosition::Center);
        assert_eq!(center.image_url().map(ImageRef::as_str), Some("data:x"));
        assert!(!center.is_prayer());
    }

    #[test]
    fn image_on_prayer_panel_is_undoable_back_to_prayer() {
        let mut store = DesignStore::default();
        store.update_panel_image(PanelPosition::Bottom, Some(ImageRef::from("a.png")));
        assert!(!store.current().panel(PanelPosition::Bottom).is_prayer());

        store.undo();
        assert!(store.current().panel(PanelPosition::Bottom).is_prayer());
    }

    #[test]
    fn each_edit_is_one_history_entry() {
        let mut store = DesignStore::default();
        store.update_panel_scale(PanelPosition::Left, 0.5);
        store.update_panel_zoom(PanelPosition::Left, 2.0);
        store.update_panel_offset(PanelPosition::Left, OffsetAxis::X, 30);
        store.reset_panel_offset(PanelPosition::Left);
        store.set_leather(LeatherColor::Navy);
        store.set_stitch_style(Face::Exterior, StitchStyle::Double);

        assert_eq!(store.history_len(), 6);
        let left = store.current().panel(PanelPosition::Left);
        assert_eq!(left.frame_scale, 0.5);
        assert_eq!(left.content_zoom, 2.0);
        assert_eq!((left.offset_x, left.offset_y), (0, 0));
    }

    #[test]
    fn toggles_flip_flags() {
        let mut store = DesignStore::default();
        store.toggle_buttons();
        store.toggle_gold_leaf();
        store.toggle_medals();
        let d = store.current();
        assert!(!d.show_buttons);
        assert!(!d.gold_leaf);
        assert!(!d.show_medals);
    }

    #[test]
    fn prayer_edits_touch_only_target_panel() {
        let mut store = DesignStore::default();
        store.set_prayer_text(PanelPosition::Top, "Ave Maria");
        store.set_prayer_text_color(PanelPosition::Top, "#7a0000".to_string());

        let design: &Design = store.current();
        assert_eq!(design.panel(PanelPosition::Top).prayer.text, "Ave Maria");
        assert_eq!(design.panel(PanelPosition::Top).prayer.color, "#7a0000");
        assert_ne!(design.panel(PanelPosition::Bottom).prayer.text, "Ave Maria");
    }

    #[test]
    fn generated_art_edit_prepends_history() {
        let mut store = DesignStore::default();
        store.update_panel_zoom(PanelPosition::Top, 3.0);
        store.apply_generated_art(PanelPosition::Top, ImageRef::from("data:new"), "angels");

        let top = store.current().panel(PanelPosition::Top);
        assert_eq!(top.ai_history[0].as_str(), "data:new");
        assert_eq!(top.content_zoom, 1.0);
        assert_eq!(top.last_prompt, "angels");
    }
}
