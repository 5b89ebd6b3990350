//! The top-level session: sole owner of the design store, the stage and
//! the image gallery.
//!
//! All mutation goes through `&mut OratorySession`. The art request is the
//! only suspend point and is guarded by the `generating` flag.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use oratory_core::art_prompt::validate_prompt;
use oratory_core::design::Design;
use oratory_core::geometry::{resolve_preview, Preview};
use oratory_core::history::DesignStore;
use oratory_core::panel::{
    OffsetAxis, PanelPosition, MAX_CONTENT_ZOOM, MAX_FRAME_SCALE, MAX_IMAGE_OFFSET,
    MIN_CONTENT_ZOOM, MIN_FRAME_SCALE, MIN_IMAGE_OFFSET,
};
use oratory_core::stage::{InspectorTab, StageState};
use oratory_core::types::ImageRef;
use oratory_imagegen::gateway::{ArtGateway, ArtRequest};

use crate::upload::read_image_file;

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

/// Where a gallery image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GallerySource {
    Ai,
    User,
}

impl GallerySource {
    fn id_prefix(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::User => "user",
        }
    }
}

/// An image produced during this session, newest first in the gallery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GalleryEntry {
    pub id: String,
    pub source: GallerySource,
    pub url: ImageRef,
    pub created_at: DateTime<Utc>,
}

impl GalleryEntry {
    fn new(source: GallerySource, url: ImageRef) -> Self {
        Self {
            id: format!("{}-{}", source.id_prefix(), Uuid::new_v4()),
            source,
            url,
            created_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// Generation ticket
// ---------------------------------------------------------------------------

/// Proof that a generation is in flight. Only [`OratorySession::begin_generation`]
/// creates one. The session's in-flight flag stays set for as long as the
/// ticket lives and is cleared when it is dropped, whether it was handed to
/// [`OratorySession::finish_generation`] or abandoned mid-request.
#[derive(Debug)]
pub struct ArtTicket {
    request: ArtRequest,
    in_flight: Arc<AtomicBool>,
}

impl ArtTicket {
    pub fn request(&self) -> &ArtRequest {
        &self.request
    }
}

impl Drop for ArtTicket {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::SeqCst);
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct OratorySession {
    store: DesignStore,
    stage: StageState,
    selected: Option<PanelPosition>,
    prompt_draft: String,
    generating: Arc<AtomicBool>,
    gallery: Vec<GalleryEntry>,
}

impl OratorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_design(design: Design) -> Self {
        Self {
            store: DesignStore::new(design),
            ..Self::default()
        }
    }

    // ---- accessors ----

    pub fn design(&self) -> &Design {
        self.store.current()
    }

    pub fn store(&self) -> &DesignStore {
        &self.store
    }

    /// Direct access for material and content edits that need no clamping.
    pub fn store_mut(&mut self) -> &mut DesignStore {
        &mut self.store
    }

    pub fn stage(&self) -> &StageState {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut StageState {
        &mut self.stage
    }

    pub fn selected(&self) -> Option<PanelPosition> {
        self.selected
    }

    pub fn prompt_draft(&self) -> &str {
        &self.prompt_draft
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::SeqCst)
    }

    pub fn gallery(&self) -> &[GalleryEntry] {
        &self.gallery
    }

    // ---- selection and tabs ----

    /// Select a panel on the stage. `None` clears the selection.
    pub fn select_panel(&mut self, position: Option<PanelPosition>) {
        self.selected = position;
        self.sync_prompt_draft();
    }

    /// Select a panel from the navigator: also opens its inspector tab.
    pub fn open_panel(&mut self, position: PanelPosition) {
        self.selected = Some(position);
        self.set_tab(InspectorTab::Panels);
    }

    pub fn set_tab(&mut self, tab: InspectorTab) {
        self.stage.set_tab(tab);
        self.sync_prompt_draft();
    }

    pub fn set_prompt_draft(&mut self, prompt: impl Into<String>) {
        self.prompt_draft = prompt.into();
    }

    /// On the art tab the draft follows the selected panel's last prompt.
    fn sync_prompt_draft(&mut self) {
        if self.stage.active_tab != InspectorTab::Art {
            return;
        }
        if let Some(position) = self.selected {
            self.prompt_draft = self.store.current().panel(position).last_prompt.clone();
        }
    }

    // ---- sliders ----

    pub fn set_panel_scale(&mut self, position: PanelPosition, scale: f64) {
        self.store
            .update_panel_scale(position, scale.clamp(MIN_FRAME_SCALE, MAX_FRAME_SCALE));
    }

    pub fn set_panel_zoom(&mut self, position: PanelPosition, zoom: f64) {
        self.store
            .update_panel_zoom(position, zoom.clamp(MIN_CONTENT_ZOOM, MAX_CONTENT_ZOOM));
    }

    pub fn set_panel_offset(&mut self, position: PanelPosition, axis: OffsetAxis, value: i32) {
        self.store.update_panel_offset(
            position,
            axis,
            value.clamp(MIN_IMAGE_OFFSET, MAX_IMAGE_OFFSET),
        );
    }

    // ---- selected-panel content ----

    /// Put an image (or nothing) in the selected panel. No-op without a
    /// selection.
    pub fn set_selected_image(&mut self, url: Option<ImageRef>) -> bool {
        let Some(position) = self.selected else {
            return false;
        };
        self.store.update_panel_image(position, url);
        true
    }

    /// Reuse a gallery image in the selected panel.
    pub fn apply_gallery_image(&mut self, id: &str) -> bool {
        let Some(url) = self
            .gallery
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.url.clone())
        else {
            tracing::debug!(id, "Unknown gallery entry");
            return false;
        };
        self.set_selected_image(Some(url))
    }

    /// Load a local file into the selected panel and the gallery.
    pub async fn upload_image(&mut self, path: &Path) -> bool {
        let Some(position) = self.selected else {
            return false;
        };
        let Some(url) = read_image_file(path).await else {
            return false;
        };
        self.store.update_panel_image(position, Some(url.clone()));
        self.gallery.insert(0, GalleryEntry::new(GallerySource::User, url));
        tracing::info!(position = %position, path = %path.display(), "Image uploaded");
        true
    }

    pub fn undo(&mut self) -> bool {
        self.store.undo()
    }

    // ---- art generation ----

    /// Start a generation for the selected panel using the current draft.
    ///
    /// Returns `None` while another generation is pending, without a
    /// selection, or when the draft is not a usable prompt.
    pub fn begin_generation(&mut self) -> Option<ArtTicket> {
        if self.is_generating() {
            tracing::debug!("Generation already in flight");
            return None;
        }
        let position = self.selected?;
        if let Err(e) = validate_prompt(&self.prompt_draft) {
            tracing::warn!(error = %e, "Prompt rejected");
            return None;
        }

        let request = ArtRequest {
            prompt: self.prompt_draft.clone(),
            shape: self.store.current().panel(position).shape,
            position,
        };
        self.generating.store(true, Ordering::SeqCst);
        tracing::info!(position = %position, shape = request.shape.as_str(), "Generation started");
        Some(ArtTicket {
            request,
            in_flight: Arc::clone(&self.generating),
        })
    }

    /// Complete a generation. A payload lands in the ticket's panel, the
    /// gallery gets a copy and the inspector switches to the panels tab.
    /// `None` leaves the design untouched.
    pub fn finish_generation(&mut self, ticket: ArtTicket, image: Option<ImageRef>) -> bool {
        let position = ticket.request.position;
        let prompt = ticket.request.prompt.clone();
        drop(ticket);

        let Some(url) = image else {
            tracing::info!(position = %position, "Generation produced no image");
            return false;
        };

        self.store.apply_generated_art(position, url.clone(), &prompt);
        self.gallery.insert(0, GalleryEntry::new(GallerySource::Ai, url));
        self.set_tab(InspectorTab::Panels);
        tracing::info!(position = %position, "Generation finished");
        true
    }

    /// Run one generation end to end against `gateway`.
    ///
    /// Dropping the returned future before it completes leaves the design
    /// untouched and re-enables generation.
    pub async fn generate_art(&mut self, gateway: &dyn ArtGateway) -> bool {
        let Some(ticket) = self.begin_generation() else {
            return false;
        };
        tracing::debug!(gateway = gateway.name(), "Requesting art");
        let image = gateway.request_art(ticket.request()).await;
        self.finish_generation(ticket, image)
    }

    // ---- preview ----

    pub fn preview(&self) -> Preview {
        resolve_preview(self.store.current(), &self.stage, self.selected)
    }
}
