//! Interactive session for the oratory configurator.
//!
//! [`session::OratorySession`] owns the design store, stage view state and
//! the session gallery, and drives the upload and art-generation flows.

pub mod config;
pub mod session;
pub mod upload;

pub use config::{ConfigError, SessionConfig};
pub use session::{ArtTicket, GalleryEntry, GallerySource, OratorySession};
