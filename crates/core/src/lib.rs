//! Domain model for the oratory configurator.
//!
//! Everything in this crate is pure: the design model and its catalog,
//! the bounded undo store, the panel geometry resolver, transient stage
//! state and art-prompt composition. Network and file IO live in
//! `oratory-imagegen` and `oratory-session`.

pub mod art_prompt;
pub mod catalog;
pub mod design;
pub mod edits;
pub mod error;
pub mod geometry;
pub mod history;
pub mod panel;
pub mod stage;
pub mod types;
