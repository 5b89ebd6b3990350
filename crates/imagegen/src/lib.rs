//! Image Acquisition Gateway.
//!
//! Provides the [`gateway::ArtGateway`] trait the session depends on, a
//! Gemini-backed implementation, the REST client underneath it and the
//! typed request/response messages for the `generateContent` endpoint.

pub mod api;
pub mod gateway;
pub mod messages;
