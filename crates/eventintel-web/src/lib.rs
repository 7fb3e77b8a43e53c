//! eventintel-web — HTTP service for the Event Intelligence Platform.
//! Provides:
//!   - JSON discovery endpoints for events and their social-media attendees
//!   - A health check
//!   - Static asset serving with a single-page-app fallback

pub mod error;
pub mod handlers;
pub mod router;
pub mod sources;
pub mod state;
