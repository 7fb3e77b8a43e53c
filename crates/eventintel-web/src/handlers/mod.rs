//! HTTP handlers for all API routes.

pub mod attendees;
pub mod events;
pub mod system;
