//! eventintel-common — Shared types and errors used across all Event Intelligence crates.

pub mod error;
pub mod records;
pub mod requests;
pub mod envelope;

// Re-export commonly used types
pub use envelope::{AttendeesEnvelope, EventsEnvelope, HealthStatus, SERVICE_NAME};
pub use records::{AttendeeRecord, Category, EventRecord};
pub use requests::{DiscoverAttendeesRequest, DiscoverEventsRequest};
