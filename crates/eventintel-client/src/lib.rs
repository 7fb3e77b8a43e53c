//! eventintel-client — UI controller for the Event Intelligence frontend.
//!
//! The controller owns a single [`state::UiState`] value and drives it from
//! user actions: form submissions, dropdown/manual event selection, phase
//! navigation and exports. Rendering is a pure function of that state.
//! Side effects go through two seams: [`api::DiscoveryApi`] for the HTTP
//! service and [`host::UiHost`] for alerts, the loading indicator and
//! file downloads.

pub mod analytics;
pub mod api;
pub mod controller;
pub mod error;
pub mod export;
pub mod forms;
pub mod host;
pub mod phase;
pub mod render;
pub mod selection;
pub mod state;

pub use controller::UiController;
pub use error::ClientError;
