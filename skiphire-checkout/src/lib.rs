//! Skip Hire Checkout Engine
//!
//! Platform-agnostic logic for the "choose skip size" step of the skip hire
//! checkout flow. This crate owns the catalog data model, the selection
//! rules, and the fetch-lifecycle state machine without any UI or browser
//! dependency; the web front end drives it and renders its state.

pub mod catalog;
pub mod selection;
pub mod skip;
pub mod step;

// Re-export commonly used types
pub use catalog::{CatalogError, DEFAULT_BASE_URL, Location, by_location_url, parse_catalog};
pub use selection::Selection;
pub use skip::{Skip, SkipCatalog};
pub use step::{FetchPhase, StepState};
