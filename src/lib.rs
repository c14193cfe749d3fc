//! This crate validates responses from blockchain nodes implementing the construction API
//! before they are trusted for signing or broadcast.
//! It includes modules for wire types, the construction asserter, a conformance runner
//! over recorded responses, and configuration.

pub mod types; // Decoded construction request/response entities.
pub mod asserter; // Pure validation checks over the wire types.
pub mod runner; // Checks recorded JSON responses against the asserter.
pub mod config; // Defines and loads run configuration.

// Re-export commonly used types and configurations for easier access.
pub use types::*;
pub use config::Config;
pub use asserter::{AssertionError, ErrorKind};
