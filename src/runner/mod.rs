//! Conformance Runner Module
//!
//! This module checks recorded construction responses against the asserter:
//! - Decodes each JSON document into its wire type
//! - Runs the matching construction check
//! - Collects per-file outcomes into a report

mod runner;

#[cfg(test)]
mod tests;

pub use runner::{
    CheckError,
    ConformanceRunner,
    Endpoint,
    Outcome,
    ResponseSource,
    RunReport,
    check_document,
};
