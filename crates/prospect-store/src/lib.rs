#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/prospect/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Result sinks for prospect research output.
//!
//! This crate provides implementations of the [`ResultSink`] trait from `prospect-core`:
//!
//! - [`JsonFileSink`] - Pretty-printed JSON files in an output directory
//! - [`InMemorySink`] - In-memory store for testing
//! - [`NoopSink`] - Sink that doesn't store anything

/// JSON file sink implementation.
pub mod json;
/// In-memory sink implementation.
pub mod memory;
/// No-op sink implementation.
pub mod noop;

// Re-export the trait for convenience
pub use prospect_core::ResultSink;

// Re-export implementations
pub use json::JsonFileSink;
pub use memory::InMemorySink;
pub use noop::NoopSink;

#[cfg(test)]
pub(crate) mod fixtures;
