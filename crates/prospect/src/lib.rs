#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/prospect/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Corporate prospect research pipeline.
//!
//! This crate re-exports the core types and wires the SEC EDGAR and ProPublica
//! clients into a [`ResearchOrchestrator`], which resolves each configured
//! company, gathers its filings and foundation data, and scores it.
//!
//! # Example
//!
//! ```rust,ignore
//! use prospect::{PriorityListing, ReportRenderer, ResearchConfig, ResearchOrchestrator};
//!
//! #[tokio::main]
//! async fn main() -> prospect::Result<()> {
//!     let orchestrator = ResearchOrchestrator::from_config(&ResearchConfig::default())?;
//!     let report = orchestrator.run().await;
//!
//!     let profiles: Vec<_> = report.successes().collect();
//!     println!("{}", PriorityListing.render(&profiles, &report.priority())?);
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use prospect_core::*;

// Upstream clients
pub use prospect_edgar::EdgarClient;
pub use prospect_nonprofit::NonprofitClient;

pub mod locator;
pub mod report;
pub mod scoring;

mod orchestrator;
pub use orchestrator::ResearchOrchestrator;

pub use locator::FoundationLocator;
pub use report::{PriorityListing, SummaryTable};
pub use scoring::{AlignmentScorer, capacity_tier, rate_capacity};

#[cfg(test)]
mod testing;
