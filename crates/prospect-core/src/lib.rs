#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/prospect/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core traits and types for prospect research.
//!
//! This crate provides the foundational abstractions shared by every research crate:
//!
//! - [`FilingsProvider`](provider::FilingsProvider) - Corporate filings registry
//! - [`NonprofitProvider`](provider::NonprofitProvider) - Nonprofit registry
//! - [`ResultSink`](sink::ResultSink) - Persistence of research output
//! - [`ReportRenderer`](sink::ReportRenderer) - Presentation of research output
//! - [`ResearchConfig`](config::ResearchConfig) - Configuration of a research pass
//! - [`Throttle`](rate_limit::Throttle) - Per-upstream request spacing

/// Research configuration.
pub mod config;
/// Deserialization helpers for loosely typed upstream payloads.
pub mod de;
/// Error types for research operations.
pub mod error;
/// Raw XBRL company facts.
pub mod facts;
/// Provider traits for the upstream registries.
pub mod provider;
/// Fixed-interval request spacing.
pub mod rate_limit;
/// Downstream collaborator traits.
pub mod sink;
/// Core data types (Symbol, FilerIdentity, ResearchProfile, etc.).
pub mod types;

// Re-export commonly used items at crate root
pub use config::{Endpoints, ResearchConfig};
pub use error::{ResearchError, Result};
pub use facts::{CompanyFacts, ConceptFacts, FactValue};
pub use provider::{DataProvider, FilingsProvider, NonprofitProvider};
pub use rate_limit::{RateLimiter, Throttle};
pub use sink::{ReportRenderer, ResultSink};
pub use types::{
    AlignmentAssessment, AlignmentLevel, BusinessAddress, CapacityRating, CapacityTier,
    CompanyConfig, Concept, FilerId, FilerIdentity, FinancialSnapshot, FoundationCandidate,
    FoundationFilingYear, FoundationProfile, ReportedValue, ResearchFailure, ResearchOutcome,
    ResearchProfile, ResearchReport, Symbol,
};
