//! Downstream collaborator traits.
//!
//! This module defines the consumers of finished research:
//!
//! - [`ResultSink`] - Persists profiles and whole reports
//! - [`ReportRenderer`] - Presents completed profiles and their priority order

use async_trait::async_trait;

use crate::{
    error::Result,
    types::{ResearchProfile, ResearchReport},
};

/// Trait for persisting research output.
///
/// Implementations can write to files, keep results in memory, or discard them.
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Stores the profile of one successfully researched company.
    async fn store_profile(&self, profile: &ResearchProfile) -> Result<()>;

    /// Stores a complete research report, failures included.
    async fn store_report(&self, report: &ResearchReport) -> Result<()>;
}

/// Trait for presenting research output.
///
/// Renderers only consume results; nothing flows back into research.
pub trait ReportRenderer {
    /// Rendered output type.
    type Output;

    /// Renders completed profiles (configuration order) and their priority order.
    fn render(
        &self,
        profiles: &[&ResearchProfile],
        priority: &[&ResearchProfile],
    ) -> Result<Self::Output>;
}
