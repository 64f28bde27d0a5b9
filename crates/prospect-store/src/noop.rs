//! No-op sink implementation.

use async_trait::async_trait;
use prospect_core::{ResearchProfile, ResearchReport, Result, ResultSink};
use tracing::trace;

/// A sink that doesn't store anything.
///
/// Every method returns `Ok(())`. Useful when output should only be printed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl NoopSink {
    /// Create a new no-op sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResultSink for NoopSink {
    async fn store_profile(&self, _profile: &ResearchProfile) -> Result<()> {
        trace!("NoopSink: store_profile called, doing nothing");
        Ok(())
    }

    async fn store_report(&self, _report: &ResearchReport) -> Result<()> {
        trace!("NoopSink: store_report called, doing nothing");
        Ok(())
    }
}
