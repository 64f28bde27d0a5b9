//! In-memory sink implementation.

use async_trait::async_trait;
use prospect_core::{ResearchProfile, ResearchReport, Result, ResultSink, Symbol};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Simple in-memory sink for testing and embedding.
///
/// Profiles are keyed by symbol, so storing a symbol again replaces the earlier
/// profile. Only the most recent report is kept.
#[derive(Debug, Default)]
pub struct InMemorySink {
    profiles: RwLock<HashMap<Symbol, ResearchProfile>>,
    report: RwLock<Option<ResearchReport>>,
}

impl InMemorySink {
    /// Create a new empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored profile for `symbol`, if any.
    pub async fn profile(&self, symbol: &Symbol) -> Option<ResearchProfile> {
        self.profiles.read().await.get(symbol).cloned()
    }

    /// Returns the number of stored profiles.
    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    /// Returns true if no profiles are stored.
    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }

    /// Returns the most recently stored report.
    pub async fn report(&self) -> Option<ResearchReport> {
        self.report.read().await.clone()
    }
}

#[async_trait]
impl ResultSink for InMemorySink {
    #[instrument(skip(self, profile), fields(symbol = %profile.symbol()))]
    async fn store_profile(&self, profile: &ResearchProfile) -> Result<()> {
        let mut profiles = self.profiles.write().await;
        profiles.insert(profile.symbol().clone(), profile.clone());
        debug!("Stored profile");
        Ok(())
    }

    #[instrument(skip(self, report))]
    async fn store_report(&self, report: &ResearchReport) -> Result<()> {
        *self.report.write().await = Some(report.clone());
        debug!(outcomes = report.outcomes.len(), "Stored report");
        Ok(())
    }
}
