//! JSON file sink implementation.

use async_trait::async_trait;
use prospect_core::{ResearchError, ResearchProfile, ResearchReport, Result, ResultSink, Symbol};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// File name of the combined report.
pub const COMBINED_FILE: &str = "prospects_combined.json";

/// Writes research output as pretty-printed JSON.
///
/// Each profile goes to `{SYMBOL}_prospect_profile.json` and the report to
/// [`COMBINED_FILE`], all inside one output directory which is created on first
/// write. Existing files are overwritten.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    dir: PathBuf,
}

impl JsonFileSink {
    /// Create a sink writing into `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the output directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the path a profile for `symbol` is written to.
    #[must_use]
    pub fn profile_path(&self, symbol: &Symbol) -> PathBuf {
        self.dir.join(format!("{symbol}_prospect_profile.json"))
    }

    /// Returns the path of the combined report.
    #[must_use]
    pub fn combined_path(&self) -> PathBuf {
        self.dir.join(COMBINED_FILE)
    }

    async fn write_json<T: Serialize + Sync>(&self, path: &Path, value: &T) -> Result<()> {
        let body = serde_json::to_vec_pretty(value)
            .map_err(|e| ResearchError::Serialization(e.to_string()))?;
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(path, body).await?;
        debug!(path = %path.display(), "Wrote JSON");
        Ok(())
    }
}

#[async_trait]
impl ResultSink for JsonFileSink {
    #[instrument(skip(self, profile), fields(symbol = %profile.symbol()))]
    async fn store_profile(&self, profile: &ResearchProfile) -> Result<()> {
        self.write_json(&self.profile_path(profile.symbol()), profile)
            .await
    }

    #[instrument(skip(self, report), fields(outcomes = report.outcomes.len()))]
    async fn store_report(&self, report: &ResearchReport) -> Result<()> {
        self.write_json(&self.combined_path(), report).await
    }
}
