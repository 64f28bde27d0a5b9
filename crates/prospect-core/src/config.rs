//! Research configuration.
//!
//! [`ResearchConfig`] carries the company list, upstream endpoints, request
//! timeout and per-upstream spacing. It is built once and handed to the
//! clients and the orchestrator at construction.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{ResearchError, Result};
use crate::types::CompanyConfig;

/// SEC company tickers URL.
pub const DEFAULT_COMPANY_TICKERS_URL: &str = "https://www.sec.gov/files/company_tickers.json";

/// SEC EDGAR API base URL.
pub const DEFAULT_EDGAR_BASE_URL: &str = "https://data.sec.gov";

/// ProPublica Nonprofit Explorer API base URL.
pub const DEFAULT_NONPROFIT_BASE_URL: &str = "https://projects.propublica.org/nonprofits/api/v2";

/// Identifying user agent sent to the SEC.
pub const DEFAULT_USER_AGENT: &str = "ProspectResearch/1.0 (research@example.org)";

/// Upstream endpoint locations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Full ticker-to-CIK table.
    pub company_tickers_url: String,
    /// Base URL for submissions and company facts.
    pub edgar_base_url: String,
    /// Base URL for nonprofit search and organization detail.
    pub nonprofit_base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            company_tickers_url: DEFAULT_COMPANY_TICKERS_URL.to_string(),
            edgar_base_url: DEFAULT_EDGAR_BASE_URL.to_string(),
            nonprofit_base_url: DEFAULT_NONPROFIT_BASE_URL.to_string(),
        }
    }
}

/// Configuration for a research pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchConfig {
    /// User agent identifying the application to upstreams.
    pub user_agent: String,
    /// Upstream endpoints.
    pub endpoints: Endpoints,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Minimum spacing between filings API calls, in milliseconds.
    pub filings_interval_ms: u64,
    /// Minimum spacing between nonprofit API calls, in milliseconds.
    pub nonprofit_interval_ms: u64,
    /// How many search results are inspected per foundation search phrase.
    pub foundation_search_limit: usize,
    /// How many foundation filings are kept, most recent first.
    pub foundation_filings_limit: usize,
    /// Region whose headquarters count as local.
    pub region: String,
    /// Organization on whose behalf research is done.
    pub beneficiary: String,
    /// Companies to research, in order.
    pub companies: Vec<CompanyConfig>,
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            endpoints: Endpoints::default(),
            request_timeout_secs: 30,
            filings_interval_ms: 100,
            nonprofit_interval_ms: 100,
            foundation_search_limit: 10,
            foundation_filings_limit: 3,
            region: "Minnesota".to_string(),
            beneficiary: "CCRF".to_string(),
            companies: vec![
                CompanyConfig::new("TGT", "Target Corporation", "Minneapolis"),
                CompanyConfig::new("MMM", "3M Company", "St. Paul"),
                CompanyConfig::new("UNH", "UnitedHealth Group", "Minnetonka"),
            ],
        }
    }
}

impl ResearchConfig {
    /// Loads a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| ResearchError::Parse(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can drive a research pass.
    pub fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            return Err(ResearchError::InvalidParameter(
                "user_agent must not be empty".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(ResearchError::InvalidParameter(
                "request_timeout_secs must be positive".to_string(),
            ));
        }
        if let Some(company) = self.companies.iter().find(|c| c.symbol.is_empty()) {
            return Err(ResearchError::InvalidParameter(format!(
                "company '{}' has an empty symbol",
                company.display_name
            )));
        }
        Ok(())
    }

    /// HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Minimum spacing between filings API calls.
    #[must_use]
    pub const fn filings_interval(&self) -> Duration {
        Duration::from_millis(self.filings_interval_ms)
    }

    /// Minimum spacing between nonprofit API calls.
    #[must_use]
    pub const fn nonprofit_interval(&self) -> Duration {
        Duration::from_millis(self.nonprofit_interval_ms)
    }
}
