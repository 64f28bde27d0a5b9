#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/prospect/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! ProPublica Nonprofit Explorer client.
//!
//! This crate implements [`NonprofitProvider`] for the
//! [Nonprofit Explorer API](https://projects.propublica.org/nonprofits/api):
//!
//! - Free-text organization search
//! - Organization detail with its Form 990 filing history
//!
//! # Usage
//!
//! ```rust,ignore
//! use prospect_core::{NonprofitProvider, ResearchConfig};
//! use prospect_nonprofit::NonprofitClient;
//!
//! let client = NonprofitClient::new(&ResearchConfig::default())?;
//! let hits = client.search("Target Corporation foundation").await?;
//! if let Some(hit) = hits.first() {
//!     let profile = client.organization(&hit.tax_id).await?;
//! }
//! ```

use async_trait::async_trait;
use prospect_core::{
    DataProvider, FoundationCandidate, FoundationFilingYear, FoundationProfile, NonprofitProvider,
    ResearchConfig, ResearchError, Result, Throttle, de::opt_string_or_number,
};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

/// ProPublica Nonprofit Explorer client.
#[derive(Debug, Clone)]
pub struct NonprofitClient {
    client: Client,
    throttle: Throttle,
    base_url: String,
    filings_limit: usize,
}

impl NonprofitClient {
    /// Create a new client from a research configuration.
    pub fn new(config: &ResearchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ResearchError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, config))
    }

    /// Create a new client with a custom HTTP client.
    #[must_use]
    pub fn with_client(client: Client, config: &ResearchConfig) -> Self {
        Self {
            client,
            throttle: Throttle::new(config.nonprofit_interval()),
            base_url: config
                .endpoints
                .nonprofit_base_url
                .trim_end_matches('/')
                .to_string(),
            filings_limit: config.foundation_filings_limit,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search.json", self.base_url)
    }

    fn organization_url(&self, tax_id: &str) -> String {
        format!("{}/organizations/{tax_id}.json", self.base_url)
    }

    /// Make a throttled GET request and return the response body.
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String> {
        self.throttle.wait().await;

        debug!("Nonprofit request: {} {:?}", url, query);
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| ResearchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ResearchError::Http {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ResearchError::Network(e.to_string()))
    }
}

impl DataProvider for NonprofitClient {
    fn name(&self) -> &str {
        "ProPublica Nonprofit Explorer"
    }

    fn description(&self) -> &str {
        "Form 990 data for US tax-exempt organizations"
    }
}

#[async_trait]
impl NonprofitProvider for NonprofitClient {
    async fn search(&self, query: &str) -> Result<Vec<FoundationCandidate>> {
        let text = self.get(&self.search_url(), &[("q", query)]).await?;
        parse_search(&text)
    }

    async fn organization(&self, tax_id: &str) -> Result<Option<FoundationProfile>> {
        let tax_id = tax_id.trim();
        if tax_id.is_empty() {
            return Ok(None);
        }

        match self.get(&self.organization_url(tax_id), &[]).await {
            Ok(text) => parse_organization(&text, tax_id, self.filings_limit).map(Some),
            Err(ResearchError::Http { status, .. }) => {
                if status != StatusCode::NOT_FOUND.as_u16() {
                    warn!(status, tax_id, "Organization lookup returned an error status");
                }
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

fn parse_search(text: &str) -> Result<Vec<FoundationCandidate>> {
    let response: SearchResponse = serde_json::from_str(text)
        .map_err(|e| ResearchError::Parse(format!("Failed to parse search results: {e}")))?;

    Ok(response
        .organizations
        .into_iter()
        .map(|org| FoundationCandidate {
            name: org.name.unwrap_or_default(),
            tax_id: org.ein.unwrap_or_default(),
            city: org.city,
            state: org.state,
        })
        .collect())
}

/// Filings are kept in the order the registry returns them (newest first).
fn parse_organization(text: &str, tax_id: &str, filings_limit: usize) -> Result<FoundationProfile> {
    let response: OrganizationResponse = serde_json::from_str(text)
        .map_err(|e| ResearchError::Parse(format!("Failed to parse organization {tax_id}: {e}")))?;

    let org = response.organization.unwrap_or_default();
    Ok(FoundationProfile {
        name: org.name.unwrap_or_default(),
        tax_id: tax_id.to_string(),
        total_assets: org.asset_amount,
        total_revenue: org.income_amount,
        ruling_date: org.ruling_date,
        recent_filings: response
            .filings_with_data
            .unwrap_or_default()
            .into_iter()
            .take(filings_limit)
            .map(|f| FoundationFilingYear {
                year: f.tax_prd_yr,
                revenue: f.totrevenue,
                expenses: f.totfuncexpns,
                total_assets: f.totassetsend,
                grants_paid: f.contrpdpbks,
            })
            .collect(),
    })
}

// =============================================================================
// API Response Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    organizations: Vec<SearchOrganization>,
}

#[derive(Debug, Deserialize)]
struct SearchOrganization {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    ein: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OrganizationResponse {
    #[serde(default)]
    organization: Option<Organization>,
    #[serde(default)]
    filings_with_data: Option<Vec<Filing>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Organization {
    name: Option<String>,
    asset_amount: Option<f64>,
    income_amount: Option<f64>,
    ruling_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Filing {
    #[serde(default)]
    tax_prd_yr: Option<i32>,
    #[serde(default)]
    totrevenue: Option<f64>,
    #[serde(default)]
    totfuncexpns: Option<f64>,
    #[serde(default)]
    totassetsend: Option<f64>,
    #[serde(default)]
    contrpdpbks: Option<f64>,
}
