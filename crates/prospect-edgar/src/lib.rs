#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/prospect/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! SEC EDGAR client for prospect research.
//!
//! This crate provides access to SEC EDGAR including:
//!
//! - CIK (Central Index Key) lookup from ticker symbols
//! - Company identity from the submissions API
//! - Company facts from the XBRL API
//! - Latest-annual extraction of the tracked financial concepts
//!
//! # Example
//!
//! ```no_run
//! use prospect_core::{FilingsProvider, ResearchConfig, Symbol};
//! use prospect_edgar::{EdgarClient, extract_snapshot};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EdgarClient::new(&ResearchConfig::default())?;
//!
//!     let symbol = Symbol::new("TGT");
//!     if let Some(cik) = client.resolve_filer_id(&symbol).await? {
//!         let identity = client.fetch_identity(&cik, &symbol).await?;
//!         let facts = client.fetch_facts(&cik).await?;
//!         let snapshot = extract_snapshot(&facts);
//!         println!("{}: net income {:?}", identity.legal_name, snapshot.net_income);
//!     }
//!
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use prospect_core::{
    BusinessAddress, CompanyFacts, DataProvider, FilerId, FilerIdentity, FilingsProvider,
    ResearchConfig, ResearchError, Result, Symbol, Throttle, de::string_or_number,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::debug;

mod extract;

pub use extract::{ANNUAL_FORMS, US_GAAP, USD, concept_tags, extract_snapshot, latest_annual};

/// SEC EDGAR client.
///
/// Resolves tickers, fetches company identity and XBRL facts. Every request waits
/// on the client's throttle first (SEC allows at most 10 requests/second).
#[derive(Debug)]
pub struct EdgarClient {
    client: reqwest::Client,
    throttle: Throttle,
    tickers_url: String,
    base_url: String,
    ticker_index: OnceCell<Arc<HashMap<String, FilerId>>>,
}

impl EdgarClient {
    /// Create a new EDGAR client from a research configuration.
    ///
    /// The SEC requires an identifying user agent of the form
    /// "AppName/Version (contact@email.com)".
    pub fn new(config: &ResearchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ResearchError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self::with_client(client, config))
    }

    /// Create a new EDGAR client with a custom HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: &ResearchConfig) -> Self {
        Self {
            client,
            throttle: Throttle::new(config.filings_interval()),
            tickers_url: config.endpoints.company_tickers_url.clone(),
            base_url: config.endpoints.edgar_base_url.trim_end_matches('/').to_string(),
            ticker_index: OnceCell::new(),
        }
    }

    fn submissions_url(&self, cik: &FilerId) -> String {
        format!("{}/submissions/CIK{}.json", self.base_url, cik)
    }

    fn company_facts_url(&self, cik: &FilerId) -> String {
        format!("{}/api/xbrl/companyfacts/CIK{}.json", self.base_url, cik)
    }

    /// Make a throttled GET request and decode the JSON response.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.throttle.wait().await;

        debug!("EDGAR request: {}", url);
        let response = self
            .client
            .get(url)
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
            .json()
            .await
            .map_err(|e| ResearchError::Parse(format!("Failed to decode {url}: {e}")))
    }

    /// Fetch the ticker table once and index it by uppercased ticker.
    ///
    /// A failed fetch leaves the index empty so the next lookup retries.
    async fn ticker_index(&self) -> Result<Arc<HashMap<String, FilerId>>> {
        self.ticker_index
            .get_or_try_init(|| async {
                debug!("Fetching company tickers from SEC");
                let table: TickerTable = self.get_json(&self.tickers_url).await?;
                let index = table.into_index();
                debug!(tickers = index.len(), "Indexed company tickers");
                Ok::<_, ResearchError>(Arc::new(index))
            })
            .await
            .cloned()
    }
}

impl DataProvider for EdgarClient {
    fn name(&self) -> &str {
        "SEC EDGAR"
    }

    fn description(&self) -> &str {
        "SEC EDGAR company submissions and XBRL financial facts"
    }
}

#[async_trait]
impl FilingsProvider for EdgarClient {
    async fn resolve_filer_id(&self, symbol: &Symbol) -> Result<Option<FilerId>> {
        if symbol.is_empty() {
            return Err(ResearchError::InvalidParameter("Empty ticker".to_string()));
        }

        let index = self.ticker_index().await?;
        let cik = index.get(symbol.as_str()).cloned();
        match &cik {
            Some(cik) => debug!("Found CIK {} for ticker {}", cik, symbol),
            None => debug!("No CIK for ticker {}", symbol),
        }
        Ok(cik)
    }

    async fn fetch_identity(&self, filer_id: &FilerId, symbol: &Symbol) -> Result<FilerIdentity> {
        let submissions: CompanySubmissions = self.get_json(&self.submissions_url(filer_id)).await?;
        Ok(submissions.into_identity(filer_id.clone(), symbol.clone()))
    }

    async fn fetch_facts(&self, filer_id: &FilerId) -> Result<CompanyFacts> {
        self.get_json(&self.company_facts_url(filer_id)).await
    }
}

// =============================================================================
// SEC API Response Types
// =============================================================================

/// Company ticker information from SEC JSON.
#[derive(Debug, Deserialize)]
struct CompanyTickerInfo {
    /// CIK (SEC returns this as an integer)
    #[serde(deserialize_with = "string_or_number")]
    cik_str: String,
    /// Ticker symbol
    ticker: String,
}

/// The full ticker table.
///
/// The SEC serves an object keyed by row index; a plain array is accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TickerTable {
    Indexed(HashMap<String, CompanyTickerInfo>),
    Listed(Vec<CompanyTickerInfo>),
}

impl TickerTable {
    /// Build the ticker index. When a ticker repeats, the lowest row wins.
    fn into_index(self) -> HashMap<String, FilerId> {
        let rows: Vec<CompanyTickerInfo> = match self {
            Self::Listed(rows) => rows,
            Self::Indexed(map) => {
                let mut keyed: Vec<(u64, CompanyTickerInfo)> = map
                    .into_iter()
                    .map(|(key, row)| (key.parse().unwrap_or(u64::MAX), row))
                    .collect();
                keyed.sort_by_key(|(key, _)| *key);
                keyed.into_iter().map(|(_, row)| row).collect()
            }
        };

        let mut index = HashMap::with_capacity(rows.len());
        for row in rows {
            let Some(cik) = FilerId::parse(&row.cik_str) else {
                continue;
            };
            index.entry(row.ticker.to_uppercase()).or_insert(cik);
        }
        index
    }
}

/// Company submissions/filings metadata.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CompanySubmissions {
    name: Option<String>,
    sic: Option<String>,
    sic_description: Option<String>,
    state_of_incorporation: Option<String>,
    fiscal_year_end: Option<String>,
    phone: Option<String>,
    addresses: Option<Addresses>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Addresses {
    business: Option<Address>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct Address {
    street1: Option<String>,
    street2: Option<String>,
    city: Option<String>,
    state_or_country: Option<String>,
    zip_code: Option<String>,
}

impl CompanySubmissions {
    /// Missing fields become empty strings.
    fn into_identity(self, filer_id: FilerId, symbol: Symbol) -> FilerIdentity {
        let address = self
            .addresses
            .and_then(|a| a.business)
            .unwrap_or_default();

        FilerIdentity {
            filer_id,
            legal_name: self.name.unwrap_or_default(),
            symbol,
            industry_code: self.sic.unwrap_or_default(),
            industry_description: self.sic_description.unwrap_or_default(),
            incorporation_state: self.state_of_incorporation.unwrap_or_default(),
            fiscal_year_end: self.fiscal_year_end.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            business_address: BusinessAddress {
                street1: address.street1.unwrap_or_default(),
                street2: address.street2.unwrap_or_default(),
                city: address.city.unwrap_or_default(),
                state_or_country: address.state_or_country.unwrap_or_default(),
                zip_code: address.zip_code.unwrap_or_default(),
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
