//! Provider traits for the upstream registries.
//!
//! This module defines the core provider traits:
//!
//! - [`DataProvider`] - Base trait for all upstream providers
//! - [`FilingsProvider`] - Corporate filings registry (identifier, identity, facts)
//! - [`NonprofitProvider`] - Nonprofit registry (search, organization detail)

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    facts::CompanyFacts,
    types::{FilerId, FilerIdentity, FoundationCandidate, FoundationProfile, Symbol},
};

/// Base trait for all upstream providers.
pub trait DataProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "SEC EDGAR").
    fn name(&self) -> &str;

    /// Returns a description of this provider.
    fn description(&self) -> &str;
}

/// Provider for corporate filings data.
#[async_trait]
pub trait FilingsProvider: DataProvider {
    /// Resolves a trading symbol (case-insensitive) to its filer identifier.
    ///
    /// Returns `Ok(None)` if the registry has no entry for the symbol.
    async fn resolve_filer_id(&self, symbol: &Symbol) -> Result<Option<FilerId>>;

    /// Fetches the registry identity of a filer.
    async fn fetch_identity(&self, filer_id: &FilerId, symbol: &Symbol) -> Result<FilerIdentity>;

    /// Fetches the raw XBRL facts of a filer.
    async fn fetch_facts(&self, filer_id: &FilerId) -> Result<CompanyFacts>;
}

/// Provider for nonprofit registry data.
#[async_trait]
pub trait NonprofitProvider: DataProvider {
    /// Runs a free-text organization search, returning hits in registry order.
    async fn search(&self, query: &str) -> Result<Vec<FoundationCandidate>>;

    /// Fetches an organization and its filing history.
    ///
    /// Returns `Ok(None)` if the registry has no such organization.
    async fn organization(&self, tax_id: &str) -> Result<Option<FoundationProfile>>;
}
