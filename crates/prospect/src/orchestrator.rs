//! Research orchestrator sequencing the lookups for each configured company.

use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};

use prospect_core::{
    CompanyConfig, FilingsProvider, FinancialSnapshot, NonprofitProvider, ResearchConfig,
    ResearchFailure, ResearchOutcome, ResearchProfile, ResearchReport, Result,
};
use prospect_edgar::{EdgarClient, extract_snapshot};
use prospect_nonprofit::NonprofitClient;

use crate::locator::FoundationLocator;
use crate::scoring::{AlignmentScorer, rate_capacity};

/// Runs prospect research over a list of companies.
///
/// Companies are researched one at a time, each step awaited before the next.
/// Only a failed identifier resolution or identity fetch aborts a company; every
/// other lookup degrades to an absent field.
///
/// # Example
///
/// ```rust,ignore
/// use prospect::{ResearchConfig, ResearchOrchestrator};
///
/// let orchestrator = ResearchOrchestrator::from_config(&ResearchConfig::default())?;
/// let report = orchestrator.run().await;
/// for (rank, profile) in report.priority().iter().enumerate() {
///     println!("{}. {} - {}", rank + 1, profile.company.display_name, profile.capacity.tier);
/// }
/// ```
pub struct ResearchOrchestrator {
    filings: Arc<dyn FilingsProvider>,
    nonprofit: Arc<dyn NonprofitProvider>,
    locator: FoundationLocator,
    alignment: AlignmentScorer,
    companies: Vec<CompanyConfig>,
}

impl fmt::Debug for ResearchOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResearchOrchestrator")
            .field("filings", &self.filings.name())
            .field("nonprofit", &self.nonprofit.name())
            .field("alignment", &self.alignment)
            .field(
                "companies",
                &self
                    .companies
                    .iter()
                    .map(|c| c.symbol.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl ResearchOrchestrator {
    /// Create an orchestrator over the given providers.
    #[must_use]
    pub fn new(
        config: &ResearchConfig,
        filings: Arc<dyn FilingsProvider>,
        nonprofit: Arc<dyn NonprofitProvider>,
    ) -> Self {
        Self {
            locator: FoundationLocator::new(nonprofit.clone(), config.foundation_search_limit),
            filings,
            nonprofit,
            alignment: AlignmentScorer::new(&config.region, &config.beneficiary),
            companies: config.companies.clone(),
        }
    }

    /// Create an orchestrator backed by SEC EDGAR and ProPublica.
    pub fn from_config(config: &ResearchConfig) -> Result<Self> {
        config.validate()?;
        let filings = Arc::new(EdgarClient::new(config)?);
        let nonprofit = Arc::new(NonprofitClient::new(config)?);
        Ok(Self::new(config, filings, nonprofit))
    }

    /// Research every configured company, in order.
    pub async fn run(&self) -> ResearchReport {
        info!(
            companies = self.companies.len(),
            filings = self.filings.name(),
            nonprofit = self.nonprofit.name(),
            "Starting research pass"
        );

        let mut outcomes = Vec::with_capacity(self.companies.len());
        for company in &self.companies {
            let outcome = self.research_company(company).await;
            match &outcome {
                ResearchOutcome::Completed(profile) => info!(
                    symbol = %profile.symbol(),
                    industry = %profile.identity.industry_description,
                    capacity = %profile.capacity.tier,
                    alignment = %profile.alignment.level,
                    "Research complete"
                ),
                ResearchOutcome::Failed(failure) => warn!(
                    symbol = %failure.symbol,
                    error = %failure.error_message,
                    "Research failed"
                ),
            }
            outcomes.push(outcome);
        }

        let report = ResearchReport {
            generated_at: Utc::now(),
            companies_analyzed: outcomes.len(),
            data_sources: vec![
                self.filings.name().to_string(),
                self.nonprofit.name().to_string(),
            ],
            outcomes,
        };
        info!(
            succeeded = report.successes().count(),
            failed = report.failures().count(),
            "Research pass finished"
        );
        report
    }

    /// Research a single company.
    #[instrument(skip(self, company), fields(symbol = %company.symbol))]
    pub async fn research_company(&self, company: &CompanyConfig) -> ResearchOutcome {
        let symbol = &company.symbol;
        let failed = |error_message: String| {
            ResearchOutcome::Failed(ResearchFailure {
                symbol: symbol.clone(),
                error_message,
            })
        };

        info!("Resolving filer identifier");
        let filer_id = match self.filings.resolve_filer_id(symbol).await {
            Ok(Some(filer_id)) => filer_id,
            Ok(None) => return failed(format!("Could not find CIK for {symbol}")),
            Err(e) => return failed(format!("Could not resolve CIK for {symbol}: {e}")),
        };

        info!(cik = %filer_id, "Fetching company identity");
        let identity = match self.filings.fetch_identity(&filer_id, symbol).await {
            Ok(identity) => identity,
            Err(e) => return failed(format!("Could not fetch company identity: {e}")),
        };

        info!("Fetching XBRL financial data");
        let financials = match self.filings.fetch_facts(&filer_id).await {
            Ok(facts) => extract_snapshot(&facts),
            Err(e) => {
                warn!(error = %e, upstream = e.is_upstream(), "Financial facts unavailable");
                FinancialSnapshot::default()
            }
        };

        info!("Searching for corporate foundation");
        let foundation = self.locator.locate(&company.display_name).await;
        let foundation_profile = match &foundation {
            Some(candidate) => {
                info!(foundation = %candidate.name, "Found foundation");
                match self.nonprofit.organization(&candidate.tax_id).await {
                    Ok(profile) => profile,
                    Err(e) => {
                        warn!(
                            error = %e,
                            upstream = e.is_upstream(),
                            "Foundation details unavailable"
                        );
                        None
                    }
                }
            }
            None => None,
        };

        let capacity = rate_capacity(&financials);
        let alignment = self.alignment.assess(&identity.industry_description);

        ResearchOutcome::Completed(Box::new(ResearchProfile {
            company: company.clone(),
            identity,
            financials,
            foundation,
            foundation_profile,
            capacity,
            alignment,
            researched_at: Utc::now(),
        }))
    }
}
