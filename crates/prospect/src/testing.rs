//! In-memory providers for tests.

use async_trait::async_trait;
use prospect_core::{
    BusinessAddress, CompanyFacts, ConceptFacts, DataProvider, FactValue, FilerId, FilerIdentity,
    FilingsProvider, FoundationCandidate, FoundationProfile, NonprofitProvider, ResearchError,
    Result, Symbol,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Canned company data served by [`FakeFilings`].
#[derive(Debug, Clone)]
pub(crate) struct FakeCompany {
    pub(crate) cik: u64,
    pub(crate) name: String,
    pub(crate) industry: String,
    pub(crate) facts: Option<CompanyFacts>,
}

impl FakeCompany {
    pub(crate) fn new(cik: u64, name: &str, industry: &str) -> Self {
        Self {
            cik,
            name: name.to_string(),
            industry: industry.to_string(),
            facts: Some(CompanyFacts::default()),
        }
    }

    /// Adds a single annual USD value for a us-gaap tag.
    pub(crate) fn with_fact(mut self, tag: &str, val: f64, end: &str) -> Self {
        let facts = self.facts.get_or_insert_with(CompanyFacts::default);
        facts
            .facts
            .entry("us-gaap".to_string())
            .or_default()
            .entry(tag.to_string())
            .or_insert_with(ConceptFacts::default)
            .units
            .entry("USD".to_string())
            .or_default()
            .push(FactValue::new(val, end, "10-K"));
        self
    }

    pub(crate) fn without_facts(mut self) -> Self {
        self.facts = None;
        self
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeFilings {
    companies: HashMap<String, FakeCompany>,
    failing_identity: Vec<String>,
    resolver_down: bool,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl FakeFilings {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_company(mut self, symbol: &str, company: FakeCompany) -> Self {
        self.companies.insert(symbol.to_uppercase(), company);
        self
    }

    pub(crate) fn with_failing_identity(mut self, symbol: &str) -> Self {
        self.failing_identity.push(symbol.to_uppercase());
        self
    }

    pub(crate) fn with_resolver_down(mut self) -> Self {
        self.resolver_down = true;
        self
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn by_cik(&self, cik: &FilerId) -> Option<(&String, &FakeCompany)> {
        self.companies
            .iter()
            .find(|(_, c)| FilerId::from_number(c.cik) == *cik)
    }
}

impl DataProvider for FakeFilings {
    fn name(&self) -> &str {
        "Fake Filings"
    }

    fn description(&self) -> &str {
        "in-memory filings registry"
    }
}

#[async_trait]
impl FilingsProvider for FakeFilings {
    async fn resolve_filer_id(&self, symbol: &Symbol) -> Result<Option<FilerId>> {
        self.record(format!("resolve {symbol}"));
        if self.resolver_down {
            return Err(ResearchError::Network("connection refused".to_string()));
        }
        Ok(self
            .companies
            .get(symbol.as_str())
            .map(|c| FilerId::from_number(c.cik)))
    }

    async fn fetch_identity(&self, filer_id: &FilerId, symbol: &Symbol) -> Result<FilerIdentity> {
        self.record(format!("identity {filer_id}"));
        if self.failing_identity.iter().any(|s| s == symbol.as_str()) {
            return Err(ResearchError::Http {
                status: 503,
                url: format!("https://edgar.test/submissions/CIK{filer_id}.json"),
            });
        }
        let (_, company) = self
            .by_cik(filer_id)
            .ok_or_else(|| ResearchError::Http {
                status: 404,
                url: filer_id.to_string(),
            })?;
        Ok(FilerIdentity {
            filer_id: filer_id.clone(),
            legal_name: company.name.to_uppercase(),
            symbol: symbol.clone(),
            industry_code: "0000".to_string(),
            industry_description: company.industry.clone(),
            incorporation_state: "MN".to_string(),
            fiscal_year_end: "1231".to_string(),
            phone: String::new(),
            business_address: BusinessAddress::default(),
        })
    }

    async fn fetch_facts(&self, filer_id: &FilerId) -> Result<CompanyFacts> {
        self.record(format!("facts {filer_id}"));
        self.by_cik(filer_id)
            .and_then(|(_, c)| c.facts.clone())
            .ok_or_else(|| ResearchError::Parse("truncated facts payload".to_string()))
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeNonprofit {
    search_results: HashMap<String, Vec<FoundationCandidate>>,
    failing_queries: Vec<String>,
    profiles: HashMap<String, FoundationProfile>,
    pub(crate) queries: Mutex<Vec<String>>,
    pub(crate) lookups: Mutex<Vec<String>>,
}

impl FakeNonprofit {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_results(mut self, query: &str, names: &[(&str, &str)]) -> Self {
        let hits = names
            .iter()
            .map(|(name, ein)| FoundationCandidate {
                name: (*name).to_string(),
                tax_id: (*ein).to_string(),
                city: Some("MINNEAPOLIS".to_string()),
                state: Some("MN".to_string()),
            })
            .collect();
        self.search_results.insert(query.to_string(), hits);
        self
    }

    pub(crate) fn with_failing_query(mut self, query: &str) -> Self {
        self.failing_queries.push(query.to_string());
        self
    }

    pub(crate) fn with_profile(mut self, profile: FoundationProfile) -> Self {
        self.profiles.insert(profile.tax_id.clone(), profile);
        self
    }

    pub(crate) fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl DataProvider for FakeNonprofit {
    fn name(&self) -> &str {
        "Fake Nonprofits"
    }

    fn description(&self) -> &str {
        "in-memory nonprofit registry"
    }
}

#[async_trait]
impl NonprofitProvider for FakeNonprofit {
    async fn search(&self, query: &str) -> Result<Vec<FoundationCandidate>> {
        self.queries.lock().unwrap().push(query.to_string());
        if self.failing_queries.iter().any(|q| q == query) {
            return Err(ResearchError::Http {
                status: 500,
                url: "https://nonprofits.test/search.json".to_string(),
            });
        }
        Ok(self.search_results.get(query).cloned().unwrap_or_default())
    }

    async fn organization(&self, tax_id: &str) -> Result<Option<FoundationProfile>> {
        self.lookups.lock().unwrap().push(tax_id.to_string());
        Ok(self.profiles.get(tax_id).cloned())
    }
}
