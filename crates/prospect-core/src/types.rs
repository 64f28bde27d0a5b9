//! Core data types for prospect research.
//!
//! This module defines the entities a research pass produces:
//!
//! - [`Symbol`] - Trading symbol/ticker
//! - [`CompanyConfig`] - A company to research
//! - [`FilerId`] / [`FilerIdentity`] - Filings-registry identity of a company
//! - [`FinancialSnapshot`] - Latest annual values of the tracked concepts
//! - [`FoundationCandidate`] / [`FoundationProfile`] - Affiliated nonprofit data
//! - [`CapacityRating`] / [`AlignmentAssessment`] - Derived ratings
//! - [`ResearchProfile`] / [`ResearchOutcome`] / [`ResearchReport`] - Assembled results

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A trading symbol/ticker.
///
/// Symbols are automatically uppercased on creation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    /// Creates a new symbol from a string, converting to uppercase.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into().trim().to_uppercase())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the symbol is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

/// A company to research, supplied by configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Trading symbol.
    pub symbol: Symbol,
    /// Name used for display and foundation search.
    pub display_name: String,
    /// City of the headquarters.
    pub locality: String,
}

impl CompanyConfig {
    /// Creates a new company entry.
    #[must_use]
    pub fn new(
        symbol: impl Into<Symbol>,
        display_name: impl Into<String>,
        locality: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
            locality: locality.into(),
        }
    }
}

/// Width of a filer identifier once zero-padded.
pub const FILER_ID_WIDTH: usize = 10;

/// Filer identifier (SEC CIK), always stored zero-padded to ten digits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilerId(String);

impl FilerId {
    /// Creates an identifier from its numeric form.
    #[must_use]
    pub fn from_number(cik: u64) -> Self {
        Self(format!("{cik:0>FILER_ID_WIDTH$}"))
    }

    /// Parses an identifier from a string of digits, padding it to full width.
    ///
    /// Returns `None` if the input is empty, contains non-digits, or is wider
    /// than ten digits.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() || s.len() > FILER_ID_WIDTH || !s.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        Some(Self(format!("{s:0>FILER_ID_WIDTH$}")))
    }

    /// Returns the zero-padded identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Business address as reported in a company's filings metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessAddress {
    /// First street line.
    pub street1: String,
    /// Second street line.
    pub street2: String,
    /// City.
    pub city: String,
    /// State or country code.
    pub state_or_country: String,
    /// Postal code.
    pub zip_code: String,
}

/// Identity of a company in the filings registry.
///
/// Fields missing from the upstream payload are empty strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilerIdentity {
    /// Filer identifier.
    pub filer_id: FilerId,
    /// Registered legal name.
    pub legal_name: String,
    /// Trading symbol the identity was resolved from.
    pub symbol: Symbol,
    /// Standard Industrial Classification code.
    pub industry_code: String,
    /// Description of the industry classification.
    pub industry_description: String,
    /// State of incorporation.
    pub incorporation_state: String,
    /// Fiscal year end as MMDD.
    pub fiscal_year_end: String,
    /// Business phone number.
    pub phone: String,
    /// Business address.
    pub business_address: BusinessAddress,
}

/// A financial concept tracked in a [`FinancialSnapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concept {
    /// Total revenue.
    Revenue,
    /// Net income (loss).
    NetIncome,
    /// Total assets.
    TotalAssets,
    /// Cash and cash equivalents.
    CashAndEquivalents,
    /// Stockholders' equity.
    StockholdersEquity,
}

impl Concept {
    /// All tracked concepts in display order.
    pub const ALL: [Self; 5] = [
        Self::Revenue,
        Self::NetIncome,
        Self::TotalAssets,
        Self::CashAndEquivalents,
        Self::StockholdersEquity,
    ];

    /// Returns the snapshot key for this concept.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::NetIncome => "net_income",
            Self::TotalAssets => "total_assets",
            Self::CashAndEquivalents => "cash_and_equivalents",
            Self::StockholdersEquity => "stockholders_equity",
        }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported value with the end date of its reporting period.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReportedValue {
    /// Reported amount in USD.
    pub value: f64,
    /// End of the reporting period.
    pub period_end: NaiveDate,
}

impl ReportedValue {
    /// Creates a new reported value.
    #[must_use]
    pub const fn new(value: f64, period_end: NaiveDate) -> Self {
        Self { value, period_end }
    }
}

/// Latest annual value of each tracked concept.
///
/// A `None` field means the concept was not reported in any annual filing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    /// Total revenue.
    pub revenue: Option<ReportedValue>,
    /// Net income (loss).
    pub net_income: Option<ReportedValue>,
    /// Total assets.
    pub total_assets: Option<ReportedValue>,
    /// Cash and cash equivalents.
    pub cash_and_equivalents: Option<ReportedValue>,
    /// Stockholders' equity.
    pub stockholders_equity: Option<ReportedValue>,
}

impl FinancialSnapshot {
    /// Returns the reported value for a concept.
    #[must_use]
    pub const fn get(&self, concept: Concept) -> Option<&ReportedValue> {
        match concept {
            Concept::Revenue => self.revenue.as_ref(),
            Concept::NetIncome => self.net_income.as_ref(),
            Concept::TotalAssets => self.total_assets.as_ref(),
            Concept::CashAndEquivalents => self.cash_and_equivalents.as_ref(),
            Concept::StockholdersEquity => self.stockholders_equity.as_ref(),
        }
    }

    /// Returns just the amount reported for a concept.
    #[must_use]
    pub fn value(&self, concept: Concept) -> Option<f64> {
        self.get(concept).map(|v| v.value)
    }

    /// Returns true if no concept was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        Concept::ALL.iter().all(|c| self.get(*c).is_none())
    }
}

/// An organization returned by the nonprofit registry search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundationCandidate {
    /// Organization name.
    pub name: String,
    /// Employer identification number.
    pub tax_id: String,
    /// City.
    pub city: Option<String>,
    /// State.
    pub state: Option<String>,
}

/// One year of a foundation's filing history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FoundationFilingYear {
    /// Tax period year.
    pub year: Option<i32>,
    /// Total revenue.
    pub revenue: Option<f64>,
    /// Total functional expenses.
    pub expenses: Option<f64>,
    /// Total assets at end of year.
    pub total_assets: Option<f64>,
    /// Contributions and grants paid.
    pub grants_paid: Option<f64>,
}

/// Detailed record of a nonprofit foundation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FoundationProfile {
    /// Organization name.
    pub name: String,
    /// Employer identification number.
    pub tax_id: String,
    /// Total assets on record.
    pub total_assets: Option<f64>,
    /// Total income on record.
    pub total_revenue: Option<f64>,
    /// Date the tax-exempt ruling was granted.
    pub ruling_date: Option<String>,
    /// Most recent filings, newest first.
    pub recent_filings: Vec<FoundationFilingYear>,
}

/// Giving-capacity bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapacityTier {
    /// Standard gifts.
    Standard,
    /// Principal gifts.
    Principal,
    /// Leadership gifts.
    Leadership,
    /// Major gifts.
    Major,
}

impl CapacityTier {
    /// Returns the tier name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "MAJOR",
            Self::Leadership => "LEADERSHIP",
            Self::Principal => "PRINCIPAL",
            Self::Standard => "STANDARD",
        }
    }

    /// Returns the suggested gift range for this tier.
    #[must_use]
    pub const fn gift_range(&self) -> &'static str {
        match self {
            Self::Major => "$1M+",
            Self::Leadership => "$250K-$1M",
            Self::Principal => "$50K-$250K",
            Self::Standard => "$10K-$50K",
        }
    }
}

impl fmt::Display for CapacityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_str(), self.gift_range())
    }
}

/// Estimated giving capacity of a company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CapacityRating {
    /// Cash plus net income, in billions of USD.
    pub score: f64,
    /// Capacity bucket.
    pub tier: CapacityTier,
    /// Human-readable inputs behind the rating.
    pub rationale: Vec<String>,
}

/// Mission-alignment bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlignmentLevel {
    /// Strong fit.
    High,
    /// Moderate fit.
    Medium,
    /// No particular signal.
    Standard,
}

impl AlignmentLevel {
    /// Returns the level name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Standard => "STANDARD",
        }
    }
}

impl fmt::Display for AlignmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimated mission alignment of a company.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentAssessment {
    /// Alignment bucket.
    pub level: AlignmentLevel,
    /// Additive alignment score.
    pub score: i32,
    /// Matched factors in match order.
    pub factors: Vec<String>,
}

/// Complete research profile of one company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResearchProfile {
    /// The configured company.
    pub company: CompanyConfig,
    /// Filings-registry identity.
    pub identity: FilerIdentity,
    /// Latest annual financials.
    pub financials: FinancialSnapshot,
    /// Affiliated foundation found by search, if any.
    pub foundation: Option<FoundationCandidate>,
    /// Detailed foundation record, if it could be retrieved.
    pub foundation_profile: Option<FoundationProfile>,
    /// Giving-capacity rating.
    pub capacity: CapacityRating,
    /// Mission-alignment assessment.
    pub alignment: AlignmentAssessment,
    /// When the profile was captured.
    pub researched_at: DateTime<Utc>,
}

impl ResearchProfile {
    /// Returns the trading symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.company.symbol
    }
}

/// Minimal record of a company whose research could not be completed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchFailure {
    /// Trading symbol.
    pub symbol: Symbol,
    /// Why research failed.
    pub error_message: String,
}

/// Result of researching one company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResearchOutcome {
    /// Research completed.
    Completed(Box<ResearchProfile>),
    /// Research failed for this company.
    Failed(ResearchFailure),
}

impl ResearchOutcome {
    /// Returns the trading symbol of the researched company.
    #[must_use]
    pub fn symbol(&self) -> &Symbol {
        match self {
            Self::Completed(profile) => profile.symbol(),
            Self::Failed(failure) => &failure.symbol,
        }
    }

    /// Returns the profile if research completed.
    #[must_use]
    pub fn profile(&self) -> Option<&ResearchProfile> {
        match self {
            Self::Completed(profile) => Some(profile),
            Self::Failed(_) => None,
        }
    }

    /// Returns the failure record if research failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&ResearchFailure> {
        match self {
            Self::Completed(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}

/// Results of a full research pass across the configured companies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResearchReport {
    /// When the pass finished.
    pub generated_at: DateTime<Utc>,
    /// Number of companies attempted.
    pub companies_analyzed: usize,
    /// Names of the upstream sources consulted.
    pub data_sources: Vec<String>,
    /// One outcome per company, in configuration order.
    pub outcomes: Vec<ResearchOutcome>,
}

impl ResearchReport {
    /// Returns the completed profiles in configuration order.
    pub fn successes(&self) -> impl Iterator<Item = &ResearchProfile> {
        self.outcomes.iter().filter_map(ResearchOutcome::profile)
    }

    /// Returns the failure records in configuration order.
    pub fn failures(&self) -> impl Iterator<Item = &ResearchFailure> {
        self.outcomes.iter().filter_map(ResearchOutcome::failure)
    }

    /// Returns completed profiles ordered by capacity score, highest first.
    ///
    /// Profiles with equal scores keep their configuration order.
    #[must_use]
    pub fn priority(&self) -> Vec<&ResearchProfile> {
        let mut ranked: Vec<&ResearchProfile> = self.successes().collect();
        ranked.sort_by(|a, b| b.capacity.score.total_cmp(&a.capacity.score));
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(symbol: &str, score: f64) -> ResearchProfile {
        ResearchProfile {
            company: CompanyConfig::new(symbol, format!("{symbol} Inc"), "Minneapolis"),
            identity: FilerIdentity {
                filer_id: FilerId::from_number(1),
                legal_name: format!("{symbol} INC"),
                symbol: Symbol::new(symbol),
                industry_code: String::new(),
                industry_description: String::new(),
                incorporation_state: String::new(),
                fiscal_year_end: String::new(),
                phone: String::new(),
                business_address: BusinessAddress::default(),
            },
            financials: FinancialSnapshot::default(),
            foundation: None,
            foundation_profile: None,
            capacity: CapacityRating {
                score,
                tier: CapacityTier::Standard,
                rationale: Vec::new(),
            },
            alignment: AlignmentAssessment {
                level: AlignmentLevel::Medium,
                score: 2,
                factors: Vec::new(),
            },
            researched_at: Utc::now(),
        }
    }

    #[test]
    fn test_symbol_creation() {
        let symbol = Symbol::new(" tgt ");
        assert_eq!(symbol.as_str(), "TGT");
        assert_eq!(Symbol::from("mmm"), Symbol::new("MMM"));
    }

    #[test]
    fn test_filer_id_padding() {
        assert_eq!(FilerId::from_number(27419).as_str(), "0000027419");
        assert_eq!(FilerId::parse("66740").unwrap().as_str(), "0000066740");
        assert_eq!(FilerId::parse("0000731766").unwrap().as_str(), "0000731766");
        assert!(FilerId::parse("").is_none());
        assert!(FilerId::parse("12a").is_none());
        assert!(FilerId::parse("12345678901").is_none());
    }

    #[test]
    fn test_snapshot_lookup() {
        let end = NaiveDate::from_ymd_opt(2024, 2, 3).unwrap();
        let snapshot = FinancialSnapshot {
            net_income: Some(ReportedValue::new(4.1e9, end)),
            ..Default::default()
        };
        assert_eq!(snapshot.value(Concept::NetIncome), Some(4.1e9));
        assert!(snapshot.get(Concept::Revenue).is_none());
        assert!(!snapshot.is_empty());
        assert!(FinancialSnapshot::default().is_empty());
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(CapacityTier::Major.to_string(), "MAJOR ($1M+)");
        assert_eq!(CapacityTier::Standard.to_string(), "STANDARD ($10K-$50K)");
        assert!(CapacityTier::Major > CapacityTier::Leadership);
    }

    #[test]
    fn test_priority_is_stable_and_descending() {
        let report = ResearchReport {
            generated_at: Utc::now(),
            companies_analyzed: 4,
            data_sources: Vec::new(),
            outcomes: vec![
                ResearchOutcome::Completed(Box::new(profile("AAA", 3.0))),
                ResearchOutcome::Failed(ResearchFailure {
                    symbol: Symbol::new("BAD"),
                    error_message: "no filer id".into(),
                }),
                ResearchOutcome::Completed(Box::new(profile("BBB", 35.0))),
                ResearchOutcome::Completed(Box::new(profile("CCC", 3.0))),
            ],
        };

        let ranked: Vec<&str> = report.priority().iter().map(|p| p.symbol().as_str()).collect();
        assert_eq!(ranked, vec!["BBB", "AAA", "CCC"]);
        assert_eq!(report.failures().count(), 1);
        assert_eq!(report.successes().count(), 3);
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let failed = ResearchOutcome::Failed(ResearchFailure {
            symbol: Symbol::new("zzz"),
            error_message: "Could not find filer id for ZZZ".into(),
        });
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["symbol"], "ZZZ");
        assert_eq!(json["error_message"], "Could not find filer id for ZZZ");
    }
}
