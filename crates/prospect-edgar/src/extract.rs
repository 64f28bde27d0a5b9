//! Latest-annual extraction of financial concepts from XBRL company facts.

use chrono::NaiveDate;
use prospect_core::{CompanyFacts, Concept, FactValue, FinancialSnapshot, ReportedValue};
use tracing::debug;

/// Taxonomy holding the tracked concepts.
pub const US_GAAP: &str = "us-gaap";

/// Unit of the monetary series.
pub const USD: &str = "USD";

/// Form types that count as an annual report.
///
/// `20-F` and `40-F` are the annual reports of foreign private issuers.
pub const ANNUAL_FORMS: &[&str] = &["10-K", "20-F", "40-F"];

/// Returns the XBRL tags consulted for a concept, in fallback order.
#[must_use]
pub const fn concept_tags(concept: Concept) -> &'static [&'static str] {
    match concept {
        Concept::Revenue => &[
            "Revenues",
            "RevenueFromContractWithCustomerExcludingAssessedTax",
        ],
        Concept::NetIncome => &["NetIncomeLoss"],
        Concept::TotalAssets => &["Assets"],
        Concept::CashAndEquivalents => &["CashAndCashEquivalentsAtCarryingValue"],
        Concept::StockholdersEquity => &["StockholdersEquity"],
    }
}

fn is_annual(value: &FactValue) -> bool {
    value
        .form
        .as_deref()
        .is_some_and(|form| ANNUAL_FORMS.contains(&form))
}

/// Returns the annual USD value of a tag with the latest period end.
///
/// Selection is by period-end date, never by position in the series. When
/// several annual filings report the same period end, the first one wins.
#[must_use]
pub fn latest_annual(facts: &CompanyFacts, tag: &str) -> Option<ReportedValue> {
    let values = facts.concept(US_GAAP, tag)?.values_in(USD);

    values
        .iter()
        .filter(|v| is_annual(v))
        .filter_map(|v| match NaiveDate::parse_from_str(&v.end, "%Y-%m-%d") {
            Ok(end) => Some(ReportedValue::new(v.val, end)),
            Err(_) => {
                debug!(tag, end = %v.end, "Skipping fact with unparseable period end");
                None
            }
        })
        .fold(None, |latest: Option<ReportedValue>, candidate| match latest {
            Some(current) if current.period_end >= candidate.period_end => Some(current),
            _ => Some(candidate),
        })
}

/// Extracts the latest annual value of every tracked concept.
///
/// A concept whose tags all lack annual USD values is left as `None`; this never
/// fails.
#[must_use]
pub fn extract_snapshot(facts: &CompanyFacts) -> FinancialSnapshot {
    let latest = |concept: Concept| {
        concept_tags(concept)
            .iter()
            .find_map(|tag| latest_annual(facts, tag))
    };

    FinancialSnapshot {
        revenue: latest(Concept::Revenue),
        net_income: latest(Concept::NetIncome),
        total_assets: latest(Concept::TotalAssets),
        cash_and_equivalents: latest(Concept::CashAndEquivalents),
        stockholders_equity: latest(Concept::StockholdersEquity),
    }
}
