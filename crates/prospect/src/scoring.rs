//! Giving-capacity and mission-alignment scoring.

use prospect_core::{
    AlignmentAssessment, AlignmentLevel, CapacityRating, CapacityTier, Concept, FinancialSnapshot,
};

/// One billion USD.
pub const BILLION: f64 = 1_000_000_000.0;

/// Maps a capacity score (billions USD) to its tier. Thresholds are exclusive.
#[must_use]
pub fn capacity_tier(score: f64) -> CapacityTier {
    if score > 30.0 {
        CapacityTier::Major
    } else if score > 15.0 {
        CapacityTier::Leadership
    } else if score > 5.0 {
        CapacityTier::Principal
    } else {
        CapacityTier::Standard
    }
}

fn billions(label: &str, value: Option<f64>, unavailable: &str) -> String {
    match value {
        Some(v) => format!("{label}: ${:.1}B", v / BILLION),
        None => unavailable.to_string(),
    }
}

/// Rates giving capacity as `(cash + net income) / 1e9`.
///
/// Missing inputs count as zero. Total assets appear in the rationale but do not
/// affect the score.
#[must_use]
pub fn rate_capacity(financials: &FinancialSnapshot) -> CapacityRating {
    let cash = financials.value(Concept::CashAndEquivalents);
    let net_income = financials.value(Concept::NetIncome);
    let assets = financials.value(Concept::TotalAssets);

    let score = (cash.unwrap_or(0.0) + net_income.unwrap_or(0.0)) / BILLION;

    CapacityRating {
        score,
        tier: capacity_tier(score),
        rationale: vec![
            billions("Cash position", cash, "Cash data unavailable"),
            billions("Net income", net_income, "Net income data unavailable"),
            billions("Total assets", assets, "Assets data unavailable"),
        ],
    }
}

const HEALTHCARE_TERMS: &[&str] = &["health", "medical", "pharmaceutical", "hospital"];
const RETAIL_TERMS: &[&str] = &["retail", "store", "merchandise"];
const MANUFACTURING_TERMS: &[&str] = &["manufacturing", "chemical", "industrial"];

/// Maps an alignment score to its level.
#[must_use]
pub const fn alignment_level(score: i32) -> AlignmentLevel {
    if score >= 4 {
        AlignmentLevel::High
    } else if score >= 2 {
        AlignmentLevel::Medium
    } else {
        AlignmentLevel::Standard
    }
}

/// Scores mission alignment from the industry description and locality.
#[derive(Debug, Clone)]
pub struct AlignmentScorer {
    region: String,
    beneficiary: String,
}

impl AlignmentScorer {
    /// Create a scorer for companies headquartered in `region`, on behalf of
    /// `beneficiary`.
    #[must_use]
    pub fn new(region: impl Into<String>, beneficiary: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            beneficiary: beneficiary.into(),
        }
    }

    /// Assesses a company. Sector checks are independent and may all fire.
    #[must_use]
    pub fn assess(&self, industry_description: &str) -> AlignmentAssessment {
        let description = industry_description.to_lowercase();
        let mentions = |terms: &[&str]| terms.iter().any(|t| description.contains(t));

        let mut factors = Vec::new();
        let mut score = 0;

        if mentions(HEALTHCARE_TERMS) {
            factors.push(
                "Healthcare sector - STRONG alignment with pediatric health mission".to_string(),
            );
            score += 3;
        }
        if mentions(RETAIL_TERMS) {
            factors.push(
                "Retail sector - Strong community presence, cause marketing potential".to_string(),
            );
            score += 2;
        }
        if mentions(MANUFACTURING_TERMS) {
            factors.push("Manufacturing sector - Likely has established CSR programs".to_string());
            score += 1;
        }

        // Every researched company is headquartered in the region.
        factors.push(format!(
            "{} headquarters - Local community connection to {}",
            self.region, self.beneficiary
        ));
        score += 2;

        AlignmentAssessment {
            level: alignment_level(score),
            score,
            factors,
        }
    }
}
