//! Shared research output for sink tests.

use chrono::{NaiveDate, TimeZone, Utc};
use prospect_core::{
    AlignmentAssessment, AlignmentLevel, BusinessAddress, CapacityRating, CapacityTier,
    CompanyConfig, FilerId, FilerIdentity, FinancialSnapshot, ReportedValue, ResearchFailure,
    ResearchOutcome, ResearchProfile, ResearchReport, Symbol,
};

pub(crate) fn profile(symbol: &str, score: f64) -> ResearchProfile {
    let end = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
    ResearchProfile {
        company: CompanyConfig::new(symbol, format!("{symbol} Inc"), "Minneapolis"),
        identity: FilerIdentity {
            filer_id: FilerId::from_number(66740),
            legal_name: format!("{symbol} INC"),
            symbol: Symbol::new(symbol),
            industry_code: "3841".to_string(),
            industry_description: "Surgical & Medical Instruments & Apparatus".to_string(),
            incorporation_state: "DE".to_string(),
            fiscal_year_end: "1231".to_string(),
            phone: "651-733-1110".to_string(),
            business_address: BusinessAddress::default(),
        },
        financials: FinancialSnapshot {
            cash_and_equivalents: Some(ReportedValue::new(score * 1.0e9, end)),
            ..Default::default()
        },
        foundation: None,
        foundation_profile: None,
        capacity: CapacityRating {
            score,
            tier: CapacityTier::Principal,
            rationale: vec![format!("Cash position: ${score:.1}B")],
        },
        alignment: AlignmentAssessment {
            level: AlignmentLevel::Medium,
            score: 3,
            factors: vec!["Manufacturing sector - Likely has established CSR programs".to_string()],
        },
        researched_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

pub(crate) fn report() -> ResearchReport {
    ResearchReport {
        generated_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 5, 0).unwrap(),
        companies_analyzed: 2,
        data_sources: vec!["SEC EDGAR".to_string(), "ProPublica Nonprofit Explorer".to_string()],
        outcomes: vec![
            ResearchOutcome::Completed(Box::new(profile("MMM", 7.0))),
            ResearchOutcome::Failed(ResearchFailure {
                symbol: Symbol::new("ZZZZ"),
                error_message: "Could not find CIK for ZZZZ".to_string(),
            }),
        ],
    }
}
