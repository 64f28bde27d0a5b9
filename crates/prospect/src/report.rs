//! Presentation of completed research.
//!
//! - [`SummaryTable`] - Prospect summary matrix as a polars `DataFrame`
//! - [`PriorityListing`] - Ranked outreach listing as text

use polars::prelude::{Column, DataFrame};
use prospect_core::{Concept, ReportRenderer, ResearchError, ResearchProfile, Result};
use std::fmt::Write;

use crate::scoring::BILLION;

/// Renders one row per company: symbol, locality, revenue, net income and cash
/// (billions USD), foundation name, alignment level and capacity tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryTable;

impl ReportRenderer for SummaryTable {
    type Output = DataFrame;

    fn render(
        &self,
        profiles: &[&ResearchProfile],
        _priority: &[&ResearchProfile],
    ) -> Result<DataFrame> {
        let in_billions = |concept: Concept| -> Vec<Option<f64>> {
            profiles
                .iter()
                .map(|p| p.financials.value(concept).map(|v| v / BILLION))
                .collect()
        };

        let symbols: Vec<&str> = profiles.iter().map(|p| p.symbol().as_str()).collect();
        let localities: Vec<&str> = profiles.iter().map(|p| p.company.locality.as_str()).collect();
        let foundations: Vec<Option<&str>> = profiles
            .iter()
            .map(|p| p.foundation.as_ref().map(|f| f.name.as_str()))
            .collect();
        let alignment: Vec<&str> = profiles.iter().map(|p| p.alignment.level.as_str()).collect();
        let capacity: Vec<&str> = profiles.iter().map(|p| p.capacity.tier.as_str()).collect();

        DataFrame::new(vec![
            Column::new("symbol".into(), symbols),
            Column::new("locality".into(), localities),
            Column::new("revenue_bn".into(), in_billions(Concept::Revenue)),
            Column::new("net_income_bn".into(), in_billions(Concept::NetIncome)),
            Column::new("cash_bn".into(), in_billions(Concept::CashAndEquivalents)),
            Column::new("foundation".into(), foundations),
            Column::new("alignment".into(), alignment),
            Column::new("capacity".into(), capacity),
        ])
        .map_err(|e| ResearchError::Other(e.to_string()))
    }
}

/// Renders the recommended outreach order with capacity, alignment and
/// foundation for each company.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityListing;

impl ReportRenderer for PriorityListing {
    type Output = String;

    fn render(
        &self,
        _profiles: &[&ResearchProfile],
        priority: &[&ResearchProfile],
    ) -> Result<String> {
        let mut out = String::from("RECOMMENDED OUTREACH PRIORITY\n");
        out.push_str(&"=".repeat(40));
        out.push('\n');

        let fmt_err = |e: std::fmt::Error| ResearchError::Other(e.to_string());
        for (rank, profile) in priority.iter().enumerate() {
            writeln!(
                out,
                "#{} {} ({})",
                rank + 1,
                profile.company.display_name,
                profile.symbol()
            )
            .map_err(fmt_err)?;
            writeln!(out, "   Capacity: {}", profile.capacity.tier).map_err(fmt_err)?;
            writeln!(out, "   Alignment: {}", profile.alignment.level).map_err(fmt_err)?;
            if let Some(foundation) = &profile.foundation {
                writeln!(out, "   Foundation: {}", foundation.name).map_err(fmt_err)?;
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use prospect_core::{
        AlignmentAssessment, AlignmentLevel, BusinessAddress, CapacityRating, CapacityTier,
        CompanyConfig, FilerId, FilerIdentity, FinancialSnapshot, FoundationCandidate,
        ReportedValue, Symbol,
    };

    fn profile(symbol: &str, name: &str, score: f64, tier: CapacityTier) -> ResearchProfile {
        let end = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        ResearchProfile {
            company: CompanyConfig::new(symbol, name, "Minneapolis"),
            identity: FilerIdentity {
                filer_id: FilerId::from_number(1),
                legal_name: name.to_uppercase(),
                symbol: Symbol::new(symbol),
                industry_code: String::new(),
                industry_description: String::new(),
                incorporation_state: String::new(),
                fiscal_year_end: String::new(),
                phone: String::new(),
                business_address: BusinessAddress::default(),
            },
            financials: FinancialSnapshot {
                revenue: Some(ReportedValue::new(107.4e9, end)),
                cash_and_equivalents: Some(ReportedValue::new(score * BILLION, end)),
                ..Default::default()
            },
            foundation: None,
            foundation_profile: None,
            capacity: CapacityRating {
                score,
                tier,
                rationale: Vec::new(),
            },
            alignment: AlignmentAssessment {
                level: AlignmentLevel::High,
                score: 4,
                factors: Vec::new(),
            },
            researched_at: Utc::now(),
        }
    }

    #[test]
    fn test_summary_table_shape() {
        let mut tgt = profile("TGT", "Target Corporation", 3.0, CapacityTier::Standard);
        tgt.foundation = Some(FoundationCandidate {
            name: "TARGET FOUNDATION".to_string(),
            tax_id: "416017088".to_string(),
            city: None,
            state: None,
        });
        let unh = profile("UNH", "UnitedHealth Group", 35.0, CapacityTier::Major);

        let profiles = vec![&tgt, &unh];
        let frame = SummaryTable.render(&profiles, &profiles).unwrap();

        assert_eq!(frame.height(), 2);
        assert_eq!(frame.width(), 8);
        let names: Vec<String> = frame
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "symbol",
                "locality",
                "revenue_bn",
                "net_income_bn",
                "cash_bn",
                "foundation",
                "alignment",
                "capacity"
            ]
        );
        assert_eq!(frame.column("net_income_bn").unwrap().null_count(), 2);
        assert_eq!(frame.column("foundation").unwrap().null_count(), 1);
    }

    #[test]
    fn test_priority_listing() {
        let mut tgt = profile("TGT", "Target Corporation", 3.0, CapacityTier::Standard);
        tgt.foundation = Some(FoundationCandidate {
            name: "TARGET FOUNDATION".to_string(),
            tax_id: "416017088".to_string(),
            city: None,
            state: None,
        });
        let unh = profile("UNH", "UnitedHealth Group", 35.0, CapacityTier::Major);

        let text = PriorityListing.render(&[&tgt, &unh], &[&unh, &tgt]).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "RECOMMENDED OUTREACH PRIORITY");
        assert_eq!(lines[2], "#1 UnitedHealth Group (UNH)");
        assert_eq!(lines[3], "   Capacity: MAJOR ($1M+)");
        assert_eq!(lines[4], "   Alignment: HIGH");
        assert_eq!(lines[5], "#2 Target Corporation (TGT)");
        assert_eq!(lines[8], "   Foundation: TARGET FOUNDATION");
    }

    #[test]
    fn test_empty_inputs() {
        let frame = SummaryTable.render(&[], &[]).unwrap();
        assert_eq!(frame.height(), 0);
        let text = PriorityListing.render(&[], &[]).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
