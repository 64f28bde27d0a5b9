//! Raw XBRL company facts as returned by the filings API.
//!
//! The structure is `facts -> taxonomy -> concept -> units -> unit -> [values]`.
//! Every level is defaulted so partially populated payloads still decode.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Company facts payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyFacts {
    /// Entity name.
    #[serde(default)]
    pub entity_name: Option<String>,
    /// Facts organized by taxonomy and concept tag.
    #[serde(default)]
    pub facts: HashMap<String, HashMap<String, ConceptFacts>>,
}

impl CompanyFacts {
    /// Returns the facts recorded for a concept tag within a taxonomy.
    #[must_use]
    pub fn concept(&self, taxonomy: &str, tag: &str) -> Option<&ConceptFacts> {
        self.facts.get(taxonomy)?.get(tag)
    }
}

/// Facts for a single XBRL concept tag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConceptFacts {
    /// Label/description.
    #[serde(default)]
    pub label: Option<String>,
    /// Values keyed by unit (USD, shares, etc.).
    #[serde(default)]
    pub units: HashMap<String, Vec<FactValue>>,
}

impl ConceptFacts {
    /// Returns the values reported in a unit, or an empty slice.
    #[must_use]
    pub fn values_in(&self, unit: &str) -> &[FactValue] {
        self.units.get(unit).map(Vec::as_slice).unwrap_or_default()
    }
}

/// A single fact value with filing metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FactValue {
    /// End date of the period (YYYY-MM-DD).
    pub end: String,
    /// Value.
    pub val: f64,
    /// Accession number.
    #[serde(default)]
    pub accn: Option<String>,
    /// Fiscal year.
    #[serde(default)]
    pub fy: Option<i32>,
    /// Fiscal period.
    #[serde(default)]
    pub fp: Option<String>,
    /// Form type.
    #[serde(default)]
    pub form: Option<String>,
    /// Filed date.
    #[serde(default)]
    pub filed: Option<String>,
}

impl FactValue {
    /// Creates a fact value with only the fields the extractor reads.
    #[must_use]
    pub fn new(val: f64, end: impl Into<String>, form: impl Into<String>) -> Self {
        Self {
            end: end.into(),
            val,
            accn: None,
            fy: None,
            fp: None,
            form: Some(form.into()),
            filed: None,
        }
    }
}
