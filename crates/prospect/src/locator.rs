//! Discovery of a company's affiliated foundation in the nonprofit registry.

use prospect_core::{FoundationCandidate, NonprofitProvider};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// Searches the nonprofit registry for a company's foundation.
///
/// Phrases are tried in order and each phrase's hits in registry order; the first
/// organization whose name contains both the company's first word and
/// "FOUNDATION" (case-insensitive) ends the search. Spacing between phrase queries
/// comes from the provider's throttle.
pub struct FoundationLocator {
    provider: Arc<dyn NonprofitProvider>,
    result_limit: usize,
}

impl fmt::Debug for FoundationLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoundationLocator")
            .field("provider", &self.provider.name())
            .field("result_limit", &self.result_limit)
            .finish()
    }
}

impl FoundationLocator {
    /// Create a locator inspecting up to `result_limit` hits per phrase.
    #[must_use]
    pub fn new(provider: Arc<dyn NonprofitProvider>, result_limit: usize) -> Self {
        Self {
            provider,
            result_limit,
        }
    }

    /// Find the first matching foundation, or `None` if no phrase yields one.
    ///
    /// A failed search is logged and the next phrase is tried.
    pub async fn locate(&self, display_name: &str) -> Option<FoundationCandidate> {
        let company_word = first_word(display_name)?.to_uppercase();

        for phrase in search_phrases(display_name) {
            debug!(phrase = %phrase, "Searching nonprofit registry");
            let hits = match self.provider.search(&phrase).await {
                Ok(hits) => hits,
                Err(e) => {
                    warn!(
                        provider = self.provider.name(),
                        phrase = %phrase,
                        error = %e,
                        "Foundation search failed, trying next phrase"
                    );
                    continue;
                }
            };

            if let Some(found) = hits
                .into_iter()
                .take(self.result_limit)
                .find(|org| is_foundation_match(&org.name, &company_word))
            {
                debug!(name = %found.name, tax_id = %found.tax_id, "Foundation match");
                return Some(found);
            }
        }

        None
    }
}

fn first_word(display_name: &str) -> Option<&str> {
    display_name.split_whitespace().next()
}

/// Builds the ordered search phrases for a company name.
///
/// Returns an empty list for a blank name.
#[must_use]
pub fn search_phrases(display_name: &str) -> Vec<String> {
    let name = display_name.trim();
    match first_word(name) {
        Some(word) => vec![format!("{name} foundation"), format!("{word} foundation")],
        None => Vec::new(),
    }
}

/// Returns true if an organization name contains the (uppercased) company word
/// and "FOUNDATION".
#[must_use]
pub fn is_foundation_match(org_name: &str, company_word: &str) -> bool {
    let org_name = org_name.to_uppercase();
    org_name.contains(&company_word.to_uppercase()) && org_name.contains("FOUNDATION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeNonprofit;

    #[test]
    fn test_search_phrases() {
        assert_eq!(
            search_phrases("Target Corporation"),
            vec!["Target Corporation foundation", "Target foundation"]
        );
        assert_eq!(search_phrases("  3M Company "), vec!["3M Company foundation", "3M foundation"]);
        assert!(search_phrases("   ").is_empty());
    }

    #[test]
    fn test_match_rules() {
        assert!(is_foundation_match("Target Foundation", "TARGET"));
        assert!(is_foundation_match("THE 3M FOUNDATION INC", "3m"));
        assert!(!is_foundation_match("Target Corporation", "TARGET"));
        assert!(!is_foundation_match("Walmart Foundation", "TARGET"));
    }

    #[tokio::test]
    async fn test_first_phrase_match_short_circuits() {
        let provider = Arc::new(
            FakeNonprofit::new()
                .with_results(
                    "Target Corporation foundation",
                    &[("TARGET FOUNDATION", "416017088")],
                )
                .with_results("Target foundation", &[("TARGET FOUNDATION II", "1")]),
        );
        let locator = FoundationLocator::new(provider.clone(), 10);

        let found = locator.locate("Target Corporation").await.unwrap();
        assert_eq!(found.tax_id, "416017088");
        assert_eq!(provider.queries(), vec!["Target Corporation foundation"]);
    }

    #[tokio::test]
    async fn test_falls_through_to_second_phrase() {
        let provider = Arc::new(
            FakeNonprofit::new()
                .with_results(
                    "3M Company foundation",
                    &[("COMPANY FOUNDATION OF AMERICA", "1"), ("3M CLUB", "2")],
                )
                .with_results(
                    "3M foundation",
                    &[("MINNESOTA COMMUNITY FUND", "3"), ("3M Foundation", "416038262")],
                ),
        );
        let locator = FoundationLocator::new(provider.clone(), 10);

        let found = locator.locate("3M Company").await.unwrap();
        assert_eq!(found.name, "3M Foundation");
        assert_eq!(provider.queries().len(), 2);
    }

    #[tokio::test]
    async fn test_only_first_results_are_inspected() {
        let mut hits: Vec<(String, String)> = (0..10)
            .map(|i| (format!("UNRELATED TRUST {i}"), i.to_string()))
            .collect();
        hits.push(("UNITEDHEALTH FOUNDATION".to_string(), "411".to_string()));
        let hits: Vec<(&str, &str)> = hits.iter().map(|(n, e)| (n.as_str(), e.as_str())).collect();

        let provider = Arc::new(
            FakeNonprofit::new()
                .with_results("UnitedHealth Group foundation", &hits)
                .with_results("UnitedHealth foundation", &hits),
        );
        let locator = FoundationLocator::new(provider.clone(), 10);

        assert!(locator.locate("UnitedHealth Group").await.is_none());
        assert_eq!(provider.queries().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_phrase_moves_on() {
        let provider = Arc::new(
            FakeNonprofit::new()
                .with_failing_query("Target Corporation foundation")
                .with_results("Target foundation", &[("Target Foundation", "416017088")]),
        );
        let locator = FoundationLocator::new(provider.clone(), 10);

        let found = locator.locate("Target Corporation").await.unwrap();
        assert_eq!(found.tax_id, "416017088");
    }

    #[tokio::test]
    async fn test_blank_name_does_not_search() {
        let provider = Arc::new(FakeNonprofit::new());
        let locator = FoundationLocator::new(provider.clone(), 10);

        assert!(locator.locate("").await.is_none());
        assert!(provider.queries().is_empty());
    }
}
