use regex::RegexBuilder;

use crate::database::CatalogStore;
use crate::models::MatchedDestination;
use crate::utils::ServiceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Matches(Vec<MatchedDestination>),
    /// Zero matches; rendered as a message, not a failure
    NotFound,
}

/// Case-insensitive substring search over every catalog entry name.
///
/// The query is matched literally. Results are flattened in catalog scan
/// order, then entry order within each document.
/// Surrounding whitespace is trimmed first, so a blank query such as `" "`
/// is a `Validation` error rather than a "not found".
pub async fn search(store: &dyn CatalogStore, query: &str) -> Result<SearchOutcome, ServiceError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ServiceError::Validation(
            "Please enter a destination to search".to_string(),
        ));
    }

    let pattern = regex::escape(query);
    let matcher = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ServiceError::Backend(format!("Failed to build matcher: {}", e)))?;

    let documents = store.find_matching(&pattern).await?;

    // Documents come back whole; keep only the entries that matched
    let matches: Vec<MatchedDestination> = documents
        .into_iter()
        .flat_map(|document| document.destinations)
        .filter(|entry| matcher.is_match(&entry.name))
        .collect();

    log::debug!("🔎 Search '{}' -> {} match(es)", query, matches.len());

    if matches.is_empty() {
        Ok(SearchOutcome::NotFound)
    } else {
        Ok(SearchOutcome::Matches(matches))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::failing::FailingCatalogStore;
    use crate::database::MemoryCatalogStore;
    use crate::models::{CatalogDocument, CatalogEntry};
    use crate::seeds::catalog_seed::default_catalog;

    async fn seeded_store() -> MemoryCatalogStore {
        let store = MemoryCatalogStore::new();
        store.insert(&default_catalog()).await.unwrap();
        store
    }

    fn names(outcome: SearchOutcome) -> Vec<String> {
        match outcome {
            SearchOutcome::Matches(matches) => matches.into_iter().map(|e| e.name).collect(),
            SearchOutcome::NotFound => Vec::new(),
        }
    }

    #[tokio::test]
    async fn matching_ignores_case_and_accepts_substrings() {
        let store = seeded_store().await;
        for query in ["rome", "ROME", "Rom"] {
            let outcome = search(&store, query).await.unwrap();
            assert_eq!(names(outcome), vec!["Rome".to_string()], "query {query}");
        }
    }

    #[tokio::test]
    async fn unknown_destination_is_not_found() {
        let store = seeded_store().await;
        assert_eq!(search(&store, "atlantis").await.unwrap(), SearchOutcome::NotFound);
    }

    #[tokio::test]
    async fn empty_query_is_a_validation_error() {
        let store = seeded_store().await;
        for query in ["", "   "] {
            assert!(matches!(search(&store, query).await, Err(ServiceError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn returns_only_matching_entries_in_scan_order() {
        let store = seeded_store().await;
        store
            .insert(&CatalogDocument::new(vec![
                CatalogEntry::new("Kyoto"),
                CatalogEntry::new("Pari Islands"),
            ]))
            .await
            .unwrap();

        let outcome = search(&store, "pari").await.unwrap();
        assert_eq!(names(outcome), vec!["Paris".to_string(), "Pari Islands".to_string()]);

        // "a" hits every seeded name containing an a, in catalog order
        let outcome = search(&store, "a").await.unwrap();
        assert_eq!(
            names(outcome),
            vec!["Bali", "Paris", "AnnaPurna", "Inca", "Santorini", "Pari Islands"]
        );
    }

    #[tokio::test]
    async fn regex_metacharacters_are_literal() {
        let store = seeded_store().await;
        assert_eq!(search(&store, ".*").await.unwrap(), SearchOutcome::NotFound);
        assert_eq!(search(&store, "(").await.unwrap(), SearchOutcome::NotFound);
    }

    #[tokio::test]
    async fn store_failure_becomes_backend_error() {
        assert!(matches!(
            search(&FailingCatalogStore, "rome").await,
            Err(ServiceError::Backend(_))
        ));
    }
}
