use std::sync::Arc;

use super::provider::SearchProvider;
use crate::errors::ApiError;

/// Number of matches requested from the index per query.
const TOP_RESULTS: usize = 3;

/// Issues the search-index query and shapes its output.
#[derive(Clone)]
pub struct Retriever {
    provider: Arc<dyn SearchProvider>,
    top: usize,
}

impl Retriever {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self {
            provider,
            top: TOP_RESULTS,
        }
    }

    /// Fetch up to three snippet texts for the query, in index order.
    ///
    /// The query is passed through unchanged. Provider failures propagate;
    /// there is no retry and no partial result.
    pub async fn fetch(&self, query: &str) -> Result<Vec<String>, ApiError> {
        let snippets = self.provider.search(query, self.top).await?;
        tracing::debug!(
            provider = self.provider.name(),
            count = snippets.len(),
            "retrieved snippets"
        );
        Ok(snippets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedProvider {
        snippets: Vec<String>,
    }

    #[async_trait]
    impl SearchProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn search(&self, _query: &str, top: usize) -> Result<Vec<String>, ApiError> {
            assert_eq!(top, 3);
            Ok(self.snippets.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl SearchProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn search(&self, _query: &str, _top: usize) -> Result<Vec<String>, ApiError> {
            Err(ApiError::SearchFailed("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn fetch_requests_three_and_preserves_order() {
        let retriever = Retriever::new(Arc::new(FixedProvider {
            snippets: vec!["first".to_string(), "second".to_string()],
        }));

        let snippets = retriever.fetch("anything").await.unwrap();
        assert_eq!(snippets, vec!["first".to_string(), "second".to_string()]);
    }

    #[tokio::test]
    async fn fetch_returns_empty_on_no_matches() {
        let retriever = Retriever::new(Arc::new(FixedProvider { snippets: vec![] }));

        let snippets = retriever.fetch("nothing matches").await.unwrap();
        assert!(snippets.is_empty());
    }

    #[tokio::test]
    async fn fetch_propagates_provider_errors() {
        let retriever = Retriever::new(Arc::new(FailingProvider));

        let err = retriever.fetch("anything").await.unwrap_err();
        assert!(matches!(err, ApiError::SearchFailed(_)));
    }
}
