use async_trait::async_trait;

use crate::errors::ApiError;

/// A remote full-text index this service can query.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// return the provider name (e.g. "azure_search")
    fn name(&self) -> &str;

    /// run a simple-syntax search and return the text field of each match,
    /// capped at `top`, in the order the service ranked them
    async fn search(&self, query: &str, top: usize) -> Result<Vec<String>, ApiError>;
}
