use async_trait::async_trait;

use super::types::ChatRequest;
use crate::errors::ApiError;

/// A remote chat-completion backend.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// return the provider name (e.g. "azure_openai")
    fn name(&self) -> &str;

    /// chat completion (non-streaming); returns the first choice's content
    async fn chat(&self, request: ChatRequest) -> Result<String, ApiError>;
}
