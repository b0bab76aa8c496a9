use std::sync::Arc;

use super::context::ContextBlock;
use crate::errors::ApiError;
use crate::llm::{ChatMessage, ChatProvider, ChatRequest};

/// Builds the prompt from query plus snippets and invokes the chat model
/// once per request.
#[derive(Clone)]
pub struct Responder {
    provider: Arc<dyn ChatProvider>,
}

impl Responder {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    /// Answer the query using the retrieved snippets as context.
    ///
    /// Sends exactly two turns (the system instruction and the verbatim
    /// user query) with sampling disabled, and returns the trimmed first
    /// choice. Provider failures propagate unchanged.
    pub async fn answer(&self, query: &str, snippets: &[String]) -> Result<String, ApiError> {
        let instruction = ContextBlock::from_snippets(snippets).system_instruction();

        let request = ChatRequest::new(vec![
            ChatMessage::system(instruction),
            ChatMessage::user(query),
        ])
        .with_temperature(0.0);

        let content = self.provider.chat(request).await?;
        tracing::debug!(provider = self.provider.name(), "chat completion finished");
        Ok(content.trim().to_string())
    }
}
