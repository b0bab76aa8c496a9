mod azure_openai;
mod provider;
mod types;

pub use azure_openai::AzureOpenAiProvider;
pub use provider::ChatProvider;
pub use types::{ChatMessage, ChatRequest};
