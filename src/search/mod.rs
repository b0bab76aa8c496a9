mod azure;
mod provider;
mod retriever;

pub use azure::AzureSearchProvider;
pub use provider::SearchProvider;
pub use retriever::Retriever;
