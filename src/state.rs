use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::AppConfig;
use crate::llm::AzureOpenAiProvider;
use crate::rag::Responder;
use crate::search::{AzureSearchProvider, Retriever};

/// Shared application state: both remote-service clients are built once at
/// startup and handed to the components explicitly.
#[derive(Clone)]
pub struct AppState {
    pub retriever: Retriever,
    pub responder: Responder,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn initialize(config: &AppConfig) -> Arc<Self> {
        let search = AzureSearchProvider::new(
            config.search_endpoint.clone(),
            config.search_index_name.clone(),
            config.search_admin_key.clone(),
        );
        let chat = AzureOpenAiProvider::new(
            config.chat_endpoint.clone(),
            config.chat_deployment.clone(),
            config.chat_api_key.clone(),
        );

        Arc::new(AppState {
            retriever: Retriever::new(Arc::new(search)),
            responder: Responder::new(Arc::new(chat)),
            started_at: Utc::now(),
        })
    }
}
