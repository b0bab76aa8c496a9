use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::provider::SearchProvider;
use crate::errors::ApiError;

const SEARCH_API_VERSION: &str = "2023-11-01";

#[derive(Clone)]
pub struct AzureSearchProvider {
    endpoint: String,
    index_name: String,
    api_key: String,
    client: Client,
}

impl AzureSearchProvider {
    pub fn new(endpoint: String, index_name: String, api_key: String) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            index_name,
            api_key,
            client: Client::new(),
        }
    }

    fn search_url(&self) -> String {
        format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.endpoint, self.index_name, SEARCH_API_VERSION
        )
    }
}

#[async_trait]
impl SearchProvider for AzureSearchProvider {
    fn name(&self) -> &str {
        "azure_search"
    }

    async fn search(&self, query: &str, top: usize) -> Result<Vec<String>, ApiError> {
        let body = json!({
            "search": query,
            "select": "text",
            "top": top,
            "queryType": "simple",
        });

        let res = self
            .client
            .post(self.search_url())
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::search)?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(ApiError::SearchFailed(format!("{}: {}", status, text)));
        }

        let payload: Value = res.json().await.map_err(ApiError::search)?;
        let docs = payload
            .get("value")
            .and_then(|v| v.as_array())
            .ok_or_else(|| ApiError::SearchFailed("malformed search response".to_string()))?;

        let snippets = docs
            .iter()
            .filter_map(|doc| doc.get("text").and_then(|v| v.as_str()))
            .map(|text| text.to_string())
            .collect();

        Ok(snippets)
    }
}
