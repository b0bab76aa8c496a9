use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use super::provider::ChatProvider;
use super::types::ChatRequest;
use crate::errors::ApiError;

const CHAT_API_VERSION: &str = "2024-08-01-preview";

#[derive(Clone)]
pub struct AzureOpenAiProvider {
    endpoint: String,
    deployment: String,
    api_key: String,
    client: Client,
}

impl AzureOpenAiProvider {
    pub fn new(endpoint: String, deployment: String, api_key: String) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            deployment,
            api_key,
            client: Client::new(),
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, self.deployment, CHAT_API_VERSION
        )
    }
}

#[async_trait]
impl ChatProvider for AzureOpenAiProvider {
    fn name(&self) -> &str {
        "azure_openai"
    }

    async fn chat(&self, request: ChatRequest) -> Result<String, ApiError> {
        let mut body = json!({
            "messages": request.messages,
        });

        if let Some(obj) = body.as_object_mut() {
            if let Some(t) = request.temperature {
                obj.insert("temperature".to_string(), json!(t));
            }
        }

        let res = self
            .client
            .post(self.completions_url())
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::chat)?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(ApiError::ChatFailed(format!("{}: {}", status, text)));
        }

        let payload: Value = res.json().await.map_err(ApiError::chat)?;
        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| ApiError::ChatFailed("malformed chat response".to_string()))?;

        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_url_includes_deployment_and_api_version() {
        let provider = AzureOpenAiProvider::new(
            "https://example.openai.azure.com/".to_string(),
            "gpt-4o".to_string(),
            "key".to_string(),
        );

        assert_eq!(
            provider.completions_url(),
            format!(
                "https://example.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version={}",
                CHAT_API_VERSION
            )
        );
    }
}
