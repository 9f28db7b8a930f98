//! HTTP client for the Gemini REST API.

use async_trait::async_trait;
use tracing::debug;

use crate::api::{
    ApiError, ChatApi, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ModelInfo, ModelsResponse,
};
use crate::auth::Credentials;
use crate::utils::url::construct_api_url;

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(credentials: Credentials) -> Self {
        GeminiClient {
            client: reqwest::Client::new(),
            base_url: credentials.base_url,
            api_key: credentials.api_key,
        }
    }

    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());
        ApiError::Status {
            status,
            message: error_summary(&body),
        }
    }
}

/// Pull the human-readable message out of an API error body, falling back to
/// the raw text when the body is not the usual JSON error envelope.
fn error_summary(body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) {
        if let Some(message) = value.pointer("/error/message").and_then(|v| v.as_str()) {
            let collapsed = message.split_whitespace().collect::<Vec<_>>().join(" ");
            if !collapsed.is_empty() {
                return collapsed;
            }
        }
    }
    trimmed.to_string()
}

#[async_trait]
impl ChatApi for GeminiClient {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, ApiError> {
        let models_url = construct_api_url(&self.base_url, "models");
        debug!(url = %models_url, "listing models");

        let response = self
            .client
            .get(models_url)
            .header("x-goog-api-key", &self.api_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let listing = response.json::<ModelsResponse>().await?;
        debug!(count = listing.models.len(), "model listing received");
        Ok(listing.models)
    }

    async fn generate(
        &self,
        model_id: &str,
        contents: Vec<Content>,
        config: GenerationConfig,
    ) -> Result<String, ApiError> {
        let endpoint = format!("models/{model_id}:generateContent");
        let generate_url = construct_api_url(&self.base_url, &endpoint);
        debug!(url = %generate_url, turns = contents.len(), "sending message");

        let request = GenerateContentRequest {
            contents,
            generation_config: config,
        };

        let response = self
            .client
            .post(generate_url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body = response.json::<GenerateContentResponse>().await?;
        body.first_text().ok_or(ApiError::EmptyResponse)
    }
}
