use async_trait::async_trait;
use tracing::debug;

use super::{CompletionClient, CompletionRequest, CompletionResponse};
use crate::consts::DEFAULT_ENDPOINT;
use crate::error::RequestError;

const API_VERSION: &str = "2023-06-01";

/// Calls the Anthropic Messages API over HTTPS.
pub struct AnthropicClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl AnthropicClient {
    /// Without a key the request goes out unauthenticated and the API
    /// decides what to do with it.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build(&self, request: &CompletionRequest) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .post(&self.endpoint)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json");
        if let Some(key) = &self.api_key {
            req = req.header("x-api-key", key);
        }
        req.json(request)
    }
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, RequestError> {
        debug!(endpoint = %self.endpoint, model = %request.model, "sending completion request");

        let resp = self.build(request).send().await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(RequestError::Api { status, body });
        }

        let body = resp.text().await?;
        let parsed: CompletionResponse = serde_json::from_str(&body)
            .map_err(|e| RequestError::MalformedBody(format!("{e}: {body}")))?;

        if let Some(usage) = parsed.usage {
            debug!(
                input_tokens = usage.input_tokens,
                output_tokens = usage.output_tokens,
                "completion usage"
            );
        }

        Ok(parsed)
    }
}
