//! [`AnthropicGateway`]: the [`LlmGateway`] adapter for Anthropic Claude.
//!
//! Sends requests to the Messages API (`/v1/messages`) with the
//! `x-api-key` and `anthropic-version` headers. The API key is wrapped in
//! [`SecretString`] and is never logged or included in `Debug` output.

use super::types::{AnthropicContentBlock, AnthropicMessage, AnthropicRequest, AnthropicResponse};
use crate::providers::http;
use async_trait::async_trait;
use desk_application::{CompletionRequest, GatewayError, GatewayReply, LlmGateway};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";

/// Anthropic Claude gateway.
///
/// Deliberately not `Debug`; the key must never reach a log line.
pub struct AnthropicGateway {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    api_version: String,
}

impl AnthropicGateway {
    pub fn new(api_key: SecretString, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            client: http::build_client(timeout)?,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        })
    }

    /// Override the base URL (proxies, gateways)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub(super) fn to_anthropic_request(request: &CompletionRequest) -> AnthropicRequest {
    let messages = request
        .messages
        .iter()
        .map(|turn| AnthropicMessage {
            role: turn.role().as_str().to_string(),
            content: turn.content().to_string(),
        })
        .collect();

    AnthropicRequest {
        model: request.model.to_string(),
        max_tokens: request.max_tokens,
        messages,
        system: (!request.system.is_empty()).then(|| request.system.clone()),
    }
}

pub(super) fn into_reply(response: AnthropicResponse) -> Result<GatewayReply, GatewayError> {
    let texts: Vec<&str> = response
        .content
        .iter()
        .filter_map(|block| match block {
            AnthropicContentBlock::Text { text } => Some(text.as_str()),
            AnthropicContentBlock::Other => None,
        })
        .collect();

    if texts.is_empty() {
        return Err(GatewayError::MalformedResponse(
            "response contained no text content".to_string(),
        ));
    }

    Ok(GatewayReply {
        text: texts.concat(),
        usage: response.usage,
        model: response.model,
    })
}

#[async_trait]
impl LlmGateway for AnthropicGateway {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<GatewayReply, GatewayError> {
        let body = to_anthropic_request(request);
        let url = self.url("/v1/messages");
        debug!("POST {} ({} messages)", url, body.messages.len());

        let response = http::send_checked(
            self.client
                .post(&url)
                .header("x-api-key", self.api_key.expose_secret())
                .header("anthropic-version", &self.api_version)
                .header("content-type", "application/json")
                .json(&body),
        )
        .await?;

        let parsed: AnthropicResponse = response.json().await.map_err(|e| {
            GatewayError::MalformedResponse(format!("failed to parse response: {e}"))
        })?;

        into_reply(parsed)
    }
}
