//! [`OpenAiGateway`]: the [`LlmGateway`] adapter for OpenAI-compatible
//! Chat Completions endpoints.
//!
//! The system instruction is sent as a leading `system` message. Usage is
//! reported under `prompt_tokens`.

use super::types::{ChatMessage, ChatRequest, ChatResponse};
use crate::providers::http;
use async_trait::async_trait;
use desk_application::{CompletionRequest, GatewayError, GatewayReply, LlmGateway};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAiGateway {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenAiGateway {
    pub fn new(api_key: SecretString, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            client: http::build_client(timeout)?,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the base URL (Azure OpenAI, local servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub(super) fn to_chat_request(request: &CompletionRequest) -> ChatRequest {
    let system = (!request.system.is_empty()).then(|| ChatMessage {
        role: "system".to_string(),
        content: request.system.clone(),
    });

    let messages = system
        .into_iter()
        .chain(request.messages.iter().map(|turn| ChatMessage {
            role: turn.role().as_str().to_string(),
            content: turn.content().to_string(),
        }))
        .collect();

    ChatRequest {
        model: request.model.to_string(),
        max_tokens: request.max_tokens,
        messages,
    }
}

pub(super) fn into_reply(response: ChatResponse) -> Result<GatewayReply, GatewayError> {
    let text = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| {
            GatewayError::MalformedResponse("response contained no message content".to_string())
        })?;

    Ok(GatewayReply {
        text,
        usage: response.usage,
        model: response.model,
    })
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<GatewayReply, GatewayError> {
        let body = to_chat_request(request);
        let url = self.url("/chat/completions");
        debug!("POST {} ({} messages)", url, body.messages.len());

        let response = http::send_checked(
            self.client
                .post(&url)
                .bearer_auth(self.api_key.expose_secret())
                .json(&body),
        )
        .await?;

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            GatewayError::MalformedResponse(format!("failed to parse response: {e}"))
        })?;

        into_reply(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_domain::{Model, Turn};
    use serde_json::json;

    #[test]
    fn test_system_sent_as_leading_message() {
        let request = CompletionRequest {
            model: Model::Gpt4o,
            system: "You are an HR expert.".to_string(),
            messages: vec![Turn::user("preamble"), Turn::user("q1")],
            max_tokens: 1000,
        };
        let body = serde_json::to_value(to_chat_request(&request)).unwrap();

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "You are an HR expert.");
        assert_eq!(body["messages"].as_array().unwrap().len(), 3);
        assert_eq!(body["messages"][2]["content"], "q1");
    }

    #[test]
    fn test_reply_takes_first_choice() {
        let response: ChatResponse = serde_json::from_value(json!({
            "model": "gpt-4o",
            "choices": [{"index": 0, "message": {"role": "assistant", "content": "15 days"}}],
            "usage": {"prompt_tokens": 98, "completion_tokens": 3}
        }))
        .unwrap();

        let reply = into_reply(response).unwrap();
        assert_eq!(reply.text, "15 days");
        assert_eq!(reply.usage.unwrap()["prompt_tokens"], 98);
    }

    #[test]
    fn test_reply_without_choices_is_malformed() {
        let response: ChatResponse = serde_json::from_value(json!({"choices": []})).unwrap();
        assert!(matches!(
            into_reply(response),
            Err(GatewayError::MalformedResponse(_))
        ));
    }
}
