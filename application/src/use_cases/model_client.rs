//! Model client use case.
//!
//! Assembles the outbound message list for one question, sends it through
//! an [`LlmGateway`] and turns the raw reply into a [`ModelResponse`] with
//! latency and input-token count.
//!
//! # Message layout
//!
//! ```text
//! [user]      Here is the content of the PDF: <excerpt>... [rest of the PDF omitted]
//! [user/asst] ...every prior turn, oldest first...
//! [user]      <new question>
//! ```
//!
//! The system instruction and output ceiling come from
//! [`ConversationParams`].

use crate::config::ConversationParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use desk_domain::{DocumentExcerpt, ModelResponse, PromptTemplate, Turn};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};

/// A failed model call, with a message meant for the user
#[derive(Error, Debug)]
pub enum ModelCallError {
    #[error("Could not reach the model provider: {0}")]
    Unreachable(String),

    #[error("The provider rejected the API key. Check the key and try again.")]
    Unauthorized,

    #[error("The provider is rate limiting requests. Wait a moment and try again.")]
    RateLimited,

    #[error("The model call failed: {0}")]
    Failed(String),
}

impl From<GatewayError> for ModelCallError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::ConnectionError(msg) => ModelCallError::Unreachable(msg),
            GatewayError::Timeout => ModelCallError::Unreachable("request timed out".to_string()),
            GatewayError::AuthenticationFailed => ModelCallError::Unauthorized,
            GatewayError::RateLimited => ModelCallError::RateLimited,
            other => ModelCallError::Failed(other.to_string()),
        }
    }
}

/// Sends grounded questions to the model
#[derive(Clone)]
pub struct ModelClient {
    gateway: Arc<dyn LlmGateway>,
    params: ConversationParams,
}

impl ModelClient {
    pub fn new(gateway: Arc<dyn LlmGateway>, params: ConversationParams) -> Self {
        Self { gateway, params }
    }

    pub fn params(&self) -> &ConversationParams {
        &self.params
    }

    /// Build the request for a new question.
    ///
    /// `prior_turns` must not contain `new_user_text`; it is appended here as
    /// the final message.
    pub fn build_request(
        &self,
        excerpt: &DocumentExcerpt,
        prior_turns: &[Turn],
        new_user_text: &str,
    ) -> CompletionRequest {
        let mut messages = Vec::with_capacity(prior_turns.len() + 2);
        messages.push(Turn::user(PromptTemplate::document_preamble(excerpt)));
        messages.extend(prior_turns.iter().cloned());
        messages.push(Turn::user(new_user_text));

        CompletionRequest {
            model: self.params.model.clone(),
            system: self.params.system_prompt.clone(),
            messages,
            max_tokens: self.params.max_tokens,
        }
    }

    /// Send a prepared request.
    ///
    /// Elapsed time covers the gateway call only. A reply with no usable
    /// usage data still succeeds, with the token count marked unavailable.
    pub async fn send(&self, request: &CompletionRequest) -> Result<ModelResponse, ModelCallError> {
        debug!(
            "Sending {} messages to {} via {}",
            request.messages.len(),
            request.model,
            self.gateway.name()
        );

        let started = Instant::now();
        let result = self.gateway.complete(request).await;
        let elapsed_secs = started.elapsed().as_secs_f64();

        let reply = result.map_err(|e| {
            warn!("Model call failed after {:.2}s: {}", elapsed_secs, e);
            ModelCallError::from(e)
        })?;

        let input_tokens = self.params.usage_fields.resolve(reply.usage.as_ref());
        if !input_tokens.is_available() {
            debug!("No usage field matched {:?}", self.params.usage_fields.fields());
        }

        info!(
            "Model replied in {:.2}s (input tokens: {})",
            elapsed_secs, input_tokens
        );

        Ok(ModelResponse {
            reply: reply.text,
            elapsed_secs,
            input_tokens,
        })
    }

    /// Build and send in one step
    pub async fn complete(
        &self,
        excerpt: &DocumentExcerpt,
        prior_turns: &[Turn],
        new_user_text: &str,
    ) -> Result<ModelResponse, ModelCallError> {
        let request = self.build_request(excerpt, prior_turns, new_user_text);
        self.send(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayReply;
    use crate::use_cases::testing::{Scripted, ScriptedGateway};
    use desk_domain::{InputTokens, Model, Role, UsageFieldPriority};
    use serde_json::json;
    use std::time::Duration;

    fn client(gateway: Arc<ScriptedGateway>) -> ModelClient {
        ModelClient::new(gateway, ConversationParams::default())
    }

    #[test]
    fn test_build_request_message_order() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let client = client(gateway);
        let excerpt = DocumentExcerpt::of("Vacation policy: 15 days per year.", 2000);
        let prior = vec![Turn::user("q1"), Turn::assistant("a1")];

        let request = client.build_request(&excerpt, &prior, "q2");

        assert_eq!(request.messages.len(), 4);
        assert_eq!(request.messages[0].role(), Role::User);
        assert!(
            request.messages[0]
                .content()
                .contains("Vacation policy: 15 days per year.")
        );
        assert_eq!(request.messages[1], Turn::user("q1"));
        assert_eq!(request.messages[2], Turn::assistant("a1"));
        assert_eq!(request.messages[3], Turn::user("q2"));
        assert_eq!(request.max_tokens, 1000);
        assert_eq!(request.model, Model::Claude35Sonnet);
        assert_eq!(request.system, PromptTemplate::hr_expert_system());
    }

    #[test]
    fn test_build_request_uses_only_excerpt() {
        let gateway = Arc::new(ScriptedGateway::new(vec![]));
        let client = ModelClient::new(
            gateway,
            ConversationParams::default().with_excerpt_chars(10),
        );
        let text = format!("{}{}", "a".repeat(10), "SECRET-TAIL");
        let excerpt = DocumentExcerpt::of(&text, client.params().excerpt_chars);

        let request = client.build_request(&excerpt, &[], "q");
        assert!(!request.messages[0].content().contains("SECRET-TAIL"));
        assert!(request.messages[0].content().contains(&"a".repeat(10)));
    }

    #[tokio::test]
    async fn test_send_resolves_input_tokens() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Scripted::Reply(
            GatewayReply::text("15 days per year")
                .with_usage(json!({"input_tokens": 120, "output_tokens": 6})),
        )]));
        let client = client(gateway.clone());
        let excerpt = DocumentExcerpt::of("Vacation policy: 15 days per year.", 2000);

        let response = client
            .complete(&excerpt, &[], "How many vacation days do I get?")
            .await
            .unwrap();

        assert_eq!(response.reply, "15 days per year");
        assert_eq!(response.input_tokens, InputTokens::Counted(120));
        assert!(response.elapsed_secs >= 0.0);
        assert_eq!(gateway.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_usage_is_not_an_error() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Scripted::Reply(
            GatewayReply::text("ok"),
        )]));
        let response = client(gateway)
            .complete(&DocumentExcerpt::of("doc", 10), &[], "q")
            .await
            .unwrap();
        assert_eq!(response.input_tokens, InputTokens::Unavailable);
    }

    #[tokio::test]
    async fn test_configured_usage_fields() {
        let gateway = Arc::new(ScriptedGateway::new(vec![Scripted::Reply(
            GatewayReply::text("ok").with_usage(json!({"prompt_tokens": 33})),
        )]));
        let client = ModelClient::new(
            gateway,
            ConversationParams::default()
                .with_usage_fields(UsageFieldPriority::new(["prompt_tokens"])),
        );
        let response = client
            .complete(&DocumentExcerpt::of("doc", 10), &[], "q")
            .await
            .unwrap();
        assert_eq!(response.input_tokens, InputTokens::Counted(33));
    }

    #[tokio::test]
    async fn test_elapsed_covers_gateway_call() {
        let gateway = Arc::new(
            ScriptedGateway::new(vec![Scripted::Reply(GatewayReply::text("ok"))])
                .with_delay(Duration::from_millis(50)),
        );
        let response = client(gateway)
            .complete(&DocumentExcerpt::of("doc", 10), &[], "q")
            .await
            .unwrap();
        assert!(response.elapsed_secs >= 0.05);
    }

    #[tokio::test]
    async fn test_gateway_errors_become_user_messages() {
        let gateway = Arc::new(ScriptedGateway::new(vec![
            Scripted::Error(GatewayError::ConnectionError("dns failure".to_string())),
            Scripted::Error(GatewayError::AuthenticationFailed),
            Scripted::Error(GatewayError::MalformedResponse("no content".to_string())),
        ]));
        let client = client(gateway);
        let excerpt = DocumentExcerpt::of("doc", 10);

        let err = client.complete(&excerpt, &[], "q").await.unwrap_err();
        assert!(matches!(err, ModelCallError::Unreachable(_)));
        assert_eq!(
            err.to_string(),
            "Could not reach the model provider: dns failure"
        );

        let err = client.complete(&excerpt, &[], "q").await.unwrap_err();
        assert!(matches!(err, ModelCallError::Unauthorized));

        let err = client.complete(&excerpt, &[], "q").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "The model call failed: Malformed response: no content"
        );
    }
}
