//! OpenAI chat completion adapter
//!
//! Each [`OpenAiClient`] carries its own `openai::Credentials` instead of relying on the
//! process-wide `OPENAI_KEY` variable, so several keys can be used side by side.

use async_trait::async_trait;
use log::debug;
use openai::chat::{ChatCompletion, ChatCompletionMessage, ChatCompletionMessageRole};
use openai::{Credentials, OpenAiError};
use std::sync::Arc;
use std::time::Duration;

use super::client::{
    ChatMessage, ChatRole, ClientFactory, CompletionClient, CompletionError, CompletionRequest,
};
use crate::core::{Config, Credential};

/// Provider identity for credentials handled by this adapter
pub const PROVIDER: &str = "openai";

/// Error `code` values that mean the key itself is the problem
const AUTH_CODES: &[&str] = &[
    "invalid_api_key",
    "insufficient_quota",
    "rate_limit_exceeded",
    "billing_hard_limit_reached",
    "account_deactivated",
];

/// Error `type` values that mean the key itself is the problem
const AUTH_TYPES: &[&str] = &[
    "insufficient_quota",
    "authentication_error",
    "permission_error",
    "billing_error",
];

/// `error_type` the openai crate uses for transport and body decoding errors
const TRANSPORT_TYPE: &str = "reqwest";

pub struct OpenAiClient {
    credential: Credential,
    api_credentials: Credentials,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl OpenAiClient {
    fn to_openai_message(message: &ChatMessage) -> ChatCompletionMessage {
        let role = match message.role {
            ChatRole::User => ChatCompletionMessageRole::User,
            ChatRole::Assistant => ChatCompletionMessageRole::Assistant,
        };
        ChatCompletionMessage {
            role,
            content: Some(message.content.clone()),
            name: None,
            function_call: None,
            tool_call_id: None,
            tool_calls: None,
        }
    }

    /// Strip the key from provider text before it reaches a log line
    fn scrub(&self, text: &str) -> String {
        let secret = self.credential.expose_secret();
        if secret.is_empty() {
            text.to_string()
        } else {
            text.replace(secret, "[REDACTED]")
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    fn credential_label(&self) -> &str {
        &self.credential.label
    }

    async fn generate(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let mut messages = vec![ChatCompletionMessage {
            role: ChatCompletionMessageRole::System,
            content: Some(request.system_prompt.clone()),
            name: None,
            function_call: None,
            tool_call_id: None,
            tool_calls: None,
        }];
        messages.extend(request.messages.iter().map(Self::to_openai_message));

        debug!(
            "Calling {} with {} messages on credential '{}'",
            self.model,
            messages.len(),
            self.credential.label
        );

        let call = ChatCompletion::builder(&self.model, messages)
            .credentials(self.api_credentials.clone())
            .temperature(self.temperature)
            .create();

        let completion = match tokio::time::timeout(self.timeout, call).await {
            Err(_) => {
                return Err(CompletionError::Transient(format!(
                    "timed out after {:?}",
                    self.timeout
                )))
            }
            Ok(Err(e)) => return Err(classify_error(&e, self.scrub(&e.message))),
            Ok(Ok(completion)) => completion,
        };

        completion
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .map(|text| text.trim().to_string())
            .ok_or_else(|| CompletionError::Protocol("No content in response".to_string()))
    }
}

/// Map an openai crate error onto a failure kind.
///
/// API errors carry the provider's `type`/`code`; transport and decoding failures come
/// through as `error_type == "reqwest"` with reqwest's own message. `message` is the
/// already-scrubbed text to keep in the error.
pub fn classify_error(error: &OpenAiError, message: String) -> CompletionError {
    let code = error.code.as_deref().unwrap_or_default();
    let error_type = error.error_type.as_str();

    if error_type == TRANSPORT_TYPE || error_type == "io" {
        // Reached the server but the body was not a completion
        return if message.contains("decoding response body") {
            CompletionError::Protocol(message)
        } else {
            CompletionError::Transient(message)
        };
    }

    if AUTH_CODES.contains(&code)
        || AUTH_TYPES.contains(&error_type)
        || message.to_lowercase().contains("api key")
    {
        CompletionError::AuthOrQuota(message)
    } else if error_type == "invalid_request_error" {
        // Same request fails on every key
        CompletionError::Protocol(message)
    } else {
        CompletionError::Transient(message)
    }
}

/// Creates [`OpenAiClient`]s sharing model, endpoint and timeout settings
#[derive(Debug, Clone)]
pub struct OpenAiClientFactory {
    model: String,
    base_url: String,
    temperature: f32,
    timeout: Duration,
}

impl OpenAiClientFactory {
    pub fn new(config: &Config) -> Self {
        Self {
            model: config.openai_model.clone(),
            base_url: config.openai_base_url.clone(),
            temperature: config.temperature,
            timeout: config.completion_timeout,
        }
    }
}

impl ClientFactory for OpenAiClientFactory {
    fn client_for(&self, credential: &Credential) -> Arc<dyn CompletionClient> {
        Arc::new(OpenAiClient {
            credential: credential.clone(),
            api_credentials: Credentials::new(credential.expose_secret(), self.base_url.as_str()),
            model: self.model.clone(),
            temperature: self.temperature,
            timeout: self.timeout,
        })
    }
}
