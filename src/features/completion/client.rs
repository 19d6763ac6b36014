//! Completion client contract
//!
//! A [`CompletionClient`] is bound to exactly one credential and turns a system prompt
//! plus message history into generated text or a typed [`CompletionError`].

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::core::Credential;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// A single role-tagged message passed to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Everything one generation call needs
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub messages: Vec<ChatMessage>,
}

/// Why a generation call failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    /// Credential rejected, revoked or out of quota
    AuthOrQuota(String),
    /// Network failure, timeout or provider-side outage
    Transient(String),
    /// The call went through but the response was unusable
    Protocol(String),
}

impl CompletionError {
    /// Whether the selector should move on to the next credential
    pub fn rotates_credential(&self) -> bool {
        matches!(
            self,
            CompletionError::AuthOrQuota(_) | CompletionError::Transient(_)
        )
    }
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::AuthOrQuota(msg) => write!(f, "auth/quota error: {msg}"),
            CompletionError::Transient(msg) => write!(f, "transient error: {msg}"),
            CompletionError::Protocol(msg) => write!(f, "protocol error: {msg}"),
        }
    }
}

impl std::error::Error for CompletionError {}

#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Label of the credential this client is bound to
    fn credential_label(&self) -> &str;

    /// Issue one generation call. Must not touch shared state.
    async fn generate(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

/// Builds a client for a credential. One factory per process.
pub trait ClientFactory: Send + Sync {
    fn client_for(&self, credential: &Credential) -> Arc<dyn CompletionClient>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_policy() {
        assert!(CompletionError::AuthOrQuota("bad key".into()).rotates_credential());
        assert!(CompletionError::Transient("timeout".into()).rotates_credential());
        assert!(!CompletionError::Protocol("no choices".into()).rotates_credential());
    }

    #[test]
    fn test_display() {
        let err = CompletionError::Transient("timed out after 20s".into());
        assert_eq!(err.to_string(), "transient error: timed out after 20s");
    }
}
