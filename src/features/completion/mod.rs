//! # Feature: Completion
//!
//! Adapter between one API credential and the chat completion call. Failures come back
//! as explicit [`CompletionError`] values rather than being swallowed.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Per-call timeout, typed failure kinds, per-client credentials
//! - 1.0.0: Initial OpenAI chat adapter

pub mod client;
pub mod openai_chat;

#[cfg(test)]
pub mod testing;

pub use client::{
    ChatMessage, ChatRole, ClientFactory, CompletionClient, CompletionError, CompletionRequest,
};
pub use openai_chat::{OpenAiClient, OpenAiClientFactory, PROVIDER};
