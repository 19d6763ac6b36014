//! # Features
//!
//! - `completion`: one-credential chat completion adapter
//! - `failover`: ordered credential probing and health tracking
//! - `debate`: turn-taking orchestration and the fallback script

pub mod completion;
pub mod debate;
pub mod failover;

pub use completion::{
    ClientFactory, CompletionClient, CompletionError, CompletionRequest, OpenAiClientFactory,
};
pub use debate::{DebateConfig, DebateOrchestrator};
pub use failover::{CredentialHealth, FailoverSelector};
