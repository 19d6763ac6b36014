// Core layer - shared types, configuration and credentials
pub mod core;

// Features layer - completion adapter, failover, debate orchestration
pub mod features;

// HTTP layer - axum router and handlers
pub mod http;

pub use crate::core::{Config, CredentialPool, DebateResult};

pub use crate::features::{
    // Completion
    ClientFactory, CompletionClient, CompletionError, CompletionRequest, OpenAiClientFactory,
    // Debate
    DebateConfig, DebateOrchestrator,
    // Failover
    CredentialHealth, FailoverSelector,
};

pub use crate::http::{build_router, AppState};
