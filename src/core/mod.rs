//! # Core Module
//!
//! Core domain types, configuration, and credentials for the debate backend.
//!
//! - **Version**: 1.2.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.2.0: Credential pool moved here from the binary
//! - 1.1.0: Add response module with debate result assembly
//! - 1.0.0: Initial creation with config module

pub mod config;
pub mod credentials;
pub mod response;

// Re-export commonly used items
pub use config::Config;
pub use credentials::{Credential, CredentialPool};
pub use response::{
    assemble, ConversationTurn, DebateResult, Exchange, Figure, Speaker, BASELINE_RANGE,
    FIGURE_LABELS, IMPROVED_RANGE,
};
