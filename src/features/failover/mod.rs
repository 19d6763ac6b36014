//! # Feature: Credential Failover
//!
//! Deterministic ordered probing across the credential pool, with a shared
//! circuit breaker so credentials that just failed are not probed again right away.
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.1.0: Replaced random key choice with ordered probing and the health map
//! - 1.0.0: Initial primary/secondary key fallback

pub mod health;
pub mod selector;

pub use health::{CredentialHealth, TRANSIENT_FAILURE_THRESHOLD};
pub use selector::{FailoverSelector, Selection};
