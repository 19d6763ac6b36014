//! # Debate Feature
//!
//! Runs a turn-based debate between two expert personas on a given topic, falling back
//! to a canned script when no credential can generate.
//!
//! - **Version**: 2.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 2.0.0: Per-turn prompts over a shared transcript, failed turns skipped, structured fallback script
//! - 1.0.0: Initial single-prompt debate with mock text fallback

pub mod fallback;
pub mod orchestrator;
pub mod transcript;

pub use fallback::{fallback_script, FALLBACK_TURNS};
pub use orchestrator::{DebateConfig, DebateOrchestrator};
pub use transcript::Transcript;
