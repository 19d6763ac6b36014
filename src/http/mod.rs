//! # HTTP Layer
//!
//! JSON API over the debate orchestrator.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::AppError;
pub use handlers::{DebateRequest, HOME_MESSAGE, MISSING_FIELDS_MESSAGE};
pub use router::build_router;
pub use state::AppState;
