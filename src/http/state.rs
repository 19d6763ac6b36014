//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::core::Config;
use crate::features::debate::DebateOrchestrator;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<DebateOrchestrator>,
    pub default_turns: u32,
    pub max_turns: u32,
}

impl AppState {
    pub fn new(orchestrator: DebateOrchestrator, config: &Config) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            default_turns: config.default_turns,
            max_turns: config.max_turns,
        }
    }
}
