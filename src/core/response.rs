//! Debate result types and the response assembler
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Figure values seeded from the request so identical requests get identical bodies
//! - 1.0.0: Initial transcript + figure payload

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Figure category labels
pub const FIGURE_LABELS: [&str; 2] = ["Baseline", "Improved"];
/// Inclusive range for the "Baseline" bar
pub const BASELINE_RANGE: (u32, u32) = (50, 80);
/// Inclusive range for the "Improved" bar
pub const IMPROVED_RANGE: (u32, u32) = (60, 95);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speaker {
    Expert1,
    Expert2,
}

impl Speaker {
    pub fn opponent(self) -> Self {
        match self {
            Speaker::Expert1 => Speaker::Expert2,
            Speaker::Expert2 => Speaker::Expert1,
        }
    }
}

/// One generated line of the dialogue. Never mutated once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
    pub turn_index: u32,
}

/// Wire form of a conversation turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub speaker: String,
    pub statement: String,
    pub turn: u32,
}

/// Decorative chart block. Synthetic data, not a measurement of the debate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    #[serde(rename = "type")]
    pub kind: String,
    pub labels: Vec<String>,
    pub values: Vec<u32>,
}

impl Figure {
    /// Build the bar chart block, seeded so the same inputs always produce the same values
    pub fn synthetic(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Figure {
            kind: "bar".to_string(),
            labels: FIGURE_LABELS.iter().map(|l| l.to_string()).collect(),
            values: vec![
                rng.random_range(BASELINE_RANGE.0..=BASELINE_RANGE.1),
                rng.random_range(IMPROVED_RANGE.0..=IMPROVED_RANGE.1),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateResult {
    pub topic: String,
    pub expert1: String,
    pub expert2: String,
    pub exchanges: Vec<Exchange>,
    pub total_turns: u32,
    pub figure: Figure,
}

/// Package a finished dialogue into the reply payload
pub fn assemble(
    topic: &str,
    expert1: &str,
    expert2: &str,
    turns: &[ConversationTurn],
    total_turns: u32,
) -> DebateResult {
    let exchanges = turns
        .iter()
        .map(|t| Exchange {
            speaker: match t.speaker {
                Speaker::Expert1 => expert1.to_string(),
                Speaker::Expert2 => expert2.to_string(),
            },
            statement: t.text.clone(),
            turn: t.turn_index,
        })
        .collect();

    DebateResult {
        topic: topic.to_string(),
        expert1: expert1.to_string(),
        expert2: expert2.to_string(),
        exchanges,
        total_turns,
        figure: Figure::synthetic(figure_seed(topic, expert1, expert2)),
    }
}

fn figure_seed(topic: &str, expert1: &str, expert2: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    (topic, expert1, expert2).hash(&mut hasher);
    hasher.finish()
}
