//! Canned debate used when no credential can generate
//!
//! Two turns, four lines, expert1 first. Deterministic: same inputs, same script.

use crate::core::{ConversationTurn, Speaker};

/// Number of turns in the fallback script
pub const FALLBACK_TURNS: u32 = 2;

pub fn fallback_script(topic: &str, expert1: &str, expert2: &str) -> Vec<ConversationTurn> {
    let lines = [
        (
            Speaker::Expert1,
            1,
            format!(
                "As {expert1}, my position on \"{topic}\" is that the evidence points toward steady, measurable progress. \
                 Studies in this area commonly report improvements of around 20% when the right practices are adopted."
            ),
        ),
        (
            Speaker::Expert2,
            1,
            format!(
                "{expert1} makes a fair point, but as {expert2} I would urge caution on \"{topic}\". \
                 Headline numbers often hide trade-offs, and roughly a third of early results fail to replicate."
            ),
        ),
        (
            Speaker::Expert1,
            2,
            format!(
                "Replication matters, {expert2}, yet the broader trend on \"{topic}\" still holds. \
                 Even conservative estimates show gains well above the baseline."
            ),
        ),
        (
            Speaker::Expert2,
            2,
            format!(
                "Then we agree on the direction, {expert1}, if not the pace. \
                 Progress on \"{topic}\" should be measured carefully so the gains are real and lasting."
            ),
        ),
    ];

    lines
        .into_iter()
        .map(|(speaker, turn_index, text)| ConversationTurn {
            speaker,
            text,
            turn_index,
        })
        .collect()
}
