//! Running dialogue state for one debate request
//!
//! Append-only. Only successfully generated turns are stored; each speaker gets its own
//! view of the history when building a call.

use crate::core::{ConversationTurn, Speaker};
use crate::features::completion::ChatMessage;

#[derive(Debug, Clone)]
pub struct Transcript {
    seed: String,
    expert1: String,
    expert2: String,
    turns: Vec<ConversationTurn>,
}

impl Transcript {
    pub fn new(topic: &str, expert1: &str, expert2: &str) -> Self {
        Self {
            seed: format!(
                "Today's debate topic is: \"{topic}\". {expert1} and {expert2} will take turns sharing their views."
            ),
            expert1: expert1.to_string(),
            expert2: expert2.to_string(),
            turns: Vec::new(),
        }
    }

    pub fn name_of(&self, speaker: Speaker) -> &str {
        match speaker {
            Speaker::Expert1 => &self.expert1,
            Speaker::Expert2 => &self.expert2,
        }
    }

    /// Record a generated line; blank text is ignored. Returns whether it was stored.
    pub fn push(&mut self, speaker: Speaker, text: &str, turn_index: u32) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        debug_assert!(self.turns.last().map_or(true, |t| t.turn_index <= turn_index));
        self.turns.push(ConversationTurn {
            speaker,
            text: text.to_string(),
            turn_index,
        });
        true
    }

    /// History as seen by `speaker`: own lines as assistant, opponent lines as user
    pub fn messages_for(&self, speaker: Speaker) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(self.turns.len() + 1);
        messages.push(ChatMessage::user(self.seed.clone()));
        for turn in &self.turns {
            if turn.speaker == speaker {
                messages.push(ChatMessage::assistant(turn.text.clone()));
            } else {
                messages.push(ChatMessage::user(format!(
                    "{}: {}",
                    self.name_of(turn.speaker),
                    turn.text
                )));
            }
        }
        messages
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::completion::ChatRole;

    #[test]
    fn test_seed_only_at_start() {
        let transcript = Transcript::new("AI Ethics", "Ada", "Grace");
        let messages = transcript.messages_for(Speaker::Expert1);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, ChatRole::User);
        assert!(messages[0].content.contains("AI Ethics"));
    }

    #[test]
    fn test_blank_lines_not_stored() {
        let mut transcript = Transcript::new("T", "A", "B");
        assert!(!transcript.push(Speaker::Expert1, "   ", 1));
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_per_speaker_view() {
        let mut transcript = Transcript::new("T", "Ada", "Grace");
        transcript.push(Speaker::Expert1, "Machines need rules.", 1);
        transcript.push(Speaker::Expert2, "Rules need debugging.", 1);

        let ada_view = transcript.messages_for(Speaker::Expert1);
        assert_eq!(ada_view[1], ChatMessage::assistant("Machines need rules."));
        assert_eq!(ada_view[2], ChatMessage::user("Grace: Rules need debugging."));

        let grace_view = transcript.messages_for(Speaker::Expert2);
        assert_eq!(grace_view[1], ChatMessage::user("Ada: Machines need rules."));
        assert_eq!(grace_view[2], ChatMessage::assistant("Rules need debugging."));
    }
}
