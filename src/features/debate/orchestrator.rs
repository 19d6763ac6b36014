//! # Debate Orchestrator
//!
//! Manages the flow of a debate between two expert personas for one HTTP request.

use anyhow::Result;
use log::{debug, info, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::fallback::{fallback_script, FALLBACK_TURNS};
use super::transcript::Transcript;
use crate::core::{assemble, CredentialPool, DebateResult, Speaker};
use crate::features::completion::{ChatMessage, ClientFactory, CompletionRequest};
use crate::features::failover::{CredentialHealth, FailoverSelector};

/// Configuration for a single debate
#[derive(Debug, Clone, PartialEq)]
pub struct DebateConfig {
    /// Topic or question to debate
    pub topic: String,
    /// Name of the expert who speaks first each turn
    pub expert1: String,
    /// Name of the expert who answers
    pub expert2: String,
    /// Number of turns; each turn is one line per expert
    pub turns: u32,
}

/// Orchestrates a debate between two expert personas.
///
/// Built once at startup and shared across requests. The credential pool is read-only;
/// the health map is the only state requests share.
pub struct DebateOrchestrator {
    pool: CredentialPool,
    factory: Arc<dyn ClientFactory>,
    health: CredentialHealth,
}

impl DebateOrchestrator {
    pub fn new(
        pool: CredentialPool,
        factory: Arc<dyn ClientFactory>,
        health: CredentialHealth,
    ) -> Self {
        Self {
            pool,
            factory,
            health,
        }
    }

    /// Build the system prompt for a debate participant
    fn build_debate_prompt(
        &self,
        persona_name: &str,
        opponent_name: &str,
        topic: &str,
        is_opening: bool,
    ) -> String {
        let base_prompt = format!(
            "You are {persona_name}. Speak in the first person, using the voice, vocabulary \
             and reasoning style {persona_name} is known for."
        );

        let debate_instructions = if is_opening {
            format!(
                r#"

## Debate Context
You are participating in a debate against {opponent_name} on the topic: "{topic}"

This is your OPENING STATEMENT. Present your initial position on this topic.

Guidelines:
- Stay completely in character as {persona_name}
- Reference a numeric research finding (include a percentage or number)
- Keep your response under 150 words"#
            )
        } else {
            format!(
                r#"

## Debate Context
You are in a debate against {opponent_name} on the topic: "{topic}"

Respond to your opponent's previous argument. You may:
- Counter their points with your own reasoning
- Acknowledge valid points while presenting alternatives
- Engage with how {opponent_name} reasons, as {opponent_name} would, not only with their conclusions

Guidelines:
- Stay completely in character as {persona_name}
- Reference a numeric research finding (include a percentage or number)
- Build on the conversation rather than repeating yourself
- Keep your response under 150 words"#
            )
        };

        format!("{base_prompt}{debate_instructions}")
    }

    /// Build the call for `speaker` at `turn` from the current transcript
    fn build_request(
        &self,
        config: &DebateConfig,
        transcript: &Transcript,
        speaker: Speaker,
        turn: u32,
    ) -> CompletionRequest {
        let is_opening = turn == 1;
        let persona_name = transcript.name_of(speaker);
        let opponent_name = transcript.name_of(speaker.opponent());

        let user_message = if is_opening {
            format!("Give your opening statement on: {}", config.topic)
        } else {
            format!(
                "Your opponent {} just said their piece. Respond to continue the debate on: {}",
                opponent_name, config.topic
            )
        };

        let mut messages = transcript.messages_for(speaker);
        messages.push(ChatMessage::user(user_message));

        CompletionRequest {
            system_prompt: self.build_debate_prompt(
                persona_name,
                opponent_name,
                &config.topic,
                is_opening,
            ),
            messages,
        }
    }

    /// Run a complete debate and assemble the reply
    pub async fn run_debate(&self, config: DebateConfig) -> Result<DebateResult> {
        anyhow::ensure!(config.turns >= 1, "Debate needs at least one turn");

        let debate_id = Uuid::new_v4();
        info!(
            "[{}] Starting debate: {} vs {} on '{}' ({} turns)",
            debate_id, config.expert1, config.expert2, config.topic, config.turns
        );

        let mut transcript = Transcript::new(&config.topic, &config.expert1, &config.expert2);

        // The opening call doubles as the failover probe
        let probe = self.build_request(&config, &transcript, Speaker::Expert1, 1);
        let selector = FailoverSelector::new(&self.pool, self.factory.as_ref(), &self.health);
        let Some(selection) = selector.select_working_client(&probe).await else {
            warn!("[{}] No usable credential, using fallback script", debate_id);
            return Ok(self.fallback_result(&config));
        };

        let client = selection.client;
        let mut pending_probe = Some(selection.probe_outcome);

        for turn in 1..=config.turns {
            for speaker in [Speaker::Expert1, Speaker::Expert2] {
                let outcome = match pending_probe.take() {
                    Some(outcome) => outcome,
                    None => {
                        let request = self.build_request(&config, &transcript, speaker, turn);
                        client.generate(&request).await
                    }
                };

                let name = transcript.name_of(speaker).to_string();
                match outcome {
                    Ok(text) => {
                        self.health.record_success(client.credential_label());
                        if transcript.push(speaker, &text, turn) {
                            debug!(
                                "[{}] Turn {}/{}: {} responded ({} chars)",
                                debate_id,
                                turn,
                                config.turns,
                                name,
                                text.len()
                            );
                        } else {
                            warn!(
                                "[{}] Turn {}: {} returned empty text, skipping",
                                debate_id, turn, name
                            );
                        }
                    }
                    Err(e) => {
                        warn!(
                            "[{}] Turn {}: {} failed on credential '{}': {}, skipping",
                            debate_id,
                            turn,
                            name,
                            client.credential_label(),
                            e
                        );
                        self.health.record_failure(client.credential_label(), &e);
                    }
                }
            }
        }

        if transcript.is_empty() {
            warn!(
                "[{}] Live debate produced no statements, using fallback script",
                debate_id
            );
            return Ok(self.fallback_result(&config));
        }

        info!(
            "[{}] Debate completed: {} statements over {} turns",
            debate_id,
            transcript.turns().len(),
            config.turns
        );

        Ok(assemble(
            &config.topic,
            &config.expert1,
            &config.expert2,
            transcript.turns(),
            config.turns,
        ))
    }

    fn fallback_result(&self, config: &DebateConfig) -> DebateResult {
        let script = fallback_script(&config.topic, &config.expert1, &config.expert2);
        assemble(
            &config.topic,
            &config.expert1,
            &config.expert2,
            &script,
            FALLBACK_TURNS,
        )
    }
}
