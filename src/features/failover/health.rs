//! Credential health map
//!
//! Process-wide circuit breaker keyed by credential label. Uses DashMap for thread-safe
//! concurrent access, so concurrent requests share failure knowledge without locking
//! the pool itself. A zero cooldown disables it.
//!
//! After the cooldown only one caller is let through for a trial call (half-open); the others
//! keep skipping the credential until that call records a success or failure.

use dashmap::DashMap;
use std::time::{Duration, Instant};

use crate::features::completion::CompletionError;

/// Consecutive transient failures before a credential is benched
pub const TRANSIENT_FAILURE_THRESHOLD: u32 = 3;

#[derive(Debug, Clone, Default)]
struct HealthEntry {
    consecutive_failures: u32,
    open_until: Option<Instant>,
}

#[derive(Debug)]
pub struct CredentialHealth {
    entries: DashMap<String, HealthEntry>,
    cooldown: Duration,
}

impl CredentialHealth {
    pub fn new(cooldown: Duration) -> Self {
        CredentialHealth {
            entries: DashMap::new(),
            cooldown,
        }
    }

    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Whether the selector may try this credential right now
    pub fn is_available(&self, label: &str) -> bool {
        let Some(mut entry) = self.entries.get_mut(label) else {
            return true;
        };
        match entry.open_until {
            Some(until) if Instant::now() < until => false,
            Some(_) => {
                // Cooldown elapsed: let this caller through and keep the circuit open for
                // everyone else until it reports back
                entry.open_until = Some(Instant::now() + self.cooldown);
                entry.consecutive_failures = TRANSIENT_FAILURE_THRESHOLD.saturating_sub(1);
                true
            }
            None => true,
        }
    }

    pub fn record_success(&self, label: &str) {
        self.entries.remove(label);
    }

    pub fn record_failure(&self, label: &str, error: &CompletionError) {
        if self.cooldown.is_zero() || !error.rotates_credential() {
            return;
        }

        let now = Instant::now();
        let mut entry = self.entries.entry(label.to_string()).or_default();
        entry.consecutive_failures += 1;

        let trips = match error {
            CompletionError::AuthOrQuota(_) => true,
            _ => entry.consecutive_failures >= TRANSIENT_FAILURE_THRESHOLD,
        };
        if trips {
            entry.open_until = Some(now + self.cooldown);
        }
    }
}
