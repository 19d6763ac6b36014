//! Failover selector
//!
//! Walks the credential pool in order and probes each credential with a real production
//! request. The first credential that answers wins, and its answer is handed back with
//! the client so the caller does not repeat the call. Runs once per debate, not per turn.

use log::{debug, info, warn};
use std::sync::Arc;

use super::health::CredentialHealth;
use crate::core::CredentialPool;
use crate::features::completion::{
    ClientFactory, CompletionClient, CompletionError, CompletionRequest,
};

/// A credential that answered the probe, plus the probe's outcome
pub struct Selection {
    pub client: Arc<dyn CompletionClient>,
    /// `Ok` text, or a `Protocol` error (the call went through but yielded nothing usable)
    pub probe_outcome: Result<String, CompletionError>,
}

pub struct FailoverSelector<'a> {
    pool: &'a CredentialPool,
    factory: &'a dyn ClientFactory,
    health: &'a CredentialHealth,
}

impl<'a> FailoverSelector<'a> {
    pub fn new(
        pool: &'a CredentialPool,
        factory: &'a dyn ClientFactory,
        health: &'a CredentialHealth,
    ) -> Self {
        Self {
            pool,
            factory,
            health,
        }
    }

    /// Probe credentials in pool order until one works. `None` means all are exhausted.
    pub async fn select_working_client(&self, probe: &CompletionRequest) -> Option<Selection> {
        for credential in self.pool.available_credentials() {
            if !self.health.is_available(&credential.label) {
                debug!("Skipping credential '{}' (cooling down)", credential.label);
                continue;
            }

            let client = self.factory.client_for(credential);
            match client.generate(probe).await {
                Err(e) if e.rotates_credential() => {
                    warn!("Credential '{}' failed probe: {}", credential.label, e);
                    self.health.record_failure(&credential.label, &e);
                }
                outcome => {
                    // A protocol error still proves the key is accepted
                    self.health.record_success(&credential.label);
                    info!("Using credential '{}'", credential.label);
                    return Some(Selection {
                        client,
                        probe_outcome: outcome,
                    });
                }
            }
        }

        warn!(
            "All {} credential(s) exhausted or cooling down",
            self.pool.len()
        );
        None
    }
}
