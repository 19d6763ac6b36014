//! Scripted clients for tests. No network access.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use super::client::{ClientFactory, CompletionClient, CompletionError, CompletionRequest};
use crate::core::Credential;

/// How a scripted credential answers
#[derive(Debug, Clone)]
pub enum Script {
    /// Answer every call with `"<prefix> #<n>"`
    Echo(String),
    /// Fail every call the same way
    Fail(CompletionError),
    /// Play these outcomes in order, then fall back to `Echo("late")`
    Sequence(Vec<Result<String, CompletionError>>),
}

/// Shared log of every call made through the factory, in order
pub type CallLog = Arc<Mutex<Vec<(String, CompletionRequest)>>>;

pub struct ScriptedClient {
    label: String,
    script: Script,
    queue: Mutex<VecDeque<Result<String, CompletionError>>>,
    count: Mutex<usize>,
    calls: CallLog,
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    fn credential_label(&self) -> &str {
        &self.label
    }

    async fn generate(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        self.calls
            .lock()
            .unwrap()
            .push((self.label.clone(), request.clone()));
        let n = {
            let mut count = self.count.lock().unwrap();
            *count += 1;
            *count
        };

        match &self.script {
            Script::Echo(prefix) => Ok(format!("{prefix} #{n}")),
            Script::Fail(err) => Err(err.clone()),
            Script::Sequence(_) => self
                .queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(format!("late #{n}"))),
        }
    }
}

/// Factory mapping credential secrets to scripts; unknown secrets fail auth
#[derive(Default)]
pub struct ScriptedFactory {
    scripts: HashMap<String, Script>,
    pub calls: CallLog,
}

impl ScriptedFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, secret: &str, script: Script) -> Self {
        self.scripts.insert(secret.to_string(), script);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<(String, CompletionRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

impl ClientFactory for ScriptedFactory {
    fn client_for(&self, credential: &Credential) -> Arc<dyn CompletionClient> {
        let script = self
            .scripts
            .get(credential.expose_secret())
            .cloned()
            .unwrap_or_else(|| Script::Fail(CompletionError::AuthOrQuota("invalid key".into())));
        let queue = match &script {
            Script::Sequence(items) => items.iter().cloned().collect(),
            _ => VecDeque::new(),
        };
        Arc::new(ScriptedClient {
            label: credential.label.clone(),
            script,
            queue: Mutex::new(queue),
            count: Mutex::new(0),
            calls: self.calls.clone(),
        })
    }
}
