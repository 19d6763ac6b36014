//! Credential pool
//!
//! Ordered, immutable list of API credentials built once from [`Config`](super::Config).
//! The secret itself never appears in `Debug` output or logs, only the label.

use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;

/// A single provider credential
pub struct Credential {
    /// Human-readable name used in logs (`primary`, `secondary`, `key-3`, ...)
    pub label: String,
    /// Provider identity, e.g. `openai`
    pub provider: String,
    secret: SecretString,
}

impl Credential {
    pub fn new(label: impl Into<String>, provider: impl Into<String>, secret: &str) -> Self {
        Self {
            label: label.into(),
            provider: provider.into(),
            secret: SecretString::from(secret.to_string()),
        }
    }

    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

impl Clone for Credential {
    fn clone(&self) -> Self {
        Self::new(self.label.clone(), self.provider.clone(), self.expose_secret())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("label", &self.label)
            .field("provider", &self.provider)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct CredentialPool {
    credentials: Vec<Credential>,
}

impl CredentialPool {
    /// Build the pool from raw key strings, dropping blanks and duplicates.
    ///
    /// Fails if nothing usable remains; the server cannot start without a credential.
    pub fn from_keys<S: AsRef<str>>(provider: &str, keys: &[S]) -> Result<Self> {
        let mut credentials: Vec<Credential> = Vec::new();

        for key in keys {
            let key = key.as_ref().trim();
            if key.is_empty() || credentials.iter().any(|c| c.expose_secret() == key) {
                continue;
            }
            let label = match credentials.len() {
                0 => "primary".to_string(),
                1 => "secondary".to_string(),
                n => format!("key-{}", n + 1),
            };
            credentials.push(Credential::new(label, provider, key));
        }

        if credentials.is_empty() {
            anyhow::bail!(
                "No API credentials configured (set OPENAI_API_KEY, OPENAI_API_KEY_SECOND or OPENAI_API_KEYS)"
            );
        }

        Ok(Self { credentials })
    }

    /// Credentials in priority order
    pub fn available_credentials(&self) -> &[Credential] {
        &self.credentials
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_keys_filtered() {
        let pool = CredentialPool::from_keys("openai", &["", "  ", "sk-live"]).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.available_credentials()[0].label, "primary");
        assert_eq!(pool.available_credentials()[0].expose_secret(), "sk-live");
    }

    #[test]
    fn test_order_and_labels() {
        let pool = CredentialPool::from_keys("openai", &["a", "b", "c"]).unwrap();
        let labels: Vec<&str> = pool
            .available_credentials()
            .iter()
            .map(|c| c.label.as_str())
            .collect();
        assert_eq!(labels, vec!["primary", "secondary", "key-3"]);
    }

    #[test]
    fn test_duplicates_dropped() {
        let pool = CredentialPool::from_keys("openai", &["a", "a", "b"]).unwrap();
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn test_empty_pool_fails() {
        let keys: [&str; 2] = ["", ""];
        assert!(CredentialPool::from_keys("openai", &keys).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credential = Credential::new("primary", "openai", "sk-very-secret");
        let printed = format!("{credential:?}");
        assert!(!printed.contains("sk-very-secret"));
        assert!(printed.contains("REDACTED"));
    }
}
