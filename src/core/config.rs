//! Process configuration loaded once at startup
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Added `OPENAI_API_KEYS` list, per-call timeout and credential cooldown
//! - 1.0.0: Initial creation with primary/secondary keys

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";

#[derive(Clone)]
pub struct Config {
    /// Raw credential strings in priority order (may contain blanks, the pool filters them)
    pub api_keys: Vec<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub temperature: f32,
    pub completion_timeout: Duration,
    /// How long a failing credential is skipped. Zero disables the breaker.
    pub credential_cooldown: Duration,
    pub default_turns: u32,
    pub max_turns: u32,
    pub bind_address: String,
    pub port: u16,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment in production, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut api_keys = Vec::new();
        for key in ["OPENAI_API_KEY", "OPENAI_API_KEY_SECOND"] {
            api_keys.push(lookup(key).unwrap_or_default());
        }
        if let Some(extra) = lookup("OPENAI_API_KEYS") {
            api_keys.extend(extra.split(',').map(|k| k.trim().to_string()));
        }

        let default_turns: u32 = parse_or(&lookup, "DEBATE_DEFAULT_TURNS", 3)?;
        let max_turns: u32 = parse_or(&lookup, "DEBATE_MAX_TURNS", 10)?;
        if max_turns == 0 {
            anyhow::bail!("DEBATE_MAX_TURNS must be at least 1");
        }

        Ok(Config {
            api_keys,
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            temperature: parse_or(&lookup, "OPENAI_TEMPERATURE", 0.7)?,
            completion_timeout: Duration::from_secs(parse_or(
                &lookup,
                "COMPLETION_TIMEOUT_SECS",
                20,
            )?),
            credential_cooldown: Duration::from_secs(parse_or(
                &lookup,
                "CREDENTIAL_COOLDOWN_SECS",
                60,
            )?),
            default_turns: default_turns.clamp(1, max_turns),
            max_turns,
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 5000)?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Parse an optional variable, falling back to `default` when unset or blank
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {key}: '{raw}'")),
        _ => Ok(default),
    }
}
