use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::Duration;

use crate::pending::queue::FlushPolicy;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub taxonomy_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
    pub suggested_roles_limit: usize,
    pub evidence_display_limit: usize,
    pub courses_per_skill: usize,
    /// 0 disables time-based flushing; edits then commit only explicitly.
    pub confidence_debounce_ms: i64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            taxonomy_path: PathBuf::from(require_env("TAXONOMY_PATH")?),
            port: parse_env("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            suggested_roles_limit: parse_env("SUGGESTED_ROLES_LIMIT", 5)?,
            evidence_display_limit: parse_env("EVIDENCE_DISPLAY_LIMIT", 8)?,
            courses_per_skill: parse_env("COURSES_PER_SKILL", 2)?,
            confidence_debounce_ms: parse_env("CONFIDENCE_DEBOUNCE_MS", 750)?,
        })
    }

    pub fn flush_policy(&self) -> FlushPolicy {
        if self.confidence_debounce_ms > 0 {
            FlushPolicy::Debounce(Duration::milliseconds(self.confidence_debounce_ms))
        } else {
            FlushPolicy::ExplicitCommit
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}
