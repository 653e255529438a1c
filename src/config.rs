//! Configuration loading from TOML with environment variable resolution.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Secrets (the feed API key) are referenced by env-var name in the config
//! and resolved at runtime via `std::env::var`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub tracker: TrackerConfig,
    pub service: ServiceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TrackerConfig {
    pub name: String,
    /// Seconds between update cycles.
    pub update_interval_secs: u64,
}

/// Which `BetService` backend to run against.
#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// "rest" or "file".
    pub backend: String,
    pub rest: RestConfig,
    pub file: FileConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RestConfig {
    pub base_url: String,
    /// Env-var *name* holding the feed API key. Optional — reads work
    /// unauthenticated.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FileConfig {
    #[serde(default)]
    pub state_file: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_toml(&contents).with_context(|| format!("Failed to parse config file: {path}"))
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Resolve an environment variable name to its value.
    /// Useful for loading secrets referenced in the config.
    pub fn resolve_env(env_name: &str) -> Result<String> {
        std::env::var(env_name)
            .with_context(|| format!("Environment variable not set: {env_name}"))
    }
}
