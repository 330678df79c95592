//! Tool configuration — parsed from TOML file + environment variable overrides.
//!
//! Priority: command-line flags > environment variables > config file > defaults.

use anyhow::{Context, Result};
use polysecret_shamir::ShamirConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level tool configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralSection,

    /// Share layout
    #[serde(default)]
    pub sharing: SharingSection,
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSection {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralSection {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Share layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharingSection {
    /// Minimum shares needed to recover the secret
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Shares emitted by `split`
    #[serde(default = "default_total_shares")]
    pub total_shares: u8,
}

impl Default for SharingSection {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            total_shares: default_total_shares(),
        }
    }
}

// ============================================================================
// Default value functions
// ============================================================================

fn default_log_level() -> String {
    "info".to_string()
}

fn default_threshold() -> u8 {
    2
}

fn default_total_shares() -> u8 {
    3
}

// ============================================================================
// Loading & environment override
// ============================================================================

impl ToolConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).with_context(|| "Failed to parse TOML config")
    }

    /// Apply environment variable overrides.
    ///
    /// Supported env vars:
    /// - `POLYSECRET_LOG_LEVEL`
    /// - `POLYSECRET_THRESHOLD`
    /// - `POLYSECRET_TOTAL_SHARES`
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(v) = lookup("POLYSECRET_LOG_LEVEL") {
            self.general.log_level = v;
        }
        if let Some(v) = lookup("POLYSECRET_THRESHOLD") {
            self.sharing.threshold = parse_env_count("POLYSECRET_THRESHOLD", &v)?;
        }
        if let Some(v) = lookup("POLYSECRET_TOTAL_SHARES") {
            self.sharing.total_shares = parse_env_count("POLYSECRET_TOTAL_SHARES", &v)?;
        }
        Ok(())
    }

    /// The share layout as the library sees it.
    pub fn shamir(&self) -> ShamirConfig {
        ShamirConfig {
            threshold: self.sharing.threshold,
            total_shares: self.sharing.total_shares,
        }
    }

    /// Validate that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            matches!(
                self.general.log_level.as_str(),
                "error" | "warn" | "info" | "debug" | "trace" | "off"
            ),
            "general.log_level must be one of error/warn/info/debug/trace/off"
        );

        self.shamir()
            .validate()
            .context("sharing.threshold / sharing.total_shares are inconsistent")?;

        Ok(())
    }
}

fn parse_env_count(key: &str, value: &str) -> Result<u8> {
    match value.trim().parse::<u8>() {
        Ok(count) => Ok(count),
        Err(_) => anyhow::bail!("{} must be a number in 0..=255, got {:?}", key, value),
    }
}

// ============================================================================
// Tests
// ============================================================================
