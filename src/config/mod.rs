//! Configuration for retreat-econ
//!
//! Settings are layered, lowest precedence first:
//!
//! 1. Hardcoded defaults
//! 2. Global config file (`<config dir>/config.toml`)
//! 3. Project config file (`.retreat-econ/config.toml`) or an explicit `--config` path
//! 4. Environment variables (`RETREAT_*`)

use directories::ProjectDirs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod loader;

pub use loader::{load_config, load_config_with, ConfigEnv, ConfigSources, MockEnv, RealEnv};

use crate::economics::{PlatformFeeRate, UnknownFeePolicy};
use crate::error::{ErrorCode, Result, RetreatError};

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Directory name holding a project's config file
pub const PROJECT_CONFIG_DIR: &str = ".retreat-econ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicsConfig {
    /// Platform share of gross revenue as a fraction
    #[serde(default)]
    pub platform_fee_rate: PlatformFeeRate,

    /// Handling of fee type literals outside the known five
    #[serde(default)]
    pub unknown_fee_type: UnknownFeePolicy,

    /// Symbol printed in front of amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// One config file layer. Absent keys leave lower layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub platform_fee_rate: Option<Decimal>,
    #[serde(default)]
    pub unknown_fee_type: Option<UnknownFeePolicy>,
    #[serde(default)]
    pub currency_symbol: Option<String>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for EconomicsConfig {
    fn default() -> Self {
        Self {
            platform_fee_rate: PlatformFeeRate::DEFAULT,
            unknown_fee_type: UnknownFeePolicy::default(),
            currency_symbol: default_currency_symbol(),
            log_level: default_log_level(),
        }
    }
}

// Default value functions for serde
fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl EconomicsConfig {
    /// Overlay the keys present in `layer`
    pub fn apply(&mut self, layer: ConfigLayer) {
        if let Some(rate) = layer.platform_fee_rate {
            self.platform_fee_rate = PlatformFeeRate::new(rate);
        }
        if let Some(policy) = layer.unknown_fee_type {
            self.unknown_fee_type = policy;
        }
        if let Some(symbol) = layer.currency_symbol {
            self.currency_symbol = symbol;
        }
        if let Some(level) = layer.log_level {
            self.log_level = level;
        }
    }

    /// Check every field, reporting all problems at once
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if !self.platform_fee_rate.is_valid() {
            errors.push(format!(
                "platform_fee_rate must be between 0 and 1, got {}",
                self.platform_fee_rate.value()
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            errors.push(format!(
                "log_level must be one of: {}",
                VALID_LOG_LEVELS.join(", ")
            ));
        }

        if self.currency_symbol.trim().is_empty() {
            errors.push("currency_symbol cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RetreatError::config_with_code(
                ErrorCode::CONFIG_VALIDATION_FAILED,
                errors.join("; "),
            ))
        }
    }
}

/// Location of the global config file, if a home directory can be found
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "retreat-econ", "retreat-econ")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Project config file relative to the working directory
pub fn project_config_path() -> PathBuf {
    PathBuf::from(PROJECT_CONFIG_DIR).join("config.toml")
}
