use rust_decimal::Decimal;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, trace};

use super::{global_config_path, project_config_path, ConfigLayer, EconomicsConfig};
use crate::economics::UnknownFeePolicy;
use crate::error::{common, ErrorCode, Result, RetreatError};

pub const ENV_PLATFORM_FEE_RATE: &str = "RETREAT_PLATFORM_FEE_RATE";
pub const ENV_UNKNOWN_FEE_TYPE: &str = "RETREAT_UNKNOWN_FEE_TYPE";
pub const ENV_CURRENCY_SYMBOL: &str = "RETREAT_CURRENCY_SYMBOL";
pub const ENV_LOG_LEVEL: &str = "RETREAT_LOG_LEVEL";

/// Source of environment variables
pub trait ConfigEnv {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment
pub struct RealEnv;

impl ConfigEnv for RealEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// In-memory environment for tests
#[derive(Debug, Default, Clone)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl ConfigEnv for MockEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Files consulted while loading, lowest precedence first
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Optional; skipped when missing
    pub global: Option<PathBuf>,
    /// Optional; skipped when missing
    pub project: Option<PathBuf>,
    /// Must exist when given; replaces the project file
    pub explicit: Option<PathBuf>,
}

impl ConfigSources {
    /// Standard locations, with `explicit` taking the project file's place
    pub fn discover(explicit: Option<PathBuf>) -> Self {
        Self {
            global: global_config_path(),
            project: Some(project_config_path()),
            explicit,
        }
    }

    /// No files at all; defaults and environment only
    pub fn none() -> Self {
        Self::default()
    }
}

/// Load configuration from the standard locations and the process environment
pub async fn load_config(explicit: Option<PathBuf>) -> Result<EconomicsConfig> {
    load_config_with(&RealEnv, &ConfigSources::discover(explicit)).await
}

/// Load configuration from the given files and environment, then validate it
pub async fn load_config_with<E: ConfigEnv>(
    env: &E,
    sources: &ConfigSources,
) -> Result<EconomicsConfig> {
    let mut config = EconomicsConfig::default();

    if let Some(global) = &sources.global {
        if let Some(layer) = read_layer(global, false).await? {
            debug!(path = %global.display(), "Applied global configuration");
            config.apply(layer);
        }
    }

    match &sources.explicit {
        Some(explicit) => {
            if let Some(layer) = read_layer(explicit, true).await? {
                debug!(path = %explicit.display(), "Applied explicit configuration");
                config.apply(layer);
            }
        }
        None => {
            if let Some(project) = &sources.project {
                if let Some(layer) = read_layer(project, false).await? {
                    debug!(path = %project.display(), "Applied project configuration");
                    config.apply(layer);
                }
            }
        }
    }

    config.apply(env_layer(env)?);
    config.validate()?;

    trace!(?config, "Effective configuration");
    Ok(config)
}

async fn read_layer(path: &Path, required: bool) -> Result<Option<ConfigLayer>> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        if required {
            return Err(common::config_not_found(path));
        }
        return Ok(None);
    }

    let content = fs::read_to_string(path).await.map_err(|e| {
        RetreatError::config_with_code(
            ErrorCode::CONFIG_PATH_ERROR,
            format!("Cannot read {}", path.display()),
        )
        .with_source(e)
    })?;

    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

    let layer = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| {
            RetreatError::config_with_code(
                ErrorCode::CONFIG_INVALID_YAML,
                format!("Invalid YAML in {}", path.display()),
            )
            .with_source(e)
        })?
    } else {
        toml::from_str(&content).map_err(|e| {
            RetreatError::config_with_code(
                ErrorCode::CONFIG_INVALID_TOML,
                format!("Invalid TOML in {}", path.display()),
            )
            .with_source(e)
        })?
    };

    Ok(Some(layer))
}

fn env_layer<E: ConfigEnv>(env: &E) -> Result<ConfigLayer> {
    let platform_fee_rate = match env.var(ENV_PLATFORM_FEE_RATE) {
        Some(raw) => Some(raw.trim().parse::<Decimal>().map_err(|e| {
            RetreatError::config_with_code(
                ErrorCode::CONFIG_INVALID_VALUE,
                format!("{} is not a decimal: '{}'", ENV_PLATFORM_FEE_RATE, raw),
            )
            .with_source(e)
        })?),
        None => None,
    };

    let unknown_fee_type = env
        .var(ENV_UNKNOWN_FEE_TYPE)
        .map(|raw| raw.parse::<UnknownFeePolicy>())
        .transpose()?;

    Ok(ConfigLayer {
        platform_fee_rate,
        unknown_fee_type,
        currency_symbol: env.var(ENV_CURRENCY_SYMBOL),
        log_level: env.var(ENV_LOG_LEVEL).map(|level| level.to_lowercase()),
    })
}
