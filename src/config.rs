//! Configuration for the analysis engine
//!
//! Settings load from environment variables with sensible defaults, and a
//! `validate()` pass catches nonsense values before the engine is built.
//!
//! # Environment variables
//!
//! - `DECKWISE_CACHE_CAPACITY`: summary cache entries - default: "500"
//! - `DECKWISE_CACHE_TTL_SECS`: summary cache age limit - default: "14400" (4h)
//! - `DECKWISE_LOG_LEVEL`: logging level - default: "info"
//! - `DECKWISE_LOG_JSON`: JSON log output (true|false) - default: "false"

use std::env;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

use crate::analysis::WarningTargets;
use crate::cache::CacheConfig;
use crate::detection::DetectorThresholds;

const DEFAULT_CACHE_CAPACITY: usize = 500;
const DEFAULT_CACHE_TTL_SECS: u64 = 4 * 60 * 60;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("Failed to parse {field}: {error}")]
    ParseError { field: String, error: String },
}

/// Engine-wide configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Summary cache bounds.
    pub cache: CacheConfig,

    /// Module-detection thresholds.
    pub thresholds: DetectorThresholds,

    /// Warning-flag targets.
    pub targets: WarningTargets,

    /// Logging level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for EngineConfig {
    /// Loads from `DECKWISE_*` environment variables, falling back to
    /// defaults for anything unset or unparseable.
    fn default() -> Self {
        let capacity = env::var("DECKWISE_CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_CACHE_CAPACITY);

        let ttl_secs = env::var("DECKWISE_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_CACHE_TTL_SECS);

        let log_level = env::var("DECKWISE_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            cache: CacheConfig {
                capacity,
                ttl: Duration::from_secs(ttl_secs),
            },
            thresholds: DetectorThresholds::default(),
            targets: WarningTargets::default(),
            log_level,
        }
    }
}

impl EngineConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.capacity == 0 {
            return Err(ConfigError::ValidationFailed(
                "Cache capacity must be at least 1".to_string(),
            ));
        }
        if self.cache.ttl.is_zero() {
            return Err(ConfigError::ValidationFailed(
                "Cache TTL must be non-zero".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.targets.mana_low_ratio)
            || !(0.0..1.0).contains(&self.targets.mana_high_ratio)
            || self.targets.mana_low_ratio >= self.targets.mana_high_ratio
        {
            return Err(ConfigError::ValidationFailed(
                "Mana ratio thresholds must satisfy 0 <= low < high < 1".to_string(),
            ));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {other}. Valid options: trace, debug, info, warn, error"
                )))
            }
        }

        Ok(())
    }
}

impl fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Deckwise Configuration:")?;
        writeln!(f, "  Cache Capacity: {}", self.cache.capacity)?;
        writeln!(f, "  Cache TTL: {}s", self.cache.ttl.as_secs())?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}
