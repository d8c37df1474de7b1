//! CLI configuration (env-driven).

use anyhow::{Context, Result};
use rotation_core::config::RotationConfig;

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub rotation: RotationConfig,

    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let defaults = RotationConfig::default();

        let default_mvp_type = std::env::var("ROTATION_DEFAULT_MVP_TYPE")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.default_mvp_type);

        let history_limit: usize = std::env::var("ROTATION_HISTORY_LIMIT")
            .ok()
            .map(|v| v.parse())
            .transpose()
            .context("ROTATION_HISTORY_LIMIT must be a non-negative integer.")?
            .unwrap_or(defaults.history_limit);

        let top_mvps_limit: usize = std::env::var("ROTATION_TOP_LIMIT")
            .ok()
            .map(|v| v.parse())
            .transpose()
            .context("ROTATION_TOP_LIMIT must be a non-negative integer.")?
            .unwrap_or(defaults.top_mvps_limit);

        let log_level = std::env::var("ROTATION_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            rotation: RotationConfig {
                default_mvp_type,
                history_limit,
                top_mvps_limit,
            },
            log_level,
        })
    }
}
