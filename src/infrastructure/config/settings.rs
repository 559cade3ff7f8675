//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional; an empty file yields the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use rightsize::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging(0);
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::logging::LoggingConfig;
use super::policy::PolicyConfig;
use super::solver::SolverConfig;
use crate::domain::WorkforcePolicy;
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// MILP backend settings.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Organisation defaults for requests.
    #[serde(default)]
    pub policy: PolicyConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    ///
    /// Used for the default config location, which need not exist. An explicit
    /// path that is missing should go through [`Config::load`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed or validated.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Initialize logging from the `[logging]` section.
    pub fn init_logging(&self, verbosity: u8) {
        self.logging.init(verbosity);
    }

    /// Domain policy derived from the `[policy]` section.
    #[must_use]
    pub fn workforce_policy(&self) -> WorkforcePolicy {
        self.policy.to_policy()
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if !self.logging.is_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("expected 'pretty' or 'json', got '{}'", self.logging.format),
            }
            .into());
        }
        if self.solver.backend.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "solver.backend",
            }
            .into());
        }
        if let Some(limit) = self.solver.time_limit_secs {
            if !limit.is_finite() || limit <= 0.0 {
                return Err(ConfigError::InvalidValue {
                    field: "solver.time_limit_secs",
                    reason: "must be greater than 0".to_string(),
                }
                .into());
            }
        }
        self.policy.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShortagePenalty;
    use crate::error::Error;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse_toml("").unwrap();
        assert_eq!(config.solver, SolverConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.policy.roles.is_empty());
    }

    #[test]
    fn parses_adaptive_shortage_penalty() {
        let config = Config::parse_toml(
            r#"
            [policy]
            shortage_penalty = { mode = "adaptive", multiplier = 10 }
            "#,
        )
        .unwrap();

        assert_eq!(
            config.policy.shortage_penalty,
            ShortagePenalty::Adaptive {
                multiplier: dec!(10)
            }
        );
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Config::parse_toml("[logging]\nformat = \"xml\"\n");
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidValue {
                field: "logging.format",
                ..
            }))
        ));
    }
}
