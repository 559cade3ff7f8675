//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs are written to stderr. `RUST_LOG` takes precedence over the
    /// configured level; a non-zero `verbosity` raises the level to `debug`
    /// (one `-v`) or `trace` (two or more).
    pub fn init(&self, verbosity: u8) {
        let level = match verbosity {
            0 => self.level.as_str(),
            1 => "debug",
            _ => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        // A subscriber may already be installed (tests, repeated calls).
        let _ = match self.format.as_str() {
            "json" => fmt()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
    }

    /// True when the format names a supported layout.
    #[must_use]
    pub fn is_known_format(&self) -> bool {
        matches!(self.format.as_str(), "pretty" | "json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}
