//! Path utilities for rightsize.
//!
//! User-level files live under `~/.rightsize/`:
//! - `~/.rightsize/config.toml` - main configuration

use std::path::PathBuf;

/// Returns the rightsize home directory (`~/.rightsize/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".rightsize")
}

/// Returns the default config file path (`~/.rightsize/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_lives_under_rightsize_home() {
        let config = default_config();
        assert!(config.starts_with(home_dir()));
        assert!(config.to_string_lossy().contains(".rightsize"));
        assert!(config.ends_with("config.toml"));
    }
}
