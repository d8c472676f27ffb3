//! Configuration: optional TOML file layered under CLI overrides.

use crate::mode::Mode;
use crate::theme::Theme;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, instrument};

/// User-configurable settings for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TuiConfig {
    /// Opponent mode for new games.
    pub mode: Mode,
    /// Color theme.
    pub theme: Theme,
    /// Visual delay before a scheduled CPU move fires, in milliseconds.
    pub cpu_delay_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            mode: Mode::TwoPlayer,
            theme: Theme::Light,
            cpu_delay_ms: 400,
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(?config, "Loaded config file");
        Ok(config)
    }
}
