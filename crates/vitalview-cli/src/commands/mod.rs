pub mod check;
pub mod config;
pub mod info;
pub mod report;
pub mod scene;
pub mod stages;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;
use vitalview_core::config::AppConfig;

/// Read a TOML config, or fall back to defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            let config = toml::from_str(&contents).context("Invalid VitalView config")?;
            debug!(path = %path.display(), "Loaded config");
            Ok(config)
        }
        None => Ok(AppConfig::default()),
    }
}
