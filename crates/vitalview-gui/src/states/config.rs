use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use vitalview_core::config::AppConfig;

/// The active configuration and the file it came from, if any.
#[derive(Default)]
pub struct ConfigState {
    pub app: AppConfig,
    pub path: Option<PathBuf>,
}

impl ConfigState {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let app = toml::from_str(&contents)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(Self {
            app,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn source_label(&self) -> String {
        match self.path {
            Some(ref p) => p.display().to_string(),
            None => "built-in defaults".into(),
        }
    }
}
