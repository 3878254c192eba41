use std::path::PathBuf;
use std::time::Duration;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{
    ACCEPTED_EXTENSIONS, DEFAULT_ANALYSIS_DELAY_MS, DEFAULT_BACKGROUND, DEFAULT_MODEL_PATH,
    DEFAULT_TUMOR_OFFSET,
};
use crate::error::{Result, VitalViewError};
use crate::lighting::{EnvironmentPreset, Lighting};
use crate::report::MockReport;
use crate::tumor::TumorStage;
use crate::upload::AcceptFilter;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub viewer: ViewerConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// glTF/GLB files making up the anatomical model.
    pub model_paths: Vec<PathBuf>,
    /// JSON geometry for the tumor. The bundled mock tumor when unset.
    pub tumor_geometry: Option<PathBuf>,
    /// `#rrggbb`
    pub background_color: String,
    pub environment: EnvironmentPreset,
    /// Viewer height in logical pixels.
    pub height: f32,
    pub tumor_offset: [f32; 3],
    pub initial_stage: usize,
    pub auto_rotate_speed: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model_paths: vec![PathBuf::from(DEFAULT_MODEL_PATH)],
            tumor_geometry: None,
            background_color: DEFAULT_BACKGROUND.into(),
            environment: EnvironmentPreset::default(),
            height: 600.0,
            tumor_offset: DEFAULT_TUMOR_OFFSET,
            initial_stage: 0,
            auto_rotate_speed: 1.0,
        }
    }
}

impl ViewerConfig {
    pub fn background_rgb(&self) -> Result<[u8; 3]> {
        parse_hex_color(&self.background_color)
    }

    pub fn lighting(&self) -> Lighting {
        Lighting::for_preset(self.environment)
    }

    pub fn tumor_offset(&self) -> Vec3 {
        Vec3::from(self.tumor_offset)
    }

    pub fn initial_stage(&self) -> Result<TumorStage> {
        TumorStage::new(self.initial_stage)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Artificial "analysis" delay before the report appears.
    pub delay_ms: u64,
    pub mock: MockReport,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
            mock: MockReport::default(),
        }
    }
}

impl ReportConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    pub accept: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            accept: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl UploadConfig {
    pub fn filter(&self) -> AcceptFilter {
        AcceptFilter::new(self.accept.iter().cloned())
    }
}

/// Parse `#rrggbb` (leading `#` optional).
pub fn parse_hex_color(s: &str) -> Result<[u8; 3]> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(VitalViewError::InvalidColor(s.to_string()));
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| VitalViewError::InvalidColor(s.to_string()))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}
