use std::path::PathBuf;
use std::time::Duration;

use vitalview_core::config::AppConfig;
use vitalview_core::geometry::Mesh;
use vitalview_core::tumor::TumorStages;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Load the anatomical model(s) and build the tumor stages.
    LoadScene {
        model_paths: Vec<PathBuf>,
        tumor_geometry: Option<PathBuf>,
    },

    /// Write the rendered report text to disk.
    SaveReport { path: PathBuf, text: String },

    ImportConfig { path: PathBuf },
    ExportConfig { path: PathBuf, config: Box<AppConfig> },
}

impl WorkerCommand {
    /// Short action name for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LoadScene { .. } => "Scene load",
            Self::SaveReport { .. } => "Report save",
            Self::ImportConfig { .. } => "Config import",
            Self::ExportConfig { .. } => "Config export",
        }
    }
}

/// Results sent back to the UI thread, by the worker or by dialog threads.
pub enum WorkerResult {
    /// Tumor stages generated from the configured geometry.
    TumorReady { stages: TumorStages },

    ModelLoaded {
        meshes: Vec<Mesh>,
        elapsed: Duration,
    },
    ModelFailed {
        message: String,
    },

    /// Per-file model loading progress.
    Progress {
        items_done: usize,
        items_total: usize,
    },

    /// A scan was picked in the file dialog. The file is never opened.
    ScanSelected {
        path: PathBuf,
    },
    ReportSaved {
        path: PathBuf,
    },
    ConfigImported {
        path: PathBuf,
        config: Box<AppConfig>,
    },
    ConfigExported {
        path: PathBuf,
    },
    Error {
        message: String,
    },
    Log {
        message: String,
    },
}
