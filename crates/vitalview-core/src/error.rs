use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitalViewError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("glTF error: {0}")]
    Gltf(#[from] gltf::Error),

    #[error("Geometry JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Tumor stage {index} out of range (stages: {count})")]
    InvalidStage { index: usize, count: usize },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown environment preset: {0}")]
    UnknownPreset(String),

    #[error("Scene has no geometry to fit")]
    EmptyScene,
}

pub type Result<T> = std::result::Result<T, VitalViewError>;
