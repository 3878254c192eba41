/// Number of precomputed tumor stages.
pub const TUMOR_STAGE_COUNT: usize = 5;

/// Scale lost per tumor stage: stage `n` is scaled by `1 - n * TUMOR_STAGE_STEP`.
pub const TUMOR_STAGE_STEP: f32 = 0.2;

/// Minimum orbit distance as a fraction of the model's bounding-box diagonal.
pub const MIN_ZOOM_FACTOR: f32 = 0.1;

/// Maximum orbit distance as a multiple of the model's bounding-box diagonal.
pub const MAX_ZOOM_FACTOR: f32 = 2.0;

/// Distance multiplier applied by a single "zoom in" action.
pub const ZOOM_IN_STEP: f32 = 0.8;

/// Distance multiplier applied by a single "zoom out" action.
pub const ZOOM_OUT_STEP: f32 = 1.2;

/// Vertical field of view of the viewer camera, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;

/// Default placement of the tumor relative to the anatomical model.
pub const DEFAULT_TUMOR_OFFSET: [f32; 3] = [80.0, -30.0, -20.0];

/// Opacity forced onto every base-model material.
pub const BASE_OPACITY: f32 = 0.3;

/// Tumor surface color (#ff0000).
pub const TUMOR_COLOR: [f32; 3] = [1.0, 0.0, 0.0];

/// Tumor emissive color (#ff4444).
pub const TUMOR_EMISSIVE: [f32; 3] = [1.0, 68.0 / 255.0, 68.0 / 255.0];

/// Tumor emissive intensity.
pub const TUMOR_EMISSIVE_INTENSITY: f32 = 0.5;

/// Default artificial "analysis" delay for the mock report, in milliseconds.
pub const DEFAULT_ANALYSIS_DELAY_MS: u64 = 2000;

/// Default viewer background (#f5f5f5).
pub const DEFAULT_BACKGROUND: &str = "#f5f5f5";

/// Default anatomical model asset.
pub const DEFAULT_MODEL_PATH: &str = "./scene.gltf";

/// Extensions offered by the upload surface. Advisory only.
pub const ACCEPTED_EXTENSIONS: [&str; 6] = [".dcm", ".nii", ".nii.gz", ".png", ".jpg", ".jpeg"];

/// Minimum triangle count to project a scene with Rayon parallelism.
pub const PARALLEL_TRIANGLE_THRESHOLD: usize = 16_384;

/// Azimuth advanced per second of auto-rotation at speed 1.0, in radians.
/// Matches a full turn every 30 seconds.
pub const AUTO_ROTATE_RADIANS_PER_SEC: f32 = std::f32::consts::TAU / 30.0;
