use tracing::{debug, info, warn};
use vitalview_core::camera::OrbitCamera;
use vitalview_core::config::{parse_hex_color, ViewerConfig};
use vitalview_core::consts::DEFAULT_BACKGROUND;
use vitalview_core::geometry::Mesh;
use vitalview_core::lighting::{EnvironmentPreset, Lighting};
use vitalview_core::scene::Scene;
use vitalview_core::tumor::{TumorStage, TumorStages};

/// Asset loading status shown in place of the model.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading {
        items_done: usize,
        items_total: usize,
    },
    Ready,
    Failed(String),
}

/// 3D viewer state: scene contents, camera and display settings.
pub struct ViewerState {
    pub camera: OrbitCamera,
    pub scene: Scene,
    pub stages: Option<TumorStages>,
    pub stage: TumorStage,
    /// Tumor mesh drawn in the scene.
    pub show_tumor: bool,
    pub status: LoadStatus,
    pub environment: EnvironmentPreset,
    pub lighting: Lighting,
    pub background: egui::Color32,
    pub height: f32,
    /// Set once the camera has been fitted to real geometry.
    fitted: bool,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(&ViewerConfig::default())
    }
}

impl ViewerState {
    pub fn new(config: &ViewerConfig) -> Self {
        let [r, g, b] = config.background_rgb().unwrap_or_else(|e| {
            warn!("{e}, using {DEFAULT_BACKGROUND}");
            parse_hex_color(DEFAULT_BACKGROUND).unwrap_or([245, 245, 245])
        });
        let stage = config.initial_stage().unwrap_or_else(|e| {
            warn!("{e}, starting at the first stage");
            TumorStage::FIRST
        });

        let mut camera = OrbitCamera::default();
        camera.auto_rotate_speed = config.auto_rotate_speed;

        Self {
            camera,
            scene: Scene::new(Vec::new(), config.tumor_offset()),
            stages: None,
            stage,
            show_tumor: true,
            status: LoadStatus::Idle,
            environment: config.environment,
            lighting: config.lighting(),
            background: egui::Color32::from_rgb(r, g, b),
            height: config.height,
            fitted: false,
        }
    }

    pub fn begin_loading(&mut self) {
        self.status = LoadStatus::Loading {
            items_done: 0,
            items_total: 0,
        };
    }

    pub fn set_progress(&mut self, items_done: usize, items_total: usize) {
        if matches!(self.status, LoadStatus::Loading { .. }) {
            self.status = LoadStatus::Loading {
                items_done,
                items_total,
            };
        }
    }

    /// Percentage for the "N% loaded" indicator.
    pub fn percent_loaded(&self) -> f32 {
        match self.status {
            LoadStatus::Loading {
                items_done,
                items_total,
            } if items_total > 0 => items_done as f32 / items_total as f32 * 100.0,
            LoadStatus::Ready => 100.0,
            _ => 0.0,
        }
    }

    /// Install the loaded model. Base materials become translucent and the
    /// camera is refitted to the model bounds.
    pub fn set_model(&mut self, meshes: Vec<Mesh>) {
        self.scene = Scene::new(meshes, self.scene.tumor_offset());
        self.apply_stage();
        self.status = LoadStatus::Ready;
        self.fitted = false;
        self.fit_camera();
    }

    pub fn fail(&mut self, message: String) {
        self.status = LoadStatus::Failed(message);
    }

    pub fn set_stages(&mut self, stages: TumorStages) {
        self.stages = Some(stages);
        self.apply_stage();
        if !self.fitted {
            self.fit_camera();
        }
    }

    /// Swap the tumor mesh for the given stage's geometry.
    pub fn set_stage(&mut self, stage: TumorStage) {
        if stage != self.stage {
            debug!(stage = stage.index(), "Tumor stage changed");
        }
        self.stage = stage;
        self.apply_stage();
    }

    pub fn set_tumor_visible(&mut self, visible: bool) {
        self.show_tumor = visible;
        self.apply_stage();
    }

    pub fn set_environment(&mut self, environment: EnvironmentPreset) {
        self.environment = environment;
        self.lighting = Lighting::for_preset(environment);
    }

    pub fn is_ready(&self) -> bool {
        self.status == LoadStatus::Ready
    }

    fn apply_stage(&mut self) {
        match self.stages {
            Some(ref stages) if self.show_tumor => self.scene.set_tumor(stages.get(self.stage)),
            _ => self.scene.clear_tumor(),
        }
    }

    /// Fit to the model, or to the tumor alone when no model is loaded.
    /// Keeps the auto-rotate setting.
    fn fit_camera(&mut self) {
        let Ok(bounds) = self.scene.fit_bounds() else {
            return;
        };
        self.camera.fit(&bounds);
        self.fitted = !self.scene.base().is_empty();
        info!(
            size = bounds.diagonal(),
            min = self.camera.limits().min,
            max = self.camera.limits().max,
            "Viewer fitted"
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;
    use vitalview_core::material::Material;
    use vitalview_core::tumor::default_geometry;

    use super::*;

    fn box_mesh(half: f32) -> Mesh {
        let mut positions = Vec::new();
        for x in [-half, half] {
            for y in [-half, half] {
                for z in [-half, half] {
                    positions.push(Vec3::new(x, y, z));
                }
            }
        }
        Mesh {
            name: "box".into(),
            positions,
            normals: vec![Vec3::Z; 8],
            indices: vec![0, 1, 2, 1, 3, 2, 4, 6, 5, 5, 6, 7],
            material: Material::default(),
        }
    }

    fn stages() -> TumorStages {
        TumorStages::generate(&default_geometry().unwrap())
    }

    #[test]
    fn stage_change_replaces_tumor() {
        let mut viewer = ViewerState::default();
        viewer.set_stages(stages());
        let full = viewer.scene.tumor().unwrap().bounds().unwrap().diagonal();

        viewer.set_stage(TumorStage::LAST);
        assert_eq!(viewer.scene.meshes().count(), 1);
        let small = viewer.scene.tumor().unwrap().bounds().unwrap().diagonal();
        assert!((small - full * 0.2).abs() < 1e-3);
    }

    #[test]
    fn hidden_tumor_stays_hidden_across_stage_changes() {
        let mut viewer = ViewerState::default();
        viewer.set_stages(stages());
        viewer.set_tumor_visible(false);
        assert!(viewer.scene.tumor().is_none());

        viewer.set_stage(TumorStage::LAST);
        assert!(viewer.scene.tumor().is_none());

        viewer.set_tumor_visible(true);
        let tumor = viewer.scene.tumor().unwrap();
        let expected = stages().get(TumorStage::LAST).bounds().unwrap().diagonal();
        assert!((tumor.bounds().unwrap().diagonal() - expected).abs() < 1e-3);
    }

    #[test]
    fn model_load_fits_camera_to_model() {
        let mut viewer = ViewerState::default();
        viewer.begin_loading();
        viewer.set_stages(stages());
        viewer.set_model(vec![box_mesh(10.0)]);

        let diagonal = (20.0f32 * 20.0 * 3.0).sqrt();
        let limits = viewer.camera.limits();
        assert!((limits.min - diagonal * 0.1).abs() < 1e-3);
        assert!((limits.max - diagonal * 2.0).abs() < 1e-3);
        assert!(viewer.is_ready());
        assert!(viewer.scene.tumor().is_some());
        assert!(viewer.scene.base()[0].material.transparent);
    }

    #[test]
    fn stages_after_model_keep_model_fit() {
        let mut viewer = ViewerState::default();
        viewer.set_model(vec![box_mesh(10.0)]);
        let limits = viewer.camera.limits();
        viewer.set_stages(stages());
        assert_eq!(viewer.camera.limits(), limits);
    }

    #[test]
    fn fit_keeps_auto_rotate() {
        let mut viewer = ViewerState::default();
        viewer.camera.toggle_auto_rotate();
        viewer.set_model(vec![box_mesh(1.0)]);
        assert!(viewer.camera.auto_rotate);
    }

    #[test]
    fn progress_percentage() {
        let mut viewer = ViewerState::default();
        assert_eq!(viewer.percent_loaded(), 0.0);
        viewer.begin_loading();
        viewer.set_progress(1, 4);
        assert_eq!(viewer.percent_loaded(), 25.0);
        viewer.set_model(Vec::new());
        assert_eq!(viewer.percent_loaded(), 100.0);
    }

    #[test]
    fn failure_replaces_loading() {
        let mut viewer = ViewerState::default();
        viewer.begin_loading();
        viewer.fail("scene.gltf: not found".into());
        assert_eq!(viewer.status, LoadStatus::Failed("scene.gltf: not found".into()));
        viewer.set_progress(1, 1);
        assert!(matches!(viewer.status, LoadStatus::Failed(_)));
    }

    #[test]
    fn bad_background_falls_back() {
        let config = ViewerConfig {
            background_color: "teal".into(),
            ..Default::default()
        };
        let viewer = ViewerState::new(&config);
        assert_eq!(viewer.background, egui::Color32::from_rgb(245, 245, 245));
    }
}
