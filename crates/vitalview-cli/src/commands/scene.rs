use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use vitalview_core::asset::{load_geometry, load_models, LoadProgress, NoProgress};
use vitalview_core::camera::OrbitCamera;
use vitalview_core::scene::Scene;
use vitalview_core::tumor::{default_geometry, TumorStage, TumorStages};

use super::load_config;
use crate::summary::{print_scene_summary, SceneSummary};

#[derive(Args)]
pub struct SceneArgs {
    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Model files to load instead of the configured ones
    #[arg(long, num_args = 1..)]
    pub model: Vec<PathBuf>,

    /// Tumor stage to place (0-4)
    #[arg(long)]
    pub stage: Option<usize>,
}

struct BarProgress(ProgressBar);

impl LoadProgress for BarProgress {
    fn begin(&self, total: usize) {
        self.0.set_length(total as u64);
        self.0.set_position(0);
    }

    fn advance(&self, done: usize) {
        self.0.set_position(done as u64);
    }
}

pub fn run(args: &SceneArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let viewer = &config.viewer;

    let model_paths = if args.model.is_empty() {
        viewer.model_paths.clone()
    } else {
        args.model.clone()
    };

    let base = if console::Term::stderr().is_term() {
        let pb = ProgressBar::new(model_paths.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg:16} [{bar:40}] {pos}/{len}")?
                .progress_chars("=> "),
        );
        pb.set_message("Loading models");
        let progress = BarProgress(pb);
        let base = load_models(&model_paths, &progress).context("Failed to load model")?;
        progress.0.finish_with_message("Models loaded");
        base
    } else {
        load_models(&model_paths, &NoProgress).context("Failed to load model")?
    };

    let tumor = match viewer.tumor_geometry {
        Some(ref path) => load_geometry(path)
            .with_context(|| format!("Failed to load tumor geometry {}", path.display()))?,
        None => default_geometry().context("Bundled tumor geometry is invalid")?,
    };
    let stages = TumorStages::generate(&tumor);
    let stage = match args.stage {
        Some(index) => TumorStage::new(index)?,
        None => viewer.initial_stage()?,
    };

    let mut scene = Scene::new(base, viewer.tumor_offset());
    scene.set_tumor(stages.get(stage));

    let mut camera = OrbitCamera::default();
    camera.fit(&scene.fit_bounds()?);

    print_scene_summary(&SceneSummary {
        model_paths: &model_paths,
        scene: &scene,
        camera: &camera,
        stage,
        environment: viewer.environment,
        background: viewer.background_rgb()?,
    });

    Ok(())
}
