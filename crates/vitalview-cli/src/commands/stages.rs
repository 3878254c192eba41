use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use vitalview_core::asset::load_geometry;
use vitalview_core::geometry::BufferGeometryDesc;
use vitalview_core::tumor::{default_geometry, TumorStage, TumorStages};

#[derive(Args)]
pub struct StagesArgs {
    /// JSON geometry to use instead of the bundled tumor
    #[arg(long)]
    pub geometry: Option<PathBuf>,

    /// Write each stage's scaled geometry as JSON into this directory
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn run(args: &StagesArgs) -> Result<()> {
    let base = match args.geometry {
        Some(ref path) => load_geometry(path)
            .with_context(|| format!("Failed to load geometry {}", path.display()))?,
        None => default_geometry().context("Bundled tumor geometry is invalid")?,
    };
    let stages = TumorStages::generate(&base);
    let sizes = stages.sizes();

    println!(
        "Tumor '{}': {} vertices, {} triangles",
        base.name,
        base.vertex_count(),
        base.triangle_count()
    );
    println!();
    println!("{:>5}  {:>7}  {:>10}", "Stage", "Scale", "Size");
    println!("{}", "-".repeat(26));
    for (stage, size) in TumorStage::all().zip(sizes) {
        println!(
            "{:>5}  {:>6.0}%  {:>10.3}",
            stage.index(),
            stage.factor() * 100.0,
            size
        );
    }

    if let Some(ref dir) = args.export {
        export_stages(&stages, dir)?;
    }

    Ok(())
}

fn export_stages(stages: &TumorStages, dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    for stage in TumorStage::all() {
        let path = dir.join(format!("tumor_stage_{}.json", stage.index()));
        let json = BufferGeometryDesc::from_mesh(stages.get(stage)).to_json()?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "Exported stage geometry");
    }
    println!();
    println!("Exported {} stage(s) to {}", stages.len(), dir.display());
    Ok(())
}
