use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use vitalview_core::asset::load_mesh_file;
use vitalview_core::camera::ZoomLimits;
use vitalview_core::geometry::Aabb;

#[derive(Args)]
pub struct InfoArgs {
    /// glTF/GLB model or JSON geometry file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let meshes = load_mesh_file(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    let Some(bounds) = meshes
        .iter()
        .filter_map(|m| m.bounds())
        .reduce(|a, b| a.union(&b))
    else {
        bail!("{} contains no geometry", args.file.display());
    };

    let vertices: usize = meshes.iter().map(|m| m.vertex_count()).sum();
    let triangles: usize = meshes.iter().map(|m| m.triangle_count()).sum();

    println!("File:        {}", args.file.display());
    println!("Meshes:      {}", meshes.len());
    println!("Vertices:    {}", vertices);
    println!("Triangles:   {}", triangles);
    print_bounds(&bounds);

    if meshes.len() > 1 {
        println!();
        println!("{:<24}  {:>10}  {:>10}", "Mesh", "Vertices", "Triangles");
        println!("{}", "-".repeat(48));
        for mesh in &meshes {
            println!(
                "{:<24}  {:>10}  {:>10}",
                mesh.name,
                mesh.vertex_count(),
                mesh.triangle_count()
            );
        }
    }

    Ok(())
}

fn print_bounds(bounds: &Aabb) {
    let size = bounds.size();
    let limits = ZoomLimits::from_size(bounds.diagonal());
    println!(
        "Bounds:      [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
        bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
    );
    println!("Extent:      {:.3} x {:.3} x {:.3}", size.x, size.y, size.z);
    println!("Diagonal:    {:.3}", bounds.diagonal());
    println!("Zoom range:  {:.3} .. {:.3}", limits.min, limits.max);
}
