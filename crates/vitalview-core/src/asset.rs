//! Mesh asset loading: glTF/GLB models and JSON geometry descriptions.

use std::path::{Path, PathBuf};

use glam::{Mat4, Vec3};
use tracing::{info, warn};

use crate::error::Result;
use crate::geometry::{BufferGeometryDesc, Mesh};
use crate::material::Material;

/// Receives progress while a batch of assets loads.
pub trait LoadProgress {
    fn begin(&self, total: usize);
    fn advance(&self, done: usize);
}

/// Progress sink that discards updates.
pub struct NoProgress;

impl LoadProgress for NoProgress {
    fn begin(&self, _total: usize) {}
    fn advance(&self, _done: usize) {}
}

/// Load every mesh primitive of a glTF or GLB file, with node transforms
/// baked into the vertices.
pub fn load_model(path: &Path) -> Result<Vec<Mesh>> {
    let (document, buffers, _images) = gltf::import(path)?;

    let mut meshes = Vec::new();
    match document.default_scene().or_else(|| document.scenes().next()) {
        Some(scene) => {
            for node in scene.nodes() {
                collect_node(&node, Mat4::IDENTITY, &buffers, &mut meshes)?;
            }
        }
        None => {
            for mesh in document.meshes() {
                collect_mesh(&mesh, Mat4::IDENTITY, &buffers, &mut meshes)?;
            }
        }
    }

    let triangles: usize = meshes.iter().map(Mesh::triangle_count).sum();
    info!(
        path = %path.display(),
        meshes = meshes.len(),
        triangles,
        "Loaded model"
    );
    Ok(meshes)
}

/// Load several model files into one list of meshes, reporting per-file progress.
pub fn load_models(paths: &[PathBuf], progress: &dyn LoadProgress) -> Result<Vec<Mesh>> {
    progress.begin(paths.len());
    let mut meshes = Vec::new();
    for (i, path) in paths.iter().enumerate() {
        meshes.extend(load_model(path)?);
        progress.advance(i + 1);
    }
    Ok(meshes)
}

/// Load a JSON geometry description from disk.
pub fn load_geometry(path: &Path) -> Result<Mesh> {
    let json = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "geometry".into());
    BufferGeometryDesc::from_json(&json)?.into_mesh(&name)
}

/// Load any supported mesh file: `.json` as a geometry description,
/// anything else as glTF.
pub fn load_mesh_file(path: &Path) -> Result<Vec<Mesh>> {
    if is_geometry_json(path) {
        Ok(vec![load_geometry(path)?])
    } else {
        load_model(path)
    }
}

fn is_geometry_json(path: &Path) -> bool {
    path.extension()
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

fn collect_node(
    node: &gltf::Node<'_>,
    parent: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<Mesh>,
) -> Result<()> {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        collect_mesh(&mesh, world, buffers, out)?;
    }
    for child in node.children() {
        collect_node(&child, world, buffers, out)?;
    }
    Ok(())
}

fn collect_mesh(
    mesh: &gltf::Mesh<'_>,
    world: Mat4,
    buffers: &[gltf::buffer::Data],
    out: &mut Vec<Mesh>,
) -> Result<()> {
    let name = mesh.name().unwrap_or("mesh");
    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            warn!(mesh = name, mode = ?primitive.mode(), "Skipping non-triangle primitive");
            continue;
        }

        let reader = primitive.reader(|buffer| Some(&*buffers[buffer.index()]));

        let positions: Vec<Vec3> = reader
            .read_positions()
            .map(|iter| iter.map(Vec3::from).collect())
            .unwrap_or_default();
        if positions.is_empty() {
            continue;
        }
        let vertex_count = positions.len();

        let normals: Vec<Vec3> = reader
            .read_normals()
            .map(|iter| iter.map(Vec3::from).collect())
            .unwrap_or_default();

        let indices: Vec<u32> = reader
            .read_indices()
            .map(|iter| iter.into_u32().collect())
            .unwrap_or_else(|| (0..vertex_count as u32).collect());

        let base_color = primitive
            .material()
            .pbr_metallic_roughness()
            .base_color_factor();

        let mut out_mesh = Mesh {
            name: name.to_string(),
            positions,
            normals,
            indices,
            material: Material::from_base_color(base_color),
        };
        out_mesh.check_indices()?;
        if out_mesh.normals.len() != vertex_count {
            out_mesh.compute_normals();
        }
        out_mesh.transform(world);
        out.push(out_mesh);
    }
    Ok(())
}
