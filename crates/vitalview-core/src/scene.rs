use glam::Vec3;
use tracing::debug;

use crate::error::{Result, VitalViewError};
use crate::geometry::{Aabb, Mesh};
use crate::material::Material;

/// The anatomical model plus at most one tumor mesh.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    base: Vec<Mesh>,
    tumor: Option<Mesh>,
    tumor_offset: Vec3,
}

impl Scene {
    /// Build a scene around the anatomical model. Base materials are made
    /// translucent straight away.
    pub fn new(base: Vec<Mesh>, tumor_offset: Vec3) -> Self {
        let mut scene = Self {
            base,
            tumor: None,
            tumor_offset,
        };
        scene.force_translucent();
        scene
    }

    pub fn force_translucent(&mut self) {
        for mesh in &mut self.base {
            mesh.material.make_translucent();
        }
    }

    /// Place `mesh` as the tumor, replacing any previous one.
    pub fn set_tumor(&mut self, mesh: &Mesh) {
        let mut tumor = mesh.translated(self.tumor_offset);
        tumor.material = Material::tumor();
        debug!(name = %tumor.name, "Tumor mesh replaced");
        self.tumor = Some(tumor);
    }

    pub fn clear_tumor(&mut self) {
        self.tumor = None;
    }

    pub fn tumor(&self) -> Option<&Mesh> {
        self.tumor.as_ref()
    }

    pub fn base(&self) -> &[Mesh] {
        &self.base
    }

    pub fn tumor_offset(&self) -> Vec3 {
        self.tumor_offset
    }

    /// Base meshes first, then the tumor.
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.base.iter().chain(self.tumor.iter())
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes().map(Mesh::triangle_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes().all(|m| m.positions.is_empty())
    }

    pub fn base_bounds(&self) -> Option<Aabb> {
        union_bounds(self.base.iter())
    }

    pub fn bounds(&self) -> Option<Aabb> {
        union_bounds(self.meshes())
    }

    /// Bounds the camera fits to: the anatomical model, or the tumor alone
    /// when no model is loaded.
    pub fn fit_bounds(&self) -> Result<Aabb> {
        self.base_bounds()
            .or_else(|| self.bounds())
            .ok_or(VitalViewError::EmptyScene)
    }

    /// Diagonal of [`Scene::fit_bounds`].
    pub fn fit_size(&self) -> Result<f32> {
        Ok(self.fit_bounds()?.diagonal())
    }
}

fn union_bounds<'a>(meshes: impl Iterator<Item = &'a Mesh>) -> Option<Aabb> {
    meshes
        .filter_map(Mesh::bounds)
        .reduce(|acc, b| acc.union(&b))
}
