//! Synthetic tumor geometry and its precomputed shrinkage stages.

use std::fmt;

use tracing::debug;

use crate::consts::{TUMOR_STAGE_COUNT, TUMOR_STAGE_STEP};
use crate::error::{Result, VitalViewError};
use crate::geometry::{BufferGeometryDesc, Mesh};
use crate::material::Material;

/// Geometry description of the mock tumor bundled with the crate.
pub const DEFAULT_TUMOR_JSON: &str = include_str!("../data/tumor.json");

/// Parse the bundled mock tumor.
pub fn default_geometry() -> Result<Mesh> {
    BufferGeometryDesc::from_json(DEFAULT_TUMOR_JSON)?.into_mesh("tumor")
}

/// Index into the sequence of shrinking tumor geometries (0 = full size).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TumorStage(usize);

impl TumorStage {
    pub const FIRST: Self = Self(0);
    pub const LAST: Self = Self(TUMOR_STAGE_COUNT - 1);

    pub fn new(index: usize) -> Result<Self> {
        if index < TUMOR_STAGE_COUNT {
            Ok(Self(index))
        } else {
            Err(VitalViewError::InvalidStage {
                index,
                count: TUMOR_STAGE_COUNT,
            })
        }
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Uniform scale applied to the base vertices: 1.0, 0.8, 0.6, 0.4, 0.2.
    pub fn factor(self) -> f32 {
        1.0 - TUMOR_STAGE_STEP * self.0 as f32
    }

    pub fn all() -> impl Iterator<Item = TumorStage> {
        (0..TUMOR_STAGE_COUNT).map(TumorStage)
    }
}

impl fmt::Display for TumorStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stage {} ({:.0}%)", self.0, self.factor() * 100.0)
    }
}

/// All tumor stages, generated once from a base geometry.
#[derive(Clone, Debug)]
pub struct TumorStages {
    stages: Vec<Mesh>,
}

impl TumorStages {
    /// Scale `base` by every stage factor. Each stage carries the tumor material.
    pub fn generate(base: &Mesh) -> Self {
        let stages = TumorStage::all()
            .map(|stage| {
                let mut mesh = base.scaled(stage.factor());
                mesh.name = format!("{} stage {}", base.name, stage.index());
                mesh.material = Material::tumor();
                mesh
            })
            .collect::<Vec<_>>();
        debug!(
            vertices = base.vertex_count(),
            stages = stages.len(),
            "Generated tumor stages"
        );
        Self { stages }
    }

    pub fn get(&self, stage: TumorStage) -> &Mesh {
        &self.stages[stage.index()]
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Bounding-box diagonal of every stage, in stage order.
    pub fn sizes(&self) -> Vec<f32> {
        self.stages
            .iter()
            .map(|m| m.bounds().map(|b| b.diagonal()).unwrap_or(0.0))
            .collect()
    }
}
