//! Software projection of a scene into shaded screen-space triangles.
//!
//! Triangles come back sorted far-to-near so a 2D painter can draw them in
//! order; translucent surfaces then blend over whatever lies behind them.

use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};
use rayon::prelude::*;

use crate::camera::OrbitCamera;
use crate::consts::PARALLEL_TRIANGLE_THRESHOLD;
use crate::geometry::Mesh;
use crate::lighting::Lighting;
use crate::scene::Scene;

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    fn to_screen(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.width,
            (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}

/// A triangle ready to draw: screen positions (origin top-left, y down),
/// distance from the eye, and linear RGBA color.
#[derive(Clone, Copy, Debug)]
pub struct ProjectedTriangle {
    pub points: [Vec2; 3],
    pub depth: f32,
    pub color: [f32; 4],
}

struct Projection<'a> {
    view_proj: Mat4,
    eye: Vec3,
    viewport: Viewport,
    lighting: &'a Lighting,
}

/// Project a single world-space point. `None` when it lies behind the camera.
pub fn project_point(camera: &OrbitCamera, viewport: Viewport, point: Vec3) -> Option<Vec2> {
    let clip = camera.view_projection(viewport.aspect()) * point.extend(1.0);
    if clip.w <= camera.near {
        return None;
    }
    Some(viewport.to_screen(clip.xy() / clip.w))
}

/// Project and shade every triangle in `scene`, sorted far-to-near.
pub fn project_scene(
    scene: &Scene,
    camera: &OrbitCamera,
    lighting: &Lighting,
    viewport: Viewport,
) -> Vec<ProjectedTriangle> {
    let projection = Projection {
        view_proj: camera.view_projection(viewport.aspect()),
        eye: camera.eye_position(),
        viewport,
        lighting,
    };
    let near = camera.near;

    let mut triangles: Vec<ProjectedTriangle> = scene
        .meshes()
        .flat_map(|mesh| project_mesh(mesh, &projection, near))
        .collect();

    triangles.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    triangles
}

fn project_mesh(mesh: &Mesh, projection: &Projection<'_>, near: f32) -> Vec<ProjectedTriangle> {
    let project = |tri: &[u32]| project_triangle(mesh, tri, projection, near);
    if mesh.triangle_count() >= PARALLEL_TRIANGLE_THRESHOLD {
        mesh.indices
            .par_chunks_exact(3)
            .filter_map(project)
            .collect()
    } else {
        mesh.indices.chunks_exact(3).filter_map(project).collect()
    }
}

fn project_triangle(
    mesh: &Mesh,
    tri: &[u32],
    projection: &Projection<'_>,
    near: f32,
) -> Option<ProjectedTriangle> {
    let idx = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
    let world = [
        *mesh.positions.get(idx[0])?,
        *mesh.positions.get(idx[1])?,
        *mesh.positions.get(idx[2])?,
    ];

    let mut points = [Vec2::ZERO; 3];
    for (point, p) in points.iter_mut().zip(world) {
        let clip = projection.view_proj * p.extend(1.0);
        if clip.w <= near {
            return None;
        }
        *point = projection.viewport.to_screen(clip.xy() / clip.w);
    }

    let centroid = (world[0] + world[1] + world[2]) / 3.0;
    let to_eye = projection.eye - centroid;
    let face = (world[1] - world[0]).cross(world[2] - world[0]);

    let mut normal = idx
        .iter()
        .filter_map(|&i| mesh.normals.get(i))
        .fold(Vec3::ZERO, |acc, n| acc + *n)
        .try_normalize()
        .or_else(|| face.try_normalize())
        .unwrap_or(Vec3::Z);

    if face.dot(to_eye) < 0.0 {
        if !mesh.material.double_sided {
            return None;
        }
        normal = -normal;
    } else if normal.dot(to_eye) < 0.0 {
        normal = -normal;
    }

    Some(ProjectedTriangle {
        points,
        depth: to_eye.length(),
        color: projection.lighting.shade(&mesh.material, normal),
    })
}
