use glam::{Mat3, Mat4, Vec3};

use crate::error::{Result, VitalViewError};
use crate::geometry::bounds::Aabb;
use crate::material::Material;

/// Indexed triangle mesh with per-vertex normals.
#[derive(Clone, Debug)]
pub struct Mesh {
    pub name: String,
    pub positions: Vec<Vec3>,
    /// One normal per position.
    pub normals: Vec<Vec3>,
    /// Triangle list, three indices per face.
    pub indices: Vec<u32>,
    pub material: Material,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.positions.iter().copied())
    }

    /// Reject index lists that are not whole triangles or that point past
    /// the last vertex.
    pub fn check_indices(&self) -> Result<()> {
        if self.indices.len() % 3 != 0 {
            return Err(VitalViewError::InvalidGeometry(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }
        if let Some(&bad) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= self.positions.len())
        {
            return Err(VitalViewError::InvalidGeometry(format!(
                "index {bad} out of range for {} vertices",
                self.positions.len()
            )));
        }
        Ok(())
    }

    /// Triangles as vertex index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> + '_ {
        self.indices
            .chunks_exact(3)
            .map(|t| [t[0] as usize, t[1] as usize, t[2] as usize])
    }

    /// Copy with every vertex coordinate multiplied by `factor`.
    /// Normals are unchanged by a uniform scale.
    pub fn scaled(&self, factor: f32) -> Mesh {
        Mesh {
            positions: self.positions.iter().map(|p| *p * factor).collect(),
            ..self.clone()
        }
    }

    pub fn translated(&self, offset: Vec3) -> Mesh {
        Mesh {
            positions: self.positions.iter().map(|p| *p + offset).collect(),
            ..self.clone()
        }
    }

    /// Apply an affine transform to positions, and its normal matrix to normals.
    pub fn transform(&mut self, matrix: Mat4) {
        let normal_matrix = Mat3::from_mat4(matrix).inverse().transpose();
        for p in &mut self.positions {
            *p = matrix.transform_point3(*p);
        }
        for n in &mut self.normals {
            *n = (normal_matrix * *n).normalize_or_zero();
        }
    }

    /// Recompute smooth vertex normals by accumulating area-weighted face normals.
    pub fn compute_normals(&mut self) {
        let count = self.positions.len();
        let mut normals = vec![Vec3::ZERO; count];
        for [a, b, c] in self.triangles() {
            if a >= count || b >= count || c >= count {
                continue;
            }
            let face = (self.positions[b] - self.positions[a])
                .cross(self.positions[c] - self.positions[a]);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }
        self.normals = normals.into_iter().map(|n| n.normalize_or_zero()).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        Mesh {
            name: "quad".into(),
            positions: vec![
                Vec3::new(-1.0, -1.0, 0.0),
                Vec3::new(1.0, -1.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(-1.0, 1.0, 0.0),
            ],
            normals: vec![Vec3::Z; 4],
            indices: vec![0, 1, 2, 0, 2, 3],
            material: Material::default(),
        }
    }

    #[test]
    fn test_transform_translates_positions_keeps_normals() {
        let mut mesh = quad();
        mesh.transform(Mat4::from_translation(Vec3::new(0.0, 0.0, 5.0)));
        assert!(mesh.positions.iter().all(|p| (p.z - 5.0).abs() < 1e-6));
        assert!(mesh.normals.iter().all(|n| (*n - Vec3::Z).length() < 1e-6));
    }

    #[test]
    fn test_compute_normals_flat_quad() {
        let mut mesh = quad();
        mesh.normals.clear();
        mesh.compute_normals();
        assert_eq!(mesh.normals.len(), 4);
        assert!(mesh.normals.iter().all(|n| (*n - Vec3::Z).length() < 1e-6));
    }

    #[test]
    fn test_compute_normals_skips_out_of_range_triangles() {
        let mut mesh = quad();
        mesh.indices.extend_from_slice(&[0, 2, 9]);
        mesh.normals.clear();
        mesh.compute_normals();
        assert_eq!(mesh.normals.len(), 4);
        assert!(mesh.normals.iter().all(|n| (*n - Vec3::Z).length() < 1e-6));
    }

    #[test]
    fn test_check_indices() {
        let mut mesh = quad();
        assert!(mesh.check_indices().is_ok());

        mesh.indices.extend_from_slice(&[0, 1, 4]);
        assert!(matches!(
            mesh.check_indices(),
            Err(VitalViewError::InvalidGeometry(_))
        ));

        mesh.indices.truncate(7);
        assert!(mesh.check_indices().is_err());
    }
}
