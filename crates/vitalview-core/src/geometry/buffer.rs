//! In-memory geometry description.
//!
//! The JSON layout is the common `BufferGeometry` interchange shape:
//!
//! ```json
//! {
//!   "metadata": { "version": 4.5, "type": "BufferGeometry", "generator": "..." },
//!   "data": {
//!     "attributes": {
//!       "position": { "itemSize": 3, "type": "Float32Array", "array": [...], "normalized": false },
//!       "normal":   { "itemSize": 3, "type": "Float32Array", "array": [...], "normalized": false }
//!     },
//!     "index": { "type": "Uint16Array", "array": [...] }
//!   }
//! }
//! ```
//!
//! Normals and index are optional. Missing normals are computed from the
//! triangles; a missing index means consecutive vertex triples.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VitalViewError};
use crate::geometry::mesh::Mesh;
use crate::material::Material;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BufferGeometryDesc {
    #[serde(default)]
    pub metadata: GeometryMetadata,
    pub data: GeometryData,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeometryMetadata {
    pub version: f32,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub generator: String,
}

impl Default for GeometryMetadata {
    fn default() -> Self {
        Self {
            version: 4.5,
            kind: "BufferGeometry".into(),
            generator: String::new(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeometryData {
    pub attributes: GeometryAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<IndexBuffer>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeometryAttributes {
    pub position: BufferAttribute,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<BufferAttribute>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferAttribute {
    pub item_size: usize,
    #[serde(rename = "type", default = "default_float_type")]
    pub array_type: String,
    pub array: Vec<f32>,
    #[serde(default)]
    pub normalized: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexBuffer {
    #[serde(rename = "type", default = "default_index_type")]
    pub array_type: String,
    pub array: Vec<u32>,
}

fn default_float_type() -> String {
    "Float32Array".into()
}

fn default_index_type() -> String {
    "Uint16Array".into()
}

impl BufferAttribute {
    fn vec3s(array: Vec<f32>) -> Self {
        Self {
            item_size: 3,
            array_type: default_float_type(),
            array,
            normalized: false,
        }
    }

    /// Group the flat array into `Vec3`s. Only `itemSize == 3` is supported.
    fn to_vec3s(&self, name: &str) -> Result<Vec<Vec3>> {
        if self.item_size != 3 {
            return Err(VitalViewError::InvalidGeometry(format!(
                "{name} attribute has itemSize {}, expected 3",
                self.item_size
            )));
        }
        if self.array.len() % 3 != 0 {
            return Err(VitalViewError::InvalidGeometry(format!(
                "{name} array length {} is not a multiple of 3",
                self.array.len()
            )));
        }
        Ok(self
            .array
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
            .collect())
    }
}

impl BufferGeometryDesc {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Describe an existing mesh. Material data is not part of the format.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let flatten = |v: &[Vec3]| v.iter().flat_map(|p| p.to_array()).collect::<Vec<f32>>();
        let index_type = if mesh.positions.len() > usize::from(u16::MAX) {
            "Uint32Array"
        } else {
            "Uint16Array"
        };
        Self {
            metadata: GeometryMetadata {
                generator: format!("vitalview {}", env!("CARGO_PKG_VERSION")),
                ..Default::default()
            },
            data: GeometryData {
                attributes: GeometryAttributes {
                    position: BufferAttribute::vec3s(flatten(mesh.positions.as_slice())),
                    normal: (mesh.normals.len() == mesh.positions.len())
                        .then(|| BufferAttribute::vec3s(flatten(mesh.normals.as_slice()))),
                },
                index: Some(IndexBuffer {
                    array_type: index_type.into(),
                    array: mesh.indices.clone(),
                }),
            },
        }
    }

    /// Number of vertices described by the position attribute.
    pub fn vertex_count(&self) -> usize {
        self.data.attributes.position.array.len() / 3
    }

    /// Validate the description and build a mesh with a default material.
    pub fn into_mesh(self, name: &str) -> Result<Mesh> {
        let positions = self.data.attributes.position.to_vec3s("position")?;
        if positions.is_empty() {
            return Err(VitalViewError::InvalidGeometry(
                "position attribute is empty".into(),
            ));
        }

        let normals = match self.data.attributes.normal {
            Some(ref attr) => {
                let normals = attr.to_vec3s("normal")?;
                if normals.len() != positions.len() {
                    return Err(VitalViewError::InvalidGeometry(format!(
                        "{} normals for {} positions",
                        normals.len(),
                        positions.len()
                    )));
                }
                Some(normals)
            }
            None => None,
        };

        let indices = match self.data.index {
            Some(index) => index.array,
            None => (0..positions.len() as u32).collect(),
        };

        let mut mesh = Mesh {
            name: name.to_string(),
            positions,
            normals: normals.unwrap_or_default(),
            indices,
            material: Material::default(),
        };
        mesh.check_indices()?;
        if mesh.normals.is_empty() {
            mesh.compute_normals();
        }
        Ok(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_json(index: &str) -> String {
        format!(
            r#"{{
                "data": {{
                    "attributes": {{
                        "position": {{ "itemSize": 3, "array": [0,0,0, 1,0,0, 0,1,0] }}
                    }},
                    "index": {{ "array": {index} }}
                }}
            }}"#
        )
    }

    #[test]
    fn test_missing_metadata_defaults() {
        let desc = BufferGeometryDesc::from_json(&triangle_json("[0,1,2]")).unwrap();
        assert_eq!(desc.metadata.kind, "BufferGeometry");
        assert_eq!(desc.vertex_count(), 3);
    }

    #[test]
    fn test_missing_normals_are_computed() {
        let mesh = BufferGeometryDesc::from_json(&triangle_json("[0,1,2]"))
            .unwrap()
            .into_mesh("tri")
            .unwrap();
        assert_eq!(mesh.normals.len(), 3);
        for n in &mesh.normals {
            assert!((n.z - 1.0).abs() < 1e-6, "normal {n:?}");
        }
    }

    #[test]
    fn test_index_out_of_range_rejected() {
        let err = BufferGeometryDesc::from_json(&triangle_json("[0,1,3]"))
            .unwrap()
            .into_mesh("tri")
            .unwrap_err();
        assert!(matches!(err, VitalViewError::InvalidGeometry(_)), "got {err}");
    }

    #[test]
    fn test_ragged_index_rejected() {
        let err = BufferGeometryDesc::from_json(&triangle_json("[0,1]"))
            .unwrap()
            .into_mesh("tri")
            .unwrap_err();
        assert!(err.to_string().contains("multiple of 3"), "got {err}");
    }

    #[test]
    fn test_serialized_keys_match_input_format() {
        let desc = BufferGeometryDesc::from_json(&triangle_json("[0,1,2]")).unwrap();
        let json = desc.to_json().unwrap();
        assert!(json.contains("\"itemSize\""), "got {json}");
        assert!(json.contains("\"BufferGeometry\""), "got {json}");
        let again = BufferGeometryDesc::from_json(&json).unwrap();
        assert_eq!(again.vertex_count(), 3);
    }

    #[test]
    fn test_from_mesh_describes_the_same_geometry() {
        let mesh = BufferGeometryDesc::from_json(&triangle_json("[0,1,2]"))
            .unwrap()
            .into_mesh("tri")
            .unwrap();
        let desc = BufferGeometryDesc::from_mesh(&mesh.scaled(2.0));
        let json = desc.to_json().unwrap();

        let again = BufferGeometryDesc::from_json(&json)
            .unwrap()
            .into_mesh("tri")
            .unwrap();
        assert_eq!(again.indices, mesh.indices);
        assert_eq!(again.positions.len(), 3);
        for (a, b) in again.positions.iter().zip(&mesh.positions) {
            assert!((*a - *b * 2.0).length() < 1e-6);
        }
        assert_eq!(again.normals.len(), 3);
    }
}
