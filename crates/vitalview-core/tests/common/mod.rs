#![allow(dead_code)]

use std::path::{Path, PathBuf};

use glam::Vec3;
use vitalview_core::geometry::Mesh;
use vitalview_core::material::Material;

/// Axis-aligned cube centered at `center` with edge length `edge`.
pub fn cube(center: Vec3, edge: f32) -> Mesh {
    let h = edge * 0.5;
    let corners = [
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];
    let mut mesh = Mesh {
        name: "cube".into(),
        positions: corners.iter().map(|c| *c + center).collect(),
        normals: Vec::new(),
        indices: vec![
            0, 2, 1, 0, 3, 2, // back
            4, 5, 6, 4, 6, 7, // front
            0, 1, 5, 0, 5, 4, // bottom
            3, 7, 6, 3, 6, 2, // top
            0, 4, 7, 0, 7, 3, // left
            1, 2, 6, 1, 6, 5, // right
        ],
        material: Material::default(),
    };
    mesh.compute_normals();
    mesh
}

/// Single triangle in the z = `z` plane facing +Z.
pub fn triangle(z: f32, material: Material) -> Mesh {
    Mesh {
        name: "triangle".into(),
        positions: vec![
            Vec3::new(-1.0, -1.0, z),
            Vec3::new(1.0, -1.0, z),
            Vec3::new(0.0, 1.0, z),
        ],
        normals: vec![Vec3::Z; 3],
        indices: vec![0, 1, 2],
        material,
    }
}

/// Write a minimal GLB holding one triangle under a node translated by `translation`.
pub fn write_triangle_glb(dir: &Path, translation: [f32; 3]) -> PathBuf {
    write_indexed_triangle_glb(dir, translation, [0, 1, 2])
}

/// Same as [`write_triangle_glb`] with the three u16 indices supplied by the caller.
pub fn write_indexed_triangle_glb(
    dir: &Path,
    translation: [f32; 3],
    indices: [u16; 3],
) -> PathBuf {
    let mut bin = Vec::new();
    for v in [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
        for c in v {
            bin.extend_from_slice(&c.to_le_bytes());
        }
    }
    for i in indices {
        bin.extend_from_slice(&i.to_le_bytes());
    }
    let buffer_len = bin.len();
    while bin.len() % 4 != 0 {
        bin.push(0);
    }

    let json = format!(
        r#"{{"asset":{{"version":"2.0"}},"scene":0,"scenes":[{{"nodes":[0]}}],
"nodes":[{{"mesh":0,"translation":[{},{},{}]}}],
"meshes":[{{"name":"tri","primitives":[{{"attributes":{{"POSITION":0}},"indices":1}}]}}],
"buffers":[{{"byteLength":{buffer_len}}}],
"bufferViews":[{{"buffer":0,"byteOffset":0,"byteLength":36}},{{"buffer":0,"byteOffset":36,"byteLength":6}}],
"accessors":[{{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0,0,0],"max":[1,1,0]}},
{{"bufferView":1,"componentType":5123,"count":3,"type":"SCALAR"}}]}}"#,
        translation[0], translation[1], translation[2]
    );
    let mut json = json.into_bytes();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }

    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut glb = Vec::with_capacity(total);
    glb.extend_from_slice(b"glTF");
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&(total as u32).to_le_bytes());
    glb.extend_from_slice(&(json.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"JSON");
    glb.extend_from_slice(&json);
    glb.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    glb.extend_from_slice(b"BIN\0");
    glb.extend_from_slice(&bin);

    let path = dir.join("triangle.glb");
    std::fs::write(&path, glb).unwrap();
    path
}
