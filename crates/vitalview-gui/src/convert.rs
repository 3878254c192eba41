use vitalview_core::render::ProjectedTriangle;

/// Convert an RGBA color in [0.0, 1.0] to an egui color.
pub fn rgba_to_color32(rgba: [f32; 4]) -> egui::Color32 {
    let [r, g, b, a] = rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

/// Build one egui mesh from projected triangles, keeping their draw order.
/// Screen positions are relative to `origin`.
pub fn triangles_to_mesh(triangles: &[ProjectedTriangle], origin: egui::Pos2) -> egui::Mesh {
    let mut mesh = egui::Mesh::default();
    mesh.reserve_triangles(triangles.len());
    mesh.reserve_vertices(triangles.len() * 3);

    for tri in triangles {
        let color = rgba_to_color32(tri.color);
        let base = mesh.vertices.len() as u32;
        for p in tri.points {
            mesh.colored_vertex(origin + egui::vec2(p.x, p.y), color);
        }
        mesh.add_triangle(base, base + 1, base + 2);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn opaque_color_round_trip() {
        assert_eq!(
            rgba_to_color32([1.0, 0.0, 0.5, 1.0]),
            egui::Color32::from_rgb(255, 0, 128)
        );
    }

    #[test]
    fn out_of_range_channels_clamp() {
        assert_eq!(
            rgba_to_color32([2.0, -1.0, 0.0, 1.0]),
            egui::Color32::from_rgb(255, 0, 0)
        );
    }

    #[test]
    fn mesh_keeps_order_and_offsets() {
        let tri = |depth: f32, x: f32| ProjectedTriangle {
            points: [Vec2::new(x, 0.0), Vec2::new(x + 1.0, 0.0), Vec2::new(x, 1.0)],
            depth,
            color: [1.0, 1.0, 1.0, 1.0],
        };
        let mesh = triangles_to_mesh(&[tri(5.0, 0.0), tri(2.0, 10.0)], egui::pos2(100.0, 50.0));

        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(mesh.vertices[0].pos, egui::pos2(100.0, 50.0));
        assert_eq!(mesh.vertices[3].pos, egui::pos2(110.0, 50.0));
    }
}
