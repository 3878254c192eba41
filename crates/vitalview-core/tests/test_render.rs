mod common;

use approx::assert_relative_eq;
use glam::Vec3;

use common::{cube, triangle};
use vitalview_core::camera::OrbitCamera;
use vitalview_core::lighting::Lighting;
use vitalview_core::material::Material;
use vitalview_core::render::{project_point, project_scene, Viewport};
use vitalview_core::scene::Scene;

const VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

#[test]
fn test_target_projects_to_center() {
    let camera = OrbitCamera::default();
    let p = project_point(&camera, VIEWPORT, camera.target).unwrap();
    assert_relative_eq!(p.x, 400.0, epsilon = 1e-3);
    assert_relative_eq!(p.y, 300.0, epsilon = 1e-3);
}

#[test]
fn test_point_behind_camera_is_rejected() {
    let camera = OrbitCamera::default();
    let behind = camera.eye_position() + (camera.eye_position() - camera.target);
    assert!(project_point(&camera, VIEWPORT, behind).is_none());
}

#[test]
fn test_screen_y_points_down() {
    let camera = OrbitCamera::default();
    let above = project_point(&camera, VIEWPORT, Vec3::Y).unwrap();
    assert!(above.y < 300.0);
}

#[test]
fn test_triangles_sorted_far_to_near() {
    let mut scene = Scene::new(
        vec![triangle(-1.0, Material::default()), triangle(1.0, Material::default())],
        Vec3::ZERO,
    );
    scene.set_tumor(&triangle(0.0, Material::default()));

    let camera = OrbitCamera::default();
    let tris = project_scene(&scene, &camera, &Lighting::default(), VIEWPORT);
    assert_eq!(tris.len(), 3);
    assert!(tris.windows(2).all(|w| w[0].depth >= w[1].depth));
}

#[test]
fn test_back_faces_of_double_sided_meshes_are_drawn() {
    let mut camera = OrbitCamera::default();
    camera.orbit(std::f32::consts::PI, 0.0);
    let lighting = Lighting::default();

    let base = Scene::new(vec![triangle(0.0, Material::default())], Vec3::ZERO);
    assert_eq!(project_scene(&base, &camera, &lighting, VIEWPORT).len(), 1);

    let mut tumor = Scene::default();
    tumor.set_tumor(&triangle(0.0, Material::default()));
    assert_eq!(project_scene(&tumor, &camera, &lighting, VIEWPORT).len(), 1);
}

#[test]
fn test_translucent_base_alpha() {
    let scene = Scene::new(vec![triangle(0.0, Material::default())], Vec3::ZERO);
    let camera = OrbitCamera::default();
    let tris = project_scene(&scene, &camera, &Lighting::default(), VIEWPORT);
    assert_eq!(tris.len(), 1);
    assert_relative_eq!(tris[0].color[3], 0.3);
}

#[test]
fn test_tumor_glows_red() {
    let mut scene = Scene::default();
    scene.set_tumor(&cube(Vec3::ZERO, 1.0));
    let camera = OrbitCamera::default();
    let tris = project_scene(&scene, &camera, &Lighting::default(), VIEWPORT);
    assert!(!tris.is_empty());
    for t in &tris {
        assert_relative_eq!(t.color[3], 1.0);
        assert!(t.color[0] > t.color[1]);
        assert!(t.color[0] > t.color[2]);
    }
}
