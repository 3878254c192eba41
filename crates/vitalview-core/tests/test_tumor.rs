use approx::assert_relative_eq;

use vitalview_core::error::VitalViewError;
use vitalview_core::material::Material;
use vitalview_core::tumor::{default_geometry, TumorStage, TumorStages};

#[test]
fn test_default_geometry_shape() {
    let mesh = default_geometry().unwrap();
    assert_eq!(mesh.vertex_count(), 21);
    assert_eq!(mesh.triangle_count(), 43);
    assert_eq!(mesh.normals.len(), 21);
}

#[test]
fn test_stage_factors() {
    let factors: Vec<f32> = TumorStage::all().map(|s| s.factor()).collect();
    let expected = [1.0, 0.8, 0.6, 0.4, 0.2];
    assert_eq!(factors.len(), expected.len());
    for (got, want) in factors.iter().zip(expected) {
        assert_relative_eq!(*got, want, epsilon = 1e-6);
    }
}

#[test]
fn test_every_stage_scales_every_vertex() {
    let base = default_geometry().unwrap();
    let stages = TumorStages::generate(&base);
    assert_eq!(stages.len(), 5);

    for stage in TumorStage::all() {
        let mesh = stages.get(stage);
        let factor = 1.0 - 0.2 * stage.index() as f32;
        assert_eq!(mesh.positions.len(), base.positions.len());
        for (scaled, original) in mesh.positions.iter().zip(&base.positions) {
            assert_relative_eq!(scaled.x, original.x * factor, epsilon = 1e-5);
            assert_relative_eq!(scaled.y, original.y * factor, epsilon = 1e-5);
            assert_relative_eq!(scaled.z, original.z * factor, epsilon = 1e-5);
        }
        assert_eq!(mesh.indices, base.indices);
        assert_eq!(mesh.normals, base.normals);
    }
}

#[test]
fn test_stages_carry_tumor_material() {
    let stages = TumorStages::generate(&default_geometry().unwrap());
    for stage in TumorStage::all() {
        assert_eq!(stages.get(stage).material, Material::tumor());
    }
}

#[test]
fn test_stage_sizes_shrink() {
    let stages = TumorStages::generate(&default_geometry().unwrap());
    let sizes = stages.sizes();
    assert!(sizes.windows(2).all(|w| w[1] < w[0]), "sizes {sizes:?}");
    assert_relative_eq!(sizes[4], sizes[0] * 0.2, epsilon = 1e-4);
}

#[test]
fn test_stage_out_of_range() {
    assert!(TumorStage::new(4).is_ok());
    let err = TumorStage::new(5).unwrap_err();
    assert!(matches!(err, VitalViewError::InvalidStage { index: 5, count: 5 }));
}

#[test]
fn test_stage_display() {
    let s = TumorStage::new(2).unwrap().to_string();
    assert!(s.contains("Stage 2"), "got: {s}");
    assert!(s.contains("60%"), "got: {s}");
}
