use crate::consts::{
    BASE_OPACITY, TUMOR_COLOR, TUMOR_EMISSIVE, TUMOR_EMISSIVE_INTENSITY,
};

/// Surface appearance of a mesh. Colors are linear RGB in [0.0, 1.0].
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    pub transparent: bool,
    /// Whether the surface occludes what is drawn after it.
    pub depth_write: bool,
    /// Render back faces too.
    pub double_sided: bool,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: [0.8, 0.8, 0.8],
            opacity: 1.0,
            transparent: false,
            depth_write: true,
            double_sided: false,
            emissive: [0.0, 0.0, 0.0],
            emissive_intensity: 0.0,
        }
    }
}

impl Material {
    /// Material from a glTF PBR base-color factor (RGBA).
    pub fn from_base_color(rgba: [f32; 4]) -> Self {
        Self {
            color: [rgba[0], rgba[1], rgba[2]],
            opacity: rgba[3],
            transparent: rgba[3] < 1.0,
            ..Default::default()
        }
    }

    /// Force the see-through look used for the anatomical model so the
    /// tumor inside stays visible.
    pub fn make_translucent(&mut self) {
        self.transparent = true;
        self.opacity = BASE_OPACITY;
        self.depth_write = false;
        self.double_sided = true;
    }

    /// Solid, glowing red used for the tumor mesh.
    pub fn tumor() -> Self {
        Self {
            color: TUMOR_COLOR,
            opacity: 1.0,
            transparent: false,
            depth_write: true,
            double_sided: true,
            emissive: TUMOR_EMISSIVE,
            emissive_intensity: TUMOR_EMISSIVE_INTENSITY,
        }
    }

    pub fn is_emissive(&self) -> bool {
        self.emissive_intensity > 0.0 && self.emissive.iter().any(|&c| c > 0.0)
    }
}
