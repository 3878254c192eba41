use std::fmt;
use std::str::FromStr;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::VitalViewError;
use crate::material::Material;

/// Named environment lighting presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentPreset {
    Apartment,
    City,
    Dawn,
    Forest,
    Lobby,
    Night,
    Park,
    #[default]
    Studio,
    Sunset,
    Warehouse,
}

impl EnvironmentPreset {
    pub const ALL: &[Self] = &[
        Self::Apartment,
        Self::City,
        Self::Dawn,
        Self::Forest,
        Self::Lobby,
        Self::Night,
        Self::Park,
        Self::Studio,
        Self::Sunset,
        Self::Warehouse,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Apartment => "apartment",
            Self::City => "city",
            Self::Dawn => "dawn",
            Self::Forest => "forest",
            Self::Lobby => "lobby",
            Self::Night => "night",
            Self::Park => "park",
            Self::Studio => "studio",
            Self::Sunset => "sunset",
            Self::Warehouse => "warehouse",
        }
    }

    /// Ambient tint and intensity multiplier.
    fn ambient(self) -> ([f32; 3], f32) {
        match self {
            Self::Apartment => ([1.0, 0.93, 0.85], 1.0),
            Self::City => ([0.9, 0.95, 1.0], 0.9),
            Self::Dawn => ([1.0, 0.8, 0.7], 0.8),
            Self::Forest => ([0.8, 1.0, 0.8], 0.8),
            Self::Lobby => ([1.0, 0.95, 0.9], 1.0),
            Self::Night => ([0.6, 0.7, 1.0], 0.5),
            Self::Park => ([0.9, 1.0, 0.9], 1.0),
            Self::Studio => ([1.0, 1.0, 1.0], 1.0),
            Self::Sunset => ([1.0, 0.75, 0.6], 0.8),
            Self::Warehouse => ([0.95, 0.95, 0.9], 0.9),
        }
    }
}

impl fmt::Display for EnvironmentPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnvironmentPreset {
    type Err = VitalViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VitalViewError::UnknownPreset(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Unit vector pointing from the scene toward the light.
    pub direction: Vec3,
    pub intensity: f32,
}

#[derive(Clone, Debug)]
pub struct Lighting {
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub lights: Vec<DirectionalLight>,
}

impl Default for Lighting {
    fn default() -> Self {
        Self::for_preset(EnvironmentPreset::default())
    }
}

impl Lighting {
    /// Ambient light at 0.8 plus a key light from (10, 10, 5) and a fill
    /// light from (-10, -10, -5), tinted by the preset.
    pub fn for_preset(preset: EnvironmentPreset) -> Self {
        let (tint, scale) = preset.ambient();
        Self {
            ambient_color: tint,
            ambient_intensity: 0.8 * scale,
            lights: vec![
                DirectionalLight {
                    direction: Vec3::new(10.0, 10.0, 5.0).normalize(),
                    intensity: 1.0,
                },
                DirectionalLight {
                    direction: Vec3::new(-10.0, -10.0, -5.0).normalize(),
                    intensity: 0.5,
                },
            ],
        }
    }

    /// Lambert shading plus emission. `normal` must already face the viewer
    /// for double-sided surfaces. Returns linear RGBA in [0.0, 1.0].
    pub fn shade(&self, material: &Material, normal: Vec3) -> [f32; 4] {
        let direct: f32 = self
            .lights
            .iter()
            .map(|l| normal.dot(l.direction).max(0.0) * l.intensity)
            .sum();

        let mut rgb = [0.0f32; 3];
        for (c, out) in rgb.iter_mut().enumerate() {
            let light = self.ambient_color[c] * self.ambient_intensity + direct;
            let lit = material.color[c] * light * 0.5;
            let glow = material.emissive[c] * material.emissive_intensity;
            *out = (lit + glow).clamp(0.0, 1.0);
        }

        let alpha = if material.transparent {
            material.opacity.clamp(0.0, 1.0)
        } else {
            1.0
        };
        [rgb[0], rgb[1], rgb[2], alpha]
    }
}
