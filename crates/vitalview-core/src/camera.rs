//! Orbit camera with zoom clamped to the loaded model's size.
//!
//! Uses spherical coordinates (radius, theta, phi) around a target point.
//! "Zoom" is the orbit radius: the camera's distance from the target.

use glam::{Mat4, Vec2, Vec3};
use tracing::debug;

use crate::consts::{
    AUTO_ROTATE_RADIANS_PER_SEC, CAMERA_FOV_DEGREES, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR,
    ZOOM_IN_STEP, ZOOM_OUT_STEP,
};
use crate::geometry::Aabb;

const MIN_PHI: f32 = 0.01;
const MAX_PHI: f32 = std::f32::consts::PI - 0.01;
const DEFAULT_THETA: f32 = 0.0;
const DEFAULT_PHI: f32 = std::f32::consts::FRAC_PI_2;

/// Allowed camera distance range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 1.0, max: 10.0 }
    }
}

impl ZoomLimits {
    /// Limits for a model whose bounding-box diagonal is `size`:
    /// `[size * 0.1, size * 2]`.
    pub fn from_size(size: f32) -> Self {
        Self {
            min: size * MIN_ZOOM_FACTOR,
            max: size * MAX_ZOOM_FACTOR,
        }
    }

    pub fn clamp(&self, distance: f32) -> f32 {
        distance.clamp(self.min, self.max)
    }

    pub fn contains(&self, distance: f32) -> bool {
        (self.min..=self.max).contains(&distance)
    }
}

#[derive(Clone, Copy, Debug)]
struct Home {
    target: Vec3,
    radius: f32,
}

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    /// Point the camera orbits around / looks at
    pub target: Vec3,
    /// Distance from target
    radius: f32,
    /// Azimuth in radians (rotation around Y)
    pub theta: f32,
    /// Polar angle from +Y in radians
    pub phi: f32,
    /// Vertical field of view in radians
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub auto_rotate: bool,
    /// Multiplier on the base auto-rotation rate.
    pub auto_rotate_speed: f32,
    limits: ZoomLimits,
    home: Home,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        let limits = ZoomLimits::default();
        Self {
            target: Vec3::ZERO,
            radius: 5.0,
            theta: DEFAULT_THETA,
            phi: DEFAULT_PHI,
            fov_y: CAMERA_FOV_DEGREES.to_radians(),
            near: 0.1,
            far: 1000.0,
            auto_rotate: false,
            auto_rotate_speed: 1.0,
            limits,
            home: Home {
                target: Vec3::ZERO,
                radius: 5.0,
            },
        }
    }
}

impl OrbitCamera {
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Center on `bounds`, derive zoom limits from its diagonal and back off
    /// until the bounding sphere fills the vertical field of view.
    pub fn fit(&mut self, bounds: &Aabb) {
        let size = bounds.diagonal().max(f32::EPSILON);
        self.limits = ZoomLimits::from_size(size);
        self.target = bounds.center();

        let fit_distance = bounds.bounding_radius() / (self.fov_y * 0.5).sin();
        self.radius = self.limits.clamp(fit_distance);
        self.near = (self.limits.min * 0.01).max(1e-4);
        self.far = (self.limits.max + size) * 2.0;
        self.home = Home {
            target: self.target,
            radius: self.radius,
        };

        debug!(
            size,
            min = self.limits.min,
            max = self.limits.max,
            radius = self.radius,
            "Camera fitted"
        );
    }

    /// Set the distance directly; the value is clamped into the limits.
    pub fn set_radius(&mut self, radius: f32) {
        self.radius = self.limits.clamp(radius);
    }

    pub fn zoom_in(&mut self) {
        self.set_radius(self.radius * ZOOM_IN_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_radius(self.radius * ZOOM_OUT_STEP);
    }

    /// Scroll-wheel zoom. Positive `delta` moves closer.
    pub fn zoom_by(&mut self, delta: f32) {
        self.set_radius(self.radius * (-delta * 0.005).exp());
    }

    /// Return to the fitted view and default orientation.
    pub fn reset(&mut self) {
        self.theta = DEFAULT_THETA;
        self.phi = DEFAULT_PHI;
        self.target = self.home.target;
        self.radius = self.limits.clamp(self.home.radius);
    }

    pub fn toggle_auto_rotate(&mut self) {
        self.auto_rotate = !self.auto_rotate;
    }

    /// Advance auto-rotation by `dt` seconds. Returns `true` if the view changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.auto_rotate {
            return false;
        }
        self.theta += AUTO_ROTATE_RADIANS_PER_SEC * self.auto_rotate_speed * dt;
        true
    }

    pub fn orbit(&mut self, delta_theta: f32, delta_phi: f32) {
        self.theta += delta_theta;
        self.phi = (self.phi + delta_phi).clamp(MIN_PHI, MAX_PHI);
    }

    /// Translate the target in the view plane by a screen-space drag.
    pub fn pan(&mut self, delta_screen: Vec2) {
        let scale = self.radius * 0.002;
        self.target -= self.right() * (delta_screen.x * scale);
        self.target += self.up() * (delta_screen.y * scale);
    }

    pub fn eye_position(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        self.target
            + Vec3::new(
                self.radius * sin_phi * sin_theta,
                self.radius * cos_phi,
                self.radius * sin_phi * cos_theta,
            )
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye_position()).normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect, self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}
