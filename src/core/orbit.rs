use super::constants::*;
use glam::{Mat4, Vec3};

/// Parameters for the orbiting camera.
///
/// - `radius`: horizontal distance of the orbit from the y axis
/// - `height`: constant y of the orbit
/// - `rate`: angular speed in radians per wall-clock millisecond
/// - `blend`: per-frame fraction of the gap closed toward the orbit point
#[derive(Clone, Debug)]
pub struct OrbitParams {
    pub radius: f32,
    pub height: f32,
    pub rate: f64,
    pub blend: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            radius: CAMERA_ORBIT_RADIUS,
            height: CAMERA_HEIGHT,
            rate: CAMERA_ORBIT_RATE,
            blend: CAMERA_BLEND,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

/// Camera that eases toward a point circling the origin and always looks at
/// `target`.
#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub params: OrbitParams,
}

impl OrbitCamera {
    /// Place the camera on its orbit at `time_ms` so the first view is stable.
    pub fn new(params: OrbitParams, time_ms: f64) -> Self {
        let position = orbit_point(&params, time_ms);
        Self {
            position,
            target: Vec3::ZERO,
            params,
        }
    }

    /// Ease one frame toward the orbit point for `time_ms`.
    pub fn update(&mut self, time_ms: f64) {
        let goal = orbit_point(&self.params, time_ms);
        self.position = self.position.lerp(goal, self.params.blend);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(
            self.params.fovy_radians,
            aspect.max(1e-3),
            self.params.znear,
            self.params.zfar,
        )
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection_matrix(aspect) * self.view_matrix()
    }
}

/// Point on the camera orbit at wall-clock `time_ms`.
///
/// The angle is reduced in f64 because epoch milliseconds do not fit an f32.
pub fn orbit_point(params: &OrbitParams, time_ms: f64) -> Vec3 {
    let angle = (time_ms * params.rate).rem_euclid(std::f64::consts::TAU) as f32;
    Vec3::new(
        params.radius * angle.cos(),
        params.height,
        params.radius * angle.sin(),
    )
}
