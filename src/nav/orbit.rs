use glam::Vec3;
use std::f32::consts::TAU;

use crate::camera::Camera;
use crate::config::{OrbitConfig, RoomConfig};
use crate::math::clamp_range;

const EPS: f32 = 1e-6;
/// Damped rotation below this many radians is dropped so the rig comes to rest
const REST_ANGLE: f32 = 1e-5;
/// Damped pan below this many pixels is dropped
const REST_PIXELS: f32 = 1e-3;

/// Pending user input for the orbit rig, accumulated between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitDelta {
    /// Azimuth change, radians
    pub theta: f32,
    /// Polar change, radians (positive tilts the camera toward the floor plane)
    pub phi: f32,
    /// Multiplier on the orbit distance
    pub scale: f32,
    /// Screen-space pan in pixels
    pub pan: (f32, f32),
    pub viewport_height: f32,
}

impl Default for OrbitDelta {
    fn default() -> Self {
        Self {
            theta: 0.0,
            phi: 0.0,
            scale: 1.0,
            pan: (0.0, 0.0),
            viewport_height: 1.0,
        }
    }
}

impl OrbitDelta {
    pub fn is_empty(&self) -> bool {
        self.theta == 0.0 && self.phi == 0.0 && self.scale == 1.0 && self.pan == (0.0, 0.0)
    }
}

/// Orbit controls: drag rotates around `camera.target`, wheel zooms,
/// distance and polar angle stay within configured limits.
///
/// With damping on, each update applies `damping_factor` of the pending
/// rotation and pan and keeps the rest, so a drag eases out over later
/// frames. Zoom always applies in full.
#[derive(Debug, Clone)]
pub struct OrbitRig {
    pub min_distance: f32,
    pub max_distance: f32,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub enable_pan: bool,
    rotate_speed: f32,
    zoom_step: f32,
    /// 1.0 when damping is off
    damping: f32,
    pending: OrbitDelta,
}

impl OrbitRig {
    pub fn new(config: &OrbitConfig, room: &RoomConfig) -> Self {
        let damping = if config.enable_damping {
            clamp_range(config.damping_factor, EPS, 1.0)
        } else {
            1.0
        };
        Self {
            min_distance: config.min_distance,
            max_distance: config.effective_max_distance(room),
            min_polar_angle: config.min_polar_angle,
            max_polar_angle: config.max_polar_angle,
            enable_pan: config.enable_pan,
            rotate_speed: config.rotate_speed,
            zoom_step: config.zoom_step,
            damping,
            pending: OrbitDelta::default(),
        }
    }

    /// Mouse drag of `(dx, dy)` pixels in a viewport `height` pixels tall
    pub fn drag(&mut self, dx: f32, dy: f32, height: f32) {
        let height = height.max(1.0);
        self.pending.theta -= TAU * dx / height * self.rotate_speed;
        self.pending.phi -= TAU * dy / height * self.rotate_speed;
    }

    /// Positive `notches` zoom toward the target
    pub fn zoom(&mut self, notches: f32) {
        self.pending.scale *= self.zoom_step.powf(notches);
    }

    /// Ignored while panning is disabled
    pub fn pan(&mut self, dx: f32, dy: f32, height: f32) {
        if !self.enable_pan {
            return;
        }
        self.pending.pan.0 += dx;
        self.pending.pan.1 += dy;
        self.pending.viewport_height = height.max(1.0);
    }

    pub fn pending(&self) -> &OrbitDelta {
        &self.pending
    }

    /// Applies pending input and the distance/polar limits to `camera`.
    /// Returns true when input was applied or a limit moved the camera,
    /// which is when the change handler must run.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        let delta = self.take_step();
        let before = camera.position;

        let offset = camera.position - camera.target;
        let radius = offset.length();
        let (mut theta, mut phi) = if radius > EPS {
            (offset.x.atan2(offset.z), (offset.y / radius).clamp(-1.0, 1.0).acos())
        } else {
            (0.0, 0.0)
        };

        theta += delta.theta;
        phi += delta.phi;
        phi = clamp_range(phi, self.min_polar_angle, self.max_polar_angle);
        phi = clamp_range(phi, EPS, std::f32::consts::PI - EPS);

        let radius = clamp_range(radius * delta.scale, self.min_distance, self.max_distance);

        if self.enable_pan && delta.pan != (0.0, 0.0) {
            let target_distance = radius * (camera.fov_y * 0.5).tan();
            let right = camera.right();
            let up = right.cross(camera.forward()).normalize_or_zero();
            let k = 2.0 * target_distance / delta.viewport_height;
            camera.target += -right * delta.pan.0 * k + up * delta.pan.1 * k;
        }

        let sin_phi = phi.sin();
        let offset = Vec3::new(
            radius * sin_phi * theta.sin(),
            radius * phi.cos(),
            radius * sin_phi * theta.cos(),
        );
        camera.position = camera.target + offset;

        !delta.is_empty() || camera.position.distance_squared(before) > EPS
    }

    /// Splits off this frame's share of the pending input
    fn take_step(&mut self) -> OrbitDelta {
        let k = self.damping;
        let pending = &mut self.pending;
        let step = OrbitDelta {
            theta: pending.theta * k,
            phi: pending.phi * k,
            scale: pending.scale,
            pan: (pending.pan.0 * k, pending.pan.1 * k),
            viewport_height: pending.viewport_height,
        };

        let keep = 1.0 - k;
        let rest = |v: f32, eps: f32| if (v * keep).abs() < eps { 0.0 } else { v * keep };
        pending.theta = rest(pending.theta, REST_ANGLE);
        pending.phi = rest(pending.phi, REST_ANGLE);
        pending.pan = (rest(pending.pan.0, REST_PIXELS), rest(pending.pan.1, REST_PIXELS));
        pending.scale = 1.0;
        step
    }
}
