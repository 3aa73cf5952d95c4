use glam::Vec3;

use crate::config::LightingConfig;
use crate::math::clamp_range;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
    pub range: f32,
}

/// Ambient light plus the ceiling point lights. Control inputs are clamped
/// to their ranges; nothing is ever rejected.
#[derive(Debug, Clone)]
pub struct LightingRig {
    ambient: f32,
    points: Vec<PointLight>,
    limits: LightingConfig,
}

impl LightingRig {
    pub fn new(config: &LightingConfig, positions: &[Vec3]) -> Self {
        let mut rig = Self {
            ambient: 0.0,
            points: positions
                .iter()
                .map(|&position| PointLight {
                    position,
                    intensity: 0.0,
                    range: 0.0,
                })
                .collect(),
            limits: *config,
        };
        rig.set_ambient(config.ambient);
        rig.set_point_intensity(config.point_intensity);
        rig.set_point_range(config.point_range);
        rig
    }

    pub fn ambient(&self) -> f32 {
        self.ambient
    }

    pub fn points(&self) -> &[PointLight] {
        &self.points
    }

    pub fn set_ambient(&mut self, value: f32) -> f32 {
        self.ambient = clamp_control(value, self.limits.ambient_max);
        self.ambient
    }

    /// Applies to every ceiling light
    pub fn set_point_intensity(&mut self, value: f32) -> f32 {
        let value = clamp_control(value, self.limits.point_intensity_max);
        self.points.iter_mut().for_each(|p| p.intensity = value);
        value
    }

    pub fn set_point_range(&mut self, value: f32) -> f32 {
        let value = clamp_control(value, self.limits.point_range_max);
        self.points.iter_mut().for_each(|p| p.range = value);
        value
    }
}

/// NaN reads as zero; a negative `max` pins every value to it
fn clamp_control(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        clamp_range(value, 0.0, max)
    }
}
