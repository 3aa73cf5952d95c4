use glam::Vec3;
use log::{debug, trace};

use super::bounds::RoomBounds;
use super::collision::{is_colliding_with_any, is_point_colliding};
use super::obstacles::ObstacleRegistry;
use super::orbit::OrbitRig;
use crate::camera::Camera;
use crate::config::NavConfig;
use crate::input::{Controller, NavKey};
use crate::math::AABB;
use crate::scene::Scene;

/// What the keyboard step did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Idle,
    Moved,
    /// Horizontal move rejected; `ascended` if the vertical part still applied
    Blocked { ascended: bool },
    Ascended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub orbit_changed: bool,
    pub step: StepOutcome,
    pub corrected: bool,
}

/// Owns the camera and keeps it inside the room and out of obstacles
#[derive(Debug, Clone)]
pub struct NavigationController {
    pub camera: Camera,
    pub orbit: OrbitRig,
    pub bounds: RoomBounds,
    pub obstacles: ObstacleRegistry,
    config: NavConfig,
    correction_queued: bool,
}

impl NavigationController {
    pub fn new(
        camera: Camera,
        orbit: OrbitRig,
        bounds: RoomBounds,
        obstacles: ObstacleRegistry,
        config: NavConfig,
    ) -> Self {
        Self {
            camera,
            orbit,
            bounds,
            obstacles,
            config,
            correction_queued: false,
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Run the orbit change handler on the next tick
    pub fn queue_correction(&mut self) {
        self.correction_queued = true;
    }

    /// One frame: orbit update, keyboard step, then any queued orbit correction
    pub fn tick<C: Controller>(&mut self, scene: &Scene, input: &C) -> FrameReport {
        let orbit_changed = self.orbit.update(&mut self.camera);
        if orbit_changed {
            self.correction_queued = true;
        }

        let step = self.apply_keyboard(scene, input);

        let corrected = if std::mem::take(&mut self.correction_queued) {
            self.on_orbit_change(scene)
        } else {
            false
        };

        FrameReport {
            orbit_changed,
            step,
            corrected,
        }
    }

    /// Inside the inflated box of the table or any column
    pub fn is_colliding(&self, scene: &Scene, point: Vec3) -> bool {
        let (radius, margin) = (self.config.camera_radius, self.config.collision_margin);
        self.obstacles
            .table(scene)
            .is_some_and(|table| is_point_colliding(point, table, radius, margin))
            || is_colliding_with_any(point, self.obstacles.columns(scene), radius, margin)
    }

    /// Orbit change handler: push the camera out of whatever it entered,
    /// then clamp it to the room. Returns true if the position changed.
    pub fn on_orbit_change(&mut self, scene: &Scene) -> bool {
        let before = self.camera.position;
        if let Some(safe) = self.push_out_position(scene) {
            debug!("Camera pushed out of obstacle: {:?} -> {:?}", before, safe);
            self.camera.position = safe;
        }
        self.camera.position = self.bounds.clamp(self.camera.position);
        self.camera.position != before
    }

    /// Where the camera should go to leave the obstacle it is in, if anywhere.
    /// When both the table and a column qualify, the column wins only if its
    /// exit point is strictly closer.
    pub fn push_out_position(&self, scene: &Scene) -> Option<Vec3> {
        let pos = self.camera.position;
        let (radius, margin) = (self.config.camera_radius, self.config.collision_margin);
        let clearance = radius + self.config.pushout_margin;

        let mut safe = self
            .obstacles
            .table(scene)
            .filter(|table| is_point_colliding(pos, *table, radius, margin))
            .and_then(|table| push_out_from(&table.world_bounds(), pos, clearance));

        let closest_column = self
            .obstacles
            .columns(scene)
            .map(|column| column.world_bounds())
            .filter(|bounds| is_point_colliding(pos, bounds, radius, margin))
            .min_by(|a, b| pos.distance(a.center()).total_cmp(&pos.distance(b.center())));

        if let Some(candidate) = closest_column.and_then(|b| push_out_from(&b, pos, clearance)) {
            safe = match safe {
                Some(current) if pos.distance(candidate) >= pos.distance(current) => Some(current),
                _ => Some(candidate),
            };
        }

        safe
    }

    /// Keyboard displacement for one frame
    pub fn apply_keyboard<C: Controller>(&mut self, scene: &Scene, input: &C) -> StepOutcome {
        let forward = self.camera.horizontal_forward();
        let right = self.camera.right();

        let mut direction = Vec3::ZERO;
        if input.is_down(NavKey::Forward) {
            direction += forward;
        }
        if input.is_down(NavKey::Back) {
            direction -= forward;
        }
        if input.is_down(NavKey::Left) {
            direction -= right;
        }
        if input.is_down(NavKey::Right) {
            direction += right;
        }

        let vertical = if input.is_down(NavKey::Ascend) {
            self.config.vertical_speed()
        } else {
            0.0
        };

        if direction.length_squared() > 0.0 {
            let step = direction.normalize() * self.config.move_speed;
            let mut candidate = self.camera.position + step;
            candidate.y += vertical;
            let candidate = self.bounds.clamp(candidate);

            // Obstacles only gate horizontal motion, so probe at the current height
            let probe = Vec3::new(candidate.x, self.camera.position.y, candidate.z);
            if !self.is_colliding(scene, probe) {
                self.camera.position = candidate;
                self.camera.target = self.bounds.clamp_horizontal(self.camera.target + step);
                StepOutcome::Moved
            } else {
                trace!("Horizontal move blocked at {:?}", probe);
                let ascended = vertical != 0.0;
                if ascended {
                    self.ascend(vertical);
                }
                StepOutcome::Blocked { ascended }
            }
        } else if vertical != 0.0 {
            self.ascend(vertical);
            StepOutcome::Ascended
        } else {
            StepOutcome::Idle
        }
    }

    fn ascend(&mut self, vertical: f32) {
        self.camera.position.y = self.bounds.clamp_y(self.camera.position.y + vertical);
    }
}

/// Exit point along the horizontal line from the obstacle center through `pos`.
/// `None` when `pos` is directly above or below the center.
fn push_out_from(bounds: &AABB, pos: Vec3, clearance: f32) -> Option<Vec3> {
    let center = bounds.center();
    let size = bounds.size();
    let mut direction = pos - center;
    direction.y = 0.0;
    if direction.length_squared() == 0.0 {
        return None;
    }
    let distance = size.x.max(size.z) * 0.5 + clearance;
    let mut safe = center + direction.normalize() * distance;
    safe.y = pos.y;
    Some(safe)
}
