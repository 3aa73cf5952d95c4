use glam::Vec3;

use crate::config::RoomConfig;
use crate::math::clamp_range;

/// The box the camera may never leave
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl RoomBounds {
    pub fn from_room(room: &RoomConfig) -> Self {
        let half_w = room.width * 0.5;
        let half_d = room.depth * 0.5;
        Self {
            min_x: -half_w + room.wall_inset,
            max_x: half_w - room.wall_inset,
            min_y: room.floor_clearance,
            max_y: room.wall_height - room.ceiling_clearance,
            min_z: -half_d + room.wall_inset,
            max_z: half_d - room.wall_inset,
        }
    }

    /// Never panics; a room too small for its insets collapses onto the upper limits
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            clamp_range(p.x, self.min_x, self.max_x),
            self.clamp_y(p.y),
            clamp_range(p.z, self.min_z, self.max_z),
        )
    }

    /// Clamps X and Z only; Y passes through
    pub fn clamp_horizontal(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            clamp_range(p.x, self.min_x, self.max_x),
            p.y,
            clamp_range(p.z, self.min_z, self.max_z),
        )
    }

    pub fn clamp_y(&self, y: f32) -> f32 {
        clamp_range(y, self.min_y, self.max_y)
    }

    pub fn contains(&self, p: Vec3) -> bool {
        (self.min_x..=self.max_x).contains(&p.x)
            && (self.min_y..=self.max_y).contains(&p.y)
            && (self.min_z..=self.max_z).contains(&p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_room_bounds() {
        let bounds = RoomBounds::from_room(&RoomConfig::default());
        assert_eq!(bounds.min_x, -9.5);
        assert_eq!(bounds.max_x, 9.5);
        assert_eq!(bounds.min_z, -5.5);
        assert_eq!(bounds.max_z, 5.5);
        assert_eq!(bounds.min_y, 0.2);
        assert!((bounds.max_y - 5.95).abs() < 1e-6);
    }

    #[test]
    fn clamp_pulls_every_axis_inside() {
        let bounds = RoomBounds::from_room(&RoomConfig::default());
        let p = bounds.clamp(Vec3::new(50.0, -3.0, -50.0));
        assert_eq!(p, Vec3::new(9.5, 0.2, -5.5));
        assert!(bounds.contains(p));
    }

    #[test]
    fn clamp_horizontal_leaves_y() {
        let bounds = RoomBounds::from_room(&RoomConfig::default());
        let p = bounds.clamp_horizontal(Vec3::new(-12.0, -7.0, 1.0));
        assert_eq!(p, Vec3::new(-9.5, -7.0, 1.0));
    }

    #[test]
    fn room_narrower_than_insets_clamps_without_panicking() {
        let room = RoomConfig {
            width: 0.8,
            ..RoomConfig::default()
        };
        let bounds = RoomBounds::from_room(&room);
        assert!(bounds.min_x > bounds.max_x);

        let p = bounds.clamp(Vec3::new(3.0, 1.0, 0.0));
        assert_eq!(p.x, bounds.max_x);
        assert_eq!(bounds.clamp_horizontal(Vec3::new(-3.0, 1.0, 0.0)).x, bounds.max_x);
    }
}
