// config.rs - Room layout and tuning, loadable from JSON
use anyhow::{bail, Context, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::math::AABB;

/// Everything the walkthrough needs to build the room and drive the camera.
/// Every field has a default, so a layout file only lists what it overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub room: RoomConfig,
    pub table: TableConfig,
    pub fans: FanConfig,
    pub camera: CameraConfig,
    pub navigation: NavConfig,
    pub orbit: OrbitConfig,
    pub lighting: LightingConfig,
}

impl LayoutConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read layout file: {:?}", path))?;
        Self::from_json_str(&text).with_context(|| format!("Invalid layout file: {:?}", path))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("Failed to parse layout JSON")?;
        config.validate().context("Layout limits are inconsistent")?;
        Ok(config)
    }

    /// Rejects limits that would leave the camera no valid position
    pub fn validate(&self) -> Result<()> {
        let room = &self.room;
        let free_x = room.width - 2.0 * room.wall_inset;
        let free_z = room.depth - 2.0 * room.wall_inset;
        let free_y = room.wall_height - room.floor_clearance - room.ceiling_clearance;
        if !(free_x >= 0.0 && free_z >= 0.0 && free_y >= 0.0) {
            bail!(
                "room {}x{}x{} is smaller than its wall insets and clearances",
                room.width,
                room.depth,
                room.wall_height
            );
        }

        let orbit = &self.orbit;
        let max_distance = orbit.effective_max_distance(room);
        if !(orbit.min_distance >= 0.0 && max_distance >= orbit.min_distance) {
            bail!(
                "orbit distance range [{}, {}] is empty",
                orbit.min_distance,
                max_distance
            );
        }
        if !(orbit.min_polar_angle <= orbit.max_polar_angle) {
            bail!(
                "orbit polar range [{}, {}] is empty",
                orbit.min_polar_angle,
                orbit.max_polar_angle
            );
        }
        if !(orbit.damping_factor > 0.0 && orbit.damping_factor <= 1.0) {
            bail!("orbit damping factor {} is outside (0, 1]", orbit.damping_factor);
        }

        let nav = &self.navigation;
        if [nav.move_speed, nav.camera_radius, nav.collision_margin, nav.pushout_margin]
            .iter()
            .any(|v| !(*v >= 0.0))
        {
            bail!("navigation speeds and margins must be non-negative: {:?}", nav);
        }

        let light = &self.lighting;
        if [light.ambient_max, light.point_intensity_max, light.point_range_max]
            .iter()
            .any(|v| !(*v >= 0.0))
        {
            bail!("lighting limits must be non-negative: {:?}", light);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfig {
    /// Floor extent along X
    pub width: f32,
    /// Floor extent along Z
    pub depth: f32,
    pub wall_height: f32,
    /// How far the camera must stay from each wall
    pub wall_inset: f32,
    pub floor_clearance: f32,
    pub ceiling_clearance: f32,
    pub column_size: f32,
    /// Gap between a corner column and the walls it sits against
    pub column_gap: f32,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            width: 20.0,
            depth: 12.0,
            wall_height: 6.0,
            wall_inset: 0.5,
            floor_clearance: 0.2,
            ceiling_clearance: 0.05,
            column_size: 1.2,
            column_gap: 0.05,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Optional .glb/.gltf whose extents replace `bounds_min`/`bounds_max`
    pub model: Option<PathBuf>,
    pub position: [f32; 3],
    pub scale: [f32; 3],
    pub bounds_min: [f32; 3],
    pub bounds_max: [f32; 3],
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            model: None,
            position: [0.0, 0.0, 0.0],
            scale: [0.7, 0.5, 1.0],
            bounds_min: [-1.6, 0.0, -1.0],
            bounds_max: [1.6, 1.5, 1.0],
        }
    }
}

impl TableConfig {
    pub fn local_bounds(&self) -> AABB {
        AABB::new(Vec3::from_array(self.bounds_min), Vec3::from_array(self.bounds_max))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FanConfig {
    pub model: Option<PathBuf>,
    pub bounds_min: [f32; 3],
    pub bounds_max: [f32; 3],
    /// Distance from the ceiling down to the fan origin
    pub ceiling_drop: f32,
    /// Radians per frame; negative spins the other way
    pub spin: f32,
}

impl Default for FanConfig {
    fn default() -> Self {
        Self {
            model: None,
            bounds_min: [-0.9, 0.0, -0.9],
            bounds_max: [0.9, 0.6, 0.9],
            ceiling_drop: 1.2,
            spin: 0.4,
        }
    }
}

impl FanConfig {
    pub fn local_bounds(&self) -> AABB {
        AABB::new(Vec3::from_array(self.bounds_min), Vec3::from_array(self.bounds_max))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    pub target: [f32; 3],
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [4.0, 3.0, 4.0],
            target: [0.0, 0.0, 0.0],
            fov_degrees: 75.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

/// Keyboard movement and collision tuning
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// World units per frame
    pub move_speed: f32,
    /// Ascend speed as a fraction of `move_speed`
    pub vertical_factor: f32,
    pub camera_radius: f32,
    /// Extra padding added to the radius for collision tests
    pub collision_margin: f32,
    /// Extra padding added to the radius when pushing the camera out
    pub pushout_margin: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            move_speed: 0.1,
            vertical_factor: 0.8,
            camera_radius: 0.3,
            collision_margin: 0.2,
            pushout_margin: 0.3,
        }
    }
}

impl NavConfig {
    pub fn vertical_speed(&self) -> f32 {
        self.move_speed * self.vertical_factor
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    pub min_distance: f32,
    /// `None` derives the limit from the room so the camera cannot zoom through walls
    pub max_distance: Option<f32>,
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub enable_pan: bool,
    pub rotate_speed: f32,
    /// Distance multiplier per wheel notch toward the target
    pub zoom_step: f32,
    /// Rotation and pan ease out over several frames instead of applying at once
    pub enable_damping: bool,
    /// Share of the remaining rotation applied per frame while damping
    pub damping_factor: f32,
}

impl OrbitConfig {
    /// Configured limit, or `min(width, depth) * 0.8` so zooming out stays inside the room
    pub fn effective_max_distance(&self, room: &RoomConfig) -> f32 {
        self.max_distance.unwrap_or(room.width.min(room.depth) * 0.8)
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            min_distance: 2.0,
            max_distance: None,
            min_polar_angle: 0.1,
            max_polar_angle: std::f32::consts::FRAC_PI_2 - 0.05,
            enable_pan: false,
            rotate_speed: 1.0,
            zoom_step: 0.95,
            enable_damping: true,
            damping_factor: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingConfig {
    pub ambient: f32,
    pub ambient_max: f32,
    pub point_intensity: f32,
    pub point_intensity_max: f32,
    pub point_range: f32,
    pub point_range_max: f32,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient: 0.4,
            ambient_max: 2.0,
            point_intensity: 15.0,
            point_intensity_max: 50.0,
            point_range: 40.0,
            point_range_max: 100.0,
        }
    }
}
