use glam::Vec3;
use log::{info, warn};
use std::path::Path;

use super::{ObjectId, ObjectKind, Scene, SceneObject, Transform};
use crate::config::LayoutConfig;
use crate::loaders::load_model_bounds;
use crate::math::AABB;
use crate::nav::{ObstacleRegistry, RoomBounds};

/// Fractions of the room width/depth where ceiling lights and fans sit
const FIXTURE_SPREAD: f32 = 0.3;
const LIGHT_FIXTURE_HALF_EXTENTS: Vec3 = Vec3::new(1.0, 0.005, 0.15);

/// The built office room and handles to its interesting objects
#[derive(Debug, Clone)]
pub struct Room {
    pub scene: Scene,
    pub bounds: RoomBounds,
    pub table: ObjectId,
    pub columns: Vec<ObjectId>,
    pub fans: Vec<ObjectId>,
    /// Point light positions, just under the ceiling fixtures
    pub light_positions: Vec<Vec3>,
}

impl Room {
    /// Registry holding the table and both columns
    pub fn obstacles(&self) -> ObstacleRegistry {
        let mut registry = ObstacleRegistry::new();
        registry.register_table(self.table);
        for &column in &self.columns {
            registry.register_column(column);
        }
        registry
    }
}

/// Model extents from `model` when given and loadable, otherwise `fallback`
pub fn resolve_local_bounds(model: Option<&Path>, fallback: AABB) -> AABB {
    let Some(path) = model else {
        return fallback;
    };
    match load_model_bounds(path) {
        Ok(bounds) => bounds,
        Err(e) => {
            warn!("Using default bounds for {:?}: {:#}", path, e);
            fallback
        }
    }
}

pub fn build_room(config: &LayoutConfig) -> Room {
    let room = &config.room;
    let (w, d, h) = (room.width, room.depth, room.wall_height);
    let mut scene = Scene::new();

    let table_bounds = resolve_local_bounds(config.table.model.as_deref(), config.table.local_bounds());
    let table = scene.add(SceneObject::new(
        "table",
        ObjectKind::Table,
        Transform::at(Vec3::from_array(config.table.position))
            .with_scale(Vec3::from_array(config.table.scale)),
        table_bounds,
    ));

    // Square columns in the two back corners, flush with both walls
    let column_bounds = AABB::from_center_half_extents(
        Vec3::ZERO,
        Vec3::new(room.column_size * 0.5, h * 0.5, room.column_size * 0.5),
    );
    let column_x = w * 0.5 - room.column_size * 0.5 - room.column_gap;
    let column_z = -d * 0.5 + room.column_size * 0.5 + room.column_gap;
    let columns = [("column-back-left", -column_x), ("column-back-right", column_x)]
        .into_iter()
        .map(|(name, x)| {
            scene.add(SceneObject::new(
                name,
                ObjectKind::Column,
                Transform::at(Vec3::new(x, h * 0.5, column_z)),
                column_bounds,
            ))
        })
        .collect::<Vec<_>>();

    let fixture_x = w * FIXTURE_SPREAD;
    let fixture_z = d * FIXTURE_SPREAD;
    let corners = [
        (-fixture_x, -fixture_z),
        (fixture_x, -fixture_z),
        (-fixture_x, fixture_z),
        (fixture_x, fixture_z),
    ];
    let fixture_bounds = AABB::from_center_half_extents(Vec3::ZERO, LIGHT_FIXTURE_HALF_EXTENTS);
    for (i, &(x, z)) in corners.iter().enumerate() {
        scene.add(SceneObject::new(
            format!("ceiling-light-{}", i),
            ObjectKind::LightFixture,
            Transform::at(Vec3::new(x, h - 0.01, z)),
            fixture_bounds,
        ));
    }
    let light_positions = corners.iter().map(|&(x, z)| Vec3::new(x, h - 0.1, z)).collect();

    let fan_bounds = resolve_local_bounds(config.fans.model.as_deref(), config.fans.local_bounds());
    let fans = [-fixture_x, fixture_x]
        .into_iter()
        .enumerate()
        .map(|(i, x)| {
            scene.add(
                SceneObject::new(
                    format!("ceiling-fan-{}", i),
                    ObjectKind::Fan,
                    Transform::at(Vec3::new(x, h - config.fans.ceiling_drop, 0.0)),
                    fan_bounds,
                )
                .with_spin(config.fans.spin),
            )
        })
        .collect();

    let bounds = RoomBounds::from_room(room);
    info!(
        "Room built: {}x{}x{}, {} objects, camera bounds {:?}",
        w,
        d,
        h,
        scene.len(),
        bounds
    );

    Room {
        scene,
        bounds,
        table,
        columns,
        fans,
        light_positions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_room_contents() {
        let room = build_room(&LayoutConfig::default());
        assert_eq!(room.columns.len(), 2);
        assert_eq!(room.fans.len(), 2);
        assert_eq!(room.light_positions.len(), 4);
        assert_eq!(room.scene.of_kind(ObjectKind::LightFixture).count(), 4);
        assert_eq!(room.scene.len(), 1 + 2 + 4 + 2);
    }

    #[test]
    fn columns_sit_in_back_corners() {
        let room = build_room(&LayoutConfig::default());
        let left = room.scene.get(room.columns[0]).unwrap().world_bounds();
        let right = room.scene.get(room.columns[1]).unwrap().world_bounds();

        assert!((left.min.x - (-9.95)).abs() < 1e-4);
        assert!((left.min.z - (-5.95)).abs() < 1e-4);
        assert!((right.max.x - 9.95).abs() < 1e-4);
        assert!((left.size() - Vec3::new(1.2, 6.0, 1.2)).length() < 1e-4);
        assert!(left.min.y.abs() < 1e-5);
    }

    #[test]
    fn table_uses_scaled_default_box() {
        let room = build_room(&LayoutConfig::default());
        let table = room.scene.get(room.table).unwrap().world_bounds();
        assert!((table.size() - Vec3::new(3.2 * 0.7, 1.5 * 0.5, 2.0)).length() < 1e-4);
        assert!(table.center().x.abs() < 1e-5);
    }

    #[test]
    fn unloadable_model_falls_back() {
        let fallback = AABB::from_center_half_extents(Vec3::ZERO, Vec3::ONE);
        let bounds = resolve_local_bounds(Some(Path::new("/missing/table.glb")), fallback);
        assert_eq!(bounds, fallback);
    }

    #[test]
    fn fans_hang_below_ceiling_and_spin() {
        let room = build_room(&LayoutConfig::default());
        for &fan in &room.fans {
            let fan = room.scene.get(fan).unwrap();
            assert!((fan.transform.position.y - 4.8).abs() < 1e-5);
            assert!((fan.spin - 0.4).abs() < 1e-6);
        }
    }

    #[test]
    fn registry_covers_table_and_columns() {
        let room = build_room(&LayoutConfig::default());
        let registry = room.obstacles();
        assert!(registry.table(&room.scene).is_some());
        assert_eq!(registry.all(&room.scene).count(), 3);
    }
}
