use glam::Vec2;
use log::info;

use crate::camera::Camera;
use crate::math::{intersect_aabb, Ray};
use crate::scene::{ObjectId, ObjectKind, Scene};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub distance: f32,
}

/// Window pixel coordinates to normalized device coordinates (y up)
pub fn screen_to_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        (x / width.max(1.0)) * 2.0 - 1.0,
        -(y / height.max(1.0)) * 2.0 + 1.0,
    )
}

/// Nearest object whose world bounds the ray hits
pub fn pick(scene: &Scene, ray: &Ray) -> Option<Pick> {
    scene
        .iter()
        .filter_map(|(id, object)| {
            intersect_aabb(ray, &object.world_bounds()).map(|distance| Pick {
                id,
                kind: object.kind,
                distance,
            })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Click at `ndc`: a fan under the cursor reverses its spin
pub fn click(scene: &mut Scene, camera: &Camera, ndc: Vec2) -> Option<Pick> {
    let hit = pick(scene, &camera.screen_ray(ndc))?;
    if hit.kind == ObjectKind::Fan {
        if let Some(fan) = scene.get_mut(hit.id) {
            fan.spin = -fan.spin;
            info!("Fan rotation reversed: {} now spins {:+.2} rad/frame", fan.name, fan.spin);
        }
    }
    Some(hit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::AABB;
    use crate::scene::{SceneObject, Transform};
    use glam::Vec3;

    fn scene_with_fan_behind_table() -> (Scene, ObjectId, ObjectId) {
        let mut scene = Scene::new();
        let unit = AABB::from_center_half_extents(Vec3::ZERO, Vec3::splat(0.5));
        let table = scene.add(SceneObject::new(
            "table",
            ObjectKind::Table,
            Transform::at(Vec3::new(0.0, 0.0, -3.0)),
            unit,
        ));
        let fan = scene.add(
            SceneObject::new("fan", ObjectKind::Fan, Transform::at(Vec3::new(0.0, 0.0, -6.0)), unit)
                .with_spin(0.4),
        );
        (scene, table, fan)
    }

    #[test]
    fn ndc_corners() {
        assert_eq!(screen_to_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(screen_to_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
        assert_eq!(screen_to_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn pick_returns_nearest() {
        let (scene, table, _) = scene_with_fan_behind_table();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = pick(&scene, &ray).unwrap();
        assert_eq!(hit.id, table);
        assert!((hit.distance - 2.5).abs() < 1e-4);
    }

    #[test]
    fn clicking_a_fan_reverses_it() {
        let (mut scene, table, fan) = scene_with_fan_behind_table();
        scene.get_mut(table).unwrap().transform.position.x = 5.0;

        let camera = Camera::looking_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -6.0));
        let hit = click(&mut scene, &camera, Vec2::ZERO).unwrap();
        assert_eq!(hit.id, fan);
        assert!((scene.get(fan).unwrap().spin + 0.4).abs() < 1e-6);

        click(&mut scene, &camera, Vec2::ZERO);
        assert!((scene.get(fan).unwrap().spin - 0.4).abs() < 1e-6);
    }

    #[test]
    fn clicking_other_objects_changes_nothing() {
        let (mut scene, table, fan) = scene_with_fan_behind_table();
        let camera = Camera::looking_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -6.0));
        let hit = click(&mut scene, &camera, Vec2::ZERO).unwrap();
        assert_eq!(hit.id, table);
        assert!((scene.get(fan).unwrap().spin - 0.4).abs() < 1e-6);
    }

    #[test]
    fn clicking_empty_space_is_none() {
        let (mut scene, _, _) = scene_with_fan_behind_table();
        let camera = Camera::looking_at(Vec3::ZERO, Vec3::new(0.0, 0.0, 6.0));
        assert!(click(&mut scene, &camera, Vec2::ZERO).is_none());
    }
}
