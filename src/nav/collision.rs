use glam::Vec3;

use crate::math::AABB;
use crate::scene::SceneObject;

/// Anything the camera must stay out of
pub trait Obstacle {
    /// Current world-space box; implementations must not cache it
    fn world_bounds(&self) -> AABB;
}

impl Obstacle for SceneObject {
    fn world_bounds(&self) -> AABB {
        SceneObject::world_bounds(self)
    }
}

impl Obstacle for AABB {
    fn world_bounds(&self) -> AABB {
        *self
    }
}

/// The camera is treated as a box of half-size `radius + margin`, not a sphere:
/// a point near a corner of the obstacle counts as colliding even when its true
/// distance to the box is larger than the radius.
pub fn is_point_colliding<O: Obstacle + ?Sized>(point: Vec3, obstacle: &O, radius: f32, margin: f32) -> bool {
    obstacle
        .world_bounds()
        .expand_by_scalar(radius + margin)
        .contains_point(point)
}

pub fn is_colliding_with_any<'a, O, I>(point: Vec3, obstacles: I, radius: f32, margin: f32) -> bool
where
    O: Obstacle + ?Sized + 'a,
    I: IntoIterator<Item = &'a O>,
{
    obstacles
        .into_iter()
        .any(|o| is_point_colliding(point, o, radius, margin))
}
