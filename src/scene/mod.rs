//! Typed scene objects with live transforms.
//!
//! Objects are classified once, when the layout is built, so the rest of the
//! crate selects tables, columns and fans by [`ObjectKind`] instead of by name.

mod layout;

use glam::{Mat4, Quat, Vec3};

use crate::math::AABB;

pub use layout::{build_room, resolve_local_bounds, Room};

/// Stable handle to an object in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Table,
    Column,
    Fan,
    LightFixture,
    Prop,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Rotation about the world Y axis, radians
    pub rotation_y: f32,
    pub scale: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation_y: 0.0,
            scale: Vec3::ONE,
        }
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_rotation_y(self.rotation_y),
            self.position,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(Vec3::ZERO)
    }
}

#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    pub transform: Transform,
    /// Geometry extents in the object's own space
    pub local_bounds: AABB,
    /// Rotation about Y applied every frame (fans)
    pub spin: f32,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, kind: ObjectKind, transform: Transform, local_bounds: AABB) -> Self {
        Self {
            name: name.into(),
            kind,
            transform,
            local_bounds,
            spin: 0.0,
        }
    }

    pub fn with_spin(mut self, spin: f32) -> Self {
        self.spin = spin;
        self
    }

    /// Recomputed from the current transform on every call
    pub fn world_bounds(&self) -> AABB {
        self.local_bounds.transformed(&self.transform.matrix())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, object: SceneObject) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id.0)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().enumerate().map(|(i, o)| (ObjectId(i), o))
    }

    pub fn of_kind(&self, kind: ObjectKind) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.iter().filter(move |(_, o)| o.kind == kind)
    }

    /// Advance every spinning object by one frame
    pub fn advance_spin(&mut self) {
        for object in self.objects.iter_mut().filter(|o| o.spin != 0.0) {
            object.transform.rotation_y =
                (object.transform.rotation_y + object.spin).rem_euclid(std::f32::consts::TAU);
        }
    }
}
