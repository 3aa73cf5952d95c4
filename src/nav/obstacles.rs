use crate::math::AABB;
use crate::scene::{ObjectId, Scene, SceneObject};

/// Handles to the objects the camera collides with.
/// Geometry stays in the [`Scene`]; boxes are derived on every query.
#[derive(Debug, Clone, Default)]
pub struct ObstacleRegistry {
    table: Option<ObjectId>,
    columns: Vec<ObjectId>,
}

impl ObstacleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any previously registered table
    pub fn register_table(&mut self, id: ObjectId) {
        self.table = Some(id);
    }

    /// Appends without de-duplication
    pub fn register_column(&mut self, id: ObjectId) {
        self.columns.push(id);
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// `None` when no table is registered or its handle no longer resolves
    pub fn table<'s>(&self, scene: &'s Scene) -> Option<&'s SceneObject> {
        self.table.and_then(|id| scene.get(id))
    }

    /// Columns whose handles resolve; missing ones are skipped
    pub fn columns<'s>(&'s self, scene: &'s Scene) -> impl Iterator<Item = &'s SceneObject> + 's {
        self.columns.iter().filter_map(move |&id| scene.get(id))
    }

    /// Table first, then columns
    pub fn all<'s>(&'s self, scene: &'s Scene) -> impl Iterator<Item = &'s SceneObject> + 's {
        self.table(scene).into_iter().chain(self.columns(scene))
    }

    pub fn bounding_box_of(scene: &Scene, id: ObjectId) -> Option<AABB> {
        scene.get(id).map(SceneObject::world_bounds)
    }
}
