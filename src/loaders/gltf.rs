use anyhow::{bail, Context, Result};
use glam::{Mat4, Vec3};
use log::{debug, info};
use std::path::Path;

use crate::math::AABB;

/// Local-space extents of a glTF model: the union of every primitive's
/// POSITION bounds, carried through the node hierarchy's transforms.
/// Only the document is read; buffers and images are never loaded.
pub fn load_model_bounds(path: impl AsRef<Path>) -> Result<AABB> {
    let path = path.as_ref();
    info!("Loading model bounds: {:?}", path);

    let gltf = gltf::Gltf::open(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    let mut bounds: Option<AABB> = None;
    for scene in gltf.scenes() {
        for node in scene.nodes() {
            process_node(&node, &Mat4::IDENTITY, &mut bounds);
        }
    }

    match bounds {
        Some(bounds) => {
            debug!("Model bounds for {:?}: {:?}", path, bounds);
            Ok(bounds)
        }
        None => bail!("No geometry with POSITION bounds in {:?}", path),
    }
}

fn process_node(node: &gltf::Node, parent_transform: &Mat4, bounds: &mut Option<AABB>) {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            // bounding_box() requires a POSITION attribute
            if primitive.get(&gltf::Semantic::Positions).is_none() {
                continue;
            }
            let bb = primitive.bounding_box();
            let local = AABB::new(Vec3::from_array(bb.min), Vec3::from_array(bb.max));
            let world = local.transformed(&global_transform);
            let merged = match *bounds {
                Some(acc) => acc.union(&world),
                None => world,
            };
            *bounds = Some(merged);
        }
    }

    for child in node.children() {
        process_node(&child, &global_transform, bounds);
    }
}
