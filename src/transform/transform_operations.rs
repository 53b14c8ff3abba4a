//! Transform operations - pure functions over TransformData

use super::transform_data::{OrbitInstanceRaw, TransformData};
use glam::{Mat4, Quat, Vec3};

/// Create a transform from a position and orientation
pub fn create_transform(position: Vec3, rotation: Quat) -> TransformData {
    TransformData { position, rotation }
}

/// World-space up axis of a transform (its local +Y)
pub fn transform_up(transform: &TransformData) -> Vec3 {
    transform.rotation * Vec3::Y
}

/// Map a point from the transform's local frame into world space
pub fn local_to_world(transform: &TransformData, local: Vec3) -> Vec3 {
    transform.position + transform.rotation * local
}

/// Map a world-space point into the transform's local frame
pub fn world_to_local(transform: &TransformData, world: Vec3) -> Vec3 {
    transform.rotation.inverse() * (world - transform.position)
}

/// Carry a child pose from one parent frame to another, keeping its local pose
pub fn reparent_transform(
    old_parent: &TransformData,
    new_parent: &TransformData,
    child: &TransformData,
) -> TransformData {
    TransformData {
        position: local_to_world(new_parent, world_to_local(old_parent, child.position)),
        rotation: (new_parent.rotation * old_parent.rotation.inverse() * child.rotation)
            .normalize(),
    }
}

/// Model matrix (rotation then translation, unit scale)
pub fn transform_matrix(transform: &TransformData) -> Mat4 {
    Mat4::from_rotation_translation(transform.rotation, transform.position)
}

/// Pack a transform for instanced rendering
pub fn build_instance_raw(transform: &TransformData) -> OrbitInstanceRaw {
    OrbitInstanceRaw {
        model_matrix: transform_matrix(transform).to_cols_array_2d(),
    }
}
