//! Transform data structures
//!
//! Plain data only. All transformations happen in transform_operations.rs

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World-space pose of a single belt object (or of the belt pivot)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformData {
    /// Position in world space
    pub position: Vec3,

    /// Orientation in world space (unit quaternion)
    pub rotation: Quat,
}

/// Opaque handle returned by the host when an object is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectHandle(pub u32);

/// Per-instance data for GPU upload
/// Must match the host shader's instance layout
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct OrbitInstanceRaw {
    /// Model matrix (4x4, column-major)
    pub model_matrix: [[f32; 4]; 4],
}

impl Default for TransformData {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}
