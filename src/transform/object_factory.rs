//! Object creation seam
//!
//! The belt never instantiates anything itself. It asks an [`ObjectFactory`]
//! supplied by the host for each spawned object and keeps the returned handle.

use super::transform_data::{ObjectHandle, TransformData};
use crate::error::{BeltError, BeltResult};
use glam::{Quat, Vec3};

/// Host-side object creation
pub trait ObjectFactory {
    /// Create one object at the given world pose
    fn create(&mut self, position: Vec3, orientation: Quat) -> BeltResult<ObjectHandle>;
}

impl<F> ObjectFactory for F
where
    F: FnMut(Vec3, Quat) -> BeltResult<ObjectHandle>,
{
    fn create(&mut self, position: Vec3, orientation: Quat) -> BeltResult<ObjectHandle> {
        self(position, orientation)
    }
}

/// Minimal host stand-in: hands out sequential handles and records spawn poses
#[derive(Debug, Default)]
pub struct TransformRegistry {
    spawned: Vec<TransformData>,
    capacity: Option<usize>,
}

impl TransformRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that fails once `capacity` objects exist
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            spawned: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.spawned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty()
    }

    /// Pose an object was created with
    pub fn spawn_pose(&self, handle: ObjectHandle) -> Option<&TransformData> {
        self.spawned.get(handle.0 as usize)
    }
}

impl ObjectFactory for TransformRegistry {
    fn create(&mut self, position: Vec3, orientation: Quat) -> BeltResult<ObjectHandle> {
        if let Some(capacity) = self.capacity {
            if self.spawned.len() >= capacity {
                return Err(BeltError::FactoryExhausted { capacity });
            }
        }

        let id = u32::try_from(self.spawned.len()).map_err(|_| BeltError::FactoryExhausted {
            capacity: u32::MAX as usize,
        })?;
        self.spawned.push(TransformData {
            position,
            rotation: orientation,
        });

        log::trace!("[TransformRegistry::create] Object {} at {:?}", id, position);
        Ok(ObjectHandle(id))
    }
}
