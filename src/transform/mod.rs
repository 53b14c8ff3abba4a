/// Transform Module - Data-Oriented style
///
/// - transform_data.rs: Pure data structures
/// - transform_operations.rs: Pure functions that operate on data
/// - object_factory.rs: The host's object-creation seam

pub mod object_factory;
pub mod transform_data;
pub mod transform_operations;

// Re-export data structures
pub use transform_data::{ObjectHandle, OrbitInstanceRaw, TransformData};

pub use object_factory::{ObjectFactory, TransformRegistry};

// Re-export all operations
pub use transform_operations::{
    build_instance_raw, create_transform, local_to_world, reparent_transform, transform_matrix,
    transform_up, world_to_local,
};
