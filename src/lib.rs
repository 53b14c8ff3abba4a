// Orbit Belt - procedural belt spawner with a parallel per-tick orbit pass
//
// Data-oriented layout:
// - *_data modules hold plain data
// - *_operations modules hold pure functions over that data
// - BeltController is the one stateful owner: it holds the batch and drives
//   initialize / tick / teardown from the host's frame loop
//
// The host engine plugs in through two seams:
// - transform::ObjectFactory creates the spawned objects
// - thread_pool::TransformBatchExecutor runs the per-object pass

// Constants module
pub mod constants;

pub mod error;

// Core modules
pub mod belt;
pub mod orbit;
pub mod transform;

// Execution
pub mod thread_pool;

pub use belt::{BeltConfig, BeltController, SpeedRange, SpeedSampling, TickStats};
pub use error::{BeltError, BeltResult, OptionExt};
pub use orbit::{execute_orbit_job, FrameParameters, OrbitJobData, OrbitScaling, RotationSense};
pub use thread_pool::{
    create_transform_thread_pool, SequentialExecutor, ThreadPoolConfig, TransformBatchExecutor,
};
#[cfg(feature = "native")]
pub use thread_pool::TransformThreadPool;
pub use transform::{ObjectFactory, ObjectHandle, OrbitInstanceRaw, TransformData, TransformRegistry};

// Re-export glam so hosts build poses with the same math types
pub use glam;
