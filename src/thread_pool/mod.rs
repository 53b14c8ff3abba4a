//! Thread Pool - executors for the per-tick transform pass

pub mod thread_pool_data;
pub mod thread_pool_operations;

pub use thread_pool_data::{SequentialExecutor, ThreadPoolConfig};
#[cfg(feature = "native")]
pub use thread_pool_data::TransformThreadPool;

pub use thread_pool_operations::{create_transform_thread_pool, TransformBatchExecutor};
