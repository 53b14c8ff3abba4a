//! Thread Pool Data
use crate::constants::workers::{DEFAULT_MIN_BATCH_LEN, THREAD_NAME_PREFIX};

/// Worker pool configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadPoolConfig {
    /// Worker count; 0 lets rayon pick
    pub num_threads: usize,

    /// Smallest contiguous slice a worker takes per split
    pub min_batch_len: usize,

    /// Workers are named `{prefix}-{index}`
    pub thread_name_prefix: String,
}

/// Dedicated rayon pool for the per-tick transform pass
#[cfg(feature = "native")]
#[derive(Debug)]
pub struct TransformThreadPool {
    pub(crate) pool: rayon::ThreadPool,
    pub(crate) config: ThreadPoolConfig,
}

/// Runs the transform pass on the calling thread
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialExecutor;

impl Default for ThreadPoolConfig {
    fn default() -> Self {
        #[cfg(feature = "native")]
        let num_threads = num_cpus::get();
        #[cfg(not(feature = "native"))]
        let num_threads = 1;

        Self {
            num_threads,
            min_batch_len: DEFAULT_MIN_BATCH_LEN,
            thread_name_prefix: THREAD_NAME_PREFIX.to_string(),
        }
    }
}
