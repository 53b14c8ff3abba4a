//! Thread Pool Operations
//!
//! The batch-transform seam and its two executors. Every executor returns only
//! after the job has run for every element of the batch.

use super::thread_pool_data::{SequentialExecutor, ThreadPoolConfig};
use crate::error::BeltResult;
use crate::transform::TransformData;
use std::sync::Arc;

#[cfg(feature = "native")]
use super::thread_pool_data::TransformThreadPool;
#[cfg(feature = "native")]
use crate::error::BeltError;
#[cfg(feature = "native")]
use rayon::prelude::*;

/// Parallel for-each over a fixed batch of transforms, with a completion barrier
///
/// `job` receives the element's index in the batch and exclusive access to it.
/// Implementations may run elements in any order and on any thread.
pub trait TransformBatchExecutor {
    fn for_each_transform<F>(&self, batch: &mut [TransformData], job: F)
    where
        F: Fn(usize, &mut TransformData) + Send + Sync;
}

impl<E: TransformBatchExecutor + ?Sized> TransformBatchExecutor for Arc<E> {
    fn for_each_transform<F>(&self, batch: &mut [TransformData], job: F)
    where
        F: Fn(usize, &mut TransformData) + Send + Sync,
    {
        (**self).for_each_transform(batch, job)
    }
}

impl TransformBatchExecutor for SequentialExecutor {
    fn for_each_transform<F>(&self, batch: &mut [TransformData], job: F)
    where
        F: Fn(usize, &mut TransformData) + Send + Sync,
    {
        for (index, transform) in batch.iter_mut().enumerate() {
            job(index, transform);
        }
    }
}

/// Build the worker pool
#[cfg(feature = "native")]
pub fn create_transform_thread_pool(config: ThreadPoolConfig) -> BeltResult<TransformThreadPool> {
    let prefix = config.thread_name_prefix.clone();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .thread_name(move |index| format!("{}-{}", prefix, index))
        .build()
        .map_err(|e| BeltError::ThreadPool(e.to_string()))?;

    log::info!(
        "[create_transform_thread_pool] {} workers, min batch {}",
        pool.current_num_threads(),
        config.min_batch_len
    );

    Ok(TransformThreadPool { pool, config })
}

/// Sequential fallback for targets without threads
#[cfg(not(feature = "native"))]
pub fn create_transform_thread_pool(config: ThreadPoolConfig) -> BeltResult<SequentialExecutor> {
    log::info!(
        "[create_transform_thread_pool] Threads unavailable, running sequentially ({:?})",
        config
    );
    Ok(SequentialExecutor)
}

#[cfg(feature = "native")]
impl TransformThreadPool {
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn config(&self) -> &ThreadPoolConfig {
        &self.config
    }
}

#[cfg(feature = "native")]
impl TransformBatchExecutor for TransformThreadPool {
    fn for_each_transform<F>(&self, batch: &mut [TransformData], job: F)
    where
        F: Fn(usize, &mut TransformData) + Send + Sync,
    {
        let min_len = self.config.min_batch_len.max(1);
        self.pool.install(|| {
            batch
                .par_iter_mut()
                .enumerate()
                .with_min_len(min_len)
                .for_each(|(index, transform)| job(index, transform));
        });
    }
}
