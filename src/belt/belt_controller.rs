/// Belt Controller
///
/// Owns the fixed batch of belt objects and drives one parallel orbit pass per
/// tick. Lifecycle is explicit: `initialize` spawns, `tick` advances, and
/// `teardown` (or drop) releases the batch.
use super::belt_data::{BeltBatch, BeltConfig, SpeedSampling, TickStats};
use super::belt_operations::{
    build_frame_parameters, create_belt_rng, fill_job_parameters, spawn_belt_objects,
    validate_belt_config,
};
use crate::error::{BeltError, BeltResult, OptionExt};
use crate::orbit::{execute_orbit_job, OrbitJobData};
use crate::thread_pool::TransformBatchExecutor;
use crate::transform::{
    build_instance_raw, reparent_transform, world_to_local, ObjectFactory, ObjectHandle,
    OrbitInstanceRaw, TransformData,
};
use glam::Vec3;
use rand::rngs::StdRng;

pub struct BeltController<E: TransformBatchExecutor> {
    config: BeltConfig,

    /// Belt reference transform; orbits happen about its position and up-axis
    pivot: TransformData,

    rng: StdRng,

    executor: E,

    /// `None` once torn down
    batch: Option<BeltBatch>,

    /// Per-object inputs for the next pass, index-aligned with the batch
    job_parameters: Vec<OrbitJobData>,

    ticks: u64,
}

impl<E: TransformBatchExecutor> BeltController<E> {
    /// Validate `config`, spawn every object through `factory`, and take
    /// ownership of the resulting batch
    pub fn initialize<F: ObjectFactory + ?Sized>(
        config: BeltConfig,
        pivot: TransformData,
        factory: &mut F,
        executor: E,
    ) -> BeltResult<Self> {
        log::debug!(
            "[BeltController::initialize] Spawning {} objects (seed {})",
            config.density,
            config.seed
        );

        validate_belt_config(&config).map_err(|e| {
            log::error!("[BeltController::initialize] Configuration rejected: {}", e);
            e
        })?;

        let mut rng = create_belt_rng(config.seed);
        let batch = spawn_belt_objects(&config, &pivot, &mut rng, factory)?;

        let mut job_parameters = Vec::with_capacity(config.density);
        if config.speed_sampling == SpeedSampling::PerObject {
            fill_job_parameters(&mut rng, &config, &mut job_parameters, config.density);
        }

        log::info!(
            "[BeltController::initialize] Belt ready: {} objects, radius {}..{}, height {}, {:?}",
            batch.transforms.len(),
            config.inner_radius,
            config.outer_radius,
            config.height,
            config.speed_sampling
        );

        Ok(Self {
            config,
            pivot,
            rng,
            executor,
            batch: Some(batch),
            job_parameters,
            ticks: 0,
        })
    }

    /// Advance every object by `elapsed` seconds; returns once all are updated
    pub fn tick(&mut self, elapsed: f32) -> BeltResult<TickStats> {
        let batch = self.batch.as_mut().ok_or_belt(|| BeltError::BatchReleased)?;
        let count = batch.transforms.len();

        if self.config.speed_sampling == SpeedSampling::PerTick {
            fill_job_parameters(&mut self.rng, &self.config, &mut self.job_parameters, count);
        }

        let frame = build_frame_parameters(&self.pivot, elapsed);
        let scaling = self.config.scaling;
        let jobs = &self.job_parameters;
        debug_assert_eq!(jobs.len(), count);

        self.executor
            .for_each_transform(&mut batch.transforms, |index, transform| {
                if let Some(job) = jobs.get(index) {
                    *transform = execute_orbit_job(transform, &frame, job, &scaling);
                }
            });

        self.ticks += 1;
        log::trace!(
            "[BeltController::tick] Tick {} moved {} objects by {}s",
            self.ticks,
            count,
            elapsed
        );

        Ok(TickStats {
            tick: self.ticks,
            objects_updated: count,
            elapsed,
        })
    }

    /// Release the batch. Returns false if it was already released.
    pub fn teardown(&mut self) -> bool {
        match self.batch.take() {
            Some(batch) => {
                log::info!(
                    "[BeltController::teardown] Released {} objects after {} ticks",
                    batch.handles.len(),
                    self.ticks
                );
                self.job_parameters.clear();
                true
            }
            None => {
                log::debug!("[BeltController::teardown] Batch already released");
                false
            }
        }
    }

    /// Move the belt reference transform. Objects are parented to the pivot,
    /// so each keeps its local pose and moves along with it.
    pub fn set_pivot(&mut self, pivot: TransformData) {
        let old_pivot = self.pivot;
        self.pivot = pivot;

        if let Some(batch) = self.batch.as_mut() {
            let new_pivot = &self.pivot;
            self.executor
                .for_each_transform(&mut batch.transforms, |_, transform| {
                    *transform = reparent_transform(&old_pivot, new_pivot, transform);
                });
        }
    }

    pub fn config(&self) -> &BeltConfig {
        &self.config
    }

    pub fn pivot(&self) -> &TransformData {
        &self.pivot
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_released(&self) -> bool {
        self.batch.is_none()
    }

    /// Object count; zero once released
    pub fn len(&self) -> usize {
        self.batch.as_ref().map_or(0, |batch| batch.transforms.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// World poses in index order; empty once released
    pub fn transforms(&self) -> &[TransformData] {
        self.batch
            .as_ref()
            .map(|batch| batch.transforms.as_slice())
            .unwrap_or(&[])
    }

    /// Host handles in index order; empty once released
    pub fn handles(&self) -> &[ObjectHandle] {
        self.batch
            .as_ref()
            .map(|batch| batch.handles.as_slice())
            .unwrap_or(&[])
    }

    /// Inputs used by the most recent pass (or drawn at initialization for
    /// per-object sampling)
    pub fn job_parameters(&self) -> &[OrbitJobData] {
        &self.job_parameters
    }

    /// Position of one object in the pivot's local frame
    pub fn local_position(&self, index: usize) -> BeltResult<Vec3> {
        let batch = self.batch.as_ref().ok_or_belt(|| BeltError::BatchReleased)?;
        let transform = batch
            .transforms
            .get(index)
            .ok_or_belt(|| BeltError::IndexOutOfBounds {
                index,
                len: batch.transforms.len(),
            })?;

        Ok(world_to_local(&self.pivot, transform.position))
    }

    /// Model matrices for instanced rendering, in index order
    pub fn instance_data(&self) -> Vec<OrbitInstanceRaw> {
        self.transforms().iter().map(build_instance_raw).collect()
    }
}

impl<E: TransformBatchExecutor> Drop for BeltController<E> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<E: TransformBatchExecutor> std::fmt::Debug for BeltController<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeltController")
            .field("config", &self.config)
            .field("pivot", &self.pivot)
            .field("objects", &self.len())
            .field("ticks", &self.ticks)
            .field("released", &self.is_released())
            .finish()
    }
}
