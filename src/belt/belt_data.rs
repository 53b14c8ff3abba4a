//! Belt data structures
//!
//! Configuration and per-tick reporting types. The controller that owns the
//! batch lives in belt_controller.rs, the free functions in belt_operations.rs

use crate::constants::belt::{
    DEFAULT_DENSITY, DEFAULT_HEIGHT, DEFAULT_INNER_RADIUS, DEFAULT_MAX_ORBIT_SPEED,
    DEFAULT_MAX_ROTATION_SPEED, DEFAULT_MIN_ORBIT_SPEED, DEFAULT_MIN_ROTATION_SPEED,
    DEFAULT_OUTER_RADIUS, DEFAULT_SEED,
};
use crate::orbit::{OrbitScaling, RotationSense};
use crate::transform::{ObjectHandle, TransformData};
use serde::{Deserialize, Serialize};

/// Inclusive range a speed is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

/// When per-object speeds and spin axes are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpeedSampling {
    /// Fresh draw for every object on every tick
    #[default]
    PerTick,
    /// One draw per object at initialization, reused every tick
    PerObject,
}

/// Belt configuration, fixed for the lifetime of a belt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeltConfig {
    /// Number of objects spawned
    pub density: usize,

    /// Seed for every random draw the belt makes
    pub seed: u64,

    /// Spawn annulus, measured in the pivot's local XZ plane
    pub inner_radius: f32,
    pub outer_radius: f32,

    /// Full thickness of the spawn band along the pivot's local Y
    pub height: f32,

    pub sense: RotationSense,

    /// Spin speed about each object's own axis
    pub orbit_speed: SpeedRange,

    /// Sweep speed around the pivot
    pub rotation_speed: SpeedRange,

    pub speed_sampling: SpeedSampling,

    pub scaling: OrbitScaling,
}

/// The batch-access handle: objects in index order
#[derive(Debug, Clone, Default)]
pub struct BeltBatch {
    pub handles: Vec<ObjectHandle>,
    pub transforms: Vec<TransformData>,
}

/// What one tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickStats {
    /// 1-based count of completed ticks
    pub tick: u64,
    pub objects_updated: usize,
    pub elapsed: f32,
}

impl SpeedRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

impl Default for BeltConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            seed: DEFAULT_SEED,
            inner_radius: DEFAULT_INNER_RADIUS,
            outer_radius: DEFAULT_OUTER_RADIUS,
            height: DEFAULT_HEIGHT,
            sense: RotationSense::Clockwise,
            orbit_speed: SpeedRange::new(DEFAULT_MIN_ORBIT_SPEED, DEFAULT_MAX_ORBIT_SPEED),
            rotation_speed: SpeedRange::new(DEFAULT_MIN_ROTATION_SPEED, DEFAULT_MAX_ROTATION_SPEED),
            speed_sampling: SpeedSampling::PerTick,
            scaling: OrbitScaling::default(),
        }
    }
}
