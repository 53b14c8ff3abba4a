//! Orbit job data structures
//!
//! NO METHODS beyond defaults. Just data.
//! The per-object update lives in orbit_operations.rs

use crate::constants::orbit::{ORBIT_SPEED_CORRECTION, ROTATION_SPEED_CORRECTION};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Direction the belt sweeps around its pivot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RotationSense {
    /// Positive angle about the pivot's up-axis
    #[default]
    Clockwise,
    /// Negative angle about the pivot's up-axis
    Counterclockwise,
}

/// Shared per-tick snapshot, broadcast read-only to every worker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParameters {
    /// Pivot position in world space
    pub pivot_position: Vec3,

    /// Pivot up-axis in world space
    pub pivot_up: Vec3,

    /// Seconds since the previous tick
    pub elapsed: f32,
}

/// Per-object inputs for one orbit update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitJobData {
    /// Spin rate about `rotation_direction` (scaled by the orbit correction)
    pub orbit_speed: f32,

    /// Sweep rate around the pivot (scaled by the rotation correction)
    pub self_rotation_speed: f32,

    /// Axis of the object's own spin; normalized at use
    pub rotation_direction: Vec3,

    pub sense: RotationSense,
}

/// Unit-scaling divisors applied to the raw speeds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitScaling {
    /// Divides `self_rotation_speed`
    pub rotation_speed_correction: f32,

    /// Divides `orbit_speed`
    pub orbit_speed_correction: f32,
}

impl Default for OrbitScaling {
    fn default() -> Self {
        Self {
            rotation_speed_correction: ROTATION_SPEED_CORRECTION,
            orbit_speed_correction: ORBIT_SPEED_CORRECTION,
        }
    }
}

impl Default for OrbitJobData {
    fn default() -> Self {
        Self {
            orbit_speed: 0.0,
            self_rotation_speed: 0.0,
            rotation_direction: Vec3::Y,
            sense: RotationSense::Clockwise,
        }
    }
}
