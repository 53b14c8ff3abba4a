//! Orbit operations - the per-object update run on every worker
//!
//! All functions are pure: they take data, return new data, no side effects.
//! Safe to evaluate for any subset of objects, in any order, on any thread.

use super::orbit_data::{FrameParameters, OrbitJobData, OrbitScaling, RotationSense};
use crate::transform::TransformData;
use glam::{Quat, Vec3};

/// +1 for clockwise, -1 for counterclockwise
pub fn sense_sign(sense: RotationSense) -> f32 {
    match sense {
        RotationSense::Clockwise => 1.0,
        RotationSense::Counterclockwise => -1.0,
    }
}

/// Signed sweep angle around the pivot for this update (radians)
pub fn position_angle(job: &OrbitJobData, scaling: &OrbitScaling, elapsed: f32) -> f32 {
    sense_sign(job.sense) * job.self_rotation_speed / scaling.rotation_speed_correction * elapsed
}

/// Spin angle about the object's rotation-direction axis for this update (radians)
pub fn orientation_angle(job: &OrbitJobData, scaling: &OrbitScaling, elapsed: f32) -> f32 {
    job.orbit_speed / scaling.orbit_speed_correction * elapsed
}

/// Rotation about an arbitrary axis; identity when the axis is degenerate
pub fn axis_angle(axis: Vec3, angle: f32) -> Quat {
    match axis.try_normalize() {
        Some(axis) => Quat::from_axis_angle(axis, angle),
        None => Quat::IDENTITY,
    }
}

/// Rotate `position` about the line through `pivot` along `axis`
pub fn rotate_about_pivot(position: Vec3, pivot: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    axis_angle(axis, angle) * (position - pivot) + pivot
}

/// Post-multiply `rotation` by a spin about `axis`
pub fn spin_orientation(rotation: Quat, axis: Vec3, angle: f32) -> Quat {
    (rotation * axis_angle(axis, angle)).normalize()
}

/// Advance one object by one tick
pub fn execute_orbit_job(
    transform: &TransformData,
    frame: &FrameParameters,
    job: &OrbitJobData,
    scaling: &OrbitScaling,
) -> TransformData {
    let position = rotate_about_pivot(
        transform.position,
        frame.pivot_position,
        frame.pivot_up,
        position_angle(job, scaling, frame.elapsed),
    );

    let rotation = spin_orientation(
        transform.rotation,
        job.rotation_direction,
        orientation_angle(job, scaling, frame.elapsed),
    );

    TransformData { position, rotation }
}
