//! Belt operations - validation, random draws and spawning
//!
//! Every random draw goes through the belt's single seeded generator, always in
//! index order, so a seed fully determines spawn poses and per-tick speeds.

use super::belt_data::{BeltBatch, BeltConfig, SpeedRange};
use crate::constants::belt::FULL_TURN_DEGREES;
use crate::error::{BeltError, BeltResult};
use crate::orbit::{FrameParameters, OrbitJobData};
use crate::transform::{local_to_world, transform_up, ObjectFactory, TransformData};
use glam::{EulerRot, Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

// ============================================================================
// VALIDATION
// ============================================================================

fn validate_non_negative(field: &str, value: f32) -> BeltResult<()> {
    if !value.is_finite() {
        return Err(BeltError::invalid_config(field, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(BeltError::invalid_config(field, value, "must not be negative"));
    }
    Ok(())
}

fn validate_speed_range(field: &str, range: &SpeedRange) -> BeltResult<()> {
    validate_non_negative(&format!("{}.min", field), range.min)?;
    validate_non_negative(&format!("{}.max", field), range.max)?;
    if range.min > range.max {
        return Err(BeltError::invalid_config(
            field,
            format!("{}..{}", range.min, range.max),
            "min exceeds max",
        ));
    }
    Ok(())
}

fn validate_correction(field: &str, value: f32) -> BeltResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BeltError::invalid_config(field, value, "must be finite and positive"));
    }
    Ok(())
}

/// Reject configurations that would spawn a degenerate belt
pub fn validate_belt_config(config: &BeltConfig) -> BeltResult<()> {
    if config.density == 0 {
        return Err(BeltError::invalid_config(
            "density",
            config.density,
            "belt needs at least one object",
        ));
    }

    validate_non_negative("inner_radius", config.inner_radius)?;
    validate_non_negative("outer_radius", config.outer_radius)?;
    validate_non_negative("height", config.height)?;

    if config.outer_radius < config.inner_radius {
        return Err(BeltError::invalid_config(
            "outer_radius",
            config.outer_radius,
            format!("smaller than inner_radius {}", config.inner_radius),
        ));
    }

    validate_speed_range("orbit_speed", &config.orbit_speed)?;
    validate_speed_range("rotation_speed", &config.rotation_speed)?;

    validate_correction(
        "scaling.rotation_speed_correction",
        config.scaling.rotation_speed_correction,
    )?;
    validate_correction(
        "scaling.orbit_speed_correction",
        config.scaling.orbit_speed_correction,
    )?;

    log::debug!("[validate_belt_config] Configuration validated: {:?}", config);
    Ok(())
}

// ============================================================================
// RANDOM DRAWS
// ============================================================================

pub fn create_belt_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Uniform draw from an inclusive speed range
pub fn sample_speed(rng: &mut StdRng, range: &SpeedRange) -> f32 {
    rng.gen_range(range.min..=range.max)
}

/// Uniform point in the annulus and height band, in the pivot's local frame
pub fn sample_spawn_local(rng: &mut StdRng, config: &BeltConfig) -> Vec3 {
    let radius = rng.gen_range(config.inner_radius..=config.outer_radius);
    let angle = rng.gen_range(0.0..TAU);
    let half_height = config.height / 2.0;
    let y = rng.gen_range(-half_height..=half_height);

    Vec3::new(radius * angle.cos(), y, radius * angle.sin())
}

fn sample_degrees(rng: &mut StdRng) -> f32 {
    rng.gen_range(0.0..FULL_TURN_DEGREES)
}

/// Orientation from three independent Euler angles (Z, then X, then Y)
pub fn sample_orientation(rng: &mut StdRng) -> Quat {
    let x = sample_degrees(rng).to_radians();
    let y = sample_degrees(rng).to_radians();
    let z = sample_degrees(rng).to_radians();

    Quat::from_euler(EulerRot::YXZ, y, x, z)
}

/// Spin axis built from three independent angles; normalized at use
pub fn sample_rotation_direction(rng: &mut StdRng) -> Vec3 {
    let x = sample_degrees(rng);
    let y = sample_degrees(rng);
    let z = sample_degrees(rng);

    Vec3::new(x, y, z)
}

/// One object's speeds and spin axis
pub fn draw_job_parameters(rng: &mut StdRng, config: &BeltConfig) -> OrbitJobData {
    let orbit_speed = sample_speed(rng, &config.orbit_speed);
    let self_rotation_speed = sample_speed(rng, &config.rotation_speed);
    let rotation_direction = sample_rotation_direction(rng);

    OrbitJobData {
        orbit_speed,
        self_rotation_speed,
        rotation_direction,
        sense: config.sense,
    }
}

/// Redraw `count` job parameters into `jobs`, reusing its allocation
pub fn fill_job_parameters(
    rng: &mut StdRng,
    config: &BeltConfig,
    jobs: &mut Vec<OrbitJobData>,
    count: usize,
) {
    jobs.clear();
    jobs.extend((0..count).map(|_| draw_job_parameters(rng, config)));
}

// ============================================================================
// FRAME / SPAWN
// ============================================================================

/// Snapshot the pivot for one tick
pub fn build_frame_parameters(pivot: &TransformData, elapsed: f32) -> FrameParameters {
    FrameParameters {
        pivot_position: pivot.position,
        pivot_up: transform_up(pivot),
        elapsed,
    }
}

/// Spawn `config.density` objects around `pivot` through `factory`
///
/// Stops at the first factory failure; objects created before it are left to
/// the host.
pub fn spawn_belt_objects<F: ObjectFactory + ?Sized>(
    config: &BeltConfig,
    pivot: &TransformData,
    rng: &mut StdRng,
    factory: &mut F,
) -> BeltResult<BeltBatch> {
    let mut batch = BeltBatch {
        handles: Vec::with_capacity(config.density),
        transforms: Vec::with_capacity(config.density),
    };

    for index in 0..config.density {
        let local = sample_spawn_local(rng, config);
        let position = local_to_world(pivot, local);
        let rotation = sample_orientation(rng);

        let handle = factory.create(position, rotation).map_err(|e| {
            log::error!(
                "[spawn_belt_objects] Factory failed at index {}: {}",
                index,
                e
            );
            BeltError::ObjectCreation {
                index,
                reason: e.to_string(),
            }
        })?;

        batch.handles.push(handle);
        batch.transforms.push(TransformData { position, rotation });
    }

    Ok(batch)
}
