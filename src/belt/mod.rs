/// Belt Module
///
/// Procedural belt spawning and the per-tick orbit pass.
/// - belt_data.rs: Configuration and reporting data
/// - belt_operations.rs: Validation, seeded draws, spawning
/// - belt_controller.rs: Owns the batch and drives the lifecycle

pub mod belt_controller;
pub mod belt_data;
pub mod belt_operations;

pub use belt_controller::BeltController;
pub use belt_data::{BeltBatch, BeltConfig, SpeedRange, SpeedSampling, TickStats};
pub use belt_operations::{
    build_frame_parameters, create_belt_rng, draw_job_parameters, fill_job_parameters,
    sample_orientation, sample_rotation_direction, sample_spawn_local, sample_speed,
    spawn_belt_objects, validate_belt_config,
};

#[cfg(test)]
mod tests;
