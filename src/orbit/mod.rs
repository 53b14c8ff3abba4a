/// Orbit Module - the per-object orbit update
///
/// - orbit_data.rs: Per-tick and per-object job inputs
/// - orbit_operations.rs: The pure update function and its helpers

pub mod orbit_data;
pub mod orbit_operations;

pub use orbit_data::{FrameParameters, OrbitJobData, OrbitScaling, RotationSense};

pub use orbit_operations::{
    axis_angle, execute_orbit_job, orientation_angle, position_angle, rotate_about_pivot,
    sense_sign, spin_orientation,
};
