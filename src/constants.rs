//! Belt constants
//!
//! Tunables and default parameters shared across the belt modules.

/// Speed-correction tunables for the orbit pass
pub mod orbit {
    /// Divisor turning a self-rotation speed into radians per second of orbit
    /// around the pivot. Unit-scaling tunable, not a derived quantity.
    pub const ROTATION_SPEED_CORRECTION: f32 = 1000.0;

    /// Divisor turning an orbit speed into radians per second of spin about
    /// the object's own rotation-direction axis. Unit-scaling tunable.
    pub const ORBIT_SPEED_CORRECTION: f32 = 10000.0;
}

/// Default belt parameters
pub mod belt {
    pub const DEFAULT_DENSITY: usize = 50;
    pub const DEFAULT_SEED: u64 = 0;
    pub const DEFAULT_INNER_RADIUS: f32 = 25.0;
    pub const DEFAULT_OUTER_RADIUS: f32 = 25.0;
    pub const DEFAULT_HEIGHT: f32 = 5.0;

    pub const DEFAULT_MIN_ORBIT_SPEED: f32 = 1.0;
    pub const DEFAULT_MAX_ORBIT_SPEED: f32 = 1.5;
    pub const DEFAULT_MIN_ROTATION_SPEED: f32 = 1.0;
    pub const DEFAULT_MAX_ROTATION_SPEED: f32 = 1.0;

    /// Upper bound of each random Euler / direction component (degrees)
    pub const FULL_TURN_DEGREES: f32 = 360.0;
}

/// Worker pool defaults
pub mod workers {
    /// Smallest slice handed to a single worker during a tick
    pub const DEFAULT_MIN_BATCH_LEN: usize = 64;

    pub const THREAD_NAME_PREFIX: &str = "orbit-worker";
}
