//! Belt demo
//!
//! Spawns a belt around a tilted pivot and drives it from a fixed-timestep
//! loop, logging where a few objects end up.
//!
//! Run with `RUST_LOG=info cargo run --example belt_demo`

use anyhow::Result;
use orbit_belt::{
    create_transform_thread_pool,
    glam::{Quat, Vec3},
    BeltConfig, BeltController, SpeedRange, ThreadPoolConfig, TransformData, TransformRegistry,
};

const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FRAMES: u32 = 600;

fn main() -> Result<()> {
    env_logger::init();

    println!("Orbit belt demo");

    let config = BeltConfig {
        density: 2_000,
        seed: 42,
        inner_radius: 40.0,
        outer_radius: 55.0,
        height: 6.0,
        orbit_speed: SpeedRange::new(1.0, 1.5),
        rotation_speed: SpeedRange::new(40.0, 60.0),
        ..BeltConfig::default()
    };

    let pivot = TransformData {
        position: Vec3::new(0.0, 10.0, 0.0),
        rotation: Quat::from_rotation_x(0.2),
    };

    let pool = create_transform_thread_pool(ThreadPoolConfig::default())?;
    let mut registry = TransformRegistry::new();
    let mut belt = BeltController::initialize(config, pivot, &mut registry, pool)?;

    println!("[OK] Spawned {} objects", registry.len());

    let start: Vec<Vec3> = (0..3)
        .map(|index| belt.local_position(index))
        .collect::<Result<_, _>>()?;

    for frame in 0..FRAMES {
        let stats = belt.tick(FIXED_TIMESTEP)?;
        if frame % 120 == 0 {
            log::info!("frame {}: {} objects updated", frame, stats.objects_updated);
        }
    }

    for (index, before) in start.iter().enumerate() {
        let after = belt.local_position(index)?;
        println!(
            "object {}: local {:?} -> {:?} (radius {:.3} -> {:.3})",
            index,
            before,
            after,
            Vec3::new(before.x, 0.0, before.z).length(),
            Vec3::new(after.x, 0.0, after.z).length()
        );
    }

    println!("[OK] {} ticks", belt.ticks());
    belt.teardown();

    Ok(())
}
