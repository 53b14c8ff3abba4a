use super::*;
use crate::error::{BeltError, BeltResult};
use crate::orbit::RotationSense;
use crate::thread_pool::SequentialExecutor;
use crate::transform::{ObjectHandle, TransformData, TransformRegistry};
use glam::{Quat, Vec3};
use std::f32::consts::{PI, TAU};

const EPSILON: f32 = 1e-3;

fn tilted_pivot() -> TransformData {
    TransformData {
        position: Vec3::new(100.0, -20.0, 35.0),
        rotation: Quat::from_rotation_x(0.6) * Quat::from_rotation_y(2.1),
    }
}

fn belt_config(density: usize) -> BeltConfig {
    BeltConfig {
        density,
        seed: 1234,
        inner_radius: 20.0,
        outer_radius: 30.0,
        height: 6.0,
        ..BeltConfig::default()
    }
}

fn spawn(config: BeltConfig, pivot: TransformData) -> BeltController<SequentialExecutor> {
    let mut registry = TransformRegistry::new();
    BeltController::initialize(config, pivot, &mut registry, SequentialExecutor)
        .expect("belt should initialize")
}

fn assert_in_band(belt: &BeltController<SequentialExecutor>) {
    let config = belt.config().clone();
    for index in 0..belt.len() {
        let local = belt.local_position(index).expect("index in range");
        let radius = (local.x * local.x + local.z * local.z).sqrt();

        assert!(
            radius >= config.inner_radius - EPSILON && radius <= config.outer_radius + EPSILON,
            "object {} at radius {}",
            index,
            radius
        );
        assert!(
            local.y.abs() <= config.height / 2.0 + EPSILON,
            "object {} at height {}",
            index,
            local.y
        );
    }
}

#[test]
fn test_spawn_within_annulus_and_band() {
    let belt = spawn(belt_config(500), tilted_pivot());

    assert_eq!(belt.len(), 500);
    assert_eq!(belt.handles().len(), 500);
    assert_in_band(&belt);
}

#[test]
fn test_single_object_on_exact_radius() {
    let config = BeltConfig {
        density: 1,
        seed: 0,
        inner_radius: 10.0,
        outer_radius: 10.0,
        height: 0.0,
        ..BeltConfig::default()
    };
    let belt = spawn(config, TransformData::default());

    let local = belt.local_position(0).expect("one object");
    let radius = (local.x * local.x + local.z * local.z).sqrt();
    assert!((radius - 10.0).abs() < 1e-5, "radius {}", radius);
    assert_eq!(local.y, 0.0);
}

#[test]
fn test_handles_match_factory() {
    let mut registry = TransformRegistry::new();
    let belt = BeltController::initialize(
        belt_config(8),
        tilted_pivot(),
        &mut registry,
        SequentialExecutor,
    )
    .expect("belt should initialize");

    assert_eq!(registry.len(), 8);
    for (index, handle) in belt.handles().iter().enumerate() {
        assert_eq!(*handle, ObjectHandle(index as u32));
        assert_eq!(registry.spawn_pose(*handle), Some(&belt.transforms()[index]));
    }
}

#[test]
fn test_same_seed_same_belt() {
    let mut a = spawn(belt_config(64), tilted_pivot());
    let mut b = spawn(belt_config(64), tilted_pivot());
    assert_eq!(a.transforms(), b.transforms());

    for _ in 0..10 {
        a.tick(0.016).expect("tick");
        b.tick(0.016).expect("tick");
    }
    assert_eq!(a.transforms(), b.transforms());

    let c = spawn(
        BeltConfig {
            seed: 4321,
            ..belt_config(64)
        },
        tilted_pivot(),
    );
    assert_ne!(spawn(belt_config(64), tilted_pivot()).transforms(), c.transforms());
}

#[cfg(feature = "native")]
#[test]
fn test_thread_pool_matches_sequential() {
    use crate::thread_pool::{create_transform_thread_pool, ThreadPoolConfig};

    let pool = create_transform_thread_pool(ThreadPoolConfig {
        num_threads: 4,
        min_batch_len: 16,
        ..ThreadPoolConfig::default()
    })
    .expect("pool");

    let mut registry = TransformRegistry::new();
    let mut parallel =
        BeltController::initialize(belt_config(1000), tilted_pivot(), &mut registry, pool)
            .expect("belt should initialize");
    let mut sequential = spawn(belt_config(1000), tilted_pivot());

    for _ in 0..5 {
        let stats = parallel.tick(0.02).expect("tick");
        sequential.tick(0.02).expect("tick");
        assert_eq!(stats.objects_updated, 1000);
    }

    assert_eq!(parallel.transforms(), sequential.transforms());
}

#[test]
fn test_tick_keeps_objects_in_band() {
    let mut belt = spawn(belt_config(200), tilted_pivot());

    for _ in 0..100 {
        belt.tick(1.0).expect("tick");
    }

    // Orbiting about the pivot's up-axis never leaves the spawn band
    assert_in_band(&belt);
}

#[test]
fn test_zero_elapsed_tick_is_noop() {
    let mut belt = spawn(belt_config(32), tilted_pivot());
    let before = belt.transforms().to_vec();

    belt.tick(0.0).expect("tick");

    for (old, new) in before.iter().zip(belt.transforms()) {
        assert!(old.position.abs_diff_eq(new.position, 1e-4));
        assert!(old.rotation.abs_diff_eq(new.rotation, 1e-5));
    }
}

#[test]
fn test_tick_moves_objects() {
    let mut belt = spawn(belt_config(16), TransformData::default());
    let before = belt.transforms().to_vec();

    let stats = belt.tick(10.0).expect("tick");
    assert_eq!(stats.tick, 1);
    assert_eq!(stats.objects_updated, 16);
    assert_eq!(belt.ticks(), 1);

    for (old, new) in before.iter().zip(belt.transforms()) {
        assert!(!old.position.abs_diff_eq(new.position, 1e-4));
    }
}

#[test]
fn test_sense_controls_sweep_direction() {
    let mut config = BeltConfig {
        density: 1,
        inner_radius: 10.0,
        outer_radius: 10.0,
        height: 0.0,
        ..BeltConfig::default()
    };
    let mut clockwise = spawn(config.clone(), TransformData::default());
    config.sense = RotationSense::Counterclockwise;
    let mut counter = spawn(config, TransformData::default());

    let start = clockwise.transforms()[0].position;
    assert_eq!(start, counter.transforms()[0].position);

    clockwise.tick(100.0).expect("tick");
    counter.tick(100.0).expect("tick");

    let swept = |end: Vec3| {
        let delta = end.z.atan2(end.x) - start.z.atan2(start.x);
        (delta + PI).rem_euclid(TAU) - PI
    };
    let swept_cw = swept(clockwise.transforms()[0].position);
    let swept_ccw = swept(counter.transforms()[0].position);

    // Rotation speed 1 / correction 1000 * 100s = 0.1 rad either way
    assert!((swept_cw + 0.1).abs() < EPSILON, "{}", swept_cw);
    assert!((swept_ccw - 0.1).abs() < EPSILON, "{}", swept_ccw);
}

#[test]
fn test_per_tick_sampling_redraws() {
    let mut belt = spawn(belt_config(8), tilted_pivot());
    assert!(belt.job_parameters().is_empty());

    belt.tick(0.016).expect("tick");
    let first = belt.job_parameters().to_vec();
    belt.tick(0.016).expect("tick");
    let second = belt.job_parameters().to_vec();

    assert_eq!(first.len(), 8);
    assert_eq!(second.len(), 8);
    assert_ne!(first, second);
    for job in &second {
        assert!((1.0..=1.5).contains(&job.orbit_speed));
        assert_eq!(job.self_rotation_speed, 1.0);
    }
}

#[test]
fn test_per_object_sampling_is_stable() {
    let config = BeltConfig {
        speed_sampling: SpeedSampling::PerObject,
        ..belt_config(8)
    };
    let mut belt = spawn(config, tilted_pivot());

    let drawn = belt.job_parameters().to_vec();
    assert_eq!(drawn.len(), 8);

    for _ in 0..5 {
        belt.tick(0.016).expect("tick");
        assert_eq!(belt.job_parameters(), drawn.as_slice());
    }
}

#[test]
fn test_invalid_config_spawns_nothing() {
    let mut registry = TransformRegistry::new();
    let config = BeltConfig {
        inner_radius: 40.0,
        outer_radius: 10.0,
        ..BeltConfig::default()
    };

    let result = BeltController::initialize(
        config,
        TransformData::default(),
        &mut registry,
        SequentialExecutor,
    );

    assert!(matches!(result, Err(BeltError::InvalidConfig { .. })));
    assert!(registry.is_empty());
}

#[test]
fn test_factory_failure_aborts_initialize() {
    let mut created = 0u32;
    let mut factory = |_: Vec3, _: Quat| -> BeltResult<ObjectHandle> {
        if created == 2 {
            return Err(BeltError::FactoryExhausted { capacity: 2 });
        }
        created += 1;
        Ok(ObjectHandle(created))
    };

    let result = BeltController::initialize(
        belt_config(5),
        TransformData::default(),
        &mut factory,
        SequentialExecutor,
    );

    match result {
        Err(BeltError::ObjectCreation { index, reason }) => {
            assert_eq!(index, 2);
            assert!(reason.contains("capacity exhausted"));
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_teardown_twice() {
    let mut belt = spawn(belt_config(10), tilted_pivot());

    assert!(belt.teardown());
    assert!(!belt.teardown());

    assert!(belt.is_released());
    assert!(belt.is_empty());
    assert!(belt.transforms().is_empty());
    assert!(belt.handles().is_empty());
    assert_eq!(belt.tick(0.016), Err(BeltError::BatchReleased));
    assert_eq!(belt.local_position(0), Err(BeltError::BatchReleased));
    // Dropping after an explicit teardown must not release again
}

#[test]
fn test_set_pivot_carries_objects_along() {
    let mut belt = spawn(belt_config(20), TransformData::default());
    let local_before: Vec<Vec3> = (0..belt.len())
        .map(|index| belt.local_position(index).expect("index in range"))
        .collect();

    belt.set_pivot(tilted_pivot());

    assert_eq!(belt.pivot(), &tilted_pivot());
    assert_in_band(&belt);
    for (index, before) in local_before.iter().enumerate() {
        let after = belt.local_position(index).expect("index in range");
        assert!(after.abs_diff_eq(*before, EPSILON), "{:?} vs {:?}", after, before);
    }

    // Subsequent ticks orbit the new pivot
    for _ in 0..20 {
        belt.tick(5.0).expect("tick");
    }
    assert_in_band(&belt);
}

#[test]
fn test_set_pivot_after_teardown() {
    let mut belt = spawn(belt_config(4), TransformData::default());
    belt.teardown();

    belt.set_pivot(tilted_pivot());
    assert_eq!(belt.pivot(), &tilted_pivot());
    assert!(belt.transforms().is_empty());
}

#[test]
fn test_local_position_bounds() {
    let belt = spawn(belt_config(3), TransformData::default());
    assert_eq!(
        belt.local_position(3),
        Err(BeltError::IndexOutOfBounds { index: 3, len: 3 })
    );
}

#[test]
fn test_instance_data_follows_transforms() {
    let belt = spawn(belt_config(4), tilted_pivot());
    let instances = belt.instance_data();

    assert_eq!(instances.len(), 4);
    for (instance, transform) in instances.iter().zip(belt.transforms()) {
        let translation = instance.model_matrix[3];
        assert!((translation[0] - transform.position.x).abs() < 1e-4);
        assert!((translation[1] - transform.position.y).abs() < 1e-4);
        assert!((translation[2] - transform.position.z).abs() < 1e-4);
    }
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: BeltConfig =
        serde_json::from_str(r#"{ "density": 12, "sense": "Counterclockwise" }"#)
            .expect("partial config");

    assert_eq!(config.density, 12);
    assert_eq!(config.sense, RotationSense::Counterclockwise);
    assert_eq!(config.inner_radius, BeltConfig::default().inner_radius);
    assert!(validate_belt_config(&config).is_ok());
}
