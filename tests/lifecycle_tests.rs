//! Headless lifecycle tests: spawning, forces, and culling.
//!
//! These tests use [`MinimalPlugins`] — no window, no rendering, no physics
//! stepping — so they run fast and deterministically in CI. Rapier components
//! (`ExternalForce`, `Velocity`) are plain ECS data here; what's under test is
//! the controllers' bookkeeping, not the solver.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use std::time::Duration;

use shrimp_tank::config::SimConfig;
use shrimp_tank::constants::MAX_DELTA_TIME;
use shrimp_tank::frustum::FrustumSlice;
use shrimp_tank::shrimp::{
    shrimp_cull_system, shrimp_force_system, shrimp_spawn_system, Shrimp, ShrimpSpawner,
};
use shrimp_tank::simulation::clear_forces_system;
use shrimp_tank::vehicle::{vehicle_cull_system, Vehicle, VehicleKind};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Headless app with the shared simulation resources and a known view size.
fn tank_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(SimConfig::default());
    app.insert_resource(FrustumSlice {
        width: 20.0,
        height: 12.0,
    });
    app
}

fn count_shrimp(app: &mut App) -> usize {
    let world = app.world_mut();
    let mut query = world.query_filtered::<(), With<Shrimp>>();
    query.iter(world).count()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The spawner fires on its very first poll, so the first frame already
/// produces a shrimp.
#[test]
fn first_frame_spawns_a_shrimp() {
    let mut app = tank_app();
    app.insert_resource(ShrimpSpawner::new(4.0));
    app.add_systems(Update, shrimp_spawn_system);

    app.update();

    assert_eq!(count_shrimp(&mut app), 1, "first poll must spawn");
}

/// A freshly spawned shrimp carries the full physics kit: dynamic body,
/// compound collider, entry impulse, force accumulator.
#[test]
fn spawned_shrimp_is_fully_equipped() {
    let mut app = tank_app();
    app.insert_resource(ShrimpSpawner::new(4.0));
    app.add_systems(Update, shrimp_spawn_system);
    app.update();

    let world = app.world_mut();
    let mut query = world.query_filtered::<(
        &Transform,
        &ExternalImpulse,
        Option<&ExternalForce>,
        Option<&Collider>,
    ), With<Shrimp>>();
    let (transform, impulse, force, collider) = query.single(world).expect("one shrimp");

    assert!(
        transform.translation.y > 0.0,
        "shrimp must enter from above the tank midline"
    );
    assert!(impulse.impulse.y < 0.0, "entry impulse must point down");
    assert!(force.is_some(), "shrimp needs a force accumulator");
    assert!(collider.is_some(), "shrimp needs a collider");
}

/// A shrimp past the exit margin is removed within a single tick.
#[test]
fn exit_side_shrimp_is_culled_in_one_tick() {
    let mut app = tank_app();
    app.add_systems(Update, shrimp_cull_system);

    // half_width = 10, margin 1.3 → boundary at x = 13.
    let escaped = app
        .world_mut()
        .spawn((Shrimp, Transform::from_xyz(13.5, 0.0, 0.0)))
        .id();
    let inside = app
        .world_mut()
        .spawn((Shrimp, Transform::from_xyz(12.5, 0.0, 0.0)))
        .id();

    app.update();

    assert!(
        app.world().get_entity(escaped).is_err(),
        "escaped shrimp must be gone after one tick"
    );
    assert!(
        app.world().get_entity(inside).is_ok(),
        "shrimp inside the margin must survive"
    );
}

/// Vehicle culling waits for the whole body to clear the edge, not just its
/// center.
#[test]
fn vehicle_culling_is_width_aware() {
    let mut app = tank_app();
    app.add_systems(Update, vehicle_cull_system);

    let van = Vehicle {
        kind: VehicleKind::Van,
    };
    // half_width = 10, van length 4.4 → boundary at x = 12.2.
    let nose_out = app
        .world_mut()
        .spawn((van, Transform::from_xyz(11.0, 0.0, 0.0)))
        .id();
    let fully_out = app
        .world_mut()
        .spawn((van, Transform::from_xyz(12.5, 0.0, 0.0)))
        .id();

    app.update();

    assert!(
        app.world().get_entity(nose_out).is_ok(),
        "vehicle with its tail still visible must survive"
    );
    assert!(
        app.world().get_entity(fully_out).is_err(),
        "vehicle fully past the edge must be culled"
    );
}

/// Forces are cleared and re-accumulated each frame — running two frames
/// leaves the same thrust as one, not double.
#[test]
fn forces_do_not_accumulate_across_frames() {
    let mut app = tank_app();
    app.add_systems(Update, (clear_forces_system, shrimp_force_system).chain());

    let shrimp = app
        .world_mut()
        .spawn((
            Shrimp,
            Transform::default(),
            Velocity::zero(),
            ExternalForce::default(),
        ))
        .id();

    app.update();
    let after_one = app
        .world()
        .entity(shrimp)
        .get::<ExternalForce>()
        .unwrap()
        .force;

    app.update();
    let after_two = app
        .world()
        .entity(shrimp)
        .get::<ExternalForce>()
        .unwrap()
        .force;

    let thrust = SimConfig::default().shrimp_thrust;
    assert_eq!(after_one.x, thrust);
    assert_eq!(
        after_one, after_two,
        "per-frame forces must not stack across frames"
    );
}

/// The virtual clock's max delta matches the configured physics clamp, so a
/// stalled frame can never feed a multi-second step into the solver.
#[test]
fn frame_delta_is_clamped() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(Time::<Virtual>::from_max_delta(Duration::from_secs_f32(
        MAX_DELTA_TIME,
    )));
    app.update();

    let time = app.world().resource::<Time<Virtual>>();
    assert_eq!(
        time.max_delta(),
        Duration::from_secs_f32(MAX_DELTA_TIME),
        "max frame delta must equal the configured clamp"
    );
}
