//! Headless tests for the arm rigs and the smack gesture wiring.
//!
//! [`MinimalPlugins`] only — the spring and gesture systems are exercised as
//! plain ECS systems, without stepping physics. The gesture math itself is
//! covered by unit tests next to the state machine; these tests pin down the
//! ECS plumbing: component attachment, preemption through a full rig, and
//! the hinge/attractor writeback.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use shrimp_tank::arm::{
    arm_spring_system, spawn_arms, Arm, ArmSpring, Attractor, Hinge,
};
use shrimp_tank::config::SimConfig;
use shrimp_tank::gesture::{
    attach_gesture_system, gesture_advance_system, start_smack, AttractorAnim, HingeAnim,
    SmackGesture,
};
use shrimp_tank::tween::{Easing, ScalarTween};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Headless app with both arm rigs spawned and gesture slots attached.
fn rigged_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(SimConfig::default());
    app.add_systems(Startup, spawn_arms);
    app.add_systems(
        Update,
        (attach_gesture_system, gesture_advance_system).chain(),
    );
    app.update();
    app
}

fn arm_entities(app: &mut App) -> Vec<Entity> {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<Arm>>();
    query.iter(world).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Every spawned arm gets a gesture slot, idle by default.
#[test]
fn every_arm_gets_an_idle_gesture_slot() {
    let mut app = rigged_app();
    let arms = arm_entities(&mut app);
    assert_eq!(arms.len(), 2);
    for entity in arms {
        let gesture = app
            .world()
            .entity(entity)
            .get::<SmackGesture>()
            .expect("arm must carry a gesture slot");
        assert!(gesture.is_idle());
    }
}

/// Starting a smack on a rig arms exactly one animation per track.
#[test]
fn smack_arms_one_animation_per_track() {
    let mut app = rigged_app();
    let config = SimConfig::default();
    let arms = arm_entities(&mut app);

    for entity in arms {
        let way = app.world().entity(entity).get::<Arm>().unwrap().way;
        let mut entity_mut = app.world_mut().entity_mut(entity);
        let mut gesture = entity_mut.take::<SmackGesture>().unwrap();
        let mut spring = entity_mut.take::<ArmSpring>().unwrap();

        let mut attractor_x = 0.0;
        start_smack(
            &mut gesture,
            &mut spring,
            &mut attractor_x,
            Vec3::new(2.0 * way, -1.0, 0.0),
            way,
            config.hinge_rest_y,
            &config,
        );
        assert!(matches!(
            gesture.attractor_anim,
            Some(AttractorAnim::Wobble(_))
        ));
        assert!(matches!(gesture.hinge_anim, Some(HingeAnim::Raising(_))));
        assert_eq!(spring.stiffness, config.spring_stiffness);

        entity_mut.insert((gesture, spring));
    }
}

/// The advance system writes a finished raise to the hinge transform and
/// flips the track to lowering — through the real ECS rig, not the helpers.
#[test]
fn advance_system_moves_the_hinge() {
    let mut app = rigged_app();
    let config = SimConfig::default();
    let arms = arm_entities(&mut app);
    let arm_entity = arms[0];
    let hinge_entity = app
        .world()
        .entity(arm_entity)
        .get::<Arm>()
        .unwrap()
        .hinge;

    let apex = -6.0;
    {
        let mut entity_mut = app.world_mut().entity_mut(arm_entity);
        let mut gesture = entity_mut.get_mut::<SmackGesture>().unwrap();
        // Zero duration: completes on the first advance regardless of the
        // frame delta.
        gesture.hinge_anim = Some(HingeAnim::Raising(ScalarTween::new(
            config.hinge_rest_y,
            apex,
            0.0,
            Easing::QuadIn,
        )));
    }

    app.update();

    let hinge = app
        .world()
        .entity(hinge_entity)
        .get::<Transform>()
        .unwrap();
    assert!(
        (hinge.translation.y - apex).abs() < 1e-4,
        "hinge should have been driven to the apex, got {}",
        hinge.translation.y
    );
    let gesture = app
        .world()
        .entity(arm_entity)
        .get::<SmackGesture>()
        .unwrap();
    assert!(matches!(gesture.hinge_anim, Some(HingeAnim::Lowering(_))));
}

/// The spring system keeps each attractor's height glued to its paw and pulls
/// a displaced paw back toward the attractor.
#[test]
fn spring_tracks_height_and_pulls_home() {
    let mut app = rigged_app();
    app.add_systems(Update, arm_spring_system);

    let arms = arm_entities(&mut app);
    let arm_entity = arms[0];
    let attractor_entity = app
        .world()
        .entity(arm_entity)
        .get::<Arm>()
        .unwrap()
        .attractor;

    // Displace the paw sideways and down.
    let displaced = {
        let mut entity_mut = app.world_mut().entity_mut(arm_entity);
        let mut transform = entity_mut.get_mut::<Transform>().unwrap();
        transform.translation += Vec3::new(2.0, -1.5, 0.0);
        transform.translation
    };

    app.update();

    let attractor = app
        .world()
        .entity(attractor_entity)
        .get::<Transform>()
        .unwrap();
    assert_eq!(
        attractor.translation.y, displaced.y,
        "attractor height must track the paw"
    );

    let force = app
        .world()
        .entity(arm_entity)
        .get::<ExternalForce>()
        .unwrap();
    assert!(
        force.force.x < 0.0,
        "spring must pull the displaced paw back toward its rest x"
    );
    assert_eq!(
        force.force.y, 0.0,
        "height-tracking attractor leaves the vertical axis to gravity"
    );
}

/// Hinges are kinematic and attractors are plain transforms: neither may ever
/// carry a dynamic body the solver could push around.
#[test]
fn rig_anchors_are_not_dynamic_bodies() {
    let mut app = rigged_app();
    let world = app.world_mut();

    let mut hinges = world.query_filtered::<&RigidBody, With<Hinge>>();
    for body in hinges.iter(world) {
        assert_eq!(*body, RigidBody::KinematicPositionBased);
    }

    let mut attractors = world.query_filtered::<Option<&RigidBody>, With<Attractor>>();
    for body in attractors.iter(world) {
        assert!(body.is_none(), "attractors are bookkeeping, not bodies");
    }
}
