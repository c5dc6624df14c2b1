//! The two spring-driven arms and their hinge rigs.
//!
//! Each arm is a dynamic compound body (paw sphere, forearm and upper-arm
//! cylinders) pinned to a kinematic hinge through a revolute joint, so it can
//! only swing in the tank plane. A manual spring pulls the paw toward an
//! attractor point; at rest the attractor sits at the paw's natural position,
//! and the gesture machinery animates it (and the hinge height) to perform a
//! smack. The spring is applied per frame rather than as a joint motor so the
//! gesture can retune its stiffness mid-flight.

use crate::collision::{surface, Layer};
use crate::config::SimConfig;
use crate::constants::{
    ARM_DAMPING, ARM_HEIGHT, ARM_MASS, ARM_WIDTH, FOREARM_HEIGHT, FOREARM_WIDTH, PAW_RADIUS,
};
use crate::forces::apply_spring;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// A dynamic arm body. `way` is the side sign: +1 for the arm on +X, -1 for
/// the mirrored arm on -X.
#[derive(Component, Debug)]
pub struct Arm {
    pub way: f32,
    pub hinge: Entity,
    pub attractor: Entity,
}

/// Live spring parameters for one arm; the gesture relaxes `stiffness` while
/// a finished smack settles.
#[derive(Component, Debug)]
pub struct ArmSpring {
    pub stiffness: f32,
    pub damping: f32,
}

/// The kinematic pivot an arm swings around.
#[derive(Component, Debug)]
pub struct Hinge;

/// The point the arm's spring pulls the paw toward.
#[derive(Component, Debug)]
pub struct Attractor;

/// Paw-relative resting position of the arm body for a given side.
pub fn arm_rest_position(config: &SimConfig, way: f32) -> Vec3 {
    Vec3::new(
        (config.arms_space / 2.0) * way,
        config.hinge_rest_y + FOREARM_HEIGHT * 1.9,
        0.0,
    )
}

/// The arm collision shape: paw sphere at the origin, forearm hanging below
/// it, upper arm below that, both slightly tilted outward.
pub fn arm_collider() -> Collider {
    Collider::compound(vec![
        (Vec3::ZERO, Quat::IDENTITY, Collider::ball(PAW_RADIUS)),
        (
            Vec3::new(0.2, -FOREARM_HEIGHT / 2.0, 0.0),
            Quat::from_rotation_z(7.0_f32.to_radians()),
            Collider::cylinder(FOREARM_HEIGHT / 2.0, FOREARM_WIDTH / 2.0),
        ),
        (
            Vec3::new(0.9, -(ARM_HEIGHT / 2.0 + ARM_HEIGHT) * 0.98, 0.0),
            Quat::from_rotation_z(20.0_f32.to_radians()),
            Collider::cylinder(ARM_HEIGHT / 2.0, ARM_WIDTH / 2.0),
        ),
    ])
}

/// Spawn one arm rig: hinge, attractor, and the dynamic arm body jointed to
/// the hinge. Returns the arm entity.
pub fn spawn_arm(commands: &mut Commands, config: &SimConfig, way: f32) -> Entity {
    let coefficients = surface(Layer::Arm);
    let paw_position = arm_rest_position(config, way);
    let hinge_position = Vec3::new((config.arms_space / 2.0) * way, config.hinge_rest_y, 0.0);

    let hinge = commands
        .spawn((
            Transform::from_translation(hinge_position),
            GlobalTransform::default(),
            Hinge,
            RigidBody::KinematicPositionBased,
        ))
        .id();

    let attractor = commands
        .spawn((
            Transform::from_translation(paw_position),
            GlobalTransform::default(),
            Attractor,
        ))
        .id();

    // The -X arm is the same body mirrored about the Y axis.
    let orientation = if way < 0.0 {
        Quat::from_rotation_y(std::f32::consts::PI)
    } else {
        Quat::IDENTITY
    };

    // Revolute about Z: the arm can only swing in the tank plane. The arm-side
    // anchor sits at the shoulder end of the upper-arm cylinder.
    let joint = RevoluteJointBuilder::new(Vec3::Z)
        .local_anchor1(Vec3::ZERO)
        .local_anchor2(Vec3::new(PAW_RADIUS * 1.5, -FOREARM_HEIGHT * 2.0, 0.0));

    commands
        .spawn((
            (
                Transform::from_translation(paw_position).with_rotation(orientation),
                GlobalTransform::default(),
                Arm {
                    way,
                    hinge,
                    attractor,
                },
                ArmSpring {
                    stiffness: config.spring_stiffness,
                    damping: config.spring_damping,
                },
                RigidBody::Dynamic,
                arm_collider(),
                ColliderMassProperties::Mass(ARM_MASS),
            ),
            (
                Layer::Arm.groups(),
                Friction::coefficient(coefficients.friction),
                Restitution::coefficient(coefficients.restitution),
                Velocity::zero(),
                Damping {
                    linear_damping: 0.0,
                    angular_damping: ARM_DAMPING,
                },
                ExternalForce::default(),
                ExternalImpulse::default(),
                ImpulseJoint::new(hinge, joint),
                ActiveEvents::COLLISION_EVENTS,
                Sleeping::disabled(),
            ),
        ))
        .id()
}

/// Startup system: spawn both arms.
pub fn spawn_arms(mut commands: Commands, config: Res<SimConfig>) {
    for way in [-1.0, 1.0] {
        spawn_arm(&mut commands, &config, way);
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Pull each paw toward its attractor.
///
/// The attractor's height tracks the paw every frame, so the spring only
/// steers laterally; vertical motion comes from the hinge animation, gravity
/// and the upright guard.
pub fn arm_spring_system(
    mut arms: Query<(&Transform, &Velocity, &mut ExternalForce, &Arm, &ArmSpring)>,
    mut attractors: Query<&mut Transform, (With<Attractor>, Without<Arm>)>,
) {
    for (transform, velocity, mut force, arm, spring) in arms.iter_mut() {
        let Ok(mut attractor) = attractors.get_mut(arm.attractor) else {
            continue;
        };
        attractor.translation.y = transform.translation.y;
        apply_spring(
            &mut force,
            velocity,
            transform.translation,
            attractor.translation,
            spring.stiffness,
            spring.damping,
        );
    }
}

/// Kick an arm back up whenever a hard smack has folded it below its hinge.
///
/// An inverted arm would otherwise hang there: the revolute joint is happy
/// either way and the spring has no vertical component.
pub fn arm_upright_guard_system(
    mut arms: Query<(&Transform, &mut ExternalImpulse, &Arm)>,
    hinges: Query<&Transform, (With<Hinge>, Without<Arm>)>,
    config: Res<SimConfig>,
) {
    for (transform, mut impulse, arm) in arms.iter_mut() {
        let Ok(hinge) = hinges.get(arm.hinge) else {
            continue;
        };
        if transform.translation.y - 2.0 < hinge.translation.y {
            impulse.impulse += Vec3::new(0.0, config.arm_upright_impulse, 0.0);
        }
    }
}
