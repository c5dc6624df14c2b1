//! Vehicle lifecycle controller.
//!
//! Vehicles are the tank's intruders: heavy boxes that barge in from the left
//! edge on a key press, plough through the shrimp, and drive out the right
//! side. Same force model as the shrimp (constant lateral thrust against
//! quadratic drag) but fifty times the mass, so collisions feel one-sided.

use crate::collision::{surface, Layer};
use crate::config::SimConfig;
use crate::forces::{apply_drag, apply_thrust};
use crate::frustum::FrustumSlice;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

/// The two vehicle variants, picked at random per spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Van,
    SmallCar,
}

impl VehicleKind {
    /// Body dimensions (length, height, depth) in world units.
    pub fn dimensions(self) -> Vec3 {
        match self {
            VehicleKind::Van => Vec3::new(4.4, 2.2, 1.8),
            VehicleKind::SmallCar => Vec3::new(3.0, 1.5, 1.4),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        if rng.gen_bool(0.5) {
            VehicleKind::SmallCar
        } else {
            VehicleKind::Van
        }
    }
}

/// Marker component for vehicle entities; keeps the kind around for the
/// width-aware cull check.
#[derive(Component, Debug, Clone, Copy)]
pub struct Vehicle {
    pub kind: VehicleKind,
}

/// Whether a vehicle at `x` has fully driven out of the visible region,
/// accounting for its own length.
pub fn past_exit_boundary(x: f32, half_width: f32, vehicle_length: f32) -> bool {
    x > half_width + vehicle_length / 2.0
}

/// Spawn one vehicle just outside the left frustum edge at a random height
/// inside the delimiter gap, with a strong lateral entry impulse.
pub fn spawn_vehicle(
    commands: &mut Commands,
    config: &SimConfig,
    slice: &FrustumSlice,
    rng: &mut impl Rng,
) -> Entity {
    let kind = VehicleKind::random(rng);
    let dimensions = kind.dimensions();
    let max_x = slice.half_width();
    let coefficients = surface(Layer::Vehicle);

    let position = Vec3::new(
        -max_x - dimensions.x,
        rng.gen_range(0.0..(config.vertical_gap / 2.0 - dimensions.y / 2.0)),
        0.0,
    );

    commands
        .spawn((
            (
                Transform::from_translation(position),
                GlobalTransform::default(),
                Vehicle { kind },
                RigidBody::Dynamic,
                Collider::cuboid(dimensions.x / 2.0, dimensions.y / 2.0, dimensions.z / 2.0),
                ColliderMassProperties::Mass(config.vehicle_mass),
            ),
            (
                Layer::Vehicle.groups(),
                Friction::coefficient(coefficients.friction),
                Restitution::coefficient(coefficients.restitution),
                Velocity::zero(),
                Damping {
                    linear_damping: 0.0,
                    angular_damping: config.vehicle_angular_damping,
                },
                ExternalForce::default(),
                ExternalImpulse {
                    // give it a push!
                    impulse: Vec3::new(config.vehicle_entry_impulse, 0.0, 0.0),
                    torque_impulse: Vec3::ZERO,
                },
                ActiveEvents::COLLISION_EVENTS,
                Sleeping::disabled(),
            ),
        ))
        .id()
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Spawn a vehicle on Space or Enter.
pub fn vehicle_input_system(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<SimConfig>,
    slice: Res<FrustumSlice>,
) {
    if keys.just_pressed(KeyCode::Space) || keys.just_pressed(KeyCode::Enter) {
        let mut rng = rand::thread_rng();
        spawn_vehicle(&mut commands, &config, &slice, &mut rng);
    }
}

/// Apply the water forces to every live vehicle.
pub fn vehicle_force_system(
    mut query: Query<(&mut ExternalForce, &Velocity), With<Vehicle>>,
    config: Res<SimConfig>,
) {
    for (mut force, velocity) in query.iter_mut() {
        apply_drag(&mut force, velocity, config.vehicle_drag_coefficient);
        apply_thrust(&mut force, Vec3::new(config.vehicle_thrust, 0.0, 0.0));
    }
}

/// Remove vehicles that have fully driven out of the visible region.
pub fn vehicle_cull_system(
    mut commands: Commands,
    query: Query<(Entity, &Transform, &Vehicle)>,
    slice: Res<FrustumSlice>,
) {
    for (entity, transform, vehicle) in query.iter() {
        if past_exit_boundary(
            transform.translation.x,
            slice.half_width(),
            vehicle.kind.dimensions().x,
        ) {
            commands.entity(entity).despawn();
        }
    }
}
