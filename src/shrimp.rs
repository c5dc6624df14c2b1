//! Shrimp lifecycle controller: irregular-interval spawning, per-frame water
//! forces, and visibility-driven culling.
//!
//! Shrimp drop into the tank from above the visible region, tumble under a
//! downward entry impulse, then drift across the tank pushed by a constant
//! lateral current against quadratic water drag. Once a shrimp has fully
//! left the visible region on the exit side it is despawned — body, collider
//! and visual proxy go together because they live on one entity.

use crate::cadence::SpawnCadence;
use crate::collision::{surface, Layer};
use crate::config::SimConfig;
use crate::forces::{apply_drag, apply_thrust};
use crate::frustum::FrustumSlice;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use rand::Rng;

/// Marker component for shrimp entities.
#[derive(Component, Debug, Clone, Copy)]
pub struct Shrimp;

/// Spawn-timing state for the shrimp controller.
#[derive(Resource, Debug)]
pub struct ShrimpSpawner(pub SpawnCadence);

impl ShrimpSpawner {
    pub fn new(base_interval: f32) -> Self {
        Self(SpawnCadence::new(base_interval))
    }
}

/// Whether a body at `x` has fully left the visible region on the exit side.
pub fn past_exit_boundary(x: f32, half_width: f32, margin: f32) -> bool {
    x > half_width * margin
}

/// The shrimp collision shape: three offset, tilted cylinders approximating
/// the curled body (tail, bend, head).
pub fn shrimp_collider() -> Collider {
    Collider::compound(vec![
        (
            Vec3::new(0.7, -0.05, -0.15),
            Quat::from_rotation_y(5.0_f32.to_radians()),
            Collider::cylinder(0.7, 0.4),
        ),
        (
            Vec3::new(0.0, 0.0, -0.65),
            Quat::from_rotation_y(70.0_f32.to_radians()),
            Collider::cylinder(0.7, 0.3),
        ),
        (
            Vec3::new(-0.7, 0.0, 0.1),
            Quat::from_rotation_y(-40.0_f32.to_radians()),
            Collider::cylinder(1.0, 0.2),
        ),
    ])
}

/// Spawn one shrimp just above the visible region with a random roll and a
/// downward entry impulse.
pub fn spawn_shrimp(
    commands: &mut Commands,
    config: &SimConfig,
    slice: &FrustumSlice,
    rng: &mut impl Rng,
) -> Entity {
    let max_x = slice.half_width();
    let coefficients = surface(Layer::Shrimp);

    let position = Vec3::new(
        // a bit left of center, never at the exit edge
        rng.gen_range(-max_x..max_x * 0.3),
        // just above the visible volume
        (config.vertical_gap / 2.0) * 1.2,
        0.0,
    );
    let orientation = Quat::from_euler(
        EulerRot::XYZ,
        0.0,
        rng.gen_range(0.0..std::f32::consts::PI),
        rng.gen_range(0.0..std::f32::consts::PI),
    );

    commands
        .spawn((
            (
                Transform::from_translation(position).with_rotation(orientation),
                GlobalTransform::default(),
                Shrimp,
                RigidBody::Dynamic,
                shrimp_collider(),
                ColliderMassProperties::Mass(config.shrimp_mass),
            ),
            (
                Layer::Shrimp.groups(),
                Friction::coefficient(coefficients.friction),
                Restitution::coefficient(coefficients.restitution),
                Velocity::zero(),
                Damping {
                    // movement damping is handled by the drag force
                    linear_damping: 0.0,
                    angular_damping: config.shrimp_angular_damping,
                },
                ExternalForce::default(),
                ExternalImpulse {
                    // give them a push down!
                    impulse: Vec3::new(0.0, config.shrimp_drop_impulse, 0.0),
                    torque_impulse: Vec3::ZERO,
                },
                ActiveEvents::COLLISION_EVENTS,
                Sleeping::disabled(),
            ),
        ))
        .id()
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Spawn new shrimp when the irregular interval elapses.
pub fn shrimp_spawn_system(
    mut commands: Commands,
    mut spawner: ResMut<ShrimpSpawner>,
    config: Res<SimConfig>,
    slice: Res<FrustumSlice>,
    time: Res<Time>,
) {
    let mut rng = rand::thread_rng();
    if spawner
        .0
        .fire(time.elapsed_secs(), config.shrimp_spawn_interval, &mut rng)
    {
        spawn_shrimp(&mut commands, &config, &slice, &mut rng);
    }
}

/// Apply the water forces to every live shrimp: quadratic drag plus the
/// constant lateral current.
pub fn shrimp_force_system(
    mut query: Query<(&mut ExternalForce, &Velocity), With<Shrimp>>,
    config: Res<SimConfig>,
) {
    for (mut force, velocity) in query.iter_mut() {
        apply_drag(&mut force, velocity, config.shrimp_drag_coefficient);
        apply_thrust(&mut force, Vec3::new(config.shrimp_thrust, 0.0, 0.0));
    }
}

/// Remove shrimp that have fully left the visible region on the exit side.
pub fn shrimp_cull_system(
    mut commands: Commands,
    query: Query<(Entity, &Transform), With<Shrimp>>,
    config: Res<SimConfig>,
    slice: Res<FrustumSlice>,
) {
    for (entity, transform) in query.iter() {
        if past_exit_boundary(
            transform.translation.x,
            slice.half_width(),
            config.shrimp_cull_margin,
        ) {
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_boundary_has_a_margin_past_the_edge() {
        let half_width = 10.0;
        // Still visible, still inside the margin: kept.
        assert!(!past_exit_boundary(9.9, half_width, 1.3));
        assert!(!past_exit_boundary(12.9, half_width, 1.3));
        // Past the margin: culled.
        assert!(past_exit_boundary(13.1, half_width, 1.3));
        // The entry side is never culled.
        assert!(!past_exit_boundary(-100.0, half_width, 1.3));
    }

    #[test]
    fn shrimp_collider_is_a_three_part_compound() {
        let collider = shrimp_collider();
        let compound = collider
            .raw
            .as_compound()
            .expect("shrimp collider must be a compound shape");
        assert_eq!(compound.shapes().len(), 3);
    }
}
