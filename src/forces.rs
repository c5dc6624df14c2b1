//! Body-force utilities shared by the lifecycle controllers and the arms.
//!
//! Free functions that accumulate into a body's [`ExternalForce`] rather than
//! methods on a body subclass: every force here is a world-frame force at the
//! center of mass, applied once per frame between the force-clear system and
//! the physics step.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Accumulate a constant world-frame thrust at the center of mass.
pub fn apply_thrust(force: &mut ExternalForce, thrust: Vec3) {
    force.force += thrust;
}

/// Accumulate a quadratic drag force opposing the current velocity:
/// `Fd = -coefficient · |v|² · v̂`.
///
/// A body at rest receives no drag (the unit vector is undefined at zero
/// speed, so this guards rather than emitting NaNs). Under constant thrust
/// this drag gives a finite terminal speed `sqrt(thrust / coefficient)`.
pub fn apply_drag(force: &mut ExternalForce, velocity: &Velocity, coefficient: f32) {
    let speed = velocity.linvel.length();
    if speed <= f32::EPSILON {
        return;
    }
    let drag_magnitude = coefficient * speed * speed;
    force.force -= velocity.linvel / speed * drag_magnitude;
}

/// Accumulate a damped spring force pulling `body_pos` toward `anchor`
/// (rest length zero): `F = -k·x - c·v`.
pub fn apply_spring(
    force: &mut ExternalForce,
    velocity: &Velocity,
    body_pos: Vec3,
    anchor: Vec3,
    stiffness: f32,
    damping: f32,
) {
    let displacement = body_pos - anchor;
    force.force -= displacement * stiffness + velocity.linvel * damping;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_force() -> ExternalForce {
        ExternalForce {
            force: Vec3::ZERO,
            torque: Vec3::ZERO,
        }
    }

    #[test]
    fn drag_opposes_velocity_with_squared_magnitude() {
        let mut force = zero_force();
        let velocity = Velocity {
            linvel: Vec3::new(3.0, 0.0, 0.0),
            angvel: Vec3::ZERO,
        };
        apply_drag(&mut force, &velocity, 0.5);
        // |v| = 3 → drag = 0.5 · 9 = 4.5 along -x
        assert!((force.force.x + 4.5).abs() < 1e-5, "got {}", force.force.x);
        assert_eq!(force.force.y, 0.0);
        assert_eq!(force.force.z, 0.0);
    }

    #[test]
    fn drag_at_rest_is_zero_and_finite() {
        let mut force = zero_force();
        let velocity = Velocity::zero();
        apply_drag(&mut force, &velocity, 0.8);
        assert_eq!(force.force, Vec3::ZERO);
        assert!(force.force.is_finite());
    }

    #[test]
    fn thrust_accumulates_instead_of_overwriting() {
        let mut force = zero_force();
        apply_thrust(&mut force, Vec3::new(0.6, 0.0, 0.0));
        apply_thrust(&mut force, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(force.force, Vec3::new(0.6, 1.0, 0.0));
    }

    #[test]
    fn spring_pulls_toward_anchor() {
        let mut force = zero_force();
        let velocity = Velocity::zero();
        let body = Vec3::new(2.0, 0.0, 0.0);
        let anchor = Vec3::new(-1.0, 0.0, 0.0);
        apply_spring(&mut force, &velocity, body, anchor, 120.0, 1.0);
        // displacement = +3 along x → force = -360 along x, toward the anchor
        assert!((force.force.x + 360.0).abs() < 1e-3, "got {}", force.force.x);
    }

    #[test]
    fn spring_damping_opposes_velocity() {
        let mut force = zero_force();
        let velocity = Velocity {
            linvel: Vec3::new(0.0, 5.0, 0.0),
            angvel: Vec3::ZERO,
        };
        // Body exactly at the anchor: only the damping term remains.
        apply_spring(&mut force, &velocity, Vec3::ZERO, Vec3::ZERO, 120.0, 2.0);
        assert_eq!(force.force, Vec3::new(0.0, -10.0, 0.0));
    }

    /// Under constant thrust + quadratic drag the speed converges to the
    /// analytic terminal value `sqrt(thrust / drag)` and never diverges,
    /// for any positive drag coefficient.
    #[test]
    fn thrust_plus_drag_converges_to_terminal_velocity() {
        let thrust = 0.6_f32;
        let drag = 0.8_f32;
        let mass = 1.0;
        let dt = 1.0 / 60.0;
        let terminal = (thrust / drag).sqrt();

        let mut velocity = Velocity::zero();
        let mut x = 0.0_f32;
        let mut prev_x = 0.0_f32;

        for step in 0..6000 {
            let mut force = zero_force();
            apply_thrust(&mut force, Vec3::new(thrust, 0.0, 0.0));
            apply_drag(&mut force, &velocity, drag);
            velocity.linvel += force.force / mass * dt;
            x += velocity.linvel.x * dt;

            assert!(
                velocity.linvel.x <= terminal + 1e-4,
                "step {step}: speed {} exceeded terminal {terminal}",
                velocity.linvel.x
            );
            assert!(x >= prev_x, "position must be monotonically increasing");
            prev_x = x;
        }

        assert!(
            (velocity.linvel.x - terminal).abs() < 1e-3,
            "speed {} should have converged to terminal {terminal}",
            velocity.linvel.x
        );
    }
}
