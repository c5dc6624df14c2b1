//! The watcher's head: a kinematic sphere bobbing between the arms.
//!
//! The head never reacts to hits — it is a kinematic obstacle shrimp and
//! vehicles bounce off. All its life is in the gaze: it follows the pointer
//! while the pointer moves, and after a few idle seconds it picks a shrimp
//! drifting in from the left and watches it cross the tank instead.
//!
//! The collision sphere stays axis-aligned; gaze rotation lives on a child
//! visual entity that eases toward the target orientation every frame.

use crate::collision::{surface, Layer};
use crate::config::SimConfig;
use crate::constants::HEAD_RADIUS;
use crate::frustum::FrustumSlice;
use crate::shrimp::Shrimp;
use crate::tween::Easing;
use bevy::prelude::*;
use bevy::window::CursorMoved;
use bevy_rapier3d::prelude::*;
use rand::Rng;

/// A watched shrimp is given up once its x exceeds `half_width × this`.
const WATCH_EXIT_MARGIN: f32 = 1.2;

#[derive(Component, Debug)]
pub struct Head {
    /// Resting height the breathing oscillates around.
    pub base_y: f32,
}

/// Child entity carrying the gaze rotation.
#[derive(Component, Debug)]
pub struct HeadVisual;

/// Where the head wants to look and how it got there.
#[derive(Resource, Debug)]
pub struct Gaze {
    /// Target pitch (x) and yaw (y), radians, already clamped.
    pub target: Vec2,
    /// `Time::elapsed_secs` of the last pointer movement.
    pub last_pointer_at: f32,
    /// Shrimp currently being watched, if the pointer has gone idle.
    pub watched: Option<Entity>,
}

impl Default for Gaze {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            last_pointer_at: 0.0,
            watched: None,
        }
    }
}

/// Map a pointer position to clamped (pitch, yaw) radians; the screen center
/// is the neutral gaze.
pub fn gaze_from_pointer(cursor: Vec2, window: Vec2, limits_deg: Vec2) -> Vec2 {
    let nx = (cursor.x / window.x * 2.0 - 1.0).clamp(-1.0, 1.0);
    let ny = (cursor.y / window.y * 2.0 - 1.0).clamp(-1.0, 1.0);
    Vec2::new(
        ny * limits_deg.x.to_radians(),
        nx * limits_deg.y.to_radians(),
    )
}

/// Map a world-space offset from the head to clamped (pitch, yaw) radians,
/// proportional to how far across the visible region the target sits.
pub fn gaze_toward(offset: Vec2, half_extents: Vec2, limits_deg: Vec2) -> Vec2 {
    let nx = (offset.x / half_extents.x).clamp(-1.0, 1.0);
    let ny = (offset.y / half_extents.y).clamp(-1.0, 1.0);
    Vec2::new(
        -ny * limits_deg.x.to_radians(),
        nx * limits_deg.y.to_radians(),
    )
}

/// Startup system: spawn the head body with its gaze-carrying child.
pub fn spawn_head(mut commands: Commands, config: Res<SimConfig>) {
    let coefficients = surface(Layer::Head);
    let base_y = -config.head_offset_y * 1.22;

    commands
        .spawn((
            Transform::from_translation(Vec3::new(0.0, base_y, 0.0)),
            GlobalTransform::default(),
            Head { base_y },
            RigidBody::KinematicPositionBased,
            Collider::ball(HEAD_RADIUS),
            Layer::Head.groups(),
            Friction::coefficient(coefficients.friction),
            Restitution::coefficient(coefficients.restitution),
        ))
        .with_children(|parent| {
            parent.spawn((Transform::default(), GlobalTransform::default(), HeadVisual));
        });
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Bob the head on a slow sine.
pub fn head_breathe_system(
    mut heads: Query<(&Head, &mut Transform)>,
    config: Res<SimConfig>,
    time: Res<Time>,
) {
    for (head, mut transform) in heads.iter_mut() {
        transform.translation.y =
            head.base_y + time.elapsed_secs().sin() * config.head_breathe_amplitude;
    }
}

/// Follow the pointer while it moves; any movement ends shrimp-watching.
pub fn head_pointer_gaze_system(
    mut cursor_moves: MessageReader<CursorMoved>,
    windows: Query<&Window>,
    mut gaze: ResMut<Gaze>,
    config: Res<SimConfig>,
    time: Res<Time>,
) {
    let Some(moved) = cursor_moves.read().last() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };
    gaze.target = gaze_from_pointer(
        moved.position,
        Vec2::new(window.width(), window.height()),
        Vec2::new(config.max_head_rotation_x, config.max_head_rotation_y),
    );
    gaze.last_pointer_at = time.elapsed_secs();
    gaze.watched = None;
}

/// After the pointer has been idle long enough, pick a shrimp entering from
/// the left and track it until it has crossed out of view.
pub fn head_watch_shrimp_system(
    mut gaze: ResMut<Gaze>,
    heads: Query<&Transform, With<Head>>,
    shrimp: Query<(Entity, &Transform), With<Shrimp>>,
    config: Res<SimConfig>,
    slice: Res<FrustumSlice>,
    time: Res<Time>,
) {
    if time.elapsed_secs() - gaze.last_pointer_at < config.head_idle_look_delay {
        return;
    }
    let Ok(head) = heads.single() else {
        return;
    };

    // Drop a watched shrimp that despawned or left the tank.
    if let Some(entity) = gaze.watched {
        match shrimp.get(entity) {
            Ok((_, transform))
                if transform.translation.x <= slice.half_width() * WATCH_EXIT_MARGIN =>
            {
                let offset = transform.translation - head.translation;
                gaze.target = gaze_toward(
                    Vec2::new(offset.x, offset.y),
                    Vec2::new(slice.half_width(), slice.half_height()),
                    Vec2::new(config.max_head_rotation_x, config.max_head_rotation_y),
                );
                return;
            }
            _ => gaze.watched = None,
        }
    }

    // Pick a fresh one on the entry half of the tank.
    let mut rng = rand::thread_rng();
    let candidates: Vec<Entity> = shrimp
        .iter()
        .filter(|(_, t)| t.translation.x < 0.0)
        .map(|(e, _)| e)
        .collect();
    if candidates.is_empty() {
        return;
    }
    gaze.watched = Some(candidates[rng.gen_range(0..candidates.len())]);
}

/// Ease the visual's rotation toward the gaze target.
pub fn head_gaze_apply_system(
    mut visuals: Query<&mut Transform, With<HeadVisual>>,
    gaze: Res<Gaze>,
    time: Res<Time>,
) {
    let target = Quat::from_euler(EulerRot::XYZ, gaze.target.x, gaze.target.y, 0.0);
    let blend = Easing::QuadInOut.apply(time.delta_secs() * 10.0);
    for mut transform in visuals.iter_mut() {
        transform.rotation = transform.rotation.slerp(target, blend);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_is_the_neutral_gaze() {
        let gaze = gaze_from_pointer(
            Vec2::new(400.0, 300.0),
            Vec2::new(800.0, 600.0),
            Vec2::new(23.0, 33.0),
        );
        assert!(gaze.length() < 1e-6);
    }

    #[test]
    fn pointer_at_the_edge_hits_the_rotation_limits() {
        let limits = Vec2::new(23.0, 33.0);
        let window = Vec2::new(800.0, 600.0);
        let gaze = gaze_from_pointer(Vec2::new(800.0, 600.0), window, limits);
        assert!((gaze.x - 23.0_f32.to_radians()).abs() < 1e-5);
        assert!((gaze.y - 33.0_f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn pointer_outside_the_window_is_clamped() {
        let limits = Vec2::new(23.0, 33.0);
        let window = Vec2::new(800.0, 600.0);
        let gaze = gaze_from_pointer(Vec2::new(-500.0, 5000.0), window, limits);
        assert!(gaze.x.abs() <= limits.x.to_radians() + 1e-5);
        assert!(gaze.y.abs() <= limits.y.to_radians() + 1e-5);
    }

    #[test]
    fn watching_a_far_target_saturates_but_never_exceeds_the_limits() {
        let limits = Vec2::new(23.0, 33.0);
        let gaze = gaze_toward(Vec2::new(100.0, -100.0), Vec2::new(10.0, 5.0), limits);
        assert!((gaze.y - 33.0_f32.to_radians()).abs() < 1e-5);
        assert!((gaze.x - 23.0_f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn head_rest_height_scales_with_the_offset_unit() {
        let config = SimConfig::default();
        let base_y = -config.head_offset_y * 1.22;
        assert!((base_y - (-crate::constants::HEAD_OFFSET_Y * 1.22)).abs() < 1e-6);
        assert!(base_y < 0.0, "the head sits below the tank midline");
    }
}
