//! The arm-smack gesture: explicit state, one animation per track.
//!
//! A click or touch is projected onto the tank plane and handed to the arm on
//! that side. The gesture then runs two independent tracks:
//!
//! * attractor — the spring target jumps past the touched point, holds there
//!   for half the smack, snaps to the other side (the smack itself), then
//!   drifts home under relaxed stiffness while the arm settles;
//! * hinge — the pivot rises toward the touched point and sinks back to rest
//!   over one and a half smack durations.
//!
//! Starting a new gesture cancels the old one first: stiffness returns to
//! full and the attractor returns to rest, so a mashed pointer can never
//! stack relaxation or leave the spring detuned.

use crate::arm::{Arm, ArmSpring, Attractor, Hinge};
use crate::config::SimConfig;
use crate::tween::{Easing, ScalarTween};
use bevy::prelude::*;

#[derive(Debug)]
pub enum AttractorAnim {
    /// The smack proper: attractor x rides a step-eased tween across the
    /// touched point.
    Wobble(ScalarTween),
    /// Post-smack settle window with relaxed spring stiffness.
    Hold { remaining: f32 },
}

#[derive(Debug)]
pub enum HingeAnim {
    Raising(ScalarTween),
    Lowering(ScalarTween),
}

/// Per-arm gesture state. At most one animation per track; `None` means the
/// track is idle.
#[derive(Component, Debug, Default)]
pub struct SmackGesture {
    pub attractor_anim: Option<AttractorAnim>,
    pub hinge_anim: Option<HingeAnim>,
}

impl SmackGesture {
    pub fn is_idle(&self) -> bool {
        self.attractor_anim.is_none() && self.hinge_anim.is_none()
    }
}

/// Resting attractor x for an arm side.
fn rest_x(config: &SimConfig, way: f32) -> f32 {
    (config.arms_space / 2.0) * way
}

/// Abort any in-flight gesture, restoring full stiffness and the resting
/// attractor. Idempotent; the hinge is left where it is (the next raise
/// starts from the current height).
pub fn cancel_smack(
    gesture: &mut SmackGesture,
    spring: &mut ArmSpring,
    attractor_x: &mut f32,
    way: f32,
    config: &SimConfig,
) {
    gesture.attractor_anim = None;
    gesture.hinge_anim = None;
    spring.stiffness = config.spring_stiffness;
    *attractor_x = rest_x(config, way);
}

/// Begin a smack at world point `point` (on the tank plane) with the arm on
/// side `way`, whose hinge currently sits at `hinge_y`.
pub fn start_smack(
    gesture: &mut SmackGesture,
    spring: &mut ArmSpring,
    attractor_x: &mut f32,
    point: Vec3,
    way: f32,
    hinge_y: f32,
    config: &SimConfig,
) {
    cancel_smack(gesture, spring, attractor_x, way, config);

    // Wind up on the near side of the point, snap to the far side at half
    // time. The spring does the actual hitting.
    gesture.attractor_anim = Some(AttractorAnim::Wobble(ScalarTween::new(
        point.x + config.smack_aperture * way,
        point.x - config.smack_aperture * way,
        config.smack_duration,
        Easing::StepAtHalf,
    )));

    // Raise the pivot toward the touched point; farther-out touches get a
    // slightly higher apex so the paw can reach.
    let apex = point.y - 2.0 * config.head_offset_y + 0.5 * point.x.abs();
    gesture.hinge_anim = Some(HingeAnim::Raising(ScalarTween::new(
        hinge_y,
        apex,
        config.smack_duration,
        Easing::QuadIn,
    )));
}

/// Advance one arm's gesture by `dt`, writing the attractor x and hinge y.
pub fn advance_gesture(
    gesture: &mut SmackGesture,
    spring: &mut ArmSpring,
    attractor_x: &mut f32,
    hinge_y: &mut f32,
    way: f32,
    dt: f32,
    config: &SimConfig,
) {
    if let Some(anim) = gesture.attractor_anim.take() {
        gesture.attractor_anim = match anim {
            AttractorAnim::Wobble(mut tween) => {
                tween.advance(dt);
                *attractor_x = tween.sample();
                if tween.finished() {
                    // Smack done: send the paw home on a soft spring while
                    // the body sheds its momentum.
                    spring.stiffness = config.spring_stiffness * config.spring_relax_factor;
                    *attractor_x = rest_x(config, way);
                    Some(AttractorAnim::Hold {
                        remaining: config.spring_relax_hold * config.smack_duration,
                    })
                } else {
                    Some(AttractorAnim::Wobble(tween))
                }
            }
            AttractorAnim::Hold { mut remaining } => {
                remaining -= dt;
                if remaining <= 0.0 {
                    spring.stiffness = config.spring_stiffness;
                    None
                } else {
                    Some(AttractorAnim::Hold { remaining })
                }
            }
        };
    }

    if let Some(anim) = gesture.hinge_anim.take() {
        gesture.hinge_anim = match anim {
            HingeAnim::Raising(mut tween) => {
                tween.advance(dt);
                *hinge_y = tween.sample();
                if tween.finished() {
                    Some(HingeAnim::Lowering(ScalarTween::new(
                        tween.end_value(),
                        config.hinge_rest_y,
                        config.smack_duration * 1.5,
                        Easing::QuadOut,
                    )))
                } else {
                    Some(HingeAnim::Raising(tween))
                }
            }
            HingeAnim::Lowering(mut tween) => {
                tween.advance(dt);
                *hinge_y = tween.sample();
                if tween.finished() {
                    None
                } else {
                    Some(HingeAnim::Lowering(tween))
                }
            }
        };
    }
}

// ── Systems ───────────────────────────────────────────────────────────────────

/// Give every arm a gesture slot. Runs each frame so rigs spawned later are
/// picked up too.
pub fn attach_gesture_system(
    mut commands: Commands,
    arms: Query<Entity, (With<Arm>, Without<SmackGesture>)>,
) {
    for entity in arms.iter() {
        commands.entity(entity).insert(SmackGesture::default());
    }
}

/// Project clicks and touches onto the tank plane and start a smack with the
/// arm on that side.
pub fn gesture_input_system(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    mut arms: Query<(&Arm, &mut ArmSpring, &mut SmackGesture)>,
    mut attractors: Query<&mut Transform, (With<Attractor>, Without<Hinge>)>,
    hinges: Query<&Transform, (With<Hinge>, Without<Attractor>)>,
    config: Res<SimConfig>,
) {
    let screen = if buttons.just_pressed(MouseButton::Left) {
        windows.single().ok().and_then(|w| w.cursor_position())
    } else {
        touches.iter_just_pressed().next().map(|t| t.position())
    };
    let Some(screen) = screen else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, screen) else {
        return;
    };
    let Some(distance) = ray.intersect_plane(Vec3::ZERO, InfinitePlane3d::new(Vec3::Z)) else {
        return;
    };
    let point = ray.get_point(distance);

    let way = if point.x > 0.0 { 1.0 } else { -1.0 };
    for (arm, mut spring, mut gesture) in arms.iter_mut() {
        if arm.way != way {
            continue;
        }
        let Ok(mut attractor) = attractors.get_mut(arm.attractor) else {
            continue;
        };
        let hinge_y = hinges
            .get(arm.hinge)
            .map(|t| t.translation.y)
            .unwrap_or(config.hinge_rest_y);
        let mut attractor_x = attractor.translation.x;
        start_smack(
            &mut gesture,
            &mut spring,
            &mut attractor_x,
            point,
            way,
            hinge_y,
            &config,
        );
        attractor.translation.x = attractor_x;
    }
}

/// Drive every in-flight gesture forward.
pub fn gesture_advance_system(
    mut arms: Query<(&Arm, &mut ArmSpring, &mut SmackGesture)>,
    mut attractors: Query<&mut Transform, (With<Attractor>, Without<Hinge>)>,
    mut hinges: Query<&mut Transform, (With<Hinge>, Without<Attractor>)>,
    config: Res<SimConfig>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    for (arm, mut spring, mut gesture) in arms.iter_mut() {
        let (Ok(mut attractor), Ok(mut hinge)) =
            (attractors.get_mut(arm.attractor), hinges.get_mut(arm.hinge))
        else {
            continue;
        };
        let mut attractor_x = attractor.translation.x;
        let mut hinge_y = hinge.translation.y;
        advance_gesture(
            &mut gesture,
            &mut spring,
            &mut attractor_x,
            &mut hinge_y,
            arm.way,
            dt,
            &config,
        );
        attractor.translation.x = attractor_x;
        hinge.translation.y = hinge_y;
    }
}
