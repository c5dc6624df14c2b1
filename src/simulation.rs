//! Frame driver: resource wiring and system ordering.
//!
//! One `Update` chain keeps the per-frame order explicit: measure the visible
//! region, zero last frame's forces, spawn, accumulate this frame's forces,
//! advance the gesture and head animations, recycle bubbles, cull. Rapier
//! steps the world after `Update`, so every force written here is consumed by
//! exactly one physics step. The gizmo draw systems are order-independent and
//! run unchained.

use crate::arm::{arm_spring_system, arm_upright_guard_system, spawn_arms};
use crate::bubble::{
    bubble_burst_system, bubble_emit_system, bubble_update_system, spawn_bubble_pool,
    BubbleEmitter, BubblePool,
};
use crate::config::{load_sim_config, SimConfig};
use crate::constants::{BUBBLE_EMIT_INTERVAL, SHRIMP_SPAWN_INTERVAL};
use crate::delimiter::spawn_delimiters;
use crate::frustum::{update_frustum_slice, FrustumSlice};
use crate::gesture::{attach_gesture_system, gesture_advance_system, gesture_input_system};
use crate::head::{
    head_breathe_system, head_gaze_apply_system, head_pointer_gaze_system,
    head_watch_shrimp_system, spawn_head, Gaze,
};
use crate::render::{
    draw_arm_system, draw_bubble_system, draw_head_system, draw_shrimp_system, draw_tank_system,
    draw_vehicle_system,
};
use crate::shrimp::{
    shrimp_cull_system, shrimp_force_system, shrimp_spawn_system, ShrimpSpawner,
};
use crate::vehicle::{vehicle_cull_system, vehicle_force_system, vehicle_input_system};
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

pub struct TankPlugin;

impl Plugin for TankPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimConfig>()
            .init_resource::<FrustumSlice>()
            .init_resource::<BubblePool>()
            .init_resource::<Gaze>()
            .insert_resource(ShrimpSpawner::new(SHRIMP_SPAWN_INTERVAL))
            .insert_resource(BubbleEmitter::new(BUBBLE_EMIT_INTERVAL))
            .add_systems(
                Startup,
                (
                    // Load config first so every other startup system sees the
                    // final values.
                    load_sim_config,
                    (spawn_delimiters, spawn_arms, spawn_head, spawn_bubble_pool)
                        .after(load_sim_config),
                ),
            )
            .add_systems(
                Update,
                (
                    update_frustum_slice,
                    clear_forces_system,
                    (shrimp_spawn_system, vehicle_input_system),
                    (shrimp_force_system, vehicle_force_system),
                    (attach_gesture_system, gesture_input_system, gesture_advance_system).chain(),
                    (arm_spring_system, arm_upright_guard_system),
                    (
                        head_breathe_system,
                        head_pointer_gaze_system,
                        head_watch_shrimp_system,
                        head_gaze_apply_system,
                    )
                        .chain(),
                    (bubble_emit_system, bubble_burst_system, bubble_update_system).chain(),
                    (shrimp_cull_system, vehicle_cull_system),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    draw_tank_system,
                    draw_shrimp_system,
                    draw_vehicle_system,
                    draw_arm_system,
                    draw_bubble_system,
                    draw_head_system,
                ),
            );
    }
}

/// Zero every body's accumulated force before this frame's force systems run.
///
/// Rapier persists `ExternalForce` across frames; without the clear, thrust
/// and drag would integrate into an ever-growing total.
pub fn clear_forces_system(mut query: Query<&mut ExternalForce>) {
    for mut force in query.iter_mut() {
        force.force = Vec3::ZERO;
        force.torque = Vec3::ZERO;
    }
}
