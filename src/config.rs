//! Runtime simulation configuration loaded from `assets/tank.toml`.
//!
//! [`SimConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`]. At startup, [`load_sim_config`] reads
//! `assets/tank.toml` and overwrites the defaults with any values present in
//! the file. Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! Add `config: Res<SimConfig>` to any system parameter list and read values
//! with `config.shrimp_thrust`, `config.smack_duration`, etc.

use crate::constants::*;
use crate::error::{
    validate_drag_coefficient, validate_max_delta_time, validate_spawn_interval, TankResult,
};
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable simulation configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`. Override any subset by setting the value in
/// `assets/tank.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // ── Frame driver ─────────────────────────────────────────────────────────
    pub max_delta_time: f32,
    pub gravity_y: f32,

    // ── Camera ───────────────────────────────────────────────────────────────
    pub camera_distance: f32,
    pub camera_fov: f32,

    // ── Delimiters ───────────────────────────────────────────────────────────
    pub horizontal_gap: f32,
    pub vertical_gap: f32,

    // ── Shrimp ───────────────────────────────────────────────────────────────
    pub shrimp_spawn_interval: f32,
    pub shrimp_mass: f32,
    pub shrimp_drag_coefficient: f32,
    pub shrimp_thrust: f32,
    pub shrimp_drop_impulse: f32,
    pub shrimp_angular_damping: f32,
    pub shrimp_cull_margin: f32,

    // ── Vehicles ─────────────────────────────────────────────────────────────
    pub vehicle_mass: f32,
    pub vehicle_thrust: f32,
    pub vehicle_drag_coefficient: f32,
    pub vehicle_entry_impulse: f32,
    pub vehicle_angular_damping: f32,

    // ── Bubbles ──────────────────────────────────────────────────────────────
    pub bubble_blowup_time: f32,
    pub bubble_blowup_jitter: f32,
    pub bubble_rise_speed: f32,
    pub bubble_cull_margin: f32,
    pub bubble_emit_interval: f32,
    pub bubble_burst_count: usize,

    // ── Arms / gesture ───────────────────────────────────────────────────────
    pub smack_duration: f32,
    pub smack_aperture: f32,
    pub spring_stiffness: f32,
    pub spring_damping: f32,
    pub spring_relax_factor: f32,
    pub spring_relax_hold: f32,
    pub hinge_rest_y: f32,
    pub arms_space: f32,
    pub arm_upright_impulse: f32,

    // ── Head ─────────────────────────────────────────────────────────────────
    pub head_offset_y: f32,
    pub max_head_rotation_x: f32,
    pub max_head_rotation_y: f32,
    pub head_breathe_amplitude: f32,
    pub head_idle_look_delay: f32,
}

impl SimConfig {
    /// Check loaded tunables against their safe operating ranges.
    ///
    /// Rejecting here keeps the per-frame systems guard-free: a zero drag
    /// coefficient or an oversized frame clamp never reaches them.
    pub fn validate(&self) -> TankResult<()> {
        validate_drag_coefficient(self.shrimp_drag_coefficient)?;
        validate_drag_coefficient(self.vehicle_drag_coefficient)?;
        validate_spawn_interval(self.shrimp_spawn_interval)?;
        validate_spawn_interval(self.bubble_emit_interval)?;
        validate_max_delta_time(self.max_delta_time)?;
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            // Frame driver
            max_delta_time: MAX_DELTA_TIME,
            gravity_y: GRAVITY_Y,
            // Camera
            camera_distance: CAMERA_DISTANCE,
            camera_fov: CAMERA_FOV,
            // Delimiters
            horizontal_gap: HORIZONTAL_GAP,
            vertical_gap: VERTICAL_GAP,
            // Shrimp
            shrimp_spawn_interval: SHRIMP_SPAWN_INTERVAL,
            shrimp_mass: SHRIMP_MASS,
            shrimp_drag_coefficient: SHRIMP_DRAG_COEFFICIENT,
            shrimp_thrust: SHRIMP_THRUST,
            shrimp_drop_impulse: SHRIMP_DROP_IMPULSE,
            shrimp_angular_damping: SHRIMP_ANGULAR_DAMPING,
            shrimp_cull_margin: SHRIMP_CULL_MARGIN,
            // Vehicles
            vehicle_mass: VEHICLE_MASS,
            vehicle_thrust: VEHICLE_THRUST,
            vehicle_drag_coefficient: VEHICLE_DRAG_COEFFICIENT,
            vehicle_entry_impulse: VEHICLE_ENTRY_IMPULSE,
            vehicle_angular_damping: VEHICLE_ANGULAR_DAMPING,
            // Bubbles
            bubble_blowup_time: BUBBLE_BLOWUP_TIME,
            bubble_blowup_jitter: BUBBLE_BLOWUP_JITTER,
            bubble_rise_speed: BUBBLE_RISE_SPEED,
            bubble_cull_margin: BUBBLE_CULL_MARGIN,
            bubble_emit_interval: BUBBLE_EMIT_INTERVAL,
            bubble_burst_count: BUBBLE_BURST_COUNT,
            // Arms / gesture
            smack_duration: SMACK_DURATION,
            smack_aperture: SMACK_APERTURE,
            spring_stiffness: SPRING_STIFFNESS,
            spring_damping: SPRING_DAMPING,
            spring_relax_factor: SPRING_RELAX_FACTOR,
            spring_relax_hold: SPRING_RELAX_HOLD,
            hinge_rest_y: HINGE_REST_Y,
            arms_space: ARMS_SPACE,
            arm_upright_impulse: ARM_UPRIGHT_IMPULSE,
            // Head
            head_offset_y: HEAD_OFFSET_Y,
            max_head_rotation_x: MAX_HEAD_ROTATION_X,
            max_head_rotation_y: MAX_HEAD_ROTATION_Y,
            head_breathe_amplitude: HEAD_BREATHE_AMPLITUDE,
            head_idle_look_delay: HEAD_IDLE_LOOK_DELAY,
        }
    }
}

/// Startup system: attempt to load `assets/tank.toml` and overwrite the
/// `SimConfig` resource with any values present in the file.
///
/// Missing keys retain their compiled defaults. TOML parse errors are logged
/// but do not abort the simulation. A missing file is silently ignored
/// (defaults are already in place from `insert_resource`).
pub fn load_sim_config(mut config: ResMut<SimConfig>) {
    let path = "assets/tank.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<SimConfig>(&contents) {
            Ok(loaded) => match loaded.validate() {
                Ok(()) => {
                    *config = loaded;
                    info!("loaded simulation config from {path}");
                }
                Err(e) => {
                    warn!("rejected {path}: {e}; using defaults");
                }
            },
            Err(e) => {
                warn!("failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            info!("no {path} found; using compiled defaults");
        }
    }
}
