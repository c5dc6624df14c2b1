//! Centralised simulation constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! [`crate::config::SimConfig`] mirrors every constant and can override any
//! of them from `assets/tank.toml` at startup — keep this file as the
//! authoritative default source.

// ── Frame Driver ──────────────────────────────────────────────────────────────

/// Maximum simulation delta per frame (seconds).
///
/// A tab coming back from background would otherwise feed a multi-second
/// catch-up step into the physics world and tunnel bodies through the
/// delimiter planes. Applied through `Time<Virtual>::from_max_delta`.
pub const MAX_DELTA_TIME: f32 = 1.0 / 30.0;

/// World gravity along Y (m/s²). The water look comes from quadratic drag,
/// not from reduced gravity.
pub const GRAVITY_Y: f32 = -9.81;

// ── Camera / Frustum ──────────────────────────────────────────────────────────

/// Camera distance from the tank plane (z = 0) along +Z.
pub const CAMERA_DISTANCE: f32 = 35.0;

/// Vertical field of view (radians).
pub const CAMERA_FOV: f32 = 45.0 * std::f32::consts::PI / 180.0;

// ── Delimiters ────────────────────────────────────────────────────────────────

/// Depth gap between the front and back restricting planes.
pub const HORIZONTAL_GAP: f32 = 2.2;

/// Vertical gap between the top and bottom restricting planes.
pub const VERTICAL_GAP: f32 = 12.0;

// ── Shrimp ────────────────────────────────────────────────────────────────────

/// Base interval between shrimp spawns (seconds).
///
/// The actual interval is redrawn after every spawn, uniform in
/// `[0.1 × base, base]`, so spawns cluster sometimes and spread out others.
pub const SHRIMP_SPAWN_INTERVAL: f32 = 4.0;

/// Shrimp body mass.
pub const SHRIMP_MASS: f32 = 1.0;

/// Quadratic drag coefficient simulating the water.
pub const SHRIMP_DRAG_COEFFICIENT: f32 = 0.8;

/// Constant lateral current pushing shrimp across the tank.
pub const SHRIMP_THRUST: f32 = 0.6;

/// Downward impulse given to a shrimp the moment it drops into the tank.
pub const SHRIMP_DROP_IMPULSE: f32 = -100.0;

/// Angular damping for tumbling shrimp; linear damping is left to the drag force.
pub const SHRIMP_ANGULAR_DAMPING: f32 = 0.98;

/// Cull margin: a shrimp is removed once `x > half_width × this`.
///
/// The margin past 1.0 lets the body visibly leave the frustum before it
/// disappears instead of popping out at the exact edge.
pub const SHRIMP_CULL_MARGIN: f32 = 1.3;

// ── Vehicles ──────────────────────────────────────────────────────────────────

/// Vehicle body mass.
pub const VEHICLE_MASS: f32 = 50.0;

/// Constant lateral thrust keeping vehicles driving across the tank.
pub const VEHICLE_THRUST: f32 = 100.0;

/// Quadratic drag coefficient for vehicles (same water as the shrimp).
pub const VEHICLE_DRAG_COEFFICIENT: f32 = 0.8;

/// Lateral entry impulse applied at spawn.
pub const VEHICLE_ENTRY_IMPULSE: f32 = 800.0;

/// Angular damping for vehicles.
pub const VEHICLE_ANGULAR_DAMPING: f32 = 0.98;

// ── Bubbles ───────────────────────────────────────────────────────────────────

/// Number of pooled bubble instances created up front.
pub const BUBBLE_POOL_SIZE: usize = 512;

/// Seconds a bubble takes to reach full size (quad-out eased).
pub const BUBBLE_BLOWUP_TIME: f32 = 0.7;

/// ± jitter applied to each bubble's blow-up time (seconds).
pub const BUBBLE_BLOWUP_JITTER: f32 = 0.2;

/// Rise speed after a bubble has finished growing (world units / second).
pub const BUBBLE_RISE_SPEED: f32 = 6.0;

/// Bubble render radius at full scale.
pub const BUBBLE_RADIUS: f32 = 0.12;

/// Cull margin: a bubble resets once `y > half_height × this`.
pub const BUBBLE_CULL_MARGIN: f32 = 1.3;

/// Base interval between idle bubble emissions from live shrimp (seconds);
/// redrawn in `[0.1 × base, base]` like the shrimp spawner.
pub const BUBBLE_EMIT_INTERVAL: f32 = 1.5;

/// How many bubbles an arm smack knocks out of a shrimp on contact.
pub const BUBBLE_BURST_COUNT: usize = 24;

// ── Arms ──────────────────────────────────────────────────────────────────────

/// Hand (paw) sphere radius.
pub const PAW_RADIUS: f32 = 1.2;

/// Forearm cylinder dimensions.
pub const FOREARM_HEIGHT: f32 = 4.0;
pub const FOREARM_WIDTH: f32 = 0.9;

/// Upper-arm cylinder dimensions.
pub const ARM_HEIGHT: f32 = 4.0;
pub const ARM_WIDTH: f32 = 1.0;

/// Y of a hinge in the resting position.
pub const HINGE_REST_Y: f32 = -12.0;

/// X space between the two arms.
pub const ARMS_SPACE: f32 = 7.0;

/// Arm body mass.
pub const ARM_MASS: f32 = 5.0;

/// Linear and angular damping for arms (they swim too).
pub const ARM_DAMPING: f32 = 0.99;

/// How long the smack animation lasts (seconds).
pub const SMACK_DURATION: f32 = 0.5;

/// How far the attractor wobbles around the touched point along X.
pub const SMACK_APERTURE: f32 = 3.0;

/// Spring stiffness pulling the hand toward the attractor.
pub const SPRING_STIFFNESS: f32 = 120.0;

/// Spring damping against the hand's velocity.
pub const SPRING_DAMPING: f32 = 1.0;

/// Fraction of full stiffness kept while a finished gesture settles.
pub const SPRING_RELAX_FACTOR: f32 = 1.0 / 3.0;

/// How long the relaxed-stiffness settle window lasts, as a fraction of
/// [`SMACK_DURATION`].
pub const SPRING_RELAX_HOLD: f32 = 0.9;

/// Upward corrective impulse applied while an arm is in the inverted pose.
pub const ARM_UPRIGHT_IMPULSE: f32 = 50.0;

// ── Head ──────────────────────────────────────────────────────────────────────

/// Head collision sphere radius.
pub const HEAD_RADIUS: f32 = 2.5;

/// Vertical offset unit used to place the head and aim the smack gesture.
pub const HEAD_OFFSET_Y: f32 = 4.0;

/// Gaze rotation limits (degrees).
pub const MAX_HEAD_ROTATION_X: f32 = 23.0;
pub const MAX_HEAD_ROTATION_Y: f32 = 33.0;

/// Breathing amplitude on the head's Y position.
pub const HEAD_BREATHE_AMPLITUDE: f32 = 0.07;

/// Seconds of pointer inactivity before the head starts watching a shrimp.
pub const HEAD_IDLE_LOOK_DELAY: f32 = 5.0;
