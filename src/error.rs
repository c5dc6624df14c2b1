//! Simulation-specific error types.
//!
//! Per-frame systems never return errors — anomalies are handled by
//! skip/guard/recover-in-place so a single bad frame never halts the
//! animation loop. Construction-time misconfiguration is the only class
//! that propagates, through these types.

// This module provides infrastructure types for construction-time validation.
// Items are public API; dead_code lint is suppressed to avoid forcing premature wiring.
#![allow(dead_code)]
use std::fmt;

/// Top-level error enum for the shrimp-tank simulation.
#[derive(Debug)]
pub enum TankError {
    /// A collider could not be constructed from its shape parameters
    /// (e.g. a zero-length half-space normal).
    InvalidCollider {
        /// Human-readable description of where construction failed.
        context: &'static str,
    },

    /// A tunable is outside its safe operating range.
    /// Returned by validation helpers; not triggered at runtime by default.
    UnsafeConstant {
        /// Name of the constant (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },
}

impl fmt::Display for TankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TankError::InvalidCollider { context } => {
                write!(f, "collider construction failed during '{}'", context)
            }
            TankError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "constant '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
        }
    }
}

impl std::error::Error for TankError {}

/// Convenience alias: a `Result` using `TankError` as the error type.
pub type TankResult<T> = Result<T, TankError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if a drag coefficient is not strictly positive.
///
/// Zero or negative drag removes the terminal-velocity equilibrium and lets
/// thrust accelerate bodies without bound.
pub fn validate_drag_coefficient(value: f32) -> TankResult<()> {
    if value <= 0.0 {
        Err(TankError::UnsafeConstant {
            name: "DRAG_COEFFICIENT",
            value,
            safe_range: "(0.0, ∞)",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if the spawn interval base is not strictly positive.
pub fn validate_spawn_interval(value: f32) -> TankResult<()> {
    if value <= 0.0 {
        Err(TankError::UnsafeConstant {
            name: "SPAWN_INTERVAL",
            value,
            safe_range: "(0.0, ∞)",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if the frame clamp is outside its validated range.
///
/// Values above 0.1 s have been observed to tunnel fast vehicles through the
/// delimiter planes after a long background pause.
pub fn validate_max_delta_time(value: f32) -> TankResult<()> {
    if value <= 0.0 || value > 0.1 {
        Err(TankError::UnsafeConstant {
            name: "MAX_DELTA_TIME",
            value,
            safe_range: "(0.0, 0.1]",
        })
    } else {
        Ok(())
    }
}
