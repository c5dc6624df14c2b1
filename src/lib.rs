//! A physics-driven shrimp tank.
//!
//! Shrimp drop in from above and drift across the visible region on a
//! constant current; heavy vehicles barge through on a key press; two
//! spring-driven arms smack at pointer touches; a kinematic head watches it
//! all. Everything dynamic is a Rapier body, everything visible is a gizmo
//! wireframe, and every tunable lives in [`config::SimConfig`].

pub mod arm;
pub mod bubble;
pub mod cadence;
pub mod collision;
pub mod config;
pub mod constants;
pub mod delimiter;
pub mod error;
pub mod forces;
pub mod frustum;
pub mod gesture;
pub mod head;
pub mod render;
pub mod shrimp;
pub mod simulation;
pub mod tween;
pub mod vehicle;
