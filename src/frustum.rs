//! Visible-region tracking at the tank plane.
//!
//! The lifecycle controllers spawn entities just outside the visible region
//! and cull them once they leave it, so they need the world-space size of the
//! camera's view at the plane the bodies swim in (z = 0). [`FrustumSlice`] is
//! recomputed every frame from the live projection — a window resize or
//! camera move is picked up on the next tick with no event plumbing.

use crate::config::SimConfig;
use bevy::prelude::*;

/// World-space width/height of the camera's view at the tank plane.
///
/// Read-only for the controllers; written by [`update_frustum_slice`].
#[derive(Resource, Debug, Clone, Copy)]
pub struct FrustumSlice {
    pub width: f32,
    pub height: f32,
}

impl Default for FrustumSlice {
    fn default() -> Self {
        // Safe non-zero placeholder until the first camera read.
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl FrustumSlice {
    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }
}

/// Size of a perspective frustum cross-section at `distance` along the
/// camera's forward axis.
pub fn slice_at(fov_y: f32, aspect: f32, distance: f32) -> (f32, f32) {
    let height = 2.0 * distance * (fov_y / 2.0).tan();
    (height * aspect, height)
}

/// Recompute [`FrustumSlice`] from the camera's projection and its distance
/// to the tank plane.
pub fn update_frustum_slice(
    mut slice: ResMut<FrustumSlice>,
    config: Res<SimConfig>,
    cameras: Query<(&Projection, &GlobalTransform), With<Camera3d>>,
) {
    let Ok((projection, transform)) = cameras.single() else {
        return;
    };
    let Projection::Perspective(persp) = projection else {
        return;
    };

    // The tank plane is z = 0; the camera looks straight down -Z at it.
    let distance = transform.translation().z.abs().max(config.camera_distance);
    let (width, height) = slice_at(persp.fov, persp.aspect_ratio, distance);
    slice.width = width;
    slice.height = height;
}
