//! Wireframe rendering via gizmos.
//!
//! The whole scene is drawn as immediate-mode gizmo primitives — no meshes,
//! no materials, no asset loading. Each body is sketched from the same
//! dimensions its collider uses, so what you see is what the physics solves.

use crate::arm::Arm;
use crate::bubble::{Bubble, BubbleState};
use crate::config::SimConfig;
use crate::constants::{
    ARM_HEIGHT, BUBBLE_RADIUS, FOREARM_HEIGHT, HEAD_RADIUS, PAW_RADIUS,
};
use crate::frustum::FrustumSlice;
use crate::head::{Head, HeadVisual};
use crate::shrimp::Shrimp;
use crate::vehicle::Vehicle;
use bevy::prelude::*;

const SHRIMP_COLOR: Color = Color::srgb(1.0, 0.55, 0.4);
const VEHICLE_COLOR: Color = Color::srgb(0.7, 0.7, 0.8);
const ARM_COLOR: Color = Color::srgb(0.9, 0.8, 0.6);
const BUBBLE_COLOR: Color = Color::srgb(0.6, 0.8, 1.0);
const HEAD_COLOR: Color = Color::srgb(0.9, 0.8, 0.6);
const TANK_COLOR: Color = Color::srgb(0.25, 0.3, 0.35);

/// Draw the tank bounds: the vertical gap across the visible width.
pub fn draw_tank_system(mut gizmos: Gizmos, config: Res<SimConfig>, slice: Res<FrustumSlice>) {
    let half_w = slice.half_width();
    let top = config.vertical_gap / 2.0;
    gizmos.line(
        Vec3::new(-half_w, top, 0.0),
        Vec3::new(half_w, top, 0.0),
        TANK_COLOR,
    );
    gizmos.line(
        Vec3::new(-half_w, -top, 0.0),
        Vec3::new(half_w, -top, 0.0),
        TANK_COLOR,
    );
}

/// Sketch each shrimp as the three body segments its collider is built from.
pub fn draw_shrimp_system(mut gizmos: Gizmos, query: Query<&Transform, With<Shrimp>>) {
    // (offset, radius) per segment: tail, bend, head.
    let segments = [
        (Vec3::new(0.7, -0.05, -0.15), 0.4),
        (Vec3::new(0.0, 0.0, -0.65), 0.3),
        (Vec3::new(-0.7, 0.0, 0.1), 0.2),
    ];
    for transform in query.iter() {
        let mut previous: Option<Vec3> = None;
        for (offset, radius) in segments {
            let center = transform.translation + transform.rotation * offset;
            gizmos.sphere(Isometry3d::from_translation(center), radius, SHRIMP_COLOR);
            if let Some(prev) = previous {
                gizmos.line(prev, center, SHRIMP_COLOR);
            }
            previous = Some(center);
        }
    }
}

/// Draw vehicles as their collision boxes.
pub fn draw_vehicle_system(mut gizmos: Gizmos, query: Query<(&Transform, &Vehicle)>) {
    for (transform, vehicle) in query.iter() {
        let boxed = Transform {
            translation: transform.translation,
            rotation: transform.rotation,
            scale: vehicle.kind.dimensions(),
        };
        gizmos.cuboid(boxed, VEHICLE_COLOR);
    }
}

/// Draw each arm: paw sphere plus forearm and upper-arm bone lines.
pub fn draw_arm_system(mut gizmos: Gizmos, query: Query<&Transform, With<Arm>>) {
    for transform in query.iter() {
        let paw = transform.translation;
        gizmos.sphere(
            Isometry3d::new(paw, transform.rotation),
            PAW_RADIUS,
            ARM_COLOR,
        );
        let elbow = paw + transform.rotation * Vec3::new(0.2, -FOREARM_HEIGHT, 0.0);
        let shoulder = elbow + transform.rotation * Vec3::new(0.7, -ARM_HEIGHT, 0.0);
        gizmos.line(paw, elbow, ARM_COLOR);
        gizmos.line(elbow, shoulder, ARM_COLOR);
    }
}

/// Draw live bubbles scaled by their grow progress.
pub fn draw_bubble_system(mut gizmos: Gizmos, query: Query<(&Bubble, &Transform)>) {
    for (bubble, transform) in query.iter() {
        if matches!(bubble.state, BubbleState::Free) {
            continue;
        }
        gizmos.sphere(
            Isometry3d::from_translation(transform.translation),
            BUBBLE_RADIUS * transform.scale.x,
            BUBBLE_COLOR,
        );
    }
}

/// Draw the head sphere and a nose line along the current gaze.
pub fn draw_head_system(
    mut gizmos: Gizmos,
    heads: Query<&Transform, With<Head>>,
    visuals: Query<&GlobalTransform, With<HeadVisual>>,
) {
    for transform in heads.iter() {
        gizmos.sphere(
            Isometry3d::from_translation(transform.translation),
            HEAD_RADIUS,
            HEAD_COLOR,
        );
    }
    for visual in visuals.iter() {
        let origin = visual.translation();
        let nose = origin + visual.rotation() * (Vec3::Z * (HEAD_RADIUS * 1.2));
        gizmos.line(origin, nose, HEAD_COLOR);
    }
}
