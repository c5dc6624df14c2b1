//! The invisible box bounding the simulated volume.
//!
//! Four static half-space planes (front/back/top/bottom) keep shrimp and
//! vehicles inside the tank vertically and depth-wise. There are no side
//! walls: horizontal containment is handled by the controllers' cull logic,
//! which removes bodies once they drift past the visible region.

use crate::collision::{surface, Layer};
use crate::config::SimConfig;
use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Marker component for the four bounding planes.
#[derive(Component)]
pub struct Delimiter;

/// Positions and inward-facing normals of the four planes for the given gaps.
pub fn delimiter_layout(horizontal_gap: f32, vertical_gap: f32) -> [(Vec3, Vec3); 4] {
    [
        // back
        (Vec3::new(0.0, 0.0, -horizontal_gap / 2.0), Vec3::Z),
        // front
        (Vec3::new(0.0, 0.0, horizontal_gap / 2.0), Vec3::NEG_Z),
        // top
        (Vec3::new(0.0, vertical_gap / 2.0, 0.0), Vec3::NEG_Y),
        // bottom
        (Vec3::new(0.0, -vertical_gap / 2.0, 0.0), Vec3::Y),
    ]
}

/// Startup system: spawn the four static planes.
pub fn spawn_delimiters(mut commands: Commands, config: Res<SimConfig>) {
    let coefficients = surface(Layer::Delimiter);
    for (position, normal) in delimiter_layout(config.horizontal_gap, config.vertical_gap) {
        let collider = Collider::halfspace(normal)
            .expect("delimiter normal is a unit axis and must form a half-space");
        commands.spawn((
            Transform::from_translation(position),
            GlobalTransform::default(),
            Delimiter,
            RigidBody::Fixed,
            collider,
            Layer::Delimiter.groups(),
            Friction::coefficient(coefficients.friction),
            Restitution::coefficient(coefficients.restitution),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_planes_face_the_tank_center() {
        for (position, normal) in delimiter_layout(2.2, 12.0) {
            let toward_center = (Vec3::ZERO - position).normalize();
            assert!(
                toward_center.dot(normal) > 0.99,
                "plane at {position:?} has normal {normal:?} facing away from the tank"
            );
        }
    }

    #[test]
    fn planes_sit_on_the_configured_gaps() {
        let layout = delimiter_layout(2.2, 12.0);
        assert_eq!(layout[0].0.z, -1.1);
        assert_eq!(layout[1].0.z, 1.1);
        assert_eq!(layout[2].0.y, 6.0);
        assert_eq!(layout[3].0.y, -6.0);
    }

    #[test]
    fn there_are_no_side_walls() {
        // Left/right containment is cull-based; no plane may restrict X.
        for (_, normal) in delimiter_layout(2.2, 12.0) {
            assert_eq!(normal.x, 0.0);
        }
    }
}
