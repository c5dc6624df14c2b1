use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier3d::prelude::*;
use std::time::Duration;

use shrimp_tank::config::{load_sim_config, SimConfig};
use shrimp_tank::constants::MAX_DELTA_TIME;
use shrimp_tank::simulation::TankPlugin;

/// Spawn the fixed camera looking straight at the tank plane.
fn setup_camera(mut commands: Commands, config: Res<SimConfig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: config.camera_fov,
            ..Default::default()
        }),
        Transform::from_xyz(0.0, 0.0, config.camera_distance).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Configure Rapier physics: plain downward gravity; the underwater look
/// comes from the drag forces, not from floaty gravity.
fn setup_physics_config(mut rapier: Query<&mut RapierConfiguration>, config: Res<SimConfig>) {
    for mut cfg in rapier.iter_mut() {
        cfg.gravity = Vec3::new(0.0, config.gravity_y, 0.0);
    }
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Shrimp Tank".into(),
                resolution: WindowResolution::new(1200, 680),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.05, 0.08, 0.12)))
        // Clamp long frames (window minimized, debugger pause) so the physics
        // step never integrates a multi-second catch-up delta.
        .insert_resource(Time::<Virtual>::from_max_delta(Duration::from_secs_f32(
            MAX_DELTA_TIME,
        )))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(TankPlugin)
        .add_systems(
            Startup,
            (
                setup_camera.after(load_sim_config),
                setup_physics_config.after(load_sim_config),
            ),
        )
        .run();
}
