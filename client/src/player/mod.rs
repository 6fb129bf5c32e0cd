pub mod capture;
pub mod controller;
pub mod look;

use bevy::prelude::*;
use bevy_atmosphere::plugin::AtmosphereCamera;
use sim::locomotion::ActorState;

/// Marks the single camera-attached actor.
#[derive(Component)]
pub struct PlayerCamera;

pub fn spawn_player(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 75.0_f32.to_radians(),
            ..default()
        }),
        Transform::from_translation(sim::SPAWN_POSITION)
            .looking_at(Vec3::new(1.0, sim::EYE_HEIGHT, 0.0), Vec3::Y),
        ActorState::default(),
        AtmosphereCamera::default(),
        PlayerCamera,
    ));
}
