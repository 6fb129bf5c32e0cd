//! Per-frame bridge between the app and the simulation core: takes the
//! input snapshot, runs the integrator, writes the result back into the
//! camera transform.

use bevy::prelude::*;

use super::PlayerCamera;
use crate::player::capture::InputCapture;
use sim::{
    input::{ActionState, FrameInput},
    locomotion::{simulate, ActorState},
    probe::GroundProbe,
};

pub fn player_movement_system(
    time: Res<Time>,
    capture: Res<InputCapture>,
    probe: Res<GroundProbe>,
    mut actions: ResMut<ActionState>,
    mut query: Query<(&mut ActorState, &mut Transform), With<PlayerCamera>>,
) {
    let Ok((mut actor, mut transform)) = query.single_mut() else {
        debug!("player not found");
        return;
    };

    // Snapshot unconditionally so press edges never leak across a
    // capture release/resume.
    let (held, pressed) = actions.snapshot();
    let input = FrameInput {
        delta_secs: time.delta_secs(),
        captured: capture.captured,
        held,
        pressed,
        camera: *transform,
    };

    simulate(&mut actor, &probe, &input);
    transform.translation = actor.position;
}
