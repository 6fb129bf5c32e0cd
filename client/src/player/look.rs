//! Mouse look while captured: yaw around Y, pitch clamped short of the
//! poles so the flattened movement basis never degenerates.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use super::PlayerCamera;
use crate::player::capture::InputCapture;

const MOUSE_SENSITIVITY: f32 = 0.002;
const PITCH_LIMIT: f32 = 1.54; // just under PI/2

pub fn mouse_look_system(
    capture: Res<InputCapture>,
    motion: Res<AccumulatedMouseMotion>,
    mut query: Query<&mut Transform, With<PlayerCamera>>,
) {
    if !capture.captured || motion.delta == Vec2::ZERO {
        return;
    }
    let Ok(mut transform) = query.single_mut() else {
        debug!("player camera not found");
        return;
    };

    let (mut yaw, mut pitch, _) = transform.rotation.to_euler(EulerRot::YXZ);
    yaw -= motion.delta.x * MOUSE_SENSITIVITY;
    pitch = (pitch - motion.delta.y * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    transform.rotation = Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0);
}
