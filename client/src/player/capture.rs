//! Pointer capture gate.
//!
//! Clicking the window grabs the cursor and hands the keyboard/mouse to
//! the locomotion system; Escape gives it back. While released the
//! integrator freezes and no state is discarded.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

#[derive(Resource, Debug, Default)]
pub struct InputCapture {
    pub captured: bool,
}

pub fn capture_on_click(
    mouse: Res<ButtonInput<MouseButton>>,
    mut capture: ResMut<InputCapture>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if capture.captured || !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window.cursor_options.grab_mode = CursorGrabMode::Locked;
    window.cursor_options.visible = false;
    capture.captured = true;
    info!("input captured");
}

pub fn release_on_escape(
    keys: Res<ButtonInput<KeyCode>>,
    mut capture: ResMut<InputCapture>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !capture.captured || !keys.just_pressed(KeyCode::Escape) {
        return;
    }
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window.cursor_options.grab_mode = CursorGrabMode::None;
    window.cursor_options.visible = true;
    capture.captured = false;
    info!("input released");
}
