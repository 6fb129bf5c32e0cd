//! Logical movement actions and their per-frame snapshot.
//!
//! Raw key events arrive whenever the windowing layer delivers them; the
//! integrator only ever sees an immutable [`FrameInput`] taken once at the
//! start of a frame, so a key toggled twice between frames is observed in
//! its latest state only.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A logical input the locomotion core reacts to. The client maps raw key
/// codes onto these; the core never sees key codes.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Action {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    Jump,
}

/// Live pressed/held state, mutated by key-down/key-up events as they
/// arrive and drained into a [`FrameInput`] once per frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct ActionState {
    held: BTreeSet<Action>,
    just_pressed: BTreeSet<Action>,
}

impl ActionState {
    /// Records a key-down. Duplicate key-downs for a held action (key
    /// repeat) leave the state unchanged and do not re-trigger the edge.
    pub fn press(&mut self, action: Action) {
        if self.held.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Records a key-up. Releasing an action that is not held is a no-op.
    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Takes the per-frame snapshot: held actions are copied, press edges
    /// are drained so each key-down produces exactly one edge.
    pub fn snapshot(&mut self) -> (BTreeSet<Action>, BTreeSet<Action>) {
        (self.held.clone(), std::mem::take(&mut self.just_pressed))
    }
}

/// Everything the integrator consumes for one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub delta_secs: f32,
    /// Whether the user has granted the locomotion system exclusive
    /// control of mouse and keyboard. While false the actor is frozen.
    pub captured: bool,
    /// Actions held at snapshot time.
    pub held: BTreeSet<Action>,
    /// Actions whose key-down edge happened since the last snapshot.
    pub pressed: BTreeSet<Action>,
    /// Camera transform supplying the local forward/right movement basis.
    pub camera: Transform,
}

impl FrameInput {
    pub fn is_held(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_is_idempotent() {
        let mut state = ActionState::default();
        state.press(Action::MoveForward);
        state.press(Action::MoveForward);

        let (held, pressed) = state.snapshot();
        assert!(held.contains(&Action::MoveForward));
        assert_eq!(pressed.len(), 1);
    }

    #[test]
    fn test_snapshot_drains_edges_but_keeps_held() {
        let mut state = ActionState::default();
        state.press(Action::Jump);

        let (held, pressed) = state.snapshot();
        assert!(held.contains(&Action::Jump));
        assert!(pressed.contains(&Action::Jump));

        let (held, pressed) = state.snapshot();
        assert!(held.contains(&Action::Jump));
        assert!(pressed.is_empty(), "edge must fire exactly once");
    }

    #[test]
    fn test_held_repeat_does_not_re_edge() {
        let mut state = ActionState::default();
        state.press(Action::Jump);
        let _ = state.snapshot();

        // Key repeat while held: no new edge.
        state.press(Action::Jump);
        let (_, pressed) = state.snapshot();
        assert!(pressed.is_empty());

        // Release and press again: a fresh edge.
        state.release(Action::Jump);
        state.press(Action::Jump);
        let (_, pressed) = state.snapshot();
        assert!(pressed.contains(&Action::Jump));
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut state = ActionState::default();
        state.release(Action::MoveLeft);
        let (held, pressed) = state.snapshot();
        assert!(held.is_empty());
        assert!(pressed.is_empty());
    }
}
