use bevy::prelude::*;

/// Strict per-frame ordering: capture/keys/mouse first, then the
/// locomotion integrator, then the renderer feed.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Physics,
    Rendering,
}
