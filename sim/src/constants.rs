use bevy::prelude::*;

/// Vertical offset between the actor's eye point and the surface it
/// stands on. Also the gravity threshold: no downward acceleration while
/// resting exactly at this height above ground.
pub const EYE_HEIGHT: f32 = 5.0;

/// Exponential damping coefficient for planar velocity, per second.
pub const DAMPING: f32 = 10.0;

/// Planar acceleration while a movement key is held, units per second^2.
pub const ACCELERATION: f32 = 200.0;

/// Fall acceleration. Deliberately ~12x real gravity; the feel of the
/// jump arc depends on this exact value, do not "fix" it.
pub const GRAVITY: f32 = 9.8 * 12.0;

/// Instantaneous upward velocity added by a jump.
pub const JUMP_IMPULSE: f32 = 50.0;

/// Where the actor's eye point starts a session.
pub const SPAWN_POSITION: Vec3 = Vec3 {
    x: 1.0,
    y: EYE_HEIGHT,
    z: 10.0,
};
