//! The per-frame locomotion integrator.
//!
//! Converts held movement actions into a damped planar velocity, applies
//! gravity against the ground probe's nearest surface, and reconciles the
//! actor's vertical position with that surface (snap, jump, fall). This is
//! the only stateful machinery in the simulation; everything it consumes
//! is a per-frame snapshot.

use bevy::prelude::*;

use crate::constants::{ACCELERATION, DAMPING, EYE_HEIGHT, GRAVITY, JUMP_IMPULSE, SPAWN_POSITION};
use crate::input::{Action, FrameInput};
use crate::probe::GroundProbe;

/// Whether the actor is standing on a surface or in the air.
///
/// Set exclusively by the jump/gravity/snap transitions below. Not the
/// same thing as `can_jump`: immediately after a jump impulse `can_jump`
/// is already false while the actor has not yet left `Grounded` distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stance {
    Grounded,
    Airborne,
}

/// The camera-attached actor. One per session; mutated every frame while
/// input is captured, frozen otherwise.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ActorState {
    /// World-space eye point.
    pub position: Vec3,
    /// Signed vertical velocity, positive = upward.
    pub vertical_velocity: f32,
    /// Damped planar velocity; `x` is the strafe axis, `y` the forward
    /// axis, both in the camera's local basis.
    pub horizontal_velocity: Vec2,
    /// True only between a ground snap and the next jump impulse.
    pub can_jump: bool,
    pub stance: Stance,
}

impl Default for ActorState {
    fn default() -> Self {
        Self {
            position: SPAWN_POSITION,
            vertical_velocity: 0.0,
            horizontal_velocity: Vec2::ZERO,
            can_jump: true,
            stance: Stance::Grounded,
        }
    }
}

/// Advances the actor by one frame.
///
/// Order matters and is load-bearing: the jump impulse is applied before
/// any integration, gravity only engages above eye height so a resting
/// actor does not accumulate micro-penetration, and the snap clamp runs
/// after displacement so the actor is never observed below a surface at
/// frame end.
pub fn simulate(actor: &mut ActorState, probe: &GroundProbe, input: &FrameInput) {
    if !input.captured {
        return;
    }
    let dt = input.delta_secs;
    if dt <= 0.0 {
        return;
    }

    // Jump edge, gated by can_jump. A jump request while airborne is
    // dropped, never queued.
    if input.just_pressed(Action::Jump) && actor.can_jump {
        actor.vertical_velocity += JUMP_IMPULSE;
        actor.can_jump = false;
        actor.stance = Stance::Airborne;
    }

    // Exponential damping toward zero, per planar axis.
    actor.horizontal_velocity -= actor.horizontal_velocity * DAMPING * dt;

    let forward_input = input.is_held(Action::MoveForward);
    let backward_input = input.is_held(Action::MoveBackward);
    let left_input = input.is_held(Action::MoveLeft);
    let right_input = input.is_held(Action::MoveRight);

    // Strafe on x, forward on y. Opposing keys cancel to the zero vector;
    // normalize_or_zero keeps that NaN-free.
    let direction = Vec2::new(
        (right_input as i8 - left_input as i8) as f32,
        (forward_input as i8 - backward_input as i8) as f32,
    )
    .normalize_or_zero();

    if forward_input || backward_input {
        actor.horizontal_velocity.y -= direction.y * ACCELERATION * dt;
    }
    if left_input || right_input {
        actor.horizontal_velocity.x -= direction.x * ACCELERATION * dt;
    }

    // Probe at the pre-displacement position. With no hit the actor's
    // absolute height stands in for the ground distance, which turns
    // "walked off every surface" into free-fall from the current height.
    let hit = probe.cast(actor.position);
    let distance_to_ground = match hit {
        Some(hit) => actor.position.y - hit.surface_y,
        None => actor.position.y,
    };

    if distance_to_ground > EYE_HEIGHT {
        actor.vertical_velocity -= GRAVITY * dt;
        actor.stance = Stance::Airborne;
    }

    // Planar displacement along the camera's flattened basis. The sign
    // inversion matches the velocity accumulation above.
    let forward = input.camera.forward().with_y(0.0).normalize_or_zero();
    let right = input.camera.right().with_y(0.0).normalize_or_zero();
    actor.position += right * (-actor.horizontal_velocity.x * dt);
    actor.position += forward * (-actor.horizontal_velocity.y * dt);

    actor.position.y += actor.vertical_velocity * dt;

    // Snap after displacement: the actor may transiently compute a
    // sub-surface y mid-frame but never ends a frame below ground.
    if let Some(hit) = hit {
        if actor.position.y < hit.surface_y + EYE_HEIGHT {
            actor.position.y = hit.surface_y + EYE_HEIGHT;
            actor.vertical_velocity = 0.0;
            if actor.stance == Stance::Airborne {
                log::debug!("landed at y = {}", actor.position.y);
            }
            actor.can_jump = true;
            actor.stance = Stance::Grounded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::slab;
    use std::collections::BTreeSet;

    const EPSILON: f32 = 1e-4;

    fn flat_ground(top_y: f32) -> GroundProbe {
        let mut probe = GroundProbe::default();
        probe.register(slab(Vec2::ZERO, Vec2::splat(50.0), top_y, 1.0));
        probe
    }

    fn frame(dt: f32, held: &[Action], pressed: &[Action]) -> FrameInput {
        FrameInput {
            delta_secs: dt,
            captured: true,
            held: held.iter().copied().collect::<BTreeSet<_>>(),
            pressed: pressed.iter().copied().collect::<BTreeSet<_>>(),
            camera: Transform::default(),
        }
    }

    fn actor_at(y: f32) -> ActorState {
        ActorState {
            position: Vec3::new(0.0, y, 0.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_resting_at_eye_height_is_stable() {
        // distance_to_ground == EYE_HEIGHT exactly: gravity must not apply.
        let probe = flat_ground(0.0);
        let mut actor = actor_at(EYE_HEIGHT);

        simulate(&mut actor, &probe, &frame(0.1, &[], &[]));

        assert_eq!(actor.vertical_velocity, 0.0);
        assert_eq!(actor.position.y, EYE_HEIGHT);
        assert_eq!(actor.stance, Stance::Grounded);
    }

    #[test]
    fn test_falls_then_snaps_to_ground() {
        let probe = flat_ground(0.0);
        let mut actor = actor_at(6.0);
        let input = frame(0.016, &[], &[]);

        let mut previous_y = actor.position.y;
        let mut frames = 0;
        while actor.stance == Stance::Airborne || actor.position.y > EYE_HEIGHT + EPSILON {
            simulate(&mut actor, &probe, &input);
            assert!(
                actor.position.y < previous_y || actor.position.y == EYE_HEIGHT,
                "descent must be monotonic until the snap"
            );
            previous_y = actor.position.y;
            frames += 1;
            assert!(frames < 1000, "actor never reached the ground");
        }

        assert_eq!(actor.position.y, EYE_HEIGHT);
        assert_eq!(actor.vertical_velocity, 0.0);
        assert!(actor.can_jump);
        assert_eq!(actor.stance, Stance::Grounded);
    }

    #[test]
    fn test_snap_invariant_holds_every_frame() {
        let probe = flat_ground(0.0);
        let mut actor = actor_at(30.0);
        let input = frame(0.05, &[Action::MoveForward], &[]);

        for _ in 0..200 {
            simulate(&mut actor, &probe, &input);
            if probe.cast(actor.position).is_some() {
                assert!(actor.position.y >= EYE_HEIGHT - EPSILON);
            }
        }
    }

    #[test]
    fn test_jump_impulse_before_gravity_and_snap() {
        let probe = flat_ground(0.0);
        let mut actor = actor_at(EYE_HEIGHT);

        simulate(&mut actor, &probe, &frame(0.1, &[], &[Action::Jump]));

        // The probe ran against the pre-jump position (distance == eye
        // height), so no gravity bled into the impulse this frame.
        assert_eq!(actor.vertical_velocity, JUMP_IMPULSE);
        assert!(!actor.can_jump);
        assert_eq!(actor.stance, Stance::Airborne);
        assert!(actor.position.y > EYE_HEIGHT);
    }

    #[test]
    fn test_jump_applied_once_per_ground_contact() {
        let probe = flat_ground(0.0);
        let mut actor = actor_at(EYE_HEIGHT);
        simulate(&mut actor, &probe, &frame(0.016, &[], &[Action::Jump]));

        // Mash jump while airborne: no further impulse.
        let velocity_after_first = actor.vertical_velocity;
        simulate(&mut actor, &probe, &frame(0.016, &[], &[Action::Jump]));
        assert!(actor.vertical_velocity < velocity_after_first);
        assert!(actor.vertical_velocity > velocity_after_first - JUMP_IMPULSE);

        // Ride the arc back down; landing re-arms the jump.
        let input = frame(0.016, &[], &[]);
        for _ in 0..2000 {
            if actor.can_jump {
                break;
            }
            simulate(&mut actor, &probe, &input);
        }
        assert!(actor.can_jump, "landing must re-enable jumping");
        assert_eq!(actor.stance, Stance::Grounded);
    }

    #[test]
    fn test_damping_converges_to_zero() {
        let probe = flat_ground(0.0);
        let mut actor = actor_at(EYE_HEIGHT);
        actor.horizontal_velocity = Vec2::new(30.0, -40.0);
        let input = frame(0.016, &[], &[]);

        let mut previous = actor.horizontal_velocity.length();
        let mut frames = 0;
        while actor.horizontal_velocity.length() > 1e-3 {
            simulate(&mut actor, &probe, &input);
            let current = actor.horizontal_velocity.length();
            assert!(current < previous, "speed must strictly decrease");
            previous = current;
            frames += 1;
            assert!(frames < 500, "damping failed to converge");
        }
    }

    #[test]
    fn test_opposing_keys_cancel_without_nan() {
        let probe = flat_ground(0.0);
        let mut actor = actor_at(EYE_HEIGHT);
        let held = [
            Action::MoveForward,
            Action::MoveBackward,
            Action::MoveLeft,
            Action::MoveRight,
        ];

        for _ in 0..10 {
            simulate(&mut actor, &probe, &frame(0.016, &held, &[]));
        }

        assert!(actor.position.is_finite());
        assert_eq!(actor.horizontal_velocity, Vec2::ZERO);
        assert_eq!(actor.position.x, 0.0);
        assert_eq!(actor.position.z, 0.0);
    }

    #[test]
    fn test_forward_key_moves_along_camera_forward() {
        let probe = flat_ground(0.0);
        let mut actor = actor_at(EYE_HEIGHT);
        let input = frame(0.016, &[Action::MoveForward], &[]);

        for _ in 0..10 {
            simulate(&mut actor, &probe, &input);
        }

        // Default camera faces -Z.
        assert!(actor.position.z < 0.0);
        assert_eq!(actor.position.x, 0.0);
    }

    #[test]
    fn test_frozen_while_not_captured() {
        let probe = flat_ground(0.0);
        let mut actor = actor_at(20.0);
        actor.horizontal_velocity = Vec2::new(5.0, 5.0);
        let initial = actor;

        let mut input = frame(0.1, &[Action::MoveForward], &[Action::Jump]);
        input.captured = false;

        for _ in 0..20 {
            simulate(&mut actor, &probe, &input);
        }
        assert_eq!(actor, initial, "uncaptured input must freeze the actor");
    }

    #[test]
    fn test_free_fall_without_ground_has_no_terminal_velocity() {
        let probe = GroundProbe::default();
        let mut actor = actor_at(100.0);
        let input = frame(0.016, &[], &[]);

        for _ in 0..200 {
            simulate(&mut actor, &probe, &input);
        }

        assert!(actor.vertical_velocity < -200.0);
        assert_eq!(actor.stance, Stance::Airborne);
    }

    #[test]
    fn test_walk_off_ledge_free_falls_from_current_height() {
        // Platform with its top above the implicit zero plane; stepping
        // past its edge loses the hit and must start a fall, not hover.
        let mut probe = GroundProbe::default();
        probe.register(slab(Vec2::ZERO, Vec2::splat(10.0), 2.0, 1.0));

        let mut actor = actor_at(2.0 + EYE_HEIGHT);
        actor.position.x = 20.0; // just walked past the edge
        let input = frame(0.016, &[], &[]);

        simulate(&mut actor, &probe, &input);
        assert!(actor.vertical_velocity < 0.0);
        assert_eq!(actor.stance, Stance::Airborne);

        for _ in 0..500 {
            simulate(&mut actor, &probe, &input);
        }
        assert!(actor.position.y < 0.0, "nothing below: the fall is unbounded");
    }

    #[test]
    fn test_zero_delta_leaves_actor_unchanged() {
        let probe = flat_ground(0.0);
        let mut actor = actor_at(8.0);
        let initial = actor;

        simulate(&mut actor, &probe, &frame(0.0, &[Action::MoveForward], &[]));
        assert_eq!(actor, initial);
    }
}
