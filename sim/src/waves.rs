//! Tunable parameters for the procedural water surface.
//!
//! The simulation only owns the data contract: a bag of wave-shape knobs
//! plus the accumulated simulation time, read by the renderer every frame
//! and overwritten at will by the debug panel. Evaluating the actual
//! vertex displacement happens in the renderer's shading stage, not here.

use bevy::prelude::*;

/// Wave-shape knobs and the running simulation clock.
///
/// Apart from `time`, every field is opaque pass-through state: the core
/// forwards the most recent value with no versioning and enforces no
/// invariants (the panel clamps to its own UI ranges).
#[derive(Resource, Reflect, Debug, Clone, PartialEq)]
#[reflect(Resource)]
pub struct WaveParameters {
    /// Amplitude of the large rolling waves.
    pub big_elevation: f32,
    /// Spatial frequency of the large waves along X and Z.
    pub big_frequency: Vec2,
    pub big_speed: f32,
    /// Amplitude of the small noise-driven ripples.
    pub small_elevation: f32,
    pub small_frequency: f32,
    pub small_speed: f32,
    /// Ripple octave count.
    pub small_iterations: u32,
    /// Linear RGBA of the troughs.
    pub depth_color: Vec4,
    /// Linear RGBA of the crests.
    pub surface_color: Vec4,
    pub color_offset: f32,
    pub color_multiplier: f32,
    /// Accumulated simulation time in seconds, monotonically increasing.
    pub time: f32,
}

impl Default for WaveParameters {
    fn default() -> Self {
        Self {
            big_elevation: 0.066,
            big_frequency: Vec2::new(4.0, 1.5),
            big_speed: 0.75,
            small_elevation: 0.07,
            small_frequency: 1.5,
            small_speed: 0.2,
            small_iterations: 4,
            // #186691
            depth_color: Vec4::new(0.094, 0.4, 0.569, 1.0),
            // #9bd8ff
            surface_color: Vec4::new(0.608, 0.847, 1.0, 1.0),
            color_offset: 0.085,
            color_multiplier: 0.9,
            time: 0.0,
        }
    }
}

impl WaveParameters {
    /// Advances the simulation clock. The only field the core writes.
    pub fn advance(&mut self, delta_secs: f32) {
        self.time += delta_secs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_values() {
        let params = WaveParameters::default();
        assert_eq!(params.big_elevation, 0.066);
        assert_eq!(params.big_frequency, Vec2::new(4.0, 1.5));
        assert_eq!(params.big_speed, 0.75);
        assert_eq!(params.small_iterations, 4);
        assert_eq!(params.color_multiplier, 0.9);
        assert_eq!(params.time, 0.0);
    }

    #[test]
    fn test_time_accumulates_monotonically() {
        let mut params = WaveParameters::default();
        let mut previous = params.time;
        for _ in 0..100 {
            params.advance(0.016);
            assert!(params.time > previous);
            previous = params.time;
        }
        assert!((params.time - 1.6).abs() < 1e-3);
    }
}
