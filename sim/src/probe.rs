//! Downward ground detection.
//!
//! The probe owns the set of registered collidable volumes and answers one
//! question: casting a ray straight down from a point, what is the nearest
//! surface underneath it? Registration happens asynchronously as the scene
//! loads, so an empty probe is a normal transient state (the actor simply
//! finds no ground until the first collidable arrives).

use bevy::math::bounding::{Aabb3d, RayCast3d};
use bevy::prelude::*;

/// Result of a downward cast. Produced fresh every frame, never retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundHit {
    /// World-space Y of the hit point.
    pub surface_y: f32,
    /// Distance from the ray origin to the hit, along (0,-1,0).
    pub distance: f32,
}

/// Registered collidable surfaces, queried by the locomotion integrator
/// once per frame.
#[derive(Resource, Debug, Default, Clone)]
pub struct GroundProbe {
    colliders: Vec<Aabb3d>,
}

impl GroundProbe {
    /// Registers a collidable volume.
    pub fn register(&mut self, aabb: Aabb3d) {
        self.colliders.push(aabb);
    }

    /// Forgets every registered collidable, returning the probe to its
    /// initial empty state. Used when the scene is torn down.
    pub fn clear(&mut self) {
        self.colliders.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.colliders.is_empty()
    }

    pub fn len(&self) -> usize {
        self.colliders.len()
    }

    /// Casts a ray from `origin` straight down with unbounded range and
    /// returns the nearest hit among all registered collidables, or `None`
    /// if nothing lies below. Pure over its inputs.
    ///
    /// Callers must not assume `surface_y <= origin.y`: an origin inside a
    /// collidable yields a zero-distance hit at the origin itself.
    pub fn cast(&self, origin: Vec3) -> Option<GroundHit> {
        let ray = RayCast3d::new(origin, Dir3::NEG_Y, f32::MAX);

        self.colliders
            .iter()
            .filter_map(|aabb| ray.aabb_intersection_at(aabb))
            .min_by(|a, b| a.total_cmp(b))
            .map(|distance| GroundHit {
                surface_y: origin.y - distance,
                distance,
            })
    }
}

/// Axis-aligned slab with its top face at `top_y`, spanning `half_extent`
/// in X/Z around `center_xz`. Convenience for scene setup and tests.
pub fn slab(center_xz: Vec2, half_extent: Vec2, top_y: f32, thickness: f32) -> Aabb3d {
    Aabb3d::new(
        Vec3::new(center_xz.x, top_y - thickness * 0.5, center_xz.y),
        Vec3::new(half_extent.x, thickness * 0.5, half_extent.y),
    )
}
