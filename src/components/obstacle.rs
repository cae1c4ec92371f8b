//! Scrolling hazard.
//!
//! Obstacles move leftward at constant speed. Each one remembers its slot in
//! the staggered startup layout so a restart can put it back, and the slot
//! of the last obstacle decides when the round is won.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;

#[derive(Component, Clone, Copy, Debug)]
pub struct Obstacle {
    /// Index in the staggered layout, `0..count`.
    pub slot: usize,
    /// Leftward speed in pixels per second.
    pub speed: f32,
    /// Radius of the collision circle centered on the footprint.
    pub collision_radius: f32,
}

impl Obstacle {
    pub fn new(slot: usize, speed: f32, collision_radius: f32) -> Self {
        Self {
            slot,
            speed,
            collision_radius,
        }
    }

    /// Move `pos` left by `speed * dt`.
    pub fn advance(&self, pos: &mut Vector2, dt: f32) {
        pos.x -= self.speed * dt;
    }

    /// Collision circle (center, radius) for an obstacle at `pos`.
    pub fn collision_circle(&self, pos: Vector2, footprint: &BoxCollider) -> (Vector2, f32) {
        (footprint.center(pos), self.collision_radius)
    }
}
