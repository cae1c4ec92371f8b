//! World-space position of an entity.
//!
//! The position is the top-left corner of the entity's sprite frame and of
//! its collision footprint. Systems that move entities write here; the
//! renderer and collision checks read from here.
use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Top-left corner of an entity in window pixels.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
