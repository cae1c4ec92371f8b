use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Fixed-size rectangular collision footprint, anchored at the entity's
/// [`MapPosition`](super::mapposition::MapPosition).
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vector2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vector2::new(width, height),
        }
    }

    /// Collision rectangle for an entity at `position`.
    pub fn rect(&self, position: Vector2) -> Rectangle {
        Rectangle {
            x: position.x,
            y: position.y,
            width: self.size.x,
            height: self.size.y,
        }
    }

    /// Center of the footprint for an entity at `position`.
    pub fn center(&self, position: Vector2) -> Vector2 {
        Vector2 {
            x: position.x + self.size.x * 0.5,
            y: position.y + self.size.y * 0.5,
        }
    }
}
