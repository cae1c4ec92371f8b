use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

/// Sprite is identified by a texture key, its frame size in pixels and an offset if the texture is a spritesheet.
/// The offset is used to select the correct frame from the spritesheet.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            offset: Vector2::zero(),
        }
    }

    /// Source rectangle of the current frame inside the texture.
    pub fn source(&self) -> Rectangle {
        Rectangle {
            x: self.offset.x,
            y: self.offset.y,
            width: self.width,
            height: self.height,
        }
    }
}
