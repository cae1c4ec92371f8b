//! Parallax background layer.
//!
//! A [`ScrollingLayer`] samples its texture through a source rectangle that
//! slides right over time; the destination always covers the whole window.
//! The source x offset wraps modulo the texture width so it stays bounded
//! and the renderer's repeat sampling keeps the image continuous.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Rectangle, Vector2};

#[derive(Component, Clone, Debug)]
pub struct ScrollingLayer {
    pub tex_key: String,
    speed: f32,
    texture_width: f32,
    source: Rectangle,
    dest: Rectangle,
}

impl ScrollingLayer {
    pub fn new(
        tex_key: impl Into<String>,
        speed: f32,
        texture_size: Vector2,
        window_size: Vector2,
    ) -> Self {
        Self {
            tex_key: tex_key.into(),
            speed,
            texture_width: texture_size.x,
            source: Rectangle {
                x: 0.0,
                y: 0.0,
                width: texture_size.x,
                height: texture_size.y,
            },
            dest: Rectangle {
                x: 0.0,
                y: 0.0,
                width: window_size.x,
                height: window_size.y,
            },
        }
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn source(&self) -> Rectangle {
        self.source
    }

    pub fn dest(&self) -> Rectangle {
        self.dest
    }

    pub fn scroll(&mut self, dt: f32) {
        let x = self.source.x + self.speed * dt;
        self.source.x = if self.texture_width > 0.0 {
            x.rem_euclid(self.texture_width)
        } else {
            x
        };
    }
}
