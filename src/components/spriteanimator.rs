//! Frame-strip animation timing.
//!
//! A [`SpriteAnimator`] tracks elapsed time and the current frame of a
//! spritesheet laid out as a grid. It does not own or touch the sprite it
//! animates: [`SpriteAnimator::advance`] returns the new source offset when
//! the frame changes and the animation system writes it into the entity's
//! [`Sprite`](super::sprite::Sprite).
use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Debug, Clone, Component)]
pub struct SpriteAnimator {
    rows: usize,
    columns: usize,
    total_frames: usize,
    /// Seconds each frame stays on screen. Must be positive.
    frame_duration: f32,
    frame_size: Vector2,
    elapsed_time: f32,
    frame_index: usize,
}

impl SpriteAnimator {
    /// Build an animator for a `rows` x `columns` sheet of `frame_size` frames,
    /// of which the first `total_frames` are played.
    pub fn new(
        rows: usize,
        columns: usize,
        total_frames: usize,
        frame_duration: f32,
        frame_size: Vector2,
    ) -> Self {
        debug_assert!(frame_duration > 0.0, "frame duration must be positive");
        debug_assert!(columns > 0 && total_frames > 0);
        debug_assert!(total_frames <= rows * columns);
        Self {
            rows,
            columns,
            total_frames,
            frame_duration,
            frame_size,
            elapsed_time: 0.0,
            frame_index: 0,
        }
    }

    /// Single-row strip of `frames` frames.
    pub fn strip(frames: usize, frame_duration: f32, frame_size: Vector2) -> Self {
        Self::new(1, frames, frames, frame_duration, frame_size)
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    /// Accumulate `dt` seconds. Once a full frame duration has built up the
    /// accumulator restarts at zero, the index moves to the next frame
    /// (wrapping) and the new source offset is returned.
    pub fn advance(&mut self, dt: f32) -> Option<Vector2> {
        self.elapsed_time += dt;
        if self.elapsed_time < self.frame_duration {
            return None;
        }
        self.elapsed_time = 0.0;
        self.frame_index = (self.frame_index + 1) % self.total_frames;
        Some(self.offset())
    }

    /// Source offset of the current frame inside the sheet.
    pub fn offset(&self) -> Vector2 {
        let column = self.frame_index % self.columns;
        let row = self.frame_index / self.columns;
        Vector2 {
            x: column as f32 * self.frame_size.x,
            y: row as f32 * self.frame_size.y,
        }
    }
}
