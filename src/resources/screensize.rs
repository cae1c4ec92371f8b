//! Screen size resource.
//!
//! Stores the window dimensions in pixels. Layout of the status text and the
//! debug overlay read this.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
