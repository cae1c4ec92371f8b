//! Z-index component for render ordering.
//!
//! Background layers carry a [`ZIndex`] so the renderer can paint them
//! back-to-front regardless of spawn order.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
