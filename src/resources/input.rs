//! Per-frame keyboard input resource.
//!
//! Captures the keys the game reacts to and exposes them to systems via the
//! [`InputState`] resource. SPACE jumps, ENTER restarts a finished round and
//! F11 toggles the debug overlay.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy)]
/// Boolean key state with an associated keyboard binding.
pub struct BoolState {
    /// Whether the key is currently held down.
    pub active: bool,
    /// Whether the key went down this frame.
    pub just_pressed: bool,

    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    pub fn bound_to(key_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            key_binding,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Resource capturing the per-frame keyboard state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub jump: BoolState,
    pub restart: BoolState,
    pub mode_debug: BoolState,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            jump: BoolState::bound_to(KeyboardKey::KEY_SPACE),
            restart: BoolState::bound_to(KeyboardKey::KEY_ENTER),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
        }
    }
}
