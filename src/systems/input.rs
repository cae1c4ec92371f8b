//! Input system.
//!
//! [`update_input_state`] reads the keyboard from raylib each frame and writes
//! the results into [`crate::resources::input::InputState`]. Pressing the
//! debug key emits a [`SwitchDebugEvent`].
use bevy_ecs::prelude::*;
use raylib::ffi::KeyboardKey;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::{BoolState, InputState};

/// Poll raylib for keyboard input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let refresh = |state: &mut BoolState| {
        let key: KeyboardKey = state.key_binding;
        state.active = rl.is_key_down(key);
        state.just_pressed = rl.is_key_pressed(key);
    };

    refresh(&mut input.jump);
    refresh(&mut input.restart);
    refresh(&mut input.mode_debug);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
