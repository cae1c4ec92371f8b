//! Round state systems and run conditions.
use crate::events::gamestate::GameStateChangedEvent;
use crate::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use crate::resources::input::InputState;
use bevy_ecs::prelude::*;

/// Trigger [`GameStateChangedEvent`] when a transition has been requested.
pub fn check_pending_state(mut commands: Commands, next_state: Res<NextGameState>) {
    if let NextGameStates::Pending(_) = next_state.get() {
        commands.trigger(GameStateChangedEvent {});
    }
}

/// Request a new round when the restart key is pressed on a finished one.
///
/// Any other key leaves the state alone.
pub fn check_restart_request(input: Res<InputState>, mut next_state: ResMut<NextGameState>) {
    if input.restart.just_pressed {
        next_state.set(GameStates::Playing);
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}

pub fn state_is_stopped(state: Res<GameState>) -> bool {
    state.get().is_stopped()
}
