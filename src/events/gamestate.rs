//! Game state transition event and observer.
//!
//! Systems request a change of [`GameStates`] by updating [`NextGameState`].
//! Emitting a [`GameStateChangedEvent`] then triggers the observer in this
//! module, which applies the transition to [`GameState`] and invokes the
//! enter hooks stored in
//! [`crate::resources::systemsstore::SystemsStore`].
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, info, warn};

/// Key of the hook that puts a finished round back to its starting layout.
pub const RESTART_HOOK: &str = "restart";

/// Event used to indicate that a pending game state transition should be
/// applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Observer that applies a pending game state transition.
///
/// Contract
/// - Reads the intention from [`NextGameState`].
/// - If pending, copies the new value into [`GameState`], runs the enter
///   hook for the transition and resets [`NextGameState`] to [`Unchanged`].
/// - If any required resource is missing, logs a diagnostic and returns.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    debug!("GameStateChangedEvent triggered");

    if let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    {
        match next_game_state.get() {
            Pending(new_state) => {
                let old_state = game_state.get();
                info!("Transitioning from {:?} to {:?}", old_state, new_state);
                game_state.set(new_state);
                next_game_state.reset();
                on_state_enter(old_state, new_state, &mut commands, &systems_store);
            }
            Unchanged => {
                debug!("No state change pending.");
            }
        }
    } else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
    }
}

/// Internal: run the hook for entering `new` from `old`.
fn on_state_enter(
    old: GameStates,
    new: GameStates,
    commands: &mut Commands,
    systems_store: &SystemsStore,
) {
    match (old, new) {
        (GameStates::Won | GameStates::Lost, GameStates::Playing) => {
            match systems_store.get(RESTART_HOOK) {
                Some(restart_id) => commands.run_system(*restart_id),
                None => error!("Restart system not found in SystemsStore"),
            }
        }
        (_, GameStates::Won) => info!("Round won"),
        (_, GameStates::Lost) => info!("Round lost"),
        (GameStates::Playing, GameStates::Playing) => debug!("Already playing"),
    }
}
