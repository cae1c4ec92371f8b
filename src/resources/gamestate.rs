//! High-level game state resources.
//!
//! These resources track the authoritative current state of the round and any
//! pending transition requested by systems. See
//! `crate::events::gamestate::observe_gamestate_change_event` for how a
//! transition is applied and hooks are invoked.

use bevy_ecs::prelude::Resource;

/// Discrete states of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    /// Entities update and outcomes are evaluated.
    #[default]
    Playing,
    /// The last obstacle left the screen.
    Won,
    /// The player touched an obstacle.
    Lost,
}

impl GameStates {
    /// Status line shown while the round is stopped.
    pub fn status_message(&self) -> Option<&'static str> {
        match self {
            GameStates::Playing => None,
            GameStates::Won => Some("You were able to escape"),
            GameStates::Lost => Some("You were not able to escape"),
        }
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, GameStates::Won | GameStates::Lost)
    }
}

/// Representation of a requested next state.
///
/// Use [`NextGameState::set`] to mark a transition as pending; an observer
/// will later apply it and reset the value to [`NextGameStates::Unchanged`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Playing`].
    pub fn new() -> Self {
        GameState {
            current: GameStates::Playing,
        }
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }
    /// Update the current state immediately.
    ///
    /// Prefer requesting transitions via [`NextGameState`] so the enter hooks
    /// run.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

/// Intent to change to a new game state.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    /// Create a new value initialized to [`NextGameStates::Unchanged`].
    pub fn new() -> Self {
        NextGameState {
            next: NextGameStates::Unchanged,
        }
    }

    /// Get the current transition request.
    pub fn get(&self) -> NextGameStates {
        self.next
    }

    /// Request a transition to `next` by marking it as pending.
    ///
    /// The first request of a frame wins; later ones are ignored until the
    /// pending value has been applied.
    pub fn set(&mut self, next: GameStates) {
        if self.next == NextGameStates::Unchanged {
            self.next = NextGameStates::Pending(next);
        }
    }

    /// Reset to [`NextGameStates::Unchanged`].
    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}
