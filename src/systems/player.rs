//! Player physics system.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

/// Ground check, jump and vertical integration for every [`Player`].
///
/// See [`Player::step`] for the order of operations.
pub fn player_physics(
    mut query: Query<(&mut Player, &mut MapPosition)>,
    input: Res<InputState>,
    time: Res<WorldTime>,
) {
    for (mut player, mut position) in query.iter_mut() {
        player.step(&mut position.pos.y, time.delta, input.jump.just_pressed);
    }
}
