//! Win/loss evaluation.
//!
//! Runs once per frame while playing, after every entity has moved. The round
//! is won when the last obstacle of the layout has scrolled past
//! `win_threshold_x`; otherwise it is lost as soon as any obstacle's
//! collision circle touches the player's rectangle.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};

pub fn check_outcome(
    obstacles: Query<(&Obstacle, &MapPosition, &BoxCollider)>,
    players: Query<(&MapPosition, &BoxCollider), With<Player>>,
    config: Res<GameConfig>,
    mut next_state: ResMut<NextGameState>,
) {
    let last = obstacles
        .iter()
        .max_by_key(|(obstacle, _, _)| obstacle.slot)
        .map(|(_, position, _)| position.pos.x);

    if last.is_some_and(|x| x < config.win_threshold_x) {
        next_state.set(GameStates::Won);
        return;
    }

    for (player_pos, player_box) in players.iter() {
        let player_rect = player_box.rect(player_pos.pos);
        for (obstacle, position, footprint) in obstacles.iter() {
            let (center, radius) = obstacle.collision_circle(position.pos, footprint);
            if player_rect.check_collision_circle_rec(center, radius) {
                debug!("Obstacle {} hit the player at {:?}", obstacle.slot, center);
                next_state.set(GameStates::Lost);
            }
        }
    }
}
