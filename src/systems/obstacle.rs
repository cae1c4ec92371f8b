//! Obstacle movement system.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::resources::worldtime::WorldTime;

/// Scroll every obstacle left by its own speed.
pub fn obstacle_movement(
    mut query: Query<(&Obstacle, &mut MapPosition)>,
    time: Res<WorldTime>,
) {
    for (obstacle, mut position) in query.iter_mut() {
        obstacle.advance(&mut position.pos, time.delta);
    }
}
