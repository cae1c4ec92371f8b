//! Sprite animation system.
//!
//! Advances every [`SpriteAnimator`] by the frame delta and copies the new
//! source offset into the entity's [`Sprite`]. Players in the air keep their
//! current frame.

use bevy_ecs::prelude::*;

use crate::components::player::Player;
use crate::components::sprite::Sprite;
use crate::components::spriteanimator::SpriteAnimator;
use crate::resources::worldtime::WorldTime;

pub fn sprite_animation(
    mut query: Query<(&mut SpriteAnimator, &mut Sprite, Option<&Player>)>,
    time: Res<WorldTime>,
) {
    for (mut animator, mut sprite, maybe_player) in query.iter_mut() {
        if maybe_player.is_some_and(|player| player.airborne) {
            continue;
        }
        if let Some(offset) = animator.advance(time.delta) {
            sprite.offset = offset;
        }
    }
}
