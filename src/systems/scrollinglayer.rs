//! Parallax scrolling system.
use bevy_ecs::prelude::*;

use crate::components::scrollinglayer::ScrollingLayer;
use crate::resources::worldtime::WorldTime;

/// Scroll every background layer. Runs in every state: the background keeps
/// moving behind the status message of a finished round.
pub fn scroll_layers(mut query: Query<&mut ScrollingLayer>, time: Res<WorldTime>) {
    for mut layer in query.iter_mut() {
        layer.scroll(time.delta);
    }
}
