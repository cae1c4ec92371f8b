//! Time update system.
//!
//! Updates the shared [`WorldTime`](crate::resources::worldtime::WorldTime)
//! resource once per frame.
use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is the raw frame delta in seconds as reported by raylib. It is
/// clamped to `[0, max_delta]` before `time_scale` is applied, so a long
/// stall does not teleport the player through the floor or an obstacle.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let clamped = dt.max(0.0).min(wt.max_delta);
    let scaled_dt = clamped * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}
