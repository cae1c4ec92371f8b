use bevy_ecs::prelude::Resource;

/// Simulation clock.
///
/// `delta` is the clamped frame time in seconds that every system integrates
/// with. `max_delta` caps frame-time spikes (window drags, breakpoints).
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
    pub max_delta: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            max_delta: 0.1,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    /// Cap frame deltas at `max_delta` seconds. Non-positive or non-finite
    /// caps are ignored.
    pub fn with_max_delta(mut self, max_delta: f32) -> Self {
        if max_delta.is_finite() && max_delta > 0.0 {
            self.max_delta = max_delta;
        }
        self
    }
}
