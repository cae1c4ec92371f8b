//! Player-controlled runner.
//!
//! The [`Player`] only moves vertically. Its horizontal position is fixed at
//! spawn time and the ground is a hard floor at `ground_y`. Velocity and
//! gravity are pixels per second and are integrated with the frame delta.

use bevy_ecs::prelude::Component;

/// Vertical-only physics state of the player.
///
/// # Fields
/// - `ground_y` - y of the sprite's top edge when standing on the floor
/// - `gravity` - downward acceleration in pixels per second squared
/// - `jump_impulse` - upward speed added by a jump, in pixels per second
/// - `velocity` - current vertical speed (negative is up)
/// - `airborne` - set by the ground check at the start of each step
#[derive(Component, Clone, Debug)]
pub struct Player {
    pub ground_y: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub velocity: f32,
    pub airborne: bool,
}

impl Player {
    pub fn new(ground_y: f32, gravity: f32, jump_impulse: f32) -> Self {
        Self {
            ground_y,
            gravity,
            jump_impulse,
            velocity: 0.0,
            airborne: false,
        }
    }

    pub fn is_grounded(&self) -> bool {
        !self.airborne
    }

    /// Advance one frame.
    ///
    /// Ground check first: on or below the floor snaps to it and stops,
    /// otherwise gravity accumulates. A jump is only taken when the ground
    /// check found the player grounded. The new velocity is then integrated
    /// into `y`, and a landing inside this step is clamped to the floor.
    pub fn step(&mut self, y: &mut f32, dt: f32, jump_pressed: bool) {
        if *y >= self.ground_y {
            *y = self.ground_y;
            self.velocity = 0.0;
            self.airborne = false;
        } else {
            self.velocity += self.gravity * dt;
            self.airborne = true;
        }

        if jump_pressed && !self.airborne {
            self.velocity -= self.jump_impulse;
        }

        *y += self.velocity * dt;

        if *y > self.ground_y {
            *y = self.ground_y;
            self.velocity = 0.0;
        }
    }

    /// Put the player back on the floor, at rest.
    pub fn reset(&mut self, y: &mut f32) {
        *y = self.ground_y;
        self.velocity = 0.0;
        self.airborne = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn scarfy() -> Player {
        Player::new(252.0, 2000.0, 900.0)
    }

    #[test]
    fn test_standing_player_stays_on_ground() {
        let mut player = scarfy();
        let mut y = 252.0;
        for _ in 0..10 {
            player.step(&mut y, DT, false);
        }
        assert_eq!(y, 252.0);
        assert_eq!(player.velocity, 0.0);
        assert!(player.is_grounded());
    }

    #[test]
    fn test_below_ground_is_snapped_up() {
        let mut player = scarfy();
        let mut y = 300.0;
        player.velocity = 123.0;
        player.step(&mut y, DT, false);
        assert_eq!(y, 252.0);
        assert_eq!(player.velocity, 0.0);
        assert!(player.is_grounded());
    }

    #[test]
    fn test_jump_from_ground() {
        let mut player = scarfy();
        let mut y = 252.0;
        player.step(&mut y, DT, true);
        assert_eq!(player.velocity, -900.0);
        assert!(y < 252.0);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let mut player = scarfy();
        let mut y = 252.0;
        player.step(&mut y, DT, true);
        let velocity_after_jump = player.velocity;

        player.step(&mut y, DT, true);
        assert!(player.airborne);
        // Only gravity acted on the second frame.
        let expected = velocity_after_jump + 2000.0 * DT;
        assert!((player.velocity - expected).abs() < 1e-3);
    }

    #[test]
    fn test_jump_arc_never_crosses_ground() {
        let mut player = scarfy();
        let mut y = 252.0;
        player.step(&mut y, DT, true);
        let mut landed = false;
        for _ in 0..600 {
            player.step(&mut y, DT, false);
            assert!(y <= 252.0);
            if player.is_grounded() {
                landed = true;
                break;
            }
        }
        assert!(landed);
        assert_eq!(y, 252.0);
        assert_eq!(player.velocity, 0.0);
    }

    #[test]
    fn test_reset_puts_player_on_ground() {
        let mut player = scarfy();
        let mut y = 100.0;
        player.velocity = -400.0;
        player.airborne = true;
        player.reset(&mut y);
        assert_eq!(y, 252.0);
        assert_eq!(player.velocity, 0.0);
        assert!(player.is_grounded());
    }
}
