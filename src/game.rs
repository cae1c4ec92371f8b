//! Round setup, layout and restart.
//!
//! This module owns the fixed cast of the game (one player, three parallax
//! layers and a row of obstacles), the staggered obstacle layout shared by
//! startup and restart, and the wiring of resources, observers and systems
//! into a [`World`] and [`Schedule`].

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use raylib::prelude::Vector2;

use crate::components::boxcollider::BoxCollider;
use crate::components::mapposition::MapPosition;
use crate::components::obstacle::Obstacle;
use crate::components::player::Player;
use crate::components::scrollinglayer::ScrollingLayer;
use crate::components::sprite::Sprite;
use crate::components::spriteanimator::SpriteAnimator;
use crate::components::zindex::ZIndex;
use crate::events::gamestate::{RESTART_HOOK, observe_gamestate_change_event};
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, NextGameState};
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::systemsstore::SystemsStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::sprite_animation;
use crate::systems::gamestate::{
    check_pending_state, check_restart_request, state_is_playing, state_is_stopped,
};
use crate::systems::obstacle::obstacle_movement;
use crate::systems::outcome::check_outcome;
use crate::systems::player::player_physics;
use crate::systems::scrollinglayer::scroll_layers;

pub const PLAYER_TEXTURE: &str = "scarfy";
pub const OBSTACLE_TEXTURE: &str = "nebula";
pub const LAYER_TEXTURES: [&str; 3] = ["far-buildings", "back-buildings", "foreground"];

/// Texture keys and the paths they are loaded from.
pub const TEXTURE_PATHS: [(&str, &str); 5] = [
    (PLAYER_TEXTURE, "./textures/scarfy.png"),
    (LAYER_TEXTURES[0], "./textures/far-buildings.png"),
    (LAYER_TEXTURES[1], "./textures/back-buildings.png"),
    (LAYER_TEXTURES[2], "./textures/foreground.png"),
    (OBSTACLE_TEXTURE, "./textures/12_nebula_spritesheet.png"),
];

// Player sheet: a single row of six 128x128 frames.
const PLAYER_FRAME_SIZE: f32 = 128.0;
const PLAYER_FRAMES: usize = 6;
const PLAYER_FRAME_TIME: f32 = 0.1;

// Obstacle sheet: 8x8 grid of 100x100 frames, 60 of them used.
const OBSTACLE_SIZE: f32 = 100.0;
const OBSTACLE_GRID: usize = 8;
const OBSTACLE_FRAMES: usize = 60;
const OBSTACLE_FRAME_TIME: f32 = 0.1;

/// Obstacles sit this far above the bottom edge, nudged down by
/// `OBSTACLE_Y_STEP` for every slot modulo 3.
const OBSTACLE_BASE_OFFSET_Y: f32 = 150.0;
const OBSTACLE_Y_STEP: f32 = 10.0;

/// Starting position of the obstacle in `slot`.
///
/// Used both when the round is first spawned and when it restarts.
pub fn obstacle_layout(slot: usize, config: &GameConfig) -> Vector2 {
    Vector2 {
        x: config.window_width as f32 + slot as f32 * config.obstacle_spacing,
        y: config.window_height as f32 - OBSTACLE_BASE_OFFSET_Y
            + OBSTACLE_Y_STEP * (slot % 3) as f32,
    }
}

/// Where the player stands: a quarter of the free width in, feet on the
/// bottom edge.
pub fn player_start(config: &GameConfig) -> Vector2 {
    Vector2 {
        x: (config.window_width as f32 - PLAYER_FRAME_SIZE) * 0.25,
        y: config.window_height as f32 - PLAYER_FRAME_SIZE,
    }
}

pub fn player_bundle(config: &GameConfig) -> impl Bundle {
    let start = player_start(config);
    let frame = Vector2 {
        x: PLAYER_FRAME_SIZE,
        y: PLAYER_FRAME_SIZE,
    };
    (
        Player::new(start.y, config.gravity, config.jump_impulse),
        MapPosition::new(start.x, start.y),
        BoxCollider::new(PLAYER_FRAME_SIZE, PLAYER_FRAME_SIZE),
        Sprite::new(PLAYER_TEXTURE, PLAYER_FRAME_SIZE, PLAYER_FRAME_SIZE),
        SpriteAnimator::strip(PLAYER_FRAMES, PLAYER_FRAME_TIME, frame),
    )
}

pub fn obstacle_bundle(slot: usize, config: &GameConfig) -> impl Bundle {
    let pos = obstacle_layout(slot, config);
    (
        Obstacle::new(slot, config.obstacle_speed, config.collision_radius),
        MapPosition::new(pos.x, pos.y),
        BoxCollider::new(OBSTACLE_SIZE, OBSTACLE_SIZE),
        Sprite::new(OBSTACLE_TEXTURE, OBSTACLE_SIZE, OBSTACLE_SIZE),
        SpriteAnimator::new(
            OBSTACLE_GRID,
            OBSTACLE_GRID,
            OBSTACLE_FRAMES,
            OBSTACLE_FRAME_TIME,
            Vector2 {
                x: OBSTACLE_SIZE,
                y: OBSTACLE_SIZE,
            },
        ),
    )
}

/// Background layer `depth` (0 is farthest) sampling a texture of `texture_size`.
pub fn layer_bundle(depth: usize, texture_size: Vector2, config: &GameConfig) -> impl Bundle {
    let window = Vector2 {
        x: config.window_width as f32,
        y: config.window_height as f32,
    };
    (
        ScrollingLayer::new(
            LAYER_TEXTURES[depth],
            config.layer_speeds[depth],
            texture_size,
            window,
        ),
        ZIndex(depth as i32),
    )
}

/// Spawn the whole cast. Layer source rectangles take their size from the
/// loaded textures.
pub fn setup(mut commands: Commands, config: Res<GameConfig>, textures: Res<TextureStore>) {
    for (depth, key) in LAYER_TEXTURES.iter().enumerate() {
        let size = textures.size(key).unwrap_or_else(|| {
            warn!("Texture '{}' not loaded, sampling it at window size", key);
            Vector2 {
                x: config.window_width as f32,
                y: config.window_height as f32,
            }
        });
        commands.spawn(layer_bundle(depth, size, &config));
    }

    commands.spawn(player_bundle(&config));

    for slot in 0..config.obstacle_count {
        commands.spawn(obstacle_bundle(slot, &config));
    }

    info!(
        "Round set up: {} obstacles, last one starts at x={}",
        config.obstacle_count,
        obstacle_layout(config.obstacle_count.saturating_sub(1), &config).x
    );
}

/// Put every obstacle back on its layout slot and the player back on the
/// floor at rest. Animation frames are left where they are.
pub fn restart_round(
    config: Res<GameConfig>,
    mut obstacles: Query<(&Obstacle, &mut MapPosition)>,
    mut players: Query<(&mut Player, &mut MapPosition), Without<Obstacle>>,
) {
    for (obstacle, mut position) in obstacles.iter_mut() {
        position.pos = obstacle_layout(obstacle.slot, &config);
    }
    for (mut player, mut position) in players.iter_mut() {
        player.reset(&mut position.pos.y);
    }
    debug!("Round restarted");
}

/// Insert the resources, hooks and observers the simulation needs.
///
/// Everything here is window-independent; raylib handles and textures are
/// added by the binary.
pub fn init_world(world: &mut World, config: GameConfig) {
    world.insert_resource(WorldTime::default().with_max_delta(config.max_frame_time));
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_resource(InputState::default());
    world.insert_resource(config);

    let mut systems_store = SystemsStore::new();
    let restart_system_id = world.register_system(restart_round);
    systems_store.insert(RESTART_HOOK, restart_system_id);
    world.insert_resource(systems_store);

    world.spawn(Observer::new(observe_gamestate_change_event));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before any system triggers events.
    world.flush();
}

/// Add the per-frame simulation, in order: background, player, obstacles,
/// animation, outcome, restart request, state transition.
pub fn add_simulation_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            scroll_layers,
            player_physics.run_if(state_is_playing),
            obstacle_movement.run_if(state_is_playing),
            sprite_animation.run_if(state_is_playing),
            check_outcome.run_if(state_is_playing),
            check_restart_request.run_if(state_is_stopped),
            check_pending_state,
        )
            .chain(),
    );
}
