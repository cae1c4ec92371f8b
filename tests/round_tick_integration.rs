//! Round tick integration tests: physics, animation, win/loss and restart
//! driven through the real simulation schedule, without a window.

use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use raylib::prelude::Vector2;

use dapper_dasher::components::mapposition::MapPosition;
use dapper_dasher::components::obstacle::Obstacle;
use dapper_dasher::components::player::Player;
use dapper_dasher::components::scrollinglayer::ScrollingLayer;
use dapper_dasher::components::sprite::Sprite;
use dapper_dasher::components::spriteanimator::SpriteAnimator;
use dapper_dasher::game;
use dapper_dasher::resources::gameconfig::GameConfig;
use dapper_dasher::resources::gamestate::{GameState, GameStates};
use dapper_dasher::resources::input::InputState;
use dapper_dasher::resources::texturestore::TextureStore;
use dapper_dasher::systems::time::update_world_time;

const DT: f32 = 1.0 / 60.0;

fn make_world(config: GameConfig) -> (World, Schedule) {
    let mut world = World::new();
    game::init_world(&mut world, config);
    let mut schedule = Schedule::default();
    game::add_simulation_systems(&mut schedule);
    (world, schedule)
}

fn config() -> GameConfig {
    GameConfig::new()
}

fn tick(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.flush();
    // Stands in for the input system re-polling the keyboard next frame.
    let mut input = world.resource_mut::<InputState>();
    input.jump.just_pressed = false;
    input.restart.just_pressed = false;
    input.mode_debug.just_pressed = false;
}

fn press_jump(world: &mut World) {
    world.resource_mut::<InputState>().jump.just_pressed = true;
}

fn press_restart(world: &mut World) {
    world.resource_mut::<InputState>().restart.just_pressed = true;
}

fn state(world: &World) -> GameStates {
    world.resource::<GameState>().get()
}

fn spawn_obstacles(world: &mut World, config: &GameConfig) -> Vec<Entity> {
    (0..config.obstacle_count)
        .map(|slot| world.spawn(game::obstacle_bundle(slot, config)).id())
        .collect()
}

fn position(world: &World, entity: Entity) -> Vector2 {
    world.get::<MapPosition>(entity).unwrap().pos
}

fn assert_same_pos(a: Vector2, b: Vector2) {
    assert_eq!((a.x, a.y), (b.x, b.y));
}

/// Drop obstacle `entity` right on top of the player.
fn collide_with_player(world: &mut World, entity: Entity, player: Entity) {
    let player_pos = position(world, player);
    world.get_mut::<MapPosition>(entity).unwrap().pos = player_pos;
}

// ==================== PLAYER ====================

#[test]
fn player_never_sinks_below_ground() {
    let config = config();
    let (mut world, mut schedule) = make_world(config.clone());
    let player = world.spawn(game::player_bundle(&config)).id();
    let ground_y = world.get::<Player>(player).unwrap().ground_y;

    for frame in 0..400 {
        if frame % 7 == 0 {
            press_jump(&mut world);
        }
        tick(&mut world, &mut schedule, DT);

        let y = position(&world, player).y;
        let body = world.get::<Player>(player).unwrap();
        assert!(y <= ground_y, "frame {frame}: y={y} below ground {ground_y}");
        // A jump frame leaves the player grounded with the impulse applied.
        if body.is_grounded() && frame % 7 != 0 {
            assert_eq!(body.velocity, 0.0);
            assert_eq!(y, ground_y);
        }
    }
}

#[test]
fn jump_only_from_ground() {
    let config = config();
    let (mut world, mut schedule) = make_world(config.clone());
    let player = world.spawn(game::player_bundle(&config)).id();

    press_jump(&mut world);
    tick(&mut world, &mut schedule, DT);
    let after_jump = world.get::<Player>(player).unwrap().velocity;
    assert_eq!(after_jump, -config.jump_impulse);

    press_jump(&mut world);
    tick(&mut world, &mut schedule, DT);
    let body = world.get::<Player>(player).unwrap();
    assert!(body.airborne);
    let expected = after_jump + config.gravity * DT;
    assert!((body.velocity - expected).abs() < 1e-3);
}

#[test]
fn player_animation_freezes_in_the_air() {
    let config = config();
    let (mut world, mut schedule) = make_world(config.clone());
    let player = world.spawn(game::player_bundle(&config)).id();

    for _ in 0..3 {
        tick(&mut world, &mut schedule, 0.1);
    }
    assert_eq!(world.get::<SpriteAnimator>(player).unwrap().frame_index(), 3);
    assert_eq!(world.get::<Sprite>(player).unwrap().offset.x, 384.0);

    // Grounded at the start of the jump frame, so this frame still animates.
    press_jump(&mut world);
    tick(&mut world, &mut schedule, 0.1);
    assert_eq!(world.get::<SpriteAnimator>(player).unwrap().frame_index(), 4);

    for _ in 0..2 {
        tick(&mut world, &mut schedule, 0.1);
        assert!(world.get::<Player>(player).unwrap().airborne);
        assert_eq!(world.get::<SpriteAnimator>(player).unwrap().frame_index(), 4);
    }
}

// ==================== OBSTACLES ====================

#[test]
fn obstacle_animation_follows_cadence() {
    let mut config = config();
    config.obstacle_count = 1;
    let (mut world, mut schedule) = make_world(config.clone());
    let obstacle = spawn_obstacles(&mut world, &config)[0];

    for k in 1..=12 {
        tick(&mut world, &mut schedule, 0.1);
        let animator = world.get::<SpriteAnimator>(obstacle).unwrap();
        assert_eq!(animator.frame_index(), k % animator.total_frames());
    }
    let sprite = world.get::<Sprite>(obstacle).unwrap();
    // Frame 12 of the 8x8 sheet: column 4, row 1.
    assert_eq!(sprite.offset.x, 400.0);
    assert_eq!(sprite.offset.y, 100.0);
}

#[test]
fn round_is_won_when_last_obstacle_leaves() {
    let mut config = config();
    config.obstacle_count = 2;
    let (mut world, mut schedule) = make_world(config.clone());
    let obstacles = spawn_obstacles(&mut world, &config);
    let last = obstacles[1];

    let mut expected_x = game::obstacle_layout(1, &config).x;
    let mut won = false;
    for _ in 0..1000 {
        tick(&mut world, &mut schedule, DT);
        expected_x -= config.obstacle_speed * DT;
        assert_eq!(position(&world, last).x, expected_x);

        if expected_x < config.win_threshold_x {
            assert_eq!(state(&world), GameStates::Won);
            won = true;
            break;
        }
        assert_eq!(state(&world), GameStates::Playing);
    }
    assert!(won);

    // Frozen once the round is over.
    let frozen = position(&world, last);
    tick(&mut world, &mut schedule, DT);
    assert_same_pos(position(&world, last), frozen);
    assert_eq!(state(&world), GameStates::Won);
}

#[test]
fn touching_an_obstacle_loses_the_round() {
    let mut config = config();
    config.obstacle_count = 1;
    let (mut world, mut schedule) = make_world(config.clone());
    let player = world.spawn(game::player_bundle(&config)).id();
    let obstacle = spawn_obstacles(&mut world, &config)[0];

    collide_with_player(&mut world, obstacle, player);
    tick(&mut world, &mut schedule, DT);
    assert_eq!(state(&world), GameStates::Lost);
}

#[test]
fn distant_obstacles_leave_the_round_running() {
    let config = config();
    let (mut world, mut schedule) = make_world(config.clone());
    world.spawn(game::player_bundle(&config));
    spawn_obstacles(&mut world, &config);

    for _ in 0..30 {
        tick(&mut world, &mut schedule, DT);
    }
    assert_eq!(state(&world), GameStates::Playing);
}

#[test]
fn near_miss_outside_collision_circle_is_not_a_hit() {
    let mut config = config();
    config.obstacle_count = 1;
    config.obstacle_speed = 0.0;
    let (mut world, mut schedule) = make_world(config.clone());
    let player = world.spawn(game::player_bundle(&config)).id();
    let obstacle = spawn_obstacles(&mut world, &config)[0];

    // Footprint overlaps the player's rectangle but the 20px circle at its
    // center stays 2px clear of the right edge.
    let player_pos = position(&world, player);
    world.get_mut::<MapPosition>(obstacle).unwrap().pos = Vector2 {
        x: player_pos.x + 100.0,
        y: player_pos.y,
    };
    tick(&mut world, &mut schedule, DT);
    assert_eq!(state(&world), GameStates::Playing);
}

// ==================== RESTART ====================

#[test]
fn restart_restores_layout_and_player() {
    let mut config = config();
    config.obstacle_count = 3;
    let (mut world, mut schedule) = make_world(config.clone());
    let player = world.spawn(game::player_bundle(&config)).id();
    let obstacles = spawn_obstacles(&mut world, &config);

    for _ in 0..10 {
        tick(&mut world, &mut schedule, DT);
    }
    collide_with_player(&mut world, obstacles[0], player);
    tick(&mut world, &mut schedule, DT);
    assert_eq!(state(&world), GameStates::Lost);

    // Leave the player mid-air to check the restart puts it down.
    world.get_mut::<MapPosition>(player).unwrap().pos.y = 100.0;
    {
        let mut body = world.get_mut::<Player>(player).unwrap();
        body.velocity = -300.0;
        body.airborne = true;
    }

    // Other keys do nothing while the round is over.
    press_jump(&mut world);
    tick(&mut world, &mut schedule, DT);
    assert_eq!(state(&world), GameStates::Lost);
    assert_eq!(position(&world, player).y, 100.0);

    press_restart(&mut world);
    tick(&mut world, &mut schedule, DT);
    assert_eq!(state(&world), GameStates::Playing);

    for entity in &obstacles {
        let slot = world.get::<Obstacle>(*entity).unwrap().slot;
        assert_same_pos(position(&world, *entity), game::obstacle_layout(slot, &config));
    }
    let body = world.get::<Player>(player).unwrap();
    assert_eq!(position(&world, player).y, body.ground_y);
    assert_eq!(body.velocity, 0.0);
    assert!(body.is_grounded());
}

#[test]
fn restart_from_won_matches_startup_layout() {
    let mut config = config();
    config.obstacle_count = 2;
    let (mut world, mut schedule) = make_world(config.clone());
    let obstacles = spawn_obstacles(&mut world, &config);
    let startup: Vec<Vector2> = obstacles.iter().map(|e| position(&world, *e)).collect();

    while state(&world) == GameStates::Playing {
        tick(&mut world, &mut schedule, 0.1);
    }
    assert_eq!(state(&world), GameStates::Won);

    press_restart(&mut world);
    tick(&mut world, &mut schedule, DT);
    assert_eq!(state(&world), GameStates::Playing);
    for (entity, start) in obstacles.iter().zip(startup) {
        assert_same_pos(position(&world, *entity), start);
    }
}

#[test]
fn restart_key_ignored_while_playing() {
    let config = config();
    let (mut world, mut schedule) = make_world(config.clone());
    let obstacles = spawn_obstacles(&mut world, &config);

    tick(&mut world, &mut schedule, DT);
    let moved = position(&world, obstacles[0]);
    press_restart(&mut world);
    tick(&mut world, &mut schedule, DT);
    assert_eq!(state(&world), GameStates::Playing);
    assert!(position(&world, obstacles[0]).x < moved.x);
}

// ==================== BACKGROUND ====================

#[test]
fn background_keeps_scrolling_after_the_round_ends() {
    let mut config = config();
    config.obstacle_count = 1;
    let (mut world, mut schedule) = make_world(config.clone());
    let layer = world
        .spawn(game::layer_bundle(
            0,
            Vector2 { x: 1024.0, y: 192.0 },
            &config,
        ))
        .id();
    let player = world.spawn(game::player_bundle(&config)).id();
    let obstacle = spawn_obstacles(&mut world, &config)[0];

    collide_with_player(&mut world, obstacle, player);
    tick(&mut world, &mut schedule, DT);
    assert_eq!(state(&world), GameStates::Lost);

    let before = world.get::<ScrollingLayer>(layer).unwrap().source().x;
    tick(&mut world, &mut schedule, 0.1);
    let after = world.get::<ScrollingLayer>(layer).unwrap().source().x;
    assert!((after - before - config.layer_speeds[0] * 0.1).abs() < 1e-3);
}

// ==================== MISSING TEXTURES ====================

#[test]
fn round_plays_without_any_texture_loaded() {
    let mut config = config();
    config.obstacle_count = 3;
    let (mut world, mut schedule) = make_world(config.clone());
    world.insert_resource(TextureStore::new());
    world.run_system_once(game::setup).unwrap();

    let mut layers = world.query::<&ScrollingLayer>();
    let sources: Vec<_> = layers.iter(&world).map(|l| l.source()).collect();
    assert_eq!(sources.len(), 3);
    for source in &sources {
        assert_eq!(source.width, 512.0);
        assert_eq!(source.height, 380.0);
    }
    let mut obstacles = world.query::<&Obstacle>();
    assert_eq!(obstacles.iter(&world).count(), 3);
    let mut players = world.query::<&Player>();
    assert_eq!(players.iter(&world).count(), 1);

    for _ in 0..30 {
        tick(&mut world, &mut schedule, DT);
    }
    assert_eq!(state(&world), GameStates::Playing);
}
