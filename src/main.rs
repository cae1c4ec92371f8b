//! Dapper Dasher main entry point.
//!
//! A small side-scroller written in Rust using:
//! - **raylib** for windowing, textures, text and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Scarfy runs in front of a three-layer parallax city while a row of
//! nebulae drifts in from the right. SPACE jumps; the round is won once the
//! last nebula has gone by and lost on the first touch. ENTER starts over.
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, load textures
//! 2. Insert resources, observers and the restart hook, spawn the cast
//! 3. Each frame: update time, poll input, run the simulation, render
//! 4. Drop textures before the window closes
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::resources::debugmode::DebugMode;
use crate::resources::gameconfig::GameConfig;
use crate::resources::texturestore::TextureStore;
use crate::systems::gamestate::check_pending_state;
use crate::systems::input::update_input_state;
use crate::systems::render::render_system;
use crate::systems::scrollinglayer::scroll_layers;
use crate::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use bevy_ecs::system::RunSystemOnce;
use clap::Parser;
use std::path::PathBuf;

/// Dapper Dasher
#[derive(Parser)]
#[command(version, about = "Jump over the nebulae until every one of them has gone by.")]
struct Cli {
    /// Path of the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Write the effective configuration and exit.
    /// Optionally provide a path (default: the --config path).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,

    /// Start with the debug overlay enabled (toggle with F11).
    #[arg(long)]
    debug: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }

    // Early-exit: write configuration and quit (no window needed)
    if let Some(maybe_path) = cli.write_config {
        if let Some(path) = maybe_path {
            config.config_path = path;
        }
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    // --------------- Raylib window & assets ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Dapper Dasher")
        .build();
    rl.set_target_fps(config.target_fps);

    let textures = TextureStore::load_all(&mut rl, &thread, &game::TEXTURE_PATHS);
    if textures.is_empty() {
        log::warn!("No textures loaded, nothing but text will be drawn");
    } else {
        log::info!(
            "Loaded {} of {} textures",
            textures.len(),
            game::TEXTURE_PATHS.len()
        );
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::init_world(&mut world, config);
    world.insert_resource(textures);
    if cli.debug {
        world.insert_resource(DebugMode {});
    }

    if let Err(e) = world.run_system_once(game::setup) {
        log::error!("Failed to set up the round: {}", e);
        std::process::exit(1);
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut update = Schedule::default();
    update.add_systems(update_input_state.before(scroll_layers));
    game::add_simulation_systems(&mut update);
    update.add_systems(render_system.after(check_pending_state));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }

    // Textures must be unloaded while the GL context is still alive.
    drop(world.remove_resource::<TextureStore>());
    log::info!("Bye!");
}
