//! Game configuration resource.
//!
//! Manages the window settings and gameplay tunables loaded from an INI
//! configuration file. Provides defaults for safe startup and methods to
//! load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 512
//! height = 380
//! target_fps = 60
//! max_frame_time = 0.1
//!
//! [player]
//! gravity = 2000
//! jump_impulse = 900
//!
//! [obstacles]
//! count = 10
//! spacing = 450
//! speed = 400
//! collision_radius = 20
//! win_threshold_x = -500
//!
//! [background]
//! far_speed = 50
//! mid_speed = 100
//! near_speed = 200
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 512;
const DEFAULT_WINDOW_HEIGHT: u32 = 380;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_MAX_FRAME_TIME: f32 = 0.1;
const DEFAULT_GRAVITY: f32 = 2000.0;
const DEFAULT_JUMP_IMPULSE: f32 = 900.0;
const DEFAULT_OBSTACLE_COUNT: usize = 10;
const DEFAULT_OBSTACLE_SPACING: f32 = 450.0;
const DEFAULT_OBSTACLE_SPEED: f32 = 400.0;
const DEFAULT_COLLISION_RADIUS: f32 = 20.0;
const DEFAULT_WIN_THRESHOLD_X: f32 = -500.0;
const DEFAULT_LAYER_SPEEDS: [f32; 3] = [50.0, 100.0, 200.0];
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Upper bound for the frame delta fed to the simulation, in seconds.
    pub max_frame_time: f32,
    /// Player gravity in pixels per second squared.
    pub gravity: f32,
    /// Player jump impulse in pixels per second.
    pub jump_impulse: f32,
    /// Number of obstacles in a round.
    pub obstacle_count: usize,
    /// Horizontal distance between consecutive obstacles at round start.
    pub obstacle_spacing: f32,
    /// Obstacle speed in pixels per second.
    pub obstacle_speed: f32,
    /// Radius of each obstacle's collision circle.
    pub collision_radius: f32,
    /// The round is won once the last obstacle's x drops below this.
    pub win_threshold_x: f32,
    /// Far, mid and near background speeds in pixels per second.
    pub layer_speeds: [f32; 3],
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            max_frame_time: DEFAULT_MAX_FRAME_TIME,
            gravity: DEFAULT_GRAVITY,
            jump_impulse: DEFAULT_JUMP_IMPULSE,
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            obstacle_spacing: DEFAULT_OBSTACLE_SPACING,
            obstacle_speed: DEFAULT_OBSTACLE_SPEED,
            collision_radius: DEFAULT_COLLISION_RADIUS,
            win_threshold_x: DEFAULT_WIN_THRESHOLD_X,
            layer_speeds: DEFAULT_LAYER_SPEEDS,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(max) = config.getfloat("window", "max_frame_time").ok().flatten() {
            let max = max as f32;
            if max.is_finite() && max > 0.0 {
                self.max_frame_time = max;
            } else {
                warn!(
                    "Ignoring max_frame_time = {} (must be a positive number), keeping {}",
                    max, self.max_frame_time
                );
            }
        }

        // [player] section
        if let Some(gravity) = config.getfloat("player", "gravity").ok().flatten() {
            self.gravity = gravity as f32;
        }
        if let Some(impulse) = config.getfloat("player", "jump_impulse").ok().flatten() {
            self.jump_impulse = impulse as f32;
        }

        // [obstacles] section
        if let Some(count) = config.getuint("obstacles", "count").ok().flatten() {
            self.obstacle_count = count as usize;
        }
        if let Some(spacing) = config.getfloat("obstacles", "spacing").ok().flatten() {
            self.obstacle_spacing = spacing as f32;
        }
        if let Some(speed) = config.getfloat("obstacles", "speed").ok().flatten() {
            self.obstacle_speed = speed as f32;
        }
        if let Some(radius) = config.getfloat("obstacles", "collision_radius").ok().flatten() {
            self.collision_radius = radius as f32;
        }
        if let Some(threshold) = config.getfloat("obstacles", "win_threshold_x").ok().flatten() {
            self.win_threshold_x = threshold as f32;
        }

        // [background] section
        for (i, key) in ["far_speed", "mid_speed", "near_speed"].iter().enumerate() {
            if let Some(speed) = config.getfloat("background", key).ok().flatten() {
                self.layer_speeds[i] = speed as f32;
            }
        }

        info!(
            "Loaded config: {}x{} window, fps={}, {} obstacles every {}px at {}px/s",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.obstacle_count,
            self.obstacle_spacing,
            self.obstacle_speed
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set(
            "window",
            "max_frame_time",
            Some(self.max_frame_time.to_string()),
        );

        // [player] section
        config.set("player", "gravity", Some(self.gravity.to_string()));
        config.set("player", "jump_impulse", Some(self.jump_impulse.to_string()));

        // [obstacles] section
        config.set("obstacles", "count", Some(self.obstacle_count.to_string()));
        config.set(
            "obstacles",
            "spacing",
            Some(self.obstacle_spacing.to_string()),
        );
        config.set("obstacles", "speed", Some(self.obstacle_speed.to_string()));
        config.set(
            "obstacles",
            "collision_radius",
            Some(self.collision_radius.to_string()),
        );
        config.set(
            "obstacles",
            "win_threshold_x",
            Some(self.win_threshold_x.to_string()),
        );

        // [background] section
        for (i, key) in ["far_speed", "mid_speed", "near_speed"].iter().enumerate() {
            config.set("background", key, Some(self.layer_speeds[i].to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Window size in pixels.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
