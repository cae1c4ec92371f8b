//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, configuration,
//! asset stores and the round state.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window settings and gameplay tunables from `config.ini`
//! - `gamestate` – authoritative and pending round state
//! - `input` – per-frame keyboard state of keys relevant to the game
//! - `screensize` – window dimensions in pixels
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod screensize;
pub mod systemsstore;
pub mod texturestore;
pub mod worldtime;
