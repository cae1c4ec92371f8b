//! Dapper Dasher library.
//!
//! Exposes the game's ECS components, resources, systems and events so the
//! simulation can be driven without a window (integration tests do exactly
//! that).

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
