//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animators and update sprite frames
//! - [`gamestate`] – restart requests, pending transitions and run conditions
//! - [`input`] – read the keyboard and update [`crate::resources::input::InputState`]
//! - [`obstacle`] – scroll obstacles toward the player
//! - [`outcome`] – decide whether the round is won or lost
//! - [`player`] – ground check, jump and vertical integration
//! - [`render`] – draw the frame using raylib
//! - [`scrollinglayer`] – parallax background scrolling
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod gamestate;
pub mod input;
pub mod obstacle;
pub mod outcome;
pub mod player;
pub mod render;
pub mod scrollinglayer;
pub mod time;
