//! Event types and observers.
//!
//! Submodules:
//! - [`gamestate`] – applies pending round state transitions and runs hooks
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod gamestate;
pub mod switchdebug;
