//! ECS components for entities.
//!
//! Components hold the per-entity data of the game: where an entity is, what
//! it looks like, how it collides, and the state behind its behaviour.
//!
//! Submodules overview:
//! - [`boxcollider`] – fixed rectangular collision footprint
//! - [`mapposition`] – top-left position of an entity in window pixels
//! - [`obstacle`] – leftward-scrolling hazard with a circular hit area
//! - [`player`] – vertical-only physics of the runner
//! - [`scrollinglayer`] – parallax background layer
//! - [`sprite`] – texture key and frame rectangle for drawing
//! - [`spriteanimator`] – frame timing for spritesheet animation
//! - [`zindex`] – rendering order hint for background layers

pub mod boxcollider;
pub mod mapposition;
pub mod obstacle;
pub mod player;
pub mod scrollinglayer;
pub mod sprite;
pub mod spriteanimator;
pub mod zindex;
