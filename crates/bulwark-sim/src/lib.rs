//! Session engine for Bulwark.
//!
//! Owns the hecs ECS world, runs tower systems once per frame, and
//! produces `FrameSnapshot`s for the session/UI.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use bulwark_core as core;
pub use engine::SessionEngine;
