//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or in
//! buffers the engine passes in.

pub mod cleanup;
pub mod fire_control;
pub mod selection;
pub mod snapshot;
pub mod targeting;
