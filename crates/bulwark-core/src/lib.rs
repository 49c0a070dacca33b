//! Core types and definitions for the Bulwark tower-defense simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, the tower catalog, and
//! constants. It has no dependency on an ECS or any runtime framework.

pub mod catalog;
pub mod commands;
pub mod components;
pub mod constants;
pub mod draw;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
