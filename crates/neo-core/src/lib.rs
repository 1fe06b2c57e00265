//! Core types and definitions for the NEO impact simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, snapshots, reports, events, and constants.
//! It has no dependency on the ECS or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod reports;
pub mod state;
pub mod types;
