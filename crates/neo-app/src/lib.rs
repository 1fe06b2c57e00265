//! Headless NEO impact simulator runner.
//!
//! This crate wires the simulation crates to the outside world: it loads
//! NEO feeds and run configs from disk, drives the engine on a frame-loop
//! thread, and exposes the latest snapshot to other threads.

pub mod config;
pub mod feed;
pub mod game_loop;
pub mod state;

pub use neo_core as core;
