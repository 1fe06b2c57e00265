//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod orbit_motion;
pub mod snapshot;
