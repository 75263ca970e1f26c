//! Domain logic and core data structures
//!
//! This module contains the pure simulation model: geometry primitives,
//! observable value holders, and the lift/container physics. Nothing here
//! knows about pixels or the rendering layer.

pub mod container;
pub mod core;
pub mod lift;
pub mod property;
