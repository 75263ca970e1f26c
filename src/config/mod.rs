//! Configuration module for the hydraulic-lifts sim
//!
//! Concentrates the data structures shared between the bootstrap and the
//! rest of the application: the model/view regions, panel placement and the
//! cosmetic constants the view layouts consume.

pub mod sim;

pub use sim::{ConfigError, SimConfig, VisualConfig};
