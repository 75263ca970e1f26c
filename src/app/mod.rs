//! Application orchestration layer
//!
//! This module coordinates between UI events, the domain model and the
//! view layer. It owns the event vocabulary and the simulation controller.

pub mod controller;
pub mod state;

pub use controller::{AppError, SimController};
pub use state::{SimEvent, Slider, Toggle, ViewToggles};
