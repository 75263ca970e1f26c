//! Hydraulic Lifts
//!
//! Interactive educational simulation of Pascal's law: two linked lift
//! pistons share one fluid vessel, and the force applied to the small input
//! piston is magnified at the large output piston by the square of the
//! radius ratio:
//!
//! ```text
//! output force = (output radius / input radius)^2 * input force
//! ```
//!
//! The crate is split the usual way: `domain` holds the reactive model
//! (observable properties, lifts, container), `view` computes pure layouts
//! and rasterizes them with tiny-skia, `config` concentrates the tunables,
//! and `app` ties events to the model and layouts.

pub mod app;
pub mod config;
pub mod domain;
pub mod view;
