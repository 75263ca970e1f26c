//! View layer: layouts, text and rendering
//!
//! Layout modules compute plain geometric data from the model through the
//! model-view transform; the renderer is the only code that touches pixels.

pub mod container_node;
pub mod control_panel;
pub mod lift_node;
pub mod renderer;
pub mod shapes;
pub mod text;
pub mod transform;

pub use renderer::{RendererError, SceneLayout, SceneRenderer};
pub use transform::{ModelViewTransform, TransformError};
