//! Model-view coordinate transform
//!
//! Linear map from a rectangular model-space region (meters, y up) to a
//! rectangular pixel-space region (y down). Supplied to every view layout;
//! the layouts never do their own unit conversion.

use thiserror::Error;

use crate::domain::core::{Bounds, Point};

/// Errors raised when constructing a transform
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("cannot map between degenerate regions")]
    DegenerateRegion,
}

/// Linear model-to-view mapping with y-axis inversion
#[derive(Debug, Clone, Copy)]
pub struct ModelViewTransform {
    model: Bounds,
    view: Bounds,
    scale_x: f64,
    scale_y: f64,
}

impl ModelViewTransform {
    /// Creates a transform mapping `model` onto `view`
    pub fn new(model: Bounds, view: Bounds) -> Result<Self, TransformError> {
        if model.is_degenerate() || view.is_degenerate() {
            return Err(TransformError::DegenerateRegion);
        }
        Ok(Self {
            model,
            view,
            scale_x: view.width() / model.width(),
            scale_y: view.height() / model.height(),
        })
    }

    /// Maps a model x-coordinate to a pixel x-coordinate
    pub fn view_x(&self, model_x: f64) -> f32 {
        (self.view.min_x + (model_x - self.model.min_x) * self.scale_x) as f32
    }

    /// Maps a model y-coordinate to a pixel y-coordinate
    ///
    /// The model y-axis points up, the pixel y-axis points down: the model
    /// bottom edge lands on the view's bottom edge.
    pub fn view_y(&self, model_y: f64) -> f32 {
        (self.view.max_y - (model_y - self.model.min_y) * self.scale_y) as f32
    }

    /// Maps a model point to pixel coordinates
    pub fn view_point(&self, point: Point) -> (f32, f32) {
        (self.view_x(point.x), self.view_y(point.y))
    }

    /// Maps a horizontal model length to a pixel length
    pub fn view_delta_x(&self, model_length: f64) -> f32 {
        (model_length * self.scale_x) as f32
    }

    /// Maps a vertical model length to a pixel length
    pub fn view_delta_y(&self, model_length: f64) -> f32 {
        (model_length * self.scale_y) as f32
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn transform() -> ModelViewTransform {
        ModelViewTransform::new(
            Bounds::new(-10.0, -5.0, 10.0, 5.0),
            Bounds::new(0.0, 0.0, 400.0, 200.0),
        )
        .unwrap()
    }

    #[test]
    fn maps_corners() {
        let t = transform();
        assert_relative_eq!(t.view_x(-10.0), 0.0);
        assert_relative_eq!(t.view_x(10.0), 400.0);
        // Model top maps to view top (pixel y = 0)
        assert_relative_eq!(t.view_y(5.0), 0.0);
        assert_relative_eq!(t.view_y(-5.0), 200.0);
    }

    #[test]
    fn maps_center_to_center() {
        let t = transform();
        let (x, y) = t.view_point(Point::ORIGIN);
        assert_relative_eq!(x, 200.0);
        assert_relative_eq!(y, 100.0);
    }

    #[test]
    fn y_axis_is_inverted() {
        let t = transform();
        // Increasing model y decreases pixel y
        assert!(t.view_y(2.0) < t.view_y(1.0));
    }

    #[test]
    fn lengths_scale_uniformly() {
        let t = transform();
        assert_relative_eq!(t.view_delta_x(1.0), 20.0);
        assert_relative_eq!(t.view_delta_y(1.0), 20.0);
        assert_relative_eq!(t.view_delta_x(2.0), 2.0 * t.view_delta_x(1.0));
    }

    #[test]
    fn degenerate_regions_rejected() {
        let model = Bounds::new(0.0, 0.0, 0.0, 1.0);
        let view = Bounds::new(0.0, 0.0, 100.0, 100.0);
        assert!(ModelViewTransform::new(model, view).is_err());
        assert!(ModelViewTransform::new(view, model).is_err());
    }
}
