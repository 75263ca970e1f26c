//! Container outline layout
//!
//! The vessel is drawn as one closed outline connecting the two lift
//! openings through a shared mid-section. The opening widths follow the two
//! lift diameters (plus a small fixed clearance so the pistons never touch
//! the walls) and the outline is recomputed whenever either radius changes.

use crate::config::VisualConfig;
use crate::domain::container::Container;
use crate::view::shapes::PolygonSpec;
use crate::view::transform::ModelViewTransform;

/// Computed container outline
#[derive(Debug, Clone)]
pub struct ContainerLayout {
    /// Closed outline of the vessel walls
    pub outline: PolygonSpec,
    /// Width of the left (input) opening, in pixels
    pub left_width: f32,
    /// Width of the right (output) opening, in pixels
    pub right_width: f32,
}

impl ContainerLayout {
    /// Builds the outline from explicit view-space parameters
    ///
    /// `origin` is the top center of the mid-section; `left_top` and
    /// `right_top` are the top centers of the two openings.
    pub fn new(
        left_top: (f32, f32),
        origin: (f32, f32),
        right_top: (f32, f32),
        left_width: f32,
        right_width: f32,
        mid_height: f32,
        visual: &VisualConfig,
    ) -> Self {
        let (lx, ly) = left_top;
        let (ox, oy) = origin;
        let (rx, ry) = right_top;
        let bottom = oy + mid_height;

        // Axis-aligned wall trace: across to the left opening, up and over
        // it, down to the floor, along the floor, up and over the right
        // opening, back to the origin level; the path closes to the start.
        let vertices = vec![
            (ox, oy),
            (lx + left_width / 2.0, oy),
            (lx + left_width / 2.0, ly),
            (lx - left_width / 2.0, ly),
            (lx - left_width / 2.0, bottom),
            (rx + right_width / 2.0, bottom),
            (rx + right_width / 2.0, ry),
            (rx - right_width / 2.0, ry),
            (rx - right_width / 2.0, oy),
        ];

        Self {
            outline: PolygonSpec {
                vertices,
                stroke: visual.container_stroke,
                stroke_width: visual.container_stroke_width,
            },
            left_width,
            right_width,
        }
    }

    /// Builds the outline from the container's current radii
    pub fn from_model(
        container: &Container,
        transform: &ModelViewTransform,
        visual: &VisualConfig,
    ) -> Self {
        let top_y = transform.view_y(0.0);
        let left_top = (transform.view_x(container.input_lift().center_x()), top_y);
        let right_top = (transform.view_x(container.output_lift().center_x()), top_y);
        let origin = (transform.view_x(container.center().x), top_y);

        let left_width =
            transform.view_delta_x(2.0 * container.input_lift().radius()) + visual.opening_gap;
        let right_width =
            transform.view_delta_x(2.0 * container.output_lift().radius()) + visual.opening_gap;

        Self::new(
            left_top,
            origin,
            right_top,
            left_width,
            right_width,
            visual.mid_height,
            visual,
        )
    }
}
