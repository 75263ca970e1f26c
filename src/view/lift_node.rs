//! Per-lift view layout
//!
//! Each lift is drawn as a filled piston rectangle, an empty shaft
//! rectangle sitting on top of it, and a force arrow. The rectangle width
//! tracks the lift diameter through the transform; the vertical
//! displacement grows with force. Under positive force the input piston is
//! pushed down and the output piston rises, with the arrows pointing the
//! same way.
//!
//! The per-newton scales are cosmetic (see `VisualConfig`); direction and
//! monotonicity are the behavioral contract and are what the tests pin.

use crate::config::VisualConfig;
use crate::domain::lift::{InputLift, OutputLift};
use crate::view::shapes::{ArrowSpec, RectSpec};
use crate::view::transform::ModelViewTransform;

const ARROW_SHAFT_WIDTH: f32 = 3.0;
const ARROW_HEAD_SIZE: f32 = 9.0;
const PISTON_STROKE_WIDTH: f32 = 1.0;

/// Computed geometry for one lift
#[derive(Debug, Clone)]
pub struct LiftLayout {
    /// The piston itself
    pub piston: RectSpec,
    /// Empty shaft resting on top of the piston
    pub shaft: RectSpec,
    /// Force indicator; zero-length at zero force
    pub arrow: ArrowSpec,
}

impl LiftLayout {
    /// Lays out the input lift
    ///
    /// The piston is displaced downward in proportion to the input force
    /// and the arrow points down into it.
    pub fn input(
        lift: &InputLift,
        transform: &ModelViewTransform,
        visual: &VisualConfig,
    ) -> Self {
        let force = lift.force() as f32;
        let center_y = rest_center_y(transform) + force * visual.input_drop_per_newton;
        let (piston, shaft) = rectangles(lift.radius(), lift.center_x(), center_y, transform, visual);

        // Tip sits at the piston center, tail above it: the arrow pushes down
        let arrow = ArrowSpec {
            tail_x: piston.center_x(),
            tail_y: piston.center_y() - force * visual.input_arrow_per_newton,
            tip_x: piston.center_x(),
            tip_y: piston.center_y(),
            shaft_width: ARROW_SHAFT_WIDTH,
            head_size: ARROW_HEAD_SIZE,
            color: visual.arrow_color,
        };

        Self {
            piston,
            shaft,
            arrow,
        }
    }

    /// Lays out the output lift
    ///
    /// The piston rises in proportion to the derived output force and the
    /// arrow points up out of it.
    pub fn output(
        lift: &OutputLift,
        transform: &ModelViewTransform,
        visual: &VisualConfig,
    ) -> Self {
        let force = lift.force() as f32;
        let center_y = rest_center_y(transform) - force / visual.output_rise_divisor;
        let (piston, shaft) = rectangles(lift.radius(), lift.center_x(), center_y, transform, visual);

        // Tail sits at the piston center, tip above it: the arrow lifts up
        let arrow = ArrowSpec {
            tail_x: piston.center_x(),
            tail_y: piston.center_y(),
            tip_x: piston.center_x(),
            tip_y: piston.center_y() - force * visual.output_arrow_per_newton,
            shaft_width: ARROW_SHAFT_WIDTH,
            head_size: ARROW_HEAD_SIZE,
            color: visual.arrow_color,
        };

        Self {
            piston,
            shaft,
            arrow,
        }
    }
}

/// Pixel y-coordinate a piston center rests at under zero force
fn rest_center_y(transform: &ModelViewTransform) -> f32 {
    transform.view_y(0.0)
}

fn rectangles(
    radius: f64,
    center_x: f64,
    center_y: f32,
    transform: &ModelViewTransform,
    visual: &VisualConfig,
) -> (RectSpec, RectSpec) {
    let width = transform.view_delta_x(2.0 * radius);
    let center_x = transform.view_x(center_x);

    let piston = RectSpec {
        x: center_x - width / 2.0,
        y: center_y - visual.lift_height / 2.0,
        width,
        height: visual.lift_height,
        corner_radius: visual.corner_radius,
        fill: visual.lift_fill,
        stroke: Some(visual.lift_stroke),
        stroke_width: PISTON_STROKE_WIDTH,
    };

    // The empty shaft keeps its bottom glued to the piston top
    let shaft = RectSpec {
        x: piston.x,
        y: piston.y - visual.shaft_height,
        width,
        height: visual.shaft_height,
        corner_radius: 0.0,
        fill: visual.shaft_fill,
        stroke: None,
        stroke_width: 0.0,
    };

    (piston, shaft)
}
