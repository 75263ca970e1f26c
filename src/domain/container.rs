//! Container model
//!
//! The container is the fixed enclosing vessel holding both lifts. It is
//! constructed once at simulation start and lives for the process lifetime;
//! reset restores the lifts without destroying them.
//!
//! All mutation funnels through the container so that the output-force
//! derivation runs before any mutating call returns: a dependent view can
//! never observe a force that is stale with respect to the radii.

use crate::domain::core::Point;
use crate::domain::lift::{InputLift, LiftError, OutputLift};

/// Center x-coordinate of the input lift, in meters
pub const INPUT_LIFT_CENTER_X: f64 = -5.0;

/// Center x-coordinate of the output lift, in meters
pub const OUTPUT_LIFT_CENTER_X: f64 = 5.0;

/// The vessel pairing one input lift with one output lift
#[derive(Debug, Clone)]
pub struct Container {
    input_lift: InputLift,
    output_lift: OutputLift,
}

impl Container {
    /// Creates the container with both lifts at their fixed offsets
    pub fn new() -> Result<Self, LiftError> {
        let input_lift = InputLift::new(INPUT_LIFT_CENTER_X)?;
        let mut output_lift = OutputLift::new(OUTPUT_LIFT_CENTER_X)?;
        output_lift.derive_force(&input_lift)?;
        Ok(Self {
            input_lift,
            output_lift,
        })
    }

    /// Returns the input lift
    pub fn input_lift(&self) -> &InputLift {
        &self.input_lift
    }

    /// Returns the output lift
    pub fn output_lift(&self) -> &OutputLift {
        &self.output_lift
    }

    /// Center position of the container, fixed at the model origin
    pub fn center(&self) -> Point {
        Point::ORIGIN
    }

    /// Sets the force exerted on the input lift and re-derives
    pub fn set_input_force(&mut self, force: f64) -> Result<(), LiftError> {
        self.input_lift.set_force(force)?;
        self.output_lift.derive_force(&self.input_lift)
    }

    /// Sets the input lift's surface radius and re-derives
    pub fn set_input_radius(&mut self, radius: f64) -> Result<(), LiftError> {
        self.input_lift.set_radius(radius)?;
        self.output_lift.derive_force(&self.input_lift)
    }

    /// Sets the output lift's surface radius and re-derives
    pub fn set_output_radius(&mut self, radius: f64) -> Result<(), LiftError> {
        self.output_lift.set_radius(radius)?;
        self.output_lift.derive_force(&self.input_lift)
    }

    /// Restores both lifts to their construction-time state
    pub fn reset(&mut self) {
        self.input_lift.reset();
        self.output_lift.reset();
        // Initial values were validated at construction, so re-derivation
        // cannot fail here.
        if let Err(err) = self.output_lift.derive_force(&self.input_lift) {
            log::error!("reset left the container inconsistent: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn lifts_sit_at_fixed_offsets() {
        let container = Container::new().unwrap();
        assert_eq!(container.input_lift().center_x(), -5.0);
        assert_eq!(container.output_lift().center_x(), 5.0);
        assert_eq!(container.center(), Point::ORIGIN);
    }

    #[test]
    fn output_force_tracks_every_input() {
        let mut container = Container::new().unwrap();

        container.set_input_force(2.0).unwrap();
        // radii 1 and 5: 25x magnification
        assert_relative_eq!(container.output_lift().force(), 50.0);

        container.set_input_radius(2.0).unwrap();
        // ratio now (5/2)^2 = 6.25
        assert_relative_eq!(container.output_lift().force(), 12.5);

        container.set_output_radius(6.0).unwrap();
        // ratio now (6/2)^2 = 9
        assert_relative_eq!(container.output_lift().force(), 18.0);
    }

    #[test]
    fn invalid_write_leaves_derived_force_untouched() {
        let mut container = Container::new().unwrap();
        container.set_input_force(2.0).unwrap();
        let force = container.output_lift().force();

        assert!(container.set_input_radius(0.0).is_err());
        assert!(container.set_input_force(-1.0).is_err());
        assert_eq!(container.output_lift().force(), force);
        assert_eq!(container.input_lift().radius(), 1.0);
    }

    #[test]
    fn reset_restores_both_lifts() {
        let mut container = Container::new().unwrap();
        container.set_input_force(4.0).unwrap();
        container.set_input_radius(2.5).unwrap();
        container.set_output_radius(7.0).unwrap();

        container.reset();
        assert_eq!(container.input_lift().force(), 0.0);
        assert_eq!(container.input_lift().radius(), 1.0);
        assert_eq!(container.output_lift().radius(), 5.0);
        assert_eq!(container.output_lift().force(), 0.0);
    }

    #[test]
    fn reset_twice_equals_reset_once() {
        let mut container = Container::new().unwrap();
        container.set_input_force(3.0).unwrap();

        container.reset();
        let force = container.input_lift().force();
        let radius = container.input_lift().radius();
        let output = container.output_lift().force();

        container.reset();
        assert_eq!(container.input_lift().force(), force);
        assert_eq!(container.input_lift().radius(), radius);
        assert_eq!(container.output_lift().force(), output);
    }
}
