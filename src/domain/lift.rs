//! Lift models
//!
//! A lift is a simulated piston with a center position, a force and a
//! surface radius. There is an input lift (force is exerted on it) and an
//! output lift (force is exerted by it), both openings of one shared vessel.
//!
//! Equation for the magnification of force, from Pascal's law:
//!
//! ```text
//! output force = (output radius / input radius)^2 * input force
//! ```
//!
//! which is the area-ratio form `(output area / input area) * input force`
//! with the common pi factor cancelled. The radius form is the canonical one
//! here; the tests assert the equivalence.
//!
//! Validation policy: these setters reject invalid writes (force < 0,
//! radius <= 0) with [`LiftError::InvalidValue`] and retain the prior value.
//! The UI boundary additionally clamps slider input into range (see
//! `app::controller`), so rejection is unreachable through normal UI
//! interaction.

use std::f64::consts::PI;

use thiserror::Error;

use crate::domain::core::Range;
use crate::domain::property::{Property, PropertyError, Watch};

/// Range of forces available for the input-force slider, in newtons
pub const INPUT_FORCE_RANGE: Range = Range::new(0.0, 5.0);

/// Range of radii available for the input-radius slider, in meters
pub const INPUT_RADIUS_RANGE: Range = Range::new(1.0, 3.0);

/// Range of radii available for the output-radius slider, in meters
pub const OUTPUT_RADIUS_RANGE: Range = Range::new(5.0, 7.0);

/// Initial surface radius of the input lift, in meters
pub const INITIAL_INPUT_RADIUS: f64 = 1.0;

/// Initial surface radius of the output lift, in meters
pub const INITIAL_OUTPUT_RADIUS: f64 = 5.0;

/// Initial force exerted on the input lift, in newtons
pub const INITIAL_INPUT_FORCE: f64 = 0.0;

/// Errors raised by lift construction and mutation
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("invalid {quantity}: {source}")]
    InvalidValue {
        quantity: &'static str,
        source: PropertyError,
    },

    #[error("input radius {radius} is not positive; output force is undefined")]
    DegenerateRadius { radius: f64 },
}

/// Value holder for one lift piston
///
/// Invariants: force >= 0 and radius > 0, enforced at the point of mutation.
/// The surface area is derived from the radius and is read-only.
#[derive(Debug, Clone)]
pub struct Lift {
    center_x: Property<f64>,
    force: Property<f64>,
    radius: Property<f64>,
}

impl Lift {
    /// Creates a lift, rejecting invalid initial values
    pub fn new(center_x: f64, initial_force: f64, initial_radius: f64) -> Result<Self, LiftError> {
        if initial_force < 0.0 {
            return Err(LiftError::InvalidValue {
                quantity: "force",
                source: PropertyError::InvalidValue {
                    value: initial_force.to_string(),
                },
            });
        }
        if initial_radius <= 0.0 {
            return Err(LiftError::InvalidValue {
                quantity: "radius",
                source: PropertyError::InvalidValue {
                    value: initial_radius.to_string(),
                },
            });
        }
        Ok(Self {
            center_x: Property::new(center_x),
            force: Property::with_validator(initial_force, |force| *force >= 0.0),
            radius: Property::with_validator(initial_radius, |radius| *radius > 0.0),
        })
    }

    /// Returns the x-coordinate of the lift's center, in meters
    pub fn center_x(&self) -> f64 {
        self.center_x.get()
    }

    /// Returns the force on or from the lift, in newtons
    pub fn force(&self) -> f64 {
        self.force.get()
    }

    /// Returns the surface radius of the lift, in meters
    pub fn radius(&self) -> f64 {
        self.radius.get()
    }

    /// Returns the surface area of the lift, in square meters
    ///
    /// Derived value, recomputed from the radius on every read.
    pub fn area(&self) -> f64 {
        let radius = self.radius.get();
        PI * radius * radius
    }

    /// Sets the force, rejecting negative values
    pub fn set_force(&mut self, force: f64) -> Result<bool, LiftError> {
        self.force.set(force).map_err(|source| LiftError::InvalidValue {
            quantity: "force",
            source,
        })
    }

    /// Sets the surface radius, rejecting zero and negative values
    pub fn set_radius(&mut self, radius: f64) -> Result<bool, LiftError> {
        self.radius.set(radius).map_err(|source| LiftError::InvalidValue {
            quantity: "radius",
            source,
        })
    }

    /// Restores force, radius and center to their construction-time values
    pub fn reset(&mut self) {
        self.center_x.reset();
        self.force.reset();
        self.radius.reset();
    }

    pub(crate) fn force_revision(&self) -> u64 {
        self.force.revision()
    }

    pub(crate) fn radius_revision(&self) -> u64 {
        self.radius.revision()
    }

    /// Writes a derived force value, bypassing the public setter
    ///
    /// Only the output-force derivation uses this; the value is a product of
    /// non-negative factors so the force invariant is preserved.
    pub(crate) fn write_derived_force(&mut self, force: f64) {
        // The validator still applies; a derivation result can never be
        // negative so this cannot fail.
        let _ = self.force.set(force);
    }
}

/// The lift that force is exerted on
///
/// A [`Lift`] plus the fixed slider ranges used to constrain UI input.
#[derive(Debug, Clone)]
pub struct InputLift {
    lift: Lift,
    force_range: Range,
    radius_range: Range,
}

impl InputLift {
    /// Creates the input lift at the given center x-coordinate
    pub fn new(center_x: f64) -> Result<Self, LiftError> {
        Ok(Self {
            lift: Lift::new(center_x, INITIAL_INPUT_FORCE, INITIAL_INPUT_RADIUS)?,
            force_range: INPUT_FORCE_RANGE,
            radius_range: INPUT_RADIUS_RANGE,
        })
    }

    pub fn center_x(&self) -> f64 {
        self.lift.center_x()
    }

    pub fn force(&self) -> f64 {
        self.lift.force()
    }

    pub fn radius(&self) -> f64 {
        self.lift.radius()
    }

    pub fn area(&self) -> f64 {
        self.lift.area()
    }

    /// Range of forces offered by the input-force slider
    pub fn force_range(&self) -> Range {
        self.force_range
    }

    /// Range of radii offered by the input-radius slider
    pub fn radius_range(&self) -> Range {
        self.radius_range
    }

    pub fn set_force(&mut self, force: f64) -> Result<bool, LiftError> {
        self.lift.set_force(force)
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<bool, LiftError> {
        self.lift.set_radius(radius)
    }

    pub fn reset(&mut self) {
        self.lift.reset();
    }

    pub(crate) fn force_revision(&self) -> u64 {
        self.lift.force_revision()
    }

    pub(crate) fn radius_revision(&self) -> u64 {
        self.lift.radius_revision()
    }
}

/// The lift that force is exerted by
///
/// A [`Lift`] plus the fixed radius slider range. Its force is not
/// independently settable: it is always derived from the input lift's force
/// and the two radii, re-derived synchronously whenever any of the three
/// changes.
#[derive(Debug, Clone)]
pub struct OutputLift {
    lift: Lift,
    radius_range: Range,
    derivation: Watch<3>,
}

impl OutputLift {
    /// Creates the output lift at the given center x-coordinate
    pub fn new(center_x: f64) -> Result<Self, LiftError> {
        Ok(Self {
            lift: Lift::new(center_x, 0.0, INITIAL_OUTPUT_RADIUS)?,
            radius_range: OUTPUT_RADIUS_RANGE,
            derivation: Watch::new(),
        })
    }

    pub fn center_x(&self) -> f64 {
        self.lift.center_x()
    }

    /// Returns the derived output force, in newtons
    pub fn force(&self) -> f64 {
        self.lift.force()
    }

    pub fn radius(&self) -> f64 {
        self.lift.radius()
    }

    pub fn area(&self) -> f64 {
        self.lift.area()
    }

    /// Range of radii offered by the output-radius slider
    pub fn radius_range(&self) -> Range {
        self.radius_range
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<bool, LiftError> {
        self.lift.set_radius(radius)
    }

    pub fn reset(&mut self) {
        self.lift.reset();
    }

    pub(crate) fn force_revision(&self) -> u64 {
        self.lift.force_revision()
    }

    pub(crate) fn radius_revision(&self) -> u64 {
        self.lift.radius_revision()
    }

    /// Re-derives the output force from the input lift and the radii
    ///
    /// Recomputes at most once per upstream change. The radius invariant
    /// excludes a zero input radius; if validation is ever bypassed the
    /// derivation fails with [`LiftError::DegenerateRadius`] instead of
    /// propagating an infinite or NaN force.
    pub(crate) fn derive_force(&mut self, input_lift: &InputLift) -> Result<(), LiftError> {
        let revisions = [
            input_lift.radius_revision(),
            input_lift.force_revision(),
            self.lift.radius_revision(),
        ];
        if !self.derivation.changed(revisions) {
            return Ok(());
        }
        let input_radius = input_lift.radius();
        if input_radius <= 0.0 {
            return Err(LiftError::DegenerateRadius {
                radius: input_radius,
            });
        }
        let ratio = self.lift.radius() / input_radius;
        self.lift.write_derived_force(ratio * ratio * input_lift.force());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn derived(input_radius: f64, input_force: f64, output_radius: f64) -> f64 {
        let mut input = InputLift::new(-5.0).unwrap();
        input.set_radius(input_radius).unwrap();
        input.set_force(input_force).unwrap();
        let mut output = OutputLift::new(5.0).unwrap();
        output.set_radius(output_radius).unwrap();
        output.derive_force(&input).unwrap();
        output.force()
    }

    #[test]
    fn area_is_pi_r_squared() {
        let lift = Lift::new(0.0, 0.0, 2.0).unwrap();
        assert_relative_eq!(lift.area(), PI * 4.0);
    }

    #[test]
    fn negative_force_rejected_prior_value_retained() {
        let mut lift = Lift::new(0.0, 2.0, 1.0).unwrap();
        assert!(lift.set_force(-1.0).is_err());
        assert_eq!(lift.force(), 2.0);
    }

    #[test]
    fn non_positive_radius_rejected_prior_value_retained() {
        let mut lift = Lift::new(0.0, 0.0, 1.5).unwrap();
        assert!(lift.set_radius(0.0).is_err());
        assert!(lift.set_radius(-3.0).is_err());
        assert_eq!(lift.radius(), 1.5);
    }

    #[test]
    fn invalid_initial_values_rejected() {
        assert!(Lift::new(0.0, -1.0, 1.0).is_err());
        assert!(Lift::new(0.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn reset_restores_initial_values() {
        let mut lift = Lift::new(0.0, 1.0, 2.0).unwrap();
        lift.set_force(4.0).unwrap();
        lift.set_radius(3.0).unwrap();
        lift.reset();
        assert_eq!(lift.force(), 1.0);
        assert_eq!(lift.radius(), 2.0);
    }

    #[test]
    fn input_lift_carries_slider_ranges() {
        let input = InputLift::new(-5.0).unwrap();
        assert_eq!(input.force_range(), INPUT_FORCE_RANGE);
        assert_eq!(input.radius_range(), INPUT_RADIUS_RANGE);
        assert_eq!(input.force(), 0.0);
        assert_eq!(input.radius(), 1.0);
    }

    #[test]
    fn output_lift_initial_state() {
        let output = OutputLift::new(5.0).unwrap();
        assert_eq!(output.radius_range(), OUTPUT_RADIUS_RANGE);
        assert_eq!(output.radius(), 5.0);
        assert_eq!(output.force(), 0.0);
    }

    #[test]
    fn force_magnification_scenarios() {
        // radius 1 -> 5 magnifies 25x
        assert_relative_eq!(derived(1.0, 2.0, 5.0), 50.0);
        // radius 2 -> 10 magnifies 25x as well
        assert_relative_eq!(derived(2.0, 3.0, 10.0), 75.0);
    }

    #[test]
    fn zero_input_force_gives_zero_output() {
        assert_eq!(derived(1.0, 0.0, 5.0), 0.0);
        assert_eq!(derived(2.5, 0.0, 6.5), 0.0);
    }

    #[test]
    fn radius_form_matches_area_ratio_form() {
        let mut input = InputLift::new(-5.0).unwrap();
        input.set_radius(1.7).unwrap();
        input.set_force(3.3).unwrap();
        let mut output = OutputLift::new(5.0).unwrap();
        output.set_radius(6.2).unwrap();
        output.derive_force(&input).unwrap();

        let area_ratio_form = output.area() / input.area() * input.force();
        assert_relative_eq!(output.force(), area_ratio_form, max_relative = 1e-12);
    }

    #[test]
    fn output_force_strictly_increases_with_output_radius() {
        let mut previous = 0.0;
        for output_radius in [5.0, 5.5, 6.0, 6.5, 7.0] {
            let force = derived(2.0, 3.0, output_radius);
            assert!(force > previous, "expected strict increase at {output_radius}");
            previous = force;
        }
    }

    #[test]
    fn derivation_runs_once_per_change() {
        let mut input = InputLift::new(-5.0).unwrap();
        let mut output = OutputLift::new(5.0).unwrap();
        output.derive_force(&input).unwrap();
        let revision = output.force_revision();

        // Nothing changed: the derived force must not be rewritten
        output.derive_force(&input).unwrap();
        assert_eq!(output.force_revision(), revision);

        input.set_force(2.0).unwrap();
        output.derive_force(&input).unwrap();
        assert!(output.force_revision() > revision);
    }
}
