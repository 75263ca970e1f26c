//! Application state and events
//!
//! Defines the UI-facing event vocabulary and the transient view toggles.
//! All simulation state lives in the domain model; the only view-side state
//! is the pair of visibility flags.

/// The three sliders exposed by the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    InputForce,
    InputRadius,
    OutputRadius,
}

/// The two visibility checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Show the output-force readout
    OutputForceReadout,
    /// Show the force arrows on both lifts
    ForceArrows,
}

/// A UI interaction delivered to the controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimEvent {
    /// A slider was dragged to a new value (clamped at the UI boundary)
    SliderChanged(Slider, f64),
    /// A checkbox was toggled
    CheckboxToggled(Toggle, bool),
    /// The reset control was pressed
    ResetPressed,
}

/// Visibility flags for optional view elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewToggles {
    pub show_output_force: bool,
    pub show_force_arrows: bool,
}

impl Default for ViewToggles {
    fn default() -> Self {
        Self {
            show_output_force: true,
            show_force_arrows: true,
        }
    }
}

impl ViewToggles {
    /// Applies a checkbox change
    pub fn apply(&mut self, toggle: Toggle, enabled: bool) {
        match toggle {
            Toggle::OutputForceReadout => self.show_output_force = enabled,
            Toggle::ForceArrows => self.show_force_arrows = enabled,
        }
    }
}
