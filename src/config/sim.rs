//! Simulation configuration
//!
//! Concentrates every tunable the scene is built from: the model region and
//! pixel size, the control-panel placement, and the cosmetic constants used
//! by the view layouts. The motion constants are cosmetic only; direction
//! and monotonicity of the motion they scale are behavioral and tested in
//! the view modules.

use thiserror::Error;
use tiny_skia::Color;

use crate::domain::core::Bounds;

/// Errors raised by configuration validation
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("model bounds have zero or negative extent")]
    DegenerateModelBounds,

    #[error("view size {width}x{height} is not drawable")]
    InvalidViewSize { width: u32, height: u32 },

    #[error("control panel does not fit inside the view")]
    PanelOutOfBounds,

    #[error("visual constant {name} must be positive")]
    NonPositiveVisual { name: &'static str },
}

/// Cosmetic constants for the scene
///
/// The per-newton motion scales are carried over from the original sim's
/// hand-tuned values.
#[derive(Debug, Clone)]
pub struct VisualConfig {
    /// Scene background color
    pub background: Color,
    /// Fill for the piston rectangles
    pub lift_fill: Color,
    /// Stroke for the piston rectangles
    pub lift_stroke: Color,
    /// Fill for the empty shaft above each piston
    pub shaft_fill: Color,
    /// Stroke for the container outline
    pub container_stroke: Color,
    /// Stroke width for the container outline, in pixels
    pub container_stroke_width: f32,
    /// Color of the force arrows
    pub arrow_color: Color,
    /// Extra clearance between a piston and its opening wall, in pixels
    pub opening_gap: f32,
    /// Height of the container mid-section, in pixels
    pub mid_height: f32,
    /// Height of a piston rectangle, in pixels
    pub lift_height: f32,
    /// Height of the empty shaft rectangle, in pixels
    pub shaft_height: f32,
    /// Corner radius for rounded rectangles, in pixels
    pub corner_radius: f32,
    /// Downward displacement of the input piston per newton, in pixels
    pub input_drop_per_newton: f32,
    /// Input arrow length per newton, in pixels
    pub input_arrow_per_newton: f32,
    /// Divisor converting output force to upward displacement, in pixels
    pub output_rise_divisor: f32,
    /// Output arrow length per newton, in pixels
    pub output_arrow_per_newton: f32,
    /// Font size for labels and readouts, in pixels
    pub font_size: f32,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background: Color::from_rgba8(255, 250, 227, 255),
            lift_fill: Color::from_rgba8(214, 57, 57, 255),
            lift_stroke: Color::from_rgba8(0, 0, 0, 255),
            shaft_fill: Color::from_rgba8(245, 245, 245, 255),
            container_stroke: Color::from_rgba8(0, 0, 0, 255),
            container_stroke_width: 2.0,
            arrow_color: Color::from_rgba8(36, 96, 204, 255),
            opening_gap: 10.0,
            mid_height: 50.0,
            lift_height: 20.0,
            shaft_height: 80.0,
            corner_radius: 5.0,
            input_drop_per_newton: 21.5,
            input_arrow_per_newton: 6.0,
            output_rise_divisor: 3.5,
            output_arrow_per_newton: 1.1,
            font_size: 15.0,
        }
    }
}

/// Complete configuration for one simulation instance
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Model-space region mapped onto the scene, in meters
    pub model_bounds: Bounds,
    /// Pixel width of the rendered frame
    pub view_width: u32,
    /// Pixel height of the rendered frame
    pub view_height: u32,
    /// Pixel region the model bounds map onto (the scene, excluding panel)
    pub scene_bounds: Bounds,
    /// Left edge of the control panel, in pixels
    pub panel_x: f32,
    /// Top edge of the control panel, in pixels
    pub panel_y: f32,
    /// Width of the control panel, in pixels
    pub panel_width: f32,
    /// Height of the control panel, in pixels
    pub panel_height: f32,
    /// Cosmetic constants
    pub visual: VisualConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            model_bounds: Bounds::new(-13.0, -6.0, 13.0, 6.0),
            view_width: 1024,
            view_height: 640,
            scene_bounds: Bounds::new(0.0, 0.0, 720.0, 640.0),
            panel_x: 740.0,
            panel_y: 40.0,
            panel_width: 264.0,
            panel_height: 360.0,
            visual: VisualConfig::default(),
        }
    }
}

impl SimConfig {
    /// Checks the configuration for inconsistencies
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model_bounds.is_degenerate() {
            return Err(ConfigError::DegenerateModelBounds);
        }
        if self.view_width == 0 || self.view_height == 0 {
            return Err(ConfigError::InvalidViewSize {
                width: self.view_width,
                height: self.view_height,
            });
        }
        if self.scene_bounds.is_degenerate() {
            return Err(ConfigError::DegenerateModelBounds);
        }
        let view_w = self.view_width as f64;
        let view_h = self.view_height as f64;
        if self.panel_x < 0.0
            || self.panel_y < 0.0
            || f64::from(self.panel_x + self.panel_width) > view_w
            || f64::from(self.panel_y + self.panel_height) > view_h
        {
            return Err(ConfigError::PanelOutOfBounds);
        }
        for (name, value) in [
            ("container_stroke_width", self.visual.container_stroke_width),
            ("mid_height", self.visual.mid_height),
            ("lift_height", self.visual.lift_height),
            ("shaft_height", self.visual.shaft_height),
            ("input_drop_per_newton", self.visual.input_drop_per_newton),
            ("input_arrow_per_newton", self.visual.input_arrow_per_newton),
            ("output_rise_divisor", self.visual.output_rise_divisor),
            ("output_arrow_per_newton", self.visual.output_arrow_per_newton),
            ("font_size", self.visual.font_size),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveVisual { name });
            }
        }
        if self.visual.opening_gap < 0.0 {
            return Err(ConfigError::NonPositiveVisual {
                name: "opening_gap",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn degenerate_model_bounds_rejected() {
        let mut config = SimConfig::default();
        config.model_bounds = Bounds::new(0.0, 0.0, 0.0, 6.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegenerateModelBounds)
        ));
    }

    #[test]
    fn zero_view_size_rejected() {
        let mut config = SimConfig::default();
        config.view_width = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidViewSize { .. })
        ));
    }

    #[test]
    fn panel_must_fit_inside_view() {
        let mut config = SimConfig::default();
        config.panel_x = 900.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PanelOutOfBounds)
        ));
    }

    #[test]
    fn non_positive_visual_constant_rejected() {
        let mut config = SimConfig::default();
        config.visual.lift_height = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveVisual {
                name: "lift_height"
            })
        ));
    }
}
