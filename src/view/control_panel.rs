//! Control panel layout
//!
//! Assembles the panel chrome: three slider rows (label, track, thumb and a
//! boxed numeric readout), the two visibility checkboxes, the reset button
//! and the output-force readout. Readouts are formatted to one decimal
//! place with a unit suffix.

use tiny_skia::Color;

use crate::app::state::ViewToggles;
use crate::config::SimConfig;
use crate::domain::container::Container;
use crate::domain::core::Range;
use crate::view::shapes::{CircleSpec, Line, RectSpec, TextSpec};

const PANEL_PADDING: f32 = 16.0;
const ROW_HEIGHT: f32 = 64.0;
const TRACK_HEIGHT: f32 = 3.0;
const THUMB_RADIUS: f32 = 8.0;
const READOUT_WIDTH: f32 = 64.0;
const READOUT_HEIGHT: f32 = 20.0;
const CHECKBOX_SIZE: f32 = 14.0;
const BUTTON_WIDTH: f32 = 72.0;
const BUTTON_HEIGHT: f32 = 26.0;

/// One slider row: label, track, thumb and value readout
#[derive(Debug, Clone)]
pub struct SliderRow {
    pub label: TextSpec,
    pub track: Line,
    pub thumb: CircleSpec,
    pub readout_box: RectSpec,
    pub readout: TextSpec,
}

/// A labelled checkbox
#[derive(Debug, Clone)]
pub struct CheckboxSpec {
    pub label: TextSpec,
    pub box_rect: RectSpec,
    pub checked: bool,
}

/// The reset button
#[derive(Debug, Clone)]
pub struct ButtonSpec {
    pub rect: RectSpec,
    pub label: TextSpec,
}

/// Computed geometry for the whole control panel
#[derive(Debug, Clone)]
pub struct ControlPanelLayout {
    pub background: RectSpec,
    pub sliders: Vec<SliderRow>,
    pub checkboxes: Vec<CheckboxSpec>,
    pub reset_button: ButtonSpec,
    /// Output-force readout; absent when toggled off
    pub output_readout: Option<TextSpec>,
}

/// Formats a numeric readout to one decimal place with a unit suffix
pub fn format_readout(value: f64, unit: &str) -> String {
    format!("{value:.1} {unit}")
}

impl ControlPanelLayout {
    /// Builds the panel from the current model state and view toggles
    pub fn build(container: &Container, toggles: &ViewToggles, config: &SimConfig) -> Self {
        let visual = &config.visual;
        let text_color = Color::from_rgba8(0, 0, 0, 255);

        let background = RectSpec {
            x: config.panel_x,
            y: config.panel_y,
            width: config.panel_width,
            height: config.panel_height,
            corner_radius: visual.corner_radius,
            fill: Color::from_rgba8(211, 211, 211, 255),
            stroke: Some(Color::from_rgba8(0, 0, 0, 255)),
            stroke_width: 1.0,
        };

        let input = container.input_lift();
        let output = container.output_lift();
        let rows = [
            ("Input Force", input.force(), "N", input.force_range()),
            ("Input Radius", input.radius(), "m", input.radius_range()),
            ("Output Radius", output.radius(), "m", output.radius_range()),
        ];

        let mut sliders = Vec::with_capacity(rows.len());
        for (index, (label, value, unit, range)) in rows.into_iter().enumerate() {
            let row_top = config.panel_y + PANEL_PADDING + index as f32 * ROW_HEIGHT;
            sliders.push(slider_row(
                label, value, unit, range, row_top, config, text_color,
            ));
        }

        let checkbox_top = config.panel_y + PANEL_PADDING + rows.len() as f32 * ROW_HEIGHT;
        let checkboxes = vec![
            checkbox(
                "Output Force",
                toggles.show_output_force,
                checkbox_top,
                config,
                text_color,
            ),
            checkbox(
                "Force Arrows",
                toggles.show_force_arrows,
                checkbox_top + CHECKBOX_SIZE + 12.0,
                config,
                text_color,
            ),
        ];

        let button_top = checkbox_top + 2.0 * (CHECKBOX_SIZE + 12.0) + 8.0;
        let reset_button = ButtonSpec {
            rect: RectSpec {
                x: config.panel_x + PANEL_PADDING,
                y: button_top,
                width: BUTTON_WIDTH,
                height: BUTTON_HEIGHT,
                corner_radius: visual.corner_radius,
                fill: Color::from_rgba8(240, 240, 240, 255),
                stroke: Some(Color::from_rgba8(0, 0, 0, 255)),
                stroke_width: 1.0,
            },
            label: TextSpec {
                text: "Reset".to_owned(),
                x: config.panel_x + PANEL_PADDING + 12.0,
                y: button_top + (BUTTON_HEIGHT - visual.font_size) / 2.0,
                size: visual.font_size,
                color: text_color,
            },
        };

        let output_readout = toggles.show_output_force.then(|| TextSpec {
            text: format!("Output Force: {}", format_readout(output.force(), "N")),
            x: config.panel_x + PANEL_PADDING,
            y: button_top + BUTTON_HEIGHT + 16.0,
            size: visual.font_size,
            color: text_color,
        });

        Self {
            background,
            sliders,
            checkboxes,
            reset_button,
            output_readout,
        }
    }
}

fn slider_row(
    label: &str,
    value: f64,
    unit: &str,
    range: Range,
    row_top: f32,
    config: &SimConfig,
    text_color: Color,
) -> SliderRow {
    let visual = &config.visual;
    let left = config.panel_x + PANEL_PADDING;
    let right = config.panel_x + config.panel_width - PANEL_PADDING;

    let readout_box = RectSpec {
        x: right - READOUT_WIDTH,
        y: row_top,
        width: READOUT_WIDTH,
        height: READOUT_HEIGHT,
        corner_radius: 1.0,
        fill: Color::from_rgba8(255, 255, 255, 255),
        stroke: Some(Color::from_rgba8(150, 150, 150, 255)),
        stroke_width: 0.5,
    };

    let track_y = row_top + READOUT_HEIGHT + 16.0;
    let track = Line {
        x1: left,
        y1: track_y,
        x2: right,
        y2: track_y,
        width: TRACK_HEIGHT,
        color: Color::from_rgba8(120, 120, 120, 255),
    };

    let thumb = CircleSpec {
        cx: left + range.normalize(value) as f32 * (right - left),
        cy: track_y,
        radius: THUMB_RADIUS,
        fill: Color::from_rgba8(36, 96, 204, 255),
    };

    SliderRow {
        label: TextSpec {
            text: label.to_owned(),
            x: left,
            y: row_top + (READOUT_HEIGHT - visual.font_size) / 2.0,
            size: visual.font_size,
            color: text_color,
        },
        track,
        thumb,
        readout_box: readout_box.clone(),
        readout: TextSpec {
            text: format_readout(value, unit),
            x: readout_box.x + 4.0,
            y: row_top + (READOUT_HEIGHT - visual.font_size) / 2.0,
            size: visual.font_size,
            color: text_color,
        },
    }
}

fn checkbox(
    label: &str,
    checked: bool,
    top: f32,
    config: &SimConfig,
    text_color: Color,
) -> CheckboxSpec {
    let visual = &config.visual;
    CheckboxSpec {
        label: TextSpec {
            text: label.to_owned(),
            x: config.panel_x + PANEL_PADDING,
            y: top,
            size: visual.font_size,
            color: text_color,
        },
        box_rect: RectSpec {
            x: config.panel_x + config.panel_width - PANEL_PADDING - CHECKBOX_SIZE,
            y: top,
            width: CHECKBOX_SIZE,
            height: CHECKBOX_SIZE,
            corner_radius: 2.0,
            fill: Color::from_rgba8(255, 255, 255, 255),
            stroke: Some(Color::from_rgba8(0, 0, 0, 255)),
            stroke_width: 1.0,
        },
        checked,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn panel(container: &Container, toggles: &ViewToggles) -> ControlPanelLayout {
        ControlPanelLayout::build(container, toggles, &SimConfig::default())
    }

    #[test]
    fn readout_formats_to_one_decimal_with_unit() {
        assert_eq!(format_readout(50.0, "N"), "50.0 N");
        assert_eq!(format_readout(2.55, "m"), "2.5 m");
        assert_eq!(format_readout(0.0, "N"), "0.0 N");
    }

    #[test]
    fn panel_has_three_sliders() {
        let container = Container::new().unwrap();
        let layout = panel(&container, &ViewToggles::default());
        assert_eq!(layout.sliders.len(), 3);
        assert_eq!(layout.sliders[0].readout.text, "0.0 N");
        assert_eq!(layout.sliders[1].readout.text, "1.0 m");
        assert_eq!(layout.sliders[2].readout.text, "5.0 m");
    }

    #[test]
    fn thumb_spans_the_track() {
        let mut container = Container::new().unwrap();
        let at_min = panel(&container, &ViewToggles::default());
        let row = &at_min.sliders[0];
        // Input force starts at the range minimum
        assert_relative_eq!(row.thumb.cx, row.track.x1);

        container.set_input_force(5.0).unwrap();
        let at_max = panel(&container, &ViewToggles::default());
        let row = &at_max.sliders[0];
        assert_relative_eq!(row.thumb.cx, row.track.x2);

        container.set_input_force(2.5).unwrap();
        let midway = panel(&container, &ViewToggles::default());
        let row = &midway.sliders[0];
        assert_relative_eq!(row.thumb.cx, (row.track.x1 + row.track.x2) / 2.0);
    }

    #[test]
    fn output_readout_follows_toggle() {
        let mut container = Container::new().unwrap();
        container.set_input_force(2.0).unwrap();

        let shown = panel(&container, &ViewToggles::default());
        let readout = shown.output_readout.expect("readout should be visible");
        assert_eq!(readout.text, "Output Force: 50.0 N");

        let hidden_toggles = ViewToggles {
            show_output_force: false,
            ..ViewToggles::default()
        };
        let hidden = panel(&container, &hidden_toggles);
        assert!(hidden.output_readout.is_none());
    }

    #[test]
    fn checkboxes_mirror_toggles() {
        let container = Container::new().unwrap();
        let toggles = ViewToggles {
            show_output_force: true,
            show_force_arrows: false,
        };
        let layout = panel(&container, &toggles);
        assert_eq!(layout.checkboxes.len(), 2);
        assert!(layout.checkboxes[0].checked);
        assert!(!layout.checkboxes[1].checked);
    }

    #[test]
    fn chrome_stays_inside_the_panel() {
        let container = Container::new().unwrap();
        let layout = panel(&container, &ViewToggles::default());
        let bg = &layout.background;
        for row in &layout.sliders {
            assert!(row.track.x1 >= bg.x);
            assert!(row.track.x2 <= bg.x + bg.width);
            assert!(row.readout_box.bottom() <= bg.bottom());
        }
        assert!(layout.reset_button.rect.bottom() <= bg.bottom());
    }
}
