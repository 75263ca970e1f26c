//! Scene rendering
//!
//! Turns computed layouts into pixels with tiny-skia. The renderer owns the
//! optional UI font; everything else arrives as plain layout data, so the
//! full scene can be laid out and asserted on without ever rasterizing.

use ab_glyph::FontVec;
use thiserror::Error;
use tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, Rect as SkiaRect, Stroke, Transform,
};

use crate::view::container_node::ContainerLayout;
use crate::view::control_panel::{CheckboxSpec, ControlPanelLayout, SliderRow};
use crate::view::lift_node::LiftLayout;
use crate::view::shapes::{ArrowSpec, CircleSpec, Line, PolygonSpec, RectSpec, TextSpec};
use crate::view::text::{self, TextError};

/// Rendering errors
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("failed to create pixmap for rendering")]
    PixmapCreationFailed,

    #[error("invalid scene dimensions: {width}x{height}")]
    InvalidSceneDimensions { width: u32, height: u32 },

    #[error("failed to prepare UI font: {0}")]
    Font(#[from] TextError),
}

/// Complete per-frame scene description
///
/// Produced by the controller from the current model state; contains all
/// the geometric information needed to render one frame.
#[derive(Debug, Clone)]
pub struct SceneLayout {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub container: ContainerLayout,
    pub input_lift: LiftLayout,
    pub output_lift: LiftLayout,
    pub panel: ControlPanelLayout,
    /// Force arrows are omitted from the frame when false
    pub show_force_arrows: bool,
}

/// Scene renderer backed by tiny-skia
pub struct SceneRenderer {
    font: Option<FontVec>,
}

impl SceneRenderer {
    /// Creates a renderer without text support
    pub fn new() -> Self {
        Self { font: None }
    }

    /// Creates a renderer that draws text with the given font bytes
    pub fn with_font(data: Vec<u8>) -> Result<Self, RendererError> {
        Ok(Self {
            font: Some(text::load_font(data)?),
        })
    }

    /// Returns true if text will be drawn
    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    /// Renders a scene layout to a pixmap
    pub fn render(&self, layout: &SceneLayout) -> Result<Pixmap, RendererError> {
        if layout.width == 0 || layout.height == 0 {
            return Err(RendererError::InvalidSceneDimensions {
                width: layout.width,
                height: layout.height,
            });
        }
        let mut pixmap =
            Pixmap::new(layout.width, layout.height).ok_or(RendererError::PixmapCreationFailed)?;
        pixmap.fill(layout.background);

        // Shafts sit behind the pistons, both behind the vessel outline
        for lift in [&layout.input_lift, &layout.output_lift] {
            self.fill_rect(&mut pixmap, &lift.shaft);
            self.fill_rect(&mut pixmap, &lift.piston);
        }
        self.stroke_polygon(&mut pixmap, &layout.container.outline);

        if layout.show_force_arrows {
            self.draw_arrow(&mut pixmap, &layout.input_lift.arrow);
            self.draw_arrow(&mut pixmap, &layout.output_lift.arrow);
        }

        self.render_panel(&mut pixmap, &layout.panel);
        Ok(pixmap)
    }

    fn render_panel(&self, pixmap: &mut Pixmap, panel: &ControlPanelLayout) {
        self.fill_rect(pixmap, &panel.background);
        for row in &panel.sliders {
            self.render_slider_row(pixmap, row);
        }
        for checkbox in &panel.checkboxes {
            self.render_checkbox(pixmap, checkbox);
        }
        self.fill_rect(pixmap, &panel.reset_button.rect);
        self.draw_text(pixmap, &panel.reset_button.label);
        if let Some(readout) = &panel.output_readout {
            self.draw_text(pixmap, readout);
        }
    }

    fn render_slider_row(&self, pixmap: &mut Pixmap, row: &SliderRow) {
        self.stroke_line(pixmap, &row.track);
        self.fill_circle(pixmap, &row.thumb);
        self.fill_rect(pixmap, &row.readout_box);
        self.draw_text(pixmap, &row.label);

        // Right-align the value inside its box when we can measure it
        if let Some(font) = &self.font {
            let width = text::measure(font, &row.readout.text, row.readout.size);
            let mut aligned = row.readout.clone();
            aligned.x = row.readout_box.x + row.readout_box.width - 4.0 - width;
            text::draw_text(pixmap, font, &aligned);
        }
    }

    fn render_checkbox(&self, pixmap: &mut Pixmap, checkbox: &CheckboxSpec) {
        self.fill_rect(pixmap, &checkbox.box_rect);
        self.draw_text(pixmap, &checkbox.label);
        if checkbox.checked {
            let b = &checkbox.box_rect;
            let color = Color::from_rgba8(36, 96, 204, 255);
            self.stroke_line(
                pixmap,
                &Line {
                    x1: b.x + b.width * 0.2,
                    y1: b.y + b.height * 0.55,
                    x2: b.x + b.width * 0.45,
                    y2: b.y + b.height * 0.8,
                    width: 2.0,
                    color,
                },
            );
            self.stroke_line(
                pixmap,
                &Line {
                    x1: b.x + b.width * 0.45,
                    y1: b.y + b.height * 0.8,
                    x2: b.x + b.width * 0.85,
                    y2: b.y + b.height * 0.2,
                    width: 2.0,
                    color,
                },
            );
        }
    }

    fn fill_rect(&self, pixmap: &mut Pixmap, rect: &RectSpec) {
        let Some(path) = rect_path(rect) else {
            return;
        };
        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color(rect.fill);
        pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

        if let Some(stroke_color) = rect.stroke {
            paint.set_color(stroke_color);
            let stroke = Stroke {
                width: rect.stroke_width,
                ..Stroke::default()
            };
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    fn stroke_line(&self, pixmap: &mut Pixmap, line: &Line) {
        let mut builder = PathBuilder::new();
        builder.move_to(line.x1, line.y1);
        builder.line_to(line.x2, line.y2);
        if let Some(path) = builder.finish() {
            let mut paint = Paint::default();
            paint.anti_alias = true;
            paint.set_color(line.color);
            let stroke = Stroke {
                width: line.width,
                ..Stroke::default()
            };
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    fn stroke_polygon(&self, pixmap: &mut Pixmap, polygon: &PolygonSpec) {
        let mut vertices = polygon.vertices.iter();
        let Some(&(x0, y0)) = vertices.next() else {
            return;
        };
        let mut builder = PathBuilder::new();
        builder.move_to(x0, y0);
        for &(x, y) in vertices {
            builder.line_to(x, y);
        }
        builder.close();
        if let Some(path) = builder.finish() {
            let mut paint = Paint::default();
            paint.anti_alias = true;
            paint.set_color(polygon.stroke);
            let stroke = Stroke {
                width: polygon.stroke_width,
                ..Stroke::default()
            };
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    fn fill_circle(&self, pixmap: &mut Pixmap, circle: &CircleSpec) {
        let mut builder = PathBuilder::new();
        builder.push_circle(circle.cx, circle.cy, circle.radius);
        if let Some(path) = builder.finish() {
            let mut paint = Paint::default();
            paint.anti_alias = true;
            paint.set_color(circle.fill);
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    fn draw_arrow(&self, pixmap: &mut Pixmap, arrow: &ArrowSpec) {
        let length = arrow.length();
        if length < f32::EPSILON {
            return;
        }
        let dir_x = (arrow.tip_x - arrow.tail_x) / length;
        let dir_y = (arrow.tip_y - arrow.tail_y) / length;
        let head = arrow.head_size.min(length);

        // Shaft stops where the head begins
        self.stroke_line(
            pixmap,
            &Line {
                x1: arrow.tail_x,
                y1: arrow.tail_y,
                x2: arrow.tip_x - dir_x * head,
                y2: arrow.tip_y - dir_y * head,
                width: arrow.shaft_width,
                color: arrow.color,
            },
        );

        let base_x = arrow.tip_x - dir_x * head;
        let base_y = arrow.tip_y - dir_y * head;
        let half = head / 2.0;
        let mut builder = PathBuilder::new();
        builder.move_to(arrow.tip_x, arrow.tip_y);
        builder.line_to(base_x - dir_y * half, base_y + dir_x * half);
        builder.line_to(base_x + dir_y * half, base_y - dir_x * half);
        builder.close();
        if let Some(path) = builder.finish() {
            let mut paint = Paint::default();
            paint.anti_alias = true;
            paint.set_color(arrow.color);
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    fn draw_text(&self, pixmap: &mut Pixmap, spec: &TextSpec) {
        if let Some(font) = &self.font {
            text::draw_text(pixmap, font, spec);
        }
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rect_path(rect: &RectSpec) -> Option<tiny_skia::Path> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let radius = rect
        .corner_radius
        .min(rect.width / 2.0)
        .min(rect.height / 2.0);
    let mut builder = PathBuilder::new();
    if radius <= 0.0 {
        builder.push_rect(SkiaRect::from_xywh(rect.x, rect.y, rect.width, rect.height)?);
    } else {
        let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
        builder.move_to(x + radius, y);
        builder.line_to(x + w - radius, y);
        builder.quad_to(x + w, y, x + w, y + radius);
        builder.line_to(x + w, y + h - radius);
        builder.quad_to(x + w, y + h, x + w - radius, y + h);
        builder.line_to(x + radius, y + h);
        builder.quad_to(x, y + h, x, y + h - radius);
        builder.line_to(x, y + radius);
        builder.quad_to(x, y, x + radius, y);
        builder.close();
    }
    builder.finish()
}
