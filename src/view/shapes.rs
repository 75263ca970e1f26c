//! Drawable primitive specifications
//!
//! Plain-data shapes shared by the layout modules and the renderer. Layouts
//! compute these; the renderer turns them into pixels. Keeping the two apart
//! makes every layout testable without a pixmap.

use tiny_skia::Color;

/// Straight line segment
#[derive(Debug, Clone)]
pub struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub width: f32,
    pub color: Color,
}

/// Filled rectangle with optional rounded corners and stroke
#[derive(Debug, Clone)]
pub struct RectSpec {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub stroke_width: f32,
}

impl RectSpec {
    /// Center x-coordinate of the rectangle
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y-coordinate of the rectangle
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Bottom edge coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Filled circle
#[derive(Debug, Clone)]
pub struct CircleSpec {
    pub cx: f32,
    pub cy: f32,
    pub radius: f32,
    pub fill: Color,
}

/// Arrow from tail to tip with a triangular head
#[derive(Debug, Clone)]
pub struct ArrowSpec {
    pub tail_x: f32,
    pub tail_y: f32,
    pub tip_x: f32,
    pub tip_y: f32,
    pub shaft_width: f32,
    pub head_size: f32,
    pub color: Color,
}

impl ArrowSpec {
    /// Length of the arrow from tail to tip
    pub fn length(&self) -> f32 {
        let dx = self.tip_x - self.tail_x;
        let dy = self.tip_y - self.tail_y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Positioned text run
#[derive(Debug, Clone)]
pub struct TextSpec {
    pub text: String,
    /// Left edge of the first glyph
    pub x: f32,
    /// Top of the text line (ascent is applied during rasterization)
    pub y: f32,
    pub size: f32,
    pub color: Color,
}

/// Closed polygon outline
#[derive(Debug, Clone)]
pub struct PolygonSpec {
    /// Vertices in draw order; the path closes back to the first vertex
    pub vertices: Vec<(f32, f32)>,
    pub stroke: Color,
    pub stroke_width: f32,
}
