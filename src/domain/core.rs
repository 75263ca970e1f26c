//! Core domain types and operations
//!
//! This module defines pure model-space types that work exclusively with
//! physical coordinates (meters, newtons) and have no knowledge of pixels
//! or the rendering layer.

/// Point in model coordinates, in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Origin of the model coordinate system
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangular region in model coordinates
///
/// This is the fundamental building block for coordinate mapping. The y-axis
/// points up, matching physical convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Creates new bounds from opposite corners
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns the width of the region
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Returns the height of the region
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the center point of the region
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns true if the region contains the given point
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Returns true if the region has zero or negative width or height
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }
}

/// Closed numeric interval used to constrain slider input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    /// Creates a new range; `min` must not exceed `max`
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Returns the length of the interval
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Returns true if the interval contains the value
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps the value into the interval
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Maps a contained value to [0, 1]
    ///
    /// Values outside the interval are clamped first, so the result is
    /// always a valid interpolation parameter.
    pub fn normalize(&self, value: f64) -> f64 {
        if self.length() <= 0.0 {
            return 0.0;
        }
        (self.clamp(value) - self.min) / self.length()
    }

    /// Maps an interpolation parameter in [0, 1] back to the interval
    pub fn denormalize(&self, t: f64) -> f64 {
        self.min + self.length() * t.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_basic_properties() {
        let bounds = Bounds::new(-10.0, -5.0, 10.0, 5.0);
        assert_eq!(bounds.width(), 20.0);
        assert_eq!(bounds.height(), 10.0);
        assert_eq!(bounds.center(), Point::ORIGIN);
        assert!(!bounds.is_degenerate());
    }

    #[test]
    fn bounds_contains() {
        let bounds = Bounds::new(0.0, 0.0, 2.0, 2.0);
        assert!(bounds.contains(Point::new(1.0, 1.0))); // Inside
        assert!(bounds.contains(Point::new(0.0, 0.0))); // Corner
        assert!(!bounds.contains(Point::new(3.0, 1.0))); // Outside
    }

    #[test]
    fn degenerate_bounds() {
        assert!(Bounds::new(0.0, 0.0, 0.0, 5.0).is_degenerate());
        assert!(Bounds::new(2.0, 0.0, 1.0, 5.0).is_degenerate());
    }

    #[test]
    fn range_clamp_and_contains() {
        let range = Range::new(1.0, 3.0);
        assert!(range.contains(2.0));
        assert!(range.contains(1.0));
        assert!(!range.contains(0.5));
        assert_eq!(range.clamp(0.5), 1.0);
        assert_eq!(range.clamp(4.0), 3.0);
        assert_eq!(range.clamp(2.5), 2.5);
    }

    #[test]
    fn range_normalize_roundtrip() {
        let range = Range::new(5.0, 7.0);
        assert_eq!(range.normalize(5.0), 0.0);
        assert_eq!(range.normalize(7.0), 1.0);
        assert_eq!(range.normalize(6.0), 0.5);
        assert_eq!(range.denormalize(0.5), 6.0);
        // Out-of-range input clamps rather than extrapolating
        assert_eq!(range.normalize(9.0), 1.0);
        assert_eq!(range.denormalize(2.0), 7.0);
    }

    #[test]
    fn empty_range_normalizes_to_zero() {
        let range = Range::new(2.0, 2.0);
        assert_eq!(range.normalize(2.0), 0.0);
        assert_eq!(range.denormalize(0.7), 2.0);
    }
}
