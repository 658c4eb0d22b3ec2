//! Geometry primitives shared by the resolvers
//!
//! Plain `f64` value types in the presenting surface's coordinate space. The origin
//! is the top-left corner and y grows downwards.

use serde::{Deserialize, Serialize};

/// A point in the container's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A width/height pair
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions are finite and non-negative
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// A rectangle described by its top-left origin and its size
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Build the rectangle of `size` whose midpoint sits on `center`
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self {
            origin: Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
            size,
        }
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.mid_x(), 60.0);
        assert_eq!(rect.mid_y(), 45.0);
        assert_eq!(rect.max_x(), 110.0);
        assert_eq!(rect.max_y(), 70.0);
    }

    #[test]
    fn test_centered_at() {
        let rect = Rect::centered_at(Point::new(160.0, 240.0), Size::new(270.0, 180.0));
        assert_eq!(rect, Rect::new(25.0, 150.0, 270.0, 180.0));
    }

    #[test]
    fn test_size_validity() {
        assert!(Size::new(0.0, 10.0).is_valid());
        assert!(!Size::new(-1.0, 10.0).is_valid());
        assert!(!Size::new(f64::NAN, 10.0).is_valid());
    }
}
