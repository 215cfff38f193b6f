//! Geometric primitives: Point, Size, Rect, GraphicsLayer

use std::ops::{Add, AddAssign, Sub};

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Euclidean length when the point is read as a displacement vector.
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        (*self - other).length()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Returns `true` unless both dimensions are positive: a surface that
    /// has not been laid out yet, or one with a negative or NaN dimension.
    pub fn has_zero_extent(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.x + self.width && y <= self.y + self.height
    }
}

/// Uniform scale applied to a layer's content around its center.
///
/// The z component is always 1.0, so only the planar scale is stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub scale: f32,
}

impl GraphicsLayer {
    pub const IDENTITY: GraphicsLayer = GraphicsLayer { scale: 1.0 };

    pub fn scale(scale: f32) -> Self {
        Self { scale }
    }

    /// Maps `rect` through this layer, scaling around the rectangle's center.
    pub fn apply_to_rect(&self, rect: Rect) -> Rect {
        let center = rect.center();
        let width = rect.width * self.scale;
        let height = rect.height * self.scale;
        Rect {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_extent_checks_both_dimensions() {
        assert!(Size::ZERO.has_zero_extent());
        assert!(Size::new(100.0, 0.0).has_zero_extent());
        assert!(Size::new(0.0, 40.0).has_zero_extent());
        assert!(!Size::new(100.0, 40.0).has_zero_extent());
    }

    #[test]
    fn negative_or_nan_dimensions_have_no_extent() {
        assert!(Size::new(-20.0, 40.0).has_zero_extent());
        assert!(Size::new(100.0, -1.0).has_zero_extent());
        assert!(Size::new(f32::NAN, 40.0).has_zero_extent());
        assert!(Size::new(100.0, f32::NAN).has_zero_extent());
    }

    #[test]
    fn point_arithmetic_measures_displacement() {
        let mut travelled = Point::ZERO;
        travelled += Point::new(3.0, 0.0);
        travelled += Point::new(0.0, 4.0);
        assert_eq!(travelled.length(), 5.0);
        assert_eq!(Point::new(10.0, 10.0).distance_to(Point::new(13.0, 14.0)), 5.0);
    }

    #[test]
    fn layer_scales_rect_around_center() {
        let rect = Rect::from_size(Size::new(100.0, 50.0));
        let scaled = GraphicsLayer::scale(0.9).apply_to_rect(rect);
        assert_eq!(scaled.center(), rect.center());
        assert!((scaled.width - 90.0).abs() < 1e-4);
        assert!((scaled.height - 45.0).abs() < 1e-4);
    }
}
