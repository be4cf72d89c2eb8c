// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Geometry data types
//!
//! [`Point`] is a 2D floating-point (`f32`) position used for input locations
//! and polygon vertices. [`Rectangle`] is an axis-aligned box in integer pixel
//! space, with `y` growing downwards (`ymin` is the top edge).
//!
//! [`Polygon`] is an ordered vertex list built for a single draw call.

use crate::cast::{Conv, ConvFloat};
use std::ops::{Add, Mul, Sub};

mod polygon;
pub use polygon::Polygon;

/// A 2D point
///
/// Equality is exact floating-point comparison, without any epsilon. This
/// is deterministic but should not be relied upon for computed geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The constant `(0, 0)`
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Construct
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    /// Construct from integer pixel coordinates
    #[inline]
    pub fn from_pixel(x: i32, y: i32) -> Self {
        Point::new(f32::conv(x), f32::conv(y))
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Point::new(x, y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, factor: f32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle in pixel space
///
/// The covered region is the half-open box `[xmin, xmax) × [ymin, ymax)`.
/// Layout assigns widget rectangles; widgets may derive sub-rectangles from
/// their own (for example the box of a check box).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rectangle {
    pub xmin: i32,
    pub xmax: i32,
    pub ymin: i32,
    pub ymax: i32,
}

impl Rectangle {
    /// The empty rectangle (all fields zero)
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Construct from edges
    #[inline]
    pub const fn new(xmin: i32, xmax: i32, ymin: i32, ymax: i32) -> Self {
        Rectangle {
            xmin,
            xmax,
            ymin,
            ymax,
        }
    }

    /// Construct from position and size
    #[inline]
    pub const fn from_size(xmin: i32, width: i32, ymin: i32, height: i32) -> Self {
        Rectangle::new(xmin, xmin + width, ymin, ymin + height)
    }

    /// Reassign from position and size
    #[inline]
    pub fn set(&mut self, xmin: i32, width: i32, ymin: i32, height: i32) {
        *self = Rectangle::from_size(xmin, width, ymin, height);
    }

    /// Horizontal extent
    #[inline]
    pub fn width(&self) -> i32 {
        self.xmax - self.xmin
    }

    /// Vertical extent
    #[inline]
    pub fn height(&self) -> i32 {
        self.ymax - self.ymin
    }

    /// True if the rectangle covers no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xmax <= self.xmin || self.ymax <= self.ymin
    }

    /// Horizontal centre
    #[inline]
    pub fn center_x(&self) -> f32 {
        f32::conv(self.xmin + self.xmax) * 0.5
    }

    /// Vertical centre
    #[inline]
    pub fn center_y(&self) -> f32 {
        f32::conv(self.ymin + self.ymax) * 0.5
    }

    /// Check whether the given integer coordinate is inside
    #[inline]
    pub fn contains_coord(&self, x: i32, y: i32) -> bool {
        x >= self.xmin && x < self.xmax && y >= self.ymin && y < self.ymax
    }

    /// Check whether the given point is inside
    ///
    /// Uses the same half-open convention as [`Self::contains_coord`].
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= f32::conv(self.xmin)
            && p.x < f32::conv(self.xmax)
            && p.y >= f32::conv(self.ymin)
            && p.y < f32::conv(self.ymax)
    }

    /// Grow (or with negative `n`, shrink) by `n` pixels on every side
    #[inline]
    pub fn resize(&mut self, n: i32) {
        self.xmin -= n;
        self.xmax += n;
        self.ymin -= n;
        self.ymax += n;
    }

    /// Return a copy grown by `n` pixels on every side
    #[inline]
    #[must_use = "method does not modify self but returns a new value"]
    pub fn resized(mut self, n: i32) -> Self {
        self.resize(n);
        self
    }

    /// Return a copy with all edges scaled and rounded to pixels
    #[must_use = "method does not modify self but returns a new value"]
    pub fn scaled(&self, factor: f32) -> Self {
        let scale = |v: i32| i32::conv_nearest(f32::conv(v) * factor);
        Rectangle::new(
            scale(self.xmin),
            scale(self.xmax),
            scale(self.ymin),
            scale(self.ymax),
        )
    }
}
