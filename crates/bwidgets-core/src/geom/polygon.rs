// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Polygon vertex lists

use super::Point;
use crate::cast::Conv;
use std::ops::{Index, IndexMut};

/// An ordered list of vertices for one draw call
///
/// The vertex count is cached alongside the vertex list and is always equal
/// to its length. How the vertices are connected is up to the draw type of
/// the [`Painter`](crate::draw::Painter) submitting the polygon.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
    vert_count: usize,
}

impl Polygon {
    /// Construct an empty polygon
    #[inline]
    pub fn new() -> Self {
        Polygon::default()
    }

    /// Construct an empty polygon with storage for `n` vertices
    #[inline]
    pub fn with_capacity(n: usize) -> Self {
        Polygon {
            vertices: Vec::with_capacity(n),
            vert_count: 0,
        }
    }

    /// Append a vertex
    pub fn add_vertex(&mut self, vertex: Point) {
        self.vertices.push(vertex);
        self.vert_count += 1;
        debug_assert_eq!(self.vert_count, self.vertices.len());
    }

    /// Append a vertex from float coordinates
    #[inline]
    pub fn add_vertex_xy(&mut self, x: f32, y: f32) {
        self.add_vertex(Point::new(x, y));
    }

    /// Append a vertex from integer coordinates
    #[inline]
    pub fn add_vertex_pixel(&mut self, x: i32, y: i32) {
        self.add_vertex(Point::new(f32::conv(x), f32::conv(y)));
    }

    /// Reserve storage for `n` more vertices
    ///
    /// The vertex count is unchanged.
    #[inline]
    pub fn reserve(&mut self, n: usize) {
        self.vertices.reserve(n);
    }

    /// Access vertices
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Number of vertices
    #[inline]
    pub fn len(&self) -> usize {
        self.vert_count
    }

    /// True when there are no vertices
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vert_count == 0
    }

    /// True when there is something to draw
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.vert_count > 0
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        let vert_count = vertices.len();
        Polygon {
            vertices,
            vert_count,
        }
    }
}

impl Index<usize> for Polygon {
    type Output = Point;

    #[inline]
    fn index(&self, index: usize) -> &Point {
        &self.vertices[index]
    }
}

impl IndexMut<usize> for Polygon {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Point {
        &mut self.vertices[index]
    }
}
