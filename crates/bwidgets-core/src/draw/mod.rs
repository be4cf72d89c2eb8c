// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! # Draw APIs
//!
//! Widgets never issue graphics-API calls themselves. Each draw call goes
//! through a [`Painter`], which turns high-level shapes (rounded boxes,
//! check marks, text with icon) into polygons and hands them to the host's
//! [`PaintEngine`].
//!
//! ## Draw order
//!
//! The screen graph sets up the viewport once per frame, then draws visible
//! widgets in tree order: a container is drawn before its children. Within one
//! widget, operations reach the engine in the order they are issued.

pub mod color;
mod painter;
mod record;

pub use color::{Color, Rgba8};
pub use painter::{Gradient, GradientDirection, Painter, PainterState, TriaDirection};
pub use record::{PaintCommand, RecordingEngine};

use crate::geom::{Polygon, Rectangle};
use std::any::Any;
use std::fmt::Debug;

/// How the vertices of a polygon are interpreted by the engine
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DrawType {
    /// Triangle fan around the first vertex
    #[default]
    Filled,
    /// Triangle strip, alternating outer and inner vertices
    Outline,
    /// Line strip
    Line,
}

/// Horizontal text alignment
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// An icon handle supplied by the host
///
/// The toolkit only asks whether the icon is drawable; everything else is up
/// to the [`PaintEngine`], which may downcast via [`Any`].
pub trait Icon: Any + Debug {
    /// Whether this icon can be drawn
    fn is_valid(&self) -> bool;
}

/// The rendering backend
///
/// Implemented by the host application. All methods receive the painter's
/// current [`PainterState`], which carries the active colour, draw type,
/// optional per-vertex gradient colours and content mask.
pub trait PaintEngine {
    /// Prepare a frame covering `rect`, cleared to `clear_color`
    fn setup_viewport(&mut self, rect: &Rectangle, clear_color: Color);

    /// Clip subsequent drawing to `rect`
    fn enable_mask(&mut self, rect: &Rectangle);

    /// Draw a polygon
    ///
    /// The polygon is always [drawable](Polygon::is_drawable). When
    /// [`PainterState::is_gradient_enabled`] is true, each vertex has its own
    /// colour, see [`PainterState::vertex_color`].
    fn draw_polygon(&mut self, state: &PainterState, polygon: &Polygon);

    /// Draw a line of text within `rect`
    fn draw_text(
        &mut self,
        state: &PainterState,
        text: &str,
        rect: &Rectangle,
        alignment: TextAlignment,
    );

    /// Draw an icon within `rect`
    ///
    /// The icon is always [valid](Icon::is_valid).
    fn draw_icon(&mut self, state: &PainterState, icon: &dyn Icon, rect: &Rectangle);
}
