// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Painter: shape tessellation on top of a [`PaintEngine`]

use super::{Color, DrawType, Icon, PaintEngine, TextAlignment};
use crate::cast::{CastFloat, Conv};
use crate::geom::{Point, Polygon, Rectangle};
use crate::theme::{Corners, Style, WidgetBaseStyle};

/// Corner arc samples: `(sin θ, 1 - cos θ)` for θ over a quarter turn
const CORNER_ARC: [(f32, f32); 9] = [
    (0.0, 0.0),
    (0.195, 0.02),
    (0.383, 0.067),
    (0.55, 0.169),
    (0.707, 0.293),
    (0.831, 0.45),
    (0.924, 0.617),
    (0.98, 0.805),
    (1.0, 1.0),
];

/// Check mark as a triangle strip around the origin, `y` pointing up
const CHECK_MARK: [(f32, f32); 6] = [
    (-0.578579, 0.253369),
    (-0.392773, 0.412794),
    (-0.004241, -0.328551),
    (-0.003001, 0.034320),
    (1.055313, 0.864744),
    (0.866408, 1.026895),
];

/// Nominal icon size in pixels (before DPI scaling)
const ICON_SIZE: f32 = 16.0;
/// Space left of an icon in pixels (before DPI scaling)
const ICON_OFFSET: f32 = 2.0;

/// Direction of a [`Gradient`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GradientDirection {
    /// `begin` at the top edge, `end` at the bottom edge
    #[default]
    TopBottom,
    /// `begin` at the left edge, `end` at the right edge
    LeftRight,
}

/// A two-colour linear gradient
///
/// Both colours are derived from one base colour, shaded by two amounts.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gradient {
    pub begin: Color,
    pub end: Color,
    pub direction: GradientDirection,
}

impl Gradient {
    /// Construct a top-to-bottom gradient
    pub fn new(base: Color, shade_begin: i32, shade_end: i32) -> Self {
        Gradient::with_direction(base, shade_begin, shade_end, GradientDirection::TopBottom)
    }

    /// Construct with explicit direction
    pub fn with_direction(
        base: Color,
        shade_begin: i32,
        shade_end: i32,
        direction: GradientDirection,
    ) -> Self {
        Gradient {
            begin: base.shaded(shade_begin),
            end: base.shaded(shade_end),
            direction,
        }
    }

    /// True if both ends have the same colour
    pub fn is_flat(&self) -> bool {
        self.begin == self.end
    }

    /// Colour at `point`, relative to `bounds`
    pub fn color_at(&self, point: Point, bounds: &Rectangle) -> Color {
        let (pos, min, len) = match self.direction {
            GradientDirection::TopBottom => (point.y, bounds.ymin, bounds.height()),
            GradientDirection::LeftRight => (point.x, bounds.xmin, bounds.width()),
        };
        if len <= 0 {
            return self.begin;
        }
        let fac = (pos - f32::conv(min)) / f32::conv(len);
        self.begin.mix(self.end, fac)
    }
}

/// Orientation of a triangle drawn with [`Painter::draw_tria`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriaDirection {
    Right,
    Down,
}

/// State passed to the [`PaintEngine`] with every primitive
#[derive(Clone, Debug, Default)]
pub struct PainterState {
    draw_type: DrawType,
    active_color: Color,
    vertex_colors: Vec<Color>,
    content_mask: Option<Rectangle>,
}

impl PainterState {
    /// How polygon vertices are to be interpreted
    #[inline]
    pub fn draw_type(&self) -> DrawType {
        self.draw_type
    }

    /// Uniform colour, used when no gradient is enabled
    #[inline]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    /// Whether vertices carry individual colours
    #[inline]
    pub fn is_gradient_enabled(&self) -> bool {
        !self.vertex_colors.is_empty()
    }

    /// Colour of vertex `index`
    ///
    /// Falls back to the active colour without gradient.
    pub fn vertex_color(&self, index: usize) -> Color {
        self.vertex_colors
            .get(index)
            .copied()
            .unwrap_or(self.active_color)
    }

    /// The clip rectangle set by [`Painter::set_content_mask`], if any
    #[inline]
    pub fn content_mask(&self) -> Option<Rectangle> {
        self.content_mask
    }
}

/// Drawing helper for a single widget draw call
///
/// A painter is short-lived: widgets create one in their `draw` method. It
/// owns a [`PainterState`] and forwards tessellated primitives to the engine.
pub struct Painter<'a> {
    engine: &'a mut dyn PaintEngine,
    state: PainterState,
    gradient: Option<(Gradient, Rectangle)>,
}

impl<'a> Painter<'a> {
    /// Construct over `engine`
    pub fn new(engine: &'a mut dyn PaintEngine) -> Self {
        Painter {
            engine,
            state: PainterState::default(),
            gradient: None,
        }
    }

    /// Access current state
    #[inline]
    pub fn state(&self) -> &PainterState {
        &self.state
    }

    /// Set the draw type used for subsequent polygons
    #[inline]
    pub fn set_draw_type(&mut self, draw_type: DrawType) {
        self.state.draw_type = draw_type;
    }

    /// Set a uniform colour
    ///
    /// This disables any active gradient.
    pub fn set_active_color(&mut self, color: Color) {
        self.state.active_color = color;
        self.gradient = None;
    }

    /// Enable a gradient over `bounds`
    ///
    /// Vertex colours are computed for each subsequent polygon. A flat
    /// gradient is treated as a uniform colour.
    pub fn enable_gradient(&mut self, gradient: Gradient, bounds: Rectangle) {
        self.state.active_color = gradient.begin;
        self.gradient = (!gradient.is_flat()).then_some((gradient, bounds));
    }

    /// Clip subsequent drawing to `rect`
    pub fn set_content_mask(&mut self, rect: Rectangle) {
        self.state.content_mask = Some(rect);
        self.engine.enable_mask(&rect);
    }

    /// Send a polygon to the engine
    ///
    /// Polygons without vertices are ignored.
    pub fn draw_polygon(&mut self, polygon: &Polygon) {
        if !polygon.is_drawable() {
            return;
        }

        self.state.vertex_colors.clear();
        if let Some((gradient, bounds)) = self.gradient.as_ref() {
            self.state.vertex_colors.extend(
                polygon
                    .vertices()
                    .iter()
                    .map(|p| gradient.color_at(*p, bounds)),
            );
        }

        self.engine.draw_polygon(&self.state, polygon);
    }

    /// Draw a rectangle with rounded `corners`
    ///
    /// The tessellation depends on the current draw type: a fan for
    /// [`DrawType::Filled`], a one pixel wide strip for [`DrawType::Outline`]
    /// and a closed loop for [`DrawType::Line`].
    pub fn draw_roundbox(&mut self, rect: &Rectangle, corners: Corners, radius: f32) {
        let polygon = roundbox_polygon(rect, corners, radius, self.state.draw_type);
        self.draw_polygon(&polygon);
    }

    /// Draw a widget background with border
    ///
    /// The inside is filled with `gradient`, then the border is drawn as a one
    /// pixel outline in the border colour of `base_style`. `radius` is scaled
    /// by the style's DPI factor.
    pub fn draw_roundbox_widget_base(
        &mut self,
        base_style: &WidgetBaseStyle,
        style: &dyn Style,
        rect: &Rectangle,
        gradient: Gradient,
        radius: f32,
    ) {
        let radius = radius * style.dpi_factor();
        let corners = base_style.roundbox_corners;

        let mut inner = *rect;
        inner.resize(-1);
        self.set_draw_type(DrawType::Filled);
        self.enable_gradient(gradient, inner);
        self.draw_roundbox(&inner, corners, radius - 1.0);

        self.set_draw_type(DrawType::Outline);
        self.set_active_color(base_style.border_color);
        self.draw_roundbox(rect, corners, radius);
    }

    /// Draw a check mark centred in `rect`
    pub fn draw_check_mark(&mut self, rect: &Rectangle) {
        let size = 0.5 * f32::conv(rect.height());
        let cx = rect.center_x() - 0.2 * size;
        let cy = rect.center_y() + 0.25 * size;

        let mut polygon = Polygon::with_capacity(CHECK_MARK.len());
        for (x, y) in CHECK_MARK {
            polygon.add_vertex_xy(cx + x * size, cy - y * size);
        }
        self.draw_polygon(&polygon);
    }

    /// Draw a filled triangle centred in `rect`
    pub fn draw_tria(&mut self, rect: &Rectangle, direction: TriaDirection) {
        let size = 0.5 * f32::conv(rect.width().min(rect.height()));
        let half = 0.5 * size;
        let (cx, cy) = (rect.center_x(), rect.center_y());

        let mut polygon = Polygon::with_capacity(3);
        match direction {
            TriaDirection::Right => {
                polygon.add_vertex_xy(cx - half, cy - half);
                polygon.add_vertex_xy(cx + half, cy);
                polygon.add_vertex_xy(cx - half, cy + half);
            }
            TriaDirection::Down => {
                polygon.add_vertex_xy(cx - half, cy - half);
                polygon.add_vertex_xy(cx + half, cy - half);
                polygon.add_vertex_xy(cx, cy + half);
            }
        }

        let draw_type = self.state.draw_type;
        self.set_draw_type(DrawType::Filled);
        self.draw_polygon(&polygon);
        self.set_draw_type(draw_type);
    }

    /// Draw `text` in the active colour
    ///
    /// Empty text is skipped.
    pub fn draw_text(&mut self, text: &str, rect: &Rectangle, alignment: TextAlignment) {
        if text.is_empty() {
            return;
        }
        self.engine.draw_text(&self.state, text, rect, alignment);
    }

    /// Draw `icon` within `rect`, if valid
    pub fn draw_icon(&mut self, icon: &dyn Icon, rect: &Rectangle) {
        if icon.is_valid() {
            self.engine.draw_icon(&self.state, icon, rect);
        }
    }

    /// Draw an optional icon at the left of `rect`, then `text` in the rest
    pub fn draw_text_and_icon(
        &mut self,
        text: &str,
        icon: Option<&dyn Icon>,
        rect: &Rectangle,
        alignment: TextAlignment,
        dpi_factor: f32,
    ) {
        let mut text_rect = *rect;

        if let Some(icon) = icon.filter(|icon| icon.is_valid()) {
            let size: i32 = (ICON_SIZE * dpi_factor).cast_nearest();
            let offset: i32 = (ICON_OFFSET * dpi_factor).cast_nearest();
            let xmin = rect.xmin + offset;
            let ymin = rect.ymin + (rect.height() - size) / 2;
            let icon_rect = Rectangle::from_size(xmin, size, ymin, size);
            self.engine.draw_icon(&self.state, icon, &icon_rect);
            text_rect.xmin = icon_rect.xmax;
        }

        self.draw_text(text, &text_rect, alignment);
    }
}

/// Tessellate a rounded box
///
/// Corners are visited clockwise (in `y`-down space) starting from the top
/// left. The radius is limited to half the smaller side.
pub fn roundbox_polygon(
    rect: &Rectangle,
    corners: Corners,
    radius: f32,
    draw_type: DrawType,
) -> Polygon {
    let outer = corner_loop(rect, corners, radius, 0.0);
    match draw_type {
        DrawType::Filled => Polygon::from(outer),
        DrawType::Line => {
            let mut verts = outer;
            if let Some(first) = verts.first().copied() {
                verts.push(first);
            }
            Polygon::from(verts)
        }
        DrawType::Outline => {
            let inner = corner_loop(rect, corners, radius, 1.0);
            debug_assert_eq!(outer.len(), inner.len());
            let mut polygon = Polygon::with_capacity(2 * outer.len() + 2);
            for (o, i) in outer.iter().zip(inner.iter()) {
                polygon.add_vertex(*o);
                polygon.add_vertex(*i);
            }
            if let (Some(o), Some(i)) = (outer.first(), inner.first()) {
                polygon.add_vertex(*o);
                polygon.add_vertex(*i);
            }
            polygon
        }
    }
}

fn corner_loop(rect: &Rectangle, corners: Corners, radius: f32, inset: f32) -> Vec<Point> {
    let xmin = f32::conv(rect.xmin) + inset;
    let xmax = f32::conv(rect.xmax) - inset;
    let ymin = f32::conv(rect.ymin) + inset;
    let ymax = f32::conv(rect.ymax) - inset;

    let max_radius = 0.5 * (xmax - xmin).min(ymax - ymin);
    let r = (radius - inset).min(max_radius).max(0.0);

    let mut verts = Vec::with_capacity(4 * CORNER_ARC.len());
    let mut corner = |flag: Corners, sharp: Point, arc: &dyn Fn(f32, f32) -> Point| {
        if corners.contains(flag) {
            verts.extend(CORNER_ARC.iter().map(|&(s, c)| arc(s, c)));
        } else {
            verts.push(sharp);
        }
    };

    corner(Corners::TOP_LEFT, Point::new(xmin, ymin), &|s, c| {
        Point::new(xmin + r * c, ymin + r * (1.0 - s))
    });
    corner(Corners::TOP_RIGHT, Point::new(xmax, ymin), &|s, c| {
        Point::new(xmax - r * (1.0 - s), ymin + r * c)
    });
    corner(Corners::BOTTOM_RIGHT, Point::new(xmax, ymax), &|s, c| {
        Point::new(xmax - r * c, ymax - r * (1.0 - s))
    });
    corner(Corners::BOTTOM_LEFT, Point::new(xmin, ymax), &|s, c| {
        Point::new(xmin + r * (1.0 - s), ymax - r * c)
    });

    verts
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::draw::{PaintCommand, RecordingEngine};

    #[test]
    fn roundbox_vertex_counts() {
        let rect = Rectangle::new(0, 100, 0, 20);
        let n = CORNER_ARC.len();

        let p = roundbox_polygon(&rect, Corners::ALL, 5.0, DrawType::Filled);
        assert_eq!(p.len(), 4 * n);
        let p = roundbox_polygon(&rect, Corners::empty(), 5.0, DrawType::Filled);
        assert_eq!(p.len(), 4);
        let p = roundbox_polygon(&rect, Corners::TOP_LEFT, 5.0, DrawType::Line);
        assert_eq!(p.len(), n + 3 + 1);
        let p = roundbox_polygon(&rect, Corners::ALL, 5.0, DrawType::Outline);
        assert_eq!(p.len(), 2 * 4 * n + 2);
    }

    #[test]
    fn roundbox_stays_in_rect() {
        let rect = Rectangle::new(10, 30, 5, 15);
        let p = roundbox_polygon(&rect, Corners::ALL, 50.0, DrawType::Filled);
        for v in p.vertices() {
            assert!(v.x >= 10.0 && v.x <= 30.0, "{v:?}");
            assert!(v.y >= 5.0 && v.y <= 15.0, "{v:?}");
        }
        assert_eq!(p[0], Point::new(10.0, 10.0));
    }

    #[test]
    fn gradient_colors() {
        let g = Gradient::new(Color::grey_byte(100), 20, -20);
        let bounds = Rectangle::new(0, 10, 0, 10);
        assert_eq!(g.color_at(Point::new(5.0, 0.0), &bounds), g.begin);
        assert_eq!(g.color_at(Point::new(5.0, 10.0), &bounds), g.end);

        let mut engine = RecordingEngine::new();
        let mut painter = Painter::new(&mut engine);
        painter.enable_gradient(g, bounds);
        painter.draw_roundbox(&bounds, Corners::empty(), 0.0);
        painter.set_active_color(Color::WHITE);
        painter.draw_roundbox(&bounds, Corners::empty(), 0.0);

        let cmds = engine.commands();
        match &cmds[0] {
            PaintCommand::Polygon { vertex_colors, .. } => {
                assert_eq!(vertex_colors.len(), 4);
                assert_eq!(vertex_colors[0], g.begin);
                assert_eq!(vertex_colors[2], g.end);
            }
            cmd => panic!("unexpected {cmd:?}"),
        }
        match &cmds[1] {
            PaintCommand::Polygon {
                vertex_colors,
                color,
                ..
            } => {
                assert!(vertex_colors.is_empty());
                assert_eq!(*color, Color::WHITE);
            }
            cmd => panic!("unexpected {cmd:?}"),
        }
    }

    #[test]
    fn empty_text_skipped() {
        let mut engine = RecordingEngine::new();
        let mut painter = Painter::new(&mut engine);
        let rect = Rectangle::new(0, 10, 0, 10);
        painter.draw_text("", &rect, TextAlignment::Left);
        painter.draw_text("x", &rect, TextAlignment::Left);
        assert_eq!(engine.commands().len(), 1);
    }
}
