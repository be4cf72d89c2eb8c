// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Number slider widget

use crate::button::downcast_widget;
use bwidgets::prelude::*;
use std::fmt;
use std::num::ParseFloatError;
use std::rc::Rc;

/// Numeric entry by dragging or typing
///
/// The value is limited to `[min, max]` and displayed with `precision`
/// decimal places. A horizontal drag across the full widget width moves the
/// value across the full range, measured from the value at press time. A
/// click without drag starts text editing.
#[derive(Clone)]
pub struct NumberSlider {
    core: WidgetCore,
    text: String,
    pub base_style: WidgetBaseStyle,
    value: f64,
    min: f64,
    max: f64,
    precision: usize,
    press_value: f64,
    dragged: bool,
    is_text_editing: bool,
    on_change: Option<Rc<dyn Fn(f64)>>,
}

impl fmt::Debug for NumberSlider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberSlider")
            .field("core", &self.core)
            .field("text", &self.text)
            .field("value", &self.value)
            .field("range", &(self.min..=self.max))
            .field("precision", &self.precision)
            .field("is_text_editing", &self.is_text_editing)
            .finish_non_exhaustive()
    }
}

impl NumberSlider {
    /// Construct with a label and range
    ///
    /// The value starts at `min`. If `min > max` the bounds are swapped.
    /// A bound which is not finite is replaced by the other bound, or by
    /// zero when neither is finite.
    pub fn new(text: impl ToString, min: f64, max: f64) -> Self {
        let (min, max) = match (min.is_finite(), max.is_finite()) {
            (true, true) => (min, max),
            (true, false) => (min, min),
            (false, true) => (max, max),
            (false, false) => (0.0, 0.0),
        };
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        NumberSlider {
            core: WidgetCore::new("NumberSlider", None, None),
            text: text.to_string(),
            base_style: WidgetBaseStyle::default(),
            value: min,
            min,
            max,
            precision: 2,
            press_value: min,
            dragged: false,
            is_text_editing: false,
            on_change: None,
        }
    }

    /// Set the value (chain style)
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = self.clamp(value);
        self
    }

    /// Set the display precision (chain style)
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Set the change callback (chain style)
    ///
    /// `f` is called with the new value whenever the value changes through
    /// input.
    #[must_use]
    pub fn with_on_change(mut self, f: impl Fn(f64) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    /// Get the value
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Get the range
    #[inline]
    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Set the value, limited to the range
    ///
    /// Invokes the change callback. Returns true if the value changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        let value = self.clamp(value);
        if value == self.value {
            return false;
        }
        self.value = value;
        if let Some(f) = self.on_change.as_ref() {
            f(value);
        }
        true
    }

    fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    /// Position of the value within the range, in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 && span.is_finite() {
            ((self.value - self.min) / span).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// The value formatted with the display precision
    pub fn value_text(&self) -> String {
        format!("{:.*}", self.precision, self.value)
    }

    /// Whether text editing is active
    #[inline]
    pub fn is_text_editing(&self) -> bool {
        self.is_text_editing
    }

    /// Start text editing
    pub fn start_text_editing(&mut self) {
        self.is_text_editing = true;
        self.core.state = State::Sunken;
    }

    /// Stop text editing, discarding input
    pub fn end_text_editing(&mut self) {
        self.is_text_editing = false;
        self.core.state = State::Normal;
    }

    /// Stop text editing, parsing `text` as the new value
    ///
    /// On parse failure editing continues and the value is unchanged.
    pub fn commit_text(&mut self, text: &str) -> Result<(), ParseFloatError> {
        let value: f64 = text.trim().parse()?;
        self.set_value(value);
        self.end_text_editing();
        Ok(())
    }

    /// The rectangle of the value indicator
    pub fn indicator_rectangle(&self) -> Rectangle {
        let mut rect = self.core.rectangle.resized(-1);
        let width: f64 = rect.width().cast();
        let filled: i32 = (width * self.fraction()).cast_nearest();
        rect.xmax = rect.xmin + filled;
        rect
    }
}

impl Widget for NumberSlider {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::NumberSlider
    }

    fn draw(&self, style: &dyn Style, engine: &mut dyn PaintEngine) {
        let base = &self.base_style;
        let rect = self.core.rectangle;
        let gradient = Gradient::new(base.background_color, base.shade_top, base.shade_bottom);

        let mut painter = Painter::new(engine);
        painter.draw_roundbox_widget_base(base, style, &rect, gradient, base.corner_radius);

        if !self.is_text_editing {
            let indicator = self.indicator_rectangle();
            if !indicator.is_empty() {
                let corners = if self.fraction() < 1.0 {
                    base.roundbox_corners & Corners::LEFT
                } else {
                    base.roundbox_corners
                };
                let radius = base.corner_radius * style.dpi_factor() - 1.0;
                painter.set_draw_type(DrawType::Filled);
                painter.set_active_color(base.decoration_color);
                painter.draw_roundbox(&indicator, corners, radius);
            }
        }

        painter.set_content_mask(rect);
        painter.set_active_color(base.text_color);
        let value = self.value_text();
        if self.is_text_editing || self.text.is_empty() {
            painter.draw_text(&value, &rect, TextAlignment::Center);
        } else {
            painter.draw_text(&self.text, &rect, TextAlignment::Left);
            painter.draw_text(&value, &rect, TextAlignment::Right);
        }
    }

    fn register_properties(&mut self) {
        self.base_style
            .register_properties(&mut self.core.style_properties);
    }

    fn create_handler(&self, id: NodeId) -> Box<dyn EventHandler> {
        Box::new(NumberSliderHandler { id })
    }

    fn label(&self) -> Option<&str> {
        Some(&self.text)
    }

    fn base_style(&self) -> Option<&WidgetBaseStyle> {
        Some(&self.base_style)
    }

    fn base_style_mut(&mut self) -> Option<&mut WidgetBaseStyle> {
        Some(&mut self.base_style)
    }
}

/// Handler for [`NumberSlider`]
#[derive(Clone, Debug)]
pub struct NumberSliderHandler {
    id: NodeId,
}

impl EventHandler for NumberSliderHandler {
    fn widget(&self) -> NodeId {
        self.id
    }

    fn on_mouse_enter(&mut self, widget: &mut dyn Widget, _: &mut Event) {
        if widget.state() == State::Normal {
            widget.set_state(State::Highlighted);
        }
    }

    fn on_mouse_leave(&mut self, widget: &mut dyn Widget, _: &mut Event) {
        if widget.state() == State::Highlighted {
            widget.set_state(State::Normal);
        }
    }

    fn on_mouse_press(&mut self, widget: &mut dyn Widget, event: &mut MouseButtonEvent) {
        if event.button != MouseButton::Left {
            return;
        }
        if let Some(slider) = downcast_widget::<NumberSlider>(widget) {
            if !slider.is_text_editing {
                slider.press_value = slider.value;
                slider.dragged = false;
                slider.set_state(State::Sunken);
            }
            event.swallow();
        }
    }

    fn on_mouse_drag(&mut self, widget: &mut dyn Widget, event: &mut MouseDragEvent) {
        if event.button != MouseButton::Left {
            return;
        }
        let Some(slider) = downcast_widget::<NumberSlider>(widget) else {
            return;
        };
        let width = slider.rectangle().width();
        if slider.is_text_editing || slider.state() != State::Sunken || width <= 0 {
            return;
        }

        let delta = f64::conv(event.drag_distance.x) / f64::conv(width);
        slider.dragged = true;
        let value = slider.press_value + delta * (slider.max - slider.min);
        if !value.is_nan() {
            slider.set_value(value);
        }
        event.swallow();
    }

    fn on_mouse_release(&mut self, widget: &mut dyn Widget, event: &mut MouseButtonEvent) {
        if event.button != MouseButton::Left {
            return;
        }
        let Some(slider) = downcast_widget::<NumberSlider>(widget) else {
            return;
        };
        if slider.is_text_editing || slider.state() != State::Sunken {
            return;
        }

        if slider.dragged {
            slider.set_state(State::Normal);
        } else {
            slider.start_text_editing();
        }
        event.swallow();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bwidgets::draw::RecordingEngine;
    use bwidgets::theme::BlenderThemeStyle;
    use std::cell::Cell;

    fn left(x: f32) -> MouseButtonEvent {
        MouseButtonEvent::new(MouseButton::Left, Point::new(x, 5.0))
    }

    fn drag_to(handler: &mut dyn EventHandler, w: &mut NumberSlider, dx: f32) {
        let distance = Point::new(dx, 0.0);
        let mut event = MouseDragEvent::new(MouseButton::Left, Point::new(50.0 + dx, 5.0), distance);
        handler.on_mouse_drag(w, &mut event);
    }

    #[test]
    fn drag_from_baseline() {
        let last = Rc::new(Cell::new(f64::NAN));
        let sink = last.clone();
        let mut w = NumberSlider::new("Size", 0.0, 10.0)
            .with_value(4.0)
            .with_on_change(move |v| sink.set(v));
        w.set_rectangle(Rectangle::new(0, 200, 0, 20));
        let mut handler = w.create_handler(NodeId::default());

        handler.on_mouse_press(&mut w, &mut left(50.0));
        drag_to(handler.as_mut(), &mut w, 30.0);
        drag_to(handler.as_mut(), &mut w, -20.0);
        drag_to(handler.as_mut(), &mut w, 40.0);
        assert_eq!(w.value(), 6.0);
        assert_eq!(last.get(), 6.0);

        let mut event = left(90.0);
        handler.on_mouse_release(&mut w, &mut event);
        assert!(event.is_swallowed());
        assert_eq!(w.state(), State::Normal);
        assert!(!w.is_text_editing());

        // Dragging past the end clamps
        handler.on_mouse_press(&mut w, &mut left(50.0));
        drag_to(handler.as_mut(), &mut w, 1000.0);
        assert_eq!(w.value(), 10.0);
    }

    #[test]
    fn click_starts_editing() {
        let mut w = NumberSlider::new("Size", 0.0, 1.0).with_precision(1);
        w.set_rectangle(Rectangle::new(0, 100, 0, 20));
        let mut handler = w.create_handler(NodeId::default());

        handler.on_mouse_press(&mut w, &mut left(10.0));
        handler.on_mouse_release(&mut w, &mut left(10.0));
        assert!(w.is_text_editing());
        assert_eq!(w.state(), State::Sunken);

        // Drags are ignored while editing
        drag_to(handler.as_mut(), &mut w, 50.0);
        assert_eq!(w.value(), 0.0);

        assert!(w.commit_text("x").is_err());
        assert!(w.is_text_editing());
        assert!(w.commit_text(" 0.75 ").is_ok());
        assert!(!w.is_text_editing());
        assert_eq!(w.value(), 0.75);
        assert_eq!(w.value_text(), "0.8");
    }

    #[test]
    fn range_and_indicator() {
        let mut w = NumberSlider::new("", 5.0, -5.0).with_value(20.0);
        assert_eq!(w.range(), (-5.0, 5.0));
        assert_eq!(w.value(), 5.0);
        assert!(!w.set_value(f64::INFINITY));
        assert!(w.set_value(f64::NAN));
        assert_eq!(w.value(), -5.0);

        w.set_value(0.0);
        w.set_rectangle(Rectangle::new(0, 102, 0, 20));
        assert_eq!(w.indicator_rectangle(), Rectangle::new(1, 51, 1, 19));

        let mut engine = RecordingEngine::new();
        w.draw(&BlenderThemeStyle::default(), &mut engine);
        assert_eq!(engine.polygon_count(), 3);
        assert_eq!(engine.texts().collect::<Vec<_>>(), ["0.00"]);
    }

    #[test]
    fn non_finite_range() {
        let mut w = NumberSlider::new("x", f64::NAN, 1.0);
        assert_eq!(w.range(), (1.0, 1.0));
        w.set_value(0.5);
        assert_eq!(w.value(), 1.0);

        let mut w = NumberSlider::new("x", -2.0, f64::INFINITY);
        assert_eq!(w.range(), (-2.0, -2.0));
        w.set_value(f64::NEG_INFINITY);
        assert_eq!(w.value(), -2.0);

        let mut w = NumberSlider::new("x", f64::NEG_INFINITY, f64::NAN);
        assert_eq!(w.range(), (0.0, 0.0));
        assert!(!w.set_value(3.0));
        assert_eq!(w.value(), 0.0);

        w.set_rectangle(Rectangle::new(0, 102, 0, 20));
        assert_eq!(w.indicator_rectangle(), Rectangle::new(1, 1, 1, 19));

        let mut w = NumberSlider::new("x", f64::MIN, f64::MAX);
        w.set_value(0.0);
        w.set_rectangle(Rectangle::new(0, 102, 0, 20));
        assert_eq!(w.fraction(), 0.0);
        assert_eq!(w.indicator_rectangle(), Rectangle::new(1, 1, 1, 19));
    }
}
