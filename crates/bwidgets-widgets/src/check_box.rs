// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Check box widget

use crate::button::{downcast_widget, highlight, impl_button_widget, unhighlight};
use crate::AbstractButton;
use bwidgets::prelude::*;

/// A check box with a text label
///
/// The box is a square carved from the left of the widget rectangle; the
/// label takes the rest. The box is checked while the state is `Sunken`.
///
/// Unlike other buttons, a press toggles the check state immediately and
/// invokes the apply callback; the release changes nothing.
#[derive(Clone, Debug)]
pub struct CheckBox {
    pub button: AbstractButton,
}

impl CheckBox {
    /// Construct with default size hints
    #[inline]
    pub fn new(text: impl ToString) -> Self {
        Self::with_size_hints(text, None, None)
    }

    /// Construct with size hints
    pub fn with_size_hints(
        text: impl ToString,
        width_hint: Option<u32>,
        height_hint: Option<u32>,
    ) -> Self {
        CheckBox {
            button: AbstractButton::new(text, "Checkbox", width_hint, height_hint),
        }
    }

    /// Set the apply callback (chain style)
    #[must_use]
    pub fn with_apply(mut self, f: impl Fn() + 'static) -> Self {
        self.button.set_apply(f);
        self
    }

    /// Whether the box is checked
    #[inline]
    pub fn is_checked(&self) -> bool {
        self.button.core.state == State::Sunken
    }

    /// Set the check state without invoking the apply callback
    pub fn set_checked(&mut self, checked: bool) {
        self.button.core.state = if checked {
            State::Sunken
        } else {
            State::Normal
        };
    }

    /// The rectangle of the box
    ///
    /// A square with the height of the widget, inset by `1 + height / 8`.
    pub fn checkbox_rectangle(&self) -> Rectangle {
        let mut rect = self.button.core.rectangle;
        let delta = 1 + rect.height() / 8;
        rect.xmax = rect.xmin + rect.height();
        rect.resize(-delta);
        rect
    }

    /// The rectangle of the label, given the box rectangle
    pub fn text_rectangle(&self, checkbox_rect: &Rectangle) -> Rectangle {
        let mut rect = self.button.core.rectangle;
        rect.xmin = checkbox_rect.xmax - 1;
        rect
    }
}

impl_button_widget! {
    CheckBox, WidgetKind::Checkbox;

    fn draw(&self, style: &dyn Style, engine: &mut dyn PaintEngine) {
        let base = &self.button.base_style;
        let box_rect = self.checkbox_rectangle();
        let text_rect = self.text_rectangle(&box_rect);
        let gradient = Gradient::new(base.background_color, base.shade_top, base.shade_bottom);

        let mut painter = Painter::new(engine);
        painter.draw_roundbox_widget_base(base, style, &box_rect, gradient, base.corner_radius);

        if self.is_checked() {
            painter.set_draw_type(DrawType::Outline);
            painter.set_active_color(base.decoration_color);
            painter.draw_check_mark(&box_rect);
        }

        painter.set_content_mask(text_rect);
        painter.set_active_color(base.text_color);
        painter.draw_text(&self.button.text, &text_rect, base.text_alignment);
    }

    fn create_handler(&self, id: NodeId) -> Box<dyn EventHandler> {
        Box::new(CheckBoxHandler { id })
    }
}

/// Handler for [`CheckBox`]
#[derive(Clone, Debug)]
pub struct CheckBoxHandler {
    id: NodeId,
}

impl EventHandler for CheckBoxHandler {
    fn widget(&self) -> NodeId {
        self.id
    }

    fn on_mouse_enter(&mut self, widget: &mut dyn Widget, _: &mut Event) {
        highlight(widget);
    }

    fn on_mouse_leave(&mut self, widget: &mut dyn Widget, _: &mut Event) {
        unhighlight(widget);
    }

    fn on_mouse_press(&mut self, widget: &mut dyn Widget, event: &mut MouseButtonEvent) {
        if event.button != MouseButton::Left {
            return;
        }
        let Some(check) = downcast_widget::<CheckBox>(widget) else {
            return;
        };

        let state = match check.state() {
            State::Sunken => State::Highlighted,
            _ => State::Sunken,
        };
        check.set_state(state);
        check.button.apply();
        event.swallow();
    }

    fn on_mouse_release(&mut self, _: &mut dyn Widget, event: &mut MouseButtonEvent) {
        event.swallow();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bwidgets::draw::{PaintCommand, RecordingEngine};
    use bwidgets::theme::BlenderThemeStyle;
    use std::cell::Cell;
    use std::rc::Rc;

    fn left() -> MouseButtonEvent {
        MouseButtonEvent::new(MouseButton::Left, Point::default())
    }

    #[test]
    fn press_toggles_and_applies() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut w = CheckBox::new("Enable").with_apply(move || counter.set(counter.get() + 1));
        let mut handler = w.create_handler(NodeId::default());
        assert_eq!(w.state(), State::Normal);

        let mut event = left();
        handler.on_mouse_press(&mut w, &mut event);
        assert_eq!(w.state(), State::Sunken);
        assert!(w.is_checked());
        assert!(event.is_swallowed());
        assert_eq!(count.get(), 1);

        let mut event = left();
        handler.on_mouse_release(&mut w, &mut event);
        assert_eq!(w.state(), State::Sunken);
        assert!(event.is_swallowed());

        let mut event = left();
        handler.on_mouse_press(&mut w, &mut event);
        assert_eq!(w.state(), State::Highlighted);
        assert_eq!(count.get(), 2);

        handler.on_mouse_release(&mut w, &mut left());
        assert_eq!(w.state(), State::Highlighted);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn leave_keeps_checked() {
        let mut w = CheckBox::new("Enable");
        let mut handler = w.create_handler(NodeId::default());
        w.set_checked(true);
        handler.on_mouse_leave(&mut w, &mut Event::new());
        assert!(w.is_checked());
    }

    #[test]
    fn sub_rectangles() {
        let mut w = CheckBox::new("Enable");
        w.set_rectangle(Rectangle::new(10, 110, 0, 16));
        let box_rect = w.checkbox_rectangle();
        assert_eq!(box_rect, Rectangle::new(13, 23, 3, 13));
        assert_eq!(w.text_rectangle(&box_rect), Rectangle::new(22, 110, 0, 16));
    }

    #[test]
    fn check_mark_only_when_checked() {
        let mut w = CheckBox::new("Enable");
        w.set_rectangle(Rectangle::new(0, 100, 0, 20));
        let style = BlenderThemeStyle::default();

        let mut engine = RecordingEngine::new();
        w.draw(&style, &mut engine);
        let unchecked = engine.polygon_count();

        w.set_checked(true);
        let mut engine = RecordingEngine::new();
        w.draw(&style, &mut engine);
        assert_eq!(engine.polygon_count(), unchecked + 1);
        assert!(engine.commands().iter().any(|c| matches!(
            c,
            PaintCommand::Polygon { vertices, .. } if vertices.len() == 6
        )));
        assert_eq!(engine.texts().collect::<Vec<_>>(), ["Enable"]);
    }
}
