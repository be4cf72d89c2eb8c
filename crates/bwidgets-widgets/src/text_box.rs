// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text box widget

use crate::button::downcast_widget;
use bwidgets::prelude::*;

/// A single-line text entry
///
/// This widget tracks editing and selection state only. Text layout and
/// caret placement are left to the paint engine and host.
#[derive(Clone, Debug)]
pub struct TextBox {
    core: WidgetCore,
    text: String,
    pub base_style: WidgetBaseStyle,
    /// Selected area, drawn while editing
    pub selection_rectangle: Rectangle,
    is_text_editing: bool,
    is_dragging: bool,
}

impl TextBox {
    /// Construct with size hints
    pub fn new(width_hint: Option<u32>, height_hint: Option<u32>) -> Self {
        TextBox {
            core: WidgetCore::new("TextBox", width_hint, height_hint),
            text: String::new(),
            base_style: WidgetBaseStyle::default(),
            selection_rectangle: Rectangle::ZERO,
            is_text_editing: false,
            is_dragging: false,
        }
    }

    /// Set text (chain style)
    #[must_use]
    pub fn with_text(mut self, text: impl ToString) -> Self {
        self.text = text.to_string();
        self
    }

    /// Get text
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set text
    pub fn set_text(&mut self, text: impl ToString) {
        self.text = text.to_string();
    }

    /// Whether text editing is active
    #[inline]
    pub fn is_text_editing(&self) -> bool {
        self.is_text_editing
    }

    /// Whether a selection drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Start editing, selecting all text
    pub fn start_text_editing(&mut self) {
        self.is_text_editing = true;
        self.core.state = State::Sunken;
        self.selection_rectangle = self.core.rectangle.resized(-1);
    }

    /// Stop editing
    pub fn end_text_editing(&mut self) {
        self.is_text_editing = false;
        self.is_dragging = false;
        self.core.state = State::Normal;
        self.selection_rectangle = Rectangle::ZERO;
    }

    /// Select the horizontal span between `x0` and `x1`
    ///
    /// The span is limited to the widget rectangle.
    pub fn select_span(&mut self, x0: f32, x1: f32) {
        let rect = self.core.rectangle.resized(-1);
        let clamp = |x: f32| -> i32 {
            let x: i32 = x.cast_nearest();
            x.clamp(rect.xmin, rect.xmax)
        };
        let (a, b) = (clamp(x0), clamp(x1));
        self.selection_rectangle = Rectangle::new(a.min(b), a.max(b), rect.ymin, rect.ymax);
    }
}

impl Widget for TextBox {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::TextBox
    }

    fn draw(&self, style: &dyn Style, engine: &mut dyn PaintEngine) {
        let base = &self.base_style;
        let rect = self.core.rectangle;
        let gradient = Gradient::new(base.background_color, base.shade_top, base.shade_bottom);

        let mut painter = Painter::new(engine);
        painter.draw_roundbox_widget_base(base, style, &rect, gradient, base.corner_radius);

        if self.is_text_editing && !self.selection_rectangle.is_empty() {
            painter.set_draw_type(DrawType::Filled);
            painter.set_active_color(base.decoration_color);
            painter.draw_roundbox(&self.selection_rectangle, Corners::empty(), 0.0);
        }

        painter.set_content_mask(rect);
        painter.set_active_color(base.text_color);
        painter.draw_text(&self.text, &rect, base.text_alignment);
    }

    fn register_properties(&mut self) {
        self.base_style
            .register_properties(&mut self.core.style_properties);
    }

    fn create_handler(&self, id: NodeId) -> Box<dyn EventHandler> {
        Box::new(TextBoxHandler { id })
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

/// Handler for [`TextBox`]
///
/// A left press starts editing; dragging then selects. Hover highlighting is
/// suspended while editing.
#[derive(Clone, Debug)]
pub struct TextBoxHandler {
    id: NodeId,
}

impl EventHandler for TextBoxHandler {
    fn widget(&self) -> NodeId {
        self.id
    }

    fn on_mouse_enter(&mut self, widget: &mut dyn Widget, _: &mut Event) {
        if let Some(text_box) = downcast_widget::<TextBox>(widget) {
            if !text_box.is_text_editing {
                text_box.set_state(State::Highlighted);
            }
        }
    }

    fn on_mouse_leave(&mut self, widget: &mut dyn Widget, _: &mut Event) {
        if let Some(text_box) = downcast_widget::<TextBox>(widget) {
            if !text_box.is_text_editing {
                text_box.set_state(State::Normal);
            }
        }
    }

    fn on_mouse_press(&mut self, widget: &mut dyn Widget, event: &mut MouseButtonEvent) {
        if event.button != MouseButton::Left {
            return;
        }
        if let Some(text_box) = downcast_widget::<TextBox>(widget) {
            if !text_box.is_text_editing {
                text_box.start_text_editing();
            }
            text_box.is_dragging = true;
            event.swallow();
        }
    }

    fn on_mouse_release(&mut self, widget: &mut dyn Widget, event: &mut MouseButtonEvent) {
        if event.button != MouseButton::Left {
            return;
        }
        if let Some(text_box) = downcast_widget::<TextBox>(widget) {
            if text_box.is_dragging {
                text_box.is_dragging = false;
                event.swallow();
            }
        }
    }

    fn on_mouse_drag(&mut self, widget: &mut dyn Widget, event: &mut MouseDragEvent) {
        if event.button != MouseButton::Left {
            return;
        }
        if let Some(text_box) = downcast_widget::<TextBox>(widget) {
            if text_box.is_dragging {
                let start = event.location.x - event.drag_distance.x;
                text_box.select_span(start, event.location.x);
                event.swallow();
            }
        }
    }
}
