// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Radio button widget

use crate::button::{downcast_widget, highlight, impl_button_widget, unhighlight};
use crate::AbstractButton;
use bwidgets::prelude::*;

/// A button which stays pressed once selected
///
/// Pressing an unselected radio button selects it (`Sunken`) and invokes the
/// apply callback once. Pressing a selected one does nothing. Deselecting
/// other buttons of a group is left to the apply callback or host.
#[derive(Clone, Debug)]
pub struct RadioButton {
    pub button: AbstractButton,
}

impl RadioButton {
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
        RadioButton {
            button: AbstractButton::new(text, "RadioButton", width_hint, height_hint),
        }
    }

    /// Set the apply callback (chain style)
    #[must_use]
    pub fn with_apply(mut self, f: impl Fn() + 'static) -> Self {
        self.button.set_apply(f);
        self
    }

    /// Whether this button is selected
    #[inline]
    pub fn is_selected(&self) -> bool {
        self.button.core.state == State::Sunken
    }

    /// Select or deselect without invoking the apply callback
    pub fn set_selected(&mut self, selected: bool) {
        self.button.core.state = if selected {
            State::Sunken
        } else {
            State::Normal
        };
    }
}

impl_button_widget! {
    RadioButton, WidgetKind::RadioButton;

    fn draw(&self, style: &dyn Style, engine: &mut dyn PaintEngine) {
        self.button.draw(style, engine, None);
    }

    fn create_handler(&self, id: NodeId) -> Box<dyn EventHandler> {
        Box::new(RadioButtonHandler { id })
    }

    fn can_align(&self) -> bool {
        true
    }
}

/// Handler for [`RadioButton`]
#[derive(Clone, Debug)]
pub struct RadioButtonHandler {
    id: NodeId,
}

impl EventHandler for RadioButtonHandler {
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
        if let Some(radio) = downcast_widget::<RadioButton>(widget) {
            if !radio.is_selected() {
                radio.set_selected(true);
                radio.button.apply();
            }
            event.swallow();
        }
    }

    fn on_mouse_release(&mut self, _: &mut dyn Widget, event: &mut MouseButtonEvent) {
        if event.button == MouseButton::Left {
            event.swallow();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn select_once() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut w = RadioButton::new("A").with_apply(move || counter.set(counter.get() + 1));
        let mut handler = w.create_handler(NodeId::default());
        let left = || MouseButtonEvent::new(MouseButton::Left, Point::default());

        handler.on_mouse_enter(&mut w, &mut Event::new());
        assert_eq!(w.state(), State::Highlighted);

        for _ in 0..2 {
            let mut event = left();
            handler.on_mouse_press(&mut w, &mut event);
            assert!(event.is_swallowed());
            let mut event = left();
            handler.on_mouse_release(&mut w, &mut event);
            assert!(event.is_swallowed());
            assert!(w.is_selected());
        }
        assert_eq!(count.get(), 1);

        handler.on_mouse_leave(&mut w, &mut Event::new());
        assert!(w.is_selected());
        assert_eq!(w.kind(), WidgetKind::RadioButton);
    }
}
