// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Event handler trait

use super::{Event, MouseButtonEvent, MouseDragEvent};
use crate::Widget;
use crate::graph::NodeId;
use std::fmt::Debug;

/// Per-widget input controller
///
/// A handler is created by [`Widget::create_handler`] right after its widget
/// is inserted into a screen graph and lives exactly as long as that widget.
/// It does not own the widget: the graph passes the paired widget to each
/// method.
///
/// All methods default to doing nothing, leaving the event unused.
pub trait EventHandler: Debug {
    /// The node holding the widget this handler drives
    fn widget(&self) -> NodeId;

    /// The cursor entered the widget
    fn on_mouse_enter(&mut self, widget: &mut dyn Widget, event: &mut Event) {
        let _ = (widget, event);
    }

    /// The cursor left the widget
    fn on_mouse_leave(&mut self, widget: &mut dyn Widget, event: &mut Event) {
        let _ = (widget, event);
    }

    /// A mouse button was pressed over the widget
    fn on_mouse_press(&mut self, widget: &mut dyn Widget, event: &mut MouseButtonEvent) {
        let _ = (widget, event);
    }

    /// A mouse button pressed over the widget was released
    fn on_mouse_release(&mut self, widget: &mut dyn Widget, event: &mut MouseButtonEvent) {
        let _ = (widget, event);
    }

    /// The cursor moved while a button pressed over the widget is held
    fn on_mouse_drag(&mut self, widget: &mut dyn Widget, event: &mut MouseDragEvent) {
        let _ = (widget, event);
    }
}
