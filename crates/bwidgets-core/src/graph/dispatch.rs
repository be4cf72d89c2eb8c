// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Event routing

use super::{NodeId, ScreenGraph};
use crate::event::{Event, MouseButton, MouseButtonEvent, MouseDragEvent, Response};
use crate::geom::Point;

#[derive(Copy, Clone, Debug, PartialEq)]
struct Press {
    id: NodeId,
    button: MouseButton,
    origin: Point,
}

/// Routes host input to widget handlers
///
/// The dispatcher tracks the hovered widget and the widget holding the
/// current mouse press. While a button is held, the pressed widget receives
/// all drag events and the matching release; hover changes are deferred until
/// the release.
///
/// Each method returns [`Response::Used`] if a handler swallowed the event.
#[derive(Clone, Debug, Default)]
pub struct EventDispatcher {
    hovered: Option<NodeId>,
    pressed: Option<Press>,
}

impl EventDispatcher {
    /// Construct
    pub fn new() -> Self {
        EventDispatcher::default()
    }

    /// The widget under the cursor, if any
    #[inline]
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// The widget holding the current press, if any
    #[inline]
    pub fn pressed(&self) -> Option<NodeId> {
        self.pressed.map(|press| press.id)
    }

    /// Handle cursor motion
    pub fn mouse_move(&mut self, graph: &mut ScreenGraph, location: Point) -> Response {
        if let Some(press) = self.pressed {
            let distance = location - press.origin;
            let mut event = MouseDragEvent::new(press.button, location, distance);
            graph.with_handler(press.id, |handler, widget| {
                handler.on_mouse_drag(widget, &mut event)
            });
            return Response::used_if(event.is_swallowed());
        }

        let target = graph.find_widget_at(location);
        self.set_hovered(graph, target)
    }

    /// Handle a button press
    pub fn mouse_press(
        &mut self,
        graph: &mut ScreenGraph,
        button: MouseButton,
        location: Point,
    ) -> Response {
        let Some(id) = graph.find_widget_at(location) else {
            return Response::Unused;
        };
        let mut response = self.set_hovered(graph, Some(id));

        let mut event = MouseButtonEvent::new(button, location);
        graph.with_handler(id, |handler, widget| {
            handler.on_mouse_press(widget, &mut event)
        });
        log::trace!("EventDispatcher: press {button:?} on {id:?}");
        if self.pressed.is_none() {
            self.pressed = Some(Press {
                id,
                button,
                origin: location,
            });
        }
        response = response | Response::used_if(event.is_swallowed());
        response
    }

    /// Handle a button release
    ///
    /// The release goes to the widget which received the matching press, or
    /// else to the widget under the cursor.
    pub fn mouse_release(
        &mut self,
        graph: &mut ScreenGraph,
        button: MouseButton,
        location: Point,
    ) -> Response {
        let target = match self.pressed {
            Some(press) if press.button == button => {
                self.pressed = None;
                Some(press.id)
            }
            _ => graph.find_widget_at(location),
        };

        let mut response = Response::Unused;
        if let Some(id) = target {
            let mut event = MouseButtonEvent::new(button, location);
            graph.with_handler(id, |handler, widget| {
                handler.on_mouse_release(widget, &mut event)
            });
            log::trace!("EventDispatcher: release {button:?} on {id:?}");
            response = Response::used_if(event.is_swallowed());
        }

        if self.pressed.is_none() {
            let hovered = graph.find_widget_at(location);
            response = response | self.set_hovered(graph, hovered);
        }
        response
    }

    /// Handle the cursor leaving the window
    pub fn mouse_leave_window(&mut self, graph: &mut ScreenGraph) -> Response {
        self.set_hovered(graph, None)
    }

    /// Forget nodes which were removed from `graph`
    pub fn sync(&mut self, graph: &ScreenGraph) {
        if self.hovered.is_some_and(|id| !graph.contains(id)) {
            self.hovered = None;
        }
        if self.pressed.is_some_and(|press| !graph.contains(press.id)) {
            self.pressed = None;
        }
    }

    fn set_hovered(&mut self, graph: &mut ScreenGraph, target: Option<NodeId>) -> Response {
        if target == self.hovered {
            return Response::Unused;
        }

        let mut swallowed = false;
        if let Some(old) = self.hovered.take() {
            let mut event = Event::new();
            graph.with_handler(old, |handler, widget| {
                handler.on_mouse_leave(widget, &mut event)
            });
            swallowed |= event.is_swallowed();
        }
        if let Some(new) = target {
            let mut event = Event::new();
            graph.with_handler(new, |handler, widget| {
                handler.on_mouse_enter(widget, &mut event)
            });
            swallowed |= event.is_swallowed();
        }
        log::trace!("EventDispatcher: hover {target:?}");
        self.hovered = target;
        Response::used_if(swallowed)
    }
}
