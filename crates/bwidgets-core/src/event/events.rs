// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Event types

use crate::geom::Point;

/// Mouse buttons
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// An event without payload (mouse enter and leave)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Event {
    swallowed: bool,
}

/// A mouse button press or release
#[derive(Clone, Debug, PartialEq)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    /// Cursor position in window coordinates
    pub location: Point,
    swallowed: bool,
}

/// Mouse movement while a button is held
#[derive(Clone, Debug, PartialEq)]
pub struct MouseDragEvent {
    pub button: MouseButton,
    /// Cursor position in window coordinates
    pub location: Point,
    /// Offset from the location of the press which started this drag
    pub drag_distance: Point,
    swallowed: bool,
}

macro_rules! impl_swallow {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                /// Mark the event as used
                ///
                /// A swallowed event is not passed on to other handlers.
                #[inline]
                pub fn swallow(&mut self) {
                    self.swallowed = true;
                }

                /// Whether the event was used
                #[inline]
                pub fn is_swallowed(&self) -> bool {
                    self.swallowed
                }
            }
        )*
    };
}

impl_swallow!(Event, MouseButtonEvent, MouseDragEvent);

impl Event {
    /// Construct
    #[inline]
    pub fn new() -> Self {
        Event::default()
    }
}

impl MouseButtonEvent {
    /// Construct
    #[inline]
    pub fn new(button: MouseButton, location: Point) -> Self {
        MouseButtonEvent {
            button,
            location,
            swallowed: false,
        }
    }
}

impl MouseDragEvent {
    /// Construct
    #[inline]
    pub fn new(button: MouseButton, location: Point, drag_distance: Point) -> Self {
        MouseDragEvent {
            button,
            location,
            drag_distance,
            swallowed: false,
        }
    }
}
