// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Event handling
//!
//! Input reaches widgets through [`EventHandler`]s, one per widget, created by
//! the screen graph when the widget is inserted. Handlers translate mouse
//! events into [`State`](crate::State) transitions and may invoke a widget's
//! apply callback.
//!
//! A handler marks an event as used by *swallowing* it; the
//! [`EventDispatcher`](crate::graph::EventDispatcher) reports this as
//! [`Response::Used`].

mod events;
mod handler;
mod response;

pub use events::{Event, MouseButton, MouseButtonEvent, MouseDragEvent};
pub use handler::EventHandler;
pub use response::Response;
