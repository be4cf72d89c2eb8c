// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! bWidgets core prelude
//!
//! It is recommended to use `bwidgets::prelude` instead, which is an extension
//! of this crate's prelude.

#[doc(no_inline)] pub use crate::cast::traits::*;
#[doc(no_inline)]
pub use crate::draw::{Color, DrawType, Gradient, Icon, PaintEngine, Painter, TextAlignment};
#[doc(no_inline)]
pub use crate::event::{Event, EventHandler, MouseButton, MouseButtonEvent, MouseDragEvent};
#[doc(no_inline)] pub use crate::event::Response;
#[doc(no_inline)] pub use crate::geom::{Point, Polygon, Rectangle};
#[doc(no_inline)]
pub use crate::graph::{Builder, EventDispatcher, LayoutId, NodeId, ScreenGraph};
#[doc(no_inline)] pub use crate::layout::{ColumnLayout, Layout, RowLayout};
#[doc(no_inline)]
pub use crate::theme::{Corners, PropertyValue, Style, StyleProperties, WidgetBaseStyle};
#[doc(no_inline)]
pub use crate::{ContainerWidget, State, Widget, WidgetCore, WidgetKind};
