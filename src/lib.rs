// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! bWidgets
//!
//! A retained-mode widget toolkit: widgets with per-widget interaction state,
//! themeable style resolution, a layout engine and a screen graph owning
//! widgets and their event handlers.
//!
//! This, the main crate, is merely a wrapper over other crates:
//!
//! -   [`bwidgets_core`] is the core of the library
//! -   [`bwidgets_widgets`] provides the widgets
//!
//! All items from [`bwidgets_core`] are directly re-exported from this crate
//! (e.g. [`bwidgets::geom::Rectangle`](crate::geom::Rectangle)); the widget
//! library is re-exported as [`bwidgets::widgets`](crate::widgets).
//!
//! The [easy-cast](https://docs.rs/easy-cast/0.5/easy_cast) library is
//! re-exported as `bwidgets::cast`.
//!
//! Rendering is left to the host: implement
//! [`PaintEngine`](crate::draw::PaintEngine) (or use the
//! [`RecordingEngine`](crate::draw::RecordingEngine)), build a
//! [`ScreenGraph`](crate::graph::ScreenGraph) with a
//! [`Builder`](crate::graph::Builder), then each frame run the layout and
//! draw passes and feed input through an
//! [`EventDispatcher`](crate::graph::EventDispatcher).

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

// public implementations:
pub mod prelude;

pub use bwidgets_core::*;

pub extern crate bwidgets_widgets as widgets;
