// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! bWidgets core
//!
//! This crate provides the engine of the toolkit: geometry primitives, the
//! [`Widget`] trait and its interaction state, style properties and style
//! resolution ([`theme`]), the drawing interface ([`draw`]) and the screen
//! graph ([`graph`]) which owns widgets, layouts and event handlers.
//!
//! Concrete widgets live in the `bwidgets-widgets` crate.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub extern crate easy_cast as cast;

// internal modules:
mod core;

// public implementations:
pub mod config;
pub mod draw;
pub mod event;
pub mod geom;
pub mod graph;
pub mod layout;
pub mod prelude;
pub mod theme;

// export most important members directly for convenience and less redundancy:
pub use crate::core::*;
