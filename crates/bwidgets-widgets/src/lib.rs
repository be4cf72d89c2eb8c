// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! bWidgets widget library
//!
//! ## Controls
//!
//! -   [`PushButton`]: a button with text and optional icon
//! -   [`CheckBox`]: a checkable box with a label
//! -   [`RadioButton`]: a button which stays pressed once selected
//! -   [`ScrollBar`]: a scroll bar with a draggable thumb
//! -   [`NumberSlider`]: numeric entry by dragging or typing
//! -   [`TextBox`]: a single-line text entry
//!
//! ## Displays
//!
//! -   [`Label`]: static text with optional icon
//!
//! ## Containers
//!
//! -   [`Panel`]: a titled, collapsible container
//!
//! ## Components
//!
//! -   [`AbstractButton`]: data and behaviour shared by button widgets
//! -   [`ButtonHandler`]: the default button event handler
//!
//! ## Sub-modules
//!
//! -   [`host`] converts immediate-mode button descriptions from a host
//!     application into widgets and draws them

mod button;
mod check_box;
mod label;
mod number_slider;
mod panel;
mod push_button;
mod radio_button;
mod scroll_bar;
mod text_box;

pub mod host;

pub use button::{AbstractButton, ButtonHandler, ButtonWidget};
pub use check_box::{CheckBox, CheckBoxHandler};
pub use label::Label;
pub use number_slider::{NumberSlider, NumberSliderHandler};
pub use panel::{Panel, PanelHandler};
pub use push_button::PushButton;
pub use radio_button::{RadioButton, RadioButtonHandler};
pub use scroll_bar::{ScrollBar, ScrollBarHandler};
pub use text_box::{TextBox, TextBoxHandler};
