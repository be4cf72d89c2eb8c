// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Immediate-mode embedding
//!
//! Hosts with their own button model can draw through this toolkit without a
//! screen graph: describe a button with [`ButtonDesc`], then call
//! [`draw_button`] which converts it to a widget, resolves its style, draws
//! it and drops it.

use crate::{Label, PushButton};
use bwidgets::prelude::*;
use std::rc::Rc;

/// Host corner flag: top left
pub const CNR_TOP_LEFT: i32 = 1 << 0;
/// Host corner flag: top right
pub const CNR_TOP_RIGHT: i32 = 1 << 1;
/// Host corner flag: bottom right
pub const CNR_BOTTOM_RIGHT: i32 = 1 << 2;
/// Host corner flag: bottom left
pub const CNR_BOTTOM_LEFT: i32 = 1 << 3;
/// Host corner flags: all corners
pub const CNR_ALL: i32 = CNR_TOP_LEFT | CNR_TOP_RIGHT | CNR_BOTTOM_RIGHT | CNR_BOTTOM_LEFT;

/// Supported host button types
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ButtonType {
    /// Converted to a [`Label`]
    Label,
    /// Converted to a [`PushButton`]
    Button,
}

/// Description of a host button
#[derive(Clone, Debug)]
pub struct ButtonDesc {
    pub button_type: ButtonType,
    pub text: String,
    pub rect: Rectangle,
    /// The button is pressed
    pub select: bool,
    /// The button is under the cursor
    pub active: bool,
    /// The button's text is being edited
    pub editing: bool,
    /// Host corner flags (`CNR_*`)
    pub roundbox: i32,
    /// Request left-aligned text
    pub text_left: bool,
    /// Request right-aligned text
    pub text_right: bool,
    pub icon: Option<Rc<dyn Icon>>,
}

impl ButtonDesc {
    /// Construct with all flags clear and all corners rounded
    pub fn new(button_type: ButtonType, text: impl ToString, rect: Rectangle) -> Self {
        ButtonDesc {
            button_type,
            text: text.to_string(),
            rect,
            select: false,
            active: false,
            editing: false,
            roundbox: CNR_ALL,
            text_left: false,
            text_right: false,
            icon: None,
        }
    }

    /// Text alignment requested by the host
    ///
    /// Editing and explicit left alignment take priority over right
    /// alignment; the default is centred.
    pub fn text_alignment(&self) -> TextAlignment {
        if self.editing || self.text_left {
            TextAlignment::Left
        } else if self.text_right {
            TextAlignment::Right
        } else {
            TextAlignment::Center
        }
    }
}

/// Convert host corner flags
///
/// Unknown bits are ignored.
pub fn convert_roundbox(roundbox: i32) -> Corners {
    let mut corners = Corners::empty();
    for (flag, corner) in [
        (CNR_TOP_LEFT, Corners::TOP_LEFT),
        (CNR_TOP_RIGHT, Corners::TOP_RIGHT),
        (CNR_BOTTOM_RIGHT, Corners::BOTTOM_RIGHT),
        (CNR_BOTTOM_LEFT, Corners::BOTTOM_LEFT),
    ] {
        if roundbox & flag != 0 {
            corners |= corner;
        }
    }
    corners
}

/// Convert host button flags to a widget state
///
/// `select` takes priority over `active`.
pub fn convert_state(select: bool, active: bool) -> State {
    if select {
        State::Sunken
    } else if active {
        State::Highlighted
    } else {
        State::Normal
    }
}

/// Construct an initialized widget from a host button
pub fn widget_from_desc(desc: &ButtonDesc) -> Box<dyn Widget> {
    let mut widget: Box<dyn Widget> = match desc.button_type {
        ButtonType::Label => {
            let mut label = Label::new(&desc.text);
            label.set_icon(desc.icon.clone());
            Box::new(label)
        }
        ButtonType::Button => {
            let mut button = PushButton::new(&desc.text);
            button.set_icon(desc.icon.clone());
            button.button.rounded_corners = convert_roundbox(desc.roundbox);
            button.button.core.state = convert_state(desc.select, desc.active);
            button.button.base_style.text_alignment = desc.text_alignment();
            Box::new(button)
        }
    };
    widget.initialize();
    widget.set_rectangle(desc.rect);
    widget
}

/// Convert, style and draw a host button
pub fn draw_button(desc: &ButtonDesc, style: &dyn Style, engine: &mut dyn PaintEngine) {
    let mut widget = widget_from_desc(desc);
    style.set_widget_style(widget.as_mut());
    widget.draw(style, engine);
}
