// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Widget data types

use crate::geom::Rectangle;
use crate::theme::StyleProperties;
use smol_str::SmolStr;

/// Width and height hint used when a widget is constructed without one
pub const DEFAULT_WIDGET_SIZE_HINT: u32 = 20;

/// Interaction state of a widget
///
/// Handlers drive the transitions; styles read the state to pick colours.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum State {
    #[default]
    Normal,
    /// The mouse is over the widget
    Highlighted,
    /// Pressed, or for toggles, checked
    Sunken,
}

/// Tag identifying the concrete type of a widget
///
/// Styles dispatch on this tag. The order of checks made by a style is
/// significant: see [`WidgetKind::is_button`] and [`WidgetKind::is_text_box`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Checkbox,
    Label,
    NumberSlider,
    Panel,
    PushButton,
    RadioButton,
    ScrollBar,
    TextBox,
    /// A widget type unknown to the toolkit
    ///
    /// Styles do not resolve a base style for these.
    #[default]
    Custom,
}

impl WidgetKind {
    /// True for widgets built on the abstract button
    pub fn is_button(self) -> bool {
        matches!(
            self,
            WidgetKind::Checkbox
                | WidgetKind::PushButton
                | WidgetKind::RadioButton
                | WidgetKind::ScrollBar
        )
    }

    /// True for widgets built on the text box
    pub fn is_text_box(self) -> bool {
        matches!(self, WidgetKind::TextBox | WidgetKind::NumberSlider)
    }
}

/// Common widget data
///
/// All widgets should embed a `core: WidgetCore` field and return it from
/// [`Widget::core`](crate::Widget::core).
#[derive(Clone, Debug)]
pub struct WidgetCore {
    /// A type name, used for style selectors and diagnostics
    pub identifier: SmolStr,
    /// The area assigned by layout
    pub rectangle: Rectangle,
    pub state: State,
    /// Preferred width in unscaled pixels
    pub width_hint: u32,
    /// Preferred height in unscaled pixels
    pub height_hint: u32,
    /// Style properties registered by the widget
    pub style_properties: StyleProperties,
    pub(crate) initialized: bool,
}

impl WidgetCore {
    /// Construct
    ///
    /// Missing size hints default to [`DEFAULT_WIDGET_SIZE_HINT`].
    pub fn new(identifier: &str, width_hint: Option<u32>, height_hint: Option<u32>) -> Self {
        WidgetCore {
            identifier: SmolStr::new(identifier),
            rectangle: Rectangle::ZERO,
            state: State::Normal,
            width_hint: width_hint.unwrap_or(DEFAULT_WIDGET_SIZE_HINT),
            height_hint: height_hint.unwrap_or(DEFAULT_WIDGET_SIZE_HINT),
            style_properties: StyleProperties::default(),
            initialized: false,
        }
    }

    /// Whether [`Widget::initialize`](crate::Widget::initialize) ran
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
