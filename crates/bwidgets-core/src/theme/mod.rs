// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Styles and style resolution
//!
//! Each frame, a [`Style`] resolves every visible widget to concrete paint
//! parameters before the widget draws:
//!
//! 1.  the host's polish hook (if any) adjusts the widget,
//! 2.  all registered [`StyleProperties`] are reset to their defaults,
//! 3.  the widget's [`WidgetBaseStyle`] is computed from its kind and state.
//!
//! Two styles are provided: [`StyleCss`] (driven by a [`StyleSheet`]) and
//! [`BlenderThemeStyle`] (driven by a [`ThemeColorSource`]). A
//! [`StyleManager`] creates either from [`StyleParams`].

mod base_style;
mod blender;
mod colors;
mod css;
mod manager;
mod properties;
mod style;
mod stylesheet;

pub use base_style::{Corners, WidgetBaseStyle, names as property_names};
pub use blender::BlenderThemeStyle;
pub use colors::{ColorKind, ThemeColorSource, ThemeColors, WidgetColors};
pub use css::StyleCss;
pub use manager::{StyleManager, StyleType, StyleTypeId};
pub use properties::{
    PropertyError, PropertyType, PropertyValue, StyleProperties, StyleProperty,
};
pub use style::{PolishHook, Style, StyleParams};
pub use stylesheet::{CssError, PseudoClass, Selector, StyleRule, StyleSheet};
