// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Resolved per-widget paint parameters

use super::{PropertyValue, StyleProperties};
use crate::draw::{Color, TextAlignment};

bitflags::bitflags! {
    /// Which corners of a box are rounded
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Corners: u8 {
        const TOP_LEFT = 1 << 0;
        const TOP_RIGHT = 1 << 1;
        const BOTTOM_RIGHT = 1 << 2;
        const BOTTOM_LEFT = 1 << 3;

        const TOP = Self::TOP_LEFT.bits() | Self::TOP_RIGHT.bits();
        const BOTTOM = Self::BOTTOM_LEFT.bits() | Self::BOTTOM_RIGHT.bits();
        const LEFT = Self::TOP_LEFT.bits() | Self::BOTTOM_LEFT.bits();
        const RIGHT = Self::TOP_RIGHT.bits() | Self::BOTTOM_RIGHT.bits();
        const ALL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl Default for Corners {
    fn default() -> Self {
        Corners::ALL
    }
}

/// Property names bound to [`WidgetBaseStyle`] fields
pub mod names {
    pub const BACKGROUND_COLOR: &str = "background-color";
    pub const TEXT_COLOR: &str = "color";
    pub const BORDER_COLOR: &str = "border-color";
    pub const DECORATION_COLOR: &str = "decoration-color";
    pub const BORDER_RADIUS: &str = "border-radius";
}

/// Paint parameters of one widget for one frame
///
/// Styles recompute this in every style pass; widgets read it in `draw`.
#[derive(Clone, Debug, PartialEq)]
pub struct WidgetBaseStyle {
    pub background_color: Color,
    pub text_color: Color,
    pub border_color: Color,
    /// Colour of decorations such as check marks and slider indicators
    pub decoration_color: Color,
    /// Shade (in `1/255` steps) applied at the top of background gradients
    pub shade_top: i32,
    /// Shade (in `1/255` steps) applied at the bottom of background gradients
    pub shade_bottom: i32,
    /// Radius of rounded corners in unscaled pixels
    pub corner_radius: f32,
    pub roundbox_corners: Corners,
    pub text_alignment: TextAlignment,
}

impl Default for WidgetBaseStyle {
    fn default() -> Self {
        WidgetBaseStyle {
            background_color: Color::BLACK,
            text_color: Color::BLACK,
            border_color: Color::BLACK,
            decoration_color: Color::BLACK,
            shade_top: 0,
            shade_bottom: 0,
            corner_radius: 0.0,
            roundbox_corners: Corners::ALL,
            text_alignment: TextAlignment::Left,
        }
    }
}

impl WidgetBaseStyle {
    /// Register the properties backing this style
    ///
    /// Defaults are the current field values.
    pub fn register_properties(&self, properties: &mut StyleProperties) {
        properties.register(names::BACKGROUND_COLOR, self.background_color);
        properties.register(names::TEXT_COLOR, self.text_color);
        properties.register(names::BORDER_COLOR, self.border_color);
        properties.register(names::DECORATION_COLOR, self.decoration_color);
        properties.register(names::BORDER_RADIUS, self.corner_radius);
    }

    /// Copy values of registered properties into fields
    ///
    /// Properties which are not registered leave their field unchanged.
    pub fn apply_properties(&mut self, properties: &StyleProperties) {
        let get = |name: &str| properties.lookup(name).map(|p| p.value());
        let color = |name: &str| get(name).as_ref().and_then(PropertyValue::as_color);

        if let Some(c) = color(names::BACKGROUND_COLOR) {
            self.background_color = c;
        }
        if let Some(c) = color(names::TEXT_COLOR) {
            self.text_color = c;
        }
        if let Some(c) = color(names::BORDER_COLOR) {
            self.border_color = c;
        }
        if let Some(c) = color(names::DECORATION_COLOR) {
            self.decoration_color = c;
        }
        if let Some(r) = get(names::BORDER_RADIUS).and_then(|v| v.as_float()) {
            self.corner_radius = r;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn corner_groups() {
        assert_eq!(Corners::TOP | Corners::BOTTOM, Corners::ALL);
        assert_eq!(Corners::LEFT & Corners::TOP, Corners::TOP_LEFT);
        assert_eq!(Corners::default(), Corners::ALL);
    }

    #[test]
    fn properties_round_trip_into_fields() {
        let mut style = WidgetBaseStyle::default();
        let mut props = StyleProperties::default();
        style.register_properties(&mut props);
        assert_eq!(props.len(), 5);

        props
            .lookup_mut(names::BACKGROUND_COLOR)
            .unwrap()
            .set_value(Color::WHITE)
            .unwrap();
        props
            .lookup_mut(names::BORDER_RADIUS)
            .unwrap()
            .set_value(3)
            .unwrap();
        style.apply_properties(&props);
        assert_eq!(style.background_color, Color::WHITE);
        assert_eq!(style.corner_radius, 3.0);
        assert_eq!(style.text_color, Color::BLACK);
    }
}
