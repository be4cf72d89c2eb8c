// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Theme colour source

use crate::draw::{Color, Rgba8};
use std::fmt::Debug;

/// Theme colour groups, one per family of widgets
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorKind {
    /// Plain widgets and labels
    Regular,
    /// Push buttons
    Tool,
    /// Check boxes
    Option,
    Radio,
    NumSlider,
    Scroll,
    Text,
}

/// Colours and shading for one [`ColorKind`]
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WidgetColors {
    pub outline: Rgba8,
    pub inner: Rgba8,
    /// Background when selected or pressed
    pub inner_sel: Rgba8,
    /// Decoration colour
    pub item: Rgba8,
    pub text: Rgba8,
    /// Text colour when selected or pressed
    pub text_sel: Rgba8,
    /// If false, `shade_top` and `shade_bottom` are ignored
    pub shaded: bool,
    pub shade_top: i32,
    pub shade_bottom: i32,
    /// Corner radius relative to the widget unit
    pub roundness: f32,
}

impl WidgetColors {
    const fn flat(
        outline: &str,
        inner: &str,
        inner_sel: &str,
        item: &str,
        text: &str,
        text_sel: &str,
        roundness: f32,
    ) -> Self {
        WidgetColors {
            outline: Rgba8::parse(outline),
            inner: Rgba8::parse(inner),
            inner_sel: Rgba8::parse(inner_sel),
            item: Rgba8::parse(item),
            text: Rgba8::parse(text),
            text_sel: Rgba8::parse(text_sel),
            shaded: false,
            shade_top: 0,
            shade_bottom: 0,
            roundness,
        }
    }

    const fn with_shading(mut self, shade_top: i32, shade_bottom: i32) -> Self {
        self.shaded = true;
        self.shade_top = shade_top;
        self.shade_bottom = shade_bottom;
        self
    }
}

/// Read-only source of theme colours
///
/// Lookups which have no answer return `None`; styles then leave the
/// affected fields unchanged.
pub trait ThemeColorSource: Debug {
    /// Colours for a widget family
    fn widget_colors(&self, kind: ColorKind) -> Option<&WidgetColors>;

    /// Background of panels
    fn panel_background(&self) -> Color;

    /// Border of panels
    fn panel_border(&self) -> Color;

    /// Size of the widget unit in unscaled pixels
    ///
    /// Corner radii are [`WidgetColors::roundness`] times this.
    fn widget_unit(&self) -> f32;

    /// Viewport clear colour
    fn background(&self) -> Color;
}

/// A complete colour scheme
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ThemeColors {
    pub regular: WidgetColors,
    pub tool: WidgetColors,
    pub option: WidgetColors,
    pub radio: WidgetColors,
    pub num_slider: WidgetColors,
    pub scroll: WidgetColors,
    pub text: WidgetColors,
    pub panel_back: Rgba8,
    pub panel_border: Rgba8,
    pub background: Rgba8,
    pub widget_unit: f32,
}

impl ThemeColors {
    /// Default dark scheme
    pub const DARK: Self = ThemeColors {
        regular: WidgetColors::flat(
            "3D3D3D", "282828", "5680C2", "191919", "E6E6E6", "FFFFFF", 0.2,
        ),
        tool: WidgetColors::flat(
            "3D3D3D", "595959", "5680C2", "191919", "E6E6E6", "FFFFFF", 0.2,
        ),
        option: WidgetColors::flat(
            "3D3D3D", "595959", "5680C2", "FFFFFF", "E6E6E6", "FFFFFF", 0.3,
        ),
        radio: WidgetColors::flat(
            "3D3D3D", "595959", "5680C2", "FFFFFF", "E6E6E6", "FFFFFF", 0.2,
        ),
        num_slider: WidgetColors::flat(
            "3D3D3D", "595959", "999999", "5680C2", "E6E6E6", "FFFFFF", 0.2,
        ),
        scroll: WidgetColors::flat(
            "323232", "505050B4", "646464B4", "808080", "E6E6E6", "FFFFFF", 0.5,
        )
        .with_shading(5, -5),
        text: WidgetColors::flat(
            "3D3D3D", "282828", "333333", "5680C2", "E6E6E6", "FFFFFF", 0.2,
        ),
        panel_back: Rgba8::parse("3D3D3D"),
        panel_border: Rgba8::grey(114),
        background: Rgba8::parse("303030"),
        widget_unit: 20.0,
    };

    /// Shaded light grey scheme
    pub const CLASSIC: Self = ThemeColors {
        regular: WidgetColors::flat(
            "191919", "999999", "646464", "191919", "000000", "FFFFFF", 0.25,
        ),
        tool: WidgetColors::flat(
            "191919", "999999", "646464", "191919", "000000", "FFFFFF", 0.25,
        )
        .with_shading(15, -15),
        option: WidgetColors::flat(
            "000000", "464646", "999999", "FFFFFF", "000000", "FFFFFF", 0.35,
        )
        .with_shading(15, -15),
        radio: WidgetColors::flat(
            "000000", "464646", "5680C2", "FFFFFF", "FFFFFF", "000000", 0.25,
        )
        .with_shading(15, -15),
        num_slider: WidgetColors::flat(
            "191919", "B4B4B4", "999999", "808080", "000000", "FFFFFF", 0.25,
        )
        .with_shading(-20, 0),
        scroll: WidgetColors::flat(
            "323232", "505050B4", "646464B4", "808080", "000000", "FFFFFF", 0.5,
        )
        .with_shading(5, -5),
        text: WidgetColors::flat(
            "191919", "999999", "999999", "5A5A5A", "000000", "FFFFFF", 0.2,
        )
        .with_shading(0, 25),
        panel_back: Rgba8::parse("727272"),
        panel_border: Rgba8::grey(114),
        background: Rgba8::parse("727272"),
        widget_unit: 20.0,
    };
}

impl Default for ThemeColors {
    fn default() -> Self {
        ThemeColors::DARK
    }
}

impl ThemeColorSource for ThemeColors {
    fn widget_colors(&self, kind: ColorKind) -> Option<&WidgetColors> {
        Some(match kind {
            ColorKind::Regular => &self.regular,
            ColorKind::Tool => &self.tool,
            ColorKind::Option => &self.option,
            ColorKind::Radio => &self.radio,
            ColorKind::NumSlider => &self.num_slider,
            ColorKind::Scroll => &self.scroll,
            ColorKind::Text => &self.text,
        })
    }

    fn panel_background(&self) -> Color {
        self.panel_back.into()
    }

    fn panel_border(&self) -> Color {
        self.panel_border.into()
    }

    fn widget_unit(&self) -> f32 {
        self.widget_unit
    }

    fn background(&self) -> Color {
        self.background.into()
    }
}
