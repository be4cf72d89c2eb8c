// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Theme-driven style

use super::{
    ColorKind, Corners, Style, StyleParams, StyleTypeId, ThemeColorSource, WidgetBaseStyle,
    WidgetColors, property_names,
};
use crate::draw::Color;
use crate::{State, Widget, WidgetKind};

/// Background shade applied to highlighted widgets
const HIGHLIGHT_SHADE: i32 = 15;

/// A style resolving base styles from theme colours
///
/// Widgets map to colour groups by kind. The background is shaded when
/// highlighted; pressed widgets use the selected colours with top and bottom
/// shades swapped.
#[derive(Debug)]
pub struct BlenderThemeStyle {
    params: StyleParams,
}

impl BlenderThemeStyle {
    /// Construct
    pub fn new(params: StyleParams) -> Self {
        BlenderThemeStyle { params }
    }

    /// Access parameters
    pub fn params(&self) -> &StyleParams {
        &self.params
    }
}

impl Default for BlenderThemeStyle {
    fn default() -> Self {
        BlenderThemeStyle::new(StyleParams::default())
    }
}

/// Colour group of a widget kind, in dispatch order
fn color_kind(kind: WidgetKind) -> Option<ColorKind> {
    Some(match kind {
        WidgetKind::Checkbox => ColorKind::Option,
        WidgetKind::NumberSlider => ColorKind::NumSlider,
        WidgetKind::PushButton => ColorKind::Tool,
        WidgetKind::RadioButton => ColorKind::Radio,
        WidgetKind::ScrollBar => ColorKind::Scroll,
        WidgetKind::TextBox => ColorKind::Text,
        _ => return None,
    })
}

/// Fill `base` from `wcol`, adjusted for `state`
///
/// Corners and text alignment are left as they are.
pub(crate) fn apply_widget_colors(
    wcol: &WidgetColors,
    state: State,
    widget_unit: f32,
    base: &mut WidgetBaseStyle,
) {
    base.background_color = wcol.inner.into();
    base.text_color = wcol.text.into();
    base.border_color = wcol.outline.into();
    base.decoration_color = wcol.item.into();
    base.shade_top = if wcol.shaded { wcol.shade_top } else { 0 };
    base.shade_bottom = if wcol.shaded { wcol.shade_bottom } else { 0 };
    base.corner_radius = wcol.roundness * widget_unit;

    match state {
        State::Normal => (),
        State::Highlighted => base.background_color.shade(HIGHLIGHT_SHADE),
        State::Sunken => {
            base.background_color = wcol.inner_sel.into();
            base.text_color = wcol.text_sel.into();
            std::mem::swap(&mut base.shade_top, &mut base.shade_bottom);
        }
    }
}

impl BlenderThemeStyle {
    fn widget_base_style_set(&self, kind: WidgetKind, state: State, base: &mut WidgetBaseStyle) {
        let colors = &self.params.colors;
        if let Some(ck) = color_kind(kind) {
            if let Some(wcol) = colors.widget_colors(ck) {
                apply_widget_colors(wcol, state, colors.widget_unit(), base);
            }
        } else if kind == WidgetKind::Panel {
            base.background_color = colors.panel_background();
            base.border_color = colors.panel_border();
        }
    }
}

impl Style for BlenderThemeStyle {
    fn style_type(&self) -> StyleTypeId {
        StyleTypeId::BlenderTheme
    }

    fn dpi_factor(&self) -> f32 {
        self.params.dpi_factor
    }

    fn colors(&self) -> &dyn ThemeColorSource {
        &self.params.colors
    }

    fn polish(&self, widget: &mut dyn Widget) {
        self.params.polish(widget);
    }

    fn set_widget_style(&self, widget: &mut dyn Widget) {
        self.polish(widget);
        widget.core_mut().style_properties.set_all_to_default();

        let kind = widget.kind();
        let state = widget.state();
        log::trace!(
            "BlenderThemeStyle::set_widget_style: {} ({kind:?}, {state:?})",
            widget.identifier()
        );

        let has_base_style = if kind.is_button() {
            let corners = widget.rounded_corners();
            widget
                .base_style_mut()
                .map(|base| base.roundbox_corners = corners)
                .is_some()
        } else if kind == WidgetKind::Panel || kind.is_text_box() {
            widget
                .base_style_mut()
                .map(|base| base.roundbox_corners = Corners::ALL)
                .is_some()
        } else {
            if kind == WidgetKind::Label {
                let text = self
                    .params
                    .colors
                    .widget_colors(ColorKind::Regular)
                    .map(|wcol| Color::from(wcol.text));
                let props = &mut widget.core_mut().style_properties;
                if let (Some(prop), Some(text)) = (props.lookup_mut(property_names::TEXT_COLOR), text)
                {
                    if let Err(err) = prop.set_value(text) {
                        log::warn!("BlenderThemeStyle: label text colour: {err}");
                    }
                }
            }
            false
        };

        if has_base_style {
            if let Some(base) = widget.base_style_mut() {
                self.widget_base_style_set(kind, state, base);
            }
        }
    }
}
