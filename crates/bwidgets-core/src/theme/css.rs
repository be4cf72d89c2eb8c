// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Stylesheet-driven style

use super::{Corners, Style, StyleParams, StyleSheet, StyleTypeId, ThemeColorSource};
use crate::{Widget, WidgetKind};

/// A style driven by a [`StyleSheet`]
///
/// Corner rounding is decided by kind: buttons use the corners they request,
/// panels and text boxes round all corners. Stylesheet declarations are then
/// applied to the widget's style properties, from which the base style is
/// copied.
#[derive(Debug)]
pub struct StyleCss {
    params: StyleParams,
    sheet: StyleSheet,
}

impl StyleCss {
    /// Construct
    ///
    /// Uses [`StyleSheet::classic`] if `params` has no stylesheet.
    pub fn new(params: StyleParams) -> Self {
        let sheet = params.stylesheet.clone().unwrap_or_else(StyleSheet::classic);
        StyleCss { params, sheet }
    }

    /// The active stylesheet
    pub fn stylesheet(&self) -> &StyleSheet {
        &self.sheet
    }
}

impl Default for StyleCss {
    fn default() -> Self {
        StyleCss::new(StyleParams::default())
    }
}

impl Style for StyleCss {
    fn style_type(&self) -> StyleTypeId {
        StyleTypeId::ClassicCss
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
        let corners = if kind.is_button() {
            Some(widget.rounded_corners())
        } else if kind == WidgetKind::Panel || kind.is_text_box() {
            Some(Corners::ALL)
        } else {
            None
        };
        if let Some(corners) = corners {
            if let Some(base) = widget.base_style_mut() {
                base.roundbox_corners = corners;
            }
        }

        let state = widget.state();
        let core = widget.core_mut();
        log::trace!(
            "StyleCss::set_widget_style: {} ({kind:?}, {state:?})",
            core.identifier
        );
        self.sheet
            .apply(&core.identifier, state, &mut core.style_properties);

        if corners.is_some() {
            let properties = core.style_properties.clone();
            if let Some(base) = widget.base_style_mut() {
                base.apply_properties(&properties);
            }
        }
    }
}
