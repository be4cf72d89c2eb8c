// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Style trait and parameters

use super::{StyleSheet, StyleTypeId, ThemeColorSource, ThemeColors};
use crate::Widget;
use crate::config::Config;
use crate::draw::Color;
use std::fmt;
use std::rc::Rc;

/// A host hook run on every widget before style resolution
pub type PolishHook = Rc<dyn Fn(&mut dyn Widget)>;

/// Parameters from which styles are created
///
/// The polish hook is injected here rather than installed globally; the
/// default is no hook.
#[derive(Clone)]
pub struct StyleParams {
    /// Scale factor applied to sizes and radii when drawing
    pub dpi_factor: f32,
    pub polish: Option<PolishHook>,
    pub colors: ThemeColors,
    /// Used by [`StyleCss`](super::StyleCss); `None` selects the built-in sheet
    pub stylesheet: Option<StyleSheet>,
}

impl Default for StyleParams {
    fn default() -> Self {
        StyleParams {
            dpi_factor: 1.0,
            polish: None,
            colors: ThemeColors::default(),
            stylesheet: None,
        }
    }
}

impl fmt::Debug for StyleParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleParams")
            .field("dpi_factor", &self.dpi_factor)
            .field("polish", &self.polish.as_ref().map(|_| "<hook>"))
            .field("colors", &self.colors)
            .field("stylesheet", &self.stylesheet)
            .finish()
    }
}

impl StyleParams {
    /// Build from a [`Config`]
    ///
    /// An empty stylesheet selects the built-in sheet. A stylesheet which
    /// fails to parse is reported and also replaced by the built-in sheet.
    pub fn from_config(config: &Config) -> Self {
        let stylesheet = if config.stylesheet.trim().is_empty() {
            None
        } else {
            match StyleSheet::parse(&config.stylesheet) {
                Ok(sheet) => Some(sheet),
                Err(err) => {
                    log::warn!("StyleParams::from_config: invalid stylesheet: {err}");
                    None
                }
            }
        };

        StyleParams {
            dpi_factor: config.dpi_factor,
            polish: None,
            colors: config.theme.get_active_scheme().clone(),
            stylesheet,
        }
    }

    /// Set the polish hook
    #[must_use]
    pub fn with_polish(mut self, hook: impl Fn(&mut dyn Widget) + 'static) -> Self {
        self.polish = Some(Rc::new(hook));
        self
    }

    /// Run the polish hook, if any
    pub fn polish(&self, widget: &mut dyn Widget) {
        if let Some(hook) = self.polish.as_ref() {
            hook(widget);
        }
    }
}

/// A style: maps widgets and their state to paint parameters
///
/// Resolution is a pure function of the widget (kind, state, properties) and
/// the style's parameters: styles hold no per-frame mutable state.
pub trait Style: fmt::Debug {
    /// Identifier of this style type
    fn style_type(&self) -> StyleTypeId;

    /// Scale factor applied to sizes and radii when drawing
    fn dpi_factor(&self) -> f32;

    /// Colour source used by this style
    fn colors(&self) -> &dyn ThemeColorSource;

    /// Colour used to clear the viewport
    fn clear_color(&self) -> Color {
        self.colors().background()
    }

    /// Last-moment host adjustments, run first in [`Style::set_widget_style`]
    fn polish(&self, widget: &mut dyn Widget);

    /// Resolve the widget's style for this frame
    ///
    /// Implementations run [`Style::polish`], then reset all style properties
    /// to their defaults, then resolve the base style (if the widget has one).
    fn set_widget_style(&self, widget: &mut dyn Widget);
}
