// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Text label

use bwidgets::theme::property_names;
use bwidgets::prelude::*;
use std::rc::Rc;

/// A static text label with optional icon
///
/// The text colour is the style property `"color"`, which styles may set.
#[derive(Clone, Debug)]
pub struct Label {
    core: WidgetCore,
    text: String,
    icon: Option<Rc<dyn Icon>>,
    alignment: TextAlignment,
}

impl Label {
    /// Construct with default size hints
    pub fn new(text: impl ToString) -> Self {
        Label {
            core: WidgetCore::new("Label", None, None),
            text: text.to_string(),
            icon: None,
            alignment: TextAlignment::Left,
        }
    }

    /// Set the icon (chain style)
    #[must_use]
    pub fn with_icon(mut self, icon: Rc<dyn Icon>) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set or clear the icon
    pub fn set_icon(&mut self, icon: Option<Rc<dyn Icon>>) {
        self.icon = icon;
    }

    /// Set text alignment (chain style)
    #[must_use]
    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Get text
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set text
    pub fn set_text(&mut self, text: impl ToString) {
        self.text = text.to_string();
    }

    /// The text colour from the `"color"` property
    pub fn text_color(&self) -> Color {
        self.core
            .style_properties
            .lookup(property_names::TEXT_COLOR)
            .and_then(|prop| prop.value().as_color())
            .unwrap_or(Color::BLACK)
    }
}

impl Widget for Label {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Label
    }

    fn draw(&self, style: &dyn Style, engine: &mut dyn PaintEngine) {
        let mut painter = Painter::new(engine);
        painter.set_active_color(self.text_color());
        painter.draw_text_and_icon(
            &self.text,
            self.icon(),
            &self.core.rectangle,
            self.alignment,
            style.dpi_factor(),
        );
    }

    fn register_properties(&mut self) {
        self.core
            .style_properties
            .register(property_names::TEXT_COLOR, Color::BLACK);
    }

    fn create_handler(&self, id: NodeId) -> Box<dyn EventHandler> {
        Box::new(LabelHandler(id))
    }

    fn label(&self) -> Option<&str> {
        Some(&self.text)
    }

    fn icon(&self) -> Option<&dyn Icon> {
        self.icon.as_deref()
    }
}

/// Labels ignore input
#[derive(Clone, Debug)]
struct LabelHandler(NodeId);

impl EventHandler for LabelHandler {
    fn widget(&self) -> NodeId {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bwidgets::draw::{PaintCommand, RecordingEngine};
    use bwidgets::theme::{BlenderThemeStyle, StyleParams, ThemeColors};

    #[test]
    fn theme_sets_text_color() {
        let mut label = Label::new("Name");
        label.initialize();
        label.set_rectangle(Rectangle::new(0, 100, 0, 20));
        assert_eq!(label.text_color(), Color::BLACK);

        let params = StyleParams {
            colors: ThemeColors::DARK,
            ..StyleParams::default()
        };
        let style = BlenderThemeStyle::new(params);
        style.set_widget_style(&mut label);
        let expected = Color::from(ThemeColors::DARK.regular.text);
        assert_eq!(label.text_color(), expected);

        let mut engine = RecordingEngine::new();
        label.draw(&style, &mut engine);
        assert!(matches!(
            engine.commands(),
            [PaintCommand::Text { text, color, .. }] if text == "Name" && *color == expected
        ));
    }

    #[test]
    fn unregistered_color_falls_back() {
        let label = Label::new("x");
        assert!(label.core().style_properties.is_empty());
        assert_eq!(label.text_color(), Color::BLACK);
        assert!(label.base_style().is_none());
    }
}
