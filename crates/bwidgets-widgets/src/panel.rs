// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Collapsible panel

use crate::button::downcast_widget;
use bwidgets::draw::TriaDirection;
use bwidgets::prelude::*;

/// A titled container which may be collapsed
///
/// The panel's rectangle covers its header and, when open, the content area
/// below. Pressing the header toggles the open state. Children of a closed
/// panel are excluded from layout, drawing and hit testing.
#[derive(Clone, Debug)]
pub struct Panel {
    core: WidgetCore,
    label: String,
    pub base_style: WidgetBaseStyle,
    is_open: bool,
    content_rect: Option<Rectangle>,
}

impl Panel {
    /// Construct an open panel
    ///
    /// The height hint is the header height.
    pub fn new(label: impl ToString, header_height: Option<u32>) -> Self {
        Panel {
            core: WidgetCore::new("Panel", None, header_height),
            label: label.to_string(),
            base_style: WidgetBaseStyle::default(),
            is_open: true,
            content_rect: None,
        }
    }

    /// Set the open state (chain style)
    #[must_use]
    pub fn with_open(mut self, open: bool) -> Self {
        self.is_open = open;
        self
    }

    /// Whether the panel is open
    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Set the open state
    ///
    /// The host should run the layout pass after changing this.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// The header area
    pub fn header_rectangle(&self) -> Rectangle {
        let mut rect = self.core.rectangle;
        if let Some(content) = self.content_rect {
            rect.ymax = content.ymin;
        }
        rect
    }

    /// The content area, if open and laid out
    #[inline]
    pub fn content_rectangle(&self) -> Option<Rectangle> {
        self.content_rect
    }
}

impl Widget for Panel {
    fn core(&self) -> &WidgetCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Panel
    }

    fn draw(&self, style: &dyn Style, engine: &mut dyn PaintEngine) {
        let base = &self.base_style;
        let rect = self.core.rectangle;
        let gradient = Gradient::new(base.background_color, 0, 0);

        let mut painter = Painter::new(engine);
        painter.draw_roundbox_widget_base(base, style, &rect, gradient, base.corner_radius);

        let header = self.header_rectangle();
        let size = header.height();
        let tria_rect = Rectangle::from_size(header.xmin, size, header.ymin, size).resized(-size / 4);
        let direction = if self.is_open {
            TriaDirection::Down
        } else {
            TriaDirection::Right
        };
        painter.set_active_color(base.text_color);
        painter.draw_tria(&tria_rect, direction);

        let mut text_rect = header;
        text_rect.xmin = tria_rect.xmax + size / 4;
        painter.set_content_mask(header);
        painter.draw_text(&self.label, &text_rect, TextAlignment::Left);
    }

    fn register_properties(&mut self) {
        self.base_style
            .register_properties(&mut self.core.style_properties);
    }

    fn create_handler(&self, id: NodeId) -> Box<dyn EventHandler> {
        Box::new(PanelHandler { id })
    }

    fn label(&self) -> Option<&str> {
        Some(&self.label)
    }

    fn base_style(&self) -> Option<&WidgetBaseStyle> {
        Some(&self.base_style)
    }

    fn base_style_mut(&mut self) -> Option<&mut WidgetBaseStyle> {
        Some(&mut self.base_style)
    }

    fn set_rectangle(&mut self, rect: Rectangle) {
        self.core.rectangle = rect;
        self.content_rect = None;
    }
}

impl ContainerWidget for Panel {
    fn header_height(&self) -> u32 {
        self.core.height_hint
    }

    fn is_content_visible(&self) -> bool {
        self.is_open
    }

    fn set_content_rectangle(&mut self, rect: Rectangle) {
        self.content_rect = Some(rect);
    }
}

/// Handler for [`Panel`]: a left press on the header toggles open state
#[derive(Clone, Debug)]
pub struct PanelHandler {
    id: NodeId,
}

impl EventHandler for PanelHandler {
    fn widget(&self) -> NodeId {
        self.id
    }

    fn on_mouse_press(&mut self, widget: &mut dyn Widget, event: &mut MouseButtonEvent) {
        if event.button != MouseButton::Left {
            return;
        }
        if let Some(panel) = downcast_widget::<Panel>(widget) {
            if panel.header_rectangle().contains(event.location) {
                panel.is_open = !panel.is_open;
                log::debug!("Panel {:?}: open = {}", panel.label, panel.is_open);
                event.swallow();
            }
        }
    }
}
