// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Layout and draw passes over the screen graph

use super::{Content, Node, NodeId, ScreenGraph};
use crate::cast::Cast;
use crate::draw::PaintEngine;
use crate::geom::Rectangle;
use crate::layout::{ChildHint, scale_len};
use crate::theme::Style;
use smallvec::SmallVec;

type Hints = SmallVec<[ChildHint; 8]>;

impl ScreenGraph {
    /// Height required by the root layout at `scale`
    pub fn required_height(&self, scale: f32) -> i32 {
        self.node_height(self.root.0, scale)
    }

    /// Assign rectangles to all visible nodes
    ///
    /// The root layout is arranged inside `area`. Widget size hints and
    /// layout spacing are multiplied by `scale`. Children of containers with
    /// hidden content keep their previous rectangles.
    pub fn resolve_layout(&mut self, area: Rectangle, scale: f32) {
        log::trace!("ScreenGraph::resolve_layout: area={area:?}, scale={scale}");
        let root = self.root.0;
        self.arrange_node(root, area, scale);
    }

    /// Run the style and draw passes
    ///
    /// Sets up the viewport, then for each visible widget in draw order
    /// resolves its style with [`Style::set_widget_style`] and draws it.
    pub fn draw(&mut self, style: &dyn Style, engine: &mut dyn PaintEngine, viewport: &Rectangle) {
        engine.setup_viewport(viewport, style.clear_color());
        for id in self.visible_widgets() {
            if let Some(widget) = self.widget_mut(id) {
                style.set_widget_style(widget);
                widget.draw(style, engine);
            }
        }
    }

    fn header_height(widget_hint: u32, scale: f32) -> i32 {
        scale_len(widget_hint.cast(), scale)
    }

    fn node_height(&self, id: NodeId, scale: f32) -> i32 {
        let Some(node) = self.node(id) else {
            return 0;
        };
        match &node.content {
            Content::Widget { widget, .. } => {
                scale_len(widget.core().height_hint.cast(), scale)
            }
            Content::Layout(layout) => layout.height(&self.child_hints(node, scale), scale),
            Content::Container { layout, widget, .. } => {
                let header = Self::header_height(widget.header_height(), scale);
                if widget.is_content_visible() && !node.children.is_empty() {
                    header + layout.height(&self.child_hints(node, scale), scale)
                } else {
                    header
                }
            }
        }
    }

    fn child_hints(&self, node: &Node, scale: f32) -> Hints {
        node.children
            .iter()
            .map(|child| {
                let can_align = self
                    .widget(*child)
                    .is_some_and(|widget| widget.can_align());
                ChildHint::new(self.node_height(*child, scale), can_align)
            })
            .collect()
    }

    fn arrange_node(&mut self, id: NodeId, area: Rectangle, scale: f32) {
        let Some(node) = self.node(id) else {
            return;
        };

        let (layout, content) = match &node.content {
            Content::Widget { .. } => (None, None),
            Content::Layout(layout) => (Some(layout.as_ref()), Some(area)),
            Content::Container { layout, widget, .. } => {
                let top = area.ymin + Self::header_height(widget.header_height(), scale);
                let content = Rectangle::new(area.xmin, area.xmax, top, area.ymax.max(top));
                let visible = widget.is_content_visible();
                (Some(layout.as_ref()), visible.then_some(content))
            }
        };

        let arrangement = match (layout, content) {
            (Some(layout), Some(content)) => {
                let hints = self.child_hints(node, scale);
                let rects = layout.arrange(content, &hints, scale);
                let corners = layout.align_corners(&hints);
                let children: SmallVec<[NodeId; 8]> = node.children.iter().copied().collect();
                Some((content, children, rects, corners))
            }
            _ => None,
        };

        match self.content_mut(id) {
            Some(Content::Widget { widget, .. }) => widget.set_rectangle(area),
            Some(Content::Container { widget, .. }) => {
                widget.set_rectangle(area);
                if let Some((content, ..)) = &arrangement {
                    widget.set_content_rectangle(*content);
                }
            }
            _ => (),
        }

        let Some((_, children, rects, corners)) = arrangement else {
            return;
        };
        for ((child, rect), corners) in children.into_iter().zip(rects).zip(corners) {
            if let (Some(corners), Some(widget)) = (corners, self.widget_mut(child)) {
                widget.set_rounded_corners(corners);
            }
            self.arrange_node(child, rect, scale);
        }
    }
}
