// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Screen-graph construction

use super::{Content, LayoutId, NodeId, ScreenGraph};
use crate::layout::Layout;
use crate::{ContainerWidget, Widget};

/// Helper to construct screen graphs
///
/// The builder has a single *active layout*: new nodes are appended to its
/// children. Adding a layout or container makes the new node active; to add
/// siblings of a nested layout afterwards, save its parent's [`LayoutId`] and
/// restore it with [`Builder::set_active_layout`].
///
/// Every widget is initialized (see [`Widget::initialize`]) and paired with
/// its handler before the call inserting it returns.
///
/// ```
/// use bwidgets_core::graph::{Builder, ScreenGraph};
/// use bwidgets_core::layout::{ColumnLayout, RowLayout};
///
/// let mut graph = ScreenGraph::new(ColumnLayout::new(false));
/// let mut builder = Builder::new(&mut graph);
/// let root = builder.active_layout();
/// let row = builder.add_layout(RowLayout::new(true));
/// assert_eq!(builder.active_layout(), row);
/// builder.set_active_layout(root);
/// ```
#[derive(Debug)]
pub struct Builder<'a> {
    graph: &'a mut ScreenGraph,
    active: LayoutId,
}

impl<'a> Builder<'a> {
    /// Construct, with the root as active layout
    pub fn new(graph: &'a mut ScreenGraph) -> Self {
        let active = graph.root();
        Builder { graph, active }
    }

    /// Construct with a given active layout
    pub fn with_active_layout(graph: &'a mut ScreenGraph, active: LayoutId) -> Self {
        Builder { graph, active }
    }

    /// Access the graph
    pub fn graph(&mut self) -> &mut ScreenGraph {
        self.graph
    }

    /// The node new children are appended to
    #[inline]
    pub fn active_layout(&self) -> LayoutId {
        self.active
    }

    /// Set the node new children are appended to
    #[inline]
    pub fn set_active_layout(&mut self, id: LayoutId) {
        self.active = id;
    }

    /// Add a layout node and make it active
    ///
    /// # Panics
    ///
    /// If the active layout was removed from the graph.
    pub fn add_layout<L: Layout + 'static>(&mut self, layout: L) -> LayoutId {
        let id = self.insert(|_| Content::Layout(Box::new(layout)));
        self.active = LayoutId(id);
        self.active
    }

    /// Add a widget node
    ///
    /// Returns the new node's id.
    ///
    /// # Panics
    ///
    /// If the active layout was removed from the graph.
    pub fn add_widget<W: Widget>(&mut self, widget: W) -> NodeId {
        let active = self.active;
        Self::add_widget_boxed(self.graph, active, Box::new(widget))
            .unwrap_or_else(|| panic!("Builder: active layout {active:?} does not exist"))
    }

    /// Add a container node and make it active
    ///
    /// The container's children are laid out by `layout`.
    ///
    /// # Panics
    ///
    /// If the active layout was removed from the graph.
    pub fn add_container<W, L>(&mut self, layout: L, widget: W) -> LayoutId
    where
        W: ContainerWidget,
        L: Layout + 'static,
    {
        let mut widget = widget;
        widget.initialize();
        let id = self.insert(|id| {
            let handler = widget.create_handler(id);
            Content::Container {
                layout: Box::new(layout),
                widget: Box::new(widget),
                handler,
            }
        });
        self.active = LayoutId(id);
        self.active
    }

    /// Add a widget node under `node`, returning the widget
    ///
    /// This does not require a builder. Returns `None` if `node` no longer
    /// exists.
    pub fn emplace_widget<W: Widget>(
        graph: &mut ScreenGraph,
        node: LayoutId,
        widget: W,
    ) -> Option<&mut W> {
        let id = Self::add_widget_boxed(graph, node, Box::new(widget))?;
        graph.widget_as_mut::<W>(id)
    }

    /// Add a boxed widget node under `node`
    ///
    /// Returns `None` if `node` no longer exists.
    pub fn add_widget_boxed(
        graph: &mut ScreenGraph,
        node: LayoutId,
        widget: Box<dyn Widget>,
    ) -> Option<NodeId> {
        let mut widget = widget;
        widget.initialize();
        graph.insert_with(node, |id| {
            let handler = widget.create_handler(id);
            Content::Widget { widget, handler }
        })
    }

    /// Replace the layout of a layout or container node
    ///
    /// Returns false if `node` no longer exists.
    pub fn set_layout(
        graph: &mut ScreenGraph,
        node: LayoutId,
        layout: impl Layout + 'static,
    ) -> bool {
        match graph.content_mut(node.0) {
            Some(Content::Layout(l)) | Some(Content::Container { layout: l, .. }) => {
                *l = Box::new(layout);
                true
            }
            _ => false,
        }
    }

    /// Replace the widget of a widget node
    ///
    /// The new widget is initialized and gets a new handler. Returns false if
    /// `node` is not a widget node.
    pub fn set_widget<W: Widget>(graph: &mut ScreenGraph, node: NodeId, widget: W) -> bool {
        let Some(Content::Widget {
            widget: slot,
            handler,
        }) = graph.content_mut(node)
        else {
            log::warn!("Builder::set_widget: {node:?} is not a widget node");
            return false;
        };

        let mut widget = widget;
        widget.initialize();
        *handler = widget.create_handler(node);
        *slot = Box::new(widget);
        true
    }

    fn insert(&mut self, make: impl FnOnce(NodeId) -> Content) -> NodeId {
        let active = self.active;
        self.graph
            .insert_with(active, make)
            .unwrap_or_else(|| panic!("Builder: active layout {active:?} does not exist"))
    }
}
