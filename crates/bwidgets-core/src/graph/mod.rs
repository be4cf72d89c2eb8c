// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! The screen graph
//!
//! A [`ScreenGraph`] is a tree of nodes stored in an arena. Each node is one
//! of:
//!
//! -   a layout node, holding a [`Layout`] and child nodes,
//! -   a widget node, holding a [`Widget`] and its [`EventHandler`],
//! -   a container node, holding both a layout with children and a
//!     [`ContainerWidget`] with its handler.
//!
//! Nodes are addressed by [`NodeId`]; nodes which may have children are also
//! addressed by [`LayoutId`]. Ids are generational: an id of a removed node
//! never resolves to a later node. Removing a node removes its subtree.
//!
//! Trees are built with a [`Builder`], laid out with
//! [`ScreenGraph::resolve_layout`], drawn with [`ScreenGraph::draw`] and
//! receive input through an [`EventDispatcher`].

mod builder;
mod dispatch;
mod pass;

pub use builder::Builder;
pub use dispatch::EventDispatcher;

use crate::event::EventHandler;
use crate::geom::Point;
use crate::layout::Layout;
use crate::{ContainerWidget, Widget};
use slab::Slab;
use smallvec::SmallVec;
use std::fmt;

/// Identifier of a node in a [`ScreenGraph`]
///
/// The default value identifies the root of any graph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

/// Identifier of a node which has a layout (a layout or container node)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayoutId(NodeId);

impl LayoutId {
    /// The node id
    #[inline]
    pub fn node(self) -> NodeId {
        self.0
    }
}

impl From<LayoutId> for NodeId {
    #[inline]
    fn from(id: LayoutId) -> Self {
        id.0
    }
}

/// Kind of a [`Node`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Layout,
    Widget,
    Container,
}

pub(crate) enum Content {
    Layout(Box<dyn Layout>),
    Widget {
        widget: Box<dyn Widget>,
        handler: Box<dyn EventHandler>,
    },
    Container {
        layout: Box<dyn Layout>,
        widget: Box<dyn ContainerWidget>,
        handler: Box<dyn EventHandler>,
    },
}

/// A node of the screen graph
pub struct Node {
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    content: Content,
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("kind", &self.kind())
            .field("parent", &self.parent)
            .field("children", &self.children);
        if let Some(w) = self.widget() {
            s.field("widget", &w.identifier());
        }
        s.finish()
    }
}

impl Node {
    fn new(parent: Option<NodeId>, content: Content) -> Self {
        Node {
            parent,
            children: SmallVec::new(),
            content,
        }
    }

    /// The kind of node
    pub fn kind(&self) -> NodeKind {
        match self.content {
            Content::Layout(_) => NodeKind::Layout,
            Content::Widget { .. } => NodeKind::Widget,
            Content::Container { .. } => NodeKind::Container,
        }
    }

    /// The parent node; `None` for the root
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child nodes, in order
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The widget, for widget and container nodes
    pub fn widget(&self) -> Option<&dyn Widget> {
        match &self.content {
            Content::Layout(_) => None,
            Content::Widget { widget, .. } => Some(widget.as_ref()),
            Content::Container { widget, .. } => Some(widget.as_ref() as &dyn Widget),
        }
    }

    fn widget_mut(&mut self) -> Option<&mut dyn Widget> {
        match &mut self.content {
            Content::Layout(_) => None,
            Content::Widget { widget, .. } => Some(widget.as_mut()),
            Content::Container { widget, .. } => Some(widget.as_mut() as &mut dyn Widget),
        }
    }

    /// The handler, for widget and container nodes
    pub fn handler(&self) -> Option<&dyn EventHandler> {
        match &self.content {
            Content::Layout(_) => None,
            Content::Widget { handler, .. } | Content::Container { handler, .. } => {
                Some(handler.as_ref())
            }
        }
    }

    /// The layout, for layout and container nodes
    pub fn layout(&self) -> Option<&dyn Layout> {
        match &self.content {
            Content::Layout(layout) | Content::Container { layout, .. } => Some(layout.as_ref()),
            Content::Widget { .. } => None,
        }
    }

    /// The container widget, for container nodes
    pub fn container(&self) -> Option<&dyn ContainerWidget> {
        match &self.content {
            Content::Container { widget, .. } => Some(widget.as_ref()),
            _ => None,
        }
    }

    /// Whether children take part in layout, drawing and input
    fn children_visible(&self) -> bool {
        match &self.content {
            Content::Container { widget, .. } => widget.is_content_visible(),
            _ => true,
        }
    }
}

/// Tree of layouts and widgets
///
/// Nodes live in a [`Slab`]; `generations` holds the current generation of
/// each slab key and is bumped whenever the key is vacated.
#[derive(Debug)]
pub struct ScreenGraph {
    nodes: Slab<Node>,
    generations: Vec<u32>,
    root: LayoutId,
}

impl ScreenGraph {
    /// Construct with a root layout node
    pub fn new(root_layout: impl Layout + 'static) -> Self {
        let mut nodes = Slab::new();
        // The first key of an empty slab is zero, matching `NodeId::default()`
        nodes.insert(Node::new(None, Content::Layout(Box::new(root_layout))));
        ScreenGraph {
            nodes,
            generations: vec![0],
            root: LayoutId(NodeId::default()),
        }
    }

    /// The root layout node
    #[inline]
    pub fn root(&self) -> LayoutId {
        self.root
    }

    /// Number of nodes, including the root
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if only the root is present
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Whether `id` refers to a live node
    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Access a node
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let key = self.key(id)?;
        self.nodes.get(key)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let key = self.key(id)?;
        self.nodes.get_mut(key)
    }

    /// Slab key of `id`, if its generation is current
    fn key(&self, id: NodeId) -> Option<usize> {
        let key = usize::try_from(id.index).ok()?;
        (*self.generations.get(key)? == id.generation).then_some(key)
    }

    /// Get the layout id of a layout or container node
    pub fn layout_id(&self, id: NodeId) -> Option<LayoutId> {
        self.node(id)?.layout().map(|_| LayoutId(id))
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    /// Children of a node (empty if not found)
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(|n| n.children()).unwrap_or(&[])
    }

    /// Access the widget of a widget or container node
    pub fn widget(&self, id: NodeId) -> Option<&dyn Widget> {
        self.node(id)?.widget()
    }

    /// Mutable access to the widget of a widget or container node
    pub fn widget_mut(&mut self, id: NodeId) -> Option<&mut dyn Widget> {
        self.node_mut(id)?.widget_mut()
    }

    /// Access a widget by concrete type
    pub fn widget_as<W: Widget>(&self, id: NodeId) -> Option<&W> {
        self.widget(id)?.downcast_ref()
    }

    /// Mutable access to a widget by concrete type
    pub fn widget_as_mut<W: Widget>(&mut self, id: NodeId) -> Option<&mut W> {
        self.widget_mut(id)?.downcast_mut()
    }

    /// Access the handler of a widget or container node
    pub fn handler(&self, id: NodeId) -> Option<&dyn EventHandler> {
        self.node(id)?.handler()
    }

    /// Run `f` on the handler of `id` with its widget
    pub(crate) fn with_handler<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn EventHandler, &mut dyn Widget) -> R,
    ) -> Option<R> {
        match &mut self.node_mut(id)?.content {
            Content::Layout(_) => None,
            Content::Widget { widget, handler } => Some(f(handler.as_mut(), widget.as_mut())),
            Content::Container {
                widget, handler, ..
            } => Some(f(handler.as_mut(), widget.as_mut() as &mut dyn Widget)),
        }
    }

    /// Insert a node as the last child of `parent`
    ///
    /// `make` receives the new node's id. Returns `None` if `parent` is gone.
    pub(crate) fn insert_with(
        &mut self,
        parent: LayoutId,
        make: impl FnOnce(NodeId) -> Content,
    ) -> Option<NodeId> {
        self.node(parent.0)?;

        let entry = self.nodes.vacant_entry();
        let key = entry.key();
        if key >= self.generations.len() {
            self.generations.resize(key + 1, 0);
        }
        let id = NodeId {
            index: u32::try_from(key).ok()?,
            generation: self.generations[key],
        };
        let node = Node::new(Some(parent.0), make(id));
        log::debug!("ScreenGraph: insert {:?} {:?} under {:?}", node.kind(), id, parent.0);
        entry.insert(node);

        if let Some(parent) = self.node_mut(parent.0) {
            parent.children.push(id);
        }
        Some(id)
    }

    /// Replace the content of a node, keeping its children
    pub(crate) fn content_mut(&mut self, id: NodeId) -> Option<&mut Content> {
        Some(&mut self.node_mut(id)?.content)
    }

    /// Remove a node and its subtree
    ///
    /// Returns false if `id` is not found or is the root.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root.0 || !self.contains(id) {
            return false;
        }

        if let Some(parent) = self.parent(id).and_then(|p| self.node_mut(p)) {
            parent.children.retain(|child| *child != id);
        }

        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            let Some(key) = self.key(id) else {
                continue;
            };
            if let Some(node) = self.nodes.try_remove(key) {
                log::debug!("ScreenGraph: remove {:?} {:?}", node.kind(), id);
                stack.extend(node.children.iter().copied());
                self.generations[key] = self.generations[key].wrapping_add(1);
            }
        }
        true
    }

    /// Visible widget nodes, in draw order
    ///
    /// This is a pre-order traversal: a container precedes its children.
    /// Children of containers with hidden content are skipped.
    pub fn visible_widgets(&self) -> Vec<NodeId> {
        let mut out = vec![];
        let mut stack = vec![self.root.0];
        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            if node.widget().is_some() {
                out.push(id);
            }
            if node.children_visible() {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Find the topmost visible widget at `point`
    pub fn find_widget_at(&self, point: Point) -> Option<NodeId> {
        self.visible_widgets().into_iter().rev().find(|id| {
            self.widget(*id)
                .is_some_and(|w| w.is_coordinate_inside(point))
        })
    }
}
