// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Widget traits

use std::any::Any;
use std::fmt;

use super::{State, WidgetCore, WidgetKind};
use crate::draw::{Icon, PaintEngine};
use crate::event::EventHandler;
use crate::geom::{Point, Rectangle};
use crate::graph::NodeId;
use crate::theme::{Corners, Style, WidgetBaseStyle};

impl dyn Widget {
    /// Forwards to the method defined on the type `Any`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        <dyn Any>::is::<T>(self)
    }

    /// Forwards to the method defined on the type `Any`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref::<T>(self)
    }

    /// Forwards to the method defined on the type `Any`.
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut::<T>(self)
    }
}

/// The widget trait
///
/// A widget has an identity ([`WidgetCore::identifier`]), a rectangle
/// assigned by layout, an interaction [`State`] and a collection of style
/// properties. Widgets draw themselves via a [`PaintEngine`] and create the
/// [`EventHandler`] which drives their state.
///
/// Implementations supply [`Widget::core`], [`Widget::core_mut`],
/// [`Widget::draw`] and [`Widget::create_handler`]; other methods have
/// defaults describing a plain widget unknown to styles.
///
/// # Initialization
///
/// [`Widget::register_properties`] must not be called from a constructor.
/// Instead the screen graph calls [`Widget::initialize`] once after
/// construction and before the handler is created. Code constructing widgets
/// outside of a screen graph must call `initialize` itself.
pub trait Widget: Any + fmt::Debug {
    /// Get direct access to the [`WidgetCore`]
    fn core(&self) -> &WidgetCore;

    /// Get mutable access to the [`WidgetCore`]
    fn core_mut(&mut self) -> &mut WidgetCore;

    /// The kind tag used by styles to dispatch on widget type
    fn kind(&self) -> WidgetKind {
        WidgetKind::Custom
    }

    /// Draw the widget
    ///
    /// The style pass must have run on this widget (see
    /// [`Style::set_widget_style`]) so that the base style is current.
    fn draw(&self, style: &dyn Style, engine: &mut dyn PaintEngine);

    /// Register style properties
    ///
    /// Called exactly once, by [`Widget::initialize`].
    fn register_properties(&mut self) {}

    /// Create the handler driving this widget
    ///
    /// `id` is the screen-graph node holding this widget.
    fn create_handler(&self, id: NodeId) -> Box<dyn EventHandler>;

    /// Get the widget's label, if any
    fn label(&self) -> Option<&str> {
        None
    }

    /// Get the widget's icon, if any
    fn icon(&self) -> Option<&dyn Icon> {
        None
    }

    /// Whether the widget can be aligned with siblings
    ///
    /// Aligned widgets share rounded corners with their neighbours.
    fn can_align(&self) -> bool {
        false
    }

    /// The resolved base style, for widgets which have one
    fn base_style(&self) -> Option<&WidgetBaseStyle> {
        None
    }

    /// Mutable access to the base style, for widgets which have one
    fn base_style_mut(&mut self) -> Option<&mut WidgetBaseStyle> {
        None
    }

    /// Corners the widget wants rounded
    fn rounded_corners(&self) -> Corners {
        Corners::ALL
    }

    /// Set the corners to round
    ///
    /// Ignored by widgets which do not support it.
    fn set_rounded_corners(&mut self, corners: Corners) {
        let _ = corners;
    }

    /// Get the identifier
    #[inline]
    fn identifier(&self) -> &str {
        &self.core().identifier
    }

    /// Get the interaction state
    #[inline]
    fn state(&self) -> State {
        self.core().state
    }

    /// Set the interaction state
    #[inline]
    fn set_state(&mut self, state: State) {
        self.core_mut().state = state;
    }

    /// Get the rectangle assigned by layout
    #[inline]
    fn rectangle(&self) -> Rectangle {
        self.core().rectangle
    }

    /// Set the rectangle
    #[inline]
    fn set_rectangle(&mut self, rect: Rectangle) {
        self.core_mut().rectangle = rect;
    }

    /// True iff `point` lies within [`Widget::rectangle`]
    ///
    /// Uses the half-open convention of [`Rectangle::contains`].
    #[inline]
    fn is_coordinate_inside(&self, point: Point) -> bool {
        self.core().rectangle.contains(point)
    }

    /// Post-construction initialization
    ///
    /// Calls [`Widget::register_properties`] unless already done.
    fn initialize(&mut self) {
        if !self.core().initialized {
            self.register_properties();
            self.core_mut().initialized = true;
        }
    }
}

/// A widget which hosts a layout of child nodes
///
/// The widget's rectangle covers a header followed by the content area laid
/// out by the container node's layout.
pub trait ContainerWidget: Widget {
    /// Height of the header in unscaled pixels
    fn header_height(&self) -> u32;

    /// Whether children are visible
    ///
    /// Hidden children are skipped by layout, drawing and hit testing.
    fn is_content_visible(&self) -> bool {
        true
    }

    /// Called by the layout pass with the area covered by children
    ///
    /// The default implementation does nothing.
    fn set_content_rectangle(&mut self, rect: Rectangle) {
        let _ = rect;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::EventHandler;

    #[derive(Debug)]
    struct Counter {
        core: WidgetCore,
        registered: u32,
    }

    #[derive(Debug)]
    struct NoHandler(NodeId);
    impl EventHandler for NoHandler {
        fn widget(&self) -> NodeId {
            self.0
        }
    }

    impl Widget for Counter {
        fn core(&self) -> &WidgetCore {
            &self.core
        }
        fn core_mut(&mut self) -> &mut WidgetCore {
            &mut self.core
        }
        fn draw(&self, _: &dyn Style, _: &mut dyn PaintEngine) {}
        fn register_properties(&mut self) {
            self.registered += 1;
        }
        fn create_handler(&self, id: NodeId) -> Box<dyn EventHandler> {
            Box::new(NoHandler(id))
        }
    }

    #[test]
    fn initialize_once() {
        let mut w = Counter {
            core: WidgetCore::new("counter", None, None),
            registered: 0,
        };
        w.initialize();
        w.initialize();
        assert_eq!(w.registered, 1);
        assert!(w.core().is_initialized());
    }

    #[test]
    fn downcast_and_hit_test() {
        let mut w: Box<dyn Widget> = Box::new(Counter {
            core: WidgetCore::new("counter", None, None),
            registered: 0,
        });
        w.set_rectangle(Rectangle::new(0, 10, 0, 10));
        assert!(w.is::<Counter>());
        assert!(w.downcast_ref::<Counter>().is_some());
        assert!(w.is_coordinate_inside(Point::new(0.0, 9.5)));
        assert!(!w.is_coordinate_inside(Point::new(10.0, 5.0)));
        assert_eq!(w.kind(), WidgetKind::Custom);
        assert!(w.label().is_none() && w.icon().is_none() && !w.can_align());
    }
}
