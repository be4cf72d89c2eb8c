// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Button building blocks

use bwidgets::prelude::*;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

/// Data and drawing shared by button widgets
///
/// Button widgets embed an `AbstractButton` as their `button` field and
/// implement [`ButtonWidget`] to expose it to handlers.
#[derive(Clone)]
pub struct AbstractButton {
    pub core: WidgetCore,
    pub text: String,
    /// Resolved by the style pass
    pub base_style: WidgetBaseStyle,
    /// Corners to round; layouts may change this when aligning buttons
    pub rounded_corners: Corners,
    apply: Option<Rc<dyn Fn()>>,
}

impl fmt::Debug for AbstractButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AbstractButton")
            .field("core", &self.core)
            .field("text", &self.text)
            .field("base_style", &self.base_style)
            .field("rounded_corners", &self.rounded_corners)
            .field("apply", &self.apply.as_ref().map(|_| ()))
            .finish()
    }
}

impl AbstractButton {
    /// Construct
    ///
    /// Missing size hints use [`bwidgets::DEFAULT_WIDGET_SIZE_HINT`].
    pub fn new(
        text: impl ToString,
        identifier: &str,
        width_hint: Option<u32>,
        height_hint: Option<u32>,
    ) -> Self {
        AbstractButton {
            core: WidgetCore::new(identifier, width_hint, height_hint),
            text: text.to_string(),
            base_style: WidgetBaseStyle::default(),
            rounded_corners: Corners::ALL,
            apply: None,
        }
    }

    /// Set the apply callback
    ///
    /// Handlers call this when the button is activated.
    pub fn set_apply(&mut self, f: impl Fn() + 'static) {
        self.apply = Some(Rc::new(f));
    }

    /// Whether an apply callback is set
    #[inline]
    pub fn has_apply(&self) -> bool {
        self.apply.is_some()
    }

    /// Invoke the apply callback, if any
    pub fn apply(&self) {
        if let Some(f) = self.apply.as_ref() {
            f();
        }
    }

    /// Register the properties of the base style
    pub fn register_properties(&mut self) {
        self.base_style
            .register_properties(&mut self.core.style_properties);
    }

    /// Draw a rounded box with vertical gradient, then text and icon
    pub fn draw(&self, style: &dyn Style, engine: &mut dyn PaintEngine, icon: Option<&dyn Icon>) {
        let base = &self.base_style;
        let rect = self.core.rectangle;
        let gradient = Gradient::new(base.background_color, base.shade_top, base.shade_bottom);

        let mut painter = Painter::new(engine);
        painter.draw_roundbox_widget_base(base, style, &rect, gradient, base.corner_radius);

        painter.set_content_mask(rect);
        painter.set_active_color(base.text_color);
        painter.draw_text_and_icon(&self.text, icon, &rect, base.text_alignment, style.dpi_factor());
    }
}

/// A widget built on [`AbstractButton`]
pub trait ButtonWidget: Widget {
    fn button(&self) -> &AbstractButton;
    fn button_mut(&mut self) -> &mut AbstractButton;
}

/// Implement [`Widget`] and [`ButtonWidget`] for a type with field
/// `button: AbstractButton`
///
/// Extra `Widget` methods (at least `draw` and `create_handler`) follow the
/// kind.
macro_rules! impl_button_widget {
    ($ty:ty, $kind:expr; $($items:tt)*) => {
        impl ::bwidgets::Widget for $ty {
            fn core(&self) -> &::bwidgets::WidgetCore {
                &self.button.core
            }
            fn core_mut(&mut self) -> &mut ::bwidgets::WidgetCore {
                &mut self.button.core
            }
            fn kind(&self) -> ::bwidgets::WidgetKind {
                $kind
            }
            fn register_properties(&mut self) {
                self.button.register_properties();
            }
            fn label(&self) -> Option<&str> {
                Some(&self.button.text)
            }
            fn base_style(&self) -> Option<&::bwidgets::theme::WidgetBaseStyle> {
                Some(&self.button.base_style)
            }
            fn base_style_mut(&mut self) -> Option<&mut ::bwidgets::theme::WidgetBaseStyle> {
                Some(&mut self.button.base_style)
            }
            fn rounded_corners(&self) -> ::bwidgets::theme::Corners {
                self.button.rounded_corners
            }
            fn set_rounded_corners(&mut self, corners: ::bwidgets::theme::Corners) {
                self.button.rounded_corners = corners;
            }
            $($items)*
        }

        impl $crate::ButtonWidget for $ty {
            fn button(&self) -> &$crate::AbstractButton {
                &self.button
            }
            fn button_mut(&mut self) -> &mut $crate::AbstractButton {
                &mut self.button
            }
        }
    };
}
pub(crate) use impl_button_widget;

/// Mouse-enter behaviour of buttons: `Normal` becomes `Highlighted`
pub(crate) fn highlight(widget: &mut dyn Widget) {
    if widget.state() == State::Normal {
        widget.set_state(State::Highlighted);
    }
}

/// Mouse-leave behaviour of buttons: `Highlighted` becomes `Normal`
pub(crate) fn unhighlight(widget: &mut dyn Widget) {
    if widget.state() == State::Highlighted {
        widget.set_state(State::Normal);
    }
}

/// Downcast the widget passed to a handler
///
/// A mismatch means the handler was paired with the wrong widget; this is
/// logged and the event ignored.
pub(crate) fn downcast_widget<W: Widget>(widget: &mut dyn Widget) -> Option<&mut W> {
    if !widget.is::<W>() {
        log::warn!(
            "handler for {} received widget {}",
            std::any::type_name::<W>(),
            widget.identifier()
        );
        return None;
    }
    widget.downcast_mut()
}

/// The default button handler
///
/// -   Entering highlights a `Normal` button; leaving reverts a
///     `Highlighted` button to `Normal`
/// -   A left press makes the button `Sunken` and is swallowed
/// -   A left release on a `Sunken` button makes it `Normal`, invokes the
///     apply callback and is swallowed; other releases are ignored
pub struct ButtonHandler<W> {
    id: NodeId,
    _widget: PhantomData<fn() -> W>,
}

impl<W> fmt::Debug for ButtonHandler<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonHandler")
            .field("id", &self.id)
            .field("widget", &std::any::type_name::<W>())
            .finish()
    }
}

impl<W: ButtonWidget> ButtonHandler<W> {
    /// Construct for the widget at `id`
    pub fn new(id: NodeId) -> Self {
        ButtonHandler {
            id,
            _widget: PhantomData,
        }
    }
}

impl<W: ButtonWidget> EventHandler for ButtonHandler<W> {
    fn widget(&self) -> NodeId {
        self.id
    }

    fn on_mouse_enter(&mut self, widget: &mut dyn Widget, _: &mut Event) {
        highlight(widget);
    }

    fn on_mouse_leave(&mut self, widget: &mut dyn Widget, _: &mut Event) {
        unhighlight(widget);
    }

    fn on_mouse_press(&mut self, widget: &mut dyn Widget, event: &mut MouseButtonEvent) {
        if event.button == MouseButton::Left {
            widget.set_state(State::Sunken);
            event.swallow();
        }
    }

    fn on_mouse_release(&mut self, widget: &mut dyn Widget, event: &mut MouseButtonEvent) {
        if event.button == MouseButton::Left && widget.state() == State::Sunken {
            widget.set_state(State::Normal);
            if let Some(button) = downcast_widget::<W>(widget) {
                button.button().apply();
            }
            event.swallow();
        }
    }
}
