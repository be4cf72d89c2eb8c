// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Scroll bar widget

use crate::button::{downcast_widget, highlight, impl_button_widget, unhighlight};
use crate::AbstractButton;
use bwidgets::draw::GradientDirection;
use bwidgets::prelude::*;

/// Extra shade applied to the stronger end of the thumb gradient
const THUMB_SHADE: i32 = 20;

/// A vertical scroll bar
///
/// The thumb covers `ratio` of the track and is moved by `scroll_offset`
/// (scaled by `ratio`) from the track's end.
///
/// Dragging sets the offset to the offset at press time plus the drag
/// distance, then invokes the apply callback.
#[derive(Clone, Debug)]
pub struct ScrollBar {
    pub button: AbstractButton,
    /// Fraction of the track covered by the thumb
    pub ratio: f32,
    scroll_offset: i32,
    press_offset: i32,
}

impl ScrollBar {
    /// Construct with size hints
    pub fn new(width_hint: Option<u32>, height_hint: Option<u32>) -> Self {
        ScrollBar {
            button: AbstractButton::new("", "ScrollBar", width_hint, height_hint),
            ratio: 1.0,
            scroll_offset: 0,
            press_offset: 0,
        }
    }

    /// Set the apply callback (chain style)
    #[must_use]
    pub fn with_apply(mut self, f: impl Fn() + 'static) -> Self {
        self.button.set_apply(f);
        self
    }

    /// Set the thumb ratio (chain style)
    #[must_use]
    pub fn with_ratio(mut self, ratio: f32) -> Self {
        self.ratio = ratio;
        self
    }

    /// Current offset
    #[inline]
    pub fn scroll_offset(&self) -> i32 {
        self.scroll_offset
    }

    /// Set the offset and invoke the apply callback
    pub fn set_scroll_offset(&mut self, offset: i32) {
        self.scroll_offset = offset;
        self.button.apply();
    }

    /// The rectangle of the thumb
    pub fn thumb_rectangle(&self) -> Rectangle {
        let rect = self.button.core.rectangle;
        let ratio = f64::from(self.ratio);
        let shift = saturating_pixels((ratio * f64::conv(self.scroll_offset)).trunc());
        let length = saturating_pixels((ratio * f64::conv(rect.height())).trunc());
        let mut thumb = rect;
        thumb.ymax = rect.ymax.saturating_add(shift);
        thumb.ymin = thumb.ymax.saturating_sub(length);
        thumb
    }
}

/// Round to the nearest pixel, saturating at the bounds of `i32`
///
/// NaN maps to zero.
fn saturating_pixels(v: f64) -> i32 {
    let pixels: Option<i32> = v.try_cast_nearest().ok();
    match pixels {
        Some(p) => p,
        None if v > 0.0 => i32::MAX,
        None if v < 0.0 => i32::MIN,
        None => 0,
    }
}

impl_button_widget! {
    ScrollBar, WidgetKind::ScrollBar;

    fn draw(&self, style: &dyn Style, engine: &mut dyn PaintEngine) {
        let base = &self.button.base_style;
        let rect = self.button.core.rectangle;
        let mut painter = Painter::new(engine);

        let outer = Gradient::with_direction(
            base.background_color,
            base.shade_bottom,
            base.shade_top,
            GradientDirection::LeftRight,
        );
        painter.draw_roundbox_widget_base(base, style, &rect, outer, base.corner_radius);

        let mut thumb_style = base.clone();
        if thumb_style.shade_top > thumb_style.shade_bottom {
            thumb_style.shade_top += THUMB_SHADE;
        } else if thumb_style.shade_top < thumb_style.shade_bottom {
            thumb_style.shade_bottom += THUMB_SHADE;
        }
        let inner = Gradient::with_direction(
            thumb_style.decoration_color,
            thumb_style.shade_top,
            thumb_style.shade_bottom,
            GradientDirection::LeftRight,
        );
        let thumb = self.thumb_rectangle();
        painter.draw_roundbox_widget_base(&thumb_style, style, &thumb, inner, thumb_style.corner_radius);
    }

    fn create_handler(&self, id: NodeId) -> Box<dyn EventHandler> {
        Box::new(ScrollBarHandler { id })
    }
}

/// Handler for [`ScrollBar`]
///
/// Press and release behave as for other buttons; a left press also records
/// the offset used as the baseline of subsequent drags.
#[derive(Clone, Debug)]
pub struct ScrollBarHandler {
    id: NodeId,
}

impl EventHandler for ScrollBarHandler {
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
        if event.button != MouseButton::Left {
            return;
        }
        if let Some(bar) = downcast_widget::<ScrollBar>(widget) {
            bar.set_state(State::Sunken);
            bar.press_offset = bar.scroll_offset;
            event.swallow();
        }
    }

    fn on_mouse_release(&mut self, widget: &mut dyn Widget, event: &mut MouseButtonEvent) {
        if event.button == MouseButton::Left && widget.state() == State::Sunken {
            widget.set_state(State::Normal);
            event.swallow();
        }
    }

    fn on_mouse_drag(&mut self, widget: &mut dyn Widget, event: &mut MouseDragEvent) {
        if event.button != MouseButton::Left {
            return;
        }
        if let Some(bar) = downcast_widget::<ScrollBar>(widget) {
            let delta = saturating_pixels(f64::from(event.drag_distance.y));
            bar.set_scroll_offset(bar.press_offset.saturating_add(delta));
            event.swallow();
        }
    }
}
