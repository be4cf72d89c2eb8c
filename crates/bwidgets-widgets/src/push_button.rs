// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Push-button widget

use crate::button::impl_button_widget;
use crate::{AbstractButton, ButtonHandler};
use bwidgets::prelude::*;
use std::rc::Rc;

/// A push-button with a text label and optional icon
///
/// The apply callback is invoked when a press is released.
#[derive(Clone, Debug)]
pub struct PushButton {
    pub button: AbstractButton,
    icon: Option<Rc<dyn Icon>>,
}

impl PushButton {
    /// Construct with default size hints
    #[inline]
    pub fn new(text: impl ToString) -> Self {
        Self::with_size_hints(text, None, None)
    }

    /// Construct with size hints
    pub fn with_size_hints(
        text: impl ToString,
        width_hint: Option<u32>,
        height_hint: Option<u32>,
    ) -> Self {
        PushButton {
            button: AbstractButton::new(text, "PushButton", width_hint, height_hint),
            icon: None,
        }
    }

    /// Set the apply callback (chain style)
    #[must_use]
    pub fn with_apply(mut self, f: impl Fn() + 'static) -> Self {
        self.button.set_apply(f);
        self
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
}

impl_button_widget! {
    PushButton, WidgetKind::PushButton;

    fn draw(&self, style: &dyn Style, engine: &mut dyn PaintEngine) {
        self.button.draw(style, engine, self.icon());
    }

    fn create_handler(&self, id: NodeId) -> Box<dyn EventHandler> {
        Box::new(ButtonHandler::<PushButton>::new(id))
    }

    fn icon(&self) -> Option<&dyn Icon> {
        self.icon.as_deref()
    }

    fn can_align(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use bwidgets::draw::RecordingEngine;
    use bwidgets::theme::BlenderThemeStyle;
    use std::cell::Cell;

    #[derive(Debug)]
    struct TestIcon(bool);
    impl Icon for TestIcon {
        fn is_valid(&self) -> bool {
            self.0
        }
    }

    fn press(button: MouseButton) -> MouseButtonEvent {
        MouseButtonEvent::new(button, Point::default())
    }

    #[test]
    fn press_release_cycle() {
        let count = Rc::new(Cell::new(0));
        let counter = count.clone();
        let mut w = PushButton::new("OK").with_apply(move || counter.set(counter.get() + 1));
        let mut handler = w.create_handler(NodeId::default());

        for initial in [State::Normal, State::Highlighted] {
            w.set_state(initial);
            let mut event = press(MouseButton::Left);
            handler.on_mouse_press(&mut w, &mut event);
            assert_eq!(w.state(), State::Sunken);
            assert!(event.is_swallowed());

            let mut event = press(MouseButton::Left);
            handler.on_mouse_release(&mut w, &mut event);
            assert_eq!(w.state(), State::Normal);
            assert!(event.is_swallowed());
        }
        assert_eq!(count.get(), 2);

        // Release without a preceding press is ignored
        w.set_state(State::Highlighted);
        let mut event = press(MouseButton::Left);
        handler.on_mouse_release(&mut w, &mut event);
        assert_eq!(w.state(), State::Highlighted);
        assert!(!event.is_swallowed());
        assert_eq!(count.get(), 2);

        // Other buttons are ignored
        let mut event = press(MouseButton::Right);
        handler.on_mouse_press(&mut w, &mut event);
        assert_eq!(w.state(), State::Highlighted);
        assert!(!event.is_swallowed());
    }

    #[test]
    fn enter_leave() {
        let mut w = PushButton::new("OK");
        let mut handler = w.create_handler(NodeId::default());
        handler.on_mouse_enter(&mut w, &mut Event::new());
        assert_eq!(w.state(), State::Highlighted);
        handler.on_mouse_leave(&mut w, &mut Event::new());
        assert_eq!(w.state(), State::Normal);

        w.set_state(State::Sunken);
        handler.on_mouse_leave(&mut w, &mut Event::new());
        assert_eq!(w.state(), State::Sunken);
        handler.on_mouse_enter(&mut w, &mut Event::new());
        assert_eq!(w.state(), State::Sunken);
    }

    #[test]
    fn icon_and_alignment() {
        let mut w = PushButton::new("Save").with_icon(Rc::new(TestIcon(true)));
        assert!(w.can_align());
        assert_eq!(w.label(), Some("Save"));
        assert!(w.icon().is_some());
        assert_eq!(w.identifier(), "PushButton");

        w.set_rectangle(Rectangle::new(0, 100, 0, 20));
        let mut engine = RecordingEngine::new();
        w.draw(&BlenderThemeStyle::default(), &mut engine);
        let icons = engine
            .commands()
            .iter()
            .filter(|c| matches!(c, bwidgets::draw::PaintCommand::Icon { .. }))
            .count();
        assert_eq!(icons, 1);

        w.set_icon(Some(Rc::new(TestIcon(false))));
        let mut engine = RecordingEngine::new();
        w.draw(&BlenderThemeStyle::default(), &mut engine);
        assert_eq!(engine.texts().count(), 1);
        assert!(!engine
            .commands()
            .iter()
            .any(|c| matches!(c, bwidgets::draw::PaintCommand::Icon { .. })));
    }
}
