use bwidgets::{State, Widget};
use bwidgets::event::MouseButton;
use bwidgets::geom::{Point, Rectangle};
use bwidgets::graph::{Builder, EventDispatcher, NodeId, ScreenGraph};
use bwidgets::layout::ColumnLayout;
use bwidgets::widgets::{CheckBox, NumberSlider, PushButton, ScrollBar};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct Ui {
    graph: ScreenGraph,
    dispatcher: EventDispatcher,
    check: NodeId,
    push: NodeId,
    bar: NodeId,
    slider: NodeId,
    applied: Rc<Cell<u32>>,
    changes: Rc<RefCell<Vec<f64>>>,
}

// check: y 0..20, push: 24..44, bar: 48..148, slider: 152..172
fn ui() -> Ui {
    let _ = env_logger::builder().is_test(true).try_init();

    let applied = Rc::new(Cell::new(0));
    let changes = Rc::new(RefCell::new(vec![]));
    let mut graph = ScreenGraph::new(ColumnLayout::default());
    let mut builder = Builder::new(&mut graph);

    let counter = applied.clone();
    let check = builder.add_widget(CheckBox::new("Check").with_apply(move || counter.set(counter.get() + 1)));
    let counter = applied.clone();
    let push = builder.add_widget(PushButton::new("Push").with_apply(move || counter.set(counter.get() + 1)));
    let bar = builder.add_widget(ScrollBar::new(None, Some(100)));
    let log = changes.clone();
    let slider = builder.add_widget(
        NumberSlider::new("Value", 0.0, 10.0).with_on_change(move |v| log.borrow_mut().push(v)),
    );

    graph.resolve_layout(Rectangle::new(0, 100, 0, 400), 1.0);
    Ui {
        graph,
        dispatcher: EventDispatcher::new(),
        check,
        push,
        bar,
        slider,
        applied,
        changes,
    }
}

impl Ui {
    fn state(&self, id: NodeId) -> State {
        self.graph.widget(id).unwrap().state()
    }

    fn move_to(&mut self, x: f32, y: f32) {
        let _ = self.dispatcher.mouse_move(&mut self.graph, Point::new(x, y));
    }

    fn press(&mut self, x: f32, y: f32) -> bool {
        self.dispatcher
            .mouse_press(&mut self.graph, MouseButton::Left, Point::new(x, y))
            .is_used()
    }

    fn release(&mut self, x: f32, y: f32) -> bool {
        self.dispatcher
            .mouse_release(&mut self.graph, MouseButton::Left, Point::new(x, y))
            .is_used()
    }
}

#[test]
fn check_box_toggles_on_press() {
    let mut ui = ui();
    ui.move_to(50.0, 10.0);
    assert_eq!(ui.state(ui.check), State::Highlighted);
    assert_eq!(ui.dispatcher.hovered(), Some(ui.check));

    assert!(ui.press(50.0, 10.0));
    assert_eq!(ui.dispatcher.pressed(), Some(ui.check));
    assert!(ui.graph.widget_as::<CheckBox>(ui.check).unwrap().is_checked());
    assert_eq!(ui.applied.get(), 1);
    assert!(ui.release(50.0, 10.0));
    assert_eq!(ui.dispatcher.pressed(), None);
    assert_eq!(ui.applied.get(), 1);

    // Leaving keeps the check
    ui.move_to(50.0, 22.0);
    assert_eq!(ui.dispatcher.hovered(), None);
    assert_eq!(ui.state(ui.check), State::Sunken);

    ui.move_to(50.0, 5.0);
    assert!(ui.press(50.0, 5.0));
    assert!(ui.release(50.0, 5.0));
    assert_eq!(ui.state(ui.check), State::Highlighted);
    assert_eq!(ui.applied.get(), 2);
}

#[test]
fn push_button_applies_on_release() {
    let mut ui = ui();
    ui.move_to(50.0, 30.0);
    assert_eq!(ui.state(ui.push), State::Highlighted);
    assert!(ui.press(50.0, 30.0));
    assert_eq!(ui.state(ui.push), State::Sunken);
    assert_eq!(ui.applied.get(), 0);
    assert!(ui.release(50.0, 30.0));
    assert_eq!(ui.state(ui.push), State::Normal);
    assert_eq!(ui.applied.get(), 1);

    // Hover does not move while the press is held
    assert!(ui.press(50.0, 30.0));
    ui.move_to(50.0, 10.0);
    assert_eq!(ui.dispatcher.hovered(), Some(ui.push));
    assert_eq!(ui.state(ui.check), State::Normal);

    // The release goes to the pressed widget, then hover follows the cursor
    assert!(ui.release(50.0, 10.0));
    assert_eq!(ui.applied.get(), 2);
    assert_eq!(ui.state(ui.push), State::Normal);
    assert_eq!(ui.dispatcher.hovered(), Some(ui.check));
    assert_eq!(ui.state(ui.check), State::Highlighted);
}

#[test]
fn scroll_bar_drags_from_press_offset() {
    let mut ui = ui();
    assert!(ui.press(50.0, 60.0));
    assert_eq!(ui.state(ui.bar), State::Sunken);
    ui.move_to(50.0, 70.0);
    ui.move_to(55.0, 75.4);
    assert!(ui.release(55.0, 75.4));
    let bar = ui.graph.widget_as::<ScrollBar>(ui.bar).unwrap();
    assert_eq!(bar.scroll_offset(), 15);
    assert_eq!(bar.state(), State::Normal);

    // The second drag starts from the current offset
    assert!(ui.press(50.0, 100.0));
    ui.move_to(50.0, 95.0);
    assert!(ui.release(50.0, 95.0));
    assert_eq!(ui.graph.widget_as::<ScrollBar>(ui.bar).unwrap().scroll_offset(), 10);

    // Drags continue outside the bar
    assert!(ui.press(50.0, 100.0));
    ui.move_to(300.0, 300.0);
    assert_eq!(ui.graph.widget_as::<ScrollBar>(ui.bar).unwrap().scroll_offset(), 210);
    let _ = ui.release(300.0, 300.0);
}

#[test]
fn number_slider_drag_and_click() {
    let mut ui = ui();
    assert!(ui.press(10.0, 160.0));
    ui.move_to(60.0, 165.0);
    assert!(ui.release(60.0, 165.0));
    let slider = ui.graph.widget_as::<NumberSlider>(ui.slider).unwrap();
    assert_eq!(slider.value(), 5.0);
    assert!(!slider.is_text_editing());
    assert_eq!(*ui.changes.borrow(), [5.0]);

    // Dragging past the end clamps
    assert!(ui.press(10.0, 160.0));
    ui.move_to(500.0, 160.0);
    assert!(ui.release(500.0, 160.0));
    assert_eq!(ui.graph.widget_as::<NumberSlider>(ui.slider).unwrap().value(), 10.0);

    // A click without drag starts editing
    assert!(ui.press(30.0, 160.0));
    assert!(ui.release(30.0, 160.0));
    let slider = ui.graph.widget_as_mut::<NumberSlider>(ui.slider).unwrap();
    assert!(slider.is_text_editing());
    assert!(slider.commit_text("nonsense").is_err());
    assert!(slider.is_text_editing());
    slider.commit_text(" 2.5 ").unwrap();
    assert!(!slider.is_text_editing());
    assert_eq!(slider.value(), 2.5);
    assert_eq!(*ui.changes.borrow(), [5.0, 10.0, 2.5]);
}

#[test]
fn removed_widgets_are_forgotten() {
    let mut ui = ui();
    ui.move_to(50.0, 30.0);
    assert!(ui.press(50.0, 30.0));
    assert!(ui.graph.remove(ui.push));
    ui.dispatcher.sync(&ui.graph);
    assert_eq!(ui.dispatcher.hovered(), None);
    assert_eq!(ui.dispatcher.pressed(), None);

    ui.graph.resolve_layout(Rectangle::new(0, 100, 0, 400), 1.0);
    ui.move_to(50.0, 30.0);
    assert_eq!(ui.dispatcher.hovered(), Some(ui.bar));
}
