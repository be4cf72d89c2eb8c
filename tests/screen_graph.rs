use bwidgets::draw::{PaintCommand, RecordingEngine};
use bwidgets::graph::{Builder, EventDispatcher, NodeKind, ScreenGraph};
use bwidgets::layout::{ColumnLayout, RowLayout};
use bwidgets::theme::{BlenderThemeStyle, Corners};
use bwidgets::widgets::{Label, Panel, PushButton, ScrollBar};
use bwidgets::{Widget, geom::Point, geom::Rectangle};

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn children_point_back_to_layout() {
    init_log();
    let mut graph = ScreenGraph::new(ColumnLayout::default());
    let mut builder = Builder::new(&mut graph);
    let layout = builder.add_layout(RowLayout::new(true));
    let ids: Vec<_> = (0..4)
        .map(|i| builder.add_widget(PushButton::new(format!("Button {i}"))))
        .collect();

    assert_eq!(graph.children(layout.node()), ids.as_slice());
    for (i, id) in ids.iter().enumerate() {
        let node = graph.node(*id).unwrap();
        assert_eq!(node.kind(), NodeKind::Widget);
        assert_eq!(node.parent(), Some(layout.node()));
        assert_eq!(node.handler().unwrap().widget(), *id);
        let button = graph.widget_as::<PushButton>(*id).unwrap();
        assert_eq!(button.label(), Some(format!("Button {i}").as_str()));
    }
}

#[test]
fn hit_test_matches_rectangle() {
    let mut graph = ScreenGraph::new(ColumnLayout::default());
    let id = Builder::new(&mut graph).add_widget(Label::new("text"));
    graph.resolve_layout(Rectangle::new(10, 60, 5, 100), 1.0);

    let widget = graph.widget(id).unwrap();
    let rect = widget.rectangle();
    assert_eq!(rect, Rectangle::new(10, 60, 5, 25));
    for x in [9.0, 9.9, 10.0, 35.5, 59.9, 60.0, 61.0] {
        for y in [4.0, 5.0, 15.0, 24.9, 25.0, 30.0] {
            let p = Point::new(x, y);
            assert_eq!(widget.is_coordinate_inside(p), rect.contains(p), "{p:?}");
        }
    }
}

#[test]
fn aligned_buttons_resolve_corners() {
    let mut graph = ScreenGraph::new(RowLayout::new(true));
    let mut builder = Builder::new(&mut graph);
    let a = builder.add_widget(PushButton::new("A"));
    let b = builder.add_widget(PushButton::new("B"));
    let c = builder.add_widget(PushButton::new("C"));
    let bar = builder.add_widget(ScrollBar::new(None, None));

    let area = Rectangle::new(0, 304, 0, 20);
    graph.resolve_layout(area, 1.0);
    let mut engine = RecordingEngine::new();
    graph.draw(&BlenderThemeStyle::default(), &mut engine, &area);

    let corners = |id| {
        graph
            .widget(id)
            .and_then(|w| w.base_style())
            .map(|base| base.roundbox_corners)
    };
    assert_eq!(corners(a), Some(Corners::LEFT));
    assert_eq!(corners(b), Some(Corners::empty()));
    assert_eq!(corners(c), Some(Corners::RIGHT));
    assert_eq!(corners(bar), Some(Corners::ALL));

    let ra = graph.widget(a).unwrap().rectangle();
    let rb = graph.widget(b).unwrap().rectangle();
    let rc = graph.widget(c).unwrap().rectangle();
    assert_eq!(ra.xmax, rb.xmin);
    assert_eq!(rb.xmax, rc.xmin);
    assert_eq!(graph.widget(bar).unwrap().rectangle().xmin, rc.xmax + 4);
}

#[test]
fn collapsed_panel_hides_children() {
    init_log();
    let mut graph = ScreenGraph::new(ColumnLayout::default());
    let mut builder = Builder::new(&mut graph);
    let root = builder.active_layout();
    let panel = builder.add_container(ColumnLayout::default(), Panel::new("Options", None));
    let inner = builder.add_widget(PushButton::new("Inside"));
    builder.set_active_layout(root);
    let after = builder.add_widget(Label::new("After"));

    let area = Rectangle::new(0, 100, 0, 200);
    let style = BlenderThemeStyle::default();
    graph.resolve_layout(area, 1.0);
    assert_eq!(graph.widget(inner).unwrap().rectangle(), Rectangle::new(0, 100, 20, 40));
    assert_eq!(graph.widget(after).unwrap().rectangle().ymin, 44);

    let mut engine = RecordingEngine::new();
    graph.draw(&style, &mut engine, &area);
    assert_eq!(engine.texts().collect::<Vec<_>>(), ["Options", "Inside", "After"]);
    assert!(matches!(engine.commands()[0], PaintCommand::SetupViewport { .. }));

    // Collapse through input on the header
    let mut dispatcher = EventDispatcher::new();
    let header = Point::new(50.0, 10.0);
    let response = dispatcher.mouse_press(&mut graph, bwidgets::event::MouseButton::Left, header);
    assert!(response.is_used());
    let _ = dispatcher.mouse_release(&mut graph, bwidgets::event::MouseButton::Left, header);
    assert!(!graph.widget_as::<Panel>(panel.node()).unwrap().is_open());

    graph.resolve_layout(area, 1.0);
    assert_eq!(graph.widget(after).unwrap().rectangle().ymin, 24);
    assert_eq!(graph.visible_widgets().len(), 2);
    assert_eq!(graph.find_widget_at(Point::new(50.0, 30.0)), Some(after));

    let mut engine = RecordingEngine::new();
    graph.draw(&style, &mut engine, &area);
    assert_eq!(engine.texts().collect::<Vec<_>>(), ["Options", "After"]);
}

#[test]
fn removing_container_drops_subtree() {
    let mut graph = ScreenGraph::new(ColumnLayout::default());
    let mut builder = Builder::new(&mut graph);
    let panel = builder.add_container(ColumnLayout::default(), Panel::new("P", None));
    let row = builder.add_layout(RowLayout::default());
    let a = builder.add_widget(PushButton::new("A"));
    let b = builder.add_widget(PushButton::new("B"));
    assert_eq!(graph.len(), 5);

    assert!(graph.remove(panel.node()));
    assert_eq!(graph.len(), 1);
    for id in [panel.node(), row.node(), a, b] {
        assert!(!graph.contains(id));
        assert!(graph.widget(id).is_none());
    }
    assert!(graph.children(graph.root().node()).is_empty());
}
