use bwidgets::draw::{Color, RecordingEngine, Rgba8};
use bwidgets::event::{Event, EventHandler};
use bwidgets::graph::NodeId;
use bwidgets::theme::{
    BlenderThemeStyle, Corners, PropertyValue, Style, StyleCss, StyleManager, StyleParams,
    StyleSheet, StyleTypeId, ThemeColors, WidgetBaseStyle, property_names,
};
use bwidgets::widgets::{CheckBox, Label, NumberSlider, Panel, PushButton, RadioButton, ScrollBar, TextBox};
use bwidgets::{State, Widget, WidgetCore, draw::PaintEngine, geom::Rectangle};

fn all_widgets() -> Vec<Box<dyn Widget>> {
    let mut widgets: Vec<Box<dyn Widget>> = vec![
        Box::new(PushButton::new("push")),
        Box::new(CheckBox::new("check")),
        Box::new(RadioButton::new("radio")),
        Box::new(ScrollBar::new(None, None)),
        Box::new(TextBox::new(None, None)),
        Box::new(NumberSlider::new("num", 0.0, 1.0)),
        Box::new(Label::new("label")),
        Box::new(Panel::new("panel", None)),
    ];
    for w in &mut widgets {
        w.initialize();
        w.set_rectangle(Rectangle::new(0, 100, 0, 20));
    }
    widgets
}

fn styles() -> Vec<Box<dyn Style>> {
    let manager = StyleManager::with_default_style_types();
    let mut styles = vec![];
    for colors in [ThemeColors::DARK, ThemeColors::CLASSIC] {
        for id in [StyleTypeId::BlenderTheme, StyleTypeId::ClassicCss] {
            let params = StyleParams {
                colors: colors.clone(),
                ..StyleParams::default()
            };
            styles.push(manager.create_style(id, params).unwrap());
        }
    }
    styles
}

#[test]
fn resolution_is_deterministic() {
    for style in styles() {
        for mut widget in all_widgets() {
            for state in [State::Normal, State::Highlighted, State::Sunken] {
                widget.set_state(state);
                style.set_widget_style(widget.as_mut());
                let first = widget.base_style().cloned();
                let props: Vec<_> = widget
                    .core()
                    .style_properties
                    .iter()
                    .map(|(name, p)| (name.to_string(), p.value()))
                    .collect();

                // Drawing must not disturb resolved style
                widget.draw(style.as_ref(), &mut RecordingEngine::new());
                assert_eq!(widget.base_style().cloned(), first);

                style.set_widget_style(widget.as_mut());
                assert_eq!(widget.base_style().cloned(), first, "{}", widget.identifier());
                let again: Vec<_> = widget
                    .core()
                    .style_properties
                    .iter()
                    .map(|(name, p)| (name.to_string(), p.value()))
                    .collect();
                assert_eq!(props, again);
            }
        }
    }
}

#[test]
fn properties_reset_before_resolution() {
    let mut button = PushButton::new("x");
    button.initialize();
    let props = &mut button.core_mut().style_properties;
    assert_eq!(props.len(), 5);
    let names: Vec<String> = props.iter().map(|(name, _)| name.to_string()).collect();
    for name in names {
        let prop = props.lookup_mut(&name).unwrap();
        match prop.value() {
            PropertyValue::Color(_) => prop.set_value(Color::WHITE).unwrap(),
            PropertyValue::Float(_) => prop.set_value(12.0f32).unwrap(),
            other => panic!("unexpected property type {other:?}"),
        }
        assert!(!prop.is_default());
    }
    props.set_all_to_default();
    assert!(props.iter().all(|(_, p)| p.is_default() && p.value() == p.default_value()));
}

#[test]
fn polish_runs_before_reset_and_resolution() {
    let params = StyleParams::default().with_polish(|widget| {
        widget.set_state(State::Highlighted);
        if let Some(prop) = widget.core_mut().style_properties.lookup_mut(property_names::BORDER_RADIUS) {
            let _ = prop.set_value(99.0f32);
        }
    });
    let style = BlenderThemeStyle::new(params);
    let mut button = PushButton::new("x");
    button.initialize();
    style.set_widget_style(&mut button);

    assert_eq!(button.state(), State::Highlighted);
    let radius = button.core().style_properties.lookup(property_names::BORDER_RADIUS).unwrap();
    assert!(radius.is_default());

    let tool = ThemeColors::DARK.tool;
    let mut expected = Color::from(tool.inner);
    expected.shade(15);
    assert_eq!(button.button.base_style.background_color, expected);
}

#[test]
fn sunken_swaps_shades_and_colors() {
    let params = StyleParams {
        colors: ThemeColors::CLASSIC,
        ..StyleParams::default()
    };
    let style = BlenderThemeStyle::new(params);
    let tool = ThemeColors::CLASSIC.tool;

    let mut button = PushButton::new("x");
    button.initialize();
    style.set_widget_style(&mut button);
    let normal = button.button.base_style.clone();
    assert_eq!((normal.shade_top, normal.shade_bottom), (tool.shade_top, tool.shade_bottom));
    assert_eq!(normal.corner_radius, tool.roundness * 20.0);

    button.set_state(State::Sunken);
    style.set_widget_style(&mut button);
    let sunken = &button.button.base_style;
    assert_eq!((sunken.shade_top, sunken.shade_bottom), (tool.shade_bottom, tool.shade_top));
    assert_eq!(sunken.background_color, Color::from(tool.inner_sel));
    assert_eq!(sunken.text_color, Color::from(tool.text_sel));
}

#[test]
fn corner_policy_by_kind() {
    let style = BlenderThemeStyle::default();
    let mut button = PushButton::new("x");
    button.button.rounded_corners = Corners::TOP;
    button.initialize();
    style.set_widget_style(&mut button);
    assert_eq!(button.button.base_style.roundbox_corners, Corners::TOP);

    let mut text = TextBox::new(None, None);
    text.initialize();
    text.base_style.roundbox_corners = Corners::empty();
    style.set_widget_style(&mut text);
    assert_eq!(text.base_style.roundbox_corners, Corners::ALL);

    let mut panel = Panel::new("p", None);
    panel.initialize();
    panel.base_style.roundbox_corners = Corners::LEFT;
    style.set_widget_style(&mut panel);
    assert_eq!(panel.base_style.roundbox_corners, Corners::ALL);
    assert_eq!(panel.base_style.background_color, Color::from(ThemeColors::DARK.panel_back));
    assert_eq!(panel.base_style.border_color, Color::from(Rgba8::grey(114)));
}

/// A widget of a kind no style knows
#[derive(Debug)]
struct Swatch {
    core: WidgetCore,
    base_style: WidgetBaseStyle,
}

#[derive(Debug)]
struct SwatchHandler(NodeId);

impl EventHandler for SwatchHandler {
    fn widget(&self) -> NodeId {
        self.0
    }
    fn on_mouse_enter(&mut self, widget: &mut dyn Widget, _: &mut Event) {
        widget.set_state(State::Highlighted);
    }
}

impl Widget for Swatch {
    fn core(&self) -> &WidgetCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut WidgetCore {
        &mut self.core
    }
    fn draw(&self, _: &dyn Style, _: &mut dyn PaintEngine) {}
    fn create_handler(&self, id: NodeId) -> Box<dyn EventHandler> {
        Box::new(SwatchHandler(id))
    }
    fn base_style(&self) -> Option<&WidgetBaseStyle> {
        Some(&self.base_style)
    }
    fn base_style_mut(&mut self) -> Option<&mut WidgetBaseStyle> {
        Some(&mut self.base_style)
    }
}

#[test]
fn unknown_kind_keeps_base_style() {
    let mut swatch = Swatch {
        core: WidgetCore::new("Swatch", None, None),
        base_style: WidgetBaseStyle {
            background_color: Color::rgb(0.1, 0.2, 0.3),
            roundbox_corners: Corners::BOTTOM,
            ..WidgetBaseStyle::default()
        },
    };
    let before = swatch.base_style.clone();
    for style in styles() {
        swatch.set_state(State::Sunken);
        style.set_widget_style(&mut swatch);
        assert_eq!(swatch.base_style, before);
    }
}

#[test]
fn stylesheet_states() {
    let sheet = StyleSheet::parse(
        "PushButton { background-color: #102030; border-radius: 3 }
         PushButton:hover { background-color: #405060; }
         *:active { color: #FFFFFF; }",
    )
    .unwrap();
    let params = StyleParams {
        stylesheet: Some(sheet),
        ..StyleParams::default()
    };
    let style = StyleCss::new(params);
    let mut button = PushButton::new("x");
    button.initialize();

    style.set_widget_style(&mut button);
    let base = &button.button.base_style;
    assert_eq!(base.background_color, Color::from(Rgba8::parse("102030")));
    assert_eq!(base.corner_radius, 3.0);

    button.set_state(State::Highlighted);
    style.set_widget_style(&mut button);
    assert_eq!(button.button.base_style.background_color, Color::from(Rgba8::parse("405060")));

    button.set_state(State::Sunken);
    style.set_widget_style(&mut button);
    let base = &button.button.base_style;
    assert_eq!(base.background_color, Color::from(Rgba8::parse("102030")));
    assert_eq!(base.text_color, Color::WHITE);
}

#[test]
fn classic_sheet_styles_label() {
    let style = StyleCss::default();
    let mut label = Label::new("x");
    label.initialize();
    let color = label
        .core_mut()
        .style_properties
        .lookup_mut(property_names::TEXT_COLOR)
        .unwrap();
    color.set_value(Color::WHITE).unwrap();
    style.set_widget_style(&mut label);
    assert_eq!(label.text_color(), Color::BLACK);
}

#[test]
fn styles_from_config() {
    use bwidgets::config::Config;

    let mut config = Config::default();
    config.style = StyleTypeId::BlenderTheme;
    config.dpi_factor = 2.0;
    config.theme.set_active_scheme("classic");

    let manager = StyleManager::with_default_style_types();
    assert_eq!(manager.style_types().len(), 2);
    let style = manager
        .create_style(config.style, StyleParams::from_config(&config))
        .unwrap();
    assert_eq!(style.style_type(), StyleTypeId::BlenderTheme);
    assert_eq!(style.dpi_factor(), 2.0);
    assert_eq!(style.clear_color(), Color::from(ThemeColors::CLASSIC.background));

    config.style = StyleTypeId::ClassicCss;
    config.stylesheet = "Checkbox { background-color: #FF0000 }".to_string();
    let style = manager
        .create_style(config.style, StyleParams::from_config(&config))
        .unwrap();
    let mut check = CheckBox::new("c");
    check.initialize();
    style.set_widget_style(&mut check);
    assert_eq!(check.button.base_style.background_color, Color::rgb(1.0, 0.0, 0.0));

    // An invalid sheet is replaced by the built-in sheet
    config.stylesheet = "Checkbox {".to_string();
    let params = StyleParams::from_config(&config);
    assert!(params.stylesheet.is_none());
    let style = manager.create_style(config.style, params).unwrap();
    style.set_widget_style(&mut check);
    assert_eq!(check.button.base_style.background_color, Color::from(Rgba8::parse("999999")));

    assert!(StyleManager::new().create_style(StyleTypeId::ClassicCss, StyleParams::default()).is_none());
}
