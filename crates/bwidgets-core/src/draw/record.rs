// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! A paint engine which records calls

use super::{Color, DrawType, Icon, PaintEngine, PainterState, TextAlignment};
use crate::geom::{Point, Polygon, Rectangle};

/// A recorded paint call
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    SetupViewport {
        rect: Rectangle,
        clear_color: Color,
    },
    EnableMask(Rectangle),
    Polygon {
        draw_type: DrawType,
        color: Color,
        /// Per-vertex colours; empty without gradient
        vertex_colors: Vec<Color>,
        vertices: Vec<Point>,
    },
    Text {
        text: String,
        rect: Rectangle,
        alignment: TextAlignment,
        color: Color,
    },
    Icon {
        rect: Rectangle,
        color: Color,
    },
}

/// A [`PaintEngine`] which stores every call as a [`PaintCommand`]
///
/// Useful for headless hosts and for testing.
#[derive(Clone, Debug, Default)]
pub struct RecordingEngine {
    commands: Vec<PaintCommand>,
}

impl RecordingEngine {
    /// Construct an empty recorder
    pub fn new() -> Self {
        RecordingEngine::default()
    }

    /// Recorded commands, in call order
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take recorded commands, leaving the recorder empty
    pub fn take(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Iterate over recorded text
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            PaintCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of recorded polygons
    pub fn polygon_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PaintCommand::Polygon { .. }))
            .count()
    }
}

impl PaintEngine for RecordingEngine {
    fn setup_viewport(&mut self, rect: &Rectangle, clear_color: Color) {
        self.commands.push(PaintCommand::SetupViewport {
            rect: *rect,
            clear_color,
        });
    }

    fn enable_mask(&mut self, rect: &Rectangle) {
        self.commands.push(PaintCommand::EnableMask(*rect));
    }

    fn draw_polygon(&mut self, state: &PainterState, polygon: &Polygon) {
        let vertex_colors = if state.is_gradient_enabled() {
            (0..polygon.len()).map(|i| state.vertex_color(i)).collect()
        } else {
            vec![]
        };
        self.commands.push(PaintCommand::Polygon {
            draw_type: state.draw_type(),
            color: state.active_color(),
            vertex_colors,
            vertices: polygon.vertices().to_vec(),
        });
    }

    fn draw_text(
        &mut self,
        state: &PainterState,
        text: &str,
        rect: &Rectangle,
        alignment: TextAlignment,
    ) {
        self.commands.push(PaintCommand::Text {
            text: text.to_string(),
            rect: *rect,
            alignment,
            color: state.active_color(),
        });
    }

    fn draw_icon(&mut self, state: &PainterState, _: &dyn Icon, rect: &Rectangle) {
        self.commands.push(PaintCommand::Icon {
            rect: *rect,
            color: state.active_color(),
        });
    }
}
