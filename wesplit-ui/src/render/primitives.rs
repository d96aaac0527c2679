//! Render primitives

use crate::core::context::Color;
use crate::layout::Rect;

/// A drawable primitive; `clip` limits it to a region of the window
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
        clip: Option<Rect>,
    },
    Text {
        x: f32,
        y: f32,
        text: String,
        size: f32,
        color: Color,
        clip: Option<Rect>,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
        width: f32,
        clip: Option<Rect>,
    },
}

/// Render command list
#[derive(Debug, Default)]
pub struct RenderList {
    pub primitives: Vec<Primitive>,
}

impl RenderList {
    pub fn new() -> Self {
        Self { primitives: Vec::new() }
    }

    pub fn rect(&mut self, bounds: Rect, color: Color, clip: Option<Rect>) {
        self.primitives.push(Primitive::Rect {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            color,
            clip,
        });
    }

    pub fn text(&mut self, x: f32, y: f32, text: String, size: f32, color: Color, clip: Option<Rect>) {
        self.primitives.push(Primitive::Text { x, y, text, size, color, clip });
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Color, width: f32, clip: Option<Rect>) {
        self.primitives.push(Primitive::Line {
            x1: from.0,
            y1: from.1,
            x2: to.0,
            y2: to.1,
            color,
            width,
            clip,
        });
    }

    /// Strings of all text primitives, in paint order
    pub fn texts(&self) -> Vec<&str> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}
