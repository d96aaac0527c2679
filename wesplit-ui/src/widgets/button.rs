//! Button widget

use crate::core::{Context, Event, MouseButton, Node, Theme, Widget};
use crate::layout::LayoutNode;
use crate::render::Painter;
use crate::style::Style;
use glam::Vec2;
use std::sync::Arc;

/// Callback type for button clicks
pub type OnClick = Arc<dyn Fn() + Send + Sync>;

/// Tappable row; fires when pressed and released inside its frame
pub struct Button {
    style: Style,
    label: String,
    on_click: Option<OnClick>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            style: Style::new(),
            label: label.into(),
            on_click: None,
        }
    }

    pub fn on_click<F: Fn() + Send + Sync + 'static>(mut self, handler: F) -> Self {
        self.on_click = Some(Arc::new(handler));
        self
    }
}

impl Widget for Button {
    fn style(&self) -> &Style { &self.style }

    fn describe(&self) -> Node {
        Node::Button { label: self.label.clone() }
    }

    fn measure(&self, theme: &Theme) -> Option<f32> {
        Some(theme.row_height)
    }

    fn on_event(&mut self, event: &Event, frame: &LayoutNode, ctx: &mut Context) -> bool {
        match event {
            Event::MouseDown { button: MouseButton::Left, .. } => {
                ctx.press(frame.id);
                true
            }
            Event::MouseUp { x, y, button: MouseButton::Left } => {
                if !ctx.is_pressed(frame.id) || !frame.contains_point(Vec2::new(*x, *y)) {
                    return false;
                }
                if let Some(ref handler) = self.on_click {
                    handler();
                }
                true
            }
            _ => false,
        }
    }

    fn paint(&self, frame: &LayoutNode, painter: &mut Painter<'_>) {
        let color = painter.theme().primary;
        if painter.ctx().is_pressed(frame.id) {
            let highlight = painter.theme().separator;
            painter.rect(frame.bounds(), highlight);
        }
        painter.row_text(frame.bounds(), self.label.as_str(), color);
    }

    fn locate(&self, text: &str, frame: &LayoutNode) -> Option<Vec2> {
        (text == self.label).then(|| frame.bounds().center())
    }
}
