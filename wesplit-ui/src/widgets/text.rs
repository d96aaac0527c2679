//! Text widget

use crate::core::{Node, Theme, Widget};
use crate::layout::LayoutNode;
use crate::render::Painter;
use crate::style::Style;
use glam::Vec2;

/// Read-only text row
pub struct Text {
    style: Style,
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            style: Style::new(),
            content: content.into(),
        }
    }
}

impl Widget for Text {
    fn style(&self) -> &Style { &self.style }

    fn describe(&self) -> Node {
        Node::Text { content: self.content.clone() }
    }

    fn measure(&self, theme: &Theme) -> Option<f32> {
        Some(theme.row_height)
    }

    fn paint(&self, frame: &LayoutNode, painter: &mut Painter<'_>) {
        let color = painter.theme().text;
        painter.row_text(frame.bounds(), self.content.as_str(), color);
    }

    fn locate(&self, text: &str, frame: &LayoutNode) -> Option<Vec2> {
        (text == self.content).then(|| frame.bounds().center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Context;
    use crate::render::RenderList;

    #[test]
    fn test_paint_uses_theme_text_color() {
        let ctx = Context::new(300.0, 100.0);
        let mut list = RenderList::new();
        let frame = LayoutNode::new(1, 300.0, 44.0);
        Text::new("Row 7").paint(&frame, &mut Painter::new(&mut list, &ctx));

        assert_eq!(list.texts(), vec!["Row 7"]);
        assert!(matches!(
            &list.primitives[0],
            crate::render::Primitive::Text { color, .. } if *color == ctx.theme.text
        ));
    }

    #[test]
    fn test_locate_matches_exact_content() {
        let frame = LayoutNode::new(1, 100.0, 40.0);
        let text = Text::new("Row 1");
        assert_eq!(text.locate("Row 1", &frame), Some(Vec2::new(50.0, 20.0)));
        assert_eq!(text.locate("Row 10", &frame), None);
    }
}
