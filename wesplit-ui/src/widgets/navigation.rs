//! Navigation container

use crate::core::{BoxedWidget, Node, TitleDisplayMode, Widget};
use crate::layout::{LayoutNode, Rect};
use crate::render::Painter;
use crate::style::Style;

const INLINE_BAR_HEIGHT: f32 = 44.0;
const LARGE_BAR_HEIGHT: f32 = 96.0;

/// Titled root container; the title bar sits above its children
pub struct NavigationStack {
    style: Style,
    title: String,
    display_mode: TitleDisplayMode,
    children: Vec<BoxedWidget>,
}

impl NavigationStack {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            style: Style::new().flex_grow(1.0),
            title: title.into(),
            display_mode: TitleDisplayMode::default(),
            children: Vec::new(),
        }
        .display_mode(TitleDisplayMode::default())
    }

    pub fn display_mode(mut self, mode: TitleDisplayMode) -> Self {
        self.display_mode = mode;
        self.style.padding.top = match mode {
            TitleDisplayMode::Inline => INLINE_BAR_HEIGHT,
            TitleDisplayMode::Large => LARGE_BAR_HEIGHT,
        };
        self
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Widget for NavigationStack {
    fn style(&self) -> &Style { &self.style }

    fn describe(&self) -> Node {
        Node::NavigationStack {
            title: self.title.clone(),
            display_mode: self.display_mode,
            children: self.children.iter().map(|c| c.describe()).collect(),
        }
    }

    fn children(&self) -> &[BoxedWidget] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [BoxedWidget] {
        &mut self.children
    }

    fn paint(&self, frame: &LayoutNode, painter: &mut Painter<'_>) {
        let theme = painter.theme().clone();
        painter.rect(frame.bounds(), theme.background);

        let bar = Rect::new(frame.x, frame.y, frame.width, self.style.padding.top);
        painter.rect(bar, theme.bar);
        painter.line(
            (bar.x, bar.y + bar.height),
            (bar.x + bar.width, bar.y + bar.height),
            theme.separator,
            0.5,
        );

        match self.display_mode {
            TitleDisplayMode::Inline => {
                let size = theme.title_size;
                let estimated = self.title.chars().count() as f32 * size * 0.6;
                let x = bar.x + (bar.width - estimated) / 2.0;
                let y = bar.y + (bar.height - size) / 2.0;
                painter.text(x, y, self.title.as_str(), size, theme.text);
            }
            TitleDisplayMode::Large => {
                let size = theme.large_title_size;
                let x = bar.x + theme.spacing;
                let y = bar.y + bar.height - size - 8.0;
                painter.text(x, y, self.title.as_str(), size, theme.text);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Context;
    use crate::layout::LayoutEngine;
    use crate::render::{Primitive, RenderList};
    use crate::widgets::Button;

    #[test]
    fn test_inline_bar_is_compact() {
        let ctx = Context::new(390.0, 800.0);
        let nav = NavigationStack::new("SwiftUI")
            .display_mode(TitleDisplayMode::Inline)
            .child(Button::new("Tap"));
        let frame = LayoutEngine::new().compute(&nav, &ctx).unwrap();
        assert_eq!(frame.children[0].y, INLINE_BAR_HEIGHT);

        let large = NavigationStack::new("SwiftUI").child(Button::new("Tap"));
        let frame = LayoutEngine::new().compute(&large, &ctx).unwrap();
        assert_eq!(frame.children[0].y, LARGE_BAR_HEIGHT);
    }

    #[test]
    fn test_inline_title_is_centred_in_bar() {
        let ctx = Context::new(390.0, 800.0);
        let nav = NavigationStack::new("SwiftUI").display_mode(TitleDisplayMode::Inline);
        let mut list = RenderList::new();
        nav.paint(&LayoutNode::new(0, 390.0, 800.0), &mut Painter::new(&mut list, &ctx));

        let title = list.primitives.iter().find_map(|p| match p {
            Primitive::Text { x, y, text, size, .. } if text == "SwiftUI" => Some((*x, *y, *size)),
            _ => None,
        });
        let (x, y, size) = title.unwrap();
        assert!(x > 0.0 && x < 195.0);
        assert!(y + size <= INLINE_BAR_HEIGHT);
        assert_eq!(size, ctx.theme.title_size);
    }
}
