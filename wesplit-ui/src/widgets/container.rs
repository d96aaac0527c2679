//! Container widgets (Form, Section)

use crate::core::{BoxedWidget, Context, Event, Node, Widget};
use crate::layout::{LayoutNode, Rect};
use crate::render::Painter;
use crate::style::{EdgeInsets, Style};

/// Grouped rows that scroll vertically when they outgrow the frame
pub struct Form {
    style: Style,
    children: Vec<BoxedWidget>,
}

impl Form {
    pub fn new() -> Self {
        Self {
            style: Style::new()
                .flex_grow(1.0)
                .padding(EdgeInsets::symmetric(16.0, 20.0)),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Form {
    fn style(&self) -> &Style { &self.style }

    fn describe(&self) -> Node {
        Node::Form { children: self.children.iter().map(|c| c.describe()).collect() }
    }

    fn children(&self) -> &[BoxedWidget] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [BoxedWidget] {
        &mut self.children
    }

    fn scrolls(&self) -> bool {
        true
    }

    fn on_event(&mut self, event: &Event, frame: &LayoutNode, ctx: &mut Context) -> bool {
        match event {
            // Positive deltas move the content down, towards its top
            Event::Scroll { delta_y, .. } => ctx.scroll_by(frame.id, -delta_y, frame.max_scroll()),
            _ => false,
        }
    }

    fn paint(&self, frame: &LayoutNode, painter: &mut Painter<'_>) {
        let theme = painter.theme().clone();
        painter.rect(frame.bounds(), theme.background);

        let (Some(first), Some(last)) = (frame.children.first(), frame.children.last()) else {
            return;
        };
        let group = Rect::new(
            first.x,
            first.y,
            first.width,
            last.y + last.height - first.y,
        );
        painter.clipped(frame.bounds(), |painter| {
            painter.rect(group, theme.surface);
        });
    }
}

/// A group of rows laid out below the preceding content
pub struct Section {
    style: Style,
    children: Vec<BoxedWidget>,
}

impl Section {
    pub fn new() -> Self {
        Self {
            style: Style::new().flex_grow(1.0),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: impl Widget + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }
}

impl Default for Section {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Section {
    fn style(&self) -> &Style { &self.style }

    fn describe(&self) -> Node {
        Node::Section { children: self.children.iter().map(|c| c.describe()).collect() }
    }

    fn children(&self) -> &[BoxedWidget] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [BoxedWidget] {
        &mut self.children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutEngine;
    use crate::render::RenderList;
    use crate::widgets::{ForEach, Text};

    #[test]
    fn test_form_scrolls_within_bounds() {
        let rows = ForEach::new(0..100, |i: &usize| *i, |i: &usize| Text::new(format!("Row {i}")));
        let mut form = Form::new().child(rows);
        let mut ctx = Context::new(300.0, 400.0);
        let frame = LayoutEngine::new().compute(&form, &ctx).unwrap();

        assert!(!form.on_event(&Event::Scroll { delta_x: 0.0, delta_y: 10.0 }, &frame, &mut ctx));
        assert!(form.on_event(&Event::Scroll { delta_x: 0.0, delta_y: -120.0 }, &frame, &mut ctx));
        assert_eq!(ctx.scroll_offset(frame.id), 120.0);

        form.on_event(&Event::Scroll { delta_x: 0.0, delta_y: -1.0e6 }, &frame, &mut ctx);
        assert_eq!(ctx.scroll_offset(frame.id), frame.max_scroll());
    }

    #[test]
    fn test_section_describes_children_and_paints_nothing() {
        let section = Section::new().child(Text::new("Ron"));
        assert_eq!(
            section.describe(),
            Node::Section { children: vec![Node::Text { content: "Ron".into() }] }
        );

        let ctx = Context::new(300.0, 400.0);
        let mut list = RenderList::new();
        section.paint(&LayoutNode::new(1, 300.0, 100.0), &mut Painter::new(&mut list, &ctx));
        assert!(list.primitives.is_empty());
    }
}
