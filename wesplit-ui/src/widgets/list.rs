//! Keyed lists

use crate::core::{BoxedWidget, Node, Widget};
use crate::layout::LayoutNode;
use crate::render::Painter;
use crate::style::Style;

/// One child per item, each identified by a key unique within the list
///
/// Keys give children an identity that follows the item rather than its
/// position; duplicates are rejected when the tree is laid out.
pub struct ForEach {
    style: Style,
    keys: Vec<String>,
    children: Vec<BoxedWidget>,
}

impl ForEach {
    pub fn new<T, K, W>(
        items: impl IntoIterator<Item = T>,
        key: impl Fn(&T) -> K,
        content: impl Fn(&T) -> W,
    ) -> Self
    where
        K: ToString,
        W: Widget + 'static,
    {
        let (keys, children): (Vec<String>, Vec<BoxedWidget>) = items
            .into_iter()
            .map(|item| (key(&item).to_string(), Box::new(content(&item)) as BoxedWidget))
            .unzip();
        Self { style: Style::new(), keys, children }
    }

}

impl Widget for ForEach {
    fn style(&self) -> &Style { &self.style }

    fn describe(&self) -> Node {
        Node::ForEach {
            keys: self.keys.clone(),
            children: self.children.iter().map(|c| c.describe()).collect(),
        }
    }

    fn children(&self) -> &[BoxedWidget] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [BoxedWidget] {
        &mut self.children
    }

    fn child_key(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    fn paint(&self, frame: &LayoutNode, painter: &mut Painter<'_>) {
        let Some((_, rows)) = frame.children.split_last() else { return };
        for row in rows {
            if painter.is_visible(&row.bounds()) {
                painter.separator(row);
            }
        }
    }
}
