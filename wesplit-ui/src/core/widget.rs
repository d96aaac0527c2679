//! Widget trait and core widget types

use crate::core::{Context, Event, Node, Theme};
use crate::layout::LayoutNode;
use crate::render::Painter;
use crate::style::Style;
use glam::Vec2;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Identity of a widget across rebuilds
///
/// Derived from the path from the root: each step is either the child's
/// index or, inside keyed lists, the child's key.
pub type WidgetId = u64;

/// The id of the root widget
pub const ROOT_ID: WidgetId = 0;

/// One step of the path from the root to a widget
#[derive(Debug, Clone, Copy, Hash)]
pub enum Segment<'a> {
    Index(usize),
    Key(&'a str),
}

/// Id of the child reached from `parent` through `segment`
pub fn child_id(parent: WidgetId, segment: Segment<'_>) -> WidgetId {
    let mut hasher = DefaultHasher::new();
    parent.hash(&mut hasher);
    segment.hash(&mut hasher);
    hasher.finish()
}

/// Core trait that all UI components implement
pub trait Widget: Send + Sync {
    /// Get the widget's style
    fn style(&self) -> &Style;

    /// Serializable description of this widget and its children
    fn describe(&self) -> Node;

    /// Child widgets, in layout order
    fn children(&self) -> &[BoxedWidget] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [BoxedWidget] {
        &mut []
    }

    /// Explicit identity key of the child at `index`
    fn child_key(&self, index: usize) -> Option<&str> {
        let _ = index;
        None
    }

    /// Fixed height for leaf widgets, resolved against the theme
    fn measure(&self, theme: &Theme) -> Option<f32> {
        let _ = theme;
        None
    }

    /// Whether this widget scrolls its children vertically
    fn scrolls(&self) -> bool {
        false
    }

    /// Handle events (clicks, keyboard, etc.)
    fn on_event(&mut self, event: &Event, frame: &LayoutNode, ctx: &mut Context) -> bool {
        let _ = (event, frame, ctx);
        false // Not handled by default
    }

    /// Draw this widget (not its children) into the painter
    fn paint(&self, frame: &LayoutNode, painter: &mut Painter<'_>) {
        let _ = (frame, painter);
    }

    /// Centre of the part of this widget that shows `text`
    fn locate(&self, text: &str, frame: &LayoutNode) -> Option<Vec2> {
        let _ = (text, frame);
        None
    }
}

/// A boxed widget for dynamic dispatch
pub type BoxedWidget = Box<dyn Widget>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable_per_path() {
        let a = child_id(ROOT_ID, Segment::Index(1));
        let b = child_id(ROOT_ID, Segment::Index(1));
        assert_eq!(a, b);
        assert_ne!(a, child_id(ROOT_ID, Segment::Index(2)));
        assert_ne!(child_id(a, Segment::Key("Ron")), child_id(a, Segment::Key("Harry")));
    }

    #[test]
    fn test_key_and_index_segments_differ() {
        assert_ne!(
            child_id(ROOT_ID, Segment::Index(0)),
            child_id(ROOT_ID, Segment::Key("0"))
        );
    }
}
