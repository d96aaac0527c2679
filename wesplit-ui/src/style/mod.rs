//! Layout style for WeSplit UI widgets
//!
//! Every widget is a column that stretches its children; a style only
//! chooses how much free space the widget takes and how far its content is
//! inset.

/// Flexbox properties of one widget
#[derive(Debug, Clone, Default)]
pub struct Style {
    pub flex_grow: f32,
    pub padding: EdgeInsets,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flex_grow(mut self, grow: f32) -> Self {
        self.flex_grow = grow;
        self
    }

    pub fn padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl EdgeInsets {
    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self { top: vertical, right: horizontal, bottom: vertical, left: horizontal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_take_no_space_and_no_inset() {
        let style = Style::new();
        assert_eq!(style.flex_grow, 0.0);
        assert_eq!(style.padding, EdgeInsets::default());
    }

    #[test]
    fn test_symmetric_insets() {
        let style = Style::new().flex_grow(1.0).padding(EdgeInsets::symmetric(16.0, 20.0));
        assert_eq!(style.flex_grow, 1.0);
        assert_eq!((style.padding.left, style.padding.right), (16.0, 16.0));
        assert_eq!((style.padding.top, style.padding.bottom), (20.0, 20.0));
    }
}
