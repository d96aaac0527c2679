//! Single-selection picker

use crate::core::{Binding, BoxedWidget, Context, Event, MouseButton, Node, Theme, Widget};
use crate::layout::LayoutNode;
use crate::render::Painter;
use crate::style::Style;
use crate::widgets::Text;
use glam::Vec2;

/// Inline picker: a label row followed by one row per option
///
/// The options are the only values it can write through its binding; each is
/// identified by its key, which is also the text shown for it.
pub struct Picker<T: Clone + PartialEq + Send + Sync + 'static> {
    style: Style,
    label: String,
    selection: Binding<T>,
    selected: T,
    values: Vec<T>,
    keys: Vec<String>,
    rows: Vec<BoxedWidget>,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Picker<T> {
    pub fn new(
        label: impl Into<String>,
        selection: Binding<T>,
        options: impl IntoIterator<Item = T>,
        key: impl Fn(&T) -> String,
    ) -> Self {
        let label = label.into();
        let selected = selection.get();
        let values: Vec<T> = options.into_iter().collect();
        let keys: Vec<String> = values.iter().map(&key).collect();

        let mut rows: Vec<BoxedWidget> = Vec::with_capacity(values.len() + 1);
        rows.push(Box::new(Text::new(label.clone())));
        for (value, key) in values.iter().zip(&keys) {
            rows.push(Box::new(OptionRow {
                style: Style::new(),
                label: key.clone(),
                selected: *value == selected,
            }));
        }

        Self {
            style: Style::new(),
            label,
            selection,
            selected,
            values,
            keys,
            rows,
        }
    }

    pub fn selected(&self) -> &T {
        &self.selected
    }

    /// Index of the option row under `p`
    fn option_at(&self, frame: &LayoutNode, p: Vec2) -> Option<usize> {
        frame
            .children
            .iter()
            .skip(1)
            .position(|row| row.contains_point(p))
    }
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Widget for Picker<T> {
    fn style(&self) -> &Style { &self.style }

    fn describe(&self) -> Node {
        let selection = self
            .values
            .iter()
            .position(|v| *v == self.selected)
            .map(|i| self.keys[i].clone())
            .unwrap_or_default();
        Node::Picker {
            label: self.label.clone(),
            selection,
            options: self.keys.clone(),
        }
    }

    fn children(&self) -> &[BoxedWidget] {
        &self.rows
    }

    fn children_mut(&mut self) -> &mut [BoxedWidget] {
        &mut self.rows
    }

    fn child_key(&self, index: usize) -> Option<&str> {
        // Row 0 is the label; option rows are keyed
        index.checked_sub(1).and_then(|i| self.keys.get(i)).map(String::as_str)
    }

    fn on_event(&mut self, event: &Event, frame: &LayoutNode, ctx: &mut Context) -> bool {
        match event {
            Event::MouseDown { x, y, button: MouseButton::Left } => {
                if self.option_at(frame, Vec2::new(*x, *y)).is_none() {
                    return false;
                }
                ctx.press(frame.id);
                true
            }
            Event::MouseUp { x, y, button: MouseButton::Left } => {
                if !ctx.is_pressed(frame.id) {
                    return false;
                }
                let Some(index) = self.option_at(frame, Vec2::new(*x, *y)) else {
                    return false;
                };
                let choice = self.values[index].clone();
                if choice != self.selected {
                    tracing::debug!(option = %self.keys[index], "picker selection changed");
                    self.selected = choice.clone();
                    self.selection.set(choice);
                }
                true
            }
            _ => false,
        }
    }
}

/// One selectable row; shows a checkmark when selected
struct OptionRow {
    style: Style,
    label: String,
    selected: bool,
}

impl Widget for OptionRow {
    fn style(&self) -> &Style { &self.style }

    fn describe(&self) -> Node {
        Node::Text { content: self.label.clone() }
    }

    fn measure(&self, theme: &Theme) -> Option<f32> {
        Some(theme.row_height)
    }

    fn paint(&self, frame: &LayoutNode, painter: &mut Painter<'_>) {
        let theme = painter.theme().clone();
        painter.row_text(frame.bounds(), self.label.as_str(), theme.text);
        if self.selected {
            painter.trailing_text(frame.bounds(), "✓", theme.primary);
        }
    }

    fn locate(&self, text: &str, frame: &LayoutNode) -> Option<Vec2> {
        (text == self.label).then(|| frame.bounds().center())
    }
}
