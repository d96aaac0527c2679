//! Text entry widget

use crate::core::{Binding, Context, Event, Key, MouseButton, Node, Theme, Widget};
use crate::layout::{LayoutNode, Rect};
use crate::render::Painter;
use crate::style::Style;
use glam::Vec2;

/// Single-line text field bound two-way to a string
///
/// Every edit pushes the full new contents through the binding.
pub struct TextField {
    style: Style,
    placeholder: String,
    text: Binding<String>,
    value: String,
}

impl TextField {
    pub fn new(placeholder: impl Into<String>, text: Binding<String>) -> Self {
        let value = text.get();
        Self {
            style: Style::new(),
            placeholder: placeholder.into(),
            text,
            value,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn commit(&mut self) {
        self.text.set(self.value.clone());
    }
}

impl Widget for TextField {
    fn style(&self) -> &Style { &self.style }

    fn describe(&self) -> Node {
        Node::TextField {
            placeholder: self.placeholder.clone(),
            value: self.value.clone(),
        }
    }

    fn measure(&self, theme: &Theme) -> Option<f32> {
        Some(theme.row_height)
    }

    fn on_event(&mut self, event: &Event, frame: &LayoutNode, ctx: &mut Context) -> bool {
        if let Event::MouseDown { button: MouseButton::Left, .. } = event {
            ctx.focus(frame.id);
            return true;
        }
        if !ctx.is_focused(frame.id) {
            return false;
        }

        match event {
            Event::TextInput { text } => {
                let accepted: String = text.chars().filter(|c| !c.is_control()).collect();
                if accepted.is_empty() {
                    return false;
                }
                self.value.push_str(&accepted);
                self.commit();
                true
            }
            Event::KeyDown { key: Key::Backspace, .. } => {
                if self.value.pop().is_some() {
                    self.commit();
                }
                true
            }
            Event::KeyDown { key: Key::Enter | Key::Escape, .. } => {
                ctx.blur();
                true
            }
            _ => false,
        }
    }

    fn paint(&self, frame: &LayoutNode, painter: &mut Painter<'_>) {
        let theme = painter.theme().clone();
        if self.value.is_empty() {
            painter.row_text(frame.bounds(), self.placeholder.as_str(), theme.text_secondary);
        } else {
            painter.row_text(frame.bounds(), self.value.as_str(), theme.text);
        }

        if painter.ctx().is_focused(frame.id) {
            let advance = self.value.chars().count() as f32 * theme.font_size * 0.55;
            let caret = Rect::new(
                frame.x + theme.spacing + advance + 1.0,
                frame.y + (frame.height - theme.font_size * 1.2) / 2.0,
                2.0,
                theme.font_size * 1.2,
            );
            painter.rect(caret, theme.primary);
        }
    }

    fn locate(&self, text: &str, frame: &LayoutNode) -> Option<Vec2> {
        let shown = if self.value.is_empty() { &self.placeholder } else { &self.value };
        (text == shown).then(|| frame.bounds().center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Modifiers, State};
    use crate::render::RenderList;

    fn focused_field(name: &State<String>) -> (TextField, LayoutNode, Context) {
        let mut field = TextField::new("Enter your name", name.binding());
        let frame = LayoutNode::new(9, 300.0, 44.0);
        let mut ctx = Context::new(300.0, 100.0);
        field.on_event(&Event::MouseDown { x: 1.0, y: 1.0, button: MouseButton::Left }, &frame, &mut ctx);
        (field, frame, ctx)
    }

    fn key(key: Key) -> Event {
        Event::KeyDown { key, modifiers: Modifiers::default() }
    }

    #[test]
    fn test_typing_updates_binding() {
        let name = State::new(String::new());
        let (mut field, frame, mut ctx) = focused_field(&name);
        assert!(ctx.is_focused(9));

        for ch in ["L", "u", "n", "a"] {
            field.on_event(&Event::TextInput { text: ch.into() }, &frame, &mut ctx);
        }
        assert_eq!(name.get(), "Luna");

        field.on_event(&key(Key::Backspace), &frame, &mut ctx);
        assert_eq!(name.get(), "Lun");
        assert_eq!(field.value(), "Lun");
    }

    #[test]
    fn test_unfocused_field_ignores_text() {
        let name = State::new(String::new());
        let mut field = TextField::new("Enter your name", name.binding());
        let frame = LayoutNode::new(9, 300.0, 44.0);
        let mut ctx = Context::new(300.0, 100.0);
        assert!(!field.on_event(&Event::TextInput { text: "x".into() }, &frame, &mut ctx));
        assert_eq!(name.get(), "");
    }

    #[test]
    fn test_backspace_on_empty_keeps_empty() {
        let name = State::new(String::new());
        let (mut field, frame, mut ctx) = focused_field(&name);
        assert!(field.on_event(&key(Key::Backspace), &frame, &mut ctx));
        assert_eq!(name.get(), "");
    }

    #[test]
    fn test_enter_blurs() {
        let name = State::new(String::new());
        let (mut field, frame, mut ctx) = focused_field(&name);
        field.on_event(&key(Key::Enter), &frame, &mut ctx);
        assert_eq!(ctx.focused(), None);
    }

    #[test]
    fn test_control_characters_are_dropped() {
        let name = State::new(String::new());
        let (mut field, frame, mut ctx) = focused_field(&name);
        assert!(!field.on_event(&Event::TextInput { text: "\r".into() }, &frame, &mut ctx));
        field.on_event(&Event::TextInput { text: "a\u{8}b".into() }, &frame, &mut ctx);
        assert_eq!(name.get(), "ab");
    }

    #[test]
    fn test_placeholder_shown_when_empty() {
        let name = State::new(String::new());
        let field = TextField::new("Enter your name", name.binding());
        let ctx = Context::new(300.0, 100.0);
        let mut list = RenderList::new();
        field.paint(&LayoutNode::new(9, 300.0, 44.0), &mut Painter::new(&mut list, &ctx));
        assert_eq!(list.texts(), vec!["Enter your name"]);
    }
}
