//! Event system for WeSplit UI

use glam::Vec2;

/// Input events the runtime routes to widgets
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    // Pointer events
    MouseDown { x: f32, y: f32, button: MouseButton },
    MouseUp { x: f32, y: f32, button: MouseButton },
    MouseMove { x: f32, y: f32 },
    Scroll { delta_x: f32, delta_y: f32 },

    // Keyboard events
    KeyDown { key: Key, modifiers: Modifiers },
    TextInput { text: String },

    // Window events
    Resize { width: f32, height: f32 },
}

impl Event {
    /// Pointer position carried by the event, if any
    pub fn position(&self) -> Option<Vec2> {
        match *self {
            Event::MouseDown { x, y, .. }
            | Event::MouseUp { x, y, .. }
            | Event::MouseMove { x, y } => Some(Vec2::new(x, y)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,  // Cmd on Mac, Win on Windows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape, Tab, Enter, Backspace, Delete,
    Up, Down, Left, Right,
    Home, End, PageUp, PageDown,
    Unknown,
}
