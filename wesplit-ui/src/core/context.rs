//! Per-runtime context shared with widgets during events and painting

use crate::core::WidgetId;
use glam::Vec2;
use std::collections::HashMap;

/// UI state that outlives a single build of the widget tree
///
/// Entries are keyed by [`WidgetId`], which is derived from a widget's
/// position (or explicit key) in the tree, so they survive rebuilds.
pub struct Context {
    /// Current theme
    pub theme: Theme,
    /// Viewport dimensions
    pub screen_width: f32,
    pub screen_height: f32,
    /// Last known pointer position
    pub pointer: Vec2,
    focused: Option<WidgetId>,
    pressed: Option<WidgetId>,
    scroll_offsets: HashMap<WidgetId, f32>,
}

impl Context {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            theme: Theme::dark(),
            screen_width: width,
            screen_height: height,
            pointer: Vec2::ZERO,
            focused: None,
            pressed: None,
            scroll_offsets: HashMap::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    pub fn focus(&mut self, id: WidgetId) {
        self.focused = Some(id);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.focused == Some(id)
    }

    /// Remember which widget received the pointer press
    pub fn press(&mut self, id: WidgetId) {
        self.pressed = Some(id);
    }

    pub fn is_pressed(&self, id: WidgetId) -> bool {
        self.pressed == Some(id)
    }

    /// Forget the pressed widget; returns whether there was one
    pub(crate) fn release(&mut self) -> bool {
        self.pressed.take().is_some()
    }

    pub fn scroll_offset(&self, id: WidgetId) -> f32 {
        self.scroll_offsets.get(&id).copied().unwrap_or(0.0)
    }

    /// Move a scroll container by `delta`, keeping it within `[0, max]`
    pub fn scroll_by(&mut self, id: WidgetId, delta: f32, max: f32) -> bool {
        let current = self.scroll_offset(id);
        let next = (current + delta).clamp(0.0, max.max(0.0));
        if next == current {
            return false;
        }
        self.scroll_offsets.insert(id, next);
        true
    }
}

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub background: Color,
    pub surface: Color,
    pub bar: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub separator: Color,
    pub spacing: f32,
    pub row_height: f32,
    pub font_size: f32,
    pub title_size: f32,
    pub large_title_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            primary: Color::rgb(10, 132, 255),     // Blue
            background: Color::rgb(0, 0, 0),
            surface: Color::rgb(28, 28, 30),       // Grouped row
            bar: Color::rgb(22, 22, 24),
            text: Color::rgb(255, 255, 255),
            text_secondary: Color::rgb(142, 142, 147),
            separator: Color::rgb(56, 56, 58),
            spacing: 16.0,
            row_height: 44.0,
            font_size: 17.0,
            title_size: 17.0,
            large_title_size: 34.0,
        }
    }

    pub fn light() -> Self {
        Self {
            primary: Color::rgb(0, 122, 255),
            background: Color::rgb(242, 242, 247),
            surface: Color::rgb(255, 255, 255),
            bar: Color::rgb(249, 249, 249),
            text: Color::rgb(0, 0, 0),
            text_secondary: Color::rgb(142, 142, 147),
            separator: Color::rgb(198, 198, 200),
            ..Self::dark()
        }
    }
}
