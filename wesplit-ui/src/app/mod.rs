//! Application entry point

mod window;

pub use window::*;

use crate::core::{Theme, View};
use crate::UiError;
use winit::event_loop::{ControlFlow, EventLoop};

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width
    pub width: u32,
    /// Logical height
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "WeSplit".to_string(),
            width: 390,
            height: 844,
            resizable: true,
        }
    }
}

/// Main application struct
pub struct App {
    config: WindowConfig,
    theme: Theme,
}

impl App {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            config: WindowConfig { title: title.into(), ..Default::default() },
            theme: Theme::dark(),
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Open the window and drive `view` until it is closed
    pub fn run<V: View + 'static>(self, view: V) -> Result<(), UiError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut handler = WindowApp::new(self.config, self.theme, view);
        event_loop.run_app(&mut handler)?;
        handler.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_sets_window_config() {
        let app = App::new("SwiftUI").size(640, 480);
        assert_eq!(app.config().title, "SwiftUI");
        assert_eq!((app.config().width, app.config().height), (640, 480));
        assert!(app.config().resizable);
    }
}
