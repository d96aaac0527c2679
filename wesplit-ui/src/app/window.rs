//! Window management and event loop

use crate::core::{Event, Key, Modifiers, MouseButton, Theme, View};
use crate::render::{GpuRenderer, RenderList};
use crate::runtime::Runtime;
use crate::UiError;
use crate::app::WindowConfig;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{self, ModifiersState, NamedKey},
    window::{Window, WindowAttributes, WindowId},
};

/// Application state once the window exists
struct AppState<V: View> {
    window: Arc<Window>,
    renderer: GpuRenderer,
    runtime: Runtime<V>,
    render_list: RenderList,
    modifiers: Modifiers,
}

/// winit handler driving one view in one window
pub struct WindowApp<V: View> {
    config: WindowConfig,
    theme: Theme,
    view: Option<V>,
    state: Option<AppState<V>>,
    error: Option<UiError>,
}

impl<V: View> WindowApp<V> {
    pub fn new(config: WindowConfig, theme: Theme, view: V) -> Self {
        Self {
            config,
            theme,
            view: Some(view),
            state: None,
            error: None,
        }
    }

    /// The error that stopped the event loop, if any
    pub fn finish(self) -> Result<(), UiError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop, view: V) -> Result<AppState<V>, UiError> {
        let attrs = WindowAttributes::default()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height))
            .with_resizable(self.config.resizable);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let mut renderer = pollster::block_on(GpuRenderer::new(window.clone()))?;
        renderer.clear_color = self.theme.background;

        let size = logical(window.inner_size(), window.scale_factor());
        let runtime = Runtime::with_theme(view, size.width, size.height, self.theme.clone())?;
        tracing::info!(width = size.width, height = size.height, "window opened");

        window.request_redraw();
        Ok(AppState {
            window,
            renderer,
            runtime,
            render_list: RenderList::new(),
            modifiers: Modifiers::default(),
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: UiError) {
        tracing::error!(error = %err, "stopping event loop");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl<V: View> ApplicationHandler for WindowApp<V> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let Some(view) = self.view.take() else { return };
        match self.start(event_loop, view) {
            Ok(state) => self.state = Some(state),
            Err(err) => self.fail(event_loop, err),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else { return };
        let scale = state.window.scale_factor();

        let input = match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                state.renderer.scale = scale_factor as f32;
                return;
            }
            WindowEvent::Resized(physical) => {
                state.renderer.resize((physical.width, physical.height));
                let size = logical(physical, scale);
                Some(Event::Resize { width: size.width, height: size.height })
            }
            WindowEvent::RedrawRequested => {
                state.runtime.paint(&mut state.render_list);
                match state.renderer.render(&state.render_list) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        tracing::warn!("surface lost, reconfiguring");
                        state.renderer.resize(state.renderer.size);
                        state.window.request_redraw();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        tracing::error!("surface out of memory");
                        event_loop.exit();
                    }
                    Err(err) => tracing::warn!(error = %err, "frame skipped"),
                }
                return;
            }
            WindowEvent::ModifiersChanged(mods) => {
                state.modifiers = modifiers(mods.state());
                return;
            }
            WindowEvent::CursorMoved { position, .. } => Some(Event::MouseMove {
                x: (position.x / scale) as f32,
                y: (position.y / scale) as f32,
            }),
            WindowEvent::MouseInput { state: pressed, button, .. } => {
                let pointer = state.runtime.context().pointer;
                mouse_button(button).map(|button| match pressed {
                    ElementState::Pressed => Event::MouseDown { x: pointer.x, y: pointer.y, button },
                    ElementState::Released => Event::MouseUp { x: pointer.x, y: pointer.y, button },
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let line = state.runtime.context().theme.row_height;
                let (delta_x, delta_y) = scroll_delta(delta, scale as f32, line);
                Some(Event::Scroll { delta_x, delta_y })
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                key_event(&event.logical_key, event.text.as_deref(), state.modifiers)
            }
            _ => None,
        };

        let Some(input) = input else { return };
        match state.runtime.dispatch(input) {
            Ok(true) => state.window.request_redraw(),
            Ok(false) => {}
            Err(err) => self.fail(event_loop, err),
        }
    }
}

fn logical(size: PhysicalSize<u32>, scale: f64) -> LogicalSize<f32> {
    size.to_logical(scale)
}

fn mouse_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

fn modifiers(state: ModifiersState) -> Modifiers {
    Modifiers {
        shift: state.shift_key(),
        ctrl: state.control_key(),
        alt: state.alt_key(),
        meta: state.super_key(),
    }
}

fn named_key(key: NamedKey) -> Key {
    match key {
        NamedKey::Escape => Key::Escape,
        NamedKey::Tab => Key::Tab,
        NamedKey::Enter => Key::Enter,
        NamedKey::Backspace => Key::Backspace,
        NamedKey::Delete => Key::Delete,
        NamedKey::ArrowUp => Key::Up,
        NamedKey::ArrowDown => Key::Down,
        NamedKey::ArrowLeft => Key::Left,
        NamedKey::ArrowRight => Key::Right,
        NamedKey::Home => Key::Home,
        NamedKey::End => Key::End,
        NamedKey::PageUp => Key::PageUp,
        NamedKey::PageDown => Key::PageDown,
        _ => Key::Unknown,
    }
}

/// Editing keys become `KeyDown`; anything else that produces text becomes `TextInput`
fn key_event(logical_key: &keyboard::Key, text: Option<&str>, modifiers: Modifiers) -> Option<Event> {
    if let keyboard::Key::Named(named) = logical_key {
        let key = named_key(*named);
        if key != Key::Unknown {
            return Some(Event::KeyDown { key, modifiers });
        }
    }
    if modifiers.ctrl || modifiers.meta {
        return None;
    }
    let text = text.filter(|t| t.chars().any(|c| !c.is_control()))?;
    Some(Event::TextInput { text: text.to_string() })
}

/// Scroll distance in logical pixels
fn scroll_delta(delta: MouseScrollDelta, scale: f32, line_height: f32) -> (f32, f32) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => (x * line_height, y * line_height),
        MouseScrollDelta::PixelDelta(p) => (p.x as f32 / scale, p.y as f32 / scale),
    }
}
