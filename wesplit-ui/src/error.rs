//! Toolkit errors

use thiserror::Error;

/// Errors raised by layout, window creation and GPU setup
#[derive(Debug, Error)]
pub enum UiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no compatible GPU adapter found")]
    NoAdapter,

    #[error("surface supports no texture formats on this adapter")]
    NoSurfaceFormat,

    #[error("failed to create GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("layout failed: {0}")]
    Layout(#[from] taffy::TaffyError),

    #[error("duplicate identity key `{key}` among siblings")]
    DuplicateKey { key: String },
}
