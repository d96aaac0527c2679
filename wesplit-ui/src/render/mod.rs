//! Painting and GPU rendering with wgpu

mod primitives;
mod painter;
mod gpu;
mod text;

pub use primitives::*;
pub use painter::*;
pub use gpu::*;
pub use text::*;
