//! Text rasterisation using cosmic-text

use cosmic_text::{
    Attrs, Buffer, Color as CosmicColor, Family, FontSystem, Metrics, Shaping, SwashCache,
};
use crate::core::context::Color;

/// A solid run of glyph coverage, in pixels relative to the text origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphSpan {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub color: Color,
}

/// Text renderer using cosmic-text
pub struct TextRenderer {
    font_system: FontSystem,
    swash_cache: SwashCache,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
        }
    }

    /// Shape `text` and report its coverage as solid spans
    ///
    /// Each span carries the glyph colour with coverage folded into alpha, so
    /// the GPU renderer can draw text with the same quad pipeline as rects.
    pub fn rasterize(
        &mut self,
        text: &str,
        font_size: f32,
        color: Color,
        max_width: Option<f32>,
        mut emit: impl FnMut(GlyphSpan),
    ) {
        let metrics = Metrics::new(font_size, font_size * 1.2);
        let mut buffer = Buffer::new(&mut self.font_system, metrics);

        buffer.set_size(&mut self.font_system, max_width, None);

        let attrs = Attrs::new()
            .family(Family::SansSerif);

        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);

        let text_color = CosmicColor::rgba(
            (color.r * 255.0) as u8,
            (color.g * 255.0) as u8,
            (color.b * 255.0) as u8,
            (color.a * 255.0) as u8,
        );

        buffer.draw(&mut self.font_system, &mut self.swash_cache, text_color, |x, y, w, h, c| {
            if c.a() == 0 {
                return;
            }
            emit(GlyphSpan {
                x,
                y,
                width: w,
                height: h,
                color: Color::rgba(c.r(), c.g(), c.b(), c.a() as f32 / 255.0),
            });
        });
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}
