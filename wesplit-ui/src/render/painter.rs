//! Widget-facing drawing API over a render list

use crate::core::{Context, Theme};
use crate::core::context::Color;
use crate::layout::{LayoutNode, Rect};
use crate::render::RenderList;

/// Drawing surface handed to [`Widget::paint`](crate::core::Widget::paint)
pub struct Painter<'a> {
    list: &'a mut RenderList,
    ctx: &'a Context,
    clip: Option<Rect>,
}

impl<'a> Painter<'a> {
    pub fn new(list: &'a mut RenderList, ctx: &'a Context) -> Self {
        Self { list, ctx, clip: None }
    }

    pub fn theme(&self) -> &Theme {
        &self.ctx.theme
    }

    pub fn ctx(&self) -> &Context {
        self.ctx
    }

    /// Whether any part of `bounds` survives the current clip
    pub fn is_visible(&self, bounds: &Rect) -> bool {
        self.clip.map_or(true, |clip| clip.intersection(bounds).is_some())
    }

    /// Run `f` with the clip narrowed to `bounds`
    pub fn clipped<R>(&mut self, bounds: Rect, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.clip;
        // A fully clipped region keeps a zero-sized clip so nothing draws.
        self.clip = Some(match saved {
            Some(clip) => clip.intersection(&bounds).unwrap_or(Rect::new(bounds.x, bounds.y, 0.0, 0.0)),
            None => bounds,
        });
        let result = f(self);
        self.clip = saved;
        result
    }

    pub fn rect(&mut self, bounds: Rect, color: Color) {
        self.list.rect(bounds, color, self.clip);
    }

    pub fn text(&mut self, x: f32, y: f32, text: impl Into<String>, size: f32, color: Color) {
        self.list.text(x, y, text.into(), size, color, self.clip);
    }

    pub fn line(&mut self, from: (f32, f32), to: (f32, f32), color: Color, width: f32) {
        self.list.line(from, to, color, width, self.clip);
    }

    /// Leading-aligned, vertically centred text inside `bounds`
    pub fn row_text(&mut self, bounds: Rect, text: impl Into<String>, color: Color) {
        let size = self.theme().font_size;
        let x = bounds.x + self.theme().spacing;
        let y = bounds.y + (bounds.height - size) / 2.0;
        self.text(x, y, text, size, color);
    }

    /// Trailing-aligned text; width is estimated from the font size
    pub fn trailing_text(&mut self, bounds: Rect, text: impl Into<String>, color: Color) {
        let text = text.into();
        let size = self.theme().font_size;
        let estimated = text.chars().count() as f32 * size * 0.6;
        let x = bounds.x + bounds.width - self.theme().spacing - estimated;
        let y = bounds.y + (bounds.height - size) / 2.0;
        self.text(x, y, text, size, color);
    }

    /// Separator along the bottom edge of a row
    pub fn separator(&mut self, frame: &LayoutNode) {
        let color = self.theme().separator;
        let inset = self.theme().spacing;
        let y = frame.y + frame.height;
        self.line((frame.x + inset, y), (frame.x + frame.width, y), color, 0.5);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Primitive;

    #[test]
    fn test_rect_carries_current_clip() {
        let ctx = Context::new(300.0, 400.0);
        let mut list = RenderList::new();
        let mut painter = Painter::new(&mut list, &ctx);
        let color = painter.theme().surface;
        painter.rect(Rect::new(0.0, 0.0, 10.0, 10.0), color);
        painter.clipped(Rect::new(0.0, 0.0, 100.0, 50.0), |painter| {
            painter.rect(Rect::new(0.0, 40.0, 100.0, 20.0), color);
        });

        assert_eq!(
            list.primitives,
            vec![
                Primitive::Rect { x: 0.0, y: 0.0, width: 10.0, height: 10.0, color, clip: None },
                Primitive::Rect {
                    x: 0.0,
                    y: 40.0,
                    width: 100.0,
                    height: 20.0,
                    color,
                    clip: Some(Rect::new(0.0, 0.0, 100.0, 50.0)),
                },
            ]
        );
    }

    #[test]
    fn test_nested_clips_intersect() {
        let ctx = Context::new(300.0, 400.0);
        let mut list = RenderList::new();
        let mut painter = Painter::new(&mut list, &ctx);
        let inner = painter.clipped(Rect::new(0.0, 0.0, 100.0, 100.0), |painter| {
            painter.clipped(Rect::new(50.0, 50.0, 100.0, 100.0), |painter| painter.clip)
        });
        assert_eq!(inner, Some(Rect::new(50.0, 50.0, 50.0, 50.0)));
        assert_eq!(painter.clip, None);
    }
}
