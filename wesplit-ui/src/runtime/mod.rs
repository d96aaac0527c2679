//! Headless runtime: state in, widget tree and render list out
//!
//! The runtime owns a [`View`] and the most recent build of its widget tree.
//! Input events are routed to widgets of that build; when a widget writes to
//! a state cell the view's invalidator is raised and the tree is rebuilt from
//! `View::body` before the next frame.

use crate::core::{BoxedWidget, Context, Event, Invalidator, Node, Theme, View, Widget};
use crate::layout::{LayoutEngine, LayoutNode, Rect};
use crate::render::{Painter, RenderList};
use crate::UiError;
use glam::Vec2;

pub struct Runtime<V: View> {
    view: V,
    root: BoxedWidget,
    layout: LayoutNode,
    engine: LayoutEngine,
    ctx: Context,
    invalidator: Invalidator,
    builds: u64,
}

impl<V: View> Runtime<V> {
    pub fn new(view: V, width: f32, height: f32) -> Result<Self, UiError> {
        Self::with_theme(view, width, height, Theme::dark())
    }

    pub fn with_theme(view: V, width: f32, height: f32, theme: Theme) -> Result<Self, UiError> {
        let invalidator = Invalidator::new();
        view.observe(&invalidator);

        let ctx = Context::new(width, height).with_theme(theme);
        let root = view.body();
        let mut engine = LayoutEngine::new();
        let layout = engine.compute(root.as_ref(), &ctx)?;

        Ok(Self {
            view,
            root,
            layout,
            engine,
            ctx,
            invalidator,
            builds: 1,
        })
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    pub fn layout(&self) -> &LayoutNode {
        &self.layout
    }

    /// Number of times the widget tree has been built
    pub fn builds(&self) -> u64 {
        self.builds
    }

    /// Description of the current build
    pub fn describe(&self) -> Node {
        self.root.describe()
    }

    /// Route one input event; returns whether the window needs a redraw
    pub fn dispatch(&mut self, event: Event) -> Result<bool, UiError> {
        if let Some(p) = event.position() {
            self.ctx.pointer = p;
        }

        let handled = match &event {
            Event::Resize { width, height } => {
                self.ctx.resize(*width, *height);
                true
            }
            Event::MouseMove { .. } => false,
            Event::MouseDown { .. } => {
                // Pressing anywhere else takes focus away from a text field
                let had_focus = self.ctx.focused().is_some();
                self.ctx.blur();
                let handled = self.bubble_at(&event, self.ctx.pointer);
                handled || had_focus
            }
            Event::MouseUp { .. } => {
                let handled = self.bubble_at(&event, self.ctx.pointer);
                self.ctx.release() || handled
            }
            Event::Scroll { .. } => self.bubble_at(&event, self.ctx.pointer),
            Event::KeyDown { .. } | Event::TextInput { .. } => {
                match self.ctx.focused().and_then(|id| self.layout.path_to(id)) {
                    Some(path) => self.bubble(&event, &path),
                    None => false,
                }
            }
        };

        let rebuilt = self.refresh(handled)?;
        Ok(handled || rebuilt)
    }

    /// Rebuild if a state cell changed outside of event dispatch
    pub fn update(&mut self) -> Result<bool, UiError> {
        self.refresh(false)
    }

    /// Press and release at `p`
    pub fn tap(&mut self, p: Vec2) -> Result<bool, UiError> {
        use crate::core::MouseButton::Left;
        let down = self.dispatch(Event::MouseDown { x: p.x, y: p.y, button: Left })?;
        let up = self.dispatch(Event::MouseUp { x: p.x, y: p.y, button: Left })?;
        Ok(down || up)
    }

    /// Send `text` to the focused widget
    pub fn type_text(&mut self, text: &str) -> Result<bool, UiError> {
        self.dispatch(Event::TextInput { text: text.to_string() })
    }

    /// Centre of the visible widget showing exactly `text`
    pub fn locate(&self, text: &str) -> Option<Vec2> {
        locate_in(self.root.as_ref(), &self.layout, text, None)
    }

    /// Paint the current build into `list`, replacing its contents
    pub fn paint(&self, list: &mut RenderList) {
        list.clear();
        let screen = Rect::new(0.0, 0.0, self.ctx.screen_width, self.ctx.screen_height);
        let mut painter = Painter::new(list, &self.ctx);
        painter.clipped(screen, |painter| paint_tree(self.root.as_ref(), &self.layout, painter));
    }

    fn refresh(&mut self, handled: bool) -> Result<bool, UiError> {
        if self.invalidator.take() {
            self.root = self.view.body();
            self.builds += 1;
            tracing::trace!(builds = self.builds, "view rebuilt");
            self.relayout()?;
            return Ok(true);
        }
        if handled {
            self.relayout()?;
        }
        Ok(false)
    }

    fn relayout(&mut self) -> Result<(), UiError> {
        self.layout = self.engine.compute(self.root.as_ref(), &self.ctx)?;
        if let Some(id) = self.ctx.focused() {
            if self.layout.path_to(id).is_none() {
                self.ctx.blur();
            }
        }
        Ok(())
    }

    fn bubble_at(&mut self, event: &Event, p: Vec2) -> bool {
        match self.layout.hit_path(p) {
            Some(path) => self.bubble(event, &path),
            None => false,
        }
    }

    /// Offer `event` to the widget at `path`, then to each ancestor in turn
    fn bubble(&mut self, event: &Event, path: &[usize]) -> bool {
        for depth in (0..=path.len()).rev() {
            let sub = &path[..depth];
            let (Some(frame), Some(widget)) = (self.layout.node_at(sub), widget_at_mut(&mut self.root, sub)) else {
                continue;
            };
            if widget.on_event(event, frame, &mut self.ctx) {
                return true;
            }
        }
        false
    }
}

fn widget_at_mut<'a>(widget: &'a mut BoxedWidget, path: &[usize]) -> Option<&'a mut BoxedWidget> {
    match path.split_first() {
        None => Some(widget),
        Some((&first, rest)) => widget_at_mut(widget.children_mut().get_mut(first)?, rest),
    }
}

fn paint_tree(widget: &dyn Widget, frame: &LayoutNode, painter: &mut Painter<'_>) {
    if !painter.is_visible(&frame.bounds()) {
        return;
    }
    widget.paint(frame, painter);
    if widget.scrolls() {
        painter.clipped(frame.bounds(), |painter| paint_children(widget, frame, painter));
    } else {
        paint_children(widget, frame, painter);
    }
}

fn paint_children(widget: &dyn Widget, frame: &LayoutNode, painter: &mut Painter<'_>) {
    for (child, child_frame) in widget.children().iter().zip(&frame.children) {
        paint_tree(child.as_ref(), child_frame, painter);
    }
}

fn locate_in(widget: &dyn Widget, frame: &LayoutNode, text: &str, clip: Option<Rect>) -> Option<Vec2> {
    let visible = |p: Vec2| clip.map_or(true, |c| c.contains(p));
    if let Some(p) = widget.locate(text, frame).filter(|p| visible(*p)) {
        return Some(p);
    }
    let clip = if widget.scrolls() {
        Some(clip.and_then(|c| c.intersection(&frame.bounds())).unwrap_or(frame.bounds()))
    } else {
        clip
    };
    widget
        .children()
        .iter()
        .zip(&frame.children)
        .find_map(|(child, child_frame)| locate_in(child.as_ref(), child_frame, text, clip))
}
