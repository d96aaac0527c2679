//! Layout engine using Taffy (Flexbox)

use crate::core::{child_id, Context, Segment, Theme, Widget, WidgetId, ROOT_ID};
use crate::style::Style;
use crate::UiError;
use glam::Vec2;
use std::collections::HashSet;
use taffy::{
    AlignItems, AvailableSpace, Dimension, FlexDirection, LengthPercentage, NodeId, Overflow,
    Point, Size, TaffyTree,
};

/// Axis-aligned rectangle in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width &&
        p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);
        (x2 > x1 && y2 > y1).then(|| Rect::new(x1, y1, x2 - x1, y2 - y1))
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Layout node with computed absolute position and size
#[derive(Debug, Clone)]
pub struct LayoutNode {
    pub id: WidgetId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Height of the children plus bottom padding, measured from the top edge
    pub content_height: f32,
    /// Scroll offset applied to the children
    pub scroll_y: f32,
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn new(id: WidgetId, width: f32, height: f32) -> Self {
        Self {
            id,
            x: 0.0,
            y: 0.0,
            width,
            height,
            content_height: height,
            scroll_y: 0.0,
            children: Vec::new(),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        self.bounds().contains(p)
    }

    /// Largest scroll offset that still keeps content in view
    pub fn max_scroll(&self) -> f32 {
        (self.content_height - self.height).max(0.0)
    }

    /// Child indices from this node down to the deepest node containing `p`
    pub fn hit_path(&self, p: Vec2) -> Option<Vec<usize>> {
        if !self.contains_point(p) {
            return None;
        }
        let mut path = Vec::new();
        let mut node = self;
        while let Some((index, child)) = node
            .children
            .iter()
            .enumerate()
            .rev()
            .find(|(_, child)| child.contains_point(p))
        {
            path.push(index);
            node = child;
        }
        Some(path)
    }

    pub fn node_at(&self, path: &[usize]) -> Option<&LayoutNode> {
        match path.split_first() {
            None => Some(self),
            Some((&first, rest)) => self.children.get(first)?.node_at(rest),
        }
    }

    /// Child-index path to the node with `id`
    pub fn path_to(&self, id: WidgetId) -> Option<Vec<usize>> {
        if self.id == id {
            return Some(Vec::new());
        }
        self.children.iter().enumerate().find_map(|(index, child)| {
            child.path_to(id).map(|mut rest| {
                rest.insert(0, index);
                rest
            })
        })
    }
}

/// Layout engine wrapper around Taffy
pub struct LayoutEngine {
    tree: TaffyTree<()>,
}

impl LayoutEngine {
    pub fn new() -> Self {
        Self { tree: TaffyTree::new() }
    }

    /// Lay out `root` to fill the context's viewport
    pub fn compute(&mut self, root: &dyn Widget, ctx: &Context) -> Result<LayoutNode, UiError> {
        self.tree = TaffyTree::new();
        let root_node = self.build(root, &ctx.theme, Placement::Root)?;
        self.tree.compute_layout(
            root_node,
            Size {
                width: AvailableSpace::Definite(ctx.screen_width),
                height: AvailableSpace::Definite(ctx.screen_height),
            },
        )?;
        self.resolve(root, root_node, ROOT_ID, Vec2::ZERO, ctx)
    }

    fn build(&mut self, widget: &dyn Widget, theme: &Theme, placement: Placement) -> Result<NodeId, UiError> {
        let child_placement = if widget.scrolls() { Placement::Scrolled } else { Placement::Nested };
        let children = widget
            .children()
            .iter()
            .map(|child| self.build(child.as_ref(), theme, child_placement))
            .collect::<Result<Vec<_>, _>>()?;

        let style = to_taffy(widget.style(), widget.measure(theme), widget.scrolls(), placement);
        let node = if children.is_empty() {
            self.tree.new_leaf(style)?
        } else {
            self.tree.new_with_children(style, &children)?
        };
        Ok(node)
    }

    fn resolve(
        &self,
        widget: &dyn Widget,
        node: NodeId,
        id: WidgetId,
        origin: Vec2,
        ctx: &Context,
    ) -> Result<LayoutNode, UiError> {
        let layout = self.tree.layout(node)?;
        let (x, y) = (origin.x + layout.location.x, origin.y + layout.location.y);
        let (width, height) = (layout.size.width, layout.size.height);
        let child_nodes = self.tree.children(node)?;

        let mut content_height: f32 = 0.0;
        for &child in &child_nodes {
            let child_layout = self.tree.layout(child)?;
            content_height = content_height.max(child_layout.location.y + child_layout.size.height);
        }
        content_height += widget.style().padding.bottom;
        let content_height = content_height.max(height);

        let scroll_y = if widget.scrolls() {
            ctx.scroll_offset(id).clamp(0.0, (content_height - height).max(0.0))
        } else {
            0.0
        };

        let mut seen = HashSet::new();
        let mut children = Vec::with_capacity(child_nodes.len());
        for (index, (child, &child_node)) in widget.children().iter().zip(&child_nodes).enumerate() {
            let segment = match widget.child_key(index) {
                Some(key) => {
                    if !seen.insert(key) {
                        return Err(UiError::DuplicateKey { key: key.to_string() });
                    }
                    Segment::Key(key)
                }
                None => Segment::Index(index),
            };
            children.push(self.resolve(
                child.as_ref(),
                child_node,
                child_id(id, segment),
                Vec2::new(x, y - scroll_y),
                ctx,
            )?);
        }

        Ok(LayoutNode { id, x, y, width, height, content_height, scroll_y, children })
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a node sits relative to its parent
#[derive(Clone, Copy, PartialEq, Eq)]
enum Placement {
    Root,
    Nested,
    /// Inside a scroll container; must keep its natural height
    Scrolled,
}

fn to_taffy(style: &Style, measured: Option<f32>, scrolls: bool, placement: Placement) -> taffy::Style {
    let length = LengthPercentage::Length;
    let size = match placement {
        Placement::Root => Size { width: Dimension::Percent(1.0), height: Dimension::Percent(1.0) },
        _ => Size {
            width: Dimension::Auto,
            height: measured.map(Dimension::Length).unwrap_or(Dimension::Auto),
        },
    };

    taffy::Style {
        size,
        flex_direction: FlexDirection::Column,
        align_items: Some(AlignItems::Stretch),
        flex_grow: style.flex_grow,
        flex_shrink: if placement == Placement::Scrolled { 0.0 } else { 1.0 },
        // Growing siblings share the free space evenly
        flex_basis: if style.flex_grow > 0.0 { Dimension::Length(0.0) } else { Dimension::Auto },
        padding: taffy::Rect {
            left: length(style.padding.left),
            right: length(style.padding.right),
            top: length(style.padding.top),
            bottom: length(style.padding.bottom),
        },
        overflow: Point {
            x: Overflow::Visible,
            y: if scrolls { Overflow::Scroll } else { Overflow::Visible },
        },
        ..Default::default()
    }
}
