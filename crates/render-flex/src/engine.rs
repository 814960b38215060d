//! Built-in single-line flexbox engine behind the [`LayoutEngine`]
//! boundary.
//!
//! The engine consumes a tree of [`StyleNode`]s plus the available size
//! and produces a parallel tree of [`FrameNode`]s: one frame per input
//! node, origins expressed in the parent's coordinate space. Nodes with
//! `display: none` keep their position in the output tree but receive a
//! zero frame, so callers can map input and output children one to one.

use crate::geometry::{EdgeInsets, Point, Rect, Size};
use crate::style::{Align, Dimension, Display, FlexDirection, FlexStyle, JustifyContent};

/// One node of the engine's input tree.
#[derive(Clone, Debug, Default)]
pub struct StyleNode {
    pub style: FlexStyle,
    pub children: Vec<StyleNode>,
}

impl StyleNode {
    pub fn new(style: FlexStyle) -> Self {
        Self {
            style,
            children: Vec::new(),
        }
    }

    pub fn with_children(style: FlexStyle, children: Vec<StyleNode>) -> Self {
        Self { style, children }
    }
}

/// One node of the engine's output tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameNode {
    pub frame: Rect,
    pub children: Vec<FrameNode>,
}

/// The layout engine boundary.
///
/// Constraint validation is the engine's own concern: degenerate or
/// unsatisfiable inputs are resolved however the implementation sees
/// fit, never reported upward.
pub trait LayoutEngine {
    fn compute_layout(&self, root: &StyleNode, available: Size) -> FrameNode;
}

/// Single-line flexbox: flex-basis resolution, grow into free space,
/// proportional shrink on overflow, main-axis justification, cross-axis
/// alignment with stretch, per-edge margins, container padding, and
/// min-size clamps. No wrapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlexEngine;

impl FlexEngine {
    pub fn new() -> Self {
        Self
    }
}

impl LayoutEngine for FlexEngine {
    fn compute_layout(&self, root: &StyleNode, available: Size) -> FrameNode {
        let style = &root.style;
        if style.display == Display::None {
            return zero_frames(root);
        }
        // The root is special-cased: auto dimensions fill the container.
        let inner = available.inset_by(style.margin);
        let width = style
            .width
            .resolve(available.width)
            .unwrap_or(inner.width)
            .max(min_size(&style.min_width, available.width));
        let height = style
            .height
            .resolve(available.height)
            .unwrap_or(inner.height)
            .max(min_size(&style.min_height, available.height));
        let frame = Rect {
            origin: Point::new(style.margin.left, style.margin.top),
            size: Size::new(width, height),
        };
        arrange(root, frame)
    }
}

fn min_size(dimension: &Dimension, container: f32) -> f32 {
    dimension.resolve(container).unwrap_or(0.0)
}

fn zero_frames(node: &StyleNode) -> FrameNode {
    FrameNode {
        frame: Rect::ZERO,
        children: node.children.iter().map(zero_frames).collect(),
    }
}

fn main_of(size: Size, direction: FlexDirection) -> f32 {
    match direction {
        FlexDirection::Row => size.width,
        FlexDirection::Column => size.height,
    }
}

fn cross_of(size: Size, direction: FlexDirection) -> f32 {
    match direction {
        FlexDirection::Row => size.height,
        FlexDirection::Column => size.width,
    }
}

fn pack(main: f32, cross: f32, direction: FlexDirection) -> Size {
    match direction {
        FlexDirection::Row => Size::new(main, cross),
        FlexDirection::Column => Size::new(cross, main),
    }
}

fn margin_main(margin: EdgeInsets, direction: FlexDirection) -> (f32, f32) {
    match direction {
        FlexDirection::Row => (margin.left, margin.right),
        FlexDirection::Column => (margin.top, margin.bottom),
    }
}

fn margin_cross(margin: EdgeInsets, direction: FlexDirection) -> (f32, f32) {
    match direction {
        FlexDirection::Row => (margin.top, margin.bottom),
        FlexDirection::Column => (margin.left, margin.right),
    }
}

fn padding_main_start(padding: EdgeInsets, direction: FlexDirection) -> f32 {
    match direction {
        FlexDirection::Row => padding.left,
        FlexDirection::Column => padding.top,
    }
}

fn padding_cross_start(padding: EdgeInsets, direction: FlexDirection) -> f32 {
    match direction {
        FlexDirection::Row => padding.top,
        FlexDirection::Column => padding.left,
    }
}

fn main_dimension(style: &FlexStyle, direction: FlexDirection) -> Dimension {
    match direction {
        FlexDirection::Row => style.width,
        FlexDirection::Column => style.height,
    }
}

fn cross_dimension(style: &FlexStyle, direction: FlexDirection) -> Dimension {
    match direction {
        FlexDirection::Row => style.height,
        FlexDirection::Column => style.width,
    }
}

fn min_main(style: &FlexStyle, direction: FlexDirection, container: f32) -> f32 {
    match direction {
        FlexDirection::Row => min_size(&style.min_width, container),
        FlexDirection::Column => min_size(&style.min_height, container),
    }
}

fn min_cross(style: &FlexStyle, direction: FlexDirection, container: f32) -> f32 {
    match direction {
        FlexDirection::Row => min_size(&style.min_height, container),
        FlexDirection::Column => min_size(&style.min_width, container),
    }
}

/// Result of running the flex line over one container's children.
struct FlexLine {
    /// Child rects relative to the container's border box; `None` for
    /// `display: none` children.
    rects: Vec<Option<Rect>>,
    content_main: f32,
    content_cross: f32,
}

/// Measures a node bottom-up: auto dimensions derive from content,
/// definite dimensions resolve against `avail`. Margins are excluded.
fn measure(node: &StyleNode, avail: Size) -> Size {
    let style = &node.style;
    if style.display == Display::None {
        return Size::ZERO;
    }
    let resolved_width = style.width.resolve(avail.width);
    let resolved_height = style.height.resolve(avail.height);

    let (width, height) = if resolved_width.is_some() && resolved_height.is_some() {
        (resolved_width.unwrap_or(0.0), resolved_height.unwrap_or(0.0))
    } else {
        let inner = Size::new(
            resolved_width.unwrap_or(avail.width),
            resolved_height.unwrap_or(avail.height),
        )
        .inset_by(style.padding);
        let line = flex_line(
            style,
            inner,
            resolved_main_definite(style, resolved_width, resolved_height),
            cross_definite(style, resolved_width, resolved_height),
            &node.children,
        );
        let direction = style.direction;
        let content = pack(
            line.content_main + padded_main(style),
            line.content_cross + padded_cross(style),
            direction,
        );
        (
            resolved_width.unwrap_or(content.width),
            resolved_height.unwrap_or(content.height),
        )
    };

    Size::new(
        width.max(min_size(&style.min_width, avail.width)),
        height.max(min_size(&style.min_height, avail.height)),
    )
}

fn padded_main(style: &FlexStyle) -> f32 {
    match style.direction {
        FlexDirection::Row => style.padding.horizontal(),
        FlexDirection::Column => style.padding.vertical(),
    }
}

fn padded_cross(style: &FlexStyle) -> f32 {
    match style.direction {
        FlexDirection::Row => style.padding.vertical(),
        FlexDirection::Column => style.padding.horizontal(),
    }
}

fn resolved_main_definite(
    style: &FlexStyle,
    resolved_width: Option<f32>,
    resolved_height: Option<f32>,
) -> bool {
    match style.direction {
        FlexDirection::Row => resolved_width.is_some(),
        FlexDirection::Column => resolved_height.is_some(),
    }
}

fn cross_definite(
    style: &FlexStyle,
    resolved_width: Option<f32>,
    resolved_height: Option<f32>,
) -> bool {
    match style.direction {
        FlexDirection::Row => resolved_height.is_some(),
        FlexDirection::Column => resolved_width.is_some(),
    }
}

/// Runs the flex algorithm over one container's children.
///
/// `inner` is the container's content box. When the main axis is not
/// definite, grow/shrink are skipped (children keep their natural
/// sizes), matching the indefinite-axis handling of the row/column
/// policies this engine generalizes.
fn flex_line(
    style: &FlexStyle,
    inner: Size,
    main_definite: bool,
    cross_is_definite: bool,
    children: &[StyleNode],
) -> FlexLine {
    let direction = style.direction;
    let inner_main = main_of(inner, direction);
    let inner_cross = cross_of(inner, direction);

    struct Item {
        index: usize,
        main: f32,
        cross: f32,
        margin_main: (f32, f32),
        margin_cross: (f32, f32),
        align: Align,
        grow: f32,
        shrink: f32,
        min_main: f32,
    }

    let mut items: Vec<Item> = Vec::with_capacity(children.len());
    for (index, child) in children.iter().enumerate() {
        let child_style = &child.style;
        if child_style.display == Display::None {
            continue;
        }
        let natural = measure(child, inner);
        let basis = child_style
            .flex_basis
            .resolve(inner_main)
            .or_else(|| main_dimension(child_style, direction).resolve(inner_main))
            .unwrap_or_else(|| main_of(natural, direction));
        let align = child_style.resolved_align(style.align_items);
        let cross = cross_dimension(child_style, direction)
            .resolve(inner_cross)
            .unwrap_or_else(|| {
                if align == Align::Stretch && cross_is_definite {
                    let (start, end) = margin_cross(child_style.margin, direction);
                    (inner_cross - start - end).max(0.0)
                } else {
                    cross_of(natural, direction)
                }
            });
        items.push(Item {
            index,
            main: basis.max(min_main(child_style, direction, inner_main)),
            cross: cross.max(min_cross(child_style, direction, inner_cross)),
            margin_main: margin_main(child_style.margin, direction),
            margin_cross: margin_cross(child_style.margin, direction),
            align,
            grow: child_style.flex_grow.max(0.0),
            shrink: child_style.flex_shrink.max(0.0),
            min_main: min_main(child_style, direction, inner_main),
        });
    }

    let used_main: f32 = items
        .iter()
        .map(|item| item.main + item.margin_main.0 + item.margin_main.1)
        .sum();

    if main_definite {
        let free = inner_main - used_main;
        if free > 0.0 {
            let total_grow: f32 = items.iter().map(|item| item.grow).sum();
            if total_grow > 0.0 {
                for item in items.iter_mut() {
                    item.main += free * item.grow / total_grow;
                }
            }
        } else if free < 0.0 {
            let scaled: f32 = items.iter().map(|item| item.shrink * item.main).sum();
            if scaled > 0.0 {
                for item in items.iter_mut() {
                    let reduction = -free * item.shrink * item.main / scaled;
                    item.main = (item.main - reduction).max(item.min_main).max(0.0);
                }
            }
        }
    }

    let occupied: f32 = items
        .iter()
        .map(|item| item.main + item.margin_main.0 + item.margin_main.1)
        .sum();
    let leftover = if main_definite {
        (inner_main - occupied).max(0.0)
    } else {
        0.0
    };
    let count = items.len();
    let (lead, gap) = match style.justify_content {
        JustifyContent::FlexStart => (0.0, 0.0),
        JustifyContent::Center => (leftover / 2.0, 0.0),
        JustifyContent::FlexEnd => (leftover, 0.0),
        JustifyContent::SpaceBetween if count > 1 => (0.0, leftover / (count as f32 - 1.0)),
        JustifyContent::SpaceBetween => (0.0, 0.0),
        JustifyContent::SpaceAround if count > 0 => {
            let gap = leftover / count as f32;
            (gap / 2.0, gap)
        }
        JustifyContent::SpaceAround => (0.0, 0.0),
        JustifyContent::SpaceEvenly if count > 0 => {
            let gap = leftover / (count as f32 + 1.0);
            (gap, gap)
        }
        JustifyContent::SpaceEvenly => (0.0, 0.0),
    };

    let mut rects: Vec<Option<Rect>> = vec![None; children.len()];
    let mut cursor = padding_main_start(style.padding, direction) + lead;
    let cross_origin = padding_cross_start(style.padding, direction);
    let mut content_cross = 0.0_f32;
    for item in &items {
        let outer_cross = item.cross + item.margin_cross.0 + item.margin_cross.1;
        content_cross = content_cross.max(outer_cross);
        let cross_pos = cross_origin
            + match item.align {
                Align::FlexStart | Align::Stretch | Align::Auto => item.margin_cross.0,
                Align::Center => item.margin_cross.0 + ((inner_cross - outer_cross) / 2.0).max(0.0),
                Align::FlexEnd => (inner_cross - item.cross - item.margin_cross.1).max(0.0),
            };
        let main_pos = cursor + item.margin_main.0;
        let size = pack(item.main, item.cross, direction);
        let origin = match direction {
            FlexDirection::Row => Point::new(main_pos, cross_pos),
            FlexDirection::Column => Point::new(cross_pos, main_pos),
        };
        rects[item.index] = Some(Rect { origin, size });
        cursor = main_pos + item.main + item.margin_main.1 + gap;
    }

    FlexLine {
        rects,
        content_main: occupied,
        content_cross,
    }
}

/// Places `node` at `frame` and recursively arranges its children
/// inside the frame's content box.
fn arrange(node: &StyleNode, frame: Rect) -> FrameNode {
    let style = &node.style;
    let inner = frame.size.inset_by(style.padding);
    let line = flex_line(style, inner, true, true, &node.children);
    let children = node
        .children
        .iter()
        .zip(line.rects)
        .map(|(child, rect)| match rect {
            Some(rect) => arrange(child, rect),
            None => zero_frames(child),
        })
        .collect();
    FrameNode { frame, children }
}
