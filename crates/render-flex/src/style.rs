//! The per-node style record consumed by the layout engine.

use crate::geometry::EdgeInsets;

/// A single style dimension: fixed points, a fraction of the container,
/// or content-derived.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Dimension {
    #[default]
    Auto,
    Points(f32),
    Percent(f32),
}

impl Dimension {
    /// Resolves against the container's dimension, `None` when `Auto`.
    pub fn resolve(&self, container: f32) -> Option<f32> {
        match self {
            Dimension::Auto => None,
            Dimension::Points(points) => Some(*points),
            Dimension::Percent(fraction) => Some(container * fraction),
        }
    }
}

/// Main-axis orientation of a flex container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlexDirection {
    Row,
    #[default]
    Column,
}

/// Main-axis distribution of free space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    Center,
    FlexEnd,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// Cross-axis alignment, used both for `align_items` (container-wide)
/// and `align_self` (per child, `Auto` defers to the container).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Auto,
    FlexStart,
    Center,
    FlexEnd,
    Stretch,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    #[default]
    Flex,
    None,
}

/// Recognized but layout-neutral here; clipping belongs to the renderer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
}

/// The full style record attached to every node handed to the engine.
///
/// Defaults are the mobile-flexbox conventions: column direction,
/// stretch alignment, zero grow/shrink, auto basis.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexStyle {
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub min_height: Dimension,
    pub margin: EdgeInsets,
    pub padding: EdgeInsets,
    pub direction: FlexDirection,
    pub justify_content: JustifyContent,
    pub align_items: Align,
    pub align_self: Align,
    pub display: Display,
    pub overflow: Overflow,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Dimension,
}

impl Default for FlexStyle {
    fn default() -> Self {
        Self {
            width: Dimension::Auto,
            height: Dimension::Auto,
            min_width: Dimension::Auto,
            min_height: Dimension::Auto,
            margin: EdgeInsets::ZERO,
            padding: EdgeInsets::ZERO,
            direction: FlexDirection::Column,
            justify_content: JustifyContent::FlexStart,
            align_items: Align::Stretch,
            align_self: Align::Auto,
            display: Display::Flex,
            overflow: Overflow::Visible,
            flex_grow: 0.0,
            flex_shrink: 0.0,
            flex_basis: Dimension::Auto,
        }
    }
}

impl FlexStyle {
    /// `align_self` when set, otherwise the parent's `align_items`.
    pub fn resolved_align(&self, parent_items: Align) -> Align {
        match self.align_self {
            Align::Auto => parent_items,
            other => other,
        }
    }
}
