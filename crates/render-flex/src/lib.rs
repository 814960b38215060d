//! Geometry primitives, flex style records, and the layout engine
//! boundary for Render-RS.
//!
//! The rest of the framework treats layout as a black box behind
//! [`LayoutEngine`]: hand it a tree of style records and an available
//! size, get back a tree of frames. [`FlexEngine`] is the built-in,
//! single-line flexbox implementation of that boundary.

mod engine;
mod geometry;
mod style;

pub use engine::*;
pub use geometry::*;
pub use style::*;

pub mod prelude {
    pub use crate::engine::{FlexEngine, FrameNode, LayoutEngine, StyleNode};
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
    pub use crate::style::{
        Align, Dimension, Display, FlexDirection, FlexStyle, JustifyContent, Overflow,
    };
}
