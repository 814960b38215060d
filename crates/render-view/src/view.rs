//! The view capability trait and the shared base record.

use std::any::Any;

use render_flex::{FlexStyle, Rect};

use crate::color::Color;
use crate::properties::{Animator, PropId, PropValue, PropertyError};

/// Opaque view-class identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementKind(pub &'static str);

impl ElementKind {
    pub const PLAIN: ElementKind = ElementKind("View");
    pub const LABEL: ElementKind = ElementKind("Label");
    pub const BUTTON: ElementKind = ElementKind("Button");

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Capabilities the reconciler and layout bridge consume from a backing
/// view. One instance per materialized tree position, owned by the
/// reconciler's arena.
pub trait NativeView: Any {
    fn kind(&self) -> ElementKind;

    /// Applies one enumerated property. Unknown ids and mistyped values
    /// come back as [`PropertyError`]; the view is left unchanged.
    fn apply(
        &mut self,
        prop: PropId,
        value: &PropValue,
        animator: Option<&Animator>,
    ) -> Result<(), PropertyError>;

    /// The layout style record attached to this view, mirrored into
    /// the engine's style tree on every layout pass.
    fn flex_style(&self) -> &FlexStyle;
    fn flex_style_mut(&mut self) -> &mut FlexStyle;

    fn frame(&self) -> Rect;
    fn set_frame(&mut self, frame: Rect);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Common state embedded in every headless view: the frame, the flex
/// style record, and the view properties all view kinds share.
#[derive(Clone, Debug, Default)]
pub struct ViewBase {
    pub frame: Rect,
    pub style: FlexStyle,
    pub background_color: Color,
    pub alpha: f32,
    pub hidden: bool,
}

impl ViewBase {
    pub fn new() -> Self {
        Self {
            alpha: 1.0,
            ..Self::default()
        }
    }

    /// Handles the layout subset plus the shared view properties.
    /// Returns `Unsupported` for ids a concrete view must handle itself.
    pub fn apply(
        &mut self,
        kind: &'static str,
        prop: PropId,
        value: &PropValue,
    ) -> Result<(), PropertyError> {
        let mismatch = |expected: &'static str| PropertyError::TypeMismatch { prop, expected };
        match prop {
            PropId::Width => self.style.width = value.dimension().ok_or(mismatch("dimension"))?,
            PropId::Height => self.style.height = value.dimension().ok_or(mismatch("dimension"))?,
            PropId::MinWidth => {
                self.style.min_width = value.dimension().ok_or(mismatch("dimension"))?
            }
            PropId::MinHeight => {
                self.style.min_height = value.dimension().ok_or(mismatch("dimension"))?
            }
            PropId::MarginTop => self.style.margin.top = value.float().ok_or(mismatch("float"))?,
            PropId::MarginLeft => self.style.margin.left = value.float().ok_or(mismatch("float"))?,
            PropId::MarginBottom => {
                self.style.margin.bottom = value.float().ok_or(mismatch("float"))?
            }
            PropId::MarginRight => {
                self.style.margin.right = value.float().ok_or(mismatch("float"))?
            }
            PropId::PaddingTop => self.style.padding.top = value.float().ok_or(mismatch("float"))?,
            PropId::PaddingLeft => {
                self.style.padding.left = value.float().ok_or(mismatch("float"))?
            }
            PropId::PaddingBottom => {
                self.style.padding.bottom = value.float().ok_or(mismatch("float"))?
            }
            PropId::PaddingRight => {
                self.style.padding.right = value.float().ok_or(mismatch("float"))?
            }
            PropId::FlexDirection => match value {
                PropValue::FlexDirection(direction) => self.style.direction = *direction,
                _ => return Err(mismatch("flex direction")),
            },
            PropId::JustifyContent => match value {
                PropValue::Justify(justify) => self.style.justify_content = *justify,
                _ => return Err(mismatch("justify-content")),
            },
            PropId::AlignItems => match value {
                PropValue::Align(align) => self.style.align_items = *align,
                _ => return Err(mismatch("align")),
            },
            PropId::AlignSelf => match value {
                PropValue::Align(align) => self.style.align_self = *align,
                _ => return Err(mismatch("align")),
            },
            PropId::Display => match value {
                PropValue::Display(display) => self.style.display = *display,
                _ => return Err(mismatch("display")),
            },
            PropId::Overflow => match value {
                PropValue::Overflow(overflow) => self.style.overflow = *overflow,
                _ => return Err(mismatch("overflow")),
            },
            PropId::FlexGrow => self.style.flex_grow = value.float().ok_or(mismatch("float"))?,
            PropId::FlexShrink => self.style.flex_shrink = value.float().ok_or(mismatch("float"))?,
            PropId::FlexBasis => {
                self.style.flex_basis = value.dimension().ok_or(mismatch("dimension"))?
            }
            PropId::BackgroundColor => {
                self.background_color = value.color().ok_or(mismatch("color"))?
            }
            PropId::Alpha => self.alpha = value.float().ok_or(mismatch("float"))?,
            PropId::Hidden => self.hidden = value.bool().ok_or(mismatch("bool"))?,
            other => return Err(PropertyError::Unsupported { prop: other, kind }),
        }
        Ok(())
    }
}
