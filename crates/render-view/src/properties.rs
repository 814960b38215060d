//! Enumerated property ids and values.
//!
//! The original keypath-reflection surface is replaced by a closed
//! property table: every settable property has a [`PropId`] resolved at
//! compile time, and views accept or reject ids explicitly. An id a
//! view does not recognize is a recoverable [`PropertyError`], reported
//! by the caller and skipped.

use std::time::Duration;

use render_flex::{Align, Dimension, Display, FlexDirection, JustifyContent, Overflow};
use thiserror::Error;

use crate::color::Color;

/// Identifier of one settable view property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropId {
    // Layout-affecting properties, routed into the view's flex style.
    Width,
    Height,
    MinWidth,
    MinHeight,
    MarginTop,
    MarginLeft,
    MarginBottom,
    MarginRight,
    PaddingTop,
    PaddingLeft,
    PaddingBottom,
    PaddingRight,
    FlexDirection,
    JustifyContent,
    AlignItems,
    AlignSelf,
    Display,
    Overflow,
    FlexGrow,
    FlexShrink,
    FlexBasis,
    // Common view properties.
    BackgroundColor,
    Alpha,
    Hidden,
    // Label properties.
    Text,
    TextColor,
    FontSize,
    TextAlignment,
    LineLimit,
    // Button properties.
    Title,
    Enabled,
}

impl PropId {
    /// Whether this property feeds the layout engine's style record.
    pub fn is_layout(&self) -> bool {
        matches!(
            self,
            PropId::Width
                | PropId::Height
                | PropId::MinWidth
                | PropId::MinHeight
                | PropId::MarginTop
                | PropId::MarginLeft
                | PropId::MarginBottom
                | PropId::MarginRight
                | PropId::PaddingTop
                | PropId::PaddingLeft
                | PropId::PaddingBottom
                | PropId::PaddingRight
                | PropId::FlexDirection
                | PropId::JustifyContent
                | PropId::AlignItems
                | PropId::AlignSelf
                | PropId::Display
                | PropId::Overflow
                | PropId::FlexGrow
                | PropId::FlexShrink
                | PropId::FlexBasis
        )
    }
}

/// Horizontal text alignment for label views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Tagged value for a property setter.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    Float(f32),
    Int(i64),
    Bool(bool),
    Text(String),
    Color(Color),
    Dimension(Dimension),
    FlexDirection(FlexDirection),
    Justify(JustifyContent),
    Align(Align),
    Display(Display),
    Overflow(Overflow),
    TextAlign(TextAlignment),
}

impl PropValue {
    pub fn float(&self) -> Option<f32> {
        match self {
            PropValue::Float(value) => Some(*value),
            PropValue::Int(value) => Some(*value as f32),
            _ => None,
        }
    }

    pub fn int(&self) -> Option<i64> {
        match self {
            PropValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            PropValue::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            PropValue::Color(value) => Some(*value),
            _ => None,
        }
    }

    /// Dimensions additionally accept bare floats as point values.
    pub fn dimension(&self) -> Option<Dimension> {
        match self {
            PropValue::Dimension(value) => Some(*value),
            PropValue::Float(value) => Some(Dimension::Points(*value)),
            PropValue::Int(value) => Some(Dimension::Points(*value as f32)),
            _ => None,
        }
    }
}

/// Animation directive attached to a property setter.
///
/// Carried through to the backing view; the headless views apply the
/// target value immediately (timing curves are out of scope here).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Animator {
    pub duration: Duration,
    pub delay: Duration,
}

impl Animator {
    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
        }
    }
}

/// A property setter the target view could not apply. Local degradation
/// only: the caller logs it and moves on to the next setter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error("property {prop:?} is not supported by {kind} views")]
    Unsupported { prop: PropId, kind: &'static str },
    #[error("property {prop:?} expects a {expected} value")]
    TypeMismatch {
        prop: PropId,
        expected: &'static str,
    },
}
