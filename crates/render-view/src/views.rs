//! Headless view implementations backing tests and demos.
//!
//! These play the role the native widget classes play on a real
//! platform: they hold the applied property state, the flex style
//! record, and the frame the layout bridge assigns.

use std::any::Any;
use std::rc::Rc;

use render_flex::{FlexStyle, Rect};

use crate::color::Color;
use crate::properties::{Animator, PropId, PropValue, PropertyError, TextAlignment};
use crate::view::{ElementKind, NativeView, ViewBase};

/// Plain container view.
#[derive(Debug, Default)]
pub struct PlainView {
    pub base: ViewBase,
}

impl PlainView {
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(),
        }
    }
}

impl NativeView for PlainView {
    fn kind(&self) -> ElementKind {
        ElementKind::PLAIN
    }

    fn apply(
        &mut self,
        prop: PropId,
        value: &PropValue,
        _animator: Option<&Animator>,
    ) -> Result<(), PropertyError> {
        self.base.apply(ElementKind::PLAIN.name(), prop, value)
    }

    fn flex_style(&self) -> &FlexStyle {
        &self.base.style
    }

    fn flex_style_mut(&mut self) -> &mut FlexStyle {
        &mut self.base.style
    }

    fn frame(&self) -> Rect {
        self.base.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.base.frame = frame;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Text-displaying view.
#[derive(Debug, Default)]
pub struct LabelView {
    pub base: ViewBase,
    pub text: String,
    pub text_color: Color,
    pub font_size: f32,
    pub alignment: TextAlignment,
    pub line_limit: i64,
}

impl LabelView {
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(),
            text_color: Color::BLACK,
            font_size: 12.0,
            ..Self::default()
        }
    }
}

impl NativeView for LabelView {
    fn kind(&self) -> ElementKind {
        ElementKind::LABEL
    }

    fn apply(
        &mut self,
        prop: PropId,
        value: &PropValue,
        _animator: Option<&Animator>,
    ) -> Result<(), PropertyError> {
        let mismatch = |expected: &'static str| PropertyError::TypeMismatch { prop, expected };
        match prop {
            PropId::Text => self.text = value.text().ok_or(mismatch("text"))?.to_string(),
            PropId::TextColor => self.text_color = value.color().ok_or(mismatch("color"))?,
            PropId::FontSize => self.font_size = value.float().ok_or(mismatch("float"))?,
            PropId::TextAlignment => match value {
                PropValue::TextAlign(alignment) => self.alignment = *alignment,
                _ => return Err(mismatch("text alignment")),
            },
            PropId::LineLimit => self.line_limit = value.int().ok_or(mismatch("int"))?,
            other => return self.base.apply(ElementKind::LABEL.name(), other, value),
        }
        Ok(())
    }

    fn flex_style(&self) -> &FlexStyle {
        &self.base.style
    }

    fn flex_style_mut(&mut self) -> &mut FlexStyle {
        &mut self.base.style
    }

    fn frame(&self) -> Rect {
        self.base.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.base.frame = frame;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Tap target callback. Cloned out of the view before dispatch so the
/// handler can freely request a re-render.
pub type TapAction = Rc<dyn Fn()>;

/// Tappable view with a registered action.
#[derive(Default)]
pub struct ButtonView {
    pub base: ViewBase,
    pub title: String,
    pub enabled: bool,
    action: Option<TapAction>,
}

impl ButtonView {
    pub fn new() -> Self {
        Self {
            base: ViewBase::new(),
            enabled: true,
            ..Self::default()
        }
    }

    /// Registers the tap target, replacing any previous one.
    pub fn set_action(&mut self, action: impl Fn() + 'static) {
        self.action = Some(Rc::new(action));
    }

    pub fn clear_action(&mut self) {
        self.action = None;
    }

    /// The registered tap target, if any.
    pub fn action(&self) -> Option<TapAction> {
        self.action.clone()
    }

    /// Dispatches a tap. Disabled buttons swallow the event.
    pub fn tap(&self) {
        if !self.enabled {
            return;
        }
        if let Some(action) = self.action.clone() {
            action();
        }
    }
}

impl std::fmt::Debug for ButtonView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ButtonView")
            .field("title", &self.title)
            .field("enabled", &self.enabled)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

impl NativeView for ButtonView {
    fn kind(&self) -> ElementKind {
        ElementKind::BUTTON
    }

    fn apply(
        &mut self,
        prop: PropId,
        value: &PropValue,
        _animator: Option<&Animator>,
    ) -> Result<(), PropertyError> {
        let mismatch = |expected: &'static str| PropertyError::TypeMismatch { prop, expected };
        match prop {
            PropId::Title => self.title = value.text().ok_or(mismatch("text"))?.to_string(),
            PropId::Enabled => self.enabled = value.bool().ok_or(mismatch("bool"))?,
            other => return self.base.apply(ElementKind::BUTTON.name(), other, value),
        }
        Ok(())
    }

    fn flex_style(&self) -> &FlexStyle {
        &self.base.style
    }

    fn flex_style_mut(&mut self) -> &mut FlexStyle {
        &mut self.base.style
    }

    fn frame(&self) -> Rect {
        self.base.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.base.frame = frame;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
