//! The toolkit factory boundary.

use render_flex::EdgeInsets;

use crate::view::{ElementKind, NativeView};
use crate::views::{ButtonView, LabelView, PlainView};

/// Capabilities the reconciler consumes from the hosting toolkit:
/// default view construction per element kind and the platform's safe
/// area insets.
pub trait ViewToolkit {
    /// Instantiates the default view for an element kind.
    ///
    /// Asking for a kind the toolkit does not know is a configuration
    /// error and fatal: the reconciler has no fallback view class.
    fn create_view(&self, kind: ElementKind) -> Box<dyn NativeView>;

    /// Platform insets applied when the render options ask for them.
    fn safe_area_insets(&self) -> EdgeInsets {
        EdgeInsets::ZERO
    }
}

/// In-process toolkit backing tests and demos with the headless views.
#[derive(Debug, Default)]
pub struct HeadlessToolkit {
    safe_area: EdgeInsets,
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_safe_area(safe_area: EdgeInsets) -> Self {
        Self { safe_area }
    }
}

impl ViewToolkit for HeadlessToolkit {
    fn create_view(&self, kind: ElementKind) -> Box<dyn NativeView> {
        log::trace!("creating headless `{kind}` view");
        match kind {
            ElementKind::PLAIN => Box::new(PlainView::new()),
            ElementKind::LABEL => Box::new(LabelView::new()),
            ElementKind::BUTTON => Box::new(ButtonView::new()),
            other => panic!("no registered view class for element kind `{other}`"),
        }
    }

    fn safe_area_insets(&self) -> EdgeInsets {
        self.safe_area
    }
}
