/// Configuration flags for reconciliation and layout passes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Shrink the available size by the toolkit's safe-area insets
    /// before handing it to the layout engine.
    pub use_safe_area_insets: bool,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn safe_area() -> Self {
        Self {
            use_safe_area_insets: true,
        }
    }
}
