//! The native view toolkit boundary for Render-RS.
//!
//! The reconciler consumes a small set of capabilities from whatever
//! widget toolkit backs the tree: instantiate a view by element kind,
//! set enumerated properties, read/write the flex style record, set the
//! frame, and register event callbacks. [`NativeView`] and
//! [`ViewToolkit`] capture exactly that surface; the headless
//! implementations in [`views`] back the tests and demos.

mod color;
mod properties;
mod toolkit;
mod view;
pub mod views;

pub use color::Color;
pub use properties::{Animator, PropId, PropValue, PropertyError, TextAlignment};
pub use toolkit::{HeadlessToolkit, ViewToolkit};
pub use view::{ElementKind, NativeView, ViewBase};

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::properties::{Animator, PropId, PropValue, PropertyError, TextAlignment};
    pub use crate::toolkit::{HeadlessToolkit, ViewToolkit};
    pub use crate::view::{ElementKind, NativeView};
}
