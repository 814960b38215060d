//! Testing utilities and harness for Render-RS.

mod host;

pub use host::RenderHost;

pub mod prelude {
    pub use crate::host::RenderHost;
}
