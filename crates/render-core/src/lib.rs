//! Node reconciliation and coordinator/state binding for Render-RS.
//!
//! The pipeline: a caller-supplied build function produces an immutable
//! [`NodeDescriptor`] tree from the current coordinator state, the
//! [`reconcile`] pass diffs it against the persistent
//! [`MaterializedTree`] of backing views (reuse / create / destroy per
//! position), and the [`layout`] bridge asks the external
//! [`render_flex::LayoutEngine`] for frames and writes them onto the
//! views. Coordinator mutations request the next pass explicitly via
//! [`Context::set_needs_reconcile`]; nothing here auto-detects state
//! changes.
//!
//! Everything is single-threaded and synchronous: passes run to
//! completion on the owning thread, and cross-thread access must be
//! marshaled by the caller before entering this crate.

mod context;
mod coordinator;
mod error;
mod hierarchy;
mod layout;
mod node;
mod options;
mod reconcile;
mod tree;
pub mod widgets;

pub use context::{Context, ContextDelegate, DelegateToken, ReconciliationInfo};
pub use coordinator::{Coordinator, CoordinatorBinding, CoordinatorRef, STATELESS_KEY_PREFIX};
pub use error::ConfigError;
pub use hierarchy::Hierarchy;
pub use layout::{layout, LayoutInfo};
pub use node::{NodeBuilder, NodeDescriptor, ReuseId, StyleSetter};
pub use options::RenderOptions;
pub use reconcile::{reconcile, ReconcileStats};
pub use tree::{MaterializedNode, MaterializedTree, NodeRef};

pub mod prelude {
    pub use crate::context::{Context, ContextDelegate, ReconciliationInfo};
    pub use crate::coordinator::{Coordinator, CoordinatorRef};
    pub use crate::hierarchy::Hierarchy;
    pub use crate::node::{NodeBuilder, NodeDescriptor};
    pub use crate::options::RenderOptions;
    pub use crate::widgets::{Button, Component, HStack, Label, VStack, View};
    pub use render_flex::prelude::*;
    pub use render_view::prelude::*;
}
