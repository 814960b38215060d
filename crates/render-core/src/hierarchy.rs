//! The caller-facing root object tying a context, a toolkit, an engine,
//! and a build function into one render loop.

use render_flex::{LayoutEngine, Size};
use render_view::ViewToolkit;

use crate::context::{Context, ReconciliationInfo};
use crate::layout::{layout, LayoutInfo};
use crate::node::NodeDescriptor;
use crate::options::RenderOptions;
use crate::reconcile::{reconcile, ReconcileStats};
use crate::tree::{MaterializedTree, NodeRef};

/// A registered node hierarchy: the persistent materialized tree plus
/// everything needed to rebuild it from the top.
///
/// The build function is the pure descriptor producer — a function of
/// the current coordinator states — re-run on every reconciliation
/// pass. Coordinators request passes through the context's dirty flags;
/// the host drains them with [`Hierarchy::flush`].
pub struct Hierarchy {
    context: Context,
    toolkit: Box<dyn ViewToolkit>,
    engine: Box<dyn LayoutEngine>,
    build: Box<dyn Fn(&Context) -> NodeDescriptor>,
    tree: MaterializedTree,
}

impl Hierarchy {
    pub fn new(
        context: Context,
        toolkit: impl ViewToolkit + 'static,
        engine: impl LayoutEngine + 'static,
        build: impl Fn(&Context) -> NodeDescriptor + 'static,
    ) -> Self {
        Self {
            context,
            toolkit: Box::new(toolkit),
            engine: Box::new(engine),
            build: Box::new(build),
            tree: MaterializedTree::new(),
        }
    }

    /// Rebuilds the descriptor tree from the top, reconciles it into
    /// the materialized tree, and runs a layout pass. Delegates are
    /// notified around the whole operation.
    pub fn reconcile(&mut self, available: Size, options: &RenderOptions) -> ReconcileStats {
        self.context
            .notify_will_reconcile(&ReconciliationInfo::default());
        let descriptor = (self.build)(&self.context);
        let (_, stats) = reconcile(
            &mut self.tree,
            &descriptor,
            self.toolkit.as_ref(),
            &self.context,
            options,
        );
        let layout_info = self.layout(available, options);
        let info = ReconciliationInfo {
            must_invalidate_layout: stats.mutated_hierarchy(),
            keys_for_nodes_with_mutated_size: layout_info.keys_for_nodes_with_mutated_size,
        };
        self.context.notify_did_reconcile(&info);
        stats
    }

    /// Layout-only pass over the current materialized tree.
    pub fn layout(&mut self, available: Size, options: &RenderOptions) -> LayoutInfo {
        layout(
            &mut self.tree,
            self.engine.as_ref(),
            self.toolkit.as_ref(),
            available,
            options,
        )
    }

    /// Marks the hierarchy as needing a rebuild-from-the-top.
    pub fn set_needs_reconcile(&self) {
        self.context.set_needs_reconcile();
    }

    /// Marks the hierarchy as needing a layout pass.
    pub fn set_needs_layout(&self) {
        self.context.set_needs_layout();
    }

    /// Drains the dirty flags: a pending reconcile request runs a full
    /// pass (which includes layout), otherwise a pending layout request
    /// runs layout alone. Returns whether anything ran.
    pub fn flush(&mut self, available: Size, options: &RenderOptions) -> bool {
        if self.context.take_needs_reconcile() {
            self.context.take_needs_layout();
            self.reconcile(available, options);
            return true;
        }
        if self.context.take_needs_layout() {
            self.layout(available, options);
            return true;
        }
        false
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn tree(&self) -> &MaterializedTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut MaterializedTree {
        &mut self.tree
    }

    pub fn root(&self) -> Option<NodeRef> {
        self.tree.root()
    }
}
