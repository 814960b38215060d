//! A headless render host: context + toolkit + engine + hierarchy wired
//! together, with key-based queries and tap simulation for assertions.

use render_core::{
    Context, Hierarchy, MaterializedTree, NodeDescriptor, ReconcileStats, RenderOptions,
};
use render_flex::{FlexEngine, Rect, Size};
use render_view::views::{ButtonView, LabelView};
use render_view::HeadlessToolkit;

/// Drives a hierarchy against the headless toolkit and the built-in
/// flex engine at a fixed available size.
pub struct RenderHost {
    hierarchy: Hierarchy,
    available: Size,
    options: RenderOptions,
}

impl RenderHost {
    pub fn new(available: Size, build: impl Fn(&Context) -> NodeDescriptor + 'static) -> Self {
        Self::with_toolkit(available, HeadlessToolkit::new(), build)
    }

    pub fn with_toolkit(
        available: Size,
        toolkit: HeadlessToolkit,
        build: impl Fn(&Context) -> NodeDescriptor + 'static,
    ) -> Self {
        let context = Context::new();
        Self {
            hierarchy: Hierarchy::new(context, toolkit, FlexEngine::new(), build),
            available,
            options: RenderOptions::default(),
        }
    }

    pub fn set_options(&mut self, options: RenderOptions) {
        self.options = options;
    }

    pub fn set_available(&mut self, available: Size) {
        self.available = available;
    }

    pub fn context(&self) -> &Context {
        self.hierarchy.context()
    }

    pub fn tree(&self) -> &MaterializedTree {
        self.hierarchy.tree()
    }

    /// Runs one full reconcile + layout pass.
    pub fn render(&mut self) -> ReconcileStats {
        self.hierarchy.reconcile(self.available, &self.options)
    }

    /// Drains pending dirty flags; returns whether a pass ran.
    pub fn flush(&mut self) -> bool {
        self.hierarchy.flush(self.available, &self.options)
    }

    /// Number of live backing views.
    pub fn view_count(&self) -> usize {
        self.hierarchy.tree().len()
    }

    /// Text of the label at the node keyed `key`.
    pub fn label_text(&self, key: &str) -> Option<String> {
        let tree = self.hierarchy.tree();
        let node = tree.find_by_key(key)?;
        tree.get(node)?
            .view()
            .as_any()
            .downcast_ref::<LabelView>()
            .map(|label| label.text.clone())
    }

    /// Frame applied to the node keyed `key` by the last layout pass.
    pub fn frame(&self, key: &str) -> Option<Rect> {
        let tree = self.hierarchy.tree();
        let node = tree.find_by_key(key)?;
        Some(tree.get(node)?.frame())
    }

    /// Simulates a tap on the button keyed `key`. The action runs after
    /// all tree borrows are released, so handlers are free to request a
    /// re-render; the request stays pending until [`RenderHost::flush`].
    /// Returns whether a button with an action was found.
    pub fn tap(&mut self, key: &str) -> bool {
        let action = {
            let tree = self.hierarchy.tree();
            tree.find_by_key(key)
                .and_then(|node| tree.get(node))
                .and_then(|node| node.view().as_any().downcast_ref::<ButtonView>())
                .filter(|button| button.enabled)
                .and_then(|button| button.action())
        };
        match action {
            Some(action) => {
                log::debug!("dispatching tap on `{key}`");
                action();
                true
            }
            None => false,
        }
    }

    /// Tap plus an immediate flush of whatever the handler requested.
    pub fn tap_and_flush(&mut self, key: &str) -> bool {
        let hit = self.tap(key);
        self.flush();
        hit
    }
}
