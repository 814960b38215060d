//! The persistent, arena-indexed materialized view tree.
//!
//! One [`MaterializedNode`] per live backing view, stored in a slab with
//! parent/child relationships kept as indices. The arena layout avoids
//! the parent back-pointer ownership cycles the original design carried.

use render_flex::Rect;
use render_view::NativeView;

use crate::node::ReuseId;

/// Index of a materialized node inside its tree's arena.
pub type NodeRef = usize;

/// Reconciler-owned record pairing one backing view with its
/// bookkeeping. Created when a descriptor position has no reusable
/// match; destroyed (view detached with it) when a pass leaves its
/// position unmatched.
pub struct MaterializedNode {
    pub(crate) view: Box<dyn NativeView>,
    pub(crate) reuse_id: ReuseId,
    pub(crate) key: Option<String>,
    pub(crate) parent: Option<NodeRef>,
    pub(crate) children: Vec<NodeRef>,
    pub(crate) frame: Rect,
    pub(crate) coordinator_key: Option<String>,
}

impl MaterializedNode {
    pub fn view(&self) -> &dyn NativeView {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> &mut dyn NativeView {
        self.view.as_mut()
    }

    pub fn reuse_id(&self) -> &ReuseId {
        &self.reuse_id
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn parent(&self) -> Option<NodeRef> {
        self.parent
    }

    pub fn children(&self) -> &[NodeRef] {
        &self.children
    }

    /// Frame applied by the most recent layout pass.
    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// Registry key of the coordinator bound at this position, if any.
    pub fn coordinator_key(&self) -> Option<&str> {
        self.coordinator_key.as_deref()
    }
}

/// Slab arena holding the materialized tree. Shape mirrors the most
/// recently reconciled descriptor tree exactly.
#[derive(Default)]
pub struct MaterializedTree {
    slots: Vec<Option<MaterializedNode>>,
    free: Vec<NodeRef>,
    root: Option<NodeRef>,
    len: usize,
}

impl MaterializedTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> Option<NodeRef> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: Option<NodeRef>) {
        self.root = root;
    }

    /// Number of live materialized nodes (equals live backing views).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, node: NodeRef) -> Option<&MaterializedNode> {
        self.slots.get(node).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, node: NodeRef) -> Option<&mut MaterializedNode> {
        self.slots.get_mut(node).and_then(|slot| slot.as_mut())
    }

    /// Panicking accessors for refs the reconciler just produced;
    /// a dangling ref here is an internal invariant violation.
    pub(crate) fn node(&self, node: NodeRef) -> &MaterializedNode {
        self.get(node)
            .unwrap_or_else(|| panic!("dangling materialized node ref {node}"))
    }

    pub(crate) fn node_mut(&mut self, node: NodeRef) -> &mut MaterializedNode {
        self.get_mut(node)
            .unwrap_or_else(|| panic!("dangling materialized node ref {node}"))
    }

    pub(crate) fn alloc(&mut self, node: MaterializedNode) -> NodeRef {
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(node);
                index
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Removes a node and its whole subtree, returning how many nodes
    /// were destroyed. The caller owns fixing up the parent's child
    /// list (and the root pointer when removing the root).
    pub(crate) fn remove_subtree(&mut self, node: NodeRef) -> usize {
        let Some(removed) = self.slots.get_mut(node).and_then(|slot| slot.take()) else {
            return 0;
        };
        self.free.push(node);
        self.len -= 1;
        let mut count = 1;
        for child in removed.children {
            count += self.remove_subtree(child);
        }
        count
    }

    /// Depth-first pre-order search by node key.
    pub fn find_by_key(&self, key: &str) -> Option<NodeRef> {
        fn walk(tree: &MaterializedTree, node: NodeRef, key: &str) -> Option<NodeRef> {
            let current = tree.get(node)?;
            if current.key.as_deref() == Some(key) {
                return Some(node);
            }
            current
                .children
                .iter()
                .find_map(|&child| walk(tree, child, key))
        }
        walk(self, self.root?, key)
    }

    /// Depth-first pre-order visit of the live tree.
    pub fn visit(&self, mut f: impl FnMut(NodeRef, &MaterializedNode)) {
        fn walk(
            tree: &MaterializedTree,
            node: NodeRef,
            f: &mut impl FnMut(NodeRef, &MaterializedNode),
        ) {
            if let Some(current) = tree.get(node) {
                f(node, current);
                for &child in &current.children {
                    walk(tree, child, f);
                }
            }
        }
        if let Some(root) = self.root {
            walk(self, root, &mut f);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use render_view::views::PlainView;

    fn plain(key: Option<&str>) -> MaterializedNode {
        MaterializedNode {
            view: Box::new(PlainView::new()),
            reuse_id: ReuseId::Derived("View"),
            key: key.map(str::to_string),
            parent: None,
            children: Vec::new(),
            frame: Rect::ZERO,
            coordinator_key: None,
        }
    }

    #[test]
    fn alloc_reuses_freed_slots() {
        let mut tree = MaterializedTree::new();
        let a = tree.alloc(plain(None));
        let removed = tree.remove_subtree(a);
        assert_eq!(removed, 1);
        let b = tree.alloc(plain(None));
        assert_eq!(a, b);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn remove_subtree_counts_descendants() {
        let mut tree = MaterializedTree::new();
        let root = tree.alloc(plain(None));
        let child = tree.alloc(plain(Some("child")));
        let grandchild = tree.alloc(plain(None));
        tree.node_mut(root).children.push(child);
        tree.node_mut(child).parent = Some(root);
        tree.node_mut(child).children.push(grandchild);
        tree.node_mut(grandchild).parent = Some(child);
        tree.set_root(Some(root));

        assert_eq!(tree.find_by_key("child"), Some(child));
        assert_eq!(tree.remove_subtree(child), 2);
        assert_eq!(tree.len(), 1);
        assert!(tree.get(grandchild).is_none());
    }
}
