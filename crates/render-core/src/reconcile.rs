//! The diff-and-patch pass converting a descriptor tree into view
//! mutations.

use indexmap::IndexMap;
use render_flex::Rect;

use crate::context::Context;
use crate::node::NodeDescriptor;
use crate::options::RenderOptions;
use crate::tree::{MaterializedNode, MaterializedTree, NodeRef};
use render_view::ViewToolkit;

/// What one reconciliation pass did to the backing views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReconcileStats {
    pub created: usize,
    pub reused: usize,
    pub removed: usize,
}

impl ReconcileStats {
    /// True when the pass changed the set of live views.
    pub fn mutated_hierarchy(&self) -> bool {
        self.created > 0 || self.removed > 0
    }
}

/// Reconciles `descriptor` into `tree`: single synchronous depth-first
/// pre-order pass. At every position the new `(reuse identifier, key)`
/// pair is compared against the existing materialized node; a match
/// reuses the backing view, a mismatch destroys the old subtree and
/// creates a fresh view (custom initializer or the toolkit default).
/// Property setters replay in declaration order on every pass; a setter
/// the view rejects is logged and skipped without stopping the pass.
///
/// Returns the new root (None when the descriptor is the null node)
/// and the pass statistics.
pub fn reconcile(
    tree: &mut MaterializedTree,
    descriptor: &NodeDescriptor,
    toolkit: &dyn ViewToolkit,
    context: &Context,
    _options: &RenderOptions,
) -> (Option<NodeRef>, ReconcileStats) {
    let mut stats = ReconcileStats::default();
    if descriptor.is_null() {
        if let Some(root) = tree.root() {
            stats.removed += tree.remove_subtree(root);
            tree.set_root(None);
        }
        log::debug!("reconciled null root: {stats:?}");
        return (None, stats);
    }
    let existing = tree.root();
    let root = reconcile_node(tree, existing, None, descriptor, toolkit, context, &mut stats);
    tree.set_root(Some(root));
    log::debug!("reconciled root: {stats:?}");
    (Some(root), stats)
}

/// Match rule: reuse only when both the reuse identifier and the key
/// (when present) are equal.
fn matches(node: &MaterializedNode, descriptor: &NodeDescriptor) -> bool {
    node.reuse_id() == descriptor.reuse_id() && node.key() == descriptor.key()
}

fn reconcile_node(
    tree: &mut MaterializedTree,
    existing: Option<NodeRef>,
    parent: Option<NodeRef>,
    descriptor: &NodeDescriptor,
    toolkit: &dyn ViewToolkit,
    context: &Context,
    stats: &mut ReconcileStats,
) -> NodeRef {
    let reusable = existing.filter(|&node| matches(tree.node(node), descriptor));
    let created = reusable.is_none();
    let node_ref = match reusable {
        Some(node) => {
            stats.reused += 1;
            tree.node_mut(node).parent = parent;
            node
        }
        None => {
            if let Some(stale) = existing {
                stats.removed += tree.remove_subtree(stale);
            }
            let view = match descriptor.view_init() {
                Some(init) => init(),
                None => toolkit.create_view(descriptor.kind()),
            };
            stats.created += 1;
            tree.alloc(MaterializedNode {
                view,
                reuse_id: descriptor.reuse_id().clone(),
                key: descriptor.key().map(str::to_string),
                parent,
                children: Vec::new(),
                frame: Rect::ZERO,
                coordinator_key: None,
            })
        }
    };

    // Setter replay. Per-property failures degrade locally.
    {
        let node = tree.node_mut(node_ref);
        let kind = node.view().kind();
        for setter in descriptor.setters() {
            if let Err(err) = node
                .view_mut()
                .apply(setter.prop, &setter.value, setter.animator.as_ref())
            {
                log::warn!("skipping setter on {kind} view: {err}");
            }
        }
    }

    if let Some(binding) = descriptor.coordinator() {
        context.resolve_binding(binding, created);
        tree.node_mut(node_ref).coordinator_key = Some(binding.key().to_string());
    } else {
        tree.node_mut(node_ref).coordinator_key = None;
    }

    reconcile_children(tree, node_ref, descriptor, toolkit, context, stats);
    node_ref
}

/// Children are matched by key when present, otherwise by positional
/// index; the per-node match rule still checks reuse-identifier
/// equality. Old children left unmatched are destroyed, and the child
/// list ends up mirroring the (null-filtered) descriptor list exactly.
fn reconcile_children(
    tree: &mut MaterializedTree,
    parent: NodeRef,
    descriptor: &NodeDescriptor,
    toolkit: &dyn ViewToolkit,
    context: &Context,
    stats: &mut ReconcileStats,
) {
    let old: Vec<NodeRef> = tree.node(parent).children().to_vec();
    let mut taken = vec![false; old.len()];
    let mut keyed: IndexMap<String, usize> = IndexMap::new();
    for (position, &child) in old.iter().enumerate() {
        if let Some(key) = tree.node(child).key() {
            keyed.insert(key.to_string(), position);
        }
    }

    let mut new_children: Vec<NodeRef> = Vec::new();
    for (position, child_descriptor) in descriptor.visible_children().enumerate() {
        let candidate = match child_descriptor.key() {
            Some(key) => keyed.shift_remove(key).map(|old_position| {
                taken[old_position] = true;
                old[old_position]
            }),
            None => match old.get(position) {
                Some(&old_child)
                    if !taken[position] && tree.node(old_child).key().is_none() =>
                {
                    taken[position] = true;
                    Some(old_child)
                }
                _ => None,
            },
        };
        let child = reconcile_node(
            tree,
            candidate,
            Some(parent),
            child_descriptor,
            toolkit,
            context,
            stats,
        );
        new_children.push(child);
    }

    for (position, &old_child) in old.iter().enumerate() {
        if !taken[position] {
            stats.removed += tree.remove_subtree(old_child);
        }
    }

    tree.node_mut(parent).children = new_children;
}
