//! The layout bridge: mirrors the materialized tree into the engine's
//! style tree, computes frames, and applies them to the backing views.

use render_flex::{FrameNode, LayoutEngine, Size, StyleNode};
use render_view::ViewToolkit;

use crate::options::RenderOptions;
use crate::tree::{MaterializedTree, NodeRef};

/// What a layout pass observed.
#[derive(Clone, Debug, Default)]
pub struct LayoutInfo {
    /// Keys of nodes whose frame size changed during this pass.
    pub keys_for_nodes_with_mutated_size: Vec<String>,
}

/// Computes and applies frames for the whole tree.
///
/// Layout is recomputed fully on every call; deciding whether a call is
/// needed at all is the caller's optimization, not this bridge's. The
/// engine receives each view's style record unmodified — constraint
/// validation is the engine's own concern. Frames are applied top-down,
/// parent before children, since child frames live in the parent's
/// coordinate space.
pub fn layout(
    tree: &mut MaterializedTree,
    engine: &dyn LayoutEngine,
    toolkit: &dyn ViewToolkit,
    available: Size,
    options: &RenderOptions,
) -> LayoutInfo {
    let mut info = LayoutInfo::default();
    let Some(root) = tree.root() else {
        return info;
    };
    let available = if options.use_safe_area_insets {
        available.inset_by(toolkit.safe_area_insets())
    } else {
        available
    };
    let style_root = style_tree(tree, root);
    let frames = engine.compute_layout(&style_root, available);
    apply_frames(tree, root, &frames, &mut info);
    log::trace!(
        "layout pass in {available:?}: {} resized",
        info.keys_for_nodes_with_mutated_size.len()
    );
    info
}

fn style_tree(tree: &MaterializedTree, node: NodeRef) -> StyleNode {
    let current = tree.node(node);
    StyleNode {
        style: current.view().flex_style().clone(),
        children: current
            .children()
            .to_vec()
            .into_iter()
            .map(|child| style_tree(tree, child))
            .collect(),
    }
}

fn apply_frames(
    tree: &mut MaterializedTree,
    node: NodeRef,
    frames: &FrameNode,
    info: &mut LayoutInfo,
) {
    let children: Vec<NodeRef> = {
        let current = tree.node_mut(node);
        if current.frame.size != frames.frame.size {
            if let Some(key) = current.key() {
                info.keys_for_nodes_with_mutated_size.push(key.to_string());
            }
        }
        current.frame = frames.frame;
        current.view_mut().set_frame(frames.frame);
        current.children().to_vec()
    };
    // The engine's output children parallel the style tree's exactly.
    debug_assert_eq!(children.len(), frames.children.len());
    for (child, child_frames) in children.into_iter().zip(&frames.children) {
        apply_frames(tree, child, child_frames, info);
    }
}
