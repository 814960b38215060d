use render_view::views::LabelView;
use render_view::{HeadlessToolkit, PropId, PropValue};

use crate::context::Context;
use crate::coordinator::Coordinator;
use crate::node::NodeDescriptor;
use crate::options::RenderOptions;
use crate::reconcile::reconcile;
use crate::tree::MaterializedTree;
use crate::widgets::{HStack, Label, VStack};

struct Fixture {
    tree: MaterializedTree,
    toolkit: HeadlessToolkit,
    context: Context,
}

impl Fixture {
    fn new() -> Self {
        Self {
            tree: MaterializedTree::new(),
            toolkit: HeadlessToolkit::new(),
            context: Context::new(),
        }
    }

    fn run(&mut self, descriptor: &NodeDescriptor) -> crate::ReconcileStats {
        let (_, stats) = reconcile(
            &mut self.tree,
            descriptor,
            &self.toolkit,
            &self.context,
            &RenderOptions::default(),
        );
        stats
    }

    fn label_text(&self, key: &str) -> Option<String> {
        let node = self.tree.find_by_key(key)?;
        self.tree
            .get(node)?
            .view()
            .as_any()
            .downcast_ref::<LabelView>()
            .map(|label| label.text.clone())
    }
}

fn two_labels(first: &str, second: &str) -> NodeDescriptor {
    VStack()
        .child(Label(first).key("first").build())
        .child(Label(second).key("second").build())
        .build()
}

#[test]
fn identical_trees_reuse_every_view() {
    let mut fixture = Fixture::new();
    let stats = fixture.run(&two_labels("a", "b"));
    assert_eq!(stats.created, 3);

    let stats = fixture.run(&two_labels("a", "b"));
    assert_eq!(stats.created, 0);
    assert_eq!(stats.removed, 0);
    assert_eq!(stats.reused, 3);
}

#[test]
fn changed_key_destroys_and_recreates_even_with_same_reuse_id() {
    let mut fixture = Fixture::new();
    fixture.run(
        &VStack()
            .child(Label("a").key("one").build())
            .build(),
    );
    let stats = fixture.run(
        &VStack()
            .child(Label("a").key("two").build())
            .build(),
    );
    assert_eq!(stats.created, 1);
    assert_eq!(stats.removed, 1);
}

#[test]
fn reconciling_null_tears_everything_down() {
    let mut fixture = Fixture::new();
    fixture.run(&two_labels("a", "b"));
    assert_eq!(fixture.tree.len(), 3);

    let stats = fixture.run(&NodeDescriptor::null());
    assert_eq!(stats.removed, 3);
    assert_eq!(fixture.tree.len(), 0);
    assert!(fixture.tree.root().is_none());
}

#[test]
fn setters_replay_onto_reused_views() {
    let mut fixture = Fixture::new();
    fixture.run(&two_labels("a", "b"));
    fixture.run(&two_labels("a2", "b"));
    assert_eq!(fixture.label_text("first").as_deref(), Some("a2"));
    assert_eq!(fixture.label_text("second").as_deref(), Some("b"));
}

#[test]
fn rejected_setter_degrades_locally() {
    let mut fixture = Fixture::new();
    // Plain views do not understand Text; the following FlexGrow must
    // still be applied.
    let descriptor = VStack()
        .set(PropId::Text, PropValue::Text("nope".into()))
        .set(PropId::FlexGrow, PropValue::Float(2.0))
        .build();
    fixture.run(&descriptor);
    let root = fixture.tree.root().expect("root materialized");
    let style = fixture.tree.get(root).unwrap().view().flex_style().clone();
    assert_eq!(style.flex_grow, 2.0);
}

#[test]
fn keyed_children_survive_reordering() {
    let mut fixture = Fixture::new();
    fixture.run(&two_labels("a", "b"));
    let stats = fixture.run(
        &VStack()
            .child(Label("b").key("second").build())
            .child(Label("a").key("first").build())
            .build(),
    );
    assert_eq!(stats.created, 0);
    assert_eq!(stats.removed, 0);

    // Order mirrors the new descriptor list.
    let root = fixture.tree.root().unwrap();
    let children = fixture.tree.get(root).unwrap().children().to_vec();
    assert_eq!(fixture.tree.get(children[0]).unwrap().key(), Some("second"));
    assert_eq!(fixture.tree.get(children[1]).unwrap().key(), Some("first"));
}

#[test]
fn null_children_occupy_no_position() {
    let mut fixture = Fixture::new();
    fixture.run(
        &VStack()
            .child(Label("a").build())
            .child(NodeDescriptor::null())
            .child(Label("b").build())
            .build(),
    );
    let root = fixture.tree.root().unwrap();
    assert_eq!(fixture.tree.get(root).unwrap().children().len(), 2);
    assert_eq!(fixture.tree.len(), 3);
}

#[test]
fn positional_match_requires_reuse_identifier_equality() {
    let mut fixture = Fixture::new();
    fixture.run(&VStack().child(Label("a").build()).build());
    // Same position, different element kind: the old label is torn down.
    let stats = fixture.run(&VStack().child(HStack().build()).build());
    assert_eq!(stats.created, 1);
    assert_eq!(stats.removed, 1);
    assert_eq!(stats.reused, 1);
}

#[test]
fn shape_mirrors_descriptor_after_shrinking() {
    let mut fixture = Fixture::new();
    fixture.run(&two_labels("a", "b"));
    let stats = fixture.run(
        &VStack()
            .child(Label("a").key("first").build())
            .build(),
    );
    assert_eq!(stats.removed, 1);
    assert_eq!(fixture.tree.len(), 2);
    assert!(fixture.label_text("second").is_none());
}

// Coordinator binding behavior through the reconciler.

#[derive(Clone, Default)]
struct Flag;

struct MountTracker {
    mounts: usize,
    props_sets: usize,
}

impl Coordinator for MountTracker {
    type State = Flag;
    type Props = Flag;

    fn create(_state: Flag, _props: Flag) -> Self {
        Self {
            mounts: 0,
            props_sets: 0,
        }
    }

    fn set_props(&mut self, _props: Flag) {
        self.props_sets += 1;
    }

    fn on_mount(&mut self) {
        self.mounts += 1;
    }
}

fn bound_tree() -> NodeDescriptor {
    VStack()
        .key("root")
        .coordinator::<MountTracker>("tracker", Flag, Flag)
        .child(Label("x").build())
        .build()
}

#[test]
fn binding_mounts_on_creation_and_refreshes_props_every_pass() {
    let mut fixture = Fixture::new();
    fixture.run(&bound_tree());
    fixture.run(&bound_tree());

    let tracker = fixture
        .context
        .get_coordinator::<MountTracker>("tracker")
        .expect("created by the binding");
    assert_eq!(tracker.with(|t| t.mounts), 1);
    assert_eq!(tracker.with(|t| t.props_sets), 2);
}

#[test]
fn omitting_the_binding_does_not_detach_the_coordinator() {
    let mut fixture = Fixture::new();
    fixture.run(&bound_tree());
    assert_eq!(fixture.context.coordinator_count(), 1);

    // A pass without the binding (transient restructuring).
    fixture.run(&VStack().build());
    assert_eq!(fixture.context.coordinator_count(), 1);

    // Remounting finds the same instance and fires on_mount again.
    fixture.run(&bound_tree());
    let tracker = fixture
        .context
        .get_coordinator::<MountTracker>("tracker")
        .unwrap();
    assert_eq!(tracker.with(|t| t.mounts), 2);
}

#[test]
fn coordinator_key_is_recorded_on_the_materialized_node() {
    let mut fixture = Fixture::new();
    fixture.run(&bound_tree());
    let node = fixture.tree.find_by_key("root").unwrap();
    assert_eq!(
        fixture.tree.get(node).unwrap().coordinator_key(),
        Some("tracker")
    );
}
