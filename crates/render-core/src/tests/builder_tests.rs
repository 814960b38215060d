use render_view::views::PlainView;
use render_view::{ElementKind, NativeView, PropId, PropValue};

use crate::node::{NodeBuilder, NodeDescriptor, ReuseId};
use crate::widgets::{Label, VStack};
use crate::ConfigError;

#[test]
fn reuse_identifier_derives_from_element_kind() {
    let node = NodeBuilder::new(ElementKind::PLAIN).build();
    assert_eq!(node.reuse_id(), &ReuseId::Derived("View"));
}

#[test]
fn explicit_reuse_identifier_wins() {
    let node = NodeBuilder::new(ElementKind::PLAIN)
        .reuse_identifier("hero-card")
        .build();
    assert_eq!(node.reuse_id().as_str(), "hero-card");
}

#[test]
fn setters_accumulate_in_call_order() {
    let node = Label("hi")
        .set(PropId::FontSize, PropValue::Float(17.0))
        .set(PropId::FlexGrow, PropValue::Float(1.0))
        .build();
    let props: Vec<PropId> = node.setters().iter().map(|setter| setter.prop).collect();
    assert_eq!(props, vec![PropId::Text, PropId::FontSize, PropId::FlexGrow]);
}

#[test]
fn view_init_without_reuse_identifier_is_a_config_error() {
    let err = NodeBuilder::new(ElementKind::PLAIN)
        .view_init(|| Box::new(PlainView::new()) as Box<dyn NativeView>)
        .try_build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingReuseIdentifier { .. }));
}

#[test]
#[should_panic(expected = "invalid node configuration")]
fn build_surfaces_config_errors_immediately() {
    let _ = NodeBuilder::new(ElementKind::PLAIN)
        .view_init(|| Box::new(PlainView::new()) as Box<dyn NativeView>)
        .build();
}

#[test]
fn duplicate_child_keys_are_rejected() {
    let err = VStack()
        .child(Label("a").key("row").build())
        .child(Label("b").key("row").build())
        .try_build()
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::DuplicateChildKey {
            key: "row".to_string()
        }
    );
}

#[test]
fn null_children_do_not_participate_in_key_uniqueness() {
    let node = VStack()
        .child(Label("a").key("row").build())
        .child(NodeDescriptor::null())
        .child(Label("b").build())
        .try_build()
        .expect("null placeholders are inert");
    assert_eq!(node.children().len(), 3);
}

#[test]
fn children_replaces_rather_than_mutates() {
    let first = VStack().child(Label("one").build()).build();
    let second = VStack()
        .children(vec![Label("one").build(), Label("two").build()])
        .build();
    // Descriptors are immutable values; building a wider sibling list
    // never changes an already-built descriptor.
    assert_eq!(first.children().len(), 1);
    assert_eq!(second.children().len(), 2);
}
