//! Shorthand constructors for the common element kinds, plus the
//! coordinator-scoped `Component` helper.

#![allow(non_snake_case)]

use render_flex::FlexDirection;
use render_view::views::ButtonView;
use render_view::{ElementKind, NativeView, PropId, PropValue};

use crate::context::Context;
use crate::coordinator::{Coordinator, CoordinatorRef};
use crate::node::{NodeBuilder, NodeDescriptor};

/// A plain container view.
pub fn View() -> NodeBuilder {
    NodeBuilder::new(ElementKind::PLAIN)
}

/// A plain-view-backed horizontal stack.
pub fn HStack() -> NodeBuilder {
    View().set(
        PropId::FlexDirection,
        PropValue::FlexDirection(FlexDirection::Row),
    )
}

/// A plain-view-backed vertical stack.
pub fn VStack() -> NodeBuilder {
    View().set(
        PropId::FlexDirection,
        PropValue::FlexDirection(FlexDirection::Column),
    )
}

/// A label showing `text`.
pub fn Label(text: impl Into<String>) -> NodeBuilder {
    NodeBuilder::new(ElementKind::LABEL).set(PropId::Text, PropValue::Text(text.into()))
}

/// A keyed button with a tap action.
///
/// The action is registered through the custom view initializer, so it
/// is captured at view creation and survives reuse — which is why the
/// builder carries an explicit reuse identifier. The title flows
/// through a setter and refreshes on every pass.
pub fn Button(key: impl Into<String>, title: impl Into<String>, action: impl Fn() + 'static) -> NodeBuilder {
    let action = std::rc::Rc::new(action);
    NodeBuilder::new(ElementKind::BUTTON)
        .key(key)
        .reuse_identifier("Button")
        .view_init(move || {
            let mut button = ButtonView::new();
            let action = std::rc::Rc::clone(&action);
            button.set_action(move || action());
            Box::new(button) as Box<dyn NativeView>
        })
        .set(PropId::Title, PropValue::Text(title.into()))
}

/// Builds a coordinator-backed piece of interface: resolves (creating
/// if needed) the coordinator for `key`, refreshes its props, runs
/// `body` with it, and attaches the binding to the produced node.
pub fn Component<C>(
    context: &Context,
    key: &str,
    state: C::State,
    props: C::Props,
    body: impl FnOnce(&Context, CoordinatorRef<C>) -> NodeBuilder,
) -> NodeDescriptor
where
    C: Coordinator,
    C::State: Clone,
    C::Props: Clone,
{
    let coordinator = context.coordinator_with::<C>(key, || (state.clone(), props.clone()));
    coordinator.with_mut(|c| c.set_props(props.clone()));
    body(context, coordinator)
        .key(key)
        .coordinator::<C>(key, state, props)
        .build()
}
