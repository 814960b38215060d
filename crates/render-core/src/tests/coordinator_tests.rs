use crate::context::Context;
use crate::coordinator::Coordinator;

#[derive(Clone, Default)]
struct CounterState {
    count: i64,
}

#[derive(Clone, Default)]
struct CounterProps {
    step: i64,
}

struct CounterCoordinator {
    state: CounterState,
    props: CounterProps,
    inits: usize,
    mounts: usize,
}

impl Coordinator for CounterCoordinator {
    type State = CounterState;
    type Props = CounterProps;

    fn create(state: CounterState, props: CounterProps) -> Self {
        Self {
            state,
            props,
            inits: 0,
            mounts: 0,
        }
    }

    fn set_props(&mut self, props: CounterProps) {
        self.props = props;
    }

    fn on_init(&mut self) {
        self.inits += 1;
    }

    fn on_mount(&mut self) {
        self.mounts += 1;
    }
}

impl CounterCoordinator {
    fn increase(&mut self) {
        self.state.count += self.props.step.max(1);
    }
}

struct OtherCoordinator;

impl Coordinator for OtherCoordinator {
    type State = ();
    type Props = ();

    fn create(_state: (), _props: ()) -> Self {
        Self
    }
}

fn init() -> (CounterState, CounterProps) {
    (CounterState::default(), CounterProps { step: 1 })
}

#[test]
fn lookup_is_referentially_stable() {
    let context = Context::new();
    let first = context.coordinator_with::<CounterCoordinator>("counter", init);
    first.with_mut(|c| c.increase());

    let second = context.coordinator_with::<CounterCoordinator>("counter", init);
    assert_eq!(second.with(|c| c.state.count), 1);
    assert_eq!(context.coordinator_count(), 1);
}

#[test]
fn on_init_runs_once() {
    let context = Context::new();
    context.coordinator_with::<CounterCoordinator>("counter", init);
    let coordinator = context.coordinator_with::<CounterCoordinator>("counter", init);
    assert_eq!(coordinator.with(|c| c.inits), 1);
}

#[test]
#[should_panic(expected = "was requested as")]
fn type_mismatch_on_shared_key_is_fatal() {
    let context = Context::new();
    context.coordinator_with::<CounterCoordinator>("shared", init);
    context.coordinator_with::<OtherCoordinator>("shared", || ((), ()));
}

#[test]
fn get_coordinator_does_not_create() {
    let context = Context::new();
    assert!(context
        .get_coordinator::<CounterCoordinator>("absent")
        .is_none());
    assert_eq!(context.coordinator_count(), 0);
}

#[test]
fn stateless_coordinators_are_per_type_singletons() {
    let context = Context::new();
    context.stateless_coordinator::<OtherCoordinator>(|| ((), ()));
    context.stateless_coordinator::<OtherCoordinator>(|| ((), ()));
    assert_eq!(context.coordinator_count(), 1);
}

#[test]
fn evict_is_the_only_detach_path() {
    let context = Context::new();
    let coordinator = context.coordinator_with::<CounterCoordinator>("counter", init);
    coordinator.with_mut(|c| c.increase());

    assert!(context.evict("counter"));
    assert!(!context.evict("counter"));

    // A fresh lookup after eviction starts from the initial state.
    let fresh = context.coordinator_with::<CounterCoordinator>("counter", init);
    assert_eq!(fresh.with(|c| c.state.count), 0);
}

#[test]
fn set_needs_reconcile_raises_the_dirty_flag_only() {
    let context = Context::new();
    let coordinator = context.coordinator_with::<CounterCoordinator>("counter", init);
    assert!(!context.needs_reconcile());

    coordinator.with_mut(|c| c.increase());
    assert!(!context.needs_reconcile(), "mutation alone never renders");

    coordinator.set_needs_reconcile();
    assert!(context.needs_reconcile());
}
