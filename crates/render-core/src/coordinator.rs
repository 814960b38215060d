//! Coordinators: keyed, persistent objects owning subtree-scoped state.

use std::any::{Any, TypeId};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::context::Context;

/// Reserved key prefix for per-type stateless coordinator singletons.
pub const STATELESS_KEY_PREFIX: &str = "__stateless::";

/// A stateful controller bound to a subtree position.
///
/// Lifecycle: created lazily on the first registry lookup for its key
/// (`create` + [`on_init`](Coordinator::on_init)), returned unchanged by
/// every later lookup with its props replaced wholesale, and torn down
/// only by explicit eviction. A render pass that omits the binding does
/// not detach it — transient tree restructuring (a scroll unmounting a
/// row) must not lose state.
///
/// Mutation methods are ordinary synchronous calls. They are
/// responsible for explicitly calling
/// [`CoordinatorRef::set_needs_reconcile`] (or the context equivalent);
/// a mutation without the request legally leaves the UI stale.
pub trait Coordinator: Any {
    type State: 'static;
    type Props: 'static;

    fn create(state: Self::State, props: Self::Props) -> Self
    where
        Self: Sized;

    /// Props are externally supplied and replaced wholesale on every
    /// binding resolution.
    fn set_props(&mut self, props: Self::Props) {
        let _ = props;
    }

    /// Invoked once, right after construction.
    fn on_init(&mut self) {}

    /// Invoked when the bound node enters the view hierarchy (also
    /// again if the position is destroyed and re-created later).
    fn on_mount(&mut self) {}
}

/// Shared handle to a resolved coordinator instance.
///
/// Cloning is cheap and every clone refers to the same instance — the
/// registry guarantees referential stability per key.
pub struct CoordinatorRef<C: Coordinator> {
    cell: Rc<RefCell<C>>,
    context: Context,
}

impl<C: Coordinator> Clone for CoordinatorRef<C> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
            context: self.context.clone(),
        }
    }
}

impl<C: Coordinator> CoordinatorRef<C> {
    pub(crate) fn new(cell: Rc<RefCell<C>>, context: Context) -> Self {
        Self { cell, context }
    }

    pub fn borrow(&self) -> Ref<'_, C> {
        self.cell.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, C> {
        self.cell.borrow_mut()
    }

    pub fn with<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.cell.borrow())
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut C) -> R) -> R {
        f(&mut self.cell.borrow_mut())
    }

    /// Requests a rebuild-from-the-top of the owning tree. The request
    /// is a dirty flag; the hosting loop drains it.
    pub fn set_needs_reconcile(&self) {
        self.context.set_needs_reconcile();
    }

    pub fn context(&self) -> &Context {
        &self.context
    }
}

/// Type-erased (type, key, initial-state, initial-props) binding carried
/// by a descriptor. The closures capture the typed initial values so the
/// registry can create, refresh, and mount without knowing the concrete
/// coordinator type.
#[derive(Clone)]
pub struct CoordinatorBinding {
    type_id: TypeId,
    type_name: &'static str,
    key: String,
    make: Rc<dyn Fn() -> Rc<dyn Any>>,
    refresh: Rc<dyn Fn(&Rc<dyn Any>)>,
    mount: Rc<dyn Fn(&Rc<dyn Any>)>,
}

impl CoordinatorBinding {
    pub fn new<C>(key: impl Into<String>, state: C::State, props: C::Props) -> Self
    where
        C: Coordinator,
        C::State: Clone,
        C::Props: Clone,
    {
        let key = key.into();
        let initial_props = props.clone();
        let make = move || -> Rc<dyn Any> {
            let mut coordinator = C::create(state.clone(), props.clone());
            coordinator.on_init();
            Rc::new(RefCell::new(coordinator))
        };
        let refresh = move |cell: &Rc<dyn Any>| {
            if let Some(cell) = cell.downcast_ref::<RefCell<C>>() {
                cell.borrow_mut().set_props(initial_props.clone());
            }
        };
        let mount = |cell: &Rc<dyn Any>| {
            if let Some(cell) = cell.downcast_ref::<RefCell<C>>() {
                cell.borrow_mut().on_mount();
            }
        };
        Self {
            type_id: TypeId::of::<C>(),
            type_name: std::any::type_name::<C>(),
            key,
            make: Rc::new(make),
            refresh: Rc::new(refresh),
            mount: Rc::new(mount),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn make(&self) -> Rc<dyn Any> {
        (self.make)()
    }

    pub(crate) fn refresh(&self, cell: &Rc<dyn Any>) {
        (self.refresh)(cell);
    }

    pub(crate) fn mount(&self, cell: &Rc<dyn Any>) {
        (self.mount)(cell);
    }
}

impl std::fmt::Debug for CoordinatorBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoordinatorBinding")
            .field("type_name", &self.type_name)
            .field("key", &self.key)
            .finish()
    }
}
