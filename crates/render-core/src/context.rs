//! Per-root registry owning coordinators and mediating lookups.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::rc::Rc;

use hashbrown::HashMap;

use crate::coordinator::{Coordinator, CoordinatorBinding, CoordinatorRef, STATELESS_KEY_PREFIX};

/// Observer of reconciliation passes on a context. Registered objects
/// see the pass bracketing: [`will_reconcile`](ContextDelegate::will_reconcile)
/// right before the rebuilt descriptor tree is applied,
/// [`did_reconcile`](ContextDelegate::did_reconcile) after layout.
pub trait ContextDelegate {
    fn will_reconcile(&self, info: &ReconciliationInfo) {
        let _ = info;
    }

    fn did_reconcile(&self, info: &ReconciliationInfo) {
        let _ = info;
    }
}

/// What a reconciliation pass did, surfaced to delegates. A host
/// wrapping the tree in a recycling container uses
/// `must_invalidate_layout` to know its own bookkeeping is stale.
#[derive(Clone, Debug, Default)]
pub struct ReconciliationInfo {
    /// True when the pass created or destroyed any backing view.
    pub must_invalidate_layout: bool,
    /// Keys of the nodes whose frame size changed during the pass.
    pub keys_for_nodes_with_mutated_size: Vec<String>,
}

/// Token handed out by [`Context::add_delegate`] for later removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DelegateToken(u64);

struct CoordinatorEntry {
    type_id: TypeId,
    type_name: &'static str,
    cell: Rc<dyn Any>,
}

#[derive(Default)]
struct ContextInner {
    registry: HashMap<String, CoordinatorEntry, ahash::RandomState>,
    delegates: Vec<(DelegateToken, Rc<dyn ContextDelegate>)>,
    next_token: u64,
    needs_reconcile: bool,
    needs_layout: bool,
}

/// Cloneable handle to the per-root registry. One context per UI root;
/// it owns every coordinator created under that root and carries the
/// dirty flags coordinators raise.
///
/// Single-thread only: all lookups and mutations happen on the thread
/// that owns the tree.
#[derive(Clone, Default)]
pub struct Context {
    inner: Rc<RefCell<ContextInner>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the coordinator registered under `key`, creating it from
    /// `init` when absent. Repeated lookups with the same key return
    /// the same instance.
    ///
    /// # Panics
    ///
    /// When `key` is already bound to a coordinator of a different
    /// concrete type. Key reuse across incompatible types is a
    /// programmer error and is not masked.
    pub fn coordinator_with<C>(
        &self,
        key: &str,
        init: impl FnOnce() -> (C::State, C::Props),
    ) -> CoordinatorRef<C>
    where
        C: Coordinator,
    {
        // User code (init, on_init) may re-enter the context; never run
        // it while the registry borrow is held.
        let existing = {
            let inner = self.inner.borrow();
            inner.registry.get(key).map(|entry| {
                Self::check_entry_type::<C>(entry, key);
                Rc::clone(&entry.cell)
            })
        };
        let cell = match existing {
            Some(cell) => cell,
            None => {
                let (state, props) = init();
                let mut coordinator = C::create(state, props);
                coordinator.on_init();
                let cell: Rc<dyn Any> = Rc::new(RefCell::new(coordinator));
                self.inner.borrow_mut().registry.insert(
                    key.to_string(),
                    CoordinatorEntry {
                        type_id: TypeId::of::<C>(),
                        type_name: std::any::type_name::<C>(),
                        cell: Rc::clone(&cell),
                    },
                );
                cell
            }
        };
        self.typed_ref::<C>(cell, key)
    }

    /// Returns the coordinator under `key` without creating one.
    ///
    /// # Panics
    ///
    /// On concrete-type mismatch, like [`Context::coordinator_with`].
    pub fn get_coordinator<C: Coordinator>(&self, key: &str) -> Option<CoordinatorRef<C>> {
        let cell = {
            let inner = self.inner.borrow();
            let entry = inner.registry.get(key)?;
            Self::check_entry_type::<C>(entry, key);
            Rc::clone(&entry.cell)
        };
        Some(self.typed_ref::<C>(cell, key))
    }

    /// Per-type singleton under a reserved derived key, for coordinators
    /// that carry behavior but no per-instance identity.
    pub fn stateless_coordinator<C>(
        &self,
        init: impl FnOnce() -> (C::State, C::Props),
    ) -> CoordinatorRef<C>
    where
        C: Coordinator,
    {
        let key = Self::stateless_key::<C>();
        self.coordinator_with::<C>(&key, init)
    }

    pub fn stateless_key<C: Coordinator>() -> String {
        format!("{STATELESS_KEY_PREFIX}{}", std::any::type_name::<C>())
    }

    /// Explicitly detaches the coordinator under `key`. Returns whether
    /// anything was evicted. This is the only way a coordinator leaves
    /// the registry before the context itself is torn down.
    pub fn evict(&self, key: &str) -> bool {
        self.inner.borrow_mut().registry.remove(key).is_some()
    }

    pub fn coordinator_count(&self) -> usize {
        self.inner.borrow().registry.len()
    }

    /// Resolves a descriptor's type-erased binding: create-or-get, then
    /// replace the props wholesale. `mounted` additionally fires the
    /// mount hook (the bound position just entered the hierarchy).
    pub(crate) fn resolve_binding(&self, binding: &CoordinatorBinding, mounted: bool) {
        let existing = {
            let inner = self.inner.borrow();
            inner.registry.get(binding.key()).map(|entry| {
                if entry.type_id != binding.type_id() {
                    panic!(
                        "coordinator key `{}` is bound to `{}` but was requested as `{}`",
                        binding.key(),
                        entry.type_name,
                        binding.type_name()
                    );
                }
                Rc::clone(&entry.cell)
            })
        };
        let cell = match existing {
            Some(cell) => cell,
            None => {
                // make() runs on_init, which may re-enter the context.
                let cell = binding.make();
                self.inner.borrow_mut().registry.insert(
                    binding.key().to_string(),
                    CoordinatorEntry {
                        type_id: binding.type_id(),
                        type_name: binding.type_name(),
                        cell: Rc::clone(&cell),
                    },
                );
                cell
            }
        };
        binding.refresh(&cell);
        if mounted {
            binding.mount(&cell);
        }
    }

    fn check_entry_type<C: Coordinator>(entry: &CoordinatorEntry, key: &str) {
        if entry.type_id != TypeId::of::<C>() {
            panic!(
                "coordinator key `{key}` is bound to `{}` but was requested as `{}`",
                entry.type_name,
                std::any::type_name::<C>()
            );
        }
    }

    fn typed_ref<C: Coordinator>(&self, cell: Rc<dyn Any>, key: &str) -> CoordinatorRef<C> {
        let typed = cell.downcast::<RefCell<C>>().unwrap_or_else(|_| {
            panic!("coordinator registry holds a foreign cell under key `{key}`")
        });
        CoordinatorRef::new(typed, self.clone())
    }

    // Dirty flags. Raising a flag never renders by itself; the hosting
    // loop drains the flags and runs the pass.

    pub fn set_needs_reconcile(&self) {
        self.inner.borrow_mut().needs_reconcile = true;
    }

    pub fn set_needs_layout(&self) {
        self.inner.borrow_mut().needs_layout = true;
    }

    pub fn needs_reconcile(&self) -> bool {
        self.inner.borrow().needs_reconcile
    }

    pub fn needs_layout(&self) -> bool {
        self.inner.borrow().needs_layout
    }

    pub(crate) fn take_needs_reconcile(&self) -> bool {
        std::mem::take(&mut self.inner.borrow_mut().needs_reconcile)
    }

    pub(crate) fn take_needs_layout(&self) -> bool {
        std::mem::take(&mut self.inner.borrow_mut().needs_layout)
    }

    // Delegates.

    pub fn add_delegate(&self, delegate: Rc<dyn ContextDelegate>) -> DelegateToken {
        let mut inner = self.inner.borrow_mut();
        inner.next_token += 1;
        let token = DelegateToken(inner.next_token);
        inner.delegates.push((token, delegate));
        token
    }

    pub fn remove_delegate(&self, token: DelegateToken) {
        self.inner
            .borrow_mut()
            .delegates
            .retain(|(held, _)| *held != token);
    }

    pub(crate) fn notify_will_reconcile(&self, info: &ReconciliationInfo) {
        for delegate in self.snapshot_delegates() {
            delegate.will_reconcile(info);
        }
    }

    pub(crate) fn notify_did_reconcile(&self, info: &ReconciliationInfo) {
        for delegate in self.snapshot_delegates() {
            delegate.did_reconcile(info);
        }
    }

    // Delegates may re-enter the context; never hold the borrow across
    // the callback.
    fn snapshot_delegates(&self) -> Vec<Rc<dyn ContextDelegate>> {
        self.inner
            .borrow()
            .delegates
            .iter()
            .map(|(_, delegate)| Rc::clone(delegate))
            .collect()
    }
}
