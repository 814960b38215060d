//! Node descriptors: immutable descriptions of one tree position for
//! one render pass.

use std::rc::Rc;

use render_view::{Animator, ElementKind, NativeView, PropId, PropValue};

use crate::coordinator::{Coordinator, CoordinatorBinding};
use crate::error::ConfigError;

/// Reuse identity of a tree position. When a node has no custom view
/// initializer the identifier is derived from its element kind (the
/// structural identity of the position under positional matching); a
/// custom initializer requires an explicit identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReuseId {
    Derived(&'static str),
    Custom(String),
}

impl ReuseId {
    pub fn as_str(&self) -> &str {
        match self {
            ReuseId::Derived(name) => name,
            ReuseId::Custom(name) => name,
        }
    }
}

impl std::fmt::Display for ReuseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accumulated property setter: replayed against the backing view
/// in declaration order on every reconciliation pass.
#[derive(Clone, Debug)]
pub struct StyleSetter {
    pub prop: PropId,
    pub value: PropValue,
    pub animator: Option<Animator>,
}

pub(crate) type ViewInit = Rc<dyn Fn() -> Box<dyn NativeView>>;

/// Immutable description of a desired UI node. Produced fresh on every
/// render pass and consumed by reconciliation; never persisted.
#[derive(Clone)]
pub struct NodeDescriptor {
    kind: ElementKind,
    key: Option<String>,
    reuse_id: ReuseId,
    children: Vec<NodeDescriptor>,
    setters: Vec<StyleSetter>,
    view_init: Option<ViewInit>,
    coordinator: Option<CoordinatorBinding>,
    null: bool,
}

impl NodeDescriptor {
    /// The explicit no-op node: occupies a child-list position but
    /// produces no backing view, owns no materialized node, and is
    /// filtered out before matching.
    pub fn null() -> Self {
        Self {
            kind: ElementKind("Null"),
            key: None,
            reuse_id: ReuseId::Derived("Null"),
            children: Vec::new(),
            setters: Vec::new(),
            view_init: None,
            coordinator: None,
            null: true,
        }
    }

    pub fn is_null(&self) -> bool {
        self.null
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn reuse_id(&self) -> &ReuseId {
        &self.reuse_id
    }

    pub fn children(&self) -> &[NodeDescriptor] {
        &self.children
    }

    pub fn setters(&self) -> &[StyleSetter] {
        &self.setters
    }

    pub fn coordinator(&self) -> Option<&CoordinatorBinding> {
        self.coordinator.as_ref()
    }

    pub(crate) fn view_init(&self) -> Option<&ViewInit> {
        self.view_init.as_ref()
    }

    /// Children that take part in matching: null placeholders dropped.
    pub(crate) fn visible_children(&self) -> impl Iterator<Item = &NodeDescriptor> {
        self.children.iter().filter(|child| !child.is_null())
    }
}

impl std::fmt::Debug for NodeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeDescriptor")
            .field("kind", &self.kind)
            .field("key", &self.key)
            .field("reuse_id", &self.reuse_id)
            .field("children", &self.children.len())
            .field("setters", &self.setters.len())
            .field("null", &self.null)
            .finish()
    }
}

/// Builder for [`NodeDescriptor`]. Pure value construction: no side
/// effects, no view mutation; `children` rebuilds the descriptor rather
/// than mutating previously returned values.
pub struct NodeBuilder {
    kind: ElementKind,
    key: Option<String>,
    explicit_reuse: Option<String>,
    children: Vec<NodeDescriptor>,
    setters: Vec<StyleSetter>,
    view_init: Option<ViewInit>,
    coordinator: Option<CoordinatorBinding>,
}

impl NodeBuilder {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            key: None,
            explicit_reuse: None,
            children: Vec::new(),
            setters: Vec::new(),
            view_init: None,
            coordinator: None,
        }
    }

    /// Unique node key, required for stateful nodes. Keys also drive
    /// child matching across passes.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Explicit reuse identifier. Mandatory when the node has a custom
    /// view initializer.
    pub fn reuse_identifier(mut self, reuse_id: impl Into<String>) -> Self {
        self.explicit_reuse = Some(reuse_id.into());
        self
    }

    /// Custom view construction, invoked only when the position has no
    /// reusable prior view.
    pub fn view_init(mut self, init: impl Fn() -> Box<dyn NativeView> + 'static) -> Self {
        self.view_init = Some(Rc::new(init));
        self
    }

    /// Appends a property setter. Setters replay in declaration order
    /// on every pass.
    pub fn set(mut self, prop: PropId, value: PropValue) -> Self {
        self.setters.push(StyleSetter {
            prop,
            value,
            animator: None,
        });
        self
    }

    /// Appends a property setter carrying an animation directive.
    pub fn set_animated(mut self, prop: PropId, value: PropValue, animator: Animator) -> Self {
        self.setters.push(StyleSetter {
            prop,
            value,
            animator: Some(animator),
        });
        self
    }

    /// Replaces the child list.
    pub fn children(mut self, children: Vec<NodeDescriptor>) -> Self {
        self.children = children;
        self
    }

    /// Appends one child.
    pub fn child(mut self, child: NodeDescriptor) -> Self {
        self.children.push(child);
        self
    }

    /// Binds a coordinator to this node by (type, key) with the initial
    /// state and props used if the registry has to create it.
    pub fn coordinator<C>(mut self, key: impl Into<String>, state: C::State, props: C::Props) -> Self
    where
        C: Coordinator,
        C::State: Clone,
        C::Props: Clone,
    {
        self.coordinator = Some(CoordinatorBinding::new::<C>(key, state, props));
        self
    }

    pub fn try_build(self) -> Result<NodeDescriptor, ConfigError> {
        if self.view_init.is_some() && self.explicit_reuse.is_none() {
            return Err(ConfigError::MissingReuseIdentifier { kind: self.kind });
        }
        if let Some(binding) = &self.coordinator {
            if self.key.is_none() {
                return Err(ConfigError::CoordinatorRequiresKey {
                    type_name: binding.type_name(),
                });
            }
        }
        let mut seen: Vec<&str> = Vec::with_capacity(self.children.len());
        for child in self.children.iter().filter(|child| !child.is_null()) {
            if let Some(key) = child.key() {
                if seen.contains(&key) {
                    return Err(ConfigError::DuplicateChildKey {
                        key: key.to_string(),
                    });
                }
                seen.push(key);
            }
        }
        let reuse_id = match self.explicit_reuse {
            Some(custom) => ReuseId::Custom(custom),
            None => ReuseId::Derived(self.kind.name()),
        };
        Ok(NodeDescriptor {
            kind: self.kind,
            key: self.key,
            reuse_id,
            children: self.children,
            setters: self.setters,
            view_init: self.view_init,
            coordinator: self.coordinator,
            null: false,
        })
    }

    /// Builds the descriptor.
    ///
    /// # Panics
    ///
    /// On configuration errors (see [`ConfigError`]): these are
    /// programmer errors, surfaced at build time rather than deferred
    /// to reconciliation.
    pub fn build(self) -> NodeDescriptor {
        match self.try_build() {
            Ok(descriptor) => descriptor,
            Err(err) => panic!("invalid node configuration: {err}"),
        }
    }
}
