use render_view::ElementKind;
use thiserror::Error;

/// Descriptor construction errors. These are programmer errors: the
/// builder's `build` surfaces them as panics at build time, never
/// deferred to reconciliation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A custom view initializer without an explicit reuse identifier
    /// leaves the reconciler unable to decide whether the initializer
    /// must run again at a matched position.
    #[error("node of kind `{kind}` has a custom view initializer but no explicit reuse identifier")]
    MissingReuseIdentifier { kind: ElementKind },

    /// Keys must be unique within one parent's child list.
    #[error("duplicate child key `{key}` within one child list")]
    DuplicateChildKey { key: String },

    /// Stateful nodes need a stable identity.
    #[error("node binds coordinator `{type_name}` but has no key")]
    CoordinatorRequiresKey { type_name: &'static str },
}
