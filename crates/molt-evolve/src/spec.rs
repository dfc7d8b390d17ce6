//! Evolution specification types.
//!
//! An [`EvolveSpec`] maps keys to [`RuleDecl`]s. A declaration is one of
//! four shapes, and the shape alone decides what the rule does:
//!
//! | Declaration | Meaning |
//! |-------------|---------|
//! | [`RuleDecl::Transform`] | call the function on the current value |
//! | [`RuleDecl::Seq`] with one element | the value is a sequence; apply the wrapped rule to every element |
//! | [`RuleDecl::Keyed`] with one entry | the value is a keyed collection; apply the wrapped rule to every entry |
//! | [`RuleDecl::Map`] | the value is a record; apply the nested spec to it |
//!
//! Declarations are checked and lowered to an
//! [`EvolvePlan`](crate::EvolvePlan) by [`prep_evolve`](crate::prep_evolve).

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

use molt_core::{Key, Value};

/// A value-to-value transformation.
pub type Transform = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// Declared evolution rule for one key.
#[derive(Clone)]
pub enum RuleDecl {
    /// Apply the function to the current value.
    Transform(Transform),
    /// Sequence wrapper. Well-formed only with exactly one element.
    Seq(Vec<RuleDecl>),
    /// Keyed-collection wrapper. Well-formed only with exactly one entry;
    /// the entry's key is ignored.
    Keyed(IndexMap<Key, RuleDecl>),
    /// Nested specification for a record value.
    Map(EvolveSpec),
}

impl RuleDecl {
    /// Declare a transformation.
    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::Transform(Arc::new(f))
    }

    /// Declare "apply `inner` to every element of a sequence".
    pub fn each(inner: impl Into<RuleDecl>) -> Self {
        Self::Seq(vec![inner.into()])
    }

    /// Declare "apply `inner` to every entry of a keyed collection".
    pub fn entries(inner: impl Into<RuleDecl>) -> Self {
        let mut wrapper = IndexMap::with_capacity(1);
        wrapper.insert(Key::from("*"), inner.into());
        Self::Keyed(wrapper)
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Transform(_) => "Transform",
            Self::Seq(_) => "Seq",
            Self::Keyed(_) => "Keyed",
            Self::Map(_) => "Map",
        }
    }
}

impl fmt::Debug for RuleDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transform(_) => f.write_str("Transform(<fn>)"),
            Self::Seq(items) => f.debug_tuple(self.kind()).field(items).finish(),
            Self::Keyed(entries) => f.debug_tuple(self.kind()).field(entries).finish(),
            Self::Map(spec) => f.debug_tuple(self.kind()).field(spec).finish(),
        }
    }
}

impl From<EvolveSpec> for RuleDecl {
    fn from(spec: EvolveSpec) -> Self {
        Self::Map(spec)
    }
}

impl From<Transform> for RuleDecl {
    fn from(f: Transform) -> Self {
        Self::Transform(f)
    }
}

/// Declarative per-key evolution rules, in application order.
///
/// # Examples
///
/// ```
/// use molt_evolve::{EvolveSpec, RuleDecl};
/// use molt_core::Value;
///
/// let spec = EvolveSpec::new()
///     .apply("a", |v| Value::from(v.as_i64().unwrap_or(0) * 10))
///     .nested("b", EvolveSpec::new().apply("c", |v| Value::from(v.as_i64().unwrap_or(0) + 1)))
///     .each("items", EvolveSpec::new().apply("n", |v| v));
///
/// assert_eq!(spec.len(), 3);
/// assert!(matches!(spec.get("items"), Some(RuleDecl::Seq(inner)) if inner.len() == 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct EvolveSpec {
    rules: IndexMap<Key, RuleDecl>,
}

impl EvolveSpec {
    /// An empty specification. Applying it changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `rule` for `key`, replacing any earlier rule for it.
    pub fn rule(mut self, key: impl Into<Key>, rule: impl Into<RuleDecl>) -> Self {
        self.rules.insert(key.into(), rule.into());
        self
    }

    /// Shorthand for a [`RuleDecl::transform`] rule.
    pub fn apply<F>(self, key: impl Into<Key>, f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.rule(key, RuleDecl::transform(f))
    }

    /// Shorthand for a nested [`RuleDecl::Map`] rule.
    pub fn nested(self, key: impl Into<Key>, spec: EvolveSpec) -> Self {
        self.rule(key, RuleDecl::Map(spec))
    }

    /// Shorthand for a [`RuleDecl::each`] rule.
    pub fn each(self, key: impl Into<Key>, inner: impl Into<RuleDecl>) -> Self {
        self.rule(key, RuleDecl::each(inner))
    }

    /// Shorthand for a [`RuleDecl::entries`] rule.
    pub fn entries(self, key: impl Into<Key>, inner: impl Into<RuleDecl>) -> Self {
        self.rule(key, RuleDecl::entries(inner))
    }

    /// The rule declared for `key`.
    pub fn get(&self, key: &str) -> Option<&RuleDecl> {
        self.rules.get(key)
    }

    /// Iterate rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &RuleDecl)> {
        self.rules.iter()
    }

    /// Number of declared rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns `true` if no rule is declared.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<K: Into<Key>> FromIterator<(K, RuleDecl)> for EvolveSpec {
    fn from_iter<I: IntoIterator<Item = (K, RuleDecl)>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(|(k, r)| (k.into(), r)).collect(),
        }
    }
}
