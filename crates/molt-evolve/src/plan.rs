//! Evolution plan compilation and execution.
//!
//! [`EvolvePlan`] is compiled once from an [`EvolveSpec`] and can then be
//! applied to any number of targets. Compilation resolves every
//! declaration to one of four closed [`Rule`] variants, in fixed
//! priority order (transform, sequence wrapper, keyed wrapper, nested
//! spec), and rejects malformed wrappers up front. Application never
//! inspects declaration shapes again; it only checks that each target
//! value has the shape its rule requires.

use std::fmt;
use std::sync::Arc;

use molt_core::{EvolveError, Key, KeyPath, Shape, Value};

use crate::spec::{EvolveSpec, RuleDecl, Transform};

/// A compiled, reusable evolution specification.
///
/// Cheap to clone (transforms are shared behind `Arc`) and `Send + Sync`,
/// so one plan can be applied from several threads to distinct targets.
#[derive(Clone)]
pub struct EvolvePlan {
    steps: Vec<(Key, Rule)>,
}

/// Compiled rule for one key.
#[derive(Clone)]
enum Rule {
    /// Replace the value with `f(value)`.
    Apply(Transform),
    /// Apply the inner rule to every element of a sequence.
    Each(Box<Rule>),
    /// Apply the inner rule to every entry of a keyed collection and
    /// return a plain record. Plain records are rejected.
    Entries(Box<Rule>),
    /// Apply a nested plan to a record.
    Nested(EvolvePlan),
}

impl EvolvePlan {
    /// Compile `spec`.
    ///
    /// # Errors
    ///
    /// [`EvolveError::MalformedSpec`] for a sequence wrapper without
    /// exactly one element or a keyed wrapper without exactly one entry.
    pub fn compile(spec: &EvolveSpec) -> Result<Self, EvolveError> {
        compile_spec(spec, &mut KeyPath::new())
    }

    /// Evolve `target` in place and hand it back.
    ///
    /// Keys without a rule are untouched. Keys with a rule but absent
    /// from the target are skipped and never created. A `Null` root is
    /// left as is.
    ///
    /// # Errors
    ///
    /// [`EvolveError::TypeMismatch`] when the root or a ruled value has
    /// the wrong shape. Rules applied before the failing one stay
    /// applied.
    pub fn apply<'v>(&self, target: &'v mut Value) -> Result<&'v mut Value, EvolveError> {
        self.apply_at(target, &mut KeyPath::new())?;
        Ok(target)
    }

    /// Owned-value variant of [`apply`](Self::apply).
    pub fn evolved(&self, mut target: Value) -> Result<Value, EvolveError> {
        self.apply(&mut target)?;
        Ok(target)
    }

    /// Number of top-level rules.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if the plan has no rules.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Top-level keys in application order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.steps.iter().map(|(k, _)| k)
    }

    fn apply_at(&self, target: &mut Value, path: &mut KeyPath) -> Result<(), EvolveError> {
        let entries = match target {
            Value::Record(entries) | Value::Keyed(entries) => entries,
            Value::Null => return Ok(()),
            other => return Err(mismatch(path, Shape::Associative, other)),
        };
        for (key, rule) in &self.steps {
            let Some(slot) = entries.get_mut(key.as_str()) else {
                continue;
            };
            path.push(key.clone());
            rule.apply(slot, path)?;
            path.pop();
        }
        Ok(())
    }
}

impl Rule {
    fn apply(&self, slot: &mut Value, path: &mut KeyPath) -> Result<(), EvolveError> {
        match self {
            Self::Apply(f) => {
                let current = slot.take();
                *slot = f(current);
                Ok(())
            }
            _ if slot.is_null() => Ok(()),
            Self::Each(inner) => {
                let items = match slot {
                    Value::Seq(items) => items,
                    other => return Err(mismatch(path, Shape::Seq, other)),
                };
                for (i, item) in items.iter_mut().enumerate() {
                    path.push(Key::from(i));
                    inner.apply(item, path)?;
                    path.pop();
                }
                Ok(())
            }
            Self::Entries(inner) => {
                let Value::Keyed(entries) = slot else {
                    return Err(mismatch(path, Shape::Keyed, slot));
                };
                for (key, item) in entries.iter_mut() {
                    path.push(key.clone());
                    inner.apply(item, path)?;
                    path.pop();
                }
                let entries = std::mem::take(entries);
                *slot = Value::Record(entries);
                Ok(())
            }
            Self::Nested(plan) => plan.apply_at(slot, path),
        }
    }
}

fn mismatch(path: &KeyPath, expected: Shape, found: &Value) -> EvolveError {
    EvolveError::TypeMismatch {
        path: path.clone(),
        expected,
        found: found.shape(),
    }
}

fn compile_spec(spec: &EvolveSpec, path: &mut KeyPath) -> Result<EvolvePlan, EvolveError> {
    let mut steps = Vec::with_capacity(spec.len());
    for (key, decl) in spec.iter() {
        path.push(key.clone());
        let rule = compile_rule(decl, path)?;
        path.pop();
        steps.push((key.clone(), rule));
    }
    Ok(EvolvePlan { steps })
}

fn compile_rule(decl: &RuleDecl, path: &mut KeyPath) -> Result<Rule, EvolveError> {
    match decl {
        RuleDecl::Transform(f) => Ok(Rule::Apply(Arc::clone(f))),
        RuleDecl::Seq(items) => match items.as_slice() {
            [inner] => Ok(Rule::Each(Box::new(compile_rule(inner, path)?))),
            _ => Err(EvolveError::MalformedSpec {
                path: path.clone(),
                reason: format!(
                    "sequence rule must wrap exactly one rule, got {}",
                    items.len()
                ),
            }),
        },
        RuleDecl::Keyed(wrapper) => match wrapper.values().next() {
            Some(inner) if wrapper.len() == 1 => {
                Ok(Rule::Entries(Box::new(compile_rule(inner, path)?)))
            }
            _ => Err(EvolveError::MalformedSpec {
                path: path.clone(),
                reason: format!(
                    "keyed rule must wrap exactly one entry, got {}",
                    wrapper.len()
                ),
            }),
        },
        RuleDecl::Map(spec) => Ok(Rule::Nested(compile_spec(spec, path)?)),
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Apply(_) => f.write_str("Apply(<fn>)"),
            Self::Each(inner) => f.debug_tuple("Each").field(inner).finish(),
            Self::Entries(inner) => f.debug_tuple("Entries").field(inner).finish(),
            Self::Nested(plan) => f.debug_tuple("Nested").field(plan).finish(),
        }
    }
}

impl fmt::Debug for EvolvePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.steps.iter().map(|(k, r)| (k.as_str(), r)))
            .finish()
    }
}
