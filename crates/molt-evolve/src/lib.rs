//! Declarative, recursive structural evolution for Molt values.
//!
//! An [`EvolveSpec`] names the keys to rewrite and how; everything else
//! in the target is left alone. Specs are compiled once into an
//! [`EvolvePlan`] ([`prep_evolve`]) and then applied in place to as many
//! targets as needed ([`evolve_prepd`]). [`evolve`] does both in one
//! call.
//!
//! ```
//! use molt_core::{record, seq, Value};
//! use molt_evolve::{evolve, EvolveSpec};
//!
//! let double = |v: Value| Value::from(v.as_i64().unwrap_or(0) * 2);
//! let spec = EvolveSpec::new().each("items", EvolveSpec::new().apply("n", double));
//!
//! let mut order = record! { "items" => seq![record! { "n" => 1 }, record! { "n" => 2 }] };
//! evolve(&spec, &mut order).unwrap();
//! assert_eq!(order, record! { "items" => seq![record! { "n" => 2 }, record! { "n" => 4 }] });
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod plan;
pub mod spec;

pub use plan::EvolvePlan;
pub use spec::{EvolveSpec, RuleDecl, Transform};

use molt_core::{EvolveError, Value};

/// Compile `spec` into a reusable [`EvolvePlan`].
pub fn prep_evolve(spec: &EvolveSpec) -> Result<EvolvePlan, EvolveError> {
    EvolvePlan::compile(spec)
}

/// Apply a compiled plan to `target` in place.
pub fn evolve_prepd<'v>(plan: &EvolvePlan, target: &'v mut Value) -> Result<&'v mut Value, EvolveError> {
    plan.apply(target)
}

/// Compile `spec` and apply it to `target` in place.
pub fn evolve<'v>(spec: &EvolveSpec, target: &'v mut Value) -> Result<&'v mut Value, EvolveError> {
    prep_evolve(spec)?.apply(target)
}
