//! Molt: path access, structural evolution and projection for dynamic data.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Molt sub-crates. For most users, adding `molt` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use molt::prelude::*;
//!
//! let mut order = record! {
//!     "id" => 1,
//!     "lines" => seq![
//!         record! { "sku" => "apple", "qty" => 2, "cost" => 0.3 },
//!         record! { "sku" => "pear", "qty" => 1, "cost" => 0.4 },
//!     ],
//! };
//!
//! // Rewrite nested values in place.
//! let spec = EvolveSpec::new().each(
//!     "lines",
//!     EvolveSpec::new().apply("qty", |v| Value::from(v.as_i64().unwrap_or(0) * 10)),
//! );
//! evolve(&spec, &mut order).unwrap();
//!
//! // Keep only what the caller should see.
//! let public = Selection::new().key("id").nested("lines", Selection::from(["sku", "qty"]));
//! let view = project(&public, Some(&order)).unwrap();
//! assert_eq!(
//!     view,
//!     record! {
//!         "id" => 1,
//!         "lines" => seq![
//!             record! { "sku" => "apple", "qty" => 20 },
//!             record! { "sku" => "pear", "qty" => 10 },
//!         ],
//!     }
//! );
//! assert_eq!(get_in(&["lines", "1", "cost"], Some(&order)), Some(&Value::Float(0.4)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `molt-core` | `Value`, keys, errors, path resolver |
//! | [`evolve`] | `molt-evolve` | Evolution specs and compiled plans |
//! | [`project`] | `molt-project` | Selections, projection and un-projection |
//! | [`util`] | `molt-util` | Memoization, batching, regex, time, timeout |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Value model, keys, errors and the path resolver (`molt-core`).
pub use molt_core as types;

/// Structural evolution (`molt-evolve`).
///
/// Build [`evolve::EvolveSpec`]s, compile them into [`evolve::EvolvePlan`]s
/// and apply them in place.
pub use molt_evolve as evolve;

/// Projection and un-projection (`molt-project`).
pub use molt_project as project;

/// Helper collaborators (`molt-util`).
///
/// [`util::Memo`] caching, [`util::partition`], [`util::re_match`],
/// [`util::time`] constants and [`util::with_timeout`].
pub use molt_util as util;

pub use molt_core::{keyed, record, seq};

/// Common imports for typical Molt usage.
///
/// ```rust
/// use molt::prelude::*;
/// ```
pub mod prelude {
    // Values and paths
    pub use molt_core::{
        assoc, assoc_all, assoc_if, assoc_if_all, assoc_in, dissoc, dissoc_all, dissoc_in, get,
        get_in, key_path, Key, KeyPath, Record, Shape, Value,
    };
    pub use molt_core::{keyed, record, seq};

    // Errors
    pub use molt_core::{EvolveError, PathError};
    pub use molt_util::{ConfigError, UtilError};

    // Evolution
    pub use molt_evolve::{evolve, evolve_prepd, prep_evolve, EvolvePlan, EvolveSpec, RuleDecl};

    // Projection
    pub use molt_project::{project, select, unproject, Selection, Selector};

    // Helpers
    pub use molt_util::{memoize, partition, Memo, MemoConfig};
}
