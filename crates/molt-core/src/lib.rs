//! Value model and path resolution for the Molt data toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the dynamic [`Value`] tree, [`Key`]s and [`KeyPath`]s, the error
//! types shared by the rest of the workspace, and the [`path`] resolver
//! that every higher-level transform reads and writes through.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod key;
pub mod path;
pub mod value;

pub use error::{EvolveError, PathError};
pub use key::{display_path, key_path, Key, KeyPath};
pub use path::{
    assoc, assoc_all, assoc_if, assoc_if_all, assoc_in, dissoc, dissoc_all, dissoc_in, get,
    get_in, get_in_mut,
};
pub use value::{Record, Shape, Value};
