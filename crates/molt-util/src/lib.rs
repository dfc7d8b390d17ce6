//! Stateless helpers and the memoizing cache used alongside the Molt
//! transforms.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`memo`] | [`Memo`] cache keyed by a hashable argument type |
//! | [`config`] | [`MemoConfig`] and its validation |
//! | [`batch`] | [`partition`] into fixed-size batches |
//! | [`text`] | [`re_match`] and [`re_captures`] |
//! | [`time`] | [`Duration`](std::time::Duration) and millisecond constants |
//! | [`timeout`] | [`with_timeout`] deadline wrapper |
//! | [`func`] | [`partial`] application |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
pub mod error;
pub mod func;
pub mod memo;
pub mod text;
pub mod time;
pub mod timeout;

pub use batch::partition;
pub use config::{ConfigError, MemoConfig};
pub use error::UtilError;
pub use func::partial;
pub use memo::{memoize, Memo, MemoStats};
pub use text::{re_captures, re_match};
pub use timeout::with_timeout;

/// Re-export so callers of [`re_match`] need no direct `regex` dependency.
pub use regex::Regex;
