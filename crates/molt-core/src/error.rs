//! Error types for the Molt toolkit.
//!
//! Benign absence (missing keys, missing path segments, null candidates)
//! is never an error. These enums cover the shape mismatches that would
//! otherwise silently produce wrong results.

use std::error::Error;
use std::fmt;

use crate::key::{display_path, Key, KeyPath};
use crate::value::Shape;

/// Errors from path writes ([`assoc_in`](crate::path::assoc_in)).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// The key path was empty; there is no final key to write.
    EmptyPath,
    /// An intermediate segment holds a value that cannot contain keys.
    NotAssociative {
        /// The path up to and including the offending segment.
        path: KeyPath,
        /// Shape found at that segment.
        found: Shape,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPath => write!(f, "key path must contain at least one key"),
            Self::NotAssociative { path, found } => {
                write!(
                    f,
                    "cannot descend into '{}': expected {}, found {found}",
                    display_path(path),
                    Shape::Associative,
                )
            }
        }
    }
}

impl Error for PathError {}

/// Errors from compiling or applying an evolution specification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvolveError {
    /// A rule declaration does not have one of the accepted shapes.
    MalformedSpec {
        /// Location of the offending rule.
        path: KeyPath,
        /// What is wrong with it.
        reason: String,
    },
    /// A rule was applied to a value of the wrong shape.
    TypeMismatch {
        /// Location of the value inside the target.
        path: KeyPath,
        /// Shape the rule requires.
        expected: Shape,
        /// Shape actually found.
        found: Shape,
    },
}

impl EvolveError {
    /// The key path at which the error was detected.
    pub fn path(&self) -> &[Key] {
        match self {
            Self::MalformedSpec { path, .. } | Self::TypeMismatch { path, .. } => path,
        }
    }
}

impl fmt::Display for EvolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedSpec { path, reason } => {
                write!(f, "malformed rule at '{}': {reason}", display_path(path))
            }
            Self::TypeMismatch {
                path,
                expected,
                found,
            } => write!(
                f,
                "type mismatch at '{}': expected {expected}, found {found}",
                display_path(path)
            ),
        }
    }
}

impl Error for EvolveError {}
