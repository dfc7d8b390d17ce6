//! Memo cache configuration and validation.

use std::error::Error;
use std::fmt;

/// Configuration for a [`Memo`](crate::Memo) cache.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoConfig {
    /// Maximum number of cached results. `None` (the default) is
    /// unbounded. When full, the oldest entry is evicted first.
    pub capacity: Option<usize>,
}

impl MemoConfig {
    /// A bounded configuration holding at most `capacity` results.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.capacity {
            Some(0) => Err(ConfigError::ZeroCapacity),
            _ => Ok(()),
        }
    }
}

/// Errors detected during [`MemoConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A bounded cache must hold at least one entry.
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "memo capacity must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
