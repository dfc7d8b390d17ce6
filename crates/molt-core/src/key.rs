//! Record keys and the [`KeyPath`] type alias.

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::fmt;

/// A key inside a record or keyed collection.
///
/// Keys are plain strings. `Key` implements `Borrow<str>`, so a
/// [`Record`](crate::Record) can be queried with a `&str` directly.
/// When a key is applied to a sequence it is read as a decimal index
/// (see [`Key::as_index`]).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Key(String);

impl Key {
    /// Create a key from anything string-like.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the key as a sequence index.
    ///
    /// Returns `None` unless the key is a canonical decimal integer
    /// (`"0"`, `"17"`; not `"+1"`, `"01"` or `"-1"`).
    pub fn as_index(&self) -> Option<usize> {
        parse_index(&self.0)
    }

    /// Consume the key, returning the owned string.
    pub fn into_string(self) -> String {
        self.0
    }
}

pub(crate) fn parse_index(s: &str) -> Option<usize> {
    let canonical = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit())
        && (s == "0" || !s.starts_with('0'));
    if canonical {
        s.parse().ok()
    } else {
        None
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Key {
    fn from(v: &str) -> Self {
        Self(v.to_owned())
    }
}

impl From<String> for Key {
    fn from(v: String) -> Self {
        Self(v)
    }
}

impl From<&String> for Key {
    fn from(v: &String) -> Self {
        Self(v.clone())
    }
}

impl From<&Key> for Key {
    fn from(v: &Key) -> Self {
        v.clone()
    }
}

impl From<usize> for Key {
    fn from(v: usize) -> Self {
        Self(v.to_string())
    }
}

/// An ordered path of keys addressing a nested value.
///
/// Uses `SmallVec<[Key; 4]>` to avoid a heap allocation for the short
/// paths that dominate real use. Longer paths spill to the heap.
pub type KeyPath = SmallVec<[Key; 4]>;

/// Build a [`KeyPath`] from anything that yields key-like items.
///
/// ```
/// use molt_core::{key_path, Key};
///
/// let path = key_path(["user", "address", "city"]);
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], Key::from("city"));
/// ```
pub fn key_path<I, K>(keys: I) -> KeyPath
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    keys.into_iter().map(Into::into).collect()
}

/// Render a key path as `a.b.c` for diagnostics. The empty path renders as `<root>`.
pub fn display_path(path: &[Key]) -> String {
    if path.is_empty() {
        return "<root>".to_owned();
    }
    let mut out = String::new();
    for (i, key) in path.iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(key.as_str());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn index_parsing_is_canonical() {
        assert_eq!(Key::from("0").as_index(), Some(0));
        assert_eq!(Key::from("42").as_index(), Some(42));
        assert_eq!(Key::from("042").as_index(), None);
        assert_eq!(Key::from("-1").as_index(), None);
        assert_eq!(Key::from("").as_index(), None);
        assert_eq!(Key::from("name").as_index(), None);
    }

    #[test]
    fn lookup_by_str_through_borrow() {
        let mut map = HashMap::new();
        map.insert(Key::from("id"), 7);
        assert_eq!(map.get("id"), Some(&7));
    }

    #[test]
    fn key_path_collects_mixed_sources() {
        let path = key_path(vec![String::from("a"), String::from("b")]);
        assert_eq!(path.as_slice(), &[Key::from("a"), Key::from("b")]);
        assert!(!path.spilled());
    }

    #[test]
    fn display_path_joins_with_dots() {
        assert_eq!(display_path(&key_path(["a", "b"])), "a.b");
        assert_eq!(display_path(&[]), "<root>");
    }
}
