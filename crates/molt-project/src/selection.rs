//! Selection specification types.
//!
//! A [`Selection`] is an ordered list of [`Selector`]s. Each selector
//! names one output key and where its value comes from.

use molt_core::{key_path, Key, KeyPath};

/// One entry of a [`Selection`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Select `key` verbatim.
    Key(Key),
    /// Select the value at `path` and emit it under `output`.
    Rename {
        /// Output key.
        output: Key,
        /// Source key path.
        path: KeyPath,
    },
    /// Apply `selection` to the value at `key` (to each element if that
    /// value is a sequence).
    Nested {
        /// Key of the value to recurse into.
        key: Key,
        /// Selection applied to that value.
        selection: Selection,
    },
}

/// Declarative list of keys to project or un-project.
///
/// # Examples
///
/// ```
/// use molt_project::{Selection, Selector};
///
/// let sel = Selection::new()
///     .key("id")
///     .rename("city", ["address", "city"])
///     .nested("lines", Selection::from(["sku", "qty"]));
///
/// assert_eq!(sel.len(), 3);
/// assert!(matches!(&sel.selectors()[2], Selector::Nested { key, .. } if key.as_str() == "lines"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    selectors: Vec<Selector>,
}

impl Selection {
    /// An empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain key selector.
    pub fn key(mut self, key: impl Into<Key>) -> Self {
        self.selectors.push(Selector::Key(key.into()));
        self
    }

    /// Append a renaming selector reading from `path`.
    pub fn rename<I, K>(mut self, output: impl Into<Key>, path: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        self.selectors.push(Selector::Rename {
            output: output.into(),
            path: key_path(path),
        });
        self
    }

    /// Append a nested selector.
    pub fn nested(mut self, key: impl Into<Key>, selection: Selection) -> Self {
        self.selectors.push(Selector::Nested {
            key: key.into(),
            selection,
        });
        self
    }

    /// Append an arbitrary selector.
    pub fn with(mut self, selector: Selector) -> Self {
        self.selectors.push(selector);
        self
    }

    /// The selectors, in order.
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    /// Number of selectors.
    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    /// Returns `true` if there are no selectors.
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for Selection {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().map(|k| Selector::Key(k.into())).collect()
    }
}

impl<K: Into<Key>> From<Vec<K>> for Selection {
    fn from(keys: Vec<K>) -> Self {
        keys.into_iter().map(|k| Selector::Key(k.into())).collect()
    }
}

impl FromIterator<Selector> for Selection {
    fn from_iter<I: IntoIterator<Item = Selector>>(iter: I) -> Self {
        Self {
            selectors: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a Selector;
    type IntoIter = std::slice::Iter<'a, Selector>;

    fn into_iter(self) -> Self::IntoIter {
        self.selectors.iter()
    }
}
