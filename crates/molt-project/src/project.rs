//! Projection, un-projection and fixed-shape selection.
//!
//! [`project`] builds a fresh record holding only the selected keys.
//! [`unproject`] removes the selected keys from the target in place.
//! [`select`] is the fixed-shape variant of [`project`]: every selected
//! output key is present, with `Null` standing in for missing sources.
//!
//! Nested selectors fan out over sequences: the sub-selection is applied
//! to every element independently, preserving order and count.

use molt_core::{assoc, assoc_if, dissoc, dissoc_in, get, get_in, Record, Value};
use molt_util::partial;

use crate::selection::{Selection, Selector};

/// Build a record containing only the keys named by `selection`.
///
/// Returns `None` when `source` is absent or empty: `Null`, `false`,
/// zero, NaN or the empty string. Otherwise returns a record (possibly
/// empty). Selected keys that are absent or `Null` in the source are
/// omitted; keys never appear unless selected. Any other scalar source
/// has no keys and projects to an empty record.
///
/// ```
/// use molt_core::record;
/// use molt_project::{project, Selection};
///
/// let source = record! { "user" => record! { "id" => 7, "name" => "Al", "secret" => "x" } };
/// let sel = Selection::new().nested("user", Selection::from(["id", "name"]));
///
/// assert_eq!(
///     project(&sel, Some(&source)),
///     Some(record! { "user" => record! { "id" => 7, "name" => "Al" } })
/// );
/// assert_eq!(project(&sel, None), None);
/// ```
pub fn project(selection: &Selection, source: Option<&Value>) -> Option<Value> {
    let source = source.filter(|s| !is_empty_scalar(s))?;
    let mut out = Record::new();
    for selector in selection {
        match selector {
            Selector::Key(key) => {
                assoc_if(&mut out, key.clone(), get(key.as_str(), Some(source)).cloned());
            }
            Selector::Rename { output, path } => {
                assoc_if(&mut out, output.clone(), get_in(path.as_slice(), Some(source)).cloned());
            }
            Selector::Nested { key, selection } => {
                let nested = project_nested(selection, get(key.as_str(), Some(source)));
                assoc_if(&mut out, key.clone(), nested);
            }
        }
    }
    Some(Value::Record(out))
}

fn project_nested(selection: &Selection, value: Option<&Value>) -> Option<Value> {
    match value {
        Some(Value::Seq(items)) => Some(
            items
                .iter()
                .map(partial(project_element, selection))
                .collect::<Value>(),
        ),
        other => project(selection, other),
    }
}

fn is_empty_scalar(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Int(n) => *n == 0,
        Value::Float(x) => *x == 0.0 || x.is_nan(),
        Value::Str(s) => s.is_empty(),
        _ => false,
    }
}

fn project_element(selection: &Selection, item: &Value) -> Value {
    project(selection, Some(item)).unwrap_or(Value::Null)
}

/// Remove the keys named by `selection` from `target`, in place.
///
/// - [`Selector::Key`] removes the key.
/// - [`Selector::Rename`] removes the value at its source path; the
///   output name plays no part.
/// - [`Selector::Nested`] un-projects the value at its key (every element
///   if it is a sequence) and keeps the key itself.
///
/// Targets that are not records or keyed collections are left untouched.
///
/// ```
/// use molt_core::{record, seq};
/// use molt_project::{unproject, Selection};
///
/// let mut order = record! {
///     "id" => 1,
///     "internal" => "x",
///     "lines" => seq![record! { "sku" => "a", "cost" => 3 }],
/// };
/// let sel = Selection::new().key("internal").nested("lines", Selection::from(["cost"]));
/// unproject(&sel, &mut order);
/// assert_eq!(order, record! { "id" => 1, "lines" => seq![record! { "sku" => "a" }] });
/// ```
pub fn unproject<'v>(selection: &Selection, target: &'v mut Value) -> &'v mut Value {
    if let Some(entries) = target.as_record_mut() {
        unproject_entries(selection, entries);
    }
    target
}

fn unproject_entries(selection: &Selection, entries: &mut Record) {
    for selector in selection {
        match selector {
            Selector::Key(key) => {
                dissoc(entries, key.as_str());
            }
            Selector::Rename { path, .. } => {
                dissoc_in(entries, path.as_slice());
            }
            Selector::Nested { key, selection } => match entries.get_mut(key.as_str()) {
                Some(Value::Seq(items)) => {
                    for item in items.iter_mut() {
                        unproject(selection, item);
                    }
                }
                Some(value) => {
                    unproject(selection, value);
                }
                None => {}
            },
        }
    }
}

/// Build a fixed-shape record from `selection`.
///
/// Like [`project`], but every selected output key is present: absent
/// sources become `Null`, and an absent `source` yields a record of
/// nulls rather than `None`.
pub fn select(selection: &Selection, source: Option<&Value>) -> Record {
    let mut out = Record::new();
    for selector in selection {
        let (key, value) = match selector {
            Selector::Key(key) => (key, get(key.as_str(), source).cloned()),
            Selector::Rename { output, path } => (output, get_in(path.as_slice(), source).cloned()),
            Selector::Nested { key, selection } => {
                (key, project_nested(selection, get(key.as_str(), source)))
            }
        };
        assoc(&mut out, key.clone(), value.unwrap_or(Value::Null));
    }
    out
}
