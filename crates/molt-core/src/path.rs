//! Path resolution: reading and writing values at nested key paths.
//!
//! Reads are total. A missing structure, a missing key or a value that
//! cannot be indexed all resolve to `None`; nothing here panics on
//! absent data.
//!
//! Writes mutate the caller's [`Record`] in place and hand the same
//! record back so calls can be chained. The multi-pair forms
//! ([`assoc_all`], [`assoc_if_all`], [`dissoc_all`]) fold over an ordered
//! sequence of pairs.

use crate::error::PathError;
use crate::key::{key_path, parse_index, Key};
use crate::value::{Record, Value};

/// Read `key` from `structure`.
///
/// Returns `None` when `structure` is absent or does not hold `key`.
///
/// ```
/// use molt_core::{path::get, record, Value};
///
/// let user = record! { "id" => 7 };
/// assert_eq!(get("id", Some(&user)), Some(&Value::Int(7)));
/// assert_eq!(get("id", None), None);
/// ```
pub fn get<'a>(key: &str, structure: Option<&'a Value>) -> Option<&'a Value> {
    structure.and_then(|s| s.get(key))
}

/// Walk `path` left to right through `structure`.
///
/// Short-circuits to `None` as soon as a segment is absent. The empty
/// path resolves to `structure` itself.
pub fn get_in<'a, K: AsRef<str>>(path: &[K], structure: Option<&'a Value>) -> Option<&'a Value> {
    path.iter()
        .try_fold(structure?, |current, key| current.get(key.as_ref()))
}

/// Mutable counterpart of [`get_in`].
pub fn get_in_mut<'a, K: AsRef<str>>(path: &[K], structure: &'a mut Value) -> Option<&'a mut Value> {
    path.iter()
        .try_fold(structure, |current, key| current.get_mut(key.as_ref()))
}

/// Set `key` to `value`, overwriting any previous value.
pub fn assoc(record: &mut Record, key: impl Into<Key>, value: impl Into<Value>) -> &mut Record {
    record.insert(key.into(), value.into());
    record
}

/// Apply [`assoc`] for every pair, in order.
pub fn assoc_all<I, K, V>(record: &mut Record, pairs: I) -> &mut Record
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Key>,
    V: Into<Value>,
{
    pairs
        .into_iter()
        .fold(record, |record, (key, value)| assoc(record, key, value))
}

/// Set `key` to `value` only when `value` is present and not null.
pub fn assoc_if(
    record: &mut Record,
    key: impl Into<Key>,
    value: impl Into<Option<Value>>,
) -> &mut Record {
    match value.into() {
        None | Some(Value::Null) => record,
        Some(value) => assoc(record, key, value),
    }
}

/// Apply [`assoc_if`] for every pair, in order.
pub fn assoc_if_all<I, K>(record: &mut Record, pairs: I) -> &mut Record
where
    I: IntoIterator<Item = (K, Option<Value>)>,
    K: Into<Key>,
{
    pairs
        .into_iter()
        .fold(record, |record, (key, value)| assoc_if(record, key, value))
}

/// Remove `key`, whether or not it is present.
///
/// The relative order of the remaining entries is preserved.
pub fn dissoc<'r>(record: &'r mut Record, key: &str) -> &'r mut Record {
    record.shift_remove(key);
    record
}

/// Apply [`dissoc`] for every key, in order.
pub fn dissoc_all<'r, I, K>(record: &'r mut Record, keys: I) -> &'r mut Record
where
    I: IntoIterator<Item = K>,
    K: AsRef<str>,
{
    keys.into_iter()
        .fold(record, |record, key| dissoc(record, key.as_ref()))
}

/// Set the value at a nested `path`, creating intermediate records.
///
/// Existing records and keyed collections along the way are reused; a
/// missing or null segment is replaced by a fresh record. A sequence is
/// entered through a segment that names one of its indices, so the
/// paths [`get_in`] reads are also paths `assoc_in` writes.
///
/// # Errors
///
/// [`PathError::EmptyPath`] for an empty path, and
/// [`PathError::NotAssociative`] when an intermediate segment holds a
/// scalar, or a sequence the next segment does not index. The record is
/// unchanged on error.
///
/// ```
/// use molt_core::{path::assoc_in, record, seq, Value};
///
/// let mut target = record! {};
/// let entries = target.as_record_mut().unwrap();
/// assoc_in(entries, &["user", "address", "city"], "Oslo").unwrap();
/// assert_eq!(target, record! { "user" => record! { "address" => record! { "city" => "Oslo" } } });
///
/// let mut order = record! { "lines" => seq![record! { "qty" => 1 }] };
/// assoc_in(order.as_record_mut().unwrap(), &["lines", "0", "qty"], 3).unwrap();
/// assert_eq!(order, record! { "lines" => seq![record! { "qty" => 3 }] });
/// ```
pub fn assoc_in<'r, K: AsRef<str>>(
    record: &'r mut Record,
    path: &[K],
    value: impl Into<Value>,
) -> Result<&'r mut Record, PathError> {
    let (first, rest) = path.split_first().ok_or(PathError::EmptyPath)?;
    let mut slot = record
        .entry(Key::from(AsRef::<str>::as_ref(first)))
        .or_insert(Value::Null);
    for (depth, key) in rest.iter().enumerate() {
        if slot.is_null() {
            *slot = Value::record();
        }
        let found = slot.shape();
        slot = match child_slot(slot, key.as_ref()) {
            Some(child) => child,
            None => {
                return Err(PathError::NotAssociative {
                    path: key_path(path[..=depth].iter().map(AsRef::<str>::as_ref)),
                    found,
                })
            }
        };
    }
    *slot = value.into();
    Ok(record)
}

/// Writable slot for `key` inside `parent`. Record keys are created on
/// demand; sequence elements must already exist.
fn child_slot<'v>(parent: &'v mut Value, key: &str) -> Option<&'v mut Value> {
    match parent {
        Value::Record(entries) | Value::Keyed(entries) => {
            Some(entries.entry(Key::from(key)).or_insert(Value::Null))
        }
        Value::Seq(items) => parse_index(key).and_then(move |i| items.get_mut(i)),
        _ => None,
    }
}

/// Remove and return the value at a nested `path`.
///
/// Returns `None` (leaving `record` untouched) when the path is empty,
/// any segment is absent, or the final parent cannot contain keys.
pub fn dissoc_in<K: AsRef<str>>(record: &mut Record, path: &[K]) -> Option<Value> {
    let (last, parents) = path.split_last()?;
    let Some((first, rest)) = parents.split_first() else {
        return record.shift_remove(AsRef::<str>::as_ref(last));
    };
    let head = record.get_mut(AsRef::<str>::as_ref(first))?;
    get_in_mut(rest, head)?
        .as_record_mut()?
        .shift_remove(AsRef::<str>::as_ref(last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Shape;
    use crate::{record, seq};
    use proptest::prelude::*;

    fn entries(v: &mut Value) -> &mut Record {
        v.as_record_mut().expect("record")
    }

    #[test]
    fn get_in_walks_nested_records_and_sequences() {
        let v = record! { "a" => record! { "items" => seq![record! { "n" => 1 }] } };
        assert_eq!(
            get_in(&["a", "items", "0", "n"], Some(&v)),
            Some(&Value::Int(1))
        );
        assert_eq!(get_in(&["a", "missing", "n"], Some(&v)), None);
        assert_eq!(get_in(&["a"], None), None);
    }

    #[test]
    fn get_in_empty_path_is_identity() {
        let v = record! { "a" => 1 };
        let empty: [&str; 0] = [];
        assert_eq!(get_in(&empty, Some(&v)), Some(&v));
    }

    #[test]
    fn get_in_stops_at_scalars() {
        let v = record! { "a" => 5 };
        assert_eq!(get_in(&["a", "b"], Some(&v)), None);
    }

    #[test]
    fn assoc_overwrites_and_allows_null() {
        let mut v = record! { "a" => 1 };
        assoc(entries(&mut v), "a", Value::Null);
        assert_eq!(v.get("a"), Some(&Value::Null));
    }

    #[test]
    fn assoc_all_applies_pairs_in_order() {
        let mut v = record! {};
        assoc_all(entries(&mut v), [("a", 1), ("b", 2), ("a", 3)]);
        assert_eq!(v, record! { "a" => 3, "b" => 2 });
    }

    #[test]
    fn assoc_if_skips_absent_and_null() {
        let mut v = record! { "a" => 1 };
        assoc_if(entries(&mut v), "a", None::<Value>);
        assoc_if(entries(&mut v), "a", Value::Null);
        assoc_if(entries(&mut v), "b", Value::from(2));
        assert_eq!(v, record! { "a" => 1, "b" => 2 });
    }

    #[test]
    fn assoc_if_all_mixes_present_and_absent() {
        let mut v = record! {};
        assoc_if_all(
            entries(&mut v),
            [("a", Some(Value::from(1))), ("b", None), ("c", Some(Value::Null))],
        );
        assert_eq!(v, record! { "a" => 1 });
    }

    #[test]
    fn dissoc_preserves_order_of_remaining_keys() {
        let mut v = record! { "a" => 1, "b" => 2, "c" => 3 };
        dissoc(entries(&mut v), "a");
        let keys: Vec<&str> = v.as_record().unwrap().keys().map(Key::as_str).collect();
        assert_eq!(keys, ["b", "c"]);
    }

    #[test]
    fn dissoc_all_ignores_missing_keys() {
        let mut v = record! { "a" => 1, "b" => 2 };
        dissoc_all(entries(&mut v), ["a", "zzz"]);
        assert_eq!(v, record! { "b" => 2 });
    }

    #[test]
    fn assoc_in_reuses_existing_records() {
        let mut v = record! { "user" => record! { "id" => 7 } };
        assoc_in(entries(&mut v), &["user", "name"], "Al").unwrap();
        assert_eq!(v, record! { "user" => record! { "id" => 7, "name" => "Al" } });
    }

    #[test]
    fn assoc_in_replaces_null_segments() {
        let mut v = record! { "user" => Value::Null };
        assoc_in(entries(&mut v), &["user", "id"], 1).unwrap();
        assert_eq!(v, record! { "user" => record! { "id" => 1 } });
    }

    #[test]
    fn assoc_in_rejects_scalar_segments() {
        let mut v = record! { "user" => "Al" };
        let err = assoc_in(entries(&mut v), &["user", "id"], 1).unwrap_err();
        assert_eq!(
            err,
            PathError::NotAssociative {
                path: key_path(["user"]),
                found: Shape::Str,
            }
        );
        assert_eq!(v, record! { "user" => "Al" });
    }

    #[test]
    fn assoc_in_writes_through_sequence_indices() {
        let mut v = record! { "list" => seq![record! { "x" => 1 }, Value::Null] };
        assoc_in(entries(&mut v), &["list", "0", "x"], 2).unwrap();
        assoc_in(entries(&mut v), &["list", "1", "y"], 3).unwrap();
        assert_eq!(get_in(&["list", "0", "x"], Some(&v)), Some(&Value::Int(2)));
        assert_eq!(
            v,
            record! { "list" => seq![record! { "x" => 2 }, record! { "y" => 3 }] }
        );

        assoc_in(entries(&mut v), &["list", "1"], "replaced").unwrap();
        assert_eq!(get_in(&["list", "1"], Some(&v)), Some(&Value::from("replaced")));
    }

    #[test]
    fn assoc_in_rejects_unindexed_sequence_segments() {
        let mut v = record! { "list" => seq![record! { "x" => 1 }] };
        let before = v.clone();
        for path in [["list", "5", "x"], ["list", "x", "y"], ["list", "01", "x"]] {
            assert_eq!(
                assoc_in(entries(&mut v), &path, 2).unwrap_err(),
                PathError::NotAssociative {
                    path: key_path(["list"]),
                    found: Shape::Seq,
                }
            );
        }
        assert_eq!(v, before);
    }

    #[test]
    fn assoc_in_rejects_empty_path() {
        let mut v = record! {};
        let empty: [&str; 0] = [];
        assert_eq!(
            assoc_in(entries(&mut v), &empty, 1).unwrap_err(),
            PathError::EmptyPath
        );
    }

    #[test]
    fn dissoc_in_removes_nested_values() {
        let mut v = record! {
            "a" => record! { "b" => 1, "c" => 2 },
            "list" => seq![record! { "x" => 1 }],
        };
        assert_eq!(dissoc_in(entries(&mut v), &["a", "b"]), Some(Value::Int(1)));
        assert_eq!(dissoc_in(entries(&mut v), &["list", "0", "x"]), Some(Value::Int(1)));
        assert_eq!(dissoc_in(entries(&mut v), &["a", "zzz", "q"]), None);
        assert_eq!(
            v,
            record! { "a" => record! { "c" => 2 }, "list" => seq![record! {}] }
        );
    }

    fn arb_key() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["a", "b", "c", "0", "1"]).prop_map(String::from)
    }

    fn arb_entries(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Record> {
        prop::collection::vec((arb_key(), inner), 0..4)
            .prop_map(|pairs| pairs.into_iter().map(|(k, v)| (Key::from(k), v)).collect())
    }

    fn arb_tree() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<i64>().prop_map(Value::Int),
            "[a-z]{0,4}".prop_map(Value::Str),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                arb_entries(inner.clone()).prop_map(Value::Record),
                arb_entries(inner.clone()).prop_map(Value::Keyed),
                prop::collection::vec(inner, 0..3).prop_map(Value::Seq),
            ]
        })
    }

    proptest! {
        #[test]
        fn absent_key_reads_absent(tree in arb_tree()) {
            let probe = "not-a-generated-key";
            prop_assert_eq!(get(probe, Some(&tree)), None);
            prop_assert_eq!(get_in(&[probe], Some(&tree)), None);
        }

        #[test]
        fn get_in_splits_over_prefix_and_suffix(
            tree in arb_tree(),
            path in prop::collection::vec(arb_key(), 2..5),
            split in 1usize..4,
        ) {
            let split = split.min(path.len() - 1);
            let (prefix, suffix) = path.split_at(split);
            prop_assert_eq!(
                get_in(&path[..], Some(&tree)),
                get_in(suffix, get_in(prefix, Some(&tree)))
            );
        }

        #[test]
        fn assoc_in_then_get_in_round_trips(
            tree in arb_tree(),
            path in prop::collection::vec(arb_key(), 1..4),
            n in any::<i64>(),
        ) {
            let mut v = match tree {
                Value::Record(_) => tree,
                other => record! { "seed" => other },
            };
            if assoc_in(entries(&mut v), &path[..], n).is_ok() {
                prop_assert_eq!(get_in(&path[..], Some(&v)), Some(&Value::Int(n)));
            }
        }

        #[test]
        fn assoc_then_get_round_trips(key in arb_key(), n in any::<Option<i64>>()) {
            let mut v = record! { "seed" => 1 };
            let value = Value::from(n);
            assoc(entries(&mut v), key.as_str(), value.clone());
            prop_assert_eq!(get(&key, Some(&v)), Some(&value));
        }

        #[test]
        fn assoc_if_with_absent_value_is_a_no_op(tree in arb_tree(), key in arb_key()) {
            if let Value::Record(_) = tree {
                let mut v = tree.clone();
                assoc_if(entries(&mut v), key.as_str(), None::<Value>);
                assoc_if(entries(&mut v), key.as_str(), Value::Null);
                prop_assert_eq!(v, tree);
            }
        }

        #[test]
        fn dissoc_is_idempotent(tree in arb_tree(), key in arb_key()) {
            if let Value::Record(_) = tree {
                let mut once = tree.clone();
                dissoc(entries(&mut once), &key);
                let mut twice = once.clone();
                dissoc(entries(&mut twice), &key);
                prop_assert_eq!(get(&key, Some(&once)), None);
                prop_assert_eq!(once, twice);
            }
        }
    }
}
