//! Test fixtures and proptest strategies for Molt development.
//!
//! [`fixtures`] holds hand-written sample documents shared by unit,
//! integration and benchmark code. The `arb_*` functions are proptest
//! strategies over a deliberately small key alphabet so that generated
//! paths and specifications actually hit generated data.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use molt_core::{Key, KeyPath, Record, Value};
use proptest::prelude::*;

/// Keys drawn by [`arb_key`].
pub const KEY_ALPHABET: [&str; 5] = ["a", "b", "c", "id", "items"];

/// One key from [`KEY_ALPHABET`].
pub fn arb_key() -> impl Strategy<Value = Key> {
    prop::sample::select(KEY_ALPHABET.to_vec()).prop_map(Key::from)
}

/// A non-empty key path of up to `max_len` keys.
pub fn arb_key_path(max_len: usize) -> impl Strategy<Value = KeyPath> {
    prop::collection::vec(arb_key(), 1..=max_len.max(1)).prop_map(KeyPath::from_vec)
}

/// Null, booleans, integers, floats and short strings.
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(Value::Int),
        (-1.0e3f64..1.0e3).prop_map(Value::Float),
        "[a-z]{0,6}".prop_map(Value::Str),
    ]
}

fn entries_of(inner: impl Strategy<Value = Value>) -> impl Strategy<Value = Record> {
    prop::collection::vec((arb_key(), inner), 0..5)
        .prop_map(|pairs| pairs.into_iter().collect::<Record>())
}

/// Arbitrary value trees: scalars, sequences, records and keyed collections.
pub fn arb_value() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Seq),
            entries_of(inner.clone()).prop_map(Value::Record),
            entries_of(inner).prop_map(Value::Keyed),
        ]
    })
}

/// Arbitrary value trees whose root is a record.
pub fn arb_record() -> impl Strategy<Value = Value> {
    entries_of(arb_value()).prop_map(Value::Record)
}
