//! The dynamic [`Value`] model and its shape predicates.
//!
//! A [`Value`] is a JSON-like tree with one extra container: the
//! [`Keyed`](Value::Keyed) collection, which stores entries exactly like a
//! [`Record`] but is a distinct variant so that evolution rules can tell
//! "a record with known fields" apart from "a dictionary of uniform
//! entries".

use indexmap::IndexMap;
use std::fmt;

use crate::key::{parse_index, Key};

/// Ordered key→value storage shared by records and keyed collections.
///
/// Insertion order is preserved, so every operation that builds a new
/// record produces a deterministic key order.
pub type Record = IndexMap<Key, Value>;

/// A dynamically shaped value.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// Explicit null. Distinct from an absent value, which is `Option::None`.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Ordered sequence.
    Seq(Vec<Value>),
    /// Associative structure with named fields.
    Record(Record),
    /// Keyed collection: uniform entries addressed by key.
    Keyed(Record),
}

/// Coarse shape of a [`Value`], used for dispatch and diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// [`Value::Null`].
    Null,
    /// [`Value::Bool`].
    Bool,
    /// [`Value::Int`] or [`Value::Float`].
    Number,
    /// [`Value::Str`].
    Str,
    /// [`Value::Seq`].
    Seq,
    /// [`Value::Record`].
    Record,
    /// [`Value::Keyed`].
    Keyed,
    /// Either a record or a keyed collection.
    Associative,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::Str => "string",
            Self::Seq => "sequence",
            Self::Record => "record",
            Self::Keyed => "keyed collection",
            Self::Associative => "record or keyed collection",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Create an empty record.
    pub fn record() -> Self {
        Self::Record(Record::new())
    }

    /// Create an empty keyed collection.
    pub fn keyed() -> Self {
        Self::Keyed(Record::new())
    }

    /// The coarse shape of this value.
    pub fn shape(&self) -> Shape {
        match self {
            Self::Null => Shape::Null,
            Self::Bool(_) => Shape::Bool,
            Self::Int(_) | Self::Float(_) => Shape::Number,
            Self::Str(_) => Shape::Str,
            Self::Seq(_) => Shape::Seq,
            Self::Record(_) => Shape::Record,
            Self::Keyed(_) => Shape::Keyed,
        }
    }

    /// `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// `true` for [`Value::Str`].
    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(_))
    }

    /// `true` for [`Value::Seq`].
    pub fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }

    /// `true` for [`Value::Record`].
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }

    /// `true` for [`Value::Keyed`].
    pub fn is_keyed(&self) -> bool {
        matches!(self, Self::Keyed(_))
    }

    /// `true` for records and keyed collections.
    pub fn is_associative(&self) -> bool {
        matches!(self, Self::Record(_) | Self::Keyed(_))
    }

    /// Borrow the entries of a record or keyed collection.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) | Self::Keyed(r) => Some(r),
            _ => None,
        }
    }

    /// Mutably borrow the entries of a record or keyed collection.
    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Self::Record(r) | Self::Keyed(r) => Some(r),
            _ => None,
        }
    }

    /// Borrow the elements of a sequence.
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// Mutably borrow the elements of a sequence.
    pub fn as_seq_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    /// The string slice of a [`Value::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The integer of a [`Value::Int`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Any number widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(x) => Some(*x),
            _ => None,
        }
    }

    /// The flag of a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Look up a single key.
    ///
    /// Records and keyed collections are indexed by key; sequences by
    /// the key's decimal index. Every other shape yields `None`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Record(r) | Self::Keyed(r) => r.get(key),
            Self::Seq(items) => parse_index(key).and_then(|i| items.get(i)),
            _ => None,
        }
    }

    /// Mutable counterpart of [`get`](Self::get).
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Self::Record(r) | Self::Keyed(r) => r.get_mut(key),
            Self::Seq(items) => parse_index(key).and_then(move |i| items.get_mut(i)),
            _ => None,
        }
    }

    /// Move the value out, leaving [`Value::Null`] in its place.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Seq(v)
    }
}

impl From<Record> for Value {
    fn from(v: Record) -> Self {
        Self::Record(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Seq(iter.into_iter().collect())
    }
}

/// Build a [`Value::Record`] from `key => value` pairs.
///
/// ```
/// use molt_core::{record, seq, Value};
///
/// let user = record! { "id" => 7, "tags" => seq!["a", "b"] };
/// assert_eq!(user.get("id"), Some(&Value::Int(7)));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Value::Record($crate::Record::new())
    };
    ($($k:expr => $v:expr),+ $(,)?) => {{
        let mut entries = $crate::Record::new();
        $( entries.insert($crate::Key::from($k), $crate::Value::from($v)); )+
        $crate::Value::Record(entries)
    }};
}

/// Build a [`Value::Keyed`] collection from `key => value` pairs.
#[macro_export]
macro_rules! keyed {
    () => {
        $crate::Value::Keyed($crate::Record::new())
    };
    ($($k:expr => $v:expr),+ $(,)?) => {{
        let mut entries = $crate::Record::new();
        $( entries.insert($crate::Key::from($k), $crate::Value::from($v)); )+
        $crate::Value::Keyed(entries)
    }};
}

/// Build a [`Value::Seq`] from a list of values.
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Value::Seq(::std::vec::Vec::new())
    };
    ($($v:expr),+ $(,)?) => {
        $crate::Value::Seq(::std::vec![$($crate::Value::from($v)),+])
    };
}
