//! Host values produced by the reader.

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

/// An insertion-ordered mapping, so dict round trips keep source order.
pub type ValueMap = IndexMap<Value, Value>;

/// A value read from Calf source.
///
/// Floats compare and hash by their bit pattern so that any value can
/// key a [`ValueMap`]; `NaN` equals itself and `-0.0` differs from
/// `0.0` under this convention.
#[derive(Debug, Clone)]
pub enum Value {
    /// 64-bit signed integer.
    Int(i64),
    /// IEEE-754 double.
    Float(f64),
    /// Decoded string.
    Str(String),
    /// Symbol, by default its raw text.
    Symbol(String),
    /// Keyword, by default its raw text minus the leading colon.
    Keyword(String),
    /// Ordered sequence from a paren or bracket list (or quote
    /// expansion).
    List(Vec<Value>),
    /// Insertion-ordered mapping from a brace dict.
    Map(ValueMap),
    /// A preserved dispatch form.
    Tagged(Box<TaggedValue>),
}

/// A `#tag form` pair preserved by the default dispatch hook.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedValue {
    /// The tag value.
    pub tag: Value,
    /// The tagged form.
    pub form: Value,
}

impl Value {
    /// Build a tagged value without spelling out the boxing.
    pub fn tagged(tag: Value, form: Value) -> Value {
        Value::Tagged(Box::new(TaggedValue { tag, form }))
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Keyword(a), Value::Keyword(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Tagged(a), Value::Tagged(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Int(v) => v.hash(state),
            Value::Float(v) => v.to_bits().hash(state),
            Value::Str(s) => s.hash(state),
            Value::Symbol(s) => s.hash(state),
            Value::Keyword(s) => s.hash(state),
            Value::List(items) => {
                for item in items {
                    item.hash(state);
                }
            }
            Value::Map(map) => {
                // Maps are equal regardless of insertion order, so the
                // hash must be order-insensitive too.
                let mut combined: u64 = 0;
                for (key, value) in map {
                    let mut pair = DefaultHasher::new();
                    key.hash(&mut pair);
                    value.hash(&mut pair);
                    combined ^= pair.finish();
                }
                combined.hash(state);
                map.len().hash(state);
            }
            Value::Tagged(tagged) => tagged.hash(state),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Symbol(s) => f.write_str(s),
            Value::Keyword(s) => write!(f, ":{s}"),
            Value::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key} {value}")?;
                }
                f.write_str("}")
            }
            Value::Tagged(tagged) => write!(f, "#{} {}", tagged.tag, tagged.form),
        }
    }
}
