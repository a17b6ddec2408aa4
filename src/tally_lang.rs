use std::fmt;

use ordered_float::NotNan;

use crate::tally_error::KeyRejection;

/// A dynamically typed element of an input sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Tuple(Vec<Value>),
    List(Vec<Value>),
}

/// The hashable form of a `Value`.
///
/// Values of different kinds never compare equal, so `Int(1)` and
/// `Str("1")` are separate keys, and so are `Int(1)` and `Float(1.0)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Float(NotNan<f64>),
    Str(String),
    Tuple(Vec<Key>),
}

impl Value {
    /// Projects the value to a key. Lists have no key form, NaN neither,
    /// and a tuple only has one if all of its members do.
    pub fn to_key(&self) -> Result<Key, KeyRejection> {
        match self {
            Value::Int(i) => Ok(Key::Int(*i)),
            Value::Float(f) => NotNan::new(*f)
                .map(Key::Float)
                .map_err(|_| KeyRejection::NotANumber),
            Value::Str(s) => Ok(Key::Str(s.clone())),
            Value::Tuple(items) => items
                .iter()
                .map(Value::to_key)
                .collect::<Result<_, _>>()
                .map(Key::Tuple),
            Value::List(_) => Err(KeyRejection::UnhashableList),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            // Debug keeps the fractional part: 2.0 rather than 2
            Key::Float(x) => write!(f, "{:?}", x.into_inner()),
            Key::Str(s) => write!(f, "{:?}", s),
            Key::Tuple(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
        }
    }
}
