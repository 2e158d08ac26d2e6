//! Dynamically typed payload carried by validation errors.

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Map key wrapping a non-finite float in JSON.
const NON_FINITE_KEY: &str = "float";

/// An offending value or a constraint parameter.
///
/// This is a small value type of its own rather than `serde_json::Value`, for three
/// reasons that show up in error output:
///
/// - `Display` prints values the way a message reads: `42`, `-3`, `1.5`, text without
///   quotes, and lists as `[a, b]`. Floats use the shortest representation that
///   round-trips.
/// - Numbers keep their kind. Integers are canonical when non-negative ones are
///   `Uint` and only negative ones are `Int`, the same split `serde_json::Number`
///   makes. [`Value::integer`] and the numeric checks produce canonical values.
/// - Non-finite floats survive. `serde_json` writes `NaN` and infinities as `null`,
///   so they serialize here as `{"float": "NaN"}`, `{"float": "inf"}` or
///   `{"float": "-inf"}` and come back as the same float.
///
/// Equality treats `NaN` as equal to itself, so an error carrying `NaN` compares
/// equal to a clone of itself and to its JSON round trip.
#[derive(Debug, Clone)]
pub enum Value {
    /// Non-negative integer
    Uint(u64),
    /// Negative integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Text(String),
    /// Ordered list of values
    List(Vec<Value>),
}

impl Value {
    /// Canonical integer value.
    pub fn integer(n: i64) -> Self {
        u64::try_from(n).map_or(Value::Int(n), Value::Uint)
    }

    /// Borrow the text, if this is a `Text` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Read the value as an `i64`, if it is an integer that fits.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Int(n) => Some(n),
            Value::Uint(n) => i64::try_from(n).ok(),
            _ => None,
        }
    }

    /// Read the value as a `u64`, if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Value::Int(n) => u64::try_from(n).ok(),
            Value::Uint(n) => Some(n),
            _ => None,
        }
    }

    /// Read the value as an `f64`. Integers are converted.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Int(n) => Some(n as f64),
            Value::Uint(n) => Some(n as f64),
            Value::Float(n) => Some(n),
            _ => None,
        }
    }

    /// Borrow the items, if this is a `List` value.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Uint(n) => write!(f, "{n}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Uint(n) => serializer.serialize_u64(*n),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Float(n) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(NON_FINITE_KEY, &n.to_string())?;
                map.end()
            }
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(items) => serializer.collect_seq(items),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a string, a list or a non-finite float")
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> Result<Value, E> {
        Ok(Value::Uint(n))
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> Result<Value, E> {
        Ok(Value::integer(n))
    }

    fn visit_f64<E: de::Error>(self, n: f64) -> Result<Value, E> {
        Ok(Value::Float(n))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> Result<Value, E> {
        Ok(Value::Text(s.to_string()))
    }

    fn visit_string<E: de::Error>(self, s: String) -> Result<Value, E> {
        Ok(Value::Text(s))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let (Some((key, rendered)), None) = (
            map.next_entry::<String, String>()?,
            map.next_key::<de::IgnoredAny>()?,
        ) else {
            return Err(de::Error::custom(format!(
                "expected a single {NON_FINITE_KEY:?} entry"
            )));
        };
        if key != NON_FINITE_KEY {
            return Err(de::Error::unknown_field(&key, &[NON_FINITE_KEY]));
        }

        match rendered.parse::<f64>() {
            Ok(n) if !n.is_finite() => Ok(Value::Float(n)),
            _ => Err(de::Error::invalid_value(
                de::Unexpected::Str(&rendered),
                &"NaN, inf or -inf",
            )),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Text(c.to_string())
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Uint(n as u64)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}
