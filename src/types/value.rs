use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parse;

/// A value held by a table cell, a record field, or a condition operand.
///
/// Deserializes from any JSON scalar or array. Integers that fit in an `i64`
/// become [`Value::Int`]; every other number becomes [`Value::Float`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An explicit null.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A UTF-8 string.
    String(String),
    /// An ordered list, used as the membership set of `in` conditions.
    List(Vec<Value>),
}

impl Value {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The numeric value of a number, without any conversion.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Coerce a cell value for an ordering comparison.
    ///
    /// Numbers are taken as-is and strings contribute their leading numeral
    /// (`"12 units"` is `12`). Everything else, NaN included, has no numeric
    /// reading.
    #[must_use]
    pub fn leading_number(&self) -> Option<f64> {
        match self {
            Value::String(s) => parse::leading_float(s),
            other => other.as_number().filter(|n| !n.is_nan()),
        }
    }

    /// Convert to a number the way loose equality does: booleans are 1 and 0
    /// and strings must be numerals in full (blank text is 0).
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::String(s) => parse::full_numeral(s),
            other => other.as_number(),
        }
    }

    /// Permissive equality: `5 == "5"`, `1 == true`, `null` equals only `null`.
    #[must_use]
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, _) | (_, Value::Null) => false,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::List(_), _) | (_, Value::List(_)) => false,
            (a, b) => match (a.to_number(), b.to_number()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }

    /// Equality used for set membership. No conversions between types, except
    /// that integers and floats compare numerically and NaN equals NaN.
    #[must_use]
    pub fn same_value(&self, other: &Value) -> bool {
        if let (Value::Int(a), Value::Int(b)) = (self, other) {
            return a == b;
        }
        match (self.as_number(), other.as_number()) {
            (Some(x), Some(y)) => x == y || (x.is_nan() && y.is_nan()),
            _ => match (self, other) {
                (Value::Null, Value::Null) => true,
                (Value::Bool(a), Value::Bool(b)) => a == b,
                (Value::String(a), Value::String(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Order two values of compatible types.
    /// Returns `None` for incompatible types, lists, nulls and NaN.
    #[must_use]
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (a, b) => a.as_number()?.partial_cmp(&b.as_number()?),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

/// The text a value shows when rendered into a cell.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write_float(f, *v),
            Value::String(v) => write!(f, "{v}"),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    if !item.is_null() {
                        write!(f, "{item}")?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Shortest round-trip text, switching to exponent form (`1e+21`, `1.5e-7`)
/// outside `1e-6 <= |v| < 1e21`.
fn write_float(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    if v.is_infinite() {
        return write!(f, "{}Infinity", if v < 0.0 { "-" } else { "" });
    }
    if v == 0.0 {
        return write!(f, "0");
    }
    let magnitude = v.abs();
    if magnitude.is_nan() || (1e-6..1e21).contains(&magnitude) {
        return write!(f, "{v}");
    }
    let text = format!("{v:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => write!(f, "{mantissa}e+{exp}"),
        _ => write!(f, "{text}"),
    }
}
