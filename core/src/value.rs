//! Value types for batchop columns.
//!
//! Values are the scalars written to and read from provider columns.
//! Batchop supports Null, Bool, Int, Float, String and Blob.

use std::fmt;

/// A value that can be stored in a column.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Null/missing value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Raw bytes.
    Blob(Vec<u8>),
}

impl Value {
    /// Get as integer if this is an Int value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Render this value the way it appears as a selection argument.
    ///
    /// Strings are returned unquoted, so `Value::String("a")` and the
    /// argument `"a"` compare equal.
    pub fn to_arg_string(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Check whether this value matches a selection argument.
    pub fn matches_arg(&self, arg: &str) -> bool {
        match self {
            Value::Null => false,
            Value::Int(i) => arg.parse::<i64>().map(|a| a == *i).unwrap_or(false),
            Value::Float(f) => arg.parse::<f64>().map(|a| a == *f).unwrap_or(false),
            other => other.to_arg_string() == arg,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Blob(bytes) => {
                write!(f, "x'")?;
                for byte in bytes {
                    write!(f, "{:02x}", byte)?;
                }
                write!(f, "'")
            }
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i as i64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Blob(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Column name to value map, ordered by column name.
pub type Values = std::collections::BTreeMap<String, Value>;

/// Helper macro to create column maps.
#[macro_export]
macro_rules! values {
    () => {
        $crate::Values::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        {
            let mut map = $crate::Values::new();
            $(
                map.insert($key.to_string(), $crate::Value::from($value));
            )+
            map
        }
    };
}
