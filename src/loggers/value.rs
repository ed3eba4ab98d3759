//! src/loggers/value.rs
//!
//! `LogValue` is the tagged union every log argument is converted into before
//! rendering. `ToLogValue` performs that conversion for the common std types
//! and for `serde_json::Value`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A log argument.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Seq(Vec<LogValue>),
    /// Key/value pairs in insertion order. Renderers sort them.
    Map(Vec<(LogValue, LogValue)>),
    /// A named composite with ordered fields.
    Struct {
        name: String,
        fields: Vec<(String, LogValue)>,
    },
}

impl LogValue {
    /// Starts a struct value; add fields with [`LogValue::field`].
    pub fn record(name: impl Into<String>) -> Self {
        LogValue::Struct {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field to a struct value. No-op on any other variant.
    pub fn field(mut self, name: impl Into<String>, value: impl ToLogValue) -> Self {
        if let LogValue::Struct { fields, .. } = &mut self {
            fields.push((name.into(), value.to_log_value()));
        }
        self
    }

    /// Captures anything `Display` as a string value.
    pub fn display(value: &impl fmt::Display) -> Self {
        LogValue::Str(value.to_string())
    }

    /// Short type annotation used by the deep dump.
    pub fn type_name(&self) -> &str {
        match self {
            LogValue::Null => "nil",
            LogValue::Bool(_) => "bool",
            LogValue::Int(_) => "int",
            LogValue::Uint(_) => "uint",
            LogValue::Float(_) => "float",
            LogValue::Str(_) => "string",
            LogValue::Seq(_) => "seq",
            LogValue::Map(_) => "map",
            LogValue::Struct { name, .. } => name,
        }
    }
}

impl Serialize for LogValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LogValue::Null => serializer.serialize_unit(),
            LogValue::Bool(b) => serializer.serialize_bool(*b),
            LogValue::Int(i) => serializer.serialize_i64(*i),
            LogValue::Uint(u) => serializer.serialize_u64(*u),
            LogValue::Float(f) => serializer.serialize_f64(*f),
            LogValue::Str(s) => serializer.serialize_str(s),
            LogValue::Seq(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            LogValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (k, v) in crate::loggers::render::sorted_entries(entries) {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            LogValue::Struct { fields, .. } => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, value) in fields {
                    map.serialize_entry(name, value)?;
                }
                map.end()
            }
        }
    }
}

/// Conversion into a [`LogValue`]. Logging macros call this on a reference to
/// each argument, so implementations must not consume `self`.
pub trait ToLogValue {
    fn to_log_value(&self) -> LogValue;
}

impl ToLogValue for LogValue {
    fn to_log_value(&self) -> LogValue {
        self.clone()
    }
}

impl<T: ToLogValue + ?Sized> ToLogValue for &T {
    fn to_log_value(&self) -> LogValue {
        (**self).to_log_value()
    }
}

impl<T: ToLogValue + ?Sized> ToLogValue for Box<T> {
    fn to_log_value(&self) -> LogValue {
        (**self).to_log_value()
    }
}

impl ToLogValue for bool {
    fn to_log_value(&self) -> LogValue {
        LogValue::Bool(*self)
    }
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(impl ToLogValue for $t {
            fn to_log_value(&self) -> LogValue {
                LogValue::Int(*self as i64)
            }
        })*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(impl ToLogValue for $t {
            fn to_log_value(&self) -> LogValue {
                LogValue::Uint(*self as u64)
            }
        })*
    };
}

impl_signed!(i8, i16, i32, i64, isize);
impl_unsigned!(u8, u16, u32, u64, usize);

impl ToLogValue for f32 {
    fn to_log_value(&self) -> LogValue {
        LogValue::Float(f64::from(*self))
    }
}

impl ToLogValue for f64 {
    fn to_log_value(&self) -> LogValue {
        LogValue::Float(*self)
    }
}

impl ToLogValue for char {
    fn to_log_value(&self) -> LogValue {
        LogValue::Str(self.to_string())
    }
}

impl ToLogValue for str {
    fn to_log_value(&self) -> LogValue {
        LogValue::Str(self.to_string())
    }
}

impl ToLogValue for String {
    fn to_log_value(&self) -> LogValue {
        LogValue::Str(self.clone())
    }
}

impl<T: ToLogValue> ToLogValue for Option<T> {
    fn to_log_value(&self) -> LogValue {
        match self {
            Some(v) => v.to_log_value(),
            None => LogValue::Null,
        }
    }
}

impl<T: ToLogValue> ToLogValue for [T] {
    fn to_log_value(&self) -> LogValue {
        LogValue::Seq(self.iter().map(ToLogValue::to_log_value).collect())
    }
}

impl<T: ToLogValue, const N: usize> ToLogValue for [T; N] {
    fn to_log_value(&self) -> LogValue {
        self.as_slice().to_log_value()
    }
}

impl<T: ToLogValue> ToLogValue for Vec<T> {
    fn to_log_value(&self) -> LogValue {
        self.as_slice().to_log_value()
    }
}

impl<K: ToLogValue, V: ToLogValue, S: BuildHasher> ToLogValue for HashMap<K, V, S> {
    fn to_log_value(&self) -> LogValue {
        LogValue::Map(
            self.iter()
                .map(|(k, v)| (k.to_log_value(), v.to_log_value()))
                .collect(),
        )
    }
}

impl<K: ToLogValue, V: ToLogValue> ToLogValue for BTreeMap<K, V> {
    fn to_log_value(&self) -> LogValue {
        LogValue::Map(
            self.iter()
                .map(|(k, v)| (k.to_log_value(), v.to_log_value()))
                .collect(),
        )
    }
}

impl ToLogValue for Value {
    fn to_log_value(&self) -> LogValue {
        match self {
            Value::Null => LogValue::Null,
            Value::Bool(b) => LogValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    LogValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    LogValue::Uint(u)
                } else {
                    LogValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => LogValue::Str(s.clone()),
            Value::Array(items) => items.to_log_value(),
            Value::Object(map) => LogValue::Map(
                map.iter()
                    .map(|(k, v)| (LogValue::Str(k.clone()), v.to_log_value()))
                    .collect(),
            ),
        }
    }
}
