use std::fmt::{self, Display};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use ordered_float::NotNan;
use serde::Serialize;

/// A typed statement argument produced from a raw parameter value.
///
/// `List` only appears as the single argument of an `IN (?)` / `NOT IN (?)`
/// fragment and holds every converted value of the condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum SqlValue {
    String(String),
    Int(i64),
    Float(NotNan<f64>),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
    Timestamp(DateTime<FixedOffset>),
    List(Vec<SqlValue>),
}

impl SqlValue {
    pub fn is_list(&self) -> bool {
        matches!(self, SqlValue::List(_))
    }

    /// Wrap a raw value in `%` for the contain-family operators.
    pub fn like_pattern(raw: &str) -> Self {
        SqlValue::String(format!("%{raw}%"))
    }
}

impl Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::String(s) => write!(f, "'{}'", s),
            SqlValue::Int(i) => write!(f, "{}", i),
            SqlValue::Float(n) => write!(f, "{}", n.into_inner()),
            SqlValue::Bool(b) => write!(f, "{}", b),
            SqlValue::Date(d) => write!(f, "{}", d),
            SqlValue::DateTime(dt) => write!(f, "{}", dt),
            SqlValue::Time(t) => write!(f, "{}", t),
            SqlValue::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
            SqlValue::List(values) => {
                let items = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
                write!(f, "[{}]", items)
            }
        }
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::String(value.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::String(value)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<bool> for SqlValue {
    fn from(value: bool) -> Self {
        SqlValue::Bool(value)
    }
}

impl From<Vec<SqlValue>> for SqlValue {
    fn from(value: Vec<SqlValue>) -> Self {
        SqlValue::List(value)
    }
}
