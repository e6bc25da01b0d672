use std::{fmt, sync::Arc};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::convert::{ConvertError, SqlValue};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Caller supplied conversion of a raw parameter value.
///
/// Implemented for any `Fn(&str) -> Result<SqlValue, ConvertError>`.
pub trait ValueConverter: Send + Sync {
    fn convert(&self, value: &str) -> Result<SqlValue, ConvertError>;
}

impl<F> ValueConverter for F
where
    F: Fn(&str) -> Result<SqlValue, ConvertError> + Send + Sync,
{
    fn convert(&self, value: &str) -> Result<SqlValue, ConvertError> {
        self(value)
    }
}

/// How the raw text of a field is turned into a statement argument.
///
/// The builtin kinds (de)serialize by their lowercase name, so a translation
/// table can declare `"converter": "date"`. `Custom` can only be attached in code.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeConverter {
    String,
    Int,
    Bool,
    Float,
    /// `YYYY-MM-DD`
    Date,
    /// `YYYY-MM-DD HH:MM:SS`
    DateTime,
    /// `HH:MM:SS`
    Time,
    /// RFC 3339 timestamp with offset.
    Iso8601,
    #[serde(skip)]
    Custom(Arc<dyn ValueConverter>),
}

impl TypeConverter {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<SqlValue, ConvertError> + Send + Sync + 'static,
    {
        TypeConverter::Custom(Arc::new(f))
    }

    pub fn convert(&self, value: &str) -> Result<SqlValue, ConvertError> {
        match self {
            TypeConverter::String => Ok(SqlValue::String(value.to_string())),
            TypeConverter::Int => Self::to_int(value),
            TypeConverter::Bool => Self::to_bool(value),
            TypeConverter::Float => Self::to_float(value),
            TypeConverter::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map(SqlValue::Date)
                .map_err(|source| ConvertError::Date { value: value.to_string(), source }),
            TypeConverter::DateTime => NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
                .map(SqlValue::DateTime)
                .map_err(|source| ConvertError::DateTime { value: value.to_string(), source }),
            TypeConverter::Time => NaiveTime::parse_from_str(value, TIME_FORMAT)
                .map(SqlValue::Time)
                .map_err(|source| ConvertError::Time { value: value.to_string(), source }),
            TypeConverter::Iso8601 => DateTime::parse_from_rfc3339(value)
                .map(SqlValue::Timestamp)
                .map_err(|source| ConvertError::Timestamp { value: value.to_string(), source }),
            TypeConverter::Custom(converter) => converter.convert(value),
        }
    }

    fn to_int(value: &str) -> Result<SqlValue, ConvertError> {
        value
            .parse::<i64>()
            .map(SqlValue::Int)
            .map_err(|source| ConvertError::Int { value: value.to_string(), source })
    }

    fn to_float(value: &str) -> Result<SqlValue, ConvertError> {
        value
            .parse::<f64>()
            .ok()
            .and_then(|f| NotNan::new(f).ok())
            .map(SqlValue::Float)
            .ok_or_else(|| ConvertError::Float(value.to_string()))
    }

    fn to_bool(value: &str) -> Result<SqlValue, ConvertError> {
        match value {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(SqlValue::Bool(true)),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(SqlValue::Bool(false)),
            _ => Err(ConvertError::Bool(value.to_string())),
        }
    }
}

impl fmt::Debug for TypeConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeConverter::String => write!(f, "String"),
            TypeConverter::Int => write!(f, "Int"),
            TypeConverter::Bool => write!(f, "Bool"),
            TypeConverter::Float => write!(f, "Float"),
            TypeConverter::Date => write!(f, "Date"),
            TypeConverter::DateTime => write!(f, "DateTime"),
            TypeConverter::Time => write!(f, "Time"),
            TypeConverter::Iso8601 => write!(f, "Iso8601"),
            TypeConverter::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl PartialEq for TypeConverter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TypeConverter::Custom(a), TypeConverter::Custom(b)) => Arc::ptr_eq(a, b),
            (TypeConverter::Custom(_), _) | (_, TypeConverter::Custom(_)) => false,
            (a, b) => std::mem::discriminant(a) == std::mem::discriminant(b),
        }
    }
}
