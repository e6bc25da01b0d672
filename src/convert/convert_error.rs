use std::num::ParseIntError;

use thiserror::Error;

/// Failure of a [`TypeConverter`](crate::convert::TypeConverter) on a single raw value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("invalid integer '{value}': {source}")]
    Int { value: String, source: ParseIntError },

    #[error("invalid float: '{0}'")]
    Float(String),

    #[error("invalid boolean: '{0}'")]
    Bool(String),

    #[error("invalid date '{value}': {source}")]
    Date { value: String, source: chrono::ParseError },

    #[error("invalid datetime '{value}': {source}")]
    DateTime { value: String, source: chrono::ParseError },

    #[error("invalid time '{value}': {source}")]
    Time { value: String, source: chrono::ParseError },

    #[error("invalid timestamp '{value}': {source}")]
    Timestamp { value: String, source: chrono::ParseError },

    /// Raised by caller supplied converters.
    #[error("{0}")]
    Custom(String),
}
