use std::num::ParseIntError;

use thiserror::Error;

use crate::convert::ConvertError;

/// Errors returned while parsing parameters or compiling a [`Query`](crate::query::Query).
///
/// Any error aborts the whole call; no partial result is ever returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// The field is not present in the translation table.
    #[error("invalid field: '{0}'")]
    InvalidField(String),

    /// The operator is not part of the operator vocabulary.
    #[error("invalid operator: '{0}'")]
    InvalidOperator(String),

    /// The relation is not present in the preload map.
    #[error("invalid preload: '{0}'")]
    InvalidPreload(String),

    #[error("invalid number for '{key}': '{value}' ({source})")]
    InvalidNumber {
        key: String,
        value: String,
        source: ParseIntError,
    },

    /// A condition reached the compiler without any value.
    #[error("condition on '{0}' has no values")]
    EmptyValues(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("statement has {placeholders} placeholders but {args} arguments")]
    PlaceholderMismatch { placeholders: usize, args: usize },

    /// A list argument cannot expand to an empty `IN ()`.
    #[error("cannot expand an empty list argument")]
    EmptyList,
}
