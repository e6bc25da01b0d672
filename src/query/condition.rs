use serde::{Deserialize, Serialize};

use crate::query::Operator;

/// One filter predicate before translation.
///
/// The operator is kept as written in the parameter key and only resolved
/// when the condition is compiled.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub op: String,
    pub values: Vec<String>,
}

impl Condition {
    pub fn new(field: &str, op: &str, values: &[&str]) -> Self {
        Self {
            field: field.to_string(),
            op: op.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    pub fn is_valid(&self) -> bool {
        Operator::is_valid(&self.op) && !self.field.is_empty() && !self.values.is_empty()
    }
}
