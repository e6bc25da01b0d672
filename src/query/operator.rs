use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::QueryError;

/// Filter operators accepted as the suffix of a `<field>_<op>` parameter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    IsNull,
    Eq,
    Ne,
    Gt,
    Lt,
    Gte,
    Lte,
    /// Case-insensitive substring.
    Contain,
    Ncontain,
    /// Case-sensitive substring.
    Contains,
    Ncontains,
    In,
    Nin,
}

impl Operator {
    pub const ALL: [Operator; 13] = [
        Operator::IsNull,
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Lt,
        Operator::Gte,
        Operator::Lte,
        Operator::Contain,
        Operator::Ncontain,
        Operator::Contains,
        Operator::Ncontains,
        Operator::In,
        Operator::Nin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::IsNull => "isnull",
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Gt => "gt",
            Operator::Lt => "lt",
            Operator::Gte => "gte",
            Operator::Lte => "lte",
            Operator::Contain => "contain",
            Operator::Ncontain => "ncontain",
            Operator::Contains => "contains",
            Operator::Ncontains => "ncontains",
            Operator::In => "in",
            Operator::Nin => "nin",
        }
    }

    pub fn is_valid(op: &str) -> bool {
        op.parse::<Operator>().is_ok()
    }
}

impl FromStr for Operator {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .iter()
            .find(|op| op.as_str() == s)
            .copied()
            .ok_or_else(|| QueryError::InvalidOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
