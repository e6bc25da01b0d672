use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub reverse: bool,
}

impl Sort {
    pub fn asc(field: &str) -> Self {
        Self { field: field.to_string(), reverse: false }
    }

    pub fn desc(field: &str) -> Self {
        Self { field: field.to_string(), reverse: true }
    }

    /// Read a `sort` parameter value; a leading `-` means descending.
    pub fn parse(value: &str) -> Self {
        match value.strip_prefix('-') {
            Some(field) => Self::desc(field),
            None => Self::asc(value),
        }
    }

    /// Inverse of [`Sort::parse`].
    pub fn to_param(&self) -> String {
        if self.reverse {
            format!("-{}", self.field)
        } else {
            self.field.clone()
        }
    }
}
