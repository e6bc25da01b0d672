use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{
    convert::{ConvertError, SqlValue, TypeConverter},
    QueryError,
};

/// How a logical field is rendered in SQL.
///
/// - `column` is the SQL expression, a plain column or anything computed.
///   Defaults to the logical field name.
/// - `alias` is the projected name. Defaults to the logical field name, so an
///   untranslated field selects as itself without an `AS`.
/// - `converter` types raw parameter values; without one they bind as text.
///
/// Empty strings count as unset.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SqlFieldTranslation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converter: Option<TypeConverter>,
}

impl SqlFieldTranslation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_converter(mut self, converter: TypeConverter) -> Self {
        self.converter = Some(converter);
        self
    }

    /// Attach a caller supplied converter.
    pub fn with_custom<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> Result<SqlValue, ConvertError> + Send + Sync + 'static,
    {
        self.with_converter(TypeConverter::custom(f))
    }

    fn resolve(&self, field: &str) -> SqlField {
        let or_field = |value: &Option<String>| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .unwrap_or(field)
                .to_string()
        };

        SqlField {
            column: or_field(&self.column),
            alias: or_field(&self.alias),
            converter: self.converter.clone(),
        }
    }
}

/// Caller supplied mapping from logical field name to its SQL translation.
///
/// Every field a query mentions must be present; there is no pass-through for
/// unknown names. A table is never mutated by compilation and can be shared
/// between concurrent calls.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqlTranslations {
    fields: IndexMap<String, SqlFieldTranslation>,
}

impl SqlTranslations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, translation: SqlFieldTranslation) {
        self.fields.insert(field.into(), translation);
    }

    pub fn with(mut self, field: impl Into<String>, translation: SqlFieldTranslation) -> Self {
        self.insert(field, translation);
        self
    }

    pub fn get(&self, field: &str) -> Option<&SqlFieldTranslation> {
        self.fields.get(field)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Private copy with every column and alias defaulted.
    pub fn sanitized(&self) -> SanitizedTranslations {
        SanitizedTranslations {
            fields: self
                .fields
                .iter()
                .map(|(field, translation)| (field.clone(), translation.resolve(field)))
                .collect(),
        }
    }
}

impl<K: Into<String>> FromIterator<(K, SqlFieldTranslation)> for SqlTranslations {
    fn from_iter<T: IntoIterator<Item = (K, SqlFieldTranslation)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// A translation with its defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlField {
    pub column: String,
    pub alias: String,
    pub converter: Option<TypeConverter>,
}

impl SqlField {
    /// `<column>` when the alias adds nothing, `<column> AS <alias>` otherwise.
    pub fn select_expr(&self) -> String {
        if self.alias == self.column {
            self.column.clone()
        } else {
            format!("{} AS {}", self.column, self.alias)
        }
    }

    pub fn convert(&self, value: &str) -> Result<SqlValue, ConvertError> {
        match &self.converter {
            Some(converter) => converter.convert(value),
            None => Ok(SqlValue::String(value.to_string())),
        }
    }

    pub fn convert_all(&self, values: &[String]) -> Result<Vec<SqlValue>, ConvertError> {
        values.iter().map(|v| self.convert(v)).collect()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SanitizedTranslations {
    fields: IndexMap<String, SqlField>,
}

impl SanitizedTranslations {
    pub fn get(&self, field: &str) -> Result<&SqlField, QueryError> {
        self.fields
            .get(field)
            .ok_or_else(|| QueryError::InvalidField(field.to_string()))
    }
}

/// Relation name as it appears in `with` mapped to the backend's relation or
/// model identifier.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqlPreloadable {
    relations: IndexMap<String, String>,
}

impl SqlPreloadable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, relation: impl Into<String>, model: impl Into<String>) {
        self.relations.insert(relation.into(), model.into());
    }

    pub fn with(mut self, relation: impl Into<String>, model: impl Into<String>) -> Self {
        self.insert(relation, model);
        self
    }

    pub fn get(&self, relation: &str) -> Option<&str> {
        self.relations.get(relation).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SqlPreloadable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            relations: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        convert::{SqlValue, TypeConverter},
        sql::{SqlFieldTranslation, SqlPreloadable, SqlTranslations},
        QueryError,
    };

    #[test]
    pub fn test_sanitize_defaults() {
        let translations = SqlTranslations::new()
            .with("field1", SqlFieldTranslation::new())
            .with("field2", SqlFieldTranslation::new().with_column("ex.field2"))
            .with("field3", SqlFieldTranslation::new().with_alias("alias3"))
            .with("field4", SqlFieldTranslation::new().with_column("").with_alias(""));

        let sanitized = translations.sanitized();

        assert_eq!(sanitized.get("field1").unwrap().select_expr(), "field1");
        assert_eq!(sanitized.get("field2").unwrap().select_expr(), "ex.field2 AS field2");
        assert_eq!(sanitized.get("field3").unwrap().select_expr(), "field3 AS alias3");
        assert_eq!(sanitized.get("field4").unwrap().select_expr(), "field4");
        assert_eq!(sanitized.get("other"), Err(QueryError::InvalidField("other".into())));
    }

    #[test]
    pub fn test_sanitize_leaves_original_untouched() {
        let translations = SqlTranslations::new().with("field1", SqlFieldTranslation::new());
        let before = translations.clone();

        let _ = translations.sanitized();

        assert_eq!(translations, before);
        assert_eq!(translations.get("field1").unwrap().column, None);
    }

    #[test]
    pub fn test_convert() {
        let sanitized = SqlTranslations::new()
            .with("age", SqlFieldTranslation::new().with_converter(TypeConverter::Int))
            .with("name", SqlFieldTranslation::new())
            .sanitized();

        let age = sanitized.get("age").unwrap();
        assert_eq!(age.convert_all(&["1".into(), "2".into()]).unwrap(), vec![SqlValue::Int(1), SqlValue::Int(2)]);
        assert!(age.convert("x").is_err());

        assert_eq!(sanitized.get("name").unwrap().convert("x").unwrap(), SqlValue::from("x"));
    }

    #[test]
    pub fn test_with_custom() {
        let sanitized = SqlTranslations::new()
            .with("tags", SqlFieldTranslation::new().with_custom(|value| Ok(SqlValue::String(value.trim().to_lowercase()))))
            .sanitized();

        assert_eq!(sanitized.get("tags").unwrap().convert(" Rust ").unwrap(), SqlValue::from("rust"));
    }

    #[test]
    pub fn test_deserialize_table() {
        let translations: SqlTranslations = serde_json::from_value(json!({
            "age": { "column": "p.age", "converter": "int" },
            "name": { "alias": "full_name" },
            "city": {}
        }))
        .unwrap();

        assert_eq!(translations.len(), 3);
        assert_eq!(translations.get("age").unwrap().converter, Some(TypeConverter::Int));
        assert_eq!(translations.get("name").unwrap().alias.as_deref(), Some("full_name"));
        assert_eq!(translations.get("city").unwrap(), &SqlFieldTranslation::new());
    }

    #[test]
    pub fn test_preloadable() {
        let preloadable: SqlPreloadable = serde_json::from_value(json!({ "owner": "Owner" })).unwrap();

        assert_eq!(preloadable.get("owner"), Some("Owner"));
        assert_eq!(preloadable.get("items"), None);
        assert_eq!(preloadable, SqlPreloadable::new().with("owner", "Owner"));
    }
}
