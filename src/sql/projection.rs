use crate::{
    query::Query,
    sql::{SqlCompiler, SqlField, SqlTranslations},
    QueryError,
};

impl SqlCompiler {
    /// Group fields followed by accumulator fields, aliased when needed.
    pub fn select_slice(&self, query: &Query) -> Result<Vec<String>, QueryError> {
        query
            .group
            .iter()
            .chain(query.accumulator.iter())
            .map(|field| self.translations.get(field).map(SqlField::select_expr))
            .collect()
    }

    pub fn group_slice(&self, query: &Query) -> Result<Vec<String>, QueryError> {
        query
            .group
            .iter()
            .map(|field| self.translations.get(field).map(|f| f.column.clone()))
            .collect()
    }

    pub fn order_by_slice(&self, query: &Query) -> Result<Vec<String>, QueryError> {
        query
            .sort
            .iter()
            .map(|sort| -> Result<String, QueryError> {
                let column = &self.translations.get(&sort.field)?.column;
                let direction = if sort.reverse { "DESC" } else { "ASC" };
                Ok(format!("{column} {direction}"))
            })
            .collect()
    }

    pub fn select(&self, query: &Query) -> Result<String, QueryError> {
        Ok(self.select_slice(query)?.join(", "))
    }

    pub fn group(&self, query: &Query) -> Result<String, QueryError> {
        Ok(self.group_slice(query)?.join(", "))
    }

    pub fn order_by(&self, query: &Query) -> Result<String, QueryError> {
        Ok(self.order_by_slice(query)?.join(", "))
    }
}

pub fn to_sql_select_slice(query: &Query, translations: &SqlTranslations) -> Result<Vec<String>, QueryError> {
    SqlCompiler::new(translations).select_slice(query)
}

pub fn to_sql_select(query: &Query, translations: &SqlTranslations) -> Result<String, QueryError> {
    SqlCompiler::new(translations).select(query)
}

pub fn to_sql_group_slice(query: &Query, translations: &SqlTranslations) -> Result<Vec<String>, QueryError> {
    SqlCompiler::new(translations).group_slice(query)
}

pub fn to_sql_group(query: &Query, translations: &SqlTranslations) -> Result<String, QueryError> {
    SqlCompiler::new(translations).group(query)
}

pub fn to_sql_order_by_slice(query: &Query, translations: &SqlTranslations) -> Result<Vec<String>, QueryError> {
    SqlCompiler::new(translations).order_by_slice(query)
}

pub fn to_sql_order_by(query: &Query, translations: &SqlTranslations) -> Result<String, QueryError> {
    SqlCompiler::new(translations).order_by(query)
}

/// Page size, passed through as is.
pub fn to_sql_limit(query: &Query) -> i64 {
    query.limit
}

/// Offset, passed through as is.
pub fn to_sql_offset(query: &Query) -> i64 {
    query.skip
}
