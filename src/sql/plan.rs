use serde::Serialize;

use crate::{
    convert::SqlValue,
    query::Query,
    sql::{to_sql_limit, to_sql_offset, to_sql_preload, SqlCompiler, SqlPreloadable, SqlTranslations},
    QueryError,
};

/// Every compiled part of a [`Query`], ready to hand to a query builder.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SqlPlan {
    pub select: String,
    #[serde(rename = "where")]
    pub where_clause: String,
    pub where_args: Vec<SqlValue>,
    pub group: String,
    pub order: String,
    pub limit: i64,
    pub offset: i64,
    pub preload: Vec<String>,
}

impl SqlCompiler {
    pub fn plan(&self, query: &Query, preloadable: &SqlPreloadable) -> Result<SqlPlan, QueryError> {
        let select = self.select(query)?;
        let (where_clause, where_args) = self.where_clause(query)?;
        let group = self.group(query)?;
        let order = self.order_by(query)?;
        let preload = to_sql_preload(query, preloadable)?;

        Ok(SqlPlan {
            select,
            where_clause,
            where_args,
            group,
            order,
            limit: to_sql_limit(query),
            offset: to_sql_offset(query),
            preload,
        })
    }
}

pub fn to_sql_plan(query: &Query, translations: &SqlTranslations, preloadable: &SqlPreloadable) -> Result<SqlPlan, QueryError> {
    SqlCompiler::new(translations).plan(query, preloadable)
}
