use tracing::trace;

use crate::{
    convert::SqlValue,
    query::Query,
    sql::{SqlCompiler, SqlPlan, SqlTranslations},
    QueryError,
};

/// Compose a `SELECT` statement.
///
/// Clauses with an empty body are left out, an empty projection selects `*`
/// and a zero `LIMIT` or `OFFSET` is not written.
pub fn assemble_select(table: &str, select: &str, where_clause: &str, group: &str, order: &str, limit: i64, offset: i64) -> String {
    let projection = if select.is_empty() { "*" } else { select };
    let mut sql = format!("SELECT {projection} FROM {table}");

    if !where_clause.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(where_clause);
    }
    if !group.is_empty() {
        sql.push_str(" GROUP BY ");
        sql.push_str(group);
    }
    if !order.is_empty() {
        sql.push_str(" ORDER BY ");
        sql.push_str(order);
    }
    if limit != 0 {
        sql.push_str(&format!(" LIMIT {limit}"));
    }
    if offset != 0 {
        sql.push_str(&format!(" OFFSET {offset}"));
    }

    sql
}

impl SqlPlan {
    /// The plan as a full statement over `table`; `preload` is not part of it.
    pub fn to_statement(&self, table: &str) -> String {
        assemble_select(table, &self.select, &self.where_clause, &self.group, &self.order, self.limit, self.offset)
    }
}

impl SqlCompiler {
    pub fn statement(&self, table: &str, query: &Query) -> Result<(String, Vec<SqlValue>), QueryError> {
        let select = self.select(query)?;
        let (where_clause, args) = self.where_clause(query)?;
        let group = self.group(query)?;
        let order = self.order_by(query)?;

        let sql = assemble_select(table, &select, &where_clause, &group, &order, query.limit, query.skip);
        trace!(sql = sql.as_str(), "assembled statement");

        Ok((sql, args))
    }
}

/// Compile `query` into a full `SELECT` over `table` with its arguments.
pub fn to_sql(table: &str, query: &Query, translations: &SqlTranslations) -> Result<(String, Vec<SqlValue>), QueryError> {
    SqlCompiler::new(translations).statement(table, query)
}
