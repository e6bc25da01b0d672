use tracing::{debug, trace};

use crate::{
    convert::SqlValue,
    query::{Condition, Operator, Query},
    sql::{SqlCompiler, SqlField, SqlTranslations},
    QueryError,
};

impl SqlCompiler {
    /// Render every condition of `query` and join them with ` AND `.
    ///
    /// Values never reach the SQL text; each `?` has a matching entry in the
    /// returned arguments, in order. `isnull` binds nothing.
    pub fn where_clause(&self, query: &Query) -> Result<(String, Vec<SqlValue>), QueryError> {
        let mut statements = Vec::with_capacity(query.conditions.len());
        let mut args = vec![];

        for cond in &query.conditions {
            let field = self.translations.get(&cond.field).inspect_err(|err| {
                debug!(%err, "rejecting condition");
            })?;

            let (statement, arg) = Self::condition_to_sql(field, cond)?;
            statements.push(statement);

            if let Some(arg) = arg {
                args.push(arg);
            }
        }

        let statement = statements.join(" AND ");
        trace!(statement = statement.as_str(), args = args.len(), "compiled where");

        Ok((statement, args))
    }

    /// Render a single condition as a fragment and its optional argument.
    ///
    /// Every value goes through the field's converter first, whatever the
    /// operator, so a bad value always aborts. Substring operators then bind
    /// the raw first value wrapped in `%` and cast the column to text.
    pub fn condition_to_sql(field: &SqlField, cond: &Condition) -> Result<(String, Option<SqlValue>), QueryError> {
        let op: Operator = cond.op.parse()?;

        let Some(raw) = cond.values.first() else {
            return Err(QueryError::EmptyValues(cond.field.clone()));
        };

        let converted = field.convert_all(&cond.values).inspect_err(|err| {
            debug!(field = cond.field.as_str(), %err, "rejecting value");
        })?;

        let column = &field.column;

        let compare = |symbol: &str, converted: Vec<SqlValue>| {
            (format!("{column} {symbol} ?"), converted.into_iter().next())
        };

        let like = |keyword: &str| {
            (format!("{} {keyword} ?", Self::cast_as_text(column)), Some(SqlValue::like_pattern(raw)))
        };

        let fragment = match op {
            Operator::IsNull => (format!("{column} IS NULL"), None),
            Operator::Eq => compare("=", converted),
            Operator::Ne => compare("!=", converted),
            Operator::Gt => compare(">", converted),
            Operator::Gte => compare(">=", converted),
            Operator::Lt => compare("<", converted),
            Operator::Lte => compare("<=", converted),
            Operator::Contain => like("ILIKE"),
            Operator::Ncontain => like("NOT ILIKE"),
            Operator::Contains => like("LIKE"),
            Operator::Ncontains => like("NOT LIKE"),
            Operator::In => (format!("{column} IN (?)"), Some(SqlValue::List(converted))),
            Operator::Nin => (format!("{column} NOT IN (?)"), Some(SqlValue::List(converted))),
        };

        Ok(fragment)
    }

    pub fn cast_as_text(column: &str) -> String {
        format!("CAST({column} AS TEXT)")
    }
}

/// Compile the WHERE fragment of `query` and its positional arguments.
pub fn to_sql_where(query: &Query, translations: &SqlTranslations) -> Result<(String, Vec<SqlValue>), QueryError> {
    SqlCompiler::new(translations).where_clause(query)
}
