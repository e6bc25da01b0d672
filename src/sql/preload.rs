use tracing::debug;

use crate::{query::Query, sql::SqlPreloadable, QueryError};

/// Resolve every `with` relation to its backend name, in request order.
pub fn to_sql_preload(query: &Query, preloadable: &SqlPreloadable) -> Result<Vec<String>, QueryError> {
    query
        .with
        .iter()
        .map(|relation| match preloadable.get(relation) {
            Some(model) => Ok(model.to_string()),
            None => {
                debug!(relation = relation.as_str(), "rejecting preload");
                Err(QueryError::InvalidPreload(relation.clone()))
            }
        })
        .collect()
}
