use tracing::{debug, trace};

use crate::{
    parser::Params,
    query::{Condition, Query, Sort, ACCUMULATOR_KEY, GROUP_KEY, LIMIT_KEY, SKIP_KEY, SORT_KEY, WITH_KEY},
    QueryError,
};

/// Reads request [`Params`] into a [`Query`].
///
/// Parameters that do not describe a valid condition are dropped silently;
/// only a malformed `limit` or `skip` fails the parse.
pub struct QueryParser<'a> {
    params: &'a Params,
}

impl<'a> QueryParser<'a> {
    pub fn new(params: &'a Params) -> Self {
        Self { params }
    }

    pub fn parse(&self) -> Result<Query, QueryError> {
        let mut query = Query {
            conditions: self.parse_conditions(),
            ..Default::default()
        };

        if let Some(with) = self.params.get_all(WITH_KEY) {
            query.with = with.to_vec();
        }
        if let Some(group) = self.params.get_all(GROUP_KEY) {
            query.group = group.to_vec();
        }
        if let Some(accumulator) = self.params.get_all(ACCUMULATOR_KEY) {
            query.accumulator = accumulator.to_vec();
        }
        if let Some(sort) = self.params.get_all(SORT_KEY) {
            query.sort = sort.iter().map(|s| Sort::parse(s)).collect();
        }

        if let Some(limit) = self.parse_number(LIMIT_KEY)? {
            query.limit = limit;
        }
        if let Some(skip) = self.parse_number(SKIP_KEY)? {
            query.skip = skip;
        }

        trace!(?query, "parsed query");
        Ok(query)
    }

    fn parse_conditions(&self) -> Vec<Condition> {
        let mut conditions = vec![];

        for (key, values) in self.params.iter() {
            if Query::is_reserved(key) {
                continue;
            }

            let Some((field, op)) = Self::split_key(key) else {
                trace!(key = key.as_str(), "skipping parameter without operator");
                continue;
            };

            let cond = Condition {
                field: field.to_string(),
                op: op.to_string(),
                values: values.clone(),
            };

            if cond.is_valid() {
                conditions.push(cond);
            } else {
                debug!(key = key.as_str(), "dropping invalid condition");
            }
        }

        conditions
    }

    /// Split `<field>_<op>` on the last underscore. The field may contain
    /// underscores itself, so field names must not end in `_<op>`.
    pub fn split_key(key: &str) -> Option<(&str, &str)> {
        key.rsplit_once('_')
    }

    /// First value of `key` as an integer; an empty value counts as absent.
    fn parse_number(&self, key: &str) -> Result<Option<i64>, QueryError> {
        match self.params.first(key) {
            None | Some("") => Ok(None),
            Some(value) => value.parse::<i64>().map(Some).map_err(|source| QueryError::InvalidNumber {
                key: key.to_string(),
                value: value.to_string(),
                source,
            }),
        }
    }
}

impl Query {
    pub fn from_params(params: &Params) -> Result<Self, QueryError> {
        QueryParser::new(params).parse()
    }

    pub fn from_query_string(query_string: &str) -> Result<Self, QueryError> {
        Self::from_params(&Params::parse(query_string))
    }
}

impl TryFrom<&str> for Query {
    type Error = QueryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Query::from_query_string(value)
    }
}

impl TryFrom<&Params> for Query {
    type Error = QueryError;

    fn try_from(value: &Params) -> Result<Self, Self::Error> {
        Query::from_params(value)
    }
}
