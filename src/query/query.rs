use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::query::{Condition, Sort};

pub const WITH_KEY: &str = "with";
pub const GROUP_KEY: &str = "group";
pub const ACCUMULATOR_KEY: &str = "accumulator";
pub const SORT_KEY: &str = "sort";
pub const LIMIT_KEY: &str = "limit";
pub const SKIP_KEY: &str = "skip";

/// Parameter keys that never describe a condition.
pub const RESERVED_KEYS: [&str; 6] = [WITH_KEY, GROUP_KEY, ACCUMULATOR_KEY, SORT_KEY, LIMIT_KEY, SKIP_KEY];

/// A structured, backend-agnostic filter request.
///
/// - `conditions` are always combined with `AND`.
/// - `with` names relations to preload alongside the result.
/// - `group` and `accumulator` make up the projection: grouped columns first,
///   then aggregated or computed ones.
/// - `limit` and `skip` are page size and offset; `0` is kept as is.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Query {
    pub conditions: Vec<Condition>,
    pub with: Vec<String>,
    pub group: Vec<String>,
    pub accumulator: Vec<String>,
    pub sort: Vec<Sort>,
    pub limit: i64,
    pub skip: i64,
}

impl Query {
    pub fn is_reserved(key: &str) -> bool {
        RESERVED_KEYS.contains(&key)
    }

    /// Serialize back into the query-string grammar read by
    /// [`QueryParser`](crate::parser::QueryParser).
    ///
    /// `limit` and `skip` are only written when non-zero, since the parser
    /// defaults them to zero.
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());

        for cond in &self.conditions {
            let key = format!("{}_{}", cond.field, cond.op);
            for value in &cond.values {
                serializer.append_pair(&key, value);
            }
        }

        for relation in &self.with {
            serializer.append_pair(WITH_KEY, relation);
        }
        for field in &self.group {
            serializer.append_pair(GROUP_KEY, field);
        }
        for field in &self.accumulator {
            serializer.append_pair(ACCUMULATOR_KEY, field);
        }
        for sort in &self.sort {
            serializer.append_pair(SORT_KEY, &sort.to_param());
        }

        if self.limit != 0 {
            serializer.append_pair(LIMIT_KEY, &self.limit.to_string());
        }
        if self.skip != 0 {
            serializer.append_pair(SKIP_KEY, &self.skip.to_string());
        }

        serializer.finish()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::query::{Condition, Query, Sort};

    #[test]
    pub fn test_reserved() {
        for key in ["with", "group", "accumulator", "sort", "limit", "skip"] {
            assert!(Query::is_reserved(key));
        }
        assert!(!Query::is_reserved("field1_eq"));
        assert!(!Query::is_reserved("Limit"));
    }

    #[test]
    pub fn test_to_query_string() {
        let query = Query {
            conditions: vec![
                Condition::new("field1", "eq", &["value 1"]),
                Condition::new("field2", "in", &["a", "b&c"]),
            ],
            with: vec!["owner".into()],
            group: vec!["city".into()],
            accumulator: vec!["total".into()],
            sort: vec![Sort::desc("field1"), Sort::asc("field2")],
            limit: 200,
            skip: 0,
        };

        assert_eq!(
            query.to_query_string(),
            "field1_eq=value+1&field2_in=a&field2_in=b%26c&with=owner&group=city&accumulator=total&sort=-field1&sort=field2&limit=200"
        );
    }

    #[test]
    pub fn test_empty_query_string() {
        assert_eq!(Query::default().to_query_string(), "");
    }

    #[test]
    pub fn test_deserialize_partial() {
        let query: Query = serde_json::from_value(json!({
            "group": ["city"],
            "sort": [{ "field": "age", "reverse": true }],
            "limit": 10
        }))
        .unwrap();

        assert_eq!(query.group, vec!["city".to_string()]);
        assert_eq!(query.sort, vec![Sort::desc("age")]);
        assert_eq!(query.limit, 10);
        assert!(query.conditions.is_empty());
    }
}
