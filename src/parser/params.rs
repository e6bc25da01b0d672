use indexmap::IndexMap;
use url::form_urlencoded;

/// Multi-valued, string keyed request parameters.
///
/// Keys keep the order of their first appearance and every value of a
/// repeated key is kept in order, so `a=1&b=2&a=3` reads as
/// `a -> [1, 3], b -> [2]`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params {
    values: IndexMap<String, Vec<String>>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode an `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored. Decoding never fails: invalid percent
    /// sequences are kept literally.
    pub fn parse(query_string: &str) -> Self {
        let query_string = query_string.strip_prefix('?').unwrap_or(query_string);

        form_urlencoded::parse(query_string.as_bytes())
            .into_owned()
            .collect()
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    pub fn get_all(&self, key: &str) -> Option<&[String]> {
        self.values.get(key).map(Vec::as_slice)
    }

    pub fn first(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}

impl From<IndexMap<String, Vec<String>>> for Params {
    fn from(values: IndexMap<String, Vec<String>>) -> Self {
        Self { values }
    }
}
