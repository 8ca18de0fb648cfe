//! Merged path and query parameters.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use url::form_urlencoded;

/// Separator used to join repeated query values unless configured otherwise.
pub const DEFAULT_QUERY_SEPARATOR: &str = "; ";

/// Flat name/value mapping handed to a route handler.
///
/// Path captures are inserted first; query parameters overwrite them on a
/// name collision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(HashMap<String, String>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping from ordered captures. A later duplicate name
    /// replaces the earlier value.
    pub fn from_captures<I>(captures: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self(captures.into_iter().collect())
    }

    /// Overlays a raw (still encoded) query string.
    ///
    /// Repeated keys are joined with `separator` in the order they appear.
    pub fn overlay_query(&mut self, query: &str, separator: &str) {
        let mut seen: HashSet<String> = HashSet::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if seen.contains(&*key) {
                if let Some(joined) = self.0.get_mut(&*key) {
                    joined.push_str(separator);
                    joined.push_str(&value);
                }
            } else {
                seen.insert(key.to_string());
                self.0.insert(key.into_owned(), value.into_owned());
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<Params> for HashMap<String, String> {
    fn from(params: Params) -> Self {
        params.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captures(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_query_adds_to_captures() {
        let mut params = Params::from_captures(captures(&[("foo", "fuz"), ("bar", "baz")]));
        params.overlay_query("aaa=bbb&ccc=ddd", DEFAULT_QUERY_SEPARATOR);

        assert_eq!(params.len(), 4);
        assert_eq!(params.get("foo"), Some("fuz"));
        assert_eq!(params.get("bar"), Some("baz"));
        assert_eq!(params.get("aaa"), Some("bbb"));
        assert_eq!(params.get("ccc"), Some("ddd"));
    }

    #[test]
    fn test_query_overwrites_capture() {
        let mut params = Params::from_captures(captures(&[("id", "from-path")]));
        params.overlay_query("id=from-query", DEFAULT_QUERY_SEPARATOR);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id"), Some("from-query"));
    }

    #[test]
    fn test_repeated_query_values_are_joined() {
        let mut params = Params::new();
        params.overlay_query("tag=a&x=1&tag=b&tag=c", DEFAULT_QUERY_SEPARATOR);
        assert_eq!(params.get("tag"), Some("a; b; c"));
        assert_eq!(params.get("x"), Some("1"));

        let mut custom = Params::new();
        custom.overlay_query("tag=a&tag=b", ",");
        assert_eq!(custom.get("tag"), Some("a,b"));
    }

    #[test]
    fn test_query_values_are_decoded() {
        let mut params = Params::new();
        params.overlay_query("s=stuff+to+search+for&q=caf%C3%A9&flag", DEFAULT_QUERY_SEPARATOR);
        assert_eq!(params.get("s"), Some("stuff to search for"));
        assert_eq!(params.get("q"), Some("café"));
        assert_eq!(params.get("flag"), Some(""));
    }

    #[test]
    fn test_last_duplicate_capture_wins() {
        let params = Params::from_captures(captures(&[("id", "one"), ("id", "two")]));
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("id"), Some("two"));
    }

    #[test]
    fn test_many_distinct_keys() {
        let query: String = (0..5000)
            .map(|i| format!("k{i}=v{i}&k{i}=w{i}"))
            .collect::<Vec<_>>()
            .join("&");

        let mut params = Params::from_captures(captures(&[("k0", "path")]));
        params.overlay_query(&query, DEFAULT_QUERY_SEPARATOR);

        assert_eq!(params.len(), 5000);
        assert_eq!(params.get("k0"), Some("v0; w0"));
        assert_eq!(params.get("k4999"), Some("v4999; w4999"));
        assert!(params.iter().all(|(k, v)| v == format!("v{}; w{}", &k[1..], &k[1..])));
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut params = Params::new();
        assert!(params.is_empty());
        assert_eq!(params.insert("a", "1"), None);
        assert_eq!(params.insert("a", "2"), Some("1".to_string()));
        assert!(params.contains_key("a"));
        assert!(!params.contains_key("b"));
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("a", "2")]);
    }

    #[test]
    fn test_empty_query_changes_nothing() {
        let mut params = Params::from_captures(captures(&[("a", "1")]));
        params.overlay_query("", DEFAULT_QUERY_SEPARATOR);
        assert_eq!(params.len(), 1);
    }
}
