use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use std::collections::BTreeMap;

// Everything except the unreserved set is escaped in query components.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Multi-valued query parameters of a request.
///
/// Keys are kept sorted; repeated values keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    params: BTreeMap<String, Vec<String>>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a raw query string (without the leading `?`).
    ///
    /// Empty pairs are skipped and a pair without `=` gets an empty value.
    pub fn parse(raw: &str) -> Self {
        let mut query = Self::new();
        for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            query.append(unescape(key), unescape(value));
        }
        query
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.entry(key.into()).or_default().push(value.into());
    }

    pub fn get_all(&self, key: &str) -> &[String] {
        self.params.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_value(&self, key: &str, value: &str) -> bool {
        self.get_all(key).iter().any(|v| v == value)
    }

    /// Remove every `key=value` entry, dropping the key once it has no values
    pub fn remove_value(&mut self, key: &str, value: &str) {
        if let Some(values) = self.params.get_mut(key) {
            values.retain(|v| v != value);
            if values.is_empty() {
                self.params.remove(key);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |v| (key.as_str(), v.as_str())))
    }

    /// Form-encode as `k=v&k=v`, keys sorted.
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{}={}", escape(key), escape(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryState
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.append(key, value);
        }
        query
    }
}

/// Path and query of an incoming page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTarget {
    pub path: String,
    pub query: QueryState,
}

impl RequestTarget {
    /// Split `/path?query#fragment`. The fragment never reaches the server
    /// and is discarded.
    pub fn parse(raw: &str) -> Self {
        let without_fragment = raw.split_once('#').map_or(raw, |(head, _)| head);
        let (path, query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));

        Self {
            path: if path.is_empty() {
                "/".to_string()
            } else {
                path.to_string()
            },
            query: QueryState::parse(query),
        }
    }
}

fn escape(component: &str) -> String {
    component
        .split(' ')
        .map(|part| utf8_percent_encode(part, QUERY_COMPONENT).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

fn unescape(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
