//! Query-string assembly for REST requests.
//!
//! Parameters whose value is absent or an empty string are dropped.
//! Zero and `false` are real values and are always encoded.

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Text value.
    Text(String),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value, kept apart so large ids never wrap.
    UInt(u64),
    /// Boolean value, encoded as `true`/`false`.
    Bool(bool),
}

impl QueryValue {
    /// Returns the encoded form, or `None` if the value should be omitted.
    fn encode(&self) -> Option<String> {
        match self {
            Self::Text(s) if s.is_empty() => None,
            Self::Text(s) => Some(s.clone()),
            Self::Int(n) => Some(n.to_string()),
            Self::UInt(n) => Some(n.to_string()),
            Self::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for QueryValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered list of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, QueryValue)>,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn param(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }

    /// Adds a parameter only if `value` is present.
    #[must_use]
    pub fn opt<V: Into<QueryValue>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Returns the parameters that will actually be sent, in insertion order.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, String)> {
        self.params
            .iter()
            .filter_map(|(k, v)| v.encode().map(|encoded| (k.as_str(), encoded)))
            .collect()
    }

    /// Returns `true` if no parameter would be sent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs().is_empty()
    }

    /// Renders the form-encoded query string (without a leading `?`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in self.pairs() {
            serializer.append_pair(key, &value);
        }
        serializer.finish()
    }
}

/// Percent-encodes a value for use as a single path segment.
///
/// Plugin identifiers such as `akismet/akismet.php` contain `/` and must not
/// be split into several segments.
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_are_omitted_and_zero_is_kept() {
        let query = Query::new()
            .param("per_page", 20_u32)
            .param("page", 1_u32)
            .opt("status", None::<&str>)
            .param("parent", 0_u64);

        assert_eq!(query.to_query_string(), "per_page=20&page=1&parent=0");
    }

    #[test]
    fn large_unsigned_ids_do_not_wrap() {
        let query = Query::new().param("author", u64::MAX).param("offset", -1_i64);
        assert_eq!(
            query.to_query_string(),
            "author=18446744073709551615&offset=-1"
        );
    }

    #[test]
    fn empty_strings_are_omitted() {
        let query = Query::new().param("search", "").param("per_page", 10_u32);
        assert_eq!(query.to_query_string(), "per_page=10");
    }

    #[test]
    fn false_is_encoded_literally() {
        let query = Query::new().param("hide_empty", false);
        assert_eq!(query.to_query_string(), "hide_empty=false");
    }

    #[test]
    fn values_are_form_encoded() {
        let query = Query::new().param("search", "hello world&more");
        assert_eq!(query.to_query_string(), "search=hello+world%26more");
    }

    #[test]
    fn empty_query() {
        assert!(Query::new().is_empty());
        assert!(Query::new().opt("status", None::<String>).is_empty());
        assert_eq!(Query::new().to_query_string(), "");
    }

    #[test]
    fn segment_encoding_escapes_slash() {
        assert_eq!(encode_segment("akismet/akismet.php"), "akismet%2Fakismet.php");
        assert_eq!(encode_segment("text-2"), "text-2");
    }
}
