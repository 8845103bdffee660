//! The request descriptor and its ordered parameter lists

use serde::{Deserialize, Serialize};
use url::Url;

use super::auth::Auth;
use super::body::Body;

/// Timeout assigned to every model produced by the cURL parser
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// A single query string parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

/// A single request header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    #[serde(default)]
    pub value: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

pub(crate) fn enabled_by_default() -> bool {
    true
}

impl QueryParam {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into(), enabled: true }
    }

    /// Disabled copy of this parameter
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    fn is_active(&self) -> bool {
        self.enabled && !self.key.is_empty()
    }
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), value: value.into(), enabled: true }
    }

    /// Disabled copy of this header
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    fn is_active(&self) -> bool {
        self.enabled && !self.key.is_empty()
    }
}

/// Canonical HTTP request description
///
/// Entries in `query` and `headers` are identified by position; repeated
/// keys are legal and keep their order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestModel {
    /// HTTP verb, any case. Uppercased when serialized.
    pub method: String,

    /// Scheme, host and port, without a trailing path
    #[serde(rename = "baseURL")]
    pub base_url: String,

    /// Path portion only; the query string lives in `query`
    pub path: String,

    #[serde(default)]
    pub query: Vec<QueryParam>,

    #[serde(default)]
    pub headers: Vec<Header>,

    #[serde(default)]
    pub body: Body,

    /// Derived, informational auth descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<Auth>,

    /// Timeout in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl Default for RequestModel {
    fn default() -> Self {
        Self {
            method: "GET".to_string(),
            base_url: String::new(),
            path: "/".to_string(),
            query: Vec::new(),
            headers: Vec::new(),
            body: Body::None,
            auth: None,
            timeout: None,
        }
    }
}

impl RequestModel {
    /// Create a model for `method` and `base_url` + `path`
    pub fn new(method: impl Into<String>, base_url: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            base_url: base_url.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_query(mut self, param: QueryParam) -> Self {
        self.query.push(param);
        self
    }

    pub fn with_header(mut self, header: Header) -> Self {
        self.headers.push(header);
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout = Some(timeout_ms);
        self
    }

    /// Query params that take part in serialization, in order
    pub fn enabled_query(&self) -> impl Iterator<Item = &QueryParam> {
        self.query.iter().filter(|q| q.is_active())
    }

    /// Headers that take part in serialization, in order
    pub fn enabled_headers(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter().filter(|h| h.is_active())
    }

    /// First header named `name` (case-insensitive), enabled or not
    pub fn header(&self, name: &str) -> Option<&Header> {
        self.headers.iter().find(|h| h.key.eq_ignore_ascii_case(name))
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type").map(|h| h.value.as_str())
    }

    /// Uppercased method
    pub fn method_upper(&self) -> String {
        self.method.to_uppercase()
    }

    /// Parse `base_url` + `path` and append the enabled query params
    pub fn build_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, self.path))?;
        let mut params = self.enabled_query().peekable();
        if params.peek().is_some() {
            let mut pairs = url.query_pairs_mut();
            for param in params {
                pairs.append_pair(&param.key, &param.value);
            }
        }
        Ok(url)
    }

    /// URL text for serialization
    ///
    /// Falls back to plain concatenation when `base_url` + `path` is not an
    /// absolute URL, so a half-edited model still serializes.
    pub fn display_url(&self) -> String {
        match self.build_url() {
            Ok(url) => url.to_string(),
            Err(_) => {
                let mut out = format!("{}{}", self.base_url, self.path);
                let query: Vec<(&str, &str)> = self
                    .enabled_query()
                    .map(|q| (q.key.as_str(), q.value.as_str()))
                    .collect();
                if !query.is_empty() {
                    let encoded = serde_urlencoded::to_string(&query).unwrap_or_default();
                    out.push(if out.contains('?') { '&' } else { '?' });
                    out.push_str(&encoded);
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RequestModel {
        RequestModel::new("get", "https://api.example.com", "/v1/items")
            .with_query(QueryParam::new("a", "1"))
            .with_query(QueryParam::new("b", "2").disabled())
            .with_query(QueryParam::new("a", "3"))
            .with_header(Header::new("Accept", "application/json"))
            .with_header(Header::new("X-Off", "1").disabled())
            .with_header(Header::new("", "orphan"))
    }

    #[test]
    fn test_build_url_keeps_duplicates_and_skips_disabled() {
        let url = sample().build_url().unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/v1/items?a=1&a=3");
    }

    #[test]
    fn test_build_url_without_query_has_no_question_mark() {
        let model = RequestModel::new("GET", "https://api.example.com", "/v1/items");
        assert_eq!(model.build_url().unwrap().as_str(), "https://api.example.com/v1/items");
    }

    #[test]
    fn test_display_url_fallback() {
        let model = RequestModel::new("GET", "", "/relative")
            .with_query(QueryParam::new("q", "a b"));
        assert_eq!(model.display_url(), "/relative?q=a+b");
    }

    #[test]
    fn test_enabled_headers_filter() {
        let model = sample();
        let keys: Vec<&str> = model.enabled_headers().map(|h| h.key.as_str()).collect();
        assert_eq!(keys, vec!["Accept"]);
        // disabled entries are still present
        assert_eq!(model.headers.len(), 3);
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let model = RequestModel::default().with_header(Header::new("Content-Type", "text/plain"));
        assert_eq!(model.content_type(), Some("text/plain"));
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(sample().with_timeout(5000)).unwrap();
        assert_eq!(json["baseURL"], "https://api.example.com");
        assert_eq!(json["timeout"], 5000);
        assert_eq!(json["body"]["mode"], "none");
        assert!(json.get("auth").is_none());
    }
}
