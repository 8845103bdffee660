//! HAR (HTTP Archive) data structures
//!
//! Based on the HAR 1.2 specification: http://www.softwareishard.com/blog/har-12-spec/
//!
//! Only the request side is modeled in full. Archives produced from a cURL
//! command carry entries without a response, so every field outside
//! `request` is optional.

use serde::{Deserialize, Serialize};

/// Root HAR structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Har {
    pub log: HarLog,
}

/// HAR log containing all entries
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarLog {
    /// HAR format version (e.g., "1.2")
    #[serde(default)]
    pub version: String,

    /// Creator application info
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<HarCreator>,

    /// List of HTTP request entries
    #[serde(default)]
    pub entries: Vec<HarEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Creator application info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarCreator {
    pub name: String,
    pub version: String,
}

/// A single HTTP request/response entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarEntry {
    /// Request start time (ISO 8601)
    #[serde(rename = "startedDateTime", default, skip_serializing_if = "Option::is_none")]
    pub started_date_time: Option<String>,

    /// Request details
    pub request: HarRequest,

    /// Response details, kept opaque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// HTTP request details
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarRequest {
    /// HTTP method (GET, POST, etc.)
    #[serde(default)]
    pub method: String,

    /// Full URL
    pub url: String,

    /// HTTP version (e.g., "HTTP/1.1")
    #[serde(rename = "httpVersion", default)]
    pub http_version: String,

    /// Request cookies
    #[serde(default)]
    pub cookies: Vec<HarCookie>,

    /// Request headers
    #[serde(default)]
    pub headers: Vec<HarHeader>,

    /// Query string parameters
    #[serde(rename = "queryString", default)]
    pub query_string: Vec<HarQueryParam>,

    /// POST data
    #[serde(rename = "postData", default, skip_serializing_if = "Option::is_none")]
    pub post_data: Option<HarPostData>,

    /// Headers size in bytes (-1 if unknown)
    #[serde(rename = "headersSize", default = "unknown_size")]
    pub headers_size: i64,

    /// Body size in bytes (-1 if unknown)
    #[serde(rename = "bodySize", default = "unknown_size")]
    pub body_size: i64,
}

fn unknown_size() -> i64 {
    -1
}

/// HTTP header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarHeader {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarCookie {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Query parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarQueryParam {
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// POST data
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HarPostData {
    /// MIME type
    #[serde(rename = "mimeType", default)]
    pub mime_type: String,

    /// Posted text (for non-multipart)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Posted parameters (for form data)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Vec<HarPostParam>>,
}

/// POST parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarPostParam {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(rename = "contentType", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl HarEntry {
    /// Entry holding only a request, as produced from a cURL command
    pub fn from_request(request: HarRequest) -> Self {
        Self { started_date_time: None, request, response: None, comment: None }
    }
}

impl HarRequest {
    /// Get header value by name (case-insensitive)
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// `Cookie` header value built from the cookie list, if any
    pub fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(|c| format!("{}={}", c.name, c.value))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

impl HarPostParam {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: Some(value.into()), file_name: None, content_type: None }
    }

    pub fn file(name: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self { name: name.into(), value: None, file_name: Some(file_name.into()), content_type: None }
    }
}
