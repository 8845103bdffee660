//! Language-neutral view of a request for the native generators

use crate::curl::{to_har_request, ParsedCurl};
use crate::errors::EngineError;
use crate::har::HarPostParam;

/// Request body as the generators see it
#[derive(Debug, Clone, PartialEq)]
pub enum SnippetBody {
    None,
    Text(String),
    Multipart(Vec<HarPostParam>),
}

/// Everything a generator needs to write a client call
#[derive(Debug, Clone)]
pub struct SnippetRequest {
    pub method: String,
    pub url: String,
    /// Headers in order, with a `Cookie` header first when cookies were given
    pub headers: Vec<(String, String)>,
    pub body: SnippetBody,
    /// Seconds
    pub timeout: Option<f64>,
    pub insecure: bool,
    pub follow_redirects: bool,
}

impl SnippetRequest {
    pub fn from_parsed(parsed: &ParsedCurl) -> Result<Self, EngineError> {
        let har = to_har_request(parsed)?;

        let mut headers = Vec::with_capacity(har.headers.len() + 1);
        if let Some(cookie) = har.cookie_header() {
            headers.push(("Cookie".to_string(), cookie));
        }
        headers.extend(har.headers.iter().map(|h| (h.name.clone(), h.value.clone())));

        let body = match har.post_data {
            Some(post) if post.mime_type.contains("multipart/form-data") => {
                SnippetBody::Multipart(post.params.unwrap_or_default())
            }
            Some(post) => SnippetBody::Text(post.text.unwrap_or_default()),
            None => SnippetBody::None,
        };

        Ok(Self {
            method: har.method,
            url: har.url,
            headers,
            body,
            timeout: parsed.timeout,
            insecure: parsed.insecure,
            follow_redirects: parsed.follow_redirects,
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Headers except `Content-Type`, for clients that set it from the body
    pub fn headers_without_content_type(&self) -> impl Iterator<Item = &(String, String)> {
        self.headers.iter().filter(|(n, _)| !n.eq_ignore_ascii_case("content-type"))
    }

    pub fn body_text(&self) -> Option<&str> {
        match self.body {
            SnippetBody::Text(ref text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn is_json(&self) -> bool {
        self.header("content-type")
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false)
    }
}
