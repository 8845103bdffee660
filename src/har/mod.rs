//! HAR (HTTP Archive) support
//!
//! HAR is the intermediate form a cURL command is converted to before it
//! becomes a [`crate::model::RequestModel`].

pub mod parser;
pub mod types;

pub use parser::{har_from_request, parse_har, to_har_string};
pub use types::{
    Har, HarCookie, HarEntry, HarHeader, HarLog, HarPostData, HarPostParam, HarQueryParam,
    HarRequest,
};
