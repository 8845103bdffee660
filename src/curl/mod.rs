//! cURL command handling for the native engine
//!
//! - [`lexer`] splits the command line into shell words
//! - [`command`] interprets curl flags into a [`ParsedCurl`]
//! - [`to_har`] turns a [`ParsedCurl`] into a HAR request

pub mod command;
pub mod lexer;
pub mod to_har;

pub use command::{parse_curl_command, DataArg, FormArg, ParsedCurl};
pub use lexer::tokenize;
pub use to_har::to_har_request;
