//! curlkit library interface
//!
//! Parses cURL commands into a structured [`model::RequestModel`],
//! serializes models back into cURL, multipart and URL-encoded payloads,
//! and generates client code in ~30 languages through a conversion engine.
//!
//! # Module Organization
//!
//! - [`model`] - Request model (query, headers, body, auth)
//! - [`parser`] - cURL -> model, auth detection
//! - [`serializer`] - model -> cURL / multipart / URL-encoded
//! - [`codegen`] - model -> client code, language table
//! - [`engine`] - Conversion engines (native, `curlconverter`)
//! - [`curl`] - cURL command tokenizer and flag parser
//! - [`har`] - HAR request types
//! - [`config`] - Config file
//! - [`errors`] - Error types (CurlkitError, EngineError, Result)

pub mod cli;
pub mod codegen;
pub mod config;
pub mod core;
pub mod curl;
pub mod engine;
pub mod errors;
pub mod har;
pub mod model;
pub mod parser;
pub mod serializer;
pub mod status;
pub mod table;

pub use codegen::CodeGenerator;
pub use engine::{AnyEngine, CommandEngine, ConversionEngine, NativeEngine, Target};
pub use errors::{CurlkitError, EngineError, Result};
pub use model::RequestModel;
pub use parser::{detect_auth, parse_curl};
pub use serializer::{to_curl, to_form_data, to_url_search_params};
