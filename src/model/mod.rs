//! Request model
//!
//! The canonical in-memory description of an HTTP request as edited in the
//! API testing UI. A model is built either by [`crate::parser::parse_curl`]
//! or field by field from user edits, and is consumed by the serializers
//! and the code generator.
//!
//! # Enabled flags
//!
//! Query params, headers and form fields carry an `enabled` flag. Disabled
//! entries stay in their vectors (so the UI can switch them back on) and
//! are filtered out at every serialization boundary.

pub mod auth;
pub mod body;
pub mod request;

pub use auth::{ApiKeyLocation, Auth};
pub use body::{BinaryHandle, Body, BodyMode, FieldType, FormField};
pub use request::{Header, QueryParam, RequestModel, DEFAULT_TIMEOUT_MS};
