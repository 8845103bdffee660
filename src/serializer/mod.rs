//! Serialization of a [`crate::model::RequestModel`] into transmittable forms
//!
//! Disabled or unkeyed entries never leave the model through any of these.

mod curl;
mod form;

pub use curl::{shell_quote, to_curl};
pub use form::{to_form_data, to_url_search_params, FormPart, MultipartForm, PartValue, SearchParams};
