//! Auth detection from request headers

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::model::{Auth, Header};

/// Standard alphabet, `=` padding optional
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Recover an [`Auth`] descriptor from the first `Authorization` header
///
/// Only `Bearer ` and `Basic ` schemes (case-sensitive prefixes) are
/// recognised. Basic credentials are read one byte per char (Latin-1);
/// undecodable base64 yields `None`.
pub fn detect_auth(headers: &[Header]) -> Option<Auth> {
    let value = &headers
        .iter()
        .find(|h| h.key.eq_ignore_ascii_case("authorization"))?
        .value;

    if let Some(token) = value.strip_prefix("Bearer ") {
        return Some(Auth::bearer(token));
    }

    if let Some(encoded) = value.strip_prefix("Basic ") {
        let decoded = LENIENT.decode(encoded.trim()).ok()?;
        let credentials: String = decoded.into_iter().map(char::from).collect();
        return Some(match credentials.split_once(':') {
            Some((username, password)) => Auth::basic(username, Some(password.to_string())),
            None => Auth::basic(credentials, None),
        });
    }

    None
}
