//! URL-safe base64 as WebAuthn material travels on the wire.
//!
//! Challenges and credential IDs cross the protocol boundary as base64url
//! text. Browsers emit unpadded values while other producers pad, so
//! decoding accepts both forms.

use base64::Engine;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};

use crate::error::DecodingError;

/// Encode bytes as URL-safe base64, `=` padding retained.
#[must_use]
pub fn base64url_encode(data: &[u8]) -> String {
    URL_SAFE.encode(data)
}

/// Decode URL-safe base64, tolerating absent or partial `=` padding.
///
/// Unpadded, partially padded, and fully padded forms of the same data all
/// decode to the same bytes.
///
/// # Errors
///
/// Returns [`DecodingError`] when the input contains bytes outside the
/// URL-safe alphabet or its length cannot correspond to any byte sequence.
pub fn base64url_decode(s: &str) -> Result<Vec<u8>, DecodingError> {
    Ok(URL_SAFE_NO_PAD.decode(s.trim_end_matches('='))?)
}
