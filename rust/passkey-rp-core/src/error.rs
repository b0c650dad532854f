//! Error types shared across the crate.

use thiserror::Error;

/// Errors from structural validation of a caller-supplied URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The string could not be parsed as an absolute URL. Relative
    /// references land here, since they carry no scheme.
    #[error("malformed URL: {0}")]
    Malformed(#[from] url::ParseError),

    /// The URL has no `host[:port]` authority.
    #[error("origin must contain hostname[:port]")]
    MissingAuthority,
}

/// Errors from decoding base64url input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// The input is not valid URL-safe base64.
    #[error("invalid base64url data: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Contract violations: an identifier outside a closed enumeration was
/// presented at a parameter lookup boundary.
///
/// This indicates a bug in upstream validation rather than bad external
/// input. The lookup still fails cleanly instead of returning a guessed
/// parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InternalError {
    /// The identifier is not one of the recognized COSE curves.
    #[error("unrecognized curve identifier: {0}")]
    UnrecognizedCurve(String),

    /// The identifier is not one of the recognized COSE signature
    /// algorithms.
    #[error("unrecognized signature algorithm identifier: {0}")]
    UnrecognizedAlgorithm(String),
}
