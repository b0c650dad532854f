//! Fixed byte lengths for COSE elliptic-curve point encodings.
//!
//! These are the field-element encoding sizes of each supported curve.
//! Signature verification depends on them exactly; the parameter tables in
//! [`crate::cose`] reference them by name.

/// Coordinate byte length for EC2 P-256 (secp256r1).
pub const EC2_P_256_COORDINATE_LENGTH: usize = 32;

/// Coordinate byte length for EC2 P-384 (secp384r1).
pub const EC2_P_384_COORDINATE_LENGTH: usize = 48;

/// Coordinate byte length for EC2 P-521 (secp521r1); 521 bits round up to
/// 66 bytes.
pub const EC2_P_521_COORDINATE_LENGTH: usize = 66;

/// Point byte length for OKP Ed25519.
pub const OKP_ED25519_COORDINATE_LENGTH: usize = 32;

/// Point byte length for OKP Ed448.
pub const OKP_ED448_COORDINATE_LENGTH: usize = 57;
