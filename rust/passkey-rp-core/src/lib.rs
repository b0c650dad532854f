#![warn(missing_docs)]

//! Deterministic helpers for WebAuthn relying parties.
//!
//! This crate supplies the primitive transformations a relying-party
//! implementation leans on when moving data between the browser wire format
//! and its own types:
//!
//! - [`case`]: snake_case/camelCase identifier conversion for wire field names
//! - [`encoding`]: URL-safe base64 without mandatory padding, the form in
//!   which challenges and credential IDs travel
//! - [`origin`]: strict `scheme://host[:port]` extraction for origin checks
//! - [`cose`]: closed COSE curve and algorithm identifier types with their
//!   fixed coordinate-length and hash-algorithm contracts
//!
//! Everything here is pure and synchronous. The ceremony state machine, COSE
//! key parsing, and attestation verification live elsewhere and call into
//! these helpers.

pub mod case;
pub mod constants;
pub mod cose;
pub mod encoding;
pub mod error;
pub mod origin;

pub use case::*;
pub use constants::*;
pub use cose::*;
pub use encoding::*;
pub use error::*;
pub use origin::*;
