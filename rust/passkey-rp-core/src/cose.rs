//! COSE curve and signature algorithm identifiers with their fixed
//! parameter contracts.
//!
//! The identifiers form closed enumerations. Each variant carries its
//! symbolic name and its registered value from the IANA COSE registries,
//! and the parameter lookups match on the variant itself, so an
//! unrecognized identifier can only be rejected at the name/value boundary
//! and never reaches a table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use sha2::digest::DynDigest;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::constants::{
    EC2_P_256_COORDINATE_LENGTH, EC2_P_384_COORDINATE_LENGTH, EC2_P_521_COORDINATE_LENGTH,
    OKP_ED448_COORDINATE_LENGTH, OKP_ED25519_COORDINATE_LENGTH,
};
use crate::error::InternalError;

/// COSE elliptic curve identifiers supported for WebAuthn credentials.
///
/// Covers the EC2 curves P-256, P-384, and P-521 plus the OKP curves
/// Ed25519 and Ed448.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoseCurve {
    /// NIST P-256 (COSE value 1).
    P256,
    /// NIST P-384 (COSE value 2).
    P384,
    /// NIST P-521 (COSE value 3).
    P521,
    /// Ed25519 (COSE value 6).
    Ed25519,
    /// Ed448 (COSE value 7).
    Ed448,
}

impl CoseCurve {
    /// The symbolic name of the curve.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            CoseCurve::P256 => "P_256",
            CoseCurve::P384 => "P_384",
            CoseCurve::P521 => "P_521",
            CoseCurve::Ed25519 => "ED25519",
            CoseCurve::Ed448 => "ED448",
        }
    }

    /// The registered value from the IANA COSE elliptic curves registry.
    #[must_use]
    pub const fn value(&self) -> i64 {
        match self {
            CoseCurve::P256 => 1,
            CoseCurve::P384 => 2,
            CoseCurve::P521 => 3,
            CoseCurve::Ed25519 => 6,
            CoseCurve::Ed448 => 7,
        }
    }

    /// Resolve a curve from its symbolic name.
    ///
    /// # Errors
    ///
    /// Returns [`InternalError::UnrecognizedCurve`] for any name outside the
    /// closed set. Upstream validation is expected to have rejected such an
    /// identifier already.
    pub fn from_name(name: &str) -> Result<Self, InternalError> {
        match name {
            "P_256" => Ok(CoseCurve::P256),
            "P_384" => Ok(CoseCurve::P384),
            "P_521" => Ok(CoseCurve::P521),
            "ED25519" => Ok(CoseCurve::Ed25519),
            "ED448" => Ok(CoseCurve::Ed448),
            other => Err(InternalError::UnrecognizedCurve(other.to_string())),
        }
    }

    /// Resolve a curve from its registered numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`InternalError::UnrecognizedCurve`] for any value outside
    /// the closed set.
    pub fn from_value(value: i64) -> Result<Self, InternalError> {
        match value {
            1 => Ok(CoseCurve::P256),
            2 => Ok(CoseCurve::P384),
            3 => Ok(CoseCurve::P521),
            6 => Ok(CoseCurve::Ed25519),
            7 => Ok(CoseCurve::Ed448),
            other => Err(InternalError::UnrecognizedCurve(other.to_string())),
        }
    }

    /// The byte length of one point coordinate for this curve.
    #[must_use]
    pub const fn coordinate_byte_length(&self) -> usize {
        match self {
            CoseCurve::P256 => EC2_P_256_COORDINATE_LENGTH,
            CoseCurve::P384 => EC2_P_384_COORDINATE_LENGTH,
            CoseCurve::P521 => EC2_P_521_COORDINATE_LENGTH,
            CoseCurve::Ed25519 => OKP_ED25519_COORDINATE_LENGTH,
            CoseCurve::Ed448 => OKP_ED448_COORDINATE_LENGTH,
        }
    }
}

impl fmt::Display for CoseCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoseCurve {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Serialize for CoseCurve {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.value())
    }
}

impl<'de> Deserialize<'de> for CoseCurve {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_i64(CurveValueVisitor)
    }
}

struct CurveValueVisitor;

impl serde::de::Visitor<'_> for CurveValueVisitor {
    type Value = CoseCurve;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a registered COSE elliptic curve value")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        CoseCurve::from_value(v).map_err(E::custom)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let value = i64::try_from(v).map_err(E::custom)?;
        CoseCurve::from_value(value).map_err(E::custom)
    }
}

/// COSE ECDSA signature algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoseAlgorithm {
    /// ECDSA with SHA-256 (COSE value -7).
    Es256,
    /// ECDSA with SHA-384 (COSE value -35).
    Es384,
    /// ECDSA with SHA-512 (COSE value -36).
    Es512,
}

impl CoseAlgorithm {
    /// The symbolic name of the algorithm.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            CoseAlgorithm::Es256 => "ES256",
            CoseAlgorithm::Es384 => "ES384",
            CoseAlgorithm::Es512 => "ES512",
        }
    }

    /// The registered value from the IANA COSE algorithms registry.
    #[must_use]
    pub const fn value(&self) -> i64 {
        match self {
            CoseAlgorithm::Es256 => -7,
            CoseAlgorithm::Es384 => -35,
            CoseAlgorithm::Es512 => -36,
        }
    }

    /// Resolve an algorithm from its symbolic name.
    ///
    /// # Errors
    ///
    /// Returns [`InternalError::UnrecognizedAlgorithm`] for any name outside
    /// the closed set.
    pub fn from_name(name: &str) -> Result<Self, InternalError> {
        match name {
            "ES256" => Ok(CoseAlgorithm::Es256),
            "ES384" => Ok(CoseAlgorithm::Es384),
            "ES512" => Ok(CoseAlgorithm::Es512),
            other => Err(InternalError::UnrecognizedAlgorithm(other.to_string())),
        }
    }

    /// Resolve an algorithm from its registered numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`InternalError::UnrecognizedAlgorithm`] for any value
    /// outside the closed set.
    pub fn from_value(value: i64) -> Result<Self, InternalError> {
        match value {
            -7 => Ok(CoseAlgorithm::Es256),
            -35 => Ok(CoseAlgorithm::Es384),
            -36 => Ok(CoseAlgorithm::Es512),
            other => Err(InternalError::UnrecognizedAlgorithm(other.to_string())),
        }
    }

    /// The hash algorithm this signature algorithm is defined over.
    #[must_use]
    pub const fn hash_algorithm(&self) -> HashAlgorithm {
        match self {
            CoseAlgorithm::Es256 => HashAlgorithm::Sha256,
            CoseAlgorithm::Es384 => HashAlgorithm::Sha384,
            CoseAlgorithm::Es512 => HashAlgorithm::Sha512,
        }
    }
}

impl fmt::Display for CoseAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CoseAlgorithm {
    type Err = InternalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Serialize for CoseAlgorithm {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_i64(self.value())
    }
}

impl<'de> Deserialize<'de> for CoseAlgorithm {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_i64(AlgorithmValueVisitor)
    }
}

struct AlgorithmValueVisitor;

impl serde::de::Visitor<'_> for AlgorithmValueVisitor {
    type Value = CoseAlgorithm;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a registered COSE algorithm value")
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        CoseAlgorithm::from_value(v).map_err(E::custom)
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        let value = i64::try_from(v).map_err(E::custom)?;
        CoseAlgorithm::from_value(value).map_err(E::custom)
    }
}

/// Hash algorithm selector.
///
/// Selecting an algorithm does not create a hash context. [`hasher`] and
/// [`digest`] construct a fresh one on every call, so no state is ever
/// shared between verifications.
///
/// [`hasher`]: HashAlgorithm::hasher
/// [`digest`]: HashAlgorithm::digest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
}

impl HashAlgorithm {
    /// Construct a fresh incremental hasher.
    #[must_use]
    pub fn hasher(&self) -> Box<dyn DynDigest> {
        match self {
            HashAlgorithm::Sha256 => Box::new(Sha256::new()),
            HashAlgorithm::Sha384 => Box::new(Sha384::new()),
            HashAlgorithm::Sha512 => Box::new(Sha512::new()),
        }
    }

    /// Hash `data` with a fresh context and return the digest.
    #[must_use]
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    /// The digest output length in bytes.
    #[must_use]
    pub const fn output_byte_length(&self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }
}
