//! Relying-party flow tests.
//!
//! These drive the helpers together the way ceremony code uses them: wire
//! field names are translated, the browser's unpadded challenge is decoded
//! and compared, the reported origin is checked against the configured one,
//! and the negotiated algorithm's parameters shape the signature input.

use passkey_rp_core::{
    CoseAlgorithm, CoseCurve, DecodingError, HashAlgorithm, InternalError, ValidationError,
    base64url_decode, base64url_encode, camel_to_snake, extract_origin, snake_to_camel,
};
use pretty_assertions::assert_eq;
use testresult::TestResult;

/// The challenge a relying party would have issued for this ceremony.
const CHALLENGE: [u8; 16] = [
    0x41, 0x8a, 0x03, 0xff, 0x2e, 0x5c, 0x00, 0x91, 0x7b, 0xd4, 0x66, 0x01, 0xfe, 0x13, 0xa9, 0x50,
];

/// Build a `clientDataJSON`-shaped document the way a browser would,
/// with the challenge in unpadded base64url.
fn build_client_data(origin: &str) -> Vec<u8> {
    let challenge = base64url_encode(&CHALLENGE);
    let challenge = challenge.trim_end_matches('=');

    serde_json::to_vec(&serde_json::json!({
        "type": "webauthn.get",
        "challenge": challenge,
        "origin": origin,
        "crossOrigin": false
    }))
    .unwrap()
}

#[test]
fn challenge_survives_the_wire() -> TestResult {
    let client_data = build_client_data("https://login.example.com:8443");
    let parsed: serde_json::Value = serde_json::from_slice(&client_data)?;

    let reported = parsed["challenge"].as_str().expect("challenge is a string");
    assert_eq!(base64url_decode(reported)?, CHALLENGE);

    Ok(())
}

#[test]
fn reported_origin_matches_configured_origin() -> TestResult {
    // The RP configuration holds a full URL; the ceremony compares origins.
    let configured = extract_origin("https://login.example.com:8443/auth/callback")?;

    let client_data = build_client_data("https://login.example.com:8443");
    let parsed: serde_json::Value = serde_json::from_slice(&client_data)?;

    assert_eq!(parsed["origin"].as_str(), Some(configured.as_str()));

    Ok(())
}

#[test]
fn wire_field_names_translate_to_internal_names() {
    // Acronym-free wire names convert both ways.
    for (internal, wire) in [
        ("rp_id", "rpId"),
        ("user_handle", "userHandle"),
        ("authenticator_data", "authenticatorData"),
        ("client_extension_results", "clientExtensionResults"),
    ] {
        assert_eq!(snake_to_camel(internal), wire);
        assert_eq!(camel_to_snake(wire), internal);
    }

    // The acronym-bearing name does not round-trip; ceremony code keys the
    // wire dictionary by the camel name directly.
    assert_eq!(camel_to_snake("clientDataJSON"), "client_data_j_s_o_n");
}

#[test]
fn negotiated_algorithm_fixes_hash_and_coordinate_sizes() -> TestResult {
    // pubKeyCredParams advertises -7; the credential carries a P-256 key.
    let algorithm = CoseAlgorithm::from_value(-7)?;
    let curve = CoseCurve::from_value(1)?;

    assert_eq!(algorithm, CoseAlgorithm::Es256);
    assert_eq!(algorithm.hash_algorithm(), HashAlgorithm::Sha256);
    assert_eq!(curve.coordinate_byte_length(), 32);

    // An uncompressed EC2 point splits into x and y at the coordinate length.
    let length = curve.coordinate_byte_length();
    let point = {
        let mut point = vec![0x04];
        point.extend(std::iter::repeat_n(0xaa, length));
        point.extend(std::iter::repeat_n(0xbb, length));
        point
    };
    let (x, y) = point[1..].split_at(length);
    assert_eq!(x.len(), length);
    assert_eq!(y.len(), length);

    // The signature input hash has the algorithm's fixed output size.
    let client_data = build_client_data("https://login.example.com:8443");
    let digest = algorithm.hash_algorithm().digest(&client_data);
    assert_eq!(digest.len(), algorithm.hash_algorithm().output_byte_length());

    Ok(())
}

#[test]
fn malformed_ceremony_inputs_are_rejected() {
    // Challenge tampered into non-alphabet bytes.
    assert!(matches!(
        base64url_decode("QYoD_y5cAJF71GYB_hOpUA!!"),
        Err(DecodingError::Base64(_))
    ));

    // An RP configured with a relative URL has no origin to compare.
    assert!(matches!(
        extract_origin("/auth/callback"),
        Err(ValidationError::Malformed(_))
    ));

    // An algorithm outside the closed set never resolves to a default.
    assert!(matches!(
        CoseAlgorithm::from_value(-8),
        Err(InternalError::UnrecognizedAlgorithm(_))
    ));
    assert!(matches!(
        CoseCurve::from_name("X25519"),
        Err(InternalError::UnrecognizedCurve(_))
    ));
}
