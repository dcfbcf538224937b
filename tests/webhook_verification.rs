//! Integration tests for webhook signature verification through the public API.

use datatrans::domain::webhook::{WebhookError, WebhookVerifier, DEFAULT_MAX_AGE_SECS};
use hmac::{Hmac, Mac};
use proptest::prelude::*;
use sha2::Sha256;

const KEY: &str = "6168";
const TIMESTAMP: i64 = 1_700_000_000_000;
const PAYLOAD: &str = r#"{"transactionId":"1"}"#;

/// Computes the signature a legitimate sender would attach.
fn sign(hex_key: &str, timestamp: i64, payload: &str) -> String {
    let key = hex::decode(hex_key).expect("valid hex key");
    let mut mac = Hmac::<Sha256>::new_from_slice(&key).expect("HMAC accepts any key size");
    mac.update(format!("{}{}", timestamp, payload).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

fn signed_header(timestamp: i64, payload: &str) -> String {
    format!("t={},s0={}", timestamp, sign(KEY, timestamp, payload))
}

fn verifier() -> WebhookVerifier {
    WebhookVerifier::new(KEY).expect("valid key")
}

// ══════════════════════════════════════════════════════════════
// Header Parsing
// ══════════════════════════════════════════════════════════════

#[test]
fn accepts_canonical_header() {
    let header = signed_header(TIMESTAMP, PAYLOAD);
    assert!(verifier()
        .verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, TIMESTAMP)
        .is_ok());
}

#[test]
fn accepts_reversed_segment_order() {
    let header = format!("s0={},t={}", sign(KEY, TIMESTAMP, PAYLOAD), TIMESTAMP);
    assert!(verifier()
        .verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, TIMESTAMP)
        .is_ok());
}

#[test]
fn rejects_empty_header() {
    let result = verifier().verify_at("", PAYLOAD, DEFAULT_MAX_AGE_SECS, TIMESTAMP);
    assert!(matches!(result, Err(WebhookError::MalformedHeader(_))));
}

#[test]
fn rejects_single_segment() {
    let header = format!("t={}", TIMESTAMP);
    let result = verifier().verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, TIMESTAMP);
    assert!(matches!(result, Err(WebhookError::MalformedHeader(_))));
}

#[test]
fn rejects_three_segments() {
    let header = format!(
        "t={},s0={},extra=1",
        TIMESTAMP,
        sign(KEY, TIMESTAMP, PAYLOAD)
    );
    let result = verifier().verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, TIMESTAMP);
    assert!(matches!(result, Err(WebhookError::MalformedHeader(_))));
}

#[test]
fn rejects_missing_signature_segment() {
    let header = format!("t={},x0=deadbeef", TIMESTAMP);
    let result = verifier().verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, TIMESTAMP);
    assert!(matches!(result, Err(WebhookError::MissingField)));
}

#[test]
fn rejects_missing_timestamp_segment() {
    let header = format!("u={},s0={}", TIMESTAMP, sign(KEY, TIMESTAMP, PAYLOAD));
    let result = verifier().verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, TIMESTAMP);
    assert!(matches!(result, Err(WebhookError::MissingField)));
}

#[test]
fn rejects_unparsable_timestamp() {
    let header = format!("t=yesterday,s0={}", sign(KEY, TIMESTAMP, PAYLOAD));
    let result = verifier().verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, TIMESTAMP);
    assert!(matches!(result, Err(WebhookError::MalformedHeader(_))));
}

// ══════════════════════════════════════════════════════════════
// Replay Window
// ══════════════════════════════════════════════════════════════

#[test]
fn rejects_stale_delivery() {
    let header = signed_header(TIMESTAMP, PAYLOAD);
    let now = TIMESTAMP + (DEFAULT_MAX_AGE_SECS * 1000) + 1;
    let result = verifier().verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, now);
    assert!(matches!(result, Err(WebhookError::TimestampTooOld)));
}

#[test]
fn rejects_future_delivery() {
    let header = signed_header(TIMESTAMP, PAYLOAD);
    let now = TIMESTAMP - (DEFAULT_MAX_AGE_SECS * 1000) - 1;
    let result = verifier().verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, now);
    assert!(matches!(result, Err(WebhookError::TimestampTooOld)));
}

#[test]
fn custom_window_is_honored() {
    let header = signed_header(TIMESTAMP, PAYLOAD);
    // 10 seconds window: 11 seconds old fails, 9 seconds old passes.
    assert!(matches!(
        verifier().verify_at(&header, PAYLOAD, 10, TIMESTAMP + 11_000),
        Err(WebhookError::TimestampTooOld)
    ));
    assert!(verifier()
        .verify_at(&header, PAYLOAD, 10, TIMESTAMP + 9_000)
        .is_ok());
}

proptest! {
    #[test]
    fn window_acceptance_is_symmetric(offset_ms in -400_000i64..400_000) {
        let header = signed_header(TIMESTAMP, PAYLOAD);
        let now = TIMESTAMP + offset_ms;
        let result = verifier().verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, now);

        if offset_ms.abs() <= DEFAULT_MAX_AGE_SECS * 1000 {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(matches!(result, Err(WebhookError::TimestampTooOld)));
        }
    }
}

// ══════════════════════════════════════════════════════════════
// Signature Integrity
// ══════════════════════════════════════════════════════════════

#[test]
fn rejects_tampered_payload() {
    let header = signed_header(TIMESTAMP, PAYLOAD);
    let result = verifier().verify_at(
        &header,
        r#"{"transactionId":"1","amount":999999}"#,
        DEFAULT_MAX_AGE_SECS,
        TIMESTAMP,
    );
    assert!(matches!(result, Err(WebhookError::SignatureMismatch)));
}

#[test]
fn rejects_signature_from_other_key() {
    let header = format!("t={},s0={}", TIMESTAMP, sign("626f", TIMESTAMP, PAYLOAD));
    let result = verifier().verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, TIMESTAMP);
    assert!(matches!(result, Err(WebhookError::SignatureMismatch)));
}

#[test]
fn rejects_uppercase_signature() {
    let sig = sign(KEY, TIMESTAMP, PAYLOAD).to_uppercase();
    let header = format!("t={},s0={}", TIMESTAMP, sig);
    let result = verifier().verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, TIMESTAMP);
    assert!(matches!(result, Err(WebhookError::SignatureMismatch)));
}

proptest! {
    /// Flipping any single hex character of a valid signature must fail
    /// verification.
    #[test]
    fn any_single_character_corruption_fails(position in 0usize..64, nibble in 0u8..16) {
        let valid = sign(KEY, TIMESTAMP, PAYLOAD);
        let mut chars: Vec<char> = valid.chars().collect();
        let replacement = char::from_digit(u32::from(nibble), 16).unwrap();
        prop_assume!(chars[position] != replacement);
        chars[position] = replacement;
        let corrupted: String = chars.into_iter().collect();

        let header = format!("t={},s0={}", TIMESTAMP, corrupted);
        let result = verifier().verify_at(&header, PAYLOAD, DEFAULT_MAX_AGE_SECS, TIMESTAMP);

        prop_assert!(matches!(result, Err(WebhookError::SignatureMismatch)));
    }

    /// Any payload signs and verifies against itself.
    #[test]
    fn arbitrary_payloads_round_trip(payload in "\\PC{0,200}") {
        let header = signed_header(TIMESTAMP, &payload);
        let result = verifier().verify_at(&header, &payload, DEFAULT_MAX_AGE_SECS, TIMESTAMP);
        prop_assert!(result.is_ok());
    }
}

// ══════════════════════════════════════════════════════════════
// Error Mapping
// ══════════════════════════════════════════════════════════════

#[test]
fn rejections_map_to_401() {
    use http::StatusCode;
    assert_eq!(
        WebhookError::SignatureMismatch.status_code(),
        StatusCode::UNAUTHORIZED
    );
    assert_eq!(
        WebhookError::TimestampTooOld.status_code(),
        StatusCode::UNAUTHORIZED
    );
}

#[test]
fn malformed_input_maps_to_400() {
    use http::StatusCode;
    assert_eq!(
        WebhookError::MalformedHeader("x").status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        WebhookError::MissingField.status_code(),
        StatusCode::BAD_REQUEST
    );
}
