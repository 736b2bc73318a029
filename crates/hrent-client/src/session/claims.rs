//! Best-effort extraction of claims from a bearer token.
//!
//! The token is never verified here. The server re-validates it on every
//! call, so the values read from it are only fit for display and for
//! comparing against ids in server payloads (e.g. "is this my message?").

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use serde_json::{Map, Value};

const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_encode_padding(false)
    .with_decode_padding_mode(DecodePaddingMode::Indifferent);

/// URL-safe engine that accepts the claims segment with or without padding.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// Fallback for issuers that emit `+` and `/` in the claims segment.
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Decodes the claims segment (the middle of `header.claims.signature`).
///
/// Returns `None` when the token has fewer than two segments, the segment is
/// not base64 in either alphabet, or it does not hold a JSON object.
#[must_use]
pub fn decode_claims(token: &str) -> Option<Map<String, Value>> {
    let segment = token.split('.').nth(1)?;
    let bytes = URL_SAFE_LENIENT
        .decode(segment)
        .or_else(|_| STANDARD_LENIENT.decode(segment))
        .ok()?;
    match serde_json::from_slice(&bytes).ok()? {
        Value::Object(claims) => Some(claims),
        _ => None,
    }
}

/// Extracts the `id` claim of a token.
///
/// Only string ids are recognised.
#[must_use]
pub fn user_id_from_token(token: &str) -> Option<String> {
    decode_claims(token)?
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use proptest::prelude::*;

    fn token_with_claims(claims: &str) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(claims))
    }

    #[test]
    fn test_user_id_from_known_token() {
        assert_eq!(
            user_id_from_token("abc.eyJpZCI6IjQyIn0.xyz").as_deref(),
            Some("42")
        );
    }

    #[test]
    fn test_padded_segment() {
        // {"id":"7"} encodes to 14 chars, so padding is needed to reach 16
        let token = "h.eyJpZCI6IjcifQ==.s";
        assert_eq!(user_id_from_token(token).as_deref(), Some("7"));
    }

    #[test]
    fn test_url_safe_alphabet() {
        let token = token_with_claims(r#"{"id":"65f0c0ffee","note":"??>>"}"#);
        assert_eq!(user_id_from_token(&token).as_deref(), Some("65f0c0ffee"));
    }

    #[test]
    fn test_standard_alphabet_fallback() {
        // {"id":"7?>"} and {"id":">>>"} encode with '/' and '+'
        let slash = user_id_from_token("h.eyJpZCI6Ijc/PiJ9.s");
        let plus = user_id_from_token("h.eyJpZCI6Ij4+PiJ9.s");
        assert_eq!(slash.as_deref(), Some("7?>"));
        assert_eq!(plus.as_deref(), Some(">>>"));
    }

    #[test]
    fn test_two_segments_are_enough() {
        let token = format!("header.{}", URL_SAFE_NO_PAD.encode(r#"{"id":"1"}"#));
        assert_eq!(user_id_from_token(&token).as_deref(), Some("1"));
    }

    #[test]
    fn test_malformed_tokens() {
        assert!(user_id_from_token("").is_none());
        assert!(user_id_from_token("no-dots-here").is_none());
        assert!(user_id_from_token("a.!!!not base64!!!.c").is_none());
        assert!(user_id_from_token(&token_with_claims("not json")).is_none());
        assert!(user_id_from_token(&token_with_claims("[1,2,3]")).is_none());
    }

    #[test]
    fn test_missing_or_non_string_id() {
        assert!(user_id_from_token(&token_with_claims(r#"{"sub":"1"}"#)).is_none());
        assert!(user_id_from_token(&token_with_claims(r#"{"id":42}"#)).is_none());
    }

    #[test]
    fn test_decode_claims_keeps_other_fields() {
        let token = token_with_claims(r#"{"id":"9","iat":1700000000}"#);
        let claims = decode_claims(&token).unwrap();
        let issued_at = claims.get("iat").and_then(Value::as_i64);
        assert_eq!(issued_at, Some(1_700_000_000));
    }

    proptest! {
        #[test]
        fn prop_arbitrary_tokens_never_panic(token in ".*") {
            let _ = user_id_from_token(&token);
        }

        #[test]
        fn prop_string_ids_survive_encoding(id in "[a-zA-Z0-9]{1,24}") {
            let token = token_with_claims(&format!(r#"{{"id":"{id}"}}"#));
            prop_assert_eq!(user_id_from_token(&token), Some(id));
        }
    }
}
