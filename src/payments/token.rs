//! Signed payment-order claims.
//!
//! The payment provider authenticates requests with a short-lived HS256 JWT
//! carrying the full order payload; the provider's secret key signs it and
//! the access key travels inside the claims.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL};
use hmac::{Hmac, Mac};
use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Serialize;
use sha2::Sha256;
use thiserror::Error;
use zeroize::Zeroize;

/// Seconds a signed claims token stays valid.
pub const CLAIMS_TTL_SECONDS: i64 = 600;

type HmacSha256 = Hmac<Sha256>;

/// Payment provider secret key material. Never printed, zeroed on drop.
#[derive(Clone)]
pub struct PaymentSecretKey {
    bytes: Vec<u8>,
}

impl PaymentSecretKey {
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            bytes: secret.into().into_bytes(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Debug for PaymentSecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PaymentSecretKey(**redacted**)")
    }
}

impl Drop for PaymentSecretKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// The claims body of a payment order, expiring
/// [`CLAIMS_TTL_SECONDS`] after issuance.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentClaims {
    pub access_key: String,
    pub merchant_reference: String,
    pub grand_total: Decimal,
    pub currency: String,
    pub locale: String,
    pub return_url: String,
    pub notification_url: String,
    pub customer: CustomerClaims,
    pub payment: PaymentMethodClaims,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerClaims {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PaymentMethodClaims {
    pub method: &'static str,
    pub amount: Decimal,
    pub currency: String,
}

#[derive(Debug, Error)]
pub enum PaymentTokenError {
    /// Claims could not be encoded to JSON.
    #[error("claims serialization failed")]
    Serialize(#[from] serde_json::Error),

    /// The secret key was rejected by the HMAC implementation.
    #[error("invalid signing key")]
    InvalidKey,
}

/// Current issuance window: `(iat, exp)`.
#[must_use]
pub(crate) fn issuance_window(now: Timestamp) -> (i64, i64) {
    let iat = now.as_second();

    (iat, iat + CLAIMS_TTL_SECONDS)
}

/// Sign `claims` into a compact HS256 JWT.
pub(crate) fn sign_claims(
    key: &PaymentSecretKey,
    claims: &PaymentClaims,
) -> Result<String, PaymentTokenError> {
    let header = BASE64URL.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = BASE64URL.encode(serde_json::to_vec(claims)?);
    let signing_input = format!("{header}.{payload}");

    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|_| PaymentTokenError::InvalidKey)?;
    mac.update(signing_input.as_bytes());

    let signature = BASE64URL.encode(mac.finalize().into_bytes());

    Ok(format!("{signing_input}.{signature}"))
}

/// Split a full customer name into first and last on the first space; a
/// single-word name has an empty last name.
#[must_use]
pub(crate) fn split_customer_name(name: &str) -> (String, String) {
    let name = name.trim();

    match name.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.trim().to_string()),
        None => (name.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> PaymentClaims {
        let (iat, exp) = issuance_window(Timestamp::UNIX_EPOCH);

        PaymentClaims {
            access_key: "access-key".to_string(),
            merchant_reference: "order-1".to_string(),
            grand_total: Decimal::new(4500, 2),
            currency: "EUR".to_string(),
            locale: "lt".to_string(),
            return_url: "https://shop.example/order-success".to_string(),
            notification_url: "https://shop.example/api/webhook".to_string(),
            customer: CustomerClaims {
                email: "ona@example.com".to_string(),
                first_name: "Ona".to_string(),
                last_name: "Jonaitytė".to_string(),
                phone: "+37060000000".to_string(),
            },
            payment: PaymentMethodClaims {
                method: "paymentInitiation",
                amount: Decimal::new(4500, 2),
                currency: "EUR".to_string(),
            },
            iat,
            exp,
        }
    }

    #[test]
    fn token_has_three_base64url_segments() {
        let key = PaymentSecretKey::new("secret");
        let token = sign_claims(&key, &claims()).expect("signing should succeed");

        let segments: Vec<&str> = token.split('.').collect();

        assert_eq!(segments.len(), 3);
        assert!(
            segments.iter().all(|s| !s.contains(['+', '/', '='])),
            "segments must be unpadded base64url"
        );
    }

    #[test]
    fn signing_is_deterministic_per_key() {
        let key = PaymentSecretKey::new("secret");
        let other = PaymentSecretKey::new("other-secret");
        let claims = claims();

        let token_a = sign_claims(&key, &claims).expect("sign a");
        let token_b = sign_claims(&key, &claims).expect("sign b");
        let token_c = sign_claims(&other, &claims).expect("sign c");

        assert_eq!(token_a, token_b);
        assert_ne!(token_a, token_c, "different keys produce different signatures");
    }

    #[test]
    fn payload_carries_camel_case_claims() {
        let key = PaymentSecretKey::new("secret");
        let token = sign_claims(&key, &claims()).expect("signing should succeed");

        let payload_segment = token.split('.').nth(1).expect("payload segment");
        let payload = BASE64URL.decode(payload_segment).expect("decode payload");
        let value: serde_json::Value = serde_json::from_slice(&payload).expect("parse payload");

        assert_eq!(value["accessKey"], "access-key");
        assert_eq!(value["merchantReference"], "order-1");
        assert_eq!(value["payment"]["method"], "paymentInitiation");
        assert_eq!(value["customer"]["firstName"], "Ona");
    }

    #[test]
    fn issuance_window_spans_ten_minutes() {
        let (iat, exp) = issuance_window(Timestamp::UNIX_EPOCH);

        assert_eq!(iat, 0);
        assert_eq!(exp - iat, 600);
    }

    #[test]
    fn split_name_on_first_space() {
        assert_eq!(
            split_customer_name("Ona Marija Jonaitytė"),
            ("Ona".to_string(), "Marija Jonaitytė".to_string())
        );
        assert_eq!(
            split_customer_name("Cher"),
            ("Cher".to_string(), String::new())
        );
    }

    #[test]
    fn secret_key_debug_is_redacted() {
        let key = PaymentSecretKey::new("super-secret");

        assert_eq!(format!("{key:?}"), "PaymentSecretKey(**redacted**)");
    }
}
