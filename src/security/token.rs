use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine as _,
};
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Process-wide signing key for bearer tokens. Compiled-in by design; this
/// is a reference-grade service, not a production-hardened one.
const TOKEN_SECRET: &[u8] = b"easyapp-static-token-secret";

/// Lifetime of an issued token, in seconds.
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// URL-safe alphabet, no padding on encode, forgiving about padding on
/// decode so clients that re-pad tokens still verify.
const B64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// The payload recovered from a valid token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub username: String,
    pub expires_at: i64,
}

/// Stateless signed-token codec.
///
/// Wire format: `base64url_nopad("{username}:{expires_at}:{hex_signature}")`
/// where the signature is HMAC-SHA256 over `"{username}:{expires_at}"`.
/// Nothing is stored server-side; a token is valid until its expiry
/// timestamp regardless of later directory changes.
///
/// The clock is injectable so expiry behavior can be tested without
/// sleeping.
#[derive(Clone, Copy)]
pub struct TokenCodec {
    clock: fn() -> i64,
}

fn unix_now() -> i64 {
    Utc::now().timestamp()
}

fn sign(unsigned: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(TOKEN_SECRET)
        .expect("HMAC-SHA256 accepts keys of any length");
    mac.update(unsigned.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

impl TokenCodec {
    pub fn new() -> Self {
        Self { clock: unix_now }
    }

    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self { clock }
    }

    /// Issue a signed token for `username`, expiring [`TOKEN_TTL_SECONDS`]
    /// from now.
    pub fn issue(&self, username: &str) -> String {
        let expires_at = (self.clock)() + TOKEN_TTL_SECONDS;
        let unsigned = format!("{username}:{expires_at}");
        let signature = sign(&unsigned);
        B64.encode(format!("{unsigned}:{signature}").as_bytes())
    }

    /// Verify a token and return its claims, or `None`.
    ///
    /// All failure causes (malformed encoding, wrong field count, bad
    /// expiry, signature mismatch, expired) are indistinguishable to the
    /// caller. The signature comparison is constant-time; it is checked
    /// before expiry so the two failure modes stay order-compatible.
    pub fn verify(&self, token: &str) -> Option<TokenClaims> {
        if token.is_empty() {
            return None;
        }

        let decoded = B64.decode(token.as_bytes()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;

        let parts: Vec<&str> = decoded.split(':').collect();
        if parts.len() != 3 {
            return None;
        }
        let (username, expiry_field, signature) = (parts[0], parts[1], parts[2]);

        let expires_at: i64 = expiry_field.parse().ok()?;

        let unsigned = format!("{username}:{expires_at}");
        let mut mac = HmacSha256::new_from_slice(TOKEN_SECRET)
            .expect("HMAC-SHA256 accepts keys of any length");
        mac.update(unsigned.as_bytes());
        let supplied = hex::decode(signature).ok()?;
        mac.verify_slice(&supplied).ok()?;

        if expires_at < (self.clock)() {
            return None;
        }

        Some(TokenClaims {
            username: username.to_string(),
            expires_at,
        })
    }
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frozen_clock() -> i64 {
        1_700_000_000
    }

    fn after_ttl_clock() -> i64 {
        1_700_000_000 + TOKEN_TTL_SECONDS + 1
    }

    fn at_expiry_clock() -> i64 {
        1_700_000_000 + TOKEN_TTL_SECONDS
    }

    #[test]
    fn test_issue_then_verify_roundtrip() {
        let codec = TokenCodec::with_clock(frozen_clock);
        let token = codec.issue("alice");
        let claims = codec.verify(&token).expect("freshly issued token verifies");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.expires_at, frozen_clock() + TOKEN_TTL_SECONDS);
    }

    #[test]
    fn test_wire_format() {
        let codec = TokenCodec::with_clock(frozen_clock);
        let token = codec.issue("alice");

        // No padding, URL-safe alphabet only.
        assert!(!token.contains('='));
        assert!(token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));

        let decoded = String::from_utf8(B64.decode(token.as_bytes()).unwrap()).unwrap();
        let parts: Vec<&str> = decoded.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "alice");
        assert_eq!(parts[1], (frozen_clock() + TOKEN_TTL_SECONDS).to_string());
        assert_eq!(parts[2], sign(&format!("alice:{}", parts[1])));
        assert_eq!(parts[2].len(), 64);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issuer = TokenCodec::with_clock(frozen_clock);
        let token = issuer.issue("alice");

        assert!(TokenCodec::with_clock(after_ttl_clock)
            .verify(&token)
            .is_none());
        // Expiring exactly now is still accepted.
        assert!(TokenCodec::with_clock(at_expiry_clock)
            .verify(&token)
            .is_some());
    }

    #[test]
    fn test_tampered_signature_is_rejected() {
        let codec = TokenCodec::with_clock(frozen_clock);
        let token = codec.issue("alice");

        let decoded = String::from_utf8(B64.decode(token.as_bytes()).unwrap()).unwrap();
        let (unsigned, signature) = decoded.rsplit_once(':').unwrap();

        // Flip each hex digit of the signature in turn.
        for i in 0..signature.len() {
            let mut sig: Vec<char> = signature.chars().collect();
            sig[i] = if sig[i] == '0' { '1' } else { '0' };
            let tampered: String = sig.into_iter().collect();
            let forged = B64.encode(format!("{unsigned}:{tampered}").as_bytes());
            assert!(codec.verify(&forged).is_none(), "digit {i} accepted");
        }
    }

    #[test]
    fn test_tampered_username_is_rejected() {
        let codec = TokenCodec::with_clock(frozen_clock);
        let token = codec.issue("alice");

        let decoded = String::from_utf8(B64.decode(token.as_bytes()).unwrap()).unwrap();
        let forged = B64.encode(decoded.replacen("alice", "mallory", 1).as_bytes());
        assert!(codec.verify(&forged).is_none());
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let codec = TokenCodec::with_clock(frozen_clock);

        assert!(codec.verify("").is_none());
        assert!(codec.verify("!!!not-base64!!!").is_none());
        // Decodes, but not to three colon-separated fields.
        assert!(codec.verify(&B64.encode(b"alice")).is_none());
        assert!(codec.verify(&B64.encode(b"alice:123:sig:extra")).is_none());
        // Non-numeric expiry field.
        assert!(codec.verify(&B64.encode(b"alice:soon:00")).is_none());
        // Raw (non-UTF-8) payload bytes.
        assert!(codec.verify(&B64.encode([0xff, 0xfe, 0xfd])).is_none());
    }

    #[test]
    fn test_padded_token_still_verifies() {
        let codec = TokenCodec::with_clock(frozen_clock);
        let token = codec.issue("alice");

        let mut padded = token.clone();
        while padded.len() % 4 != 0 {
            padded.push('=');
        }
        assert_eq!(codec.verify(&padded), codec.verify(&token));
    }

    #[test]
    fn test_colon_in_username_breaks_field_split() {
        // A ':' inside the username makes the decoded payload four fields,
        // which verify refuses; registration forbids the character so this
        // can never happen for real members.
        let codec = TokenCodec::with_clock(frozen_clock);
        let token = codec.issue("a:b");
        assert!(codec.verify(&token).is_none());
    }
}
