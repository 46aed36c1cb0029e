use sha2::{Digest, Sha256};

/// Process-wide salt prepended to every password before hashing.
///
/// KNOWN WEAKNESS: a static salt and a single fast SHA-256 round are not a
/// credential store for production use; that would need a per-record random
/// salt and a memory-hard KDF. The scheme is kept as-is because the digests
/// are part of this service's reference behavior.
const PASSWORD_SALT: &str = "easyapp-static-password-salt";

/// Return the salted SHA-256 digest of a raw password, hex-encoded.
///
/// Deterministic: the same input always yields the same digest, so login
/// verification is an exact string comparison against the stored value.
pub fn hash_password(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(PASSWORD_SALT.as_bytes());
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}
