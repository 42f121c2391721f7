//! Pluggable secret comparison for the `/authenticate` flow.
//!
//! The encoder is chosen once at startup (`Config::password_encoder`) and
//! injected into `AppState`; handlers never pick an implementation
//! themselves. Swapping the stored-credential format means swapping the
//! encoder here, nothing else.

use argon2::{Argon2, PasswordVerifier};
use password_hash::PasswordHash;

pub trait PasswordEncoder: Send + Sync {
    /// Does `raw` (the supplied secret) match `stored` (the persisted
    /// representation)?
    fn matches(&self, raw: &str, stored: &str) -> bool;
}

/// Compares the supplied and stored secrets as equal strings.
///
/// This is an intentionally insecure placeholder for installations whose
/// user table still holds plain passwords. Do not deploy it anywhere that
/// matters; it stays selectable so those installations keep working while
/// they migrate to `Argon2Encoder`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextEncoder;

impl PasswordEncoder for PlainTextEncoder {
    fn matches(&self, raw: &str, stored: &str) -> bool {
        raw == stored
    }
}

/// Verifies the stored value as a PHC-format Argon2 hash.
///
/// A stored value that does not parse as a PHC string fails the match; the
/// caller sees the same "bad credentials" outcome as a wrong password.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Encoder;

impl PasswordEncoder for Argon2Encoder {
    fn matches(&self, raw: &str, stored: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored) else {
            tracing::warn!("stored credential is not a valid PHC string");
            return false;
        };
        Argon2::default()
            .verify_password(raw.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use argon2::PasswordHasher;
    use password_hash::SaltString;

    use super::*;

    #[test]
    fn plain_text_compares_equal_strings() {
        let enc = PlainTextEncoder;
        assert!(enc.matches("admin", "admin"));
        assert!(!enc.matches("admin", "Admin"));
        assert!(!enc.matches("", "admin"));
        assert!(enc.matches("", ""));
    }

    #[test]
    fn argon2_verifies_phc_hash() {
        let salt = SaltString::encode_b64(b"0123456789abcdef").unwrap();
        let phc = Argon2::default()
            .hash_password(b"s3cret", &salt)
            .unwrap()
            .to_string();

        let enc = Argon2Encoder;
        assert!(enc.matches("s3cret", &phc));
        assert!(!enc.matches("wrong", &phc));
    }

    #[test]
    fn argon2_rejects_non_phc_stored_value() {
        let enc = Argon2Encoder;
        assert!(!enc.matches("s3cret", "s3cret"));
        assert!(!enc.matches("s3cret", ""));
    }
}
