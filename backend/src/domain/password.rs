//! Password storage primitive.
//!
//! Plaintext passwords never reach the store. Handlers hash them into an
//! Argon2id PHC string on the way in, and the hash is never serialised.

use std::fmt;

use argon2::Argon2;
use argon2::password_hash::{PasswordHasher, SaltString};
use password_hash::rand_core::OsRng;

/// Failures raised while deriving a password hash.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    /// The password was empty.
    #[error("password must not be empty")]
    Empty,
    /// The hasher rejected the input.
    #[error("password hashing failed: {message}")]
    Hashing { message: String },
}

/// Argon2id PHC-formatted password hash.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash a plaintext password with a fresh random salt.
    ///
    /// Hashing is CPU-bound; async callers should run it on a blocking thread.
    pub fn from_plaintext(plaintext: &str) -> Result<Self, PasswordError> {
        if plaintext.is_empty() {
            return Err(PasswordError::Empty);
        }
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| Self(hash.to_string()))
            .map_err(|err| PasswordError::Hashing {
                message: err.to_string(),
            })
    }

    /// Rehydrate a hash previously produced by [`Self::from_plaintext`].
    pub fn from_phc(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    /// PHC string for persistence.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn hashes_are_salted_argon2id_strings() {
        let first = PasswordHash::from_plaintext("s3cret").expect("hash password");
        let second = PasswordHash::from_plaintext("s3cret").expect("hash password");

        assert!(first.as_str().starts_with("$argon2id$"));
        assert!(!first.as_str().contains("s3cret"));
        assert_ne!(first, second);
    }

    #[rstest]
    fn empty_password_is_rejected() {
        assert_eq!(PasswordHash::from_plaintext(""), Err(PasswordError::Empty));
    }

    #[rstest]
    fn debug_output_is_redacted() {
        let hash = PasswordHash::from_phc("$argon2id$v=19$m=19456,t=2,p=1$abc$def");
        assert_eq!(format!("{hash:?}"), "PasswordHash(<redacted>)");
    }
}
