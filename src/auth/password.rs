use error_stack::{Result, ResultExt};
use thiserror::Error;

/// Fixed work factor; all stored hashes were produced with it.
const COST: u32 = 12;

#[derive(Debug, Error)]
#[error("Failed to generate password hash")]
pub struct HashPasswordError;

/// Hashes a plaintext password with a fresh salt. No length cap is
/// enforced here; bcrypt itself only reads the first 72 bytes.
///
/// CPU-bound. Callers on the event loop should go through
/// [`tokio::task::spawn_blocking`].
pub fn hash(password: &str) -> Result<String, HashPasswordError> {
    bcrypt::hash(password, COST).change_context(HashPasswordError)
}

#[derive(Debug, Error)]
#[error("Failed to verify password")]
pub struct VerifyPasswordError;

/// A wrong password is `Ok(false)`; only a malformed stored hash is
/// an error.
pub fn verify(password: &str, hash: &str) -> Result<bool, VerifyPasswordError> {
    bcrypt::verify(password, hash).change_context(VerifyPasswordError)
}

#[cfg(test)]
mod tests {
    use super::{hash, verify};

    #[test]
    fn hash_and_verify() {
        let hashed = hash("sabzi-mandi-42").unwrap();
        assert_ne!(hashed, "sabzi-mandi-42");
        assert!(verify("sabzi-mandi-42", &hashed).unwrap());
        assert!(!verify("sabzi-mandi-43", &hashed).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(verify("whatever", "not-a-bcrypt-hash").is_err());
    }
}
