//! Password hashing.
//!
//! bcrypt with a fixed cost of 10, matching the hashes already in the
//! credential store. The work factor makes hashing slow on purpose, so
//! the `_async` variants run it on the blocking thread pool instead of
//! stalling the runtime.

use anyhow::{Context, Result};

const COST: u32 = 10;

/// Hash a password with a fresh random salt.
pub fn hash(password: &str) -> Result<String> {
    bcrypt::hash(password, COST).context("bcrypt hashing failed")
}

/// Compare a password against a stored hash.
pub fn verify(password: &str, hashed: &str) -> Result<bool> {
    bcrypt::verify(password, hashed).context("stored value is not a bcrypt hash")
}

/// [`hash`] on the blocking pool.
pub async fn hash_async(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash(&password))
        .await
        .context("hashing task aborted")?
}

/// [`verify`] on the blocking pool.
pub async fn verify_async(password: String, hashed: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify(&password, &hashed))
        .await
        .context("verification task aborted")?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_right_password_only() {
        let hashed = hash("correct-horse-battery").unwrap();

        assert!(verify("correct-horse-battery", &hashed).unwrap());
        assert!(!verify("incorrect-horse-battery", &hashed).unwrap());
    }

    #[test]
    fn salt_varies_between_calls() {
        let first = hash("same-input").unwrap();
        let second = hash("same-input").unwrap();

        assert_ne!(first, second);
        assert!(verify("same-input", &first).unwrap());
        assert!(verify("same-input", &second).unwrap());
    }

    #[test]
    fn malformed_stored_hash_is_an_error() {
        assert!(verify("anything", "$notbcrypt$").is_err());
    }

    #[tokio::test]
    async fn blocking_pool_variants_agree() {
        let hashed = hash_async("pool-password".into()).await.unwrap();

        assert!(verify_async("pool-password".into(), hashed.clone())
            .await
            .unwrap());
        assert!(!verify_async("wrong".into(), hashed).await.unwrap());
    }
}
