/**
 * Password Hashing
 *
 * One-way salted hashing of credentials with bcrypt. Each call to `hash`
 * draws a fresh salt, so equal passwords never produce equal digests. The
 * digest is always 60 characters, which the `user_auth` table checks.
 */
use std::sync::{Arc, OnceLock};

use bcrypt::BcryptError;

/// Salted one-way password hasher
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    /// Digest verified against when no user matched, so both failure paths do equal work
    decoy: Arc<OnceLock<Option<String>>>,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt work factor
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            decoy: Arc::new(OnceLock::new()),
        }
    }

    /// Work factor used for new digests
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    pub fn hash(&self, plaintext: &str) -> Result<String, BcryptError> {
        bcrypt::hash(plaintext, self.cost)
    }

    /// Check a plaintext password against a stored digest
    ///
    /// bcrypt compares the recomputed digest in constant time. A malformed
    /// digest never verifies.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        match bcrypt::verify(plaintext, digest) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!(error = %e, "stored password digest could not be parsed");
                false
            }
        }
    }

    /// Spend the same effort as a real verification, for a lookup that found no user
    pub fn verify_decoy(&self, plaintext: &str) {
        let decoy = self
            .decoy
            .get_or_init(|| bcrypt::hash("decoy-password", self.cost).ok());
        if let Some(digest) = decoy {
            let _ = bcrypt::verify(plaintext, digest);
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
