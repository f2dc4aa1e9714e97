use super::errors::PasswordError;

/// Default bcrypt work factor.
const DEFAULT_COST: u32 = 10;

/// Password hashing implementation.
///
/// Wraps bcrypt with a per-call random salt baked into the output string.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a new password hasher with the default work factor.
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    /// Create a password hasher with an explicit work factor.
    ///
    /// Higher costs are exponentially more expensive to compute. Useful for
    /// tests (lower cost) or hardened deployments (higher cost).
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password.
    ///
    /// # Returns
    /// Modular crypt format string embedding algorithm, cost, salt, and hash
    ///
    /// # Errors
    /// * `HashingFailed` - the underlying primitive rejected the input
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        bcrypt::hash(password, self.cost).map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// A mismatch is not an error: it returns `Ok(false)`.
    ///
    /// # Errors
    /// * `VerificationFailed` - the stored hash is malformed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        bcrypt::verify(password, hash)
            .map_err(|e| PasswordError::VerificationFailed(format!("Invalid password hash: {}", e)))
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
