//! Password hashing and verification.
//!
//! Passwords are stored as salted bcrypt hashes. Hashing the same plaintext
//! twice yields different strings, both of which verify. Comparison timing is
//! provided by the bcrypt implementation.

use bcrypt::{DEFAULT_COST, hash, verify};

use crate::errors::AppError;

/// Hashes a password with bcrypt's default cost.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash_password_with_cost(password, DEFAULT_COST)
}

/// Hashes a password with an explicit bcrypt cost (4..=31).
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to hash password: {}", e)))
}

/// Returns `Ok(false)` on mismatch and `Err` only when `hash` is not a valid
/// bcrypt hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    verify(password, hash)
        .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to verify password: {}", e)))
}
