//! Password hashing
//!
//! Thin wrapper over bcrypt so callers never handle plaintext comparisons.

use crate::error::StoreResult;

pub use bcrypt::DEFAULT_COST;

/// Lowest cost bcrypt accepts
pub const MIN_COST: u32 = 4;

/// Highest cost bcrypt accepts
pub const MAX_COST: u32 = 31;

/// Hash a password at the given bcrypt cost
pub fn hash_password(password: &str, cost: u32) -> StoreResult<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Check a password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> StoreResult<bool> {
    Ok(bcrypt::verify(password, hash)?)
}
