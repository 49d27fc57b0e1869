//! Password hashing and password policy.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};
use rand::Rng;

/// Special characters of which a password must contain at least one.
const REQUIRED_SPECIALS: &str = "@$!%*#?&";

/// Minimum password length.
const MIN_LENGTH: usize = 8;

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC formatted hash suitable for storage
/// - `Err(password_hash::Error)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, password_hash::Error> {
    let mut salt_bytes = [0u8; 16];
    rand::rng().fill(&mut salt_bytes);
    let salt = SaltString::encode_b64(&salt_bytes)?;

    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

    Ok(hash.to_string())
}

/// Verifies a password against a stored PHC hash.
///
/// # Returns
/// - `Ok(true)` - Password matches
/// - `Ok(false)` - Password does not match
/// - `Err(password_hash::Error)` - Stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Checks a candidate password against the password policy.
///
/// A password needs at least 8 characters with at least one letter, one digit and one of
/// `@$!%*#?&`. Only ASCII letters, digits and `@$!%*#?&_` are accepted.
///
/// # Returns
/// - `Ok(())` - Password satisfies the policy
/// - `Err(String)` - Human readable reason for the rejection
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() < MIN_LENGTH {
        return Err(format!(
            "Password must be at least {} characters long",
            MIN_LENGTH
        ));
    }

    if let Some(c) = password
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && !REQUIRED_SPECIALS.contains(*c) && *c != '_')
    {
        return Err(format!("Password contains an invalid character: '{}'", c));
    }

    if !password.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err("Password must contain at least one letter".to_string());
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Password must contain at least one digit".to_string());
    }

    if !password.chars().any(|c| REQUIRED_SPECIALS.contains(c)) {
        return Err(format!(
            "Password must contain at least one of {}",
            REQUIRED_SPECIALS
        ));
    }

    Ok(())
}
