//! Password strength policy

use crate::errors::DomainError;

/// Characters that count towards the "special character" requirement
pub const PASSWORD_SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

const MIN_PASSWORD_LEN: usize = 8;

/// Check a plaintext password against the registration policy
///
/// At least eight characters with one ASCII uppercase letter, one ASCII
/// lowercase letter, one digit, and one of [`PASSWORD_SPECIAL_CHARACTERS`].
///
/// # Errors
///
/// Returns `DomainError::WeakPassword` if any requirement is missing.
pub fn check_password_strength(password: &str) -> Result<(), DomainError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LEN;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password
        .chars()
        .any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c));

    if long_enough && has_upper && has_lower && has_digit && has_special {
        Ok(())
    } else {
        Err(DomainError::WeakPassword)
    }
}
