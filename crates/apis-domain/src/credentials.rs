//! Username and password rules for user accounts.
//!
//! Lengths are counted in characters, not bytes.

use std::ops::RangeInclusive;

/// Accepted username length: 3-20 characters.
pub const USERNAME_LENGTH: RangeInclusive<usize> = 3..=20;

/// Accepted password length: 10-40 characters, whitespace included.
pub const PASSWORD_LENGTH: RangeInclusive<usize> = 10..=40;

/// Trim surrounding whitespace and lowercase. Usernames are stored and compared
/// in this form.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}

/// Validate a username: alphanumeric only, 3-20 characters.
/// Empty and whitespace-only strings are rejected.
pub fn validate_username(username: &str) -> bool {
    USERNAME_LENGTH.contains(&username.chars().count())
        && username.chars().all(char::is_alphanumeric)
}

/// Validate a password: 10-40 characters, any character class.
/// The raw value is measured; it is never trimmed.
pub fn validate_password(password: &str) -> bool {
    PASSWORD_LENGTH.contains(&password.chars().count())
}
