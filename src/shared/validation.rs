/**
 * Field Validation
 *
 * Format rules for the registration fields. Every rule returns the first
 * problem it finds as a `SharedError::ValidationError` naming the field.
 *
 * # Rules
 *
 * - Username: 3-15 characters, ASCII letters, digits and underscores only
 * - Email: `local@domain.tld`, TLD of at least two letters
 * - Password: 8-72 bytes with at least one uppercase letter, one lowercase
 *   letter, one digit and one symbol
 */
use crate::shared::error::SharedError;

/// Minimum username length
pub const MIN_USERNAME_LEN: usize = 3;
/// Maximum username length
pub const MAX_USERNAME_LEN: usize = 15;
/// Minimum password length
pub const MIN_PASSWORD_LEN: usize = 8;
/// Maximum password length (bcrypt ignores input past 72 bytes)
pub const MAX_PASSWORD_LEN: usize = 72;

/// Validate username format
///
/// Usernames must be:
/// - 3-15 characters long
/// - Contain only alphanumeric characters and underscores
pub fn validate_username(username: &str) -> Result<(), SharedError> {
    if username.len() < MIN_USERNAME_LEN || username.len() > MAX_USERNAME_LEN {
        return Err(SharedError::validation(
            "username",
            format!(
                "Username must be between {} and {} characters long",
                MIN_USERNAME_LEN, MAX_USERNAME_LEN
            ),
        ));
    }

    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(SharedError::validation(
            "username",
            "Username can only contain alphanumeric characters and underscores",
        ));
    }

    Ok(())
}

/// Validate email format
///
/// Case is preserved and accepted on both sides of the `@`; uniqueness and
/// lookups are case-insensitive at the storage layer.
pub fn validate_email(email: &str) -> Result<(), SharedError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(SharedError::validation("email", "Invalid email format"))
    }
}

/// Syntactic email check without building an error
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '%' | '+' | '-'));
    if !local_ok {
        return false;
    }

    // The domain may contain further dots; the last label is the TLD
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };

    !host.is_empty()
        && host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'))
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.len() < MIN_PASSWORD_LEN || password.len() > MAX_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!(
                "Password must be between {} and {} characters long",
                MIN_PASSWORD_LEN, MAX_PASSWORD_LEN
            ),
        ));
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    if !(has_upper && has_lower && has_digit && has_symbol) {
        return Err(SharedError::validation(
            "password",
            "Password must contain uppercase, lowercase, number, and special character",
        ));
    }

    Ok(())
}
