//! Input hygiene shared by the feature services.
//!
//! The upstream protocol embeds caller input into a URL query string, so the
//! gateway rejects a fixed character set everywhere rather than trusting
//! upstream quoting.

/// Characters never accepted in any caller-supplied field.
const FORBIDDEN_CHARS: [char; 9] = ['/', ';', '"', '\'', '<', '>', '|', ':', '&'];

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Return whether `input` contains any forbidden character.
///
/// # Examples
/// ```
/// use spektr_gateway::domain::validation::contains_forbidden_chars;
///
/// assert!(contains_forbidden_chars("<injection/>"));
/// assert!(!contains_forbidden_chars("user@example.com"));
/// ```
pub fn contains_forbidden_chars(input: &str) -> bool {
    input.chars().any(|c| FORBIDDEN_CHARS.contains(&c))
}

/// Check a candidate password against the gateway policy.
///
/// The policy is a length floor plus the forbidden-character set; complexity
/// classes are left to the upstream system.
pub fn validate_password(password: &str) -> Result<(), PasswordPolicyError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordPolicyError::TooShort);
    }
    if contains_forbidden_chars(password) {
        return Err(PasswordPolicyError::ForbiddenCharacters);
    }
    Ok(())
}

/// Reasons a password fails the gateway policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PasswordPolicyError {
    /// Shorter than [`MIN_PASSWORD_LEN`] characters.
    #[error("password must be at least {MIN_PASSWORD_LEN} characters long")]
    TooShort,
    /// Contains a character from the forbidden set.
    #[error("password contains forbidden characters")]
    ForbiddenCharacters,
}
