//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and boundary
//! validation for custom user-provided codes.

use std::borrow::Cow;
use validator::ValidationError;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 8;

/// Symbols a generated code is drawn from.
pub const CODE_ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Random bytes at or above this value are rejected so that `byte % 62` is uniform.
const REJECTION_BOUND: u8 = (256 - 256 % CODE_ALPHABET.len()) as u8;

/// Upper bound on custom code length.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

/// Reserved codes that cannot be used as short links.
///
/// These collide with fixed routes and would never be reachable as redirects.
const RESERVED_CODES: &[&str] = &["shorten", "health"];

/// Generates a cryptographically secure random short code.
///
/// Draws [`CODE_LENGTH`] symbols uniformly and independently from
/// [`CODE_ALPHABET`], using the operating system's entropy source.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut code = String::with_capacity(CODE_LENGTH);
    let mut buffer = [0u8; CODE_LENGTH * 2];

    while code.len() < CODE_LENGTH {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in buffer.iter().filter(|&&b| b < REJECTION_BOUND) {
            if code.len() == CODE_LENGTH {
                break;
            }
            code.push(CODE_ALPHABET[usize::from(byte) % CODE_ALPHABET.len()] as char);
        }
    }

    code
}

/// Returns true if `code` has the shape of a generated code.
pub fn is_generated_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| CODE_ALPHABET.contains(&b))
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - No `/`, `?`, `#`, `%`, whitespace or control characters
/// - Cannot be a reserved route name
///
/// Any other characters, including non-ASCII ones, are accepted.
///
/// # Errors
///
/// Returns a [`ValidationError`] describing the first violated rule.
pub fn validate_custom_code(code: &str) -> Result<(), ValidationError> {
    let length = code.chars().count();
    if length == 0 || length > MAX_CUSTOM_CODE_LENGTH {
        return Err(ValidationError::new("code_length")
            .with_message(Cow::from("Custom code must be 1-64 characters")));
    }

    if code
        .chars()
        .any(|c| matches!(c, '/' | '?' | '#' | '%') || c.is_whitespace() || c.is_control())
    {
        return Err(ValidationError::new("code_charset").with_message(Cow::from(
            "Custom code cannot contain '/', '?', '#', '%', whitespace or control characters",
        )));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(ValidationError::new("code_reserved")
            .with_message(Cow::from("This code is reserved")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_uses_alphabet() {
        for _ in 0..100 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()), "{code}");
            assert!(is_generated_code(&code));
        }
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_covers_whole_alphabet() {
        let seen: HashSet<u8> = (0..2000).flat_map(|_| generate_code().into_bytes()).collect();
        assert_eq!(seen.len(), CODE_ALPHABET.len());
    }

    #[test]
    fn test_rejection_bound() {
        assert_eq!(REJECTION_BOUND, 248);
    }

    #[test]
    fn test_is_generated_code() {
        assert!(is_generated_code("aB3dE5gH"));
        assert!(!is_generated_code("aB3dE5g"));
        assert!(!is_generated_code("aB3dE5gH9"));
        assert!(!is_generated_code("aB3-E5gH"));
    }

    #[test]
    fn test_validate_accepts_mixed_case() {
        assert!(validate_custom_code("MyCustom1").is_ok());
    }

    #[test]
    fn test_validate_accepts_punctuation() {
        assert!(validate_custom_code("my-link_2024.v2").is_ok());
    }

    #[test]
    fn test_validate_accepts_single_char() {
        assert!(validate_custom_code("x").is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        let err = validate_custom_code("").unwrap_err();
        assert_eq!(err.code, "code_length");
    }

    #[test]
    fn test_validate_too_long() {
        let code = "a".repeat(MAX_CUSTOM_CODE_LENGTH + 1);
        assert!(validate_custom_code(&code).is_err());
        assert!(validate_custom_code(&code[1..]).is_ok());
    }

    #[test]
    fn test_validate_path_unsafe_characters() {
        for code in ["a/b", "a?b", "a#b", "a%20b", "my code", "tab\tcode"] {
            let err = validate_custom_code(code).unwrap_err();
            assert_eq!(err.code, "code_charset", "{code}");
        }
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            let result = validate_custom_code(reserved);
            assert!(
                result.is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
    }
}
