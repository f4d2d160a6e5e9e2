//! Server name validation
//!
//! Validates server names for display in server lists and headers.

/// Maximum length for server names in characters
pub const MAX_SERVER_NAME_LENGTH: usize = 100;

/// Validation error for server names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerNameError {
    /// Server name is empty
    Empty,
    /// Server name exceeds maximum length
    TooLong,
    /// Server name contains newline characters
    ContainsNewlines,
}

/// Validate a server name
///
/// Checks:
/// - Not empty (after trimming whitespace)
/// - Does not exceed maximum length (100 characters)
/// - Contains no newlines (names render on a single line)
///
/// # Errors
///
/// Returns a `ServerNameError` variant describing the validation failure.
///
/// # Examples
///
/// ```
/// use haven_common::validators::{validate_server_name, ServerNameError};
///
/// // Valid server names
/// assert!(validate_server_name("Alpha").is_ok());
/// assert!(validate_server_name("Rust Hangout 2").is_ok());
///
/// // Invalid server names
/// assert_eq!(validate_server_name(""), Err(ServerNameError::Empty));
/// assert_eq!(validate_server_name("   "), Err(ServerNameError::Empty));
/// assert_eq!(validate_server_name("a\nb"), Err(ServerNameError::ContainsNewlines));
/// ```
pub fn validate_server_name(name: &str) -> Result<(), ServerNameError> {
    if name.trim().is_empty() {
        return Err(ServerNameError::Empty);
    }

    if name.chars().count() > MAX_SERVER_NAME_LENGTH {
        return Err(ServerNameError::TooLong);
    }

    if name.contains('\n') || name.contains('\r') {
        return Err(ServerNameError::ContainsNewlines);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_server_names() {
        assert!(validate_server_name("Alpha").is_ok());
        assert!(validate_server_name("my cool server").is_ok());
        assert!(validate_server_name("日本語サーバー").is_ok());
        assert!(validate_server_name("a").is_ok());
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(validate_server_name(""), Err(ServerNameError::Empty));
    }

    #[test]
    fn test_whitespace_only_name() {
        assert_eq!(validate_server_name("   "), Err(ServerNameError::Empty));
        assert_eq!(validate_server_name("\t"), Err(ServerNameError::Empty));
    }

    #[test]
    fn test_max_length_boundary() {
        let at_limit = "a".repeat(MAX_SERVER_NAME_LENGTH);
        assert!(validate_server_name(&at_limit).is_ok());

        let over_limit = "a".repeat(MAX_SERVER_NAME_LENGTH + 1);
        assert_eq!(validate_server_name(&over_limit), Err(ServerNameError::TooLong));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // Multibyte characters count once each
        let name = "日".repeat(MAX_SERVER_NAME_LENGTH);
        assert!(validate_server_name(&name).is_ok());
    }

    #[test]
    fn test_newlines_rejected() {
        assert_eq!(
            validate_server_name("line1\nline2"),
            Err(ServerNameError::ContainsNewlines)
        );
        assert_eq!(
            validate_server_name("line1\rline2"),
            Err(ServerNameError::ContainsNewlines)
        );
    }
}
