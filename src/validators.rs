/// Input validation utilities shared by the registration and chat handlers.

/// Maximum length of a chat message, in characters after trimming.
pub const MAX_MESSAGE_CHARS: usize = 1000;

/// Validate a (trimmed) username.
///
/// Usernames must be non-empty and must not contain ':', which is reserved
/// as the field delimiter of the signed-token encoding. Enforcing this at
/// registration keeps token decoding unambiguous.
pub fn validate_username(username: &str) -> bool {
    !username.is_empty() && !username.contains(':')
}

/// Validate (trimmed) chat message text: non-empty and within the length cap.
/// The limit counts characters, not bytes.
pub fn validate_message_text(text: &str) -> bool {
    !text.is_empty() && text.chars().count() <= MAX_MESSAGE_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        assert!(validate_username("alice"));
        assert!(validate_username("john_doe-99"));
    }

    #[test]
    fn test_invalid_username() {
        assert!(!validate_username(""));
        assert!(!validate_username("a:b")); // Reserved delimiter
    }

    #[test]
    fn test_valid_message_text() {
        assert!(validate_message_text("hello"));
        assert!(validate_message_text(&"x".repeat(MAX_MESSAGE_CHARS)));
    }

    #[test]
    fn test_invalid_message_text() {
        assert!(!validate_message_text(""));
        assert!(!validate_message_text(&"x".repeat(MAX_MESSAGE_CHARS + 1)));
    }

    #[test]
    fn test_message_limit_counts_chars_not_bytes() {
        // Multi-byte characters still count as one each.
        let text = "й".repeat(MAX_MESSAGE_CHARS);
        assert!(text.len() > MAX_MESSAGE_CHARS);
        assert!(validate_message_text(&text));
    }
}
