//! Short code generation.
//!
//! Produces fixed-length, URL-safe, unpredictable identifiers for new
//! entries.

use base64::Engine as _;

/// Bytes of entropy fed into the encoder.
const CODE_ENTROPY_BYTES: usize = 6;

/// Length of a generated code.
///
/// 6 random bytes encode to exactly 8 base64 characters, so the full 48
/// bits of entropy survive into the code without truncation.
pub const CODE_LENGTH: usize = 8;

/// Generates a cryptographically secure random short code.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing an 8-character code.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
/// Code uniqueness is safety-relevant, so a process that cannot draw
/// entropy must not keep issuing codes.
pub fn generate_code() -> String {
    let mut buffer = [0u8; CODE_ENTROPY_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_not_empty() {
        let code = generate_code();
        assert!(!code.is_empty());
    }

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = generate_code();
        assert_eq!(code.len(), CODE_LENGTH);
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        let code = generate_code();
        assert!(
            code.chars()
                .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            let code = generate_code();
            codes.insert(code);
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_no_padding() {
        let code = generate_code();
        assert!(!code.contains('='));
    }
}
