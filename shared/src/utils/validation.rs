//! Common validation utilities

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty after trimming
    pub fn not_blank(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check that a value is exactly `length` ASCII digits
    ///
    /// Leading zeros are allowed; the value is never parsed as a number.
    pub fn is_exact_digits(value: &str, length: usize) -> bool {
        value.len() == length && value.bytes().all(|b| b.is_ascii_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_not_blank() {
        assert!(not_blank("x"));
        assert!(!not_blank(""));
        assert!(!not_blank("   \t"));
    }

    #[test]
    fn test_is_exact_digits() {
        assert!(is_exact_digits("1234", 4));
        assert!(is_exact_digits("0042", 4));
        assert!(!is_exact_digits("12a4", 4));
        assert!(!is_exact_digits("123", 4));
        assert!(!is_exact_digits("12345", 4));
        assert!(!is_exact_digits("١٢٣٤", 4));
        assert!(!is_exact_digits("", 4));
    }
}
