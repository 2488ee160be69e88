//! Digit string validation.
//!
//! The accepted grammar is `0|[1-9][0-9]*`: no sign, no separators, no
//! leading zeros. It is also exactly the grammar produced by `Display`.

use crate::error::{NaturalError, Result};

/// Whether `s` is a canonical decimal natural number.
pub fn can_set_from_string(s: &str) -> bool {
    let bytes = s.as_bytes();
    match bytes {
        [] => false,
        [b'0'] => true,
        [first, rest @ ..] => {
            matches!(first, b'1'..=b'9') && rest.iter().all(u8::is_ascii_digit)
        }
    }
}

/// Check `s` against the grammar, returning it unchanged on success.
pub fn validate_digit_string(s: &str) -> Result<&str> {
    if can_set_from_string(s) {
        Ok(s)
    } else {
        Err(NaturalError::MalformedString(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_canonical() {
        assert!(can_set_from_string("0"));
        assert!(can_set_from_string("7"));
        assert!(can_set_from_string("123"));
        assert!(can_set_from_string("90000000000000000000000000001"));
    }

    #[test]
    fn test_rejects_malformed() {
        for s in ["", "00", "01", "-1", "+1", "12a", " 1", "1 ", "1_000", "1,000", "٣"] {
            assert!(!can_set_from_string(s), "accepted {:?}", s);
        }
    }

    #[test]
    fn test_validate_digit_string() {
        assert_eq!(validate_digit_string("42"), Ok("42"));
        assert_eq!(
            validate_digit_string("007"),
            Err(NaturalError::MalformedString("007".into()))
        );
    }
}
