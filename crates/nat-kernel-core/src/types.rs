//! Strong type definitions for the natural number kernel.
//!
//! A [`Digit`] can only hold a value below [`RADIX`], so the kernel's
//! `multiply_by_radix` precondition is enforced at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::NaturalError;

/// The radix every kernel primitive works in.
pub const RADIX: u32 = 10;

/// The fixed-width signed integer used by machine integer conversions.
pub type MachineInt = i64;

/// A single base-[`RADIX`] digit.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// The zero digit.
    pub const ZERO: Self = Self(0);

    /// The largest digit, `RADIX - 1`.
    pub const MAX: Self = Self(RADIX as u8 - 1);

    /// Create a digit, or `None` if `value >= RADIX`.
    pub const fn new(value: u8) -> Option<Self> {
        if (value as u32) < RADIX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The digit `value % RADIX`.
    pub const fn from_remainder(value: u64) -> Self {
        Self((value % RADIX as u64) as u8)
    }

    /// Parse an ASCII decimal digit.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(RADIX).map(|d| Self(d as u8))
    }

    /// The digit's value.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Whether this is the zero digit.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The ASCII character for this digit.
    pub fn to_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digit({})", self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Digit {
    type Error = NaturalError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(NaturalError::InvalidDigit(value))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

impl From<Digit> for u32 {
    fn from(digit: Digit) -> u32 {
        digit.0 as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(0), Some(Digit::ZERO));
        assert_eq!(Digit::new(9), Some(Digit::MAX));
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::try_from(200), Err(NaturalError::InvalidDigit(200)));
        assert_eq!(Digit::from_remainder(347).get(), 7);
    }

    #[test]
    fn test_digit_chars() {
        assert_eq!(Digit::from_char('7').map(Digit::get), Some(7));
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::from_char('-'), None);
        assert_eq!(Digit::new(4).unwrap().to_char(), '4');
    }

    #[test]
    fn test_digit_serde() {
        let d = Digit::new(3).unwrap();
        assert_eq!(serde_json::to_string(&d).unwrap(), "3");
        assert!(serde_json::from_str::<Digit>("12").is_err());
    }
}
