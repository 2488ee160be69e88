//! Test fixtures and helpers.
//!
//! Build the same value in every representation, so a test can run once per
//! representation, or once per (receiver, operand) pairing.

use nat_kernel_core::{Digits, NaturalError};
use nat_kernel_repr::{BigNatural, DigitNatural, LimbNatural, NaturalNumber};

/// The concrete representations under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    Big,
    Limb,
    Digit,
}

impl Representation {
    /// Every representation.
    pub const ALL: [Representation; 3] = [Self::Big, Self::Limb, Self::Digit];

    /// A short name for test output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Limb => "limb",
            Self::Digit => "digit",
        }
    }

    /// A zero value in this representation.
    pub fn zero(self) -> Box<dyn NaturalNumber> {
        match self {
            Self::Big => Box::new(BigNatural::new()),
            Self::Limb => Box::new(LimbNatural::new()),
            Self::Digit => Box::new(DigitNatural::new()),
        }
    }

    /// Parse a digit string into this representation.
    pub fn parse(self, s: &str) -> Result<Box<dyn NaturalNumber>, NaturalError> {
        let digits: Digits = s.parse()?;
        Ok(self.from_digits(&digits))
    }

    /// Build from canonical digits.
    pub fn from_digits(self, digits: &Digits) -> Box<dyn NaturalNumber> {
        match self {
            Self::Big => Box::new(BigNatural::from_digits(digits)),
            Self::Limb => Box::new(LimbNatural::from(digits)),
            Self::Digit => Box::new(DigitNatural::from(digits)),
        }
    }

    /// Build from a `u64`.
    pub fn from_u64(self, n: u64) -> Box<dyn NaturalNumber> {
        match self {
            Self::Big => Box::new(BigNatural::from(n)),
            Self::Limb => Box::new(LimbNatural::from(n)),
            Self::Digit => Box::new(DigitNatural::from(n)),
        }
    }
}

/// Parse `s` into `repr`, panicking on a malformed string.
pub fn natural(repr: Representation, s: &str) -> Box<dyn NaturalNumber> {
    repr.parse(s)
        .unwrap_or_else(|e| panic!("bad fixture value {:?}: {}", s, e))
}

/// The value `s` in every representation.
pub fn all_representations(s: &str) -> Vec<(Representation, Box<dyn NaturalNumber>)> {
    Representation::ALL
        .iter()
        .map(|&repr| (repr, natural(repr, s)))
        .collect()
}

/// A receiver/operand pair for every combination of representations.
pub struct Pairing {
    pub receiver_repr: Representation,
    pub operand_repr: Representation,
    pub receiver: Box<dyn NaturalNumber>,
    pub operand: Box<dyn NaturalNumber>,
}

impl Pairing {
    /// A label like `"limb <- big"` for assertion messages.
    pub fn label(&self) -> String {
        format!("{} <- {}", self.receiver_repr.name(), self.operand_repr.name())
    }
}

/// `receiver` and `operand` in all nine representation pairings.
pub fn all_pairings(receiver: &str, operand: &str) -> Vec<Pairing> {
    let mut pairings = Vec::with_capacity(9);
    for &receiver_repr in &Representation::ALL {
        for &operand_repr in &Representation::ALL {
            pairings.push(Pairing {
                receiver_repr,
                operand_repr,
                receiver: natural(receiver_repr, receiver),
                operand: natural(operand_repr, operand),
            });
        }
    }
    pairings
}

#[cfg(test)]
mod tests {
    use super::*;
    use nat_kernel_core::NaturalKernel;

    #[test]
    fn test_all_representations_agree() {
        let mut values = all_representations("8675309");
        assert_eq!(values.len(), 3);
        for (repr, value) in &mut values {
            assert_eq!(value.to_decimal_string(), "8675309", "{}", repr.name());
        }
    }

    #[test]
    fn test_pairings_cover_every_combination() {
        let pairings = all_pairings("1", "2");
        assert_eq!(pairings.len(), 9);
        assert_eq!(pairings[1].label(), "big <- limb");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for repr in Representation::ALL {
            assert!(repr.parse("0042").is_err());
        }
    }

    #[test]
    fn test_zero_is_zero() {
        for repr in Representation::ALL {
            assert!(repr.zero().is_zero());
            assert!(repr.from_u64(0).is_zero());
        }
    }
}
