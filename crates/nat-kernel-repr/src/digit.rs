//! Digit-list representation: a deque of decimal digits.
//!
//! The kernel primitives are a push and a pop at the low end, which makes
//! this the most direct realization of the kernel. Arithmetic comes from
//! the derivation layer.

use std::collections::VecDeque;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use nat_kernel_core::{Digit, Digits, MachineInt, NaturalError, NaturalKernel, Standard};

use crate::traits::NaturalNumber;

/// A natural number stored as decimal digits, least significant first.
///
/// The most significant digit is never zero; zero has no digits.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DigitNatural {
    digits: VecDeque<Digit>,
}

impl DigitNatural {
    /// Create a zero value.
    pub const fn new() -> Self {
        Self {
            digits: VecDeque::new(),
        }
    }

    /// The canonical digits of this value.
    pub fn to_digits(&self) -> Digits {
        Digits::from_msf(self.digits.iter().rev().copied())
    }

    /// Number of significant digits.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether the value is zero.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

impl NaturalKernel for DigitNatural {
    fn multiply_by_radix(&mut self, digit: Digit) {
        if self.digits.is_empty() && digit.is_zero() {
            return;
        }
        self.digits.push_front(digit);
    }

    fn divide_by_radix(&mut self) -> Digit {
        self.digits.pop_front().unwrap_or(Digit::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl Standard for DigitNatural {
    fn clear(&mut self) {
        self.digits.clear();
    }

    fn new_instance(&self) -> Self {
        Self::new()
    }
}

impl NaturalNumber for DigitNatural {}

impl Hash for DigitNatural {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_digits().hash(state);
    }
}

impl Ord for DigitNatural {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_digits().cmp(&other.to_digits())
    }
}

impl PartialOrd for DigitNatural {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for DigitNatural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitNatural({})", self.to_digits())
    }
}

impl fmt::Display for DigitNatural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_digits(), f)
    }
}

impl From<&Digits> for DigitNatural {
    fn from(digits: &Digits) -> Self {
        Self {
            digits: digits.iter().rev().collect(),
        }
    }
}

impl FromStr for DigitNatural {
    type Err = NaturalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Digits = s.parse()?;
        Ok(Self::from(&digits))
    }
}

impl From<u32> for DigitNatural {
    fn from(n: u32) -> Self {
        Self::from(&Digits::from(n as u64))
    }
}

impl From<u64> for DigitNatural {
    fn from(n: u64) -> Self {
        Self::from(&Digits::from(n))
    }
}

impl TryFrom<MachineInt> for DigitNatural {
    type Error = NaturalError;

    fn try_from(i: MachineInt) -> Result<Self, Self::Error> {
        u64::try_from(i)
            .map(Self::from)
            .map_err(|_| NaturalError::NegativeValue(i))
    }
}
