//! Machine-word representation: little-endian `u32` limbs.
//!
//! Implements only the kernel and lifecycle. Every advanced operation comes
//! from the derivation layer.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use nat_kernel_core::{Digit, Digits, MachineInt, NaturalError, NaturalKernel, Standard, RADIX};

use crate::traits::NaturalNumber;

/// A natural number stored as base-2^32 limbs, least significant first.
///
/// The most significant limb is never zero; zero has no limbs.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LimbNatural {
    limbs: Vec<u32>,
}

impl LimbNatural {
    /// Create a zero value.
    pub const fn new() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Create from little-endian limbs, trimming high zero limbs.
    pub fn from_limbs(mut limbs: Vec<u32>) -> Self {
        while limbs.last().is_some_and(|x| *x == 0) {
            limbs.pop();
        }
        Self { limbs }
    }

    /// The limbs, least significant first.
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// The canonical digits of this value.
    pub fn to_digits(&self) -> Digits {
        Digits::drain(&mut self.clone())
    }

    /// The value as a `u64`, if it fits.
    pub fn as_u64(&self) -> Option<u64> {
        match self.limbs[..] {
            [] => Some(0),
            [n] => Some(n as u64),
            [n, m] => Some(n as u64 | (m as u64) << 32),
            _ => None,
        }
    }

    fn add_u32(&mut self, mut n: u32) {
        for limb in &mut self.limbs {
            if n == 0 {
                return;
            }
            let (sum, carry) = u32::overflowing_add(*limb, n);
            *limb = sum;
            n = carry as u32;
        }
        if n != 0 {
            self.limbs.push(n);
        }
    }

    fn mul_u32(&mut self, n: u32) {
        let mut carry = 0;
        for limb in &mut self.limbs {
            let total = *limb as u64 * n as u64 + carry;
            *limb = total as u32;
            carry = total >> 32;
        }
        if carry != 0 {
            self.limbs.push(carry as u32);
        }
    }

    /// Divide in place by `d`, returning the remainder.
    fn div_rem_u32(&mut self, d: u32) -> u32 {
        let mut rem = 0u64;
        for limb in self.limbs.iter_mut().rev() {
            let cur = rem << 32 | *limb as u64;
            *limb = (cur / d as u64) as u32;
            rem = cur % d as u64;
        }
        if self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        rem as u32
    }
}

impl NaturalKernel for LimbNatural {
    fn multiply_by_radix(&mut self, digit: Digit) {
        self.mul_u32(RADIX);
        self.add_u32(u32::from(digit));
    }

    fn divide_by_radix(&mut self) -> Digit {
        Digit::from_remainder(self.div_rem_u32(RADIX) as u64)
    }

    fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }
}

impl Standard for LimbNatural {
    fn clear(&mut self) {
        self.limbs.clear();
    }

    fn new_instance(&self) -> Self {
        Self::new()
    }
}

impl NaturalNumber for LimbNatural {}

impl Ord for LimbNatural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for LimbNatural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for LimbNatural {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_digits().hash(state);
    }
}

impl fmt::Debug for LimbNatural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LimbNatural({})", self.to_digits())
    }
}

impl fmt::Display for LimbNatural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_digits(), f)
    }
}

impl From<&Digits> for LimbNatural {
    fn from(digits: &Digits) -> Self {
        let mut n = Self::new();
        digits.replay_into(&mut n);
        n
    }
}

impl FromStr for LimbNatural {
    type Err = NaturalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: Digits = s.parse()?;
        Ok(Self::from(&digits))
    }
}

impl From<u32> for LimbNatural {
    fn from(n: u32) -> Self {
        Self::from_limbs(vec![n])
    }
}

impl From<u64> for LimbNatural {
    fn from(n: u64) -> Self {
        Self::from_limbs(vec![n as u32, (n >> 32) as u32])
    }
}

impl TryFrom<MachineInt> for LimbNatural {
    type Error = NaturalError;

    fn try_from(i: MachineInt) -> Result<Self, Self::Error> {
        u64::try_from(i)
            .map(Self::from)
            .map_err(|_| NaturalError::NegativeValue(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u64_normalizes() {
        assert!(LimbNatural::from(0u64).is_zero());
        assert_eq!(LimbNatural::from(7u64).limbs(), &[7]);
        assert_eq!(LimbNatural::from(1u64 << 32).limbs(), &[0, 1]);
        assert_eq!(LimbNatural::from_limbs(vec![5, 0, 0]).limbs(), &[5]);
    }

    #[test]
    fn test_multiply_by_radix_carries() {
        let mut n = LimbNatural::from(u32::MAX);
        n.multiply_by_radix(Digit::new(9).unwrap());
        assert_eq!(n.as_u64(), Some(u32::MAX as u64 * 10 + 9));
    }

    #[test]
    fn test_divide_by_radix_across_limbs() {
        let mut n = LimbNatural::from(u64::MAX);
        assert_eq!(n.divide_by_radix().get(), 5);
        assert_eq!(n.as_u64(), Some(u64::MAX / 10));
    }

    #[test]
    fn test_divide_by_radix_drops_empty_limb() {
        let mut n = LimbNatural::from(1u64 << 32);
        n.divide_by_radix();
        assert_eq!(n.limbs(), &[429_496_729]);
        let mut small = LimbNatural::from(9u32);
        assert_eq!(small.divide_by_radix().get(), 9);
        assert!(small.is_zero());
    }

    #[test]
    fn test_order() {
        let a = LimbNatural::from(u64::MAX);
        let b = LimbNatural::from(3u32);
        assert!(a > b);
        assert_eq!(b.cmp(&LimbNatural::from(3u64)), Ordering::Equal);
    }

    #[test]
    fn test_parse_and_display() {
        let n: LimbNatural = "18446744073709551616".parse().unwrap();
        assert_eq!(n.limbs(), &[0, 0, 1]);
        assert_eq!(n.to_string(), "18446744073709551616");
        assert!("018".parse::<LimbNatural>().is_err());
        assert_eq!(LimbNatural::new().to_string(), "0");
    }

    #[test]
    fn test_negative_int_rejected() {
        assert_eq!(
            LimbNatural::try_from(-3i64),
            Err(NaturalError::NegativeValue(-3))
        );
    }
}
