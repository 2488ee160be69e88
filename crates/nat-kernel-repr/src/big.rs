//! Arbitrary-precision representation backed by [`num_bigint::BigUint`].
//!
//! This is the canonical working representation: the derivation layer
//! decomposes every value into a `BigNatural`, runs the operation here, and
//! replays the result. It implements every operation directly.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use nat_kernel_core::{
    validate_digit_string, Digit, Digits, MachineInt, NaturalError, NaturalKernel, Result,
    Standard, RADIX,
};

use crate::secondary::canonical_of;
use crate::traits::NaturalNumber;

/// A natural number stored as a `BigUint`.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BigNatural {
    value: BigUint,
}

impl BigNatural {
    /// Create a zero value.
    pub fn new() -> Self {
        Self {
            value: BigUint::zero(),
        }
    }

    /// Rebuild a value from its canonical digits.
    pub fn from_digits(digits: &Digits) -> Self {
        let mut n = Self::new();
        digits.replay_into(&mut n);
        n
    }

    /// The canonical digits of this value.
    pub fn to_digits(&self) -> Digits {
        Digits::from_msf(
            self.value
                .to_radix_be(RADIX)
                .into_iter()
                .filter_map(Digit::new),
        )
    }

    /// Borrow the underlying `BigUint`.
    pub fn as_biguint(&self) -> &BigUint {
        &self.value
    }

    /// Unwrap into the underlying `BigUint`.
    pub fn into_biguint(self) -> BigUint {
        self.value
    }

    /// Read an operand, directly if it is a `BigNatural`.
    fn operand(n: &mut dyn NaturalNumber) -> BigUint {
        let direct = n.as_canonical().map(|big| big.value.clone());
        direct.unwrap_or_else(|| canonical_of(n).value)
    }
}

/// `floor(value ^ (1 / r))` by Newton iteration.
///
/// Seeds with `2 ^ (1 + bits(value) / r)`, which is at least the root, and
/// stops at the first step that does not decrease.
fn integer_root(value: &BigUint, r: u32) -> BigUint {
    if value.is_zero() {
        return BigUint::zero();
    }
    let r_big = BigUint::from(r);
    let r_minus_one = BigUint::from(r - 1);

    let mut next = BigUint::one() << (1 + value.bits() / u64::from(r));
    loop {
        let current = next;
        next = (&current * &r_minus_one + value / current.pow(r - 1)) / &r_big;
        if next >= current {
            return current;
        }
    }
}

impl NaturalKernel for BigNatural {
    fn multiply_by_radix(&mut self, digit: Digit) {
        self.value *= RADIX;
        self.value += u32::from(digit);
    }

    fn divide_by_radix(&mut self) -> Digit {
        let radix = BigUint::from(RADIX);
        let rem = &self.value % &radix;
        self.value /= &radix;
        Digit::from_remainder(rem.iter_u64_digits().next().unwrap_or(0))
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}

impl Standard for BigNatural {
    fn clear(&mut self) {
        self.value.set_zero();
    }

    fn new_instance(&self) -> Self {
        Self::new()
    }
}

impl NaturalNumber for BigNatural {
    fn as_canonical(&self) -> Option<&BigNatural> {
        Some(self)
    }

    fn as_canonical_mut(&mut self) -> Option<&mut BigNatural> {
        Some(self)
    }

    fn add(&mut self, n: &mut dyn NaturalNumber) {
        self.value += Self::operand(n);
    }

    fn subtract(&mut self, n: &mut dyn NaturalNumber) -> Result<()> {
        let operand = Self::operand(n);
        if operand > self.value {
            tracing::debug!(minuend = %self.value, subtrahend = %operand, "rejected negative subtraction");
            return Err(NaturalError::NegativeResult);
        }
        self.value -= operand;
        Ok(())
    }

    fn multiply(&mut self, n: &mut dyn NaturalNumber) {
        self.value *= Self::operand(n);
    }

    fn divide(&mut self, n: &mut dyn NaturalNumber) -> Result<()> {
        let divisor = Self::operand(n);
        if divisor.is_zero() {
            tracing::debug!(dividend = %self.value, "rejected division by zero");
            return Err(NaturalError::DivisionByZero);
        }
        self.value /= divisor;
        Ok(())
    }

    fn divide_with_remainder(
        &mut self,
        n: &mut dyn NaturalNumber,
        remainder: &mut dyn NaturalNumber,
    ) -> Result<()> {
        let divisor = Self::operand(n);
        if divisor.is_zero() {
            tracing::debug!(dividend = %self.value, "rejected division by zero");
            return Err(NaturalError::DivisionByZero);
        }
        let mut rem = BigNatural::from(&self.value % &divisor);
        self.value /= divisor;
        remainder.transfer_from_natural(&mut rem);
        Ok(())
    }

    fn increment(&mut self) {
        self.value += 1u32;
    }

    fn decrement(&mut self) -> Result<()> {
        if self.value.is_zero() {
            tracing::debug!("rejected decrement of zero");
            return Err(NaturalError::NegativeResult);
        }
        self.value -= 1u32;
        Ok(())
    }

    fn power(&mut self, p: u32) {
        self.value = self.value.pow(p);
    }

    fn root(&mut self, r: u32) -> Result<()> {
        if r < 2 {
            tracing::debug!(r, "rejected root index");
            return Err(NaturalError::InvalidRootIndex(r));
        }
        self.value = integer_root(&self.value, r);
        Ok(())
    }

    fn can_convert_to_int(&mut self) -> bool {
        self.value.to_i64().is_some()
    }

    fn to_int(&mut self) -> Result<MachineInt> {
        self.value.to_i64().ok_or(NaturalError::Overflow)
    }

    fn set_from_int(&mut self, i: MachineInt) -> Result<()> {
        let value = u64::try_from(i).map_err(|_| NaturalError::NegativeValue(i))?;
        self.value = BigUint::from(value);
        Ok(())
    }

    fn set_from_string(&mut self, s: &str) -> Result<()> {
        *self = s.parse()?;
        Ok(())
    }

    fn copy_from(&mut self, n: &mut dyn NaturalNumber) {
        self.value = Self::operand(n);
    }

    fn transfer_from_natural(&mut self, source: &mut dyn NaturalNumber) {
        if let Some(big) = source.as_canonical_mut() {
            self.value = std::mem::take(&mut big.value);
            return;
        }
        let digits = Digits::drain(source);
        *self = Self::from_digits(&digits);
    }

    fn digits(&mut self) -> Digits {
        self.to_digits()
    }

    fn compare(&mut self, other: &mut dyn NaturalNumber) -> Ordering {
        self.value.cmp(&Self::operand(other))
    }
}

impl Hash for BigNatural {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_digits().hash(state);
    }
}

impl fmt::Debug for BigNatural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNatural({})", self.value)
    }
}

impl fmt::Display for BigNatural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}

impl FromStr for BigNatural {
    type Err = NaturalError;

    fn from_str(s: &str) -> Result<Self> {
        let s = validate_digit_string(s)?;
        let value = s
            .parse::<BigUint>()
            .map_err(|_| NaturalError::MalformedString(s.to_owned()))?;
        Ok(Self { value })
    }
}

impl TryFrom<String> for BigNatural {
    type Error = NaturalError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<BigNatural> for String {
    fn from(n: BigNatural) -> String {
        n.to_string()
    }
}

impl From<BigUint> for BigNatural {
    fn from(value: BigUint) -> Self {
        Self { value }
    }
}

impl From<BigNatural> for BigUint {
    fn from(n: BigNatural) -> BigUint {
        n.value
    }
}

impl From<u32> for BigNatural {
    fn from(n: u32) -> Self {
        Self {
            value: BigUint::from(n),
        }
    }
}

impl From<u64> for BigNatural {
    fn from(n: u64) -> Self {
        Self {
            value: BigUint::from(n),
        }
    }
}

impl TryFrom<MachineInt> for BigNatural {
    type Error = NaturalError;

    fn try_from(i: MachineInt) -> Result<Self> {
        let mut n = Self::new();
        n.set_from_int(i)?;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigNatural {
        s.parse().unwrap()
    }

    fn digit(d: u8) -> Digit {
        Digit::new(d).unwrap()
    }

    #[test]
    fn test_multiply_by_radix() {
        let mut n = BigNatural::from(34u32);
        n.multiply_by_radix(digit(7));
        assert_eq!(n, BigNatural::from(347u32));
    }

    #[test]
    fn test_divide_by_radix() {
        let mut n = BigNatural::from(347u32);
        assert_eq!(n.divide_by_radix(), digit(7));
        assert_eq!(n, BigNatural::from(34u32));
        n.multiply_by_radix(digit(7));
        assert_eq!(n, BigNatural::from(347u32));
    }

    #[test]
    fn test_divide_by_radix_zero() {
        let mut n = BigNatural::new();
        assert_eq!(n.divide_by_radix(), Digit::ZERO);
        assert!(n.is_zero());
    }

    #[test]
    fn test_add_leaves_operand() {
        let mut a = BigNatural::from(8u32);
        let mut b = BigNatural::from(5u32);
        a.add(&mut b);
        assert_eq!(a, BigNatural::from(13u32));
        assert_eq!(b, BigNatural::from(5u32));
    }

    #[test]
    fn test_subtract() {
        let mut a = BigNatural::from(8u32);
        let mut b = BigNatural::from(5u32);
        a.subtract(&mut b).unwrap();
        assert_eq!(a, BigNatural::from(3u32));
        assert_eq!(b, BigNatural::from(5u32));
    }

    #[test]
    fn test_subtract_larger_fails_unchanged() {
        let mut a = BigNatural::from(5u32);
        let mut b = BigNatural::from(8u32);
        assert_eq!(a.subtract(&mut b), Err(NaturalError::NegativeResult));
        assert_eq!(a, BigNatural::from(5u32));
    }

    #[test]
    fn test_multiply_large() {
        let mut a = big("123456789012345678901234567890");
        let mut b = big("987654321098765432109876543210");
        a.multiply(&mut b);
        assert_eq!(
            a,
            big("121932631137021795226185032733622923332237463801111263526900")
        );
    }

    #[test]
    fn test_divide() {
        let mut a = BigNatural::from(100u32);
        let mut b = BigNatural::from(7u32);
        a.divide(&mut b).unwrap();
        assert_eq!(a, BigNatural::from(14u32));
    }

    #[test]
    fn test_divide_by_zero_fails_unchanged() {
        let mut a = BigNatural::from(100u32);
        let mut zero = BigNatural::new();
        assert_eq!(a.divide(&mut zero), Err(NaturalError::DivisionByZero));
        assert_eq!(a, BigNatural::from(100u32));
    }

    #[test]
    fn test_divide_with_remainder() {
        let mut a = BigNatural::from(100u32);
        let mut b = BigNatural::from(7u32);
        let mut rem = BigNatural::from(99u32);
        a.divide_with_remainder(&mut b, &mut rem).unwrap();
        assert_eq!(a, BigNatural::from(14u32));
        assert_eq!(rem, BigNatural::from(2u32));
        assert_eq!(b, BigNatural::from(7u32));
    }

    #[test]
    fn test_increment_decrement() {
        let mut n = BigNatural::from(9u32);
        n.increment();
        assert_eq!(n, BigNatural::from(10u32));
        n.decrement().unwrap();
        assert_eq!(n, BigNatural::from(9u32));

        let mut zero = BigNatural::new();
        assert_eq!(zero.decrement(), Err(NaturalError::NegativeResult));
        assert!(zero.is_zero());
    }

    #[test]
    fn test_power_commits() {
        let mut n = BigNatural::from(2u32);
        n.power(100);
        assert_eq!(n, big("1267650600228229401496703205376"));

        let mut n = BigNatural::from(12u32);
        n.power(0);
        assert_eq!(n, BigNatural::from(1u32));
    }

    #[test]
    fn test_root() {
        let mut n = BigNatural::from(64u32);
        n.root(2).unwrap();
        assert_eq!(n, BigNatural::from(8u32));

        let mut n = BigNatural::from(64u32);
        n.root(3).unwrap();
        assert_eq!(n, BigNatural::from(4u32));

        let mut n = BigNatural::from(63u32);
        n.root(2).unwrap();
        assert_eq!(n, BigNatural::from(7u32));
    }

    #[test]
    fn test_root_small_values() {
        for r in 2..6 {
            let mut zero = BigNatural::new();
            zero.root(r).unwrap();
            assert!(zero.is_zero());

            let mut one = BigNatural::from(1u32);
            one.root(r).unwrap();
            assert_eq!(one, BigNatural::from(1u32));
        }
    }

    #[test]
    fn test_root_large() {
        let mut n = big("1267650600228229401496703205376");
        n.root(10).unwrap();
        assert_eq!(n, BigNatural::from(1024u32));
    }

    #[test]
    fn test_root_invalid_index() {
        let mut n = BigNatural::from(64u32);
        assert_eq!(n.root(1), Err(NaturalError::InvalidRootIndex(1)));
        assert_eq!(n.root(0), Err(NaturalError::InvalidRootIndex(0)));
        assert_eq!(n, BigNatural::from(64u32));
    }

    #[test]
    fn test_int_conversion() {
        let mut n = BigNatural::from(i64::MAX as u64);
        assert!(n.can_convert_to_int());
        assert_eq!(n.to_int(), Ok(i64::MAX));

        n.increment();
        assert!(!n.can_convert_to_int());
        assert_eq!(n.to_int(), Err(NaturalError::Overflow));
    }

    #[test]
    fn test_set_from_int() {
        let mut n = BigNatural::from(3u32);
        n.set_from_int(42).unwrap();
        assert_eq!(n, BigNatural::from(42u32));
        assert_eq!(n.set_from_int(-1), Err(NaturalError::NegativeValue(-1)));
        assert_eq!(n, BigNatural::from(42u32));
    }

    #[test]
    fn test_set_from_string() {
        let mut n = BigNatural::from(3u32);
        assert!(n.can_set_from_string("123"));
        n.set_from_string("123").unwrap();
        assert_eq!(n, BigNatural::from(123u32));
        assert!(!n.can_set_from_string("00"));
        assert_eq!(
            n.set_from_string("00"),
            Err(NaturalError::MalformedString("00".into()))
        );
        assert_eq!(n, BigNatural::from(123u32));
    }

    #[test]
    fn test_copy_from() {
        let mut dst = BigNatural::from(3u32);
        let mut src = BigNatural::from(7u32);
        dst.copy_from(&mut src);
        assert_eq!(dst, BigNatural::from(7u32));
        assert_eq!(src, BigNatural::from(7u32));
    }

    #[test]
    fn test_transfer_from() {
        let mut a = BigNatural::from(11u32);
        let mut b = BigNatural::from(2u32);
        b.transfer_from(&mut a);
        assert_eq!(b, BigNatural::from(11u32));
        assert!(a.is_zero());

        b.transfer_from_natural(&mut a);
        assert!(b.is_zero());
    }

    #[test]
    fn test_display_and_digits() {
        assert_eq!(BigNatural::new().to_string(), "0");
        assert_eq!(BigNatural::new().to_digits(), Digits::ZERO);
        assert_eq!(BigNatural::from(90210u32).to_digits().to_string(), "90210");
        assert_eq!(format!("{:?}", BigNatural::from(5u32)), "BigNatural(5)");
    }

    #[test]
    fn test_serde_string() {
        let n = big("340282366920938463463374607431768211456");
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "\"340282366920938463463374607431768211456\"");
        let back: BigNatural = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);
        assert!(serde_json::from_str::<BigNatural>("\"-5\"").is_err());
    }
}
