//! The canonical digit form.
//!
//! Any magnitude, whatever its storage, can be taken apart into its base-10
//! digits with [`NaturalKernel::divide_by_radix`] and rebuilt with
//! [`NaturalKernel::multiply_by_radix`]. [`Digits`] is that sequence, most
//! significant first, with no leading zeros; zero is the empty sequence.
//!
//! This is the bridge used to move values between representations, and the
//! basis for representation-independent equality, hashing and rendering.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::str::FromStr;

use crate::error::NaturalError;
use crate::kernel::NaturalKernel;
use crate::types::Digit;
use crate::validation::validate_digit_string;

/// Base-10 digits of a magnitude, most significant first.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Digits(Vec<Digit>);

impl Digits {
    /// The digits of zero.
    pub const ZERO: Self = Self(Vec::new());

    /// Build from most-significant-first digits, dropping leading zeros.
    pub fn from_msf(digits: impl IntoIterator<Item = Digit>) -> Self {
        let digits: Vec<Digit> = digits
            .into_iter()
            .skip_while(|d| d.is_zero())
            .collect();
        Self(digits)
    }

    /// Take `n` apart through the kernel, leaving it at zero.
    pub fn drain<K: NaturalKernel + ?Sized>(n: &mut K) -> Self {
        let mut digits = Vec::new();
        while !n.is_zero() {
            digits.push(n.divide_by_radix());
        }
        digits.reverse();
        Self(digits)
    }

    /// Take `n` apart through the kernel and put it back together.
    ///
    /// `n` is mutated during the call but holds its original value on return.
    pub fn decompose<K: NaturalKernel + ?Sized>(n: &mut K) -> Self {
        let digits = Self::drain(n);
        digits.replay_into(n);
        digits
    }

    /// Feed the digits into `n` through `multiply_by_radix`.
    ///
    /// Rebuilds the value exactly when `n` starts at zero; otherwise the
    /// digits are appended below `n`'s existing value.
    pub fn replay_into<K: NaturalKernel + ?Sized>(&self, n: &mut K) {
        for &digit in &self.0 {
            n.multiply_by_radix(digit);
        }
    }

    /// Whether these are the digits of zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of significant digits (zero has none).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Same as [`Digits::is_zero`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The digits, most significant first.
    pub fn as_slice(&self) -> &[Digit] {
        &self.0
    }

    /// Iterate most significant first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Digit> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }
}

/// Numeric order: more digits is larger, equal lengths compare digit-wise.
impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digits({})", self)
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_char('0');
        }
        for digit in &self.0 {
            f.write_char(digit.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Digits {
    type Err = NaturalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = validate_digit_string(s)?;
        Ok(Self::from_msf(s.chars().filter_map(Digit::from_char)))
    }
}

impl TryFrom<String> for Digits {
    type Error = NaturalError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Digits> for String {
    fn from(digits: Digits) -> String {
        digits.to_string()
    }
}

impl From<u64> for Digits {
    fn from(mut n: u64) -> Self {
        let mut digits = Vec::new();
        while n != 0 {
            digits.push(Digit::from_remainder(n));
            n /= 10;
        }
        digits.reverse();
        Self(digits)
    }
}
