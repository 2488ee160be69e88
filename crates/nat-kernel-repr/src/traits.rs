//! NaturalNumber trait: the full operation set of a natural number.
//!
//! Every advanced operation has a provided implementation written only in
//! terms of [`NaturalKernel`] and [`Standard`]. A representation that
//! implements the kernel and lifecycle gets the whole trait for free with
//! an empty `impl NaturalNumber for ... {}`; a representation with faster
//! direct arithmetic overrides what it can.

use std::cmp::Ordering;

use nat_kernel_core::{validation, Digits, MachineInt, NaturalKernel, Result, Standard};

use crate::big::BigNatural;
use crate::secondary::{canonical_of, reassemble};

/// A natural number of any representation.
///
/// Operands are taken as `&mut dyn NaturalNumber` because reading a value
/// through the kernel takes it apart. Every operand holds its original value
/// again when the call returns, except the source of
/// [`transfer_from_natural`](NaturalNumber::transfer_from_natural) and
/// explicit output parameters.
///
/// # Design Notes
///
/// - **Derived path**: decompose `self` and the operand into the canonical
///   [`BigNatural`] form, run the operation there, and replay the result
///   into `self`, whose representation is unchanged.
/// - **No partial commits**: a failed operation returns an error before the
///   result is replayed, so the receiver keeps its prior value.
/// - **Capability**: [`as_canonical`](NaturalNumber::as_canonical) lets
///   [`BigNatural`] read a sibling `BigNatural` directly. The provided
///   methods never call it.
pub trait NaturalNumber: NaturalKernel + Standard {
    // ─────────────────────────────────────────────────────────────────────────
    // Capability
    // ─────────────────────────────────────────────────────────────────────────

    /// This value as the canonical representation, if it is one.
    fn as_canonical(&self) -> Option<&BigNatural> {
        None
    }

    /// Mutable form of [`as_canonical`](NaturalNumber::as_canonical).
    fn as_canonical_mut(&mut self) -> Option<&mut BigNatural> {
        None
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────

    /// `self = self + n`.
    fn add(&mut self, n: &mut dyn NaturalNumber) {
        let mut operand = canonical_of(n);
        let mut working = canonical_of(self);
        working.add(&mut operand);
        reassemble(self, working);
    }

    /// `self = self - n`.
    ///
    /// Fails with `NegativeResult` if `n > self`.
    fn subtract(&mut self, n: &mut dyn NaturalNumber) -> Result<()> {
        let mut operand = canonical_of(n);
        let mut working = canonical_of(self);
        working.subtract(&mut operand)?;
        reassemble(self, working);
        Ok(())
    }

    /// `self = self * n`.
    fn multiply(&mut self, n: &mut dyn NaturalNumber) {
        let mut operand = canonical_of(n);
        let mut working = canonical_of(self);
        working.multiply(&mut operand);
        reassemble(self, working);
    }

    /// `self = self / n`, rounding down.
    ///
    /// Fails with `DivisionByZero` if `n` is zero.
    fn divide(&mut self, n: &mut dyn NaturalNumber) -> Result<()> {
        let mut operand = canonical_of(n);
        let mut working = canonical_of(self);
        working.divide(&mut operand)?;
        reassemble(self, working);
        Ok(())
    }

    /// `self = self / n`, with `self % n` moved into `remainder`.
    ///
    /// `remainder` keeps its representation; its old value is discarded.
    fn divide_with_remainder(
        &mut self,
        n: &mut dyn NaturalNumber,
        remainder: &mut dyn NaturalNumber,
    ) -> Result<()> {
        let mut operand = canonical_of(n);
        let mut working = canonical_of(self);
        let mut rem = BigNatural::new();
        working.divide_with_remainder(&mut operand, &mut rem)?;
        reassemble(self, working);
        reassemble(remainder, rem);
        Ok(())
    }

    /// `self = self + 1`.
    fn increment(&mut self) {
        let mut working = canonical_of(self);
        working.increment();
        reassemble(self, working);
    }

    /// `self = self - 1`.
    ///
    /// Fails with `NegativeResult` if `self` is zero.
    fn decrement(&mut self) -> Result<()> {
        let mut working = canonical_of(self);
        working.decrement()?;
        reassemble(self, working);
        Ok(())
    }

    /// `self = self ^ p`.
    fn power(&mut self, p: u32) {
        let mut working = canonical_of(self);
        working.power(p);
        reassemble(self, working);
    }

    /// `self = floor(self ^ (1 / r))`.
    ///
    /// Fails with `InvalidRootIndex` if `r < 2`.
    fn root(&mut self, r: u32) -> Result<()> {
        let mut working = canonical_of(self);
        working.root(r)?;
        reassemble(self, working);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether the value fits in a [`MachineInt`].
    fn can_convert_to_int(&mut self) -> bool {
        canonical_of(self).can_convert_to_int()
    }

    /// The value as a [`MachineInt`].
    ///
    /// Fails with `Overflow` unless [`can_convert_to_int`](NaturalNumber::can_convert_to_int).
    fn to_int(&mut self) -> Result<MachineInt> {
        canonical_of(self).to_int()
    }

    /// Replace the value with `i`.
    ///
    /// Fails with `NegativeValue` if `i < 0`.
    fn set_from_int(&mut self, i: MachineInt) -> Result<()> {
        let mut working = BigNatural::new();
        working.set_from_int(i)?;
        reassemble(self, working);
        Ok(())
    }

    /// Whether `s` is accepted by [`set_from_string`](NaturalNumber::set_from_string).
    fn can_set_from_string(&self, s: &str) -> bool {
        validation::can_set_from_string(s)
    }

    /// Replace the value with the one `s` spells.
    ///
    /// Fails with `MalformedString` unless
    /// [`can_set_from_string`](NaturalNumber::can_set_from_string).
    fn set_from_string(&mut self, s: &str) -> Result<()> {
        let mut working = BigNatural::new();
        working.set_from_string(s)?;
        reassemble(self, working);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Value movement
    // ─────────────────────────────────────────────────────────────────────────

    /// Make `self` equal to `n`, leaving `n` unchanged.
    fn copy_from(&mut self, n: &mut dyn NaturalNumber) {
        let copy = canonical_of(n);
        reassemble(self, copy);
    }

    /// Move `source`'s value into `self`, leaving `source` at zero.
    ///
    /// Works across representations. The two must not alias, which the
    /// borrow checker already guarantees.
    fn transfer_from_natural(&mut self, source: &mut dyn NaturalNumber) {
        let digits = Digits::drain(source);
        self.clear();
        digits.replay_into(self);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Observation
    // ─────────────────────────────────────────────────────────────────────────

    /// The canonical digit form of the value.
    fn digits(&mut self) -> Digits {
        Digits::decompose(self)
    }

    /// Whether `self` and `other` have the same magnitude.
    fn equals(&mut self, other: &mut dyn NaturalNumber) -> bool {
        self.digits() == other.digits()
    }

    /// Numeric comparison of `self` against `other`.
    fn compare(&mut self, other: &mut dyn NaturalNumber) -> Ordering {
        self.digits().cmp(&other.digits())
    }

    /// Canonical decimal rendering, `"0"` for zero.
    fn to_decimal_string(&mut self) -> String {
        self.digits().to_string()
    }
}
