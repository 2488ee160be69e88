//! The decompose / rebuild bridge used by the derivation layer.
//!
//! These helpers only touch their arguments through [`NaturalKernel`] and
//! [`Standard`], so they work on every representation, trait objects
//! included.

use nat_kernel_core::{Digits, NaturalKernel, Standard};

use crate::big::BigNatural;

/// Materialize `n` as a canonical working value.
///
/// `n` is taken apart digit by digit and then replayed, so it holds its
/// original value on return.
pub fn canonical_of<K: NaturalKernel + ?Sized>(n: &mut K) -> BigNatural {
    let digits = Digits::decompose(n);
    tracing::trace!(digits = digits.len(), "decomposed into canonical form");
    BigNatural::from_digits(&digits)
}

/// Replace `target`'s value with `value`, keeping `target`'s representation.
pub fn reassemble<K: NaturalKernel + Standard + ?Sized>(target: &mut K, value: BigNatural) {
    let digits = value.to_digits();
    target.clear();
    digits.replay_into(target);
}
