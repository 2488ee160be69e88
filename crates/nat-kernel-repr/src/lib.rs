//! # Nat Kernel Repr
//!
//! Natural number representations and the representation-independent
//! derivation layer.
//!
//! ## Overview
//!
//! The [`NaturalNumber`] trait carries the full operation set. Its provided
//! methods implement every operation using only the kernel primitives, so a
//! representation that implements [`NaturalKernel`] and [`Standard`] gets
//! the rest for free. [`BigNatural`] is the canonical representation and
//! overrides everything with direct arithmetic.
//!
//! ## Key Types
//!
//! - [`NaturalNumber`] - The operation set, with the derivation layer as provided methods
//! - [`BigNatural`] - `BigUint` storage, direct arithmetic, canonical working form
//! - [`LimbNatural`] - `u32` limbs, kernel + lifecycle only
//! - [`DigitNatural`] - Decimal digit deque, kernel + lifecycle only
//!
//! ## Usage
//!
//! ```rust
//! use nat_kernel_repr::{BigNatural, LimbNatural, NaturalNumber};
//!
//! let mut a = LimbNatural::from(8u32);
//! let mut b = BigNatural::from(5u32);
//! a.add(&mut b);
//!
//! assert_eq!(a, LimbNatural::from(13u32));
//! assert_eq!(b, BigNatural::from(5u32));
//! assert_eq!(a, BigNatural::from(13u32));
//! ```
//!
//! ## Design Notes
//!
//! - **Representation preserved**: derived operations change the receiver's
//!   magnitude, never its representation
//! - **Non-destructive reads**: operands are taken apart and rebuilt, so they
//!   hold their value on return
//! - **Equality and hashing** go through the canonical digit form and agree
//!   across representations

pub mod big;
pub mod digit;
pub mod limb;
pub mod secondary;
pub mod traits;

pub use big::BigNatural;
pub use digit::DigitNatural;
pub use limb::LimbNatural;
pub use traits::NaturalNumber;

pub use nat_kernel_core::{NaturalKernel, Standard};

/// Magnitude equality between two different representations.
macro_rules! cross_eq {
    ($($a:ty => $b:ty),* $(,)?) => {
        $(
            impl PartialEq<$b> for $a {
                fn eq(&self, other: &$b) -> bool {
                    self.to_digits() == other.to_digits()
                }
            }
        )*
    };
}

cross_eq! {
    BigNatural => LimbNatural,
    BigNatural => DigitNatural,
    LimbNatural => BigNatural,
    LimbNatural => DigitNatural,
    DigitNatural => BigNatural,
    DigitNatural => LimbNatural,
}
