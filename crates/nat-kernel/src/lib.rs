//! # Nat Kernel
//!
//! Non-negative arbitrary-precision integers whose every advanced operation
//! is derived from three kernel primitives.
//!
//! ## Overview
//!
//! The kernel is deliberately tiny:
//!
//! - **multiply_by_radix**: `n = n * 10 + d`
//! - **divide_by_radix**: `n = n / 10`, returning `n % 10`
//! - **is_zero**
//!
//! Together with a lifecycle contract (clear, new instance, transfer), these
//! are enough to take any value apart into its decimal digits and rebuild it.
//! The derivation layer uses that to implement addition, subtraction,
//! multiplication, division, powers, integer roots, and conversions for any
//! representation, without knowing how the value is stored.
//!
//! ## Key Concepts
//!
//! - **Kernel**: the three primitives. The only way generic code touches a value.
//! - **Representation**: a concrete storage strategy. `BigNatural` (big integer),
//!   `LimbNatural` (machine words), `DigitNatural` (digit list).
//! - **Canonical form**: `BigNatural`, where derived operations actually run.
//! - **Transfer**: a move. The source is left at zero.
//!
//! ## Usage
//!
//! ```rust
//! use nat_kernel::{DigitNatural, LimbNatural, NaturalError, NaturalNumber};
//!
//! let mut n = DigitNatural::from(64u32);
//! n.root(3).unwrap();
//! assert_eq!(n.to_string(), "4");
//!
//! let mut small = LimbNatural::from(3u32);
//! let mut large = LimbNatural::from(8u32);
//! assert_eq!(small.subtract(&mut large), Err(NaturalError::NegativeResult));
//! assert_eq!(small, LimbNatural::from(3u32));
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `nat_kernel::core` - Kernel and lifecycle traits, digits, errors
//! - `nat_kernel::repr` - Representations and the derivation layer

// Re-export component crates
pub use nat_kernel_core as core;
pub use nat_kernel_repr as repr;

// Re-export commonly used types
pub use nat_kernel_core::{
    can_set_from_string, Digit, Digits, MachineInt, NaturalError, NaturalKernel, Result,
    Standard, RADIX,
};
pub use nat_kernel_repr::{BigNatural, DigitNatural, LimbNatural, NaturalNumber};
