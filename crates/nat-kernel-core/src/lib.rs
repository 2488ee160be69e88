//! # Nat Kernel Core
//!
//! Pure primitives for natural numbers: the radix kernel, the lifecycle
//! contract, and the canonical digit form.
//!
//! This crate contains no arithmetic storage. It defines what every
//! representation must provide and the representation-independent tools
//! built on top of that.
//!
//! ## Key Types
//!
//! - [`NaturalKernel`] - The three primitives: multiply-by-radix, divide-by-radix, zero-test
//! - [`Standard`] - Lifecycle: clear, new instance, transfer
//! - [`Digit`] - A value proven to be below [`RADIX`]
//! - [`Digits`] - The canonical base-10 digit form of a magnitude
//! - [`NaturalError`] - Precondition violations
//!
//! ## Canonical Digit Form
//!
//! ```rust
//! use nat_kernel_core::Digits;
//!
//! let digits: Digits = "347".parse().unwrap();
//! assert_eq!(digits.len(), 3);
//! assert_eq!(digits.to_string(), "347");
//! ```

pub mod canonical;
pub mod error;
pub mod kernel;
pub mod types;
pub mod validation;

pub use canonical::Digits;
pub use error::{NaturalError, Result};
pub use kernel::{NaturalKernel, Standard};
pub use types::{Digit, MachineInt, RADIX};
pub use validation::{can_set_from_string, validate_digit_string};
