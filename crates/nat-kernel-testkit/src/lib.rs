//! # Nat Kernel Testkit
//!
//! Testing utilities for natural number representations.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known operations with expected results, checked for every representation pairing
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: The same value built in every representation
//!
//! ## Golden Vectors
//!
//! Every vector must give the same answer whatever the receiver and operand
//! representations are:
//!
//! ```rust
//! use nat_kernel_testkit::vectors::verify_all_vectors;
//!
//! for (name, passed, detail) in verify_all_vectors() {
//!     assert!(passed, "{}: {}", name, detail);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use nat_kernel_testkit::generators::{natural_from_params, NaturalParams};
//!
//! proptest! {
//!     #[test]
//!     fn renders_what_it_parsed(params: NaturalParams) {
//!         let mut n = natural_from_params(&params);
//!         prop_assert_eq!(n.to_decimal_string(), params.value);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use nat_kernel_testkit::fixtures::all_pairings;
//!
//! for mut pairing in all_pairings("12", "30") {
//!     pairing.receiver.add(&mut *pairing.operand);
//!     assert_eq!(pairing.receiver.to_decimal_string(), "42", "{}", pairing.label());
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{all_pairings, all_representations, natural, Pairing, Representation};
pub use generators::{natural_from_params, NaturalParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector, Operation};
