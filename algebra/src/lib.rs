//! Field and group abstractions shared by the sparse PLONK setup crates.
//!
//! The setup logic only relies on the [`traits::Scalar`] interface; the
//! BN254 instantiation lives in [`bn254`].
#![warn(missing_docs)]
#![allow(clippy::upper_case_acronyms)]

#[macro_use]
extern crate serde_derive;

/// Module for the BN254 curve.
pub mod bn254;

/// Module for error handling.
pub mod errors;

/// Module for the prelude.
pub mod prelude;

/// Module for test rng.
pub mod rand_helper;

/// Module for serialization of scalars and group elements.
pub mod serialization;

/// Module for traits.
pub mod traits;

/// Module for utils.
pub mod utils;

#[doc(hidden)]
pub use ark_std::{borrow, cmp, fmt, hash, iter, marker, ops, rand, One, UniformRand, Zero};
