#![deny(warnings)]
#![allow(clippy::needless_borrow)]
#![allow(clippy::upper_case_acronyms)]
//! Setup phase of a PLONK backend over Sparse R1CS circuits.
//!
//! [`plonk::setup::setup`] compiles a [`plonk::constraint_system::SparseR1CS`]
//! into the five selector polynomials in canonical basis, the wiring
//! permutation and the two evaluation domains. [`witness`] holds the
//! byte-exact witness codec shared with provers and verifiers.

#[macro_use]
extern crate serde_derive;

/// Module for error handling.
pub mod errors;

/// Module for the PLONK setup.
pub mod plonk;

/// Module for polynomials and the commitment scheme contract.
pub mod poly_commit;

/// Module for witness vectors and assignments.
pub mod witness;
