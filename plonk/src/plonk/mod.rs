//! Setup of PLONK over a Sparse R1CS.

/// Module for the evaluation domain and its transforms.
pub mod domain;

/// Module for the constraint system.
pub mod constraint_system;

/// Module for the copy-constraint permutation.
pub mod permutation;

/// Module for setup.
pub mod setup;
