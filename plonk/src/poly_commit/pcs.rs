use crate::errors::Result;
use crate::poly_commit::field_polynomial::FpPolynomial;
use serde::{Deserialize, Serialize};
use sparse_plonk_algebra::traits::Scalar;
use std::fmt::Debug;

/// The trait for help serialize to bytes,
/// implement by polynomial commitment.
pub trait ToBytes {
    /// Convert to bytes.
    fn to_bytes(&self) -> Vec<u8>;
}

/// Trait for polynomial commitment scheme.
///
/// Setup only carries a scheme through to its output; provers call
/// [`PolyComScheme::commit`] on the canonical-basis selector polynomials.
pub trait PolyComScheme: Sized {
    /// Type of prime field.
    type Field: Scalar;

    /// Type of commitment produces.
    type Commitment: ToBytes
        + Debug
        + PartialEq
        + Eq
        + Clone
        + Serialize
        + for<'de> Deserialize<'de>;

    /// Return the maximal degree supported.
    fn max_degree(&self) -> usize;

    /// Commits to the polynomial, commitment is binding.
    fn commit(&self, polynomial: &FpPolynomial<Self::Field>) -> Result<Self::Commitment>;
}
