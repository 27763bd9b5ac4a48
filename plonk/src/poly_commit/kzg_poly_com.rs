use crate::errors::{PlonkError, Result};
use crate::poly_commit::{
    field_polynomial::FpPolynomial,
    pcs::{PolyComScheme, ToBytes},
};
use sparse_plonk_algebra::prelude::*;

/// KZG commitment scheme over the `Group`.
#[derive(Clone, Debug, Serialize, Deserialize, Eq, PartialEq, Default)]
pub struct KZGCommitment<G>(pub G);

impl<G: Group> ToBytes for KZGCommitment<G> {
    fn to_bytes(&self) -> Vec<u8> {
        self.0.to_compressed_bytes()
    }
}

/// Commit key of the KZG scheme: `[G, s*G, s^2*G, ..., s^d*G]`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct KZGCommitmentScheme<G> {
    /// public parameter about G1.
    pub public_parameter_group_1: Vec<G>,
}

impl<G: Group> KZGCommitmentScheme<G> {
    /// Create a new instance of a KZG polynomial commitment scheme.
    /// `max_degree` - max degree of the polynomial,
    /// `prng` - pseudo-random generator.
    pub fn new<R: CryptoRng + RngCore>(max_degree: usize, prng: &mut R) -> KZGCommitmentScheme<G> {
        let s = G::ScalarType::random(prng);

        let mut public_parameter_group_1: Vec<G> = Vec::with_capacity(max_degree + 1);

        let mut elem_g1 = G::get_base();

        for _ in 0..=max_degree {
            public_parameter_group_1.push(elem_g1);
            elem_g1 = elem_g1.mul(&s);
        }

        KZGCommitmentScheme {
            public_parameter_group_1,
        }
    }
}

impl<G: Group> PolyComScheme for KZGCommitmentScheme<G> {
    type Field = G::ScalarType;
    type Commitment = KZGCommitment<G>;

    fn max_degree(&self) -> usize {
        self.public_parameter_group_1.len().saturating_sub(1)
    }

    fn commit(&self, polynomial: &FpPolynomial<G::ScalarType>) -> Result<Self::Commitment> {
        let coefs = polynomial.get_coefs_ref();

        if coefs.len() > self.public_parameter_group_1.len() {
            return Err(PlonkError::DegreeError);
        }

        let coefs_poly_scalars: Vec<&G::ScalarType> = coefs.iter().collect();
        let pub_param_group_1_as_ref: Vec<&G> = self
            .public_parameter_group_1
            .iter()
            .take(coefs.len())
            .collect();

        let commitment_value = G::multi_exp(
            &coefs_poly_scalars[..],
            &pub_param_group_1_as_ref[..],
        );

        Ok(KZGCommitment(commitment_value))
    }
}
