use crate::errors::Result;
use crate::plonk::{
    constraint_system::SparseR1CS,
    domain::{bit_reverse, Decimation, EvalDomain},
    permutation::build_permutation,
};
use crate::poly_commit::{field_polynomial::FpPolynomial, pcs::PolyComScheme};
use ark_std::{end_timer, start_timer};
use sparse_plonk_algebra::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Number of cosets (as a power of two) of the domain the selectors are interpolated on.
pub const DOMAIN_NUM_DEPTH: usize = 2;
/// Number of cosets (as a power of two) of the larger domain used by the quotient.
pub const DOMAIN_H_DEPTH: usize = 1;

/// The public data derived from a circuit, before any commitment is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicRawParams<S, F> {
    /// The commitment scheme provers will use on the selectors.
    pub commitment_scheme: S,
    /// The left selector, in canonical basis.
    pub ql: FpPolynomial<F>,
    /// The right selector.
    pub qr: FpPolynomial<F>,
    /// The multiplication selector.
    pub qm: FpPolynomial<F>,
    /// The output selector.
    pub qo: FpPolynomial<F>,
    /// The constant selector.
    pub qk: FpPolynomial<F>,
    /// The domain the rows are interpolated on.
    pub domain_num: EvalDomain<F>,
    /// A domain of twice the number of rows.
    pub domain_h: EvalDomain<F>,
    /// The copy-constraint permutation over `3 * domain_num.cardinality` positions.
    pub permutation: Vec<usize>,
}

/// Public setup data over a particular polynomial commitment scheme.
pub type PublicRaw<PCS> = PublicRawParams<PCS, <PCS as PolyComScheme>::Field>;

impl<S, F: Scalar> PublicRawParams<S, F> {
    /// Return the five selectors in the order `ql, qr, qm, qo, qk`.
    pub fn selectors(&self) -> [&FpPolynomial<F>; 5] {
        [&self.ql, &self.qr, &self.qm, &self.qo, &self.qk]
    }

    /// Evaluate the selectors back over `domain_num`, one vector per
    /// selector, each in row order.
    pub fn selector_evals(&self) -> Vec<Vec<F>> {
        self.selectors()
            .iter()
            .map(|q| {
                let mut evals = q.coefs.clone();
                evals.resize(self.domain_num.cardinality, F::zero());
                bit_reverse(&mut evals);
                self.domain_num.fft(&mut evals, Decimation::Dit, 0);
                evals
            })
            .collect()
    }
}

impl<S: PolyComScheme> PublicRawParams<S, S::Field> {
    /// Commit the selectors with the carried scheme.
    pub fn commit_selectors(&self) -> Result<Vec<S::Commitment>> {
        self.selectors()
            .iter()
            .map(|q| self.commitment_scheme.commit(q))
            .collect()
    }
}

/// Turn row evaluations into canonical coefficients in place.
fn interpolate<F: Scalar>(domain: &EvalDomain<F>, evals: &mut [F]) {
    domain.fft_inverse(evals, Decimation::Dif, 0);
    bit_reverse(evals);
}

/// Run the setup of a Sparse R1CS: interpolate the five selectors, compute
/// the copy-constraint permutation and package them with `pcs`.
pub fn setup<PCS: PolyComScheme>(spr: &SparseR1CS<PCS::Field>, pcs: PCS) -> Result<PublicRaw<PCS>> {
    let setup_timer = start_timer!(|| "Sparse R1CS setup");
    spr.check()?;

    let nb_rows = spr.nb_rows();
    let domain_timer = start_timer!(|| format!("Build the domains for {} rows", nb_rows));
    let domain_num = EvalDomain::new(nb_rows, DOMAIN_NUM_DEPTH)?;
    let domain_h = EvalDomain::new(2 * nb_rows, DOMAIN_H_DEPTH)?;
    end_timer!(domain_timer);

    let selectors_timer = start_timer!(|| "Interpolate the selectors");
    let size = domain_num.cardinality;
    let mut selectors: [Vec<PCS::Field>; 5] =
        core::array::from_fn(|_| vec![PCS::Field::zero(); size]);
    let c = &spr.coefficients;
    for (row, gate) in spr.rows().enumerate() {
        selectors[0][row] = c[gate.l.coeff_id];
        selectors[1][row] = c[gate.r.coeff_id];
        selectors[2][row] = c[gate.m[0].coeff_id].mul(&c[gate.m[1].coeff_id]);
        selectors[3][row] = c[gate.o.coeff_id];
        selectors[4][row] = c[gate.k];
    }

    #[cfg(not(feature = "parallel"))]
    selectors
        .iter_mut()
        .for_each(|evals| interpolate(&domain_num, evals));
    #[cfg(feature = "parallel")]
    selectors[..]
        .par_iter_mut()
        .for_each(|evals| interpolate(&domain_num, evals));

    let [ql, qr, qm, qo, qk] = selectors.map(FpPolynomial::from_coefs_padded);
    end_timer!(selectors_timer);

    let perm_timer = start_timer!(|| "Compute the permutation");
    let permutation = build_permutation(spr, size)?;
    end_timer!(perm_timer);

    log::debug!(
        "setup done: {} rows, domain_num {}, domain_h {}",
        nb_rows,
        domain_num.cardinality,
        domain_h.cardinality
    );
    end_timer!(setup_timer);

    Ok(PublicRawParams {
        commitment_scheme: pcs,
        ql,
        qr,
        qm,
        qo,
        qk,
        domain_num,
        domain_h,
        permutation,
    })
}

#[cfg(test)]
mod test {
    use crate::errors::PlonkError;
    use crate::plonk::constraint_system::{SparseR1CS, SparseR1CSBuilder};
    use crate::plonk::setup::{setup, PublicRaw};
    use crate::poly_commit::kzg_poly_com::KZGCommitmentScheme;
    use rand_chacha::ChaChaRng;
    use sparse_plonk_algebra::{
        bn254::{BN254Scalar, BN254G1},
        prelude::*,
    };

    type F = BN254Scalar;
    type Pcs = KZGCommitmentScheme<BN254G1>;

    fn pcs() -> Pcs {
        let mut prng = ChaChaRng::from_seed([0u8; 32]);
        KZGCommitmentScheme::new(20, &mut prng)
    }

    /// `out = a * b + z`, checked against a public input, where the row
    /// `z - z = z` forces `z = 0`.
    fn circuit() -> SparseR1CS<F> {
        let mut builder = SparseR1CSBuilder::<F>::new(1, 2);
        let expected = builder.public_variable(0);
        let a = builder.secret_variable(0);
        let b = builder.secret_variable(1);
        let prod = builder.new_internal_variable();
        let z = builder.new_internal_variable();
        let out = builder.new_internal_variable();
        builder.insert_mul_gate(a, b, prod);
        builder.insert_boolean_gate(a);
        builder.insert_lc_gate(prod, z, out, F::one(), F::one());
        builder.insert_sub_gate(z, z, z);
        builder.assert_equal(out, expected);
        builder.build()
    }

    #[test]
    fn test_setup_shapes() {
        let cs = circuit();
        let params: PublicRaw<Pcs> = setup(&cs, pcs()).unwrap();
        assert_eq!(params.domain_num.cardinality, 8);
        assert_eq!(params.domain_num.depth, 2);
        assert_eq!(params.domain_h.cardinality, 16);
        assert_eq!(params.domain_h.depth, 1);
        assert_eq!(params.permutation.len(), 24);
        for q in params.selectors() {
            assert_eq!(q.coefs.len(), 8);
        }
    }

    #[test]
    fn test_selectors_recover_gates() {
        let cs = circuit();
        let params = setup(&cs, pcs()).unwrap();
        let evals = params.selector_evals();
        let c = &cs.coefficients;
        for (row, gate) in cs.rows().enumerate() {
            assert_eq!(evals[0][row], c[gate.l.coeff_id]);
            assert_eq!(evals[1][row], c[gate.r.coeff_id]);
            assert_eq!(
                evals[2][row],
                c[gate.m[0].coeff_id].mul(&c[gate.m[1].coeff_id])
            );
            assert_eq!(evals[3][row], c[gate.o.coeff_id]);
            assert_eq!(evals[4][row], c[gate.k]);
        }
        for evals in evals.iter() {
            assert!(evals[cs.nb_rows()..].iter().all(|e| e.is_zero()));
        }

        // the canonical form agrees with plain evaluation at the domain elements
        for (row, x) in params.domain_num.elements().iter().enumerate() {
            assert_eq!(params.qm.eval(x), evals[2][row]);
        }
    }

    #[test]
    fn test_setup_is_deterministic() {
        let cs = circuit();
        let first = setup(&cs, pcs()).unwrap();
        let second = setup(&cs, pcs()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            first.commit_selectors().unwrap(),
            second.commit_selectors().unwrap()
        );
    }

    #[test]
    fn test_setup_serialization() {
        let params = setup(&circuit(), pcs()).unwrap();
        let bytes = bincode::serialize(&params).unwrap();
        let decoded: PublicRaw<Pcs> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(params, decoded);
    }

    #[test]
    fn test_setup_rejects_malformed_circuit() {
        let mut cs = circuit();
        cs.constraints[1].k = 100;
        assert!(matches!(
            setup(&cs, pcs()),
            Err(PlonkError::CoefficientIndex {
                row: 1,
                coeff_id: 100
            })
        ));

        let mut cs = circuit();
        cs.nb_secret_variables += 1;
        assert!(matches!(
            setup(&cs, pcs()),
            Err(PlonkError::UnreferencedVariable(_))
        ));
    }

    #[test]
    fn test_commit_selectors_degree() {
        let params = setup(&circuit(), pcs()).unwrap();
        assert_eq!(params.commit_selectors().unwrap().len(), 5);

        let mut prng = ChaChaRng::from_seed([0u8; 32]);
        let small = KZGCommitmentScheme::<BN254G1>::new(3, &mut prng);
        let params = setup(&circuit(), small).unwrap();
        assert!(matches!(
            params.commit_selectors(),
            Err(PlonkError::DegreeError)
        ));
    }
}
