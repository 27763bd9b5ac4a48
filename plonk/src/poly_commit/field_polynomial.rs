use crate::plonk::domain::{bit_reverse, Decimation, EvalDomain};
use num_bigint::ToBigUint;
use num_integer::Integer;
use sparse_plonk_algebra::prelude::*;

/// Field polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FpPolynomial<F> {
    /// Coefficients (or evaluations) of the polynomial
    pub coefs: Vec<F>,
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial
    /// # Example
    /// ```
    /// use sparse_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use sparse_plonk_algebra::bn254::BN254Scalar;
    /// use sparse_plonk_algebra::{Zero, One};
    /// let poly = FpPolynomial::<BN254Scalar>::zero();
    /// let zero = BN254Scalar::zero();
    /// assert_eq!(poly.degree(), 0);
    /// assert_eq!(poly.eval(&zero), zero);
    /// assert_eq!(poly.eval(&BN254Scalar::one()), zero);
    /// ```
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient first.
    /// High-order zero coefficient are trimmed.
    /// # Example
    /// ```
    /// use sparse_plonk::poly_commit::field_polynomial::FpPolynomial;
    /// use sparse_plonk_algebra::bn254::BN254Scalar;
    /// use sparse_plonk_algebra::{Zero, One, ops::*};
    /// let zero = BN254Scalar::zero();
    /// let one = BN254Scalar::one();
    /// let two = one.add(&one);
    /// let five = two.add(&two).add(&one);
    /// let poly = FpPolynomial::from_coefs(vec![one, zero, one]);
    /// assert_eq!(poly.degree(), 2);
    /// assert_eq!(poly.eval(&zero), one);
    /// assert_eq!(poly.eval(&one), two);
    /// assert_eq!(poly.eval(&two), five);
    /// let poly2 = FpPolynomial::from_coefs(vec![one, zero, one, zero, zero, zero]);
    /// assert_eq!(poly2.degree(), 2);
    /// assert_eq!(poly, poly2);
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Build a polynomial keeping every coefficient, including high-order zeros.
    /// Selector polynomials keep the length of their evaluation domain.
    pub fn from_coefs_padded(coefs: Vec<F>) -> Self {
        FpPolynomial { coefs }
    }

    /// Remove high degree zero-coefficients
    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().map_or(false, |c| c.is_zero()) {
            self.coefs.pop();
        }
    }

    /// Return degree of the coefficient vector, i.e. its length minus one.
    pub fn degree(&self) -> usize {
        if self.coefs.is_empty() {
            0
        } else {
            self.coefs.len() - 1
        }
    }

    /// Test if polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coefs.iter().all(|c| c.is_zero())
    }

    /// Evaluate a polynomial on a point.
    pub fn eval(&self, point: &F) -> F {
        // Horner
        self.coefs
            .iter()
            .rev()
            .fold(F::zero(), |acc, coef| acc.mul(point).add(coef))
    }

    /// Interpolate the polynomial whose evaluations over `domain`, in natural
    /// order, are `evals`. Missing evaluations are taken as zero.
    pub fn ifft_with_domain(domain: &EvalDomain<F>, evals: &[F]) -> Self {
        let mut coefs = evals.to_vec();
        coefs.resize(domain.cardinality, F::zero());
        domain.fft_inverse(&mut coefs, Decimation::Dif, 0);
        bit_reverse(&mut coefs);
        Self::from_coefs(coefs)
    }

    /// Evaluate the polynomial over `domain`, returning the evaluations in
    /// natural order. The polynomial must fit in the domain.
    pub fn fft_with_domain(&self, domain: &EvalDomain<F>) -> Vec<F> {
        assert!(self.coefs.len() <= domain.cardinality);
        let mut evals = self.coefs.clone();
        evals.resize(domain.cardinality, F::zero());
        domain.fft(&mut evals, Decimation::Dif, 0);
        bit_reverse(&mut evals);
        evals
    }
}

/// Compute the primitive `num_points`-th root of unity, if the field has one.
pub fn primitive_nth_root_of_unity<F: Scalar>(num_points: usize) -> Option<F> {
    let q_minus_one = F::get_field_size_biguint() - 1u64;
    let (exp, r) = q_minus_one.div_rem(&num_points.to_biguint()?);
    if !r.is_zero() {
        None
    } else {
        let g = F::multiplicative_generator();
        let exp_u32_limbs = exp.to_u32_digits();
        let exp_u64_limbs = u32_limbs_to_u64_limbs(exp_u32_limbs.as_slice());
        Some(g.pow(&exp_u64_limbs[..]))
    }
}
