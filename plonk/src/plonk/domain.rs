//! Multiplicative subgroups of power-of-two order and the radix-2 transforms
//! over them.
//!
//! Two orderings are supported. [`Decimation::Dif`] consumes its input in
//! natural order and leaves the output in bit-reversed order;
//! [`Decimation::Dit`] consumes bit-reversed input and leaves natural order.
//! Chaining one of each (or inserting [`bit_reverse`]) gives back natural
//! order, which is what setup relies on.

use crate::errors::{PlonkError, Result};
use crate::poly_commit::field_polynomial::primitive_nth_root_of_unity;
use sparse_plonk_algebra::prelude::*;

/// Ordering convention of a radix-2 transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decimation {
    /// Decimation in time: bit-reversed input, natural output.
    Dit,
    /// Decimation in frequency: natural input, bit-reversed output.
    Dif,
}

/// A multiplicative subgroup `H` of order `cardinality`, together with the
/// cosets `finer_generator^k * H` for `k < 2^depth`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalDomain<F> {
    /// The order of `H`, a power of two.
    pub cardinality: usize,
    /// `1 / cardinality` in the field.
    pub cardinality_inv: F,
    /// `log2` of the number of cosets available.
    pub depth: usize,
    /// Generator of `H`.
    pub generator: F,
    /// Inverse of `generator`.
    pub generator_inv: F,
    /// Element of order `cardinality * 2^depth` whose `2^depth`-th power is `generator`.
    pub finer_generator: F,
    /// Inverse of `finer_generator`.
    pub finer_generator_inv: F,
    twiddles: Vec<F>,
    twiddles_inv: Vec<F>,
}

impl<F: Scalar> EvalDomain<F> {
    /// Build the smallest power-of-two domain with at least `m` elements,
    /// with `2^depth` cosets.
    pub fn new(m: usize, depth: usize) -> Result<Self> {
        let cardinality = m.max(1).next_power_of_two();
        let order = u32::try_from(depth)
            .ok()
            .and_then(|d| cardinality.checked_shl(d))
            .filter(|o| *o >> depth == cardinality)
            .ok_or(PlonkError::GroupNotFound(cardinality))?;

        let finer_generator =
            primitive_nth_root_of_unity::<F>(order).ok_or(PlonkError::GroupNotFound(order))?;
        let finer_generator_inv = finer_generator.inv()?;
        let generator = finer_generator.pow(&[(order / cardinality) as u64]);
        let generator_inv = generator.inv()?;
        let cardinality_inv = F::from(cardinality as u64).inv()?;

        let twiddles = powers(&generator, cardinality / 2);
        let twiddles_inv = powers(&generator_inv, cardinality / 2);

        log::debug!(
            "evaluation domain for {} rows: cardinality {}, {} coset(s)",
            m,
            cardinality,
            1usize << depth
        );

        Ok(EvalDomain {
            cardinality,
            cardinality_inv,
            depth,
            generator,
            generator_inv,
            finer_generator,
            finer_generator_inv,
            twiddles,
            twiddles_inv,
        })
    }

    /// Return the elements of `H` in natural order: `1, w, w^2, ...`.
    pub fn elements(&self) -> Vec<F> {
        powers(&self.generator, self.cardinality)
    }

    /// Return the shift of the `coset`-th coset, i.e. `finer_generator^coset`.
    pub fn coset_shift(&self, coset: usize) -> F {
        assert!(coset < 1 << self.depth, "coset index out of bound");
        self.finer_generator.pow(&[coset as u64])
    }

    /// Evaluate, in place, the polynomial whose coefficients are `a` on the
    /// `coset`-th coset of the domain (`coset = 0` is `H` itself).
    ///
    /// Panics if `a.len()` differs from the cardinality.
    pub fn fft(&self, a: &mut [F], decimation: Decimation, coset: usize) {
        self.check_len(a);
        if coset != 0 {
            let shift = self.coset_shift(coset);
            scale_by_powers(a, &shift, decimation == Decimation::Dit);
        }
        match decimation {
            Decimation::Dif => dif(a, &self.twiddles),
            Decimation::Dit => dit(a, &self.twiddles),
        }
    }

    /// Interpolate, in place, the evaluations `a` over the `coset`-th coset
    /// into coefficients.
    ///
    /// Panics if `a.len()` differs from the cardinality.
    pub fn fft_inverse(&self, a: &mut [F], decimation: Decimation, coset: usize) {
        self.check_len(a);
        match decimation {
            Decimation::Dif => dif(a, &self.twiddles_inv),
            Decimation::Dit => dit(a, &self.twiddles_inv),
        }
        for x in a.iter_mut() {
            x.mul_assign(&self.cardinality_inv);
        }
        if coset != 0 {
            assert!(coset < 1 << self.depth, "coset index out of bound");
            let shift_inv = self.finer_generator_inv.pow(&[coset as u64]);
            // DIF leaves the coefficients bit-reversed
            scale_by_powers(a, &shift_inv, decimation == Decimation::Dif);
        }
    }

    fn check_len(&self, a: &[F]) {
        assert_eq!(
            a.len(),
            self.cardinality,
            "vector length does not match the domain cardinality"
        );
    }
}

/// Permute `a` in place so that index `i` moves to the bit reversal of `i`.
/// The length must be a power of two.
pub fn bit_reverse<T>(a: &mut [T]) {
    let n = a.len();
    if n < 2 {
        return;
    }
    assert!(n.is_power_of_two(), "bit reversal needs a power-of-two length");
    let shift = usize::BITS - log2_of_power_of_two(n);
    for i in 0..n {
        let j = i.reverse_bits() >> shift;
        if i < j {
            a.swap(i, j);
        }
    }
}

fn powers<F: Scalar>(base: &F, n: usize) -> Vec<F> {
    let mut res = Vec::with_capacity(n);
    let mut cur = F::one();
    for _ in 0..n {
        res.push(cur);
        cur.mul_assign(base);
    }
    res
}

/// `a[i] *= c^i`, where `i` is read bit-reversed when the vector is stored
/// in bit-reversed order.
fn scale_by_powers<F: Scalar>(a: &mut [F], c: &F, bit_reversed: bool) {
    let n = a.len();
    let c_powers = powers(c, n);
    if bit_reversed && n > 1 {
        let shift = usize::BITS - log2_of_power_of_two(n);
        for (p, x) in a.iter_mut().enumerate() {
            x.mul_assign(&c_powers[p.reverse_bits() >> shift]);
        }
    } else {
        for (x, c_i) in a.iter_mut().zip(c_powers.iter()) {
            x.mul_assign(c_i);
        }
    }
}

/// Gentleman-Sande butterflies: natural order in, bit-reversed order out.
fn dif<F: Scalar>(a: &mut [F], twiddles: &[F]) {
    let n = a.len();
    let mut len = n;
    while len >= 2 {
        let half = len / 2;
        let stride = n / len;
        for start in (0..n).step_by(len) {
            for j in 0..half {
                let u = a[start + j];
                let v = a[start + j + half];
                a[start + j] = u.add(&v);
                a[start + j + half] = u.sub(&v).mul(&twiddles[j * stride]);
            }
        }
        len = half;
    }
}

/// Cooley-Tukey butterflies: bit-reversed order in, natural order out.
fn dit<F: Scalar>(a: &mut [F], twiddles: &[F]) {
    let n = a.len();
    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let stride = n / len;
        for start in (0..n).step_by(len) {
            for j in 0..half {
                let u = a[start + j];
                let v = a[start + j + half].mul(&twiddles[j * stride]);
                a[start + j] = u.add(&v);
                a[start + j + half] = u.sub(&v);
            }
        }
        len *= 2;
    }
}

#[cfg(test)]
mod test {
    use crate::errors::PlonkError;
    use crate::plonk::domain::{bit_reverse, Decimation, EvalDomain};
    use crate::poly_commit::field_polynomial::FpPolynomial;
    use rand_chacha::ChaChaRng;
    use sparse_plonk_algebra::{bn254::BN254Scalar, prelude::*};

    type F = BN254Scalar;

    fn random_vec(prng: &mut ChaChaRng, n: usize) -> Vec<F> {
        (0..n).map(|_| F::random(prng)).collect()
    }

    #[test]
    fn test_new_domain() {
        let domain = EvalDomain::<F>::new(5, 2).unwrap();
        assert_eq!(domain.cardinality, 8);
        assert_eq!(domain.generator.pow(&[8]), F::one());
        assert_ne!(domain.generator.pow(&[4]), F::one());
        assert_eq!(domain.finer_generator.pow(&[4]), domain.generator);
        assert_eq!(domain.finer_generator.pow(&[32]), F::one());
        assert_ne!(domain.finer_generator.pow(&[16]), F::one());
        assert_eq!(domain.generator.mul(&domain.generator_inv), F::one());
        assert_eq!(domain.cardinality_inv.mul(&F::from(8u32)), F::one());

        let domain = EvalDomain::<F>::new(8, 0).unwrap();
        assert_eq!(domain.cardinality, 8);
        assert_eq!(domain.finer_generator, domain.generator);

        let domain = EvalDomain::<F>::new(0, 1).unwrap();
        assert_eq!(domain.cardinality, 1);
        assert_eq!(domain.generator, F::one());
        assert_eq!(domain.elements(), vec![F::one()]);
    }

    #[test]
    fn test_domain_too_large() {
        // two-adicity of the BN254 scalar field is 28
        assert!(matches!(
            EvalDomain::<F>::new(1 << 28, 1),
            Err(PlonkError::GroupNotFound(_))
        ));
    }

    #[test]
    fn test_bit_reverse() {
        let mut v: Vec<usize> = (0..8).collect();
        bit_reverse(&mut v);
        assert_eq!(v, vec![0, 4, 2, 6, 1, 5, 3, 7]);
        bit_reverse(&mut v);
        assert_eq!(v, (0..8).collect::<Vec<_>>());

        let mut single = vec![3usize];
        bit_reverse(&mut single);
        assert_eq!(single, vec![3]);
    }

    #[test]
    fn test_dif_matches_naive_evaluation() {
        let mut prng = ChaChaRng::from_seed([0u8; 32]);
        let domain = EvalDomain::<F>::new(16, 1).unwrap();
        let coefs = random_vec(&mut prng, 16);
        let poly = FpPolynomial::from_coefs(coefs.clone());

        let mut evals = coefs.clone();
        domain.fft(&mut evals, Decimation::Dif, 0);
        bit_reverse(&mut evals);
        for (x, e) in domain.elements().iter().zip(evals.iter()) {
            assert_eq!(poly.eval(x), *e);
        }

        let mut evals_dit = coefs;
        bit_reverse(&mut evals_dit);
        domain.fft(&mut evals_dit, Decimation::Dit, 0);
        assert_eq!(evals_dit, evals);
    }

    #[test]
    fn test_inverse_compositions() {
        let mut prng = ChaChaRng::from_seed([1u8; 32]);
        let domain = EvalDomain::<F>::new(32, 2).unwrap();
        let x = random_vec(&mut prng, 32);

        // bitReverse(FFTInverse_DIF(FFT_DIT(bitReverse(x)))) == x
        let mut a = x.clone();
        bit_reverse(&mut a);
        domain.fft(&mut a, Decimation::Dit, 0);
        domain.fft_inverse(&mut a, Decimation::Dif, 0);
        bit_reverse(&mut a);
        assert_eq!(a, x);

        // FFTInverse_DIT(FFT_DIF(x)) == x
        let mut b = x.clone();
        domain.fft(&mut b, Decimation::Dif, 0);
        domain.fft_inverse(&mut b, Decimation::Dit, 0);
        assert_eq!(b, x);
    }

    #[test]
    fn test_coset_fft() {
        let mut prng = ChaChaRng::from_seed([2u8; 32]);
        let domain = EvalDomain::<F>::new(8, 2).unwrap();
        let coefs = random_vec(&mut prng, 8);
        let poly = FpPolynomial::from_coefs(coefs.clone());

        for coset in 1..4 {
            let shift = domain.coset_shift(coset);
            let mut evals = coefs.clone();
            domain.fft(&mut evals, Decimation::Dif, coset);
            bit_reverse(&mut evals);
            for (x, e) in domain.elements().iter().zip(evals.iter()) {
                assert_eq!(poly.eval(&shift.mul(x)), *e);
            }

            // DIF inverse on the same coset gives the coefficients bit-reversed
            domain.fft_inverse(&mut evals, Decimation::Dif, coset);
            bit_reverse(&mut evals);
            assert_eq!(evals, coefs);

            // and the DIT pair
            let mut c = coefs.clone();
            bit_reverse(&mut c);
            domain.fft(&mut c, Decimation::Dit, coset);
            bit_reverse(&mut c);
            domain.fft_inverse(&mut c, Decimation::Dit, coset);
            assert_eq!(c, coefs);
        }
    }

    #[test]
    #[should_panic(expected = "vector length does not match the domain cardinality")]
    fn test_length_mismatch_panics() {
        let domain = EvalDomain::<F>::new(8, 0).unwrap();
        let mut a = vec![F::one(); 4];
        domain.fft_inverse(&mut a, Decimation::Dif, 0);
    }
}
