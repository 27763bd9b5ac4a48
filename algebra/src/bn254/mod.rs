/// The number of bytes for a scalar value over BN254.
pub const BN254_SCALAR_LEN: usize = 32;

mod fr;
pub use fr::*;

mod g1;
pub use g1::*;

#[cfg(test)]
mod bn254_groups_test {
    use crate::{
        bn254::{BN254Scalar, BN254G1},
        prelude::*,
        traits::scalar_tests::{test_scalar_operations, test_scalar_serialization},
    };

    #[test]
    fn test_scalar_ops() {
        test_scalar_operations::<BN254Scalar>();
    }

    #[test]
    fn scalar_deser() {
        test_scalar_serialization::<BN254Scalar>();
    }

    #[test]
    fn scalar_from_to_bytes() {
        let small_value = BN254Scalar::from(165747u32);
        let small_value_bytes = small_value.to_bytes();
        let expected_small_value_bytes: [u8; 32] = [
            115, 135, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
            0, 0, 0, 0,
        ];
        assert_eq!(small_value_bytes, expected_small_value_bytes);

        let small_value_from_bytes = BN254Scalar::from_bytes(&small_value_bytes).unwrap();
        assert_eq!(small_value_from_bytes, small_value);
    }

    #[test]
    fn field_size_matches_modulus() {
        let q = BN254Scalar::get_field_size_biguint();
        let le = num_bigint::BigUint::from_bytes_le(&BN254Scalar::get_field_size_le_bytes());
        assert_eq!(q, le);
        // q - 1 maps to -1
        let minus_one = BN254Scalar::from(&(q - 1u32));
        assert_eq!(minus_one, BN254Scalar::one().neg());
    }

    #[test]
    fn multi_exp_matches_naive() {
        let mut prng = test_rng();
        let scalars: Vec<BN254Scalar> = (0..8).map(|_| BN254Scalar::random(&mut prng)).collect();
        let points: Vec<BN254G1> = (0..8).map(|_| BN254G1::random(&mut prng)).collect();
        let naive = scalars
            .iter()
            .zip(points.iter())
            .fold(BN254G1::get_identity(), |acc, (s, p)| acc.add(&p.mul(s)));
        let scalars_ref: Vec<&BN254Scalar> = scalars.iter().collect();
        let points_ref: Vec<&BN254G1> = points.iter().collect();
        assert_eq!(BN254G1::multi_exp(&scalars_ref, &points_ref), naive);
    }

    #[test]
    fn compressed_bytes() {
        let g = BN254G1::get_base().mul(&BN254Scalar::from(11u32));
        let bytes = g.to_compressed_bytes();
        assert_eq!(bytes.len(), BN254G1::COMPRESSED_LEN);
        assert_eq!(BN254G1::from_compressed_bytes(&bytes).unwrap(), g);
    }
}
