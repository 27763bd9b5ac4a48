use crate::bn254::BN254Scalar;
use crate::prelude::*;
use ark_bn254::{G1Affine, G1Projective};
use ark_ec::{CurveGroup, Group as ArkGroup, VariableBaseMSM};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::{
    fmt::{Debug, Display, Formatter},
    vec::Vec,
};

/// The wrapped struct for ark_bn254::G1Projective
#[derive(Copy, Default, Clone, PartialEq, Eq)]
pub struct BN254G1(pub(crate) G1Projective);

impl Debug for BN254G1 {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        <G1Affine as Display>::fmt(&self.0.into_affine(), f)
    }
}

impl Group for BN254G1 {
    type ScalarType = BN254Scalar;
    const COMPRESSED_LEN: usize = 32;

    #[inline]
    fn get_identity() -> Self {
        Self(G1Projective::zero())
    }

    #[inline]
    fn get_base() -> Self {
        Self(G1Projective::generator())
    }

    #[inline]
    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        Self(G1Projective::rand(prng))
    }

    #[inline]
    fn to_compressed_bytes(&self) -> Vec<u8> {
        let affine = G1Affine::from(self.0);
        let mut buf = Vec::with_capacity(Self::COMPRESSED_LEN);
        // writing into a vector cannot fail
        let _ = affine.serialize_with_mode(&mut buf, Compress::Yes);
        buf
    }

    #[inline]
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        let affine = G1Affine::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
            .map_err(|_| AlgebraError::DeserializationError)?;

        Ok(Self(G1Projective::from(affine)))
    }

    #[inline]
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        if scalars.is_empty() {
            return Self::get_identity();
        }
        let scalars_raw: Vec<_> = scalars.iter().map(|r| r.0).collect();
        let points_raw = G1Projective::normalize_batch(
            &points.iter().map(|r| r.0).collect::<Vec<G1Projective>>(),
        );

        // `msm` only fails on mismatched lengths
        match G1Projective::msm(&points_raw, scalars_raw.as_ref()) {
            Ok(p) => Self(p),
            Err(_) => Self::get_identity(),
        }
    }
}

impl<'a> Add<&'a BN254G1> for BN254G1 {
    type Output = BN254G1;

    #[inline]
    fn add(self, rhs: &Self) -> Self::Output {
        Self(self.0.add(&rhs.0))
    }
}

impl<'a> Sub<&'a BN254G1> for BN254G1 {
    type Output = BN254G1;

    #[inline]
    fn sub(self, rhs: &Self) -> Self::Output {
        Self(self.0.sub(&rhs.0))
    }
}

impl<'a> Mul<&'a BN254Scalar> for BN254G1 {
    type Output = BN254G1;

    #[inline]
    fn mul(self, rhs: &BN254Scalar) -> Self::Output {
        Self(self.0.mul(&rhs.0))
    }
}

impl<'a> AddAssign<&'a BN254G1> for BN254G1 {
    #[inline]
    fn add_assign(&mut self, rhs: &'a BN254G1) {
        self.0.add_assign(&rhs.0)
    }
}

impl<'a> SubAssign<&'a BN254G1> for BN254G1 {
    #[inline]
    fn sub_assign(&mut self, rhs: &'a BN254G1) {
        self.0.sub_assign(&rhs.0)
    }
}

impl Neg for BN254G1 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.neg())
    }
}
