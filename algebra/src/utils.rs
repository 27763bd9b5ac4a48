use crate::prelude::*;
use ark_std::{string::String, vec::Vec};
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

const BASE64_PADDING_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(&URL_SAFE, BASE64_PADDING_CONFIG);

/// Convert the input into the base64 encoding
pub fn b64enc<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    BASE64_ENGINE.encode(input)
}

/// Reconstruct from the base64 encoding
pub fn b64dec<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>> {
    BASE64_ENGINE
        .decode(input)
        .map_err(|_| AlgebraError::DeserializationError)
}

/// Convert u32 limbs (least significant first) into u64 limbs.
pub fn u32_limbs_to_u64_limbs(s: &[u32]) -> Vec<u64> {
    s.chunks(2)
        .map(|pair| {
            let low = pair[0] as u64;
            let high = pair.get(1).map(|x| (*x as u64) << 32).unwrap_or(0);
            low + high
        })
        .collect()
}

/// Return the base-2 logarithm of a power of two.
pub fn log2_of_power_of_two(n: usize) -> u32 {
    debug_assert!(n.is_power_of_two());
    n.trailing_zeros()
}
