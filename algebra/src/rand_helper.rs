use rand_chacha::{
    rand_core::{CryptoRng, RngCore, SeedableRng},
    ChaChaRng,
};

fn test_rng_helper() -> ChaChaRng {
    // arbitrary seed
    let seed = [
        1, 0, 0, 0, 23, 0, 0, 0, 200, 1, 0, 0, 210, 30, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0,
    ];
    ChaChaRng::from_seed(seed)
}

/// Should be used only for tests, not for any real world usage.
#[cfg(not(feature = "std"))]
pub fn test_rng() -> impl RngCore + CryptoRng {
    test_rng_helper()
}

/// Should be used only for tests, not for any real world usage.
///
/// The generator is seeded from the OS unless `DETERMINISTIC_TEST_RNG=1`
/// is set, in which case every call returns the same stream.
#[cfg(feature = "std")]
pub fn test_rng() -> impl RngCore + CryptoRng {
    let is_deterministic =
        std::env::vars().any(|(key, val)| key == "DETERMINISTIC_TEST_RNG" && val == "1");
    if is_deterministic {
        test_rng_helper()
    } else {
        ChaChaRng::from_entropy()
    }
}
