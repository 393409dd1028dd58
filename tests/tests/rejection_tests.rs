//! Implicit rejection: corrupted ciphertexts never error and never leak

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use saber_api::{Kem, Serialize};
use saber_kem::{LightSaber, Saber, SaberCiphertext};
use saber_tests::{flip_bit, run_kem_cycle};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn corrupted_ciphertext_is_rejected_deterministically(
        seed in any::<u64>(),
        index in 0usize..736,
        bit in 0u8..8,
    ) {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let cycle = run_kem_cycle::<LightSaber, _>(&mut rng).unwrap();

        let bad = SaberCiphertext::from_bytes(&flip_bit(cycle.ciphertext.as_ref(), index, bit)).unwrap();
        let k1 = LightSaber::decapsulate(&cycle.secret_key, &bad).unwrap();
        let k2 = LightSaber::decapsulate(&cycle.secret_key, &bad).unwrap();

        prop_assert_eq!(k1.len(), 32);
        prop_assert_eq!(&k1, &k2);
        prop_assert_ne!(&k1, &cycle.sender_key);
    }
}

#[test]
fn test_distinct_corruptions_give_distinct_keys() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let cycle = run_kem_cycle::<Saber, _>(&mut rng).unwrap();

    let bad1 = SaberCiphertext::from_bytes(&flip_bit(cycle.ciphertext.as_ref(), 10, 0)).unwrap();
    let bad2 = SaberCiphertext::from_bytes(&flip_bit(cycle.ciphertext.as_ref(), 900, 3)).unwrap();

    let k1 = Saber::decapsulate(&cycle.secret_key, &bad1).unwrap();
    let k2 = Saber::decapsulate(&cycle.secret_key, &bad2).unwrap();
    assert_ne!(k1, k2);
}

#[test]
fn test_all_zero_ciphertext_is_rejected() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let cycle = run_kem_cycle::<LightSaber, _>(&mut rng).unwrap();

    let zero = SaberCiphertext::new(vec![0u8; 736]);
    let key = LightSaber::decapsulate(&cycle.secret_key, &zero).unwrap();
    assert_ne!(key, cycle.sender_key);
}
