//! End-to-end key exchange through the public API

use rand::rngs::OsRng;
use saber_api::{Kem, SerializeSecret};
use saber_kem::{FireSaber, LightSaber, Saber, SaberKem};
use saber_params::Variant;
use saber_tests::run_kem_cycle;

#[test]
fn test_lightsaber_end_to_end() {
    let mut rng = OsRng;
    let cycle = run_kem_cycle::<LightSaber, _>(&mut rng).unwrap();

    assert_eq!(cycle.public_key.len(), 672);
    assert_eq!(cycle.secret_key.len(), 1568);
    assert_eq!(cycle.ciphertext.len(), 736);
    assert_eq!(cycle.sender_key, cycle.recipient_key);
    assert_eq!(cycle.sender_key.to_bytes_zeroizing().len(), 32);
}

#[test]
fn test_all_variants_end_to_end() {
    let mut rng = OsRng;

    let light = run_kem_cycle::<LightSaber, _>(&mut rng).unwrap();
    assert_eq!(light.sender_key, light.recipient_key);

    let saber = run_kem_cycle::<Saber, _>(&mut rng).unwrap();
    assert_eq!(saber.public_key.len(), 992);
    assert_eq!(saber.secret_key.len(), 2304);
    assert_eq!(saber.ciphertext.len(), 1088);
    assert_eq!(saber.sender_key, saber.recipient_key);

    let fire = run_kem_cycle::<FireSaber, _>(&mut rng).unwrap();
    assert_eq!(fire.public_key.len(), 1312);
    assert_eq!(fire.secret_key.len(), 3040);
    assert_eq!(fire.ciphertext.len(), 1472);
    assert_eq!(fire.sender_key, fire.recipient_key);
}

#[test]
fn test_independent_exchanges_give_independent_keys() {
    let mut rng = OsRng;
    let a = run_kem_cycle::<Saber, _>(&mut rng).unwrap();
    let b = run_kem_cycle::<Saber, _>(&mut rng).unwrap();
    assert_ne!(a.sender_key, b.sender_key);
    assert_ne!(a.public_key, b.public_key);
}

#[test]
fn test_runtime_kem_for_every_variant() {
    let mut rng = OsRng;
    for variant in Variant::ALL {
        let kem = SaberKem::from_variant(variant);
        let (pk, sk) = kem.keypair(&mut rng).unwrap();
        assert_eq!(pk.len(), variant.params().public_key_bytes);
        assert_eq!(sk.len(), variant.params().secret_key_bytes);

        let (ct, k1) = kem.encapsulate(&pk, &mut rng).unwrap();
        let k2 = kem.decapsulate(&sk, &ct).unwrap();
        assert_eq!(k1, k2, "{} keys disagree", variant);
    }
}

#[test]
fn test_keys_do_not_cross_variants() {
    let mut rng = OsRng;
    let light = run_kem_cycle::<LightSaber, _>(&mut rng).unwrap();

    assert!(Saber::encapsulate(&mut rng, &light.public_key).is_err());
    assert!(FireSaber::decapsulate(&light.secret_key, &light.ciphertext).is_err());
}
