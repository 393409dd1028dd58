// kem/src/saber/tests.rs

use super::*;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaChaRng;
use saber_api::{Kem, Pke, Serialize, SerializeSecret};
use saber_params::{Variant, FIRESABER, LIGHTSABER, SABER};

#[test]
fn test_lightsaber_keygen_sizes() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = LightSaber::keypair(&mut rng).unwrap();
    assert_eq!(pk.len(), 672);
    assert_eq!(sk.len(), 1568);
}

#[test]
fn test_saber_keygen_sizes() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = Saber::keypair(&mut rng).unwrap();
    assert_eq!(pk.len(), 992);
    assert_eq!(sk.len(), 2304);
}

#[test]
fn test_firesaber_keygen_sizes() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = FireSaber::keypair(&mut rng).unwrap();
    assert_eq!(pk.len(), 1312);
    assert_eq!(sk.len(), 3040);
}

#[test]
fn test_names() {
    assert_eq!(LightSaber::name(), "LightSaber");
    assert_eq!(Saber::name(), "Saber");
    assert_eq!(FireSaber::name(), "FireSaber");
    assert_eq!(<LightSaberPke as Pke>::name(), "LightSaber");
}

fn check_correctness<K>(trials: usize, ct_len: usize)
where
    K: Kem<
        PublicKey = SaberPublicKey,
        SecretKey = SaberSecretKey,
        Ciphertext = SaberCiphertext,
        SharedSecret = SaberSharedSecret,
        KeyPair = (SaberPublicKey, SaberSecretKey),
    >,
{
    let mut rng = ChaChaRng::seed_from_u64(42);
    for _ in 0..trials {
        let keypair = K::keypair(&mut rng).unwrap();
        let pk = K::public_key(&keypair);
        let sk = K::secret_key(&keypair);

        let (ct, ss1) = K::encapsulate(&mut rng, &pk).unwrap();
        assert_eq!(ct.len(), ct_len);
        assert_eq!(ss1.len(), SABER_SS_BYTES);

        let ss2 = K::decapsulate(&sk, &ct).unwrap();
        assert_eq!(ss1, ss2);
    }
}

#[test]
fn test_lightsaber_correctness() {
    check_correctness::<LightSaber>(100, 736);
}

#[test]
fn test_saber_correctness() {
    check_correctness::<Saber>(100, 1088);
}

#[test]
fn test_firesaber_correctness() {
    check_correctness::<FireSaber>(100, 1472);
}

#[test]
fn test_implicit_rejection() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = LightSaber::keypair(&mut rng).unwrap();
    let (ct, honest) = LightSaber::encapsulate(&mut rng, &pk).unwrap();

    for &index in &[0usize, 1, 95, 96, 400, 735] {
        let mut bad = ct.clone();
        bad.as_mut()[index] ^= 0x10;

        let k1 = LightSaber::decapsulate(&sk, &bad).unwrap();
        let k2 = LightSaber::decapsulate(&sk, &bad).unwrap();
        assert_eq!(k1.len(), 32);
        assert_eq!(k1, k2, "rejection must be deterministic (byte {})", index);
        assert_ne!(k1, honest, "corruption at byte {} went unnoticed", index);
    }
}

#[test]
fn test_rejection_depends_on_secret_key() {
    let mut rng = ChaChaRng::seed_from_u64(7);
    let (pk, sk1) = Saber::keypair(&mut rng).unwrap();
    let (_, sk2) = Saber::keypair(&mut rng).unwrap();
    let (ct, _) = Saber::encapsulate(&mut rng, &pk).unwrap();

    // the second key never matches the ciphertext, so it rejects
    let a = Saber::decapsulate(&sk2, &ct).unwrap();
    let b = Saber::decapsulate(&sk1, &ct).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_wrong_sizes_rejected() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = LightSaber::keypair(&mut rng).unwrap();
    let (ct, _) = LightSaber::encapsulate(&mut rng, &pk).unwrap();

    let short_pk = SaberPublicKey::new(pk.as_bytes()[..600].to_vec());
    assert!(LightSaber::encapsulate(&mut rng, &short_pk).is_err());

    let short_ct = SaberCiphertext::new(ct.as_bytes()[..700].to_vec());
    assert!(LightSaber::decapsulate(&sk, &short_ct).is_err());

    // keys of one variant do not fit another
    assert!(Saber::encapsulate(&mut rng, &pk).is_err());
    assert!(Saber::decapsulate(&sk, &ct).is_err());
}

#[test]
fn test_runtime_kem_matches_typed() {
    let kem = SaberKem::from_variant(Variant::Saber);
    assert_eq!(kem.params(), &SABER);

    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = kem.keypair(&mut rng).unwrap();
    let (ct, ss1) = kem.encapsulate(&pk, &mut rng).unwrap();

    // the typed scheme decapsulates a runtime ciphertext
    let ss2 = Saber::decapsulate(&sk, &ct).unwrap();
    assert_eq!(ss1, ss2);
}

#[test]
fn test_runtime_kem_with_mu() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    for mu in [2u32, 6, 8, 10] {
        let kem = SaberKem::with_mu(Variant::LightSaber, mu).unwrap();
        assert_eq!(kem.params().mu, mu);

        let (pk, sk) = kem.keypair(&mut rng).unwrap();
        assert_eq!(pk.len(), LIGHTSABER.public_key_bytes);
        let (ct, ss1) = kem.encapsulate(&pk, &mut rng).unwrap();
        assert_eq!(ct.len(), LIGHTSABER.ciphertext_bytes);
        assert_eq!(kem.decapsulate(&sk, &ct).unwrap(), ss1);
    }

    assert!(SaberKem::with_mu(Variant::Saber, 5).is_err());
    assert!(SaberKem::with_mu(Variant::Saber, 0).is_err());
    assert!(SaberKem::with_mu(Variant::Saber, 2048).is_err());
}

#[test]
fn test_runtime_kem_rejects_inconsistent_params() {
    let mut params = FIRESABER;
    params.ciphertext_bytes -= 1;
    assert!(matches!(
        SaberKem::new(params),
        Err(crate::error::Error::Params(_))
    ));
}

#[test]
fn test_encapsulate_with_seed() {
    let kem = SaberKem::default();
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = kem.keypair(&mut rng).unwrap();

    let (ct1, ss1) = kem.encapsulate_with_seed(&pk, &[1u8; 32]).unwrap();
    let (ct2, ss2) = kem.encapsulate_with_seed(&pk, &[1u8; 32]).unwrap();
    assert_eq!(ct1, ct2);
    assert_eq!(ss1, ss2);
    assert_eq!(kem.decapsulate(&sk, &ct1).unwrap(), ss1);

    assert!(kem.encapsulate_with_seed(&pk, &[1u8; 31]).is_err());
}

#[test]
fn test_serialization() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = LightSaber::keypair(&mut rng).unwrap();
    let (ct, ss) = LightSaber::encapsulate(&mut rng, &pk).unwrap();

    let pk2 = <SaberPublicKey as Serialize>::from_bytes(&pk.to_bytes()).unwrap();
    assert_eq!(pk, pk2);

    let sk_bytes = sk.to_bytes_zeroizing();
    assert_eq!(sk_bytes.len(), 1568);
    let sk2 = <SaberSecretKey as SerializeSecret>::from_bytes(&sk_bytes).unwrap();

    let ct2 = <SaberCiphertext as Serialize>::from_bytes(&ct.to_bytes()).unwrap();
    assert_eq!(LightSaber::decapsulate(&sk2, &ct2).unwrap(), ss);

    let ss2 = <SaberSharedSecret as SerializeSecret>::from_bytes(&ss.to_bytes_zeroizing()).unwrap();
    assert_eq!(ss, ss2);

    assert!(<SaberPublicKey as Serialize>::from_bytes(&[]).is_err());
    assert!(<SaberSecretKey as SerializeSecret>::from_bytes(&[]).is_err());
}

#[test]
fn test_from_bytes_for_checks_variant() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = LightSaber::keypair(&mut rng).unwrap();

    assert!(SaberPublicKey::from_bytes_for(&LIGHTSABER, pk.as_bytes()).is_ok());
    assert!(SaberPublicKey::from_bytes_for(&SABER, pk.as_bytes()).is_err());
    let sk_bytes = sk.to_bytes_zeroizing();
    assert!(SaberSecretKey::from_bytes_for(&LIGHTSABER, &sk_bytes).is_ok());
    assert!(SaberSecretKey::from_bytes_for(&FIRESABER, &sk_bytes).is_err());
    assert!(SaberCiphertext::from_bytes_for(&LIGHTSABER, &[0u8; 736]).is_ok());
    assert!(SaberCiphertext::from_bytes_for(&LIGHTSABER, &[0u8; 737]).is_err());
}

#[test]
fn test_debug_redacts_secrets() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = LightSaber::keypair(&mut rng).unwrap();
    let (_, ss) = LightSaber::encapsulate(&mut rng, &pk).unwrap();
    assert_eq!(format!("{:?}", sk), "SaberSecretKey([REDACTED])");
    assert_eq!(format!("{:?}", ss), "SaberSharedSecret([REDACTED])");
}

#[test]
fn test_pke_roundtrip() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = FireSaberPke::keypair(&mut rng).unwrap();
    assert_eq!(pk.as_ref().len(), FIRESABER.indcpa_public_key_bytes);
    assert_eq!(sk.as_ref().len(), FIRESABER.indcpa_secret_key_bytes);

    let mut msg = [0u8; 32];
    rng.fill_bytes(&mut msg);
    let ct = FireSaberPke::encrypt(&pk, &msg, None, &mut rng).unwrap();
    assert_eq!(ct.as_ref().len(), FIRESABER.ciphertext_bytes);
    assert_eq!(FireSaberPke::decrypt(&sk, &ct, None).unwrap(), msg.to_vec());
}

#[test]
fn test_pke_rejects_aad_and_bad_message() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = LightSaberPke::keypair(&mut rng).unwrap();
    let msg = [7u8; 32];

    assert!(LightSaberPke::encrypt(&pk, &msg, Some(&b"aad"[..]), &mut rng).is_err());
    assert!(LightSaberPke::encrypt(&pk, &msg[..16], None, &mut rng).is_err());

    let ct = LightSaberPke::encrypt(&pk, &msg, None, &mut rng).unwrap();
    assert!(LightSaberPke::decrypt(&sk, &ct, Some(&b"aad"[..])).is_err());
}

#[test]
fn test_pke_encrypt_with_seed() {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = DefaultSaberPke::keypair(&mut rng).unwrap();
    let msg = [0x3cu8; 32];

    let ct1 = DefaultSaberPke::encrypt_with_seed(&pk, &msg, &[9u8; 32]).unwrap();
    let ct2 = DefaultSaberPke::encrypt_with_seed(&pk, &msg, &[9u8; 32]).unwrap();
    assert_eq!(ct1, ct2);
    assert_eq!(DefaultSaberPke::decrypt(&sk, &ct1, None).unwrap(), msg.to_vec());
}

#[test]
fn test_runtime_pke() {
    let pke = SaberCpaPke::from_variant(Variant::LightSaber);
    let mut rng = ChaChaRng::seed_from_u64(42);
    let (pk, sk) = pke.keypair(&mut rng).unwrap();
    let msg = [0xffu8; 32];
    let ct = pke.encrypt(&pk, &msg, &[0u8; 32]).unwrap();
    assert_eq!(&pke.decrypt(&sk, &ct).unwrap()[..], &msg[..]);
    assert!(pke.encrypt(&pk, &msg[..31], &[0u8; 32]).is_err());
}
