// kem/src/saber/ind_cca.rs

//! SABER IND-CCA2 KEM built from the CPA scheme with a Fujisaki-Okamoto
//! transform and implicit rejection.
//!
//! Secret key layout: `z ∥ H(pk) ∥ pk ∥ sk_cpa`.

use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};
use saber_api::SecretBytes;
use saber_algorithms::error::Result as AlgoResult;
use saber_algorithms::hash::{HashFunction, Sha3_256, Sha3_512};
use saber_internal::constant_time::{ct_eq_choice, ct_select_bytes};
use saber_params::ParameterSet;
use tracing::{debug_span, trace};
use zeroize::Zeroizing;

use super::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa};
use super::params::SABER_SS_BYTES;
use crate::error::{validate, Result};

pub(crate) type SharedSecretBytes = Zeroizing<[u8; SABER_SS_BYTES]>;

/// 4-byte big-endian length tag appended to hash inputs.
pub(crate) fn encode32(x: usize) -> [u8; 4] {
    (x as u32).to_be_bytes()
}

// H: SHA3-256 over the concatenation of `parts`.
fn hash256(parts: &[&[u8]]) -> AlgoResult<Zeroizing<[u8; 32]>> {
    let digest = Sha3_256::digest_parts(parts)?;
    Ok(Zeroizing::new(*digest.as_array()))
}

// G: SHA3-512 over the concatenation of `parts`, split into two halves.
fn hash512(parts: &[&[u8]]) -> AlgoResult<(Zeroizing<[u8; 32]>, Zeroizing<[u8; 32]>)> {
    let digest = Zeroizing::new(*Sha3_512::digest_parts(parts)?.as_array());
    let mut r = Zeroizing::new([0u8; 32]);
    let mut k = Zeroizing::new([0u8; 32]);
    r.copy_from_slice(&digest[..32]);
    k.copy_from_slice(&digest[32..]);
    Ok((r, k))
}

/// Offsets of the four fields inside a CCA secret key.
struct SecretKeyParts<'a> {
    z: &'a [u8],
    hpk: &'a [u8],
    pk: &'a [u8],
    sk_cpa: &'a [u8],
}

impl<'a> SecretKeyParts<'a> {
    fn split(params: &ParameterSet, sk: &'a [u8]) -> Self {
        let (z, rest) = sk.split_at(params.key_bytes);
        let (hpk, rest) = rest.split_at(params.hash_bytes);
        let (pk, sk_cpa) = rest.split_at(params.indcpa_public_key_bytes);
        Self { z, hpk, pk, sk_cpa }
    }
}

/// IND-CCA2 key generation.
pub(crate) fn kem_keygen<R: RngCore + CryptoRng>(
    params: &ParameterSet,
    rng: &mut R,
) -> Result<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    let _span = debug_span!("saber.keygen", variant = params.name(), mu = params.mu).entered();

    let (pk, sk_cpa) = keypair_cpa(params, rng)?;
    let hpk = hash256(&[&pk[..]])?;

    let z = SecretBytes::<SABER_SS_BYTES>::random(rng);

    let mut sk = Zeroizing::new(Vec::with_capacity(params.secret_key_bytes));
    sk.extend_from_slice(z.as_ref());
    sk.extend_from_slice(&hpk[..]);
    sk.extend_from_slice(&pk);
    sk.extend_from_slice(&sk_cpa);

    validate::key_generation(
        pk.len() == params.public_key_bytes && sk.len() == params.secret_key_bytes,
        params.name(),
        "generated key sizes disagree with the parameter set",
    )?;

    trace!(pk_len = pk.len(), sk_len = sk.len(), "key pair generated");
    Ok((pk, sk))
}

/// IND-CCA2 encapsulation with fresh randomness.
pub(crate) fn kem_encaps<R: RngCore + CryptoRng>(
    params: &ParameterSet,
    pk: &[u8],
    rng: &mut R,
) -> Result<(Vec<u8>, SharedSecretBytes)> {
    let seed = SecretBytes::<SABER_SS_BYTES>::random(rng);
    kem_encaps_with_seed(params, pk, seed.as_ref())
}

/// Deterministic encapsulation: `seed` replaces the RNG draw.
pub(crate) fn kem_encaps_with_seed(
    params: &ParameterSet,
    pk: &[u8],
    seed: &[u8],
) -> Result<(Vec<u8>, SharedSecretBytes)> {
    let _span = debug_span!("saber.encaps", variant = params.name(), pk_len = pk.len()).entered();

    validate::key(
        pk.len() == params.public_key_bytes,
        "Saber public",
        "public key has the wrong length",
    )?;
    validate::length("encapsulation seed", seed.len(), params.key_bytes)?;

    let m = hash256(&[seed])?;
    let hpk = hash256(&[pk])?;
    let (r, k) = hash512(&[&hpk[..], &m[..], &encode32(2 * params.key_bytes)[..]])?;

    let ct = encrypt_cpa(params, &m[..], &r[..], pk)?;

    let r_prime = hash256(&[&r[..], &ct[..], &encode32(params.ciphertext_bytes)[..]])?;
    let key = hash256(&[&r_prime[..], &k[..], &encode32(2 * params.key_bytes)[..]])?;

    trace!(ct_len = ct.len(), "encapsulated");
    Ok((ct, key))
}

/// IND-CCA2 decapsulation with implicit rejection.
///
/// A well-formed but invalid ciphertext yields a pseudorandom key derived
/// from `z`; only wrong lengths are errors.
pub(crate) fn kem_decaps(params: &ParameterSet, sk: &[u8], ct: &[u8]) -> Result<SharedSecretBytes> {
    let _span = debug_span!("saber.decaps", variant = params.name(), ct_len = ct.len()).entered();

    validate::key(
        sk.len() == params.secret_key_bytes,
        "Saber secret",
        "secret key has the wrong length",
    )?;
    validate::ciphertext(
        ct.len() == params.ciphertext_bytes,
        params.name(),
        "ciphertext has the wrong length",
    )?;

    let parts = SecretKeyParts::split(params, sk);

    let m = decrypt_cpa(params, ct, parts.sk_cpa)?;
    let (r, k) = hash512(&[parts.hpk, &m[..], &encode32(2 * params.key_bytes)[..]])?;
    let ct_prime = encrypt_cpa(params, &m[..], &r[..], parts.pk)?;

    let equal = ct_eq_choice(&ct_prime, ct);
    let mut selected = Zeroizing::new([0u8; SABER_SS_BYTES]);
    ct_select_bytes(&mut selected[..], parts.z, &k[..], equal);

    let r_prime = hash256(&[&r[..], ct, &encode32(params.ciphertext_bytes)[..]])?;
    let key = hash256(&[&r_prime[..], &selected[..], &encode32(2 * params.key_bytes)[..]])?;

    trace!("decapsulated");
    Ok(key)
}
