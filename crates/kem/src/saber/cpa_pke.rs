// kem/src/saber/cpa_pke.rs

//! SABER CPA-secure public-key encryption.
//!
//! Byte layouts:
//! * public key  = `seed_A ∥ polvec2bs(b_p, p)`
//! * secret key  = `polvec2bs(s, q)`
//! * ciphertext  = `pol2bs(c_m, t) ∥ polvec2bs(b'_p, p)`

use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};
use saber_algorithms::error::{validate, Result as AlgoResult};
use saber_algorithms::poly::serialize::{bs2pol, pol2bs};
use saber_algorithms::{ExtendableOutputFunction, Polynomial, ShakeXof128};
use saber_params::ParameterSet;
use tracing::debug_span;
use zeroize::Zeroizing;

use super::polyvec::{bs2polvec, inner_prod, matrix_vector_mul, polvec2bs};
use super::sampling::{gen_matrix, gen_secret};

/// Rounding constant h1: every coefficient `2^(EQ-EP-1)`.
pub(crate) fn h1(params: &ParameterSet, modulus: u32) -> AlgoResult<Polynomial> {
    Polynomial::filled(1i64 << (params.eq - params.ep - 1), modulus)
}

/// Rounding constant h2: every coefficient `2^(EP-2) - 2^(EP-ET-1) + 2^(EQ-EP-1)`.
pub(crate) fn h2(params: &ParameterSet) -> AlgoResult<Polynomial> {
    let value = (1i64 << (params.ep - 2)) - (1i64 << (params.ep - params.et - 1))
        + (1i64 << (params.eq - params.ep - 1));
    Polynomial::filled(value, params.p())
}

/// Generate a CPA key pair from fresh randomness.
pub(crate) fn keypair_cpa<R: RngCore + CryptoRng>(
    params: &ParameterSet,
    rng: &mut R,
) -> AlgoResult<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    let mut seed_a = Zeroizing::new(alloc::vec![0u8; params.seed_bytes]);
    rng.fill_bytes(&mut seed_a);
    let mut seed_s = Zeroizing::new(alloc::vec![0u8; params.noise_seed_bytes]);
    rng.fill_bytes(&mut seed_s);

    keypair_cpa_from_seeds(params, &seed_a, &seed_s)
}

/// Deterministic key generation from the raw matrix seed and the noise seed.
///
/// The raw matrix seed is re-hashed through SHAKE-128 before use so that
/// the RNG output never appears in the public key.
pub(crate) fn keypair_cpa_from_seeds(
    params: &ParameterSet,
    seed_a_raw: &[u8],
    seed_s: &[u8],
) -> AlgoResult<(Vec<u8>, Zeroizing<Vec<u8>>)> {
    let _span = debug_span!("saber.pke.keygen", variant = params.name()).entered();
    validate::length("matrix seed", seed_a_raw.len(), params.seed_bytes)?;
    validate::length("noise seed", seed_s.len(), params.noise_seed_bytes)?;

    let q = params.q();
    let p = params.p();

    let seed_a = ShakeXof128::generate(seed_a_raw, params.seed_bytes)?;
    let a = gen_matrix(&seed_a, params.l, params.n, params.eq)?;
    let s = gen_secret(seed_s, params.l, params.n, params.mu, q)?;

    let b = matrix_vector_mul(&a.transpose(), &s, q)?.add_each(&h1(params, q)?)?;
    let b_p = b.shiftright(params.eq - params.ep)?.reduce_mod(p)?;

    let mut pk = Vec::with_capacity(params.indcpa_public_key_bytes);
    pk.extend_from_slice(&seed_a);
    pk.extend_from_slice(&polvec2bs(&b_p, p)?);

    let sk = Zeroizing::new(polvec2bs(&s, q)?);

    debug_assert_eq!(pk.len(), params.indcpa_public_key_bytes);
    debug_assert_eq!(sk.len(), params.indcpa_secret_key_bytes);
    Ok((pk, sk))
}

/// Encrypt a `KEYBYTES` message under `pk` with the noise seed `seed_sp`.
pub(crate) fn encrypt_cpa(
    params: &ParameterSet,
    m: &[u8],
    seed_sp: &[u8],
    pk: &[u8],
) -> AlgoResult<Vec<u8>> {
    let _span = debug_span!("saber.pke.encrypt", variant = params.name(), pk_len = pk.len()).entered();
    validate::length("message", m.len(), params.key_bytes)?;
    validate::length("noise seed", seed_sp.len(), params.noise_seed_bytes)?;
    validate::length("CPA public key", pk.len(), params.indcpa_public_key_bytes)?;

    let q = params.q();
    let p = params.p();
    let t = params.t();

    let (seed_a, packed_b) = pk.split_at(params.seed_bytes);
    let a = gen_matrix(seed_a, params.l, params.n, params.eq)?;
    let sp = gen_secret(seed_sp, params.l, params.n, params.mu, q)?;

    let bp = matrix_vector_mul(&a, &sp, q)?.add_each(&h1(params, q)?)?;
    let bp_p = bp.shiftright(params.eq - params.ep)?.reduce_mod(p)?;

    let b = bs2polvec(packed_b, params.l)?;
    let vp = inner_prod(&b, &sp.reduce_mod(p)?, p)?;

    let m_p = bs2pol(m)?.reduce_mod(p)?.shiftleft(params.ep - 1)?;
    let c_m = vp
        .sub(&m_p)?
        .add(&h1(params, p)?)?
        .shiftright(params.ep - params.et)?
        .reduce_mod(t)?;

    let mut ct = Vec::with_capacity(params.ciphertext_bytes);
    ct.extend_from_slice(&pol2bs(&c_m, t)?);
    ct.extend_from_slice(&polvec2bs(&bp_p, p)?);
    Ok(ct)
}

/// Recover the `KEYBYTES` message from a CPA ciphertext.
pub(crate) fn decrypt_cpa(
    params: &ParameterSet,
    ct: &[u8],
    sk: &[u8],
) -> AlgoResult<Zeroizing<Vec<u8>>> {
    let _span = debug_span!("saber.pke.decrypt", variant = params.name(), ct_len = ct.len()).entered();
    validate::length("CPA ciphertext", ct.len(), params.ciphertext_bytes)?;
    validate::length("CPA secret key", sk.len(), params.indcpa_secret_key_bytes)?;

    let p = params.p();

    let (packed_cm, packed_bp) = ct.split_at(params.cm_bytes());
    let c_m = bs2pol(packed_cm)?
        .reduce_mod(p)?
        .shiftleft(params.ep - params.et)?;
    let bp = bs2polvec(packed_bp, params.l)?;
    let s = bs2polvec(sk, params.l)?;

    let v = inner_prod(&bp, &s.reduce_mod(p)?, p)?;
    let m = v
        .sub(&c_m)?
        .add(&h2(params)?)?
        .shiftright(params.ep - 1)?
        .reduce_mod(2)?;

    Ok(Zeroizing::new(pol2bs(&m, 2)?))
}
