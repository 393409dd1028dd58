// kem/src/saber/pke.rs

//! The CPA-secure SABER encryption scheme exposed through `api::Pke`.
//!
//! Messages are exactly `KEYBYTES` long. There is no associated data and no
//! chosen-ciphertext protection at this layer; use the KEM for that.

use alloc::vec::Vec;
use core::marker::PhantomData;

use rand::{CryptoRng, RngCore};
use saber_api::error::{Error as ApiError, Result as ApiResult};
use saber_api::Pke;
use saber_params::{ParameterSet, Variant};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::cpa_pke::{decrypt_cpa, encrypt_cpa, keypair_cpa};
use super::params::SaberParams;
use crate::error::Result;

/// CPA public key: `seed_A ∥ packed(b_p)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaberPkePublicKey(Vec<u8>);

/// CPA secret key: `packed(s)`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SaberPkeSecretKey(Vec<u8>);

/// CPA ciphertext: `packed(c_m) ∥ packed(b')`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaberPkeCiphertext(Vec<u8>);

impl AsRef<[u8]> for SaberPkePublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SaberPkeSecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for SaberPkeCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for SaberPkeSecretKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("SaberPkeSecretKey([REDACTED])")
    }
}

impl SaberPkePublicKey {
    /// Wrap raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl SaberPkeSecretKey {
    /// Wrap raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    fn take(mut bytes: Zeroizing<Vec<u8>>) -> Self {
        Self(core::mem::take(&mut *bytes))
    }
}

impl SaberPkeCiphertext {
    /// Wrap raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// SABER CPA encryption over a fixed, type-level parameter set.
pub struct SaberPke<P: SaberParams> {
    _params: PhantomData<P>,
}

impl<P: SaberParams> SaberPke<P> {
    /// Deterministic encryption with a caller-supplied noise seed.
    pub fn encrypt_with_seed(
        pk: &SaberPkePublicKey,
        plaintext: &[u8],
        seed: &[u8],
    ) -> ApiResult<SaberPkeCiphertext> {
        let ct = encrypt_cpa(&P::PARAMS, plaintext, seed, &pk.0)?;
        Ok(SaberPkeCiphertext(ct))
    }
}

fn reject_aad(aad: Option<&[u8]>) -> ApiResult<()> {
    if aad.is_some() {
        return Err(ApiError::InvalidParameter {
            context: "SABER PKE",
            #[cfg(feature = "std")]
            message: "associated data is not supported".into(),
        });
    }
    Ok(())
}

impl<P: SaberParams> Pke for SaberPke<P> {
    type PublicKey = SaberPkePublicKey;
    type SecretKey = SaberPkeSecretKey;
    type Ciphertext = SaberPkeCiphertext;

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let (pk, sk) = keypair_cpa(&P::PARAMS, rng)?;
        Ok((SaberPkePublicKey(pk), SaberPkeSecretKey::take(sk)))
    }

    fn encrypt<R: RngCore + CryptoRng>(
        pk_recipient: &Self::PublicKey,
        plaintext: &[u8],
        aad: Option<&[u8]>,
        rng: &mut R,
    ) -> ApiResult<Self::Ciphertext> {
        reject_aad(aad)?;
        let mut seed = Zeroizing::new([0u8; 32]);
        rng.fill_bytes(&mut seed[..]);
        Self::encrypt_with_seed(pk_recipient, plaintext, &seed[..])
    }

    fn decrypt(
        sk_recipient: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
        aad: Option<&[u8]>,
    ) -> ApiResult<Vec<u8>> {
        reject_aad(aad)?;
        let mut m = decrypt_cpa(&P::PARAMS, &ciphertext.0, &sk_recipient.0)?;
        Ok(core::mem::take(&mut *m))
    }
}

/// SABER CPA encryption over a parameter set chosen at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaberCpaPke {
    params: ParameterSet,
}

impl SaberCpaPke {
    /// Build from an arbitrary parameter set; rejects inconsistent sets.
    pub fn new(params: ParameterSet) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// One of the three canonical sets.
    pub fn from_variant(variant: Variant) -> Self {
        Self {
            params: *variant.params(),
        }
    }

    /// The parameters in use.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Generate a key pair.
    pub fn keypair<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(SaberPkePublicKey, SaberPkeSecretKey)> {
        let (pk, sk) = keypair_cpa(&self.params, rng)?;
        Ok((SaberPkePublicKey(pk), SaberPkeSecretKey::take(sk)))
    }

    /// Encrypt a `KEYBYTES` message with the noise seed `seed`.
    pub fn encrypt(
        &self,
        pk: &SaberPkePublicKey,
        message: &[u8],
        seed: &[u8],
    ) -> Result<SaberPkeCiphertext> {
        Ok(SaberPkeCiphertext(encrypt_cpa(&self.params, message, seed, &pk.0)?))
    }

    /// Recover the message.
    pub fn decrypt(
        &self,
        sk: &SaberPkeSecretKey,
        ct: &SaberPkeCiphertext,
    ) -> Result<Zeroizing<Vec<u8>>> {
        Ok(decrypt_cpa(&self.params, &ct.0, &sk.0)?)
    }
}
