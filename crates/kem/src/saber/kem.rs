// kem/src/saber/kem.rs

//! Typed SABER keys and the `api::Kem` implementations.

use alloc::vec::Vec;
use core::fmt;
use core::marker::PhantomData;

use rand::{CryptoRng, RngCore};
use saber_api::error::{Error as ApiError, Result as ApiResult};
use saber_api::{Kem, Serialize, SerializeSecret};
use saber_internal::constant_time::ct_eq;
use saber_params::{ParameterSet, Variant};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::ind_cca::{kem_decaps, kem_encaps, kem_encaps_with_seed, kem_keygen};
use super::params::{SaberParams, SABER_SS_BYTES};
use crate::error::{validate, Result};

/// SABER public key.
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct SaberPublicKey(Vec<u8>);

/// SABER secret key: `z ∥ H(pk) ∥ pk ∥ sk_cpa`.
///
/// Bytes leave this type only through `to_bytes_zeroizing`.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SaberSecretKey(Vec<u8>);

/// SABER ciphertext.
#[derive(Clone, PartialEq, Eq)]
pub struct SaberCiphertext(Vec<u8>);

/// 32-byte session key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SaberSharedSecret(Vec<u8>);

impl SaberPublicKey {
    /// Wrap raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the encoded key.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Parse a key and check its length against `params`.
    pub fn from_bytes_for(params: &ParameterSet, bytes: &[u8]) -> Result<Self> {
        validate::key(
            bytes.len() == params.public_key_bytes,
            "Saber public",
            "public key has the wrong length",
        )?;
        Ok(Self(bytes.to_vec()))
    }
}

impl AsRef<[u8]> for SaberPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SaberPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaberPublicKey").field("len", &self.0.len()).finish()
    }
}

impl SaberSecretKey {
    /// Wrap raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    // Moves the bytes out; the emptied buffer is still wiped on drop.
    fn take(mut bytes: Zeroizing<Vec<u8>>) -> Self {
        Self(core::mem::take(&mut *bytes))
    }

    /// Parse a key and check its length against `params`.
    pub fn from_bytes_for(params: &ParameterSet, bytes: &[u8]) -> Result<Self> {
        validate::key(
            bytes.len() == params.secret_key_bytes,
            "Saber secret",
            "secret key has the wrong length",
        )?;
        Ok(Self(bytes.to_vec()))
    }
}

impl fmt::Debug for SaberSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SaberSecretKey([REDACTED])")
    }
}

impl SaberCiphertext {
    /// Wrap raw bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the encoded ciphertext.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Parse a ciphertext and check its length against `params`.
    pub fn from_bytes_for(params: &ParameterSet, bytes: &[u8]) -> Result<Self> {
        validate::ciphertext(
            bytes.len() == params.ciphertext_bytes,
            params.name(),
            "ciphertext has the wrong length",
        )?;
        Ok(Self(bytes.to_vec()))
    }
}

impl AsRef<[u8]> for SaberCiphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl AsMut<[u8]> for SaberCiphertext {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.0
    }
}

impl fmt::Debug for SaberCiphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaberCiphertext").field("len", &self.0.len()).finish()
    }
}

impl SaberSharedSecret {
    pub(crate) fn from_array(bytes: &[u8; SABER_SS_BYTES]) -> Self {
        Self(bytes.to_vec())
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl PartialEq for SaberSharedSecret {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.0, &other.0)
    }
}

impl Eq for SaberSharedSecret {}

impl fmt::Debug for SaberSharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SaberSharedSecret([REDACTED])")
    }
}

fn reject_empty(bytes: &[u8], context: &'static str) -> ApiResult<()> {
    if bytes.is_empty() {
        return Err(ApiError::InvalidLength {
            context,
            expected: 1,
            actual: 0,
        });
    }
    Ok(())
}

impl Serialize for SaberPublicKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        reject_empty(bytes, "SaberPublicKey")?;
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl Serialize for SaberCiphertext {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        reject_empty(bytes, "SaberCiphertext")?;
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl SerializeSecret for SaberSecretKey {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        reject_empty(bytes, "SaberSecretKey")?;
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

impl SerializeSecret for SaberSharedSecret {
    fn from_bytes(bytes: &[u8]) -> ApiResult<Self> {
        reject_empty(bytes, "SaberSharedSecret")?;
        Ok(Self(bytes.to_vec()))
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.0.clone())
    }
}

/// SABER KEM over a fixed, type-level parameter set.
///
/// Use the `LightSaber`, `Saber` and `FireSaber` aliases.
pub struct SaberScheme<P: SaberParams> {
    _params: PhantomData<P>,
}

impl<P: SaberParams> Kem for SaberScheme<P> {
    type PublicKey = SaberPublicKey;
    type SecretKey = SaberSecretKey;
    type SharedSecret = SaberSharedSecret;
    type Ciphertext = SaberCiphertext;
    type KeyPair = (SaberPublicKey, SaberSecretKey);

    fn name() -> &'static str {
        P::NAME
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let (pk, sk) = kem_keygen(&P::PARAMS, rng)?;
        Ok((SaberPublicKey(pk), SaberSecretKey::take(sk)))
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.0.clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.1.clone()
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> ApiResult<(Self::Ciphertext, Self::SharedSecret)> {
        let (ct, ss) = kem_encaps(&P::PARAMS, &public_key.0, rng)?;
        Ok((SaberCiphertext(ct), SaberSharedSecret::from_array(&ss)))
    }

    fn decapsulate(
        secret_key: &Self::SecretKey,
        ciphertext: &Self::Ciphertext,
    ) -> ApiResult<Self::SharedSecret> {
        let ss = kem_decaps(&P::PARAMS, secret_key.as_bytes(), &ciphertext.0)?;
        Ok(SaberSharedSecret::from_array(&ss))
    }
}

/// SABER KEM over a parameter set chosen at run time.
///
/// This is the entry point for a MU override; the byte sizes never change
/// with MU, only the secret distribution does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaberKem {
    params: ParameterSet,
}

impl SaberKem {
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

    /// A canonical set with a different secret distribution width.
    pub fn with_mu(variant: Variant, mu: u32) -> Result<Self> {
        Self::new(variant.params().with_mu(mu)?)
    }

    /// The parameters in use.
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    /// Generate a key pair.
    pub fn keypair<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
    ) -> Result<(SaberPublicKey, SaberSecretKey)> {
        let (pk, sk) = kem_keygen(&self.params, rng)?;
        Ok((SaberPublicKey(pk), SaberSecretKey::take(sk)))
    }

    /// Derive a session key against `pk`.
    pub fn encapsulate<R: RngCore + CryptoRng>(
        &self,
        pk: &SaberPublicKey,
        rng: &mut R,
    ) -> Result<(SaberCiphertext, SaberSharedSecret)> {
        let (ct, ss) = kem_encaps(&self.params, &pk.0, rng)?;
        Ok((SaberCiphertext(ct), SaberSharedSecret::from_array(&ss)))
    }

    /// Deterministic encapsulation from a caller-supplied `KEYBYTES` seed.
    pub fn encapsulate_with_seed(
        &self,
        pk: &SaberPublicKey,
        seed: &[u8],
    ) -> Result<(SaberCiphertext, SaberSharedSecret)> {
        let (ct, ss) = kem_encaps_with_seed(&self.params, &pk.0, seed)?;
        Ok((SaberCiphertext(ct), SaberSharedSecret::from_array(&ss)))
    }

    /// Recover the session key; invalid ciphertexts of the right size yield
    /// a pseudorandom key rather than an error.
    pub fn decapsulate(&self, sk: &SaberSecretKey, ct: &SaberCiphertext) -> Result<SaberSharedSecret> {
        let ss = kem_decaps(&self.params, sk.as_bytes(), &ct.0)?;
        Ok(SaberSharedSecret::from_array(&ss))
    }
}

impl Default for SaberKem {
    fn default() -> Self {
        Self::from_variant(Variant::LightSaber)
    }
}
