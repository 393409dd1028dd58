//! Shared helpers for the SABER integration tests

use rand::{CryptoRng, RngCore};
use saber_api::{Kem, Result};

/// Outcome of one KeyGen / Encaps / Decaps cycle
pub struct KemCycle<K: Kem> {
    /// Recipient public key
    pub public_key: K::PublicKey,
    /// Recipient secret key
    pub secret_key: K::SecretKey,
    /// Encapsulation sent to the recipient
    pub ciphertext: K::Ciphertext,
    /// Session key on the sender side
    pub sender_key: K::SharedSecret,
    /// Session key on the recipient side
    pub recipient_key: K::SharedSecret,
}

/// Run a full key exchange with `K`
pub fn run_kem_cycle<K: Kem, R: RngCore + CryptoRng>(rng: &mut R) -> Result<KemCycle<K>> {
    let keypair = K::keypair(rng)?;
    let public_key = K::public_key(&keypair);
    let secret_key = K::secret_key(&keypair);
    let (ciphertext, sender_key) = K::encapsulate(rng, &public_key)?;
    let recipient_key = K::decapsulate(&secret_key, &ciphertext)?;

    Ok(KemCycle {
        public_key,
        secret_key,
        ciphertext,
        sender_key,
        recipient_key,
    })
}

/// Copy of `bytes` with one bit flipped at `index`
pub fn flip_bit(bytes: &[u8], index: usize, bit: u8) -> Vec<u8> {
    let mut out = bytes.to_vec();
    out[index] ^= 1 << (bit % 8);
    out
}
