//! SHA-3 hash function engines (FIPS 202)

use ::sha3::Digest as _;
use zeroize::Zeroize;

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;

use saber_params::utils::hash::{
    SHA3_256_BLOCK_SIZE, SHA3_256_OUTPUT_SIZE, SHA3_512_BLOCK_SIZE, SHA3_512_OUTPUT_SIZE,
};

/// Marker type for **SHA3-256**.
pub enum Sha3_256Algorithm {}
/// Marker type for **SHA3-512**.
pub enum Sha3_512Algorithm {}

impl HashAlgorithm for Sha3_256Algorithm {
    const OUTPUT_SIZE: usize = SHA3_256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA3_256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA3-256";
}

impl HashAlgorithm for Sha3_512Algorithm {
    const OUTPUT_SIZE: usize = SHA3_512_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA3_512_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA3-512";
}

/// Streaming **SHA3-256** engine.
#[derive(Clone, Default)]
pub struct Sha3_256 {
    inner: ::sha3::Sha3_256,
}

/// Streaming **SHA3-512** engine.
#[derive(Clone, Default)]
pub struct Sha3_512 {
    inner: ::sha3::Sha3_512,
}

macro_rules! impl_sha3_variant {
    ($name:ident, $out:expr, $alg:ty) => {
        impl HashFunction for $name {
            type Algorithm = $alg;
            type Output = Digest<$out>;

            fn new() -> Self {
                Self::default()
            }

            fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
                self.inner.update(data);
                Ok(self)
            }

            fn finalize(&mut self) -> Result<Self::Output> {
                let mut out = [0u8; $out];
                out.copy_from_slice(&self.inner.finalize_reset());
                let digest = Digest::new(out);
                out.zeroize();
                Ok(digest)
            }
        }
    };
}

impl_sha3_variant!(Sha3_256, SHA3_256_OUTPUT_SIZE, Sha3_256Algorithm);
impl_sha3_variant!(Sha3_512, SHA3_512_OUTPUT_SIZE, Sha3_512Algorithm);
