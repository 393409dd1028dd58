//! Cryptographic hash functions
//!
//! Fixed-output SHA3 engines used by the KEM transform. The Keccak
//! permutation itself comes from the RustCrypto `sha3` crate; this module
//! gives it the workspace's `HashFunction` shape.

use alloc::vec::Vec;

use crate::error::Result;

pub mod sha3;

pub use self::sha3::{Sha3_256, Sha3_256Algorithm, Sha3_512, Sha3_512Algorithm};

/// Variable-length hash output
pub type Hash = Vec<u8>;

/// Compile-time constants of a hash algorithm
pub trait HashAlgorithm {
    /// Output size in bytes
    const OUTPUT_SIZE: usize;
    /// Rate of the sponge (block size) in bytes
    const BLOCK_SIZE: usize;
    /// Algorithm identifier
    const ALGORITHM_ID: &'static str;
}

/// Streaming hash function
pub trait HashFunction: Sized {
    /// Marker type carrying the algorithm constants
    type Algorithm: HashAlgorithm;

    /// Digest type produced by `finalize`
    type Output: AsRef<[u8]> + Clone;

    /// Creates a new instance of the hash function
    fn new() -> Self;

    /// Absorbs more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Finalizes the hash computation and resets the state
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Output size in bytes
    fn output_size() -> usize {
        Self::Algorithm::OUTPUT_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Algorithm name
    fn name() -> &'static str {
        Self::Algorithm::ALGORITHM_ID
    }

    /// Hash data in a single call
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        hasher.update(data)?;
        hasher.finalize()
    }

    /// Hash the concatenation of several inputs without allocating it
    fn digest_parts(parts: &[&[u8]]) -> Result<Self::Output> {
        let mut hasher = Self::new();
        for part in parts {
            hasher.update(part)?;
        }
        hasher.finalize()
    }
}
