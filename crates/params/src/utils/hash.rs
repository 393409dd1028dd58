//! Constants for hash functions

/// Output size of SHA3-256 in bytes
pub const SHA3_256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA3-512 in bytes
pub const SHA3_512_OUTPUT_SIZE: usize = 64;

/// Internal block size of SHA3-256 in bytes
pub const SHA3_256_BLOCK_SIZE: usize = 136;

/// Internal block size of SHA3-512 in bytes
pub const SHA3_512_BLOCK_SIZE: usize = 72;

/// Rate of SHAKE128 in bytes
pub const SHAKE128_RATE: usize = 168;
