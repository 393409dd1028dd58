//! Primitive layer of the saber workspace
//!
//! This crate provides the building blocks the SABER scheme is assembled
//! from: SHA3-256/SHA3-512 and SHAKE-128 behind the workspace's hash and XOF
//! traits, lossless bit/byte/integer conversions, and ring elements of
//! Z_N[x]/(x^256 + 1) with their byte codec.
//!
//! The crate needs an allocator; `std` only adds `std::error::Error` impls.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{HashAlgorithm, HashFunction, Sha3_256, Sha3_512};

// XOF implementations
pub mod xof;
pub use xof::{ExtendableOutputFunction, ShakeXof128};

// Ring elements, bit codec and ring codec
pub mod poly;
pub use poly::polynomial::Polynomial;

// Type system
pub mod types;
pub use types::Digest;
