// Path: crates/algorithms/src/poly/mod.rs
//! Ring arithmetic over Z_N[x]/(x^256 + 1)
//!
//! Elements carry their modulus at runtime so that the same code serves
//! the q, p, t and binary rings the scheme moves between.

pub mod bits;
pub mod polynomial;
pub mod serialize;

/// Prelude for easy importing of common polynomial types and functions.
pub mod prelude {
    pub use super::bits::{BitReader, BitWriter};
    pub use super::polynomial::{Polynomial, N};
    pub use super::serialize::{bs2pol, pol2bs};
}
