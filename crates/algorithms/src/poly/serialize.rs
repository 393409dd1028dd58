//! Packing ring elements to and from byte strings
//!
//! A ring element mod 2^k packs into exactly 32·k bytes: 256 k-bit groups
//! in a big-endian bit stream, starting with the coefficient of x^255.

use alloc::vec;
use alloc::vec::Vec;

use super::bits::{BitReader, BitWriter};
use super::polynomial::{Polynomial, N};
use crate::error::{validate, Result};

/// Bytes per bit of coefficient width
pub const BYTES_PER_BIT: usize = N / 8;

/// log2 of a power-of-two modulus
pub fn bit_width(modulus: u32) -> Result<u32> {
    validate::parameter(
        modulus >= 2 && modulus.is_power_of_two(),
        "modulus",
        "packing requires a power-of-two modulus",
    )?;
    Ok(modulus.trailing_zeros())
}

/// Decode a byte string into a ring element mod 2^(len/32)
pub fn bs2pol(bytes: &[u8]) -> Result<Polynomial> {
    validate::multiple_of("bs2pol", bytes.len(), BYTES_PER_BIT)?;
    let k = (bytes.len() / BYTES_PER_BIT) as u32;
    validate::parameter(k < 32, "bytes", "coefficient width must be below 32 bits")?;

    let mut reader = BitReader::new(bytes);
    let mut coeffs = vec![0u32; N];
    for index in (0..N).rev() {
        coeffs[index] = reader.read(k)? as u32;
    }
    Ok(Polynomial::from_reduced(coeffs, 1 << k))
}

/// Encode a ring element; `modulus` must match the element's own
pub fn pol2bs(poly: &Polynomial, modulus: u32) -> Result<Vec<u8>> {
    validate::parameter(
        poly.modulus() == modulus,
        "modulus",
        "element modulus does not match the packing modulus",
    )?;
    let k = bit_width(modulus)?;

    let mut writer = BitWriter::with_capacity(N * k as usize);
    for &c in poly.coeffs().iter().rev() {
        writer.write(c as u64, k)?;
    }
    Ok(writer.finish())
}
