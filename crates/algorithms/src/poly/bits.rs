//! Conversions between bytes, bit vectors and integers
//!
//! Every conversion is big-endian: the most significant bit of the first
//! byte is bit 0 of the stream, and integers are written most significant
//! bit first.

use alloc::vec::Vec;

use crate::error::{validate, Result};

/// Widest group `BitReader`/`BitWriter` and the integer forms accept
pub const MAX_BIT_WIDTH: u32 = 64;

/// Expand bytes into a bit vector, byte-major, MSB first
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1 == 1);
        }
    }
    bits
}

/// Pack a bit vector back into bytes
///
/// The bit count must be a multiple of 8.
pub fn bits_to_bytes(bits: &[bool]) -> Result<Vec<u8>> {
    validate::parameter(
        bits.len() % 8 == 0,
        "bits",
        "bit vector length must be a multiple of 8",
    )?;

    Ok(bits
        .chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect())
}

/// Fixed-width big-endian bit vector of an integer
///
/// Bits above `width` are discarded; shorter values are zero-padded.
pub fn int_to_bits(value: u64, width: u32) -> Result<Vec<bool>> {
    check_width(width)?;
    Ok((0..width).rev().map(|i| (value >> i) & 1 == 1).collect())
}

/// Integer value of a big-endian bit vector of at most 64 bits
pub fn bits_to_int(bits: &[bool]) -> Result<u64> {
    validate::parameter(
        bits.len() <= MAX_BIT_WIDTH as usize,
        "bits",
        "at most 64 bits fit an integer",
    )?;
    Ok(bits.iter().fold(0u64, |acc, &b| (acc << 1) | b as u64))
}

/// Integer value of up to 8 big-endian bytes
pub fn bytes_to_int(bytes: &[u8]) -> Result<u64> {
    validate::parameter(bytes.len() <= 8, "bytes", "at most 8 bytes fit an integer")?;
    Ok(bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64))
}

/// Big-endian encoding of an integer in exactly `len` bytes (1..=8)
///
/// High-order bytes that do not fit are discarded.
pub fn int_to_bytes(value: u64, len: usize) -> Result<Vec<u8>> {
    validate::parameter(
        (1..=8).contains(&len),
        "len",
        "integer byte length must be between 1 and 8",
    )?;
    Ok(value.to_be_bytes()[8 - len..].to_vec())
}

fn check_width(width: u32) -> Result<()> {
    validate::parameter(
        width > 0 && width <= MAX_BIT_WIDTH,
        "width",
        "bit width must be between 1 and 64",
    )
}

/// Reads consecutive fixed-width big-endian groups from a byte slice
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BitReader<'a> {
    /// Start reading at the first bit of `bytes`
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Bits not yet consumed
    pub fn remaining(&self) -> usize {
        self.bytes.len() * 8 - self.pos
    }

    /// Consume the next `width` bits as an unsigned integer
    pub fn read(&mut self, width: u32) -> Result<u64> {
        check_width(width)?;
        validate::min_length("BitReader", self.remaining(), width as usize)?;

        let mut value = 0u64;
        for _ in 0..width {
            let bit = (self.bytes[self.pos / 8] >> (7 - self.pos % 8)) & 1;
            value = (value << 1) | bit as u64;
            self.pos += 1;
        }
        Ok(value)
    }
}

/// Appends fixed-width big-endian groups to a byte buffer
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    len: usize,
}

impl BitWriter {
    /// Empty writer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bits.div_ceil(8)),
            len: 0,
        }
    }

    /// Append the low `width` bits of `value`, most significant first
    pub fn write(&mut self, value: u64, width: u32) -> Result<()> {
        check_width(width)?;
        for i in (0..width).rev() {
            if self.len % 8 == 0 {
                self.bytes.push(0);
            }
            let bit = ((value >> i) & 1) as u8;
            let last = self.bytes.len() - 1;
            self.bytes[last] |= bit << (7 - self.len % 8);
            self.len += 1;
        }
        Ok(())
    }

    /// Number of bits written so far
    pub fn bit_len(&self) -> usize {
        self.len
    }

    /// Finish writing; a trailing partial byte is zero-padded
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }
}
