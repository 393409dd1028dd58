// kem/src/saber/sampling.rs

//! Deterministic expansion of seeds into the public matrix and secrets.
//!
//! Both functions read SHAKE-128 output as one big-endian bit stream.

use alloc::vec::Vec;

use saber_algorithms::error::{validate, Result as AlgoResult};
use saber_algorithms::poly::bits::BitReader;
use saber_algorithms::poly::polynomial::N;
use saber_algorithms::{ExtendableOutputFunction, Polynomial, ShakeXof128};
use zeroize::Zeroizing;

use super::polyvec::{PolyMatrix, PolyVec};

/// Expand `seed` into the L×L public matrix mod 2^`eq`.
///
/// Slots are filled row-major; each consumes `n` consecutive `eq`-bit
/// groups as coefficients 0..n-1.
pub fn gen_matrix(seed: &[u8], l: usize, n: usize, eq: u32) -> AlgoResult<PolyMatrix> {
    validate::length("gen_matrix ring dimension", n, N)?;
    validate::parameter(l > 0, "l", "module rank must be positive")?;
    validate::parameter(eq > 0 && eq < 32, "eq", "modulus exponent must be in 1..32")?;

    let len = l * l * n * eq as usize / 8;
    let buf = ShakeXof128::generate(seed, len)?;
    let mut reader = BitReader::new(&buf);
    let modulus = 1u32 << eq;

    let mut rows = Vec::with_capacity(l);
    for _ in 0..l {
        let mut row = Vec::with_capacity(l);
        for _ in 0..l {
            let mut coeffs = [0i64; N];
            for c in coeffs.iter_mut() {
                *c = reader.read(eq)? as i64;
            }
            row.push(Polynomial::new(&coeffs, modulus)?);
        }
        rows.push(PolyVec::new(row));
    }
    PolyMatrix::new(rows)
}

/// Expand `seed` into a vector of L small secrets mod `modulus`.
///
/// Each coefficient is `popcount(g1) - popcount(g2)` for two consecutive
/// `mu/2`-bit groups, so it lies in `[-mu/2, mu/2]` before reduction.
pub fn gen_secret(seed: &[u8], l: usize, n: usize, mu: u32, modulus: u32) -> AlgoResult<PolyVec> {
    validate::length("gen_secret ring dimension", n, N)?;
    validate::parameter(l > 0, "l", "module rank must be positive")?;
    validate::parameter(mu > 0 && mu % 2 == 0, "mu", "MU must be a positive even number")?;

    let len = l * n * mu as usize / 8;
    let buf = Zeroizing::new(ShakeXof128::generate(seed, len)?);
    let mut reader = BitReader::new(&buf);
    let half = mu / 2;

    let mut polys = Vec::with_capacity(l);
    for _ in 0..l {
        let mut coeffs = Zeroizing::new([0i64; N]);
        for c in coeffs.iter_mut() {
            let g1 = popcount_group(&mut reader, half)?;
            let g2 = popcount_group(&mut reader, half)?;
            *c = g1 as i64 - g2 as i64;
        }
        polys.push(Polynomial::new(&coeffs[..], modulus)?);
    }
    Ok(PolyVec::new(polys))
}

// Groups wider than 64 bits are read in pieces.
fn popcount_group(reader: &mut BitReader<'_>, bits: u32) -> AlgoResult<u32> {
    let mut left = bits;
    let mut ones = 0;
    while left > 0 {
        let width = left.min(64);
        ones += reader.read(width)?.count_ones();
        left -= width;
    }
    Ok(ones)
}
