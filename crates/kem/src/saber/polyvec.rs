// kem/src/saber/polyvec.rs

//! Vectors and square matrices of ring elements, with their byte codec.

use alloc::vec::Vec;

use saber_algorithms::error::{validate, Error as AlgoError, Result as AlgoResult};
use saber_algorithms::poly::serialize::{bs2pol, pol2bs, BYTES_PER_BIT};
use saber_algorithms::Polynomial;
use zeroize::Zeroize;

/// An ordered sequence of ring elements of one length L.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize)]
pub struct PolyVec {
    polys: Vec<Polynomial>,
}

impl PolyVec {
    /// Wrap a list of ring elements.
    pub fn new(polys: Vec<Polynomial>) -> Self {
        Self { polys }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// True for the empty vector.
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Entries in order.
    pub fn polys(&self) -> &[Polynomial] {
        &self.polys
    }

    /// Apply a fallible element-wise operation.
    pub fn try_map<F>(&self, f: F) -> AlgoResult<Self>
    where
        F: Fn(&Polynomial) -> AlgoResult<Polynomial>,
    {
        let polys = self.polys.iter().map(f).collect::<AlgoResult<Vec<_>>>()?;
        Ok(Self { polys })
    }

    /// Add the same element to every entry.
    pub fn add_each(&self, p: &Polynomial) -> AlgoResult<Self> {
        self.try_map(|entry| entry.add(p))
    }

    /// `shiftright` on every entry.
    pub fn shiftright(&self, s: u32) -> AlgoResult<Self> {
        self.try_map(|entry| entry.shiftright(s))
    }

    /// `reduce_mod` on every entry.
    pub fn reduce_mod(&self, modulus: u32) -> AlgoResult<Self> {
        self.try_map(|entry| entry.reduce_mod(modulus))
    }
}

/// A square L×L matrix of ring elements, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolyMatrix {
    rows: Vec<PolyVec>,
}

impl PolyMatrix {
    /// Build from rows; every row must be as long as there are rows.
    pub fn new(rows: Vec<PolyVec>) -> AlgoResult<Self> {
        let rank = rows.len();
        validate::parameter(rank > 0, "rows", "matrix must have at least one row")?;
        for row in &rows {
            validate::length("PolyMatrix row", row.len(), rank)?;
        }
        Ok(Self { rows })
    }

    /// Module rank L.
    pub fn rank(&self) -> usize {
        self.rows.len()
    }

    /// Row `i`.
    pub fn row(&self, i: usize) -> &PolyVec {
        &self.rows[i]
    }

    /// Element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> &Polynomial {
        &self.rows[i].polys[j]
    }

    /// The transposed matrix.
    pub fn transpose(&self) -> Self {
        let l = self.rank();
        let rows = (0..l)
            .map(|j| PolyVec::new((0..l).map(|i| self.get(i, j).clone()).collect()))
            .collect();
        Self { rows }
    }
}

/// `M·v`: entry i is the ring sum over j of `poly_mul(M[i][j], v[j], modulus)`.
pub fn matrix_vector_mul(m: &PolyMatrix, v: &PolyVec, modulus: u32) -> AlgoResult<PolyVec> {
    validate::length("matrix_vector_mul", v.len(), m.rank())?;
    let polys = m
        .rows
        .iter()
        .map(|row| inner_prod(row, v, modulus))
        .collect::<AlgoResult<Vec<_>>>()?;
    Ok(PolyVec::new(polys))
}

/// `⟨a, b⟩`: ring sum of `poly_mul(a[i], b[i], modulus)`.
pub fn inner_prod(a: &PolyVec, b: &PolyVec, modulus: u32) -> AlgoResult<Polynomial> {
    validate::length("inner_prod", b.len(), a.len())?;
    a.polys
        .iter()
        .zip(&b.polys)
        .try_fold(Polynomial::zero(modulus)?, |acc, (x, y)| {
            acc.add(&x.poly_mul(y, modulus)?)
        })
}

/// Split `bytes` into `l` equal chunks and decode each with `bs2pol`.
///
/// Entry 0 comes from the last chunk of the stream.
pub fn bs2polvec(bytes: &[u8], l: usize) -> AlgoResult<PolyVec> {
    validate::parameter(l > 0, "l", "vector length must be positive")?;
    validate::multiple_of("bs2polvec", bytes.len(), BYTES_PER_BIT * l)?;

    let chunk = bytes.len() / l;
    let polys = bytes
        .chunks_exact(chunk)
        .rev()
        .map(bs2pol)
        .collect::<AlgoResult<Vec<_>>>()?;
    Ok(PolyVec::new(polys))
}

/// Inverse of `bs2polvec`: encode entries last-to-first and concatenate.
pub fn polvec2bs(v: &PolyVec, modulus: u32) -> AlgoResult<Vec<u8>> {
    if v.is_empty() {
        return Err(AlgoError::param("v", "cannot encode an empty vector"));
    }
    let mut out = Vec::new();
    for p in v.polys.iter().rev() {
        out.extend_from_slice(&pol2bs(p, modulus)?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn poly(coeffs: &[i64], modulus: u32) -> Polynomial {
        Polynomial::new(coeffs, modulus).unwrap()
    }

    #[test]
    fn test_transpose() {
        let m = PolyMatrix::new(vec![
            PolyVec::new(vec![poly(&[1], 16), poly(&[2], 16)]),
            PolyVec::new(vec![poly(&[3], 16), poly(&[4], 16)]),
        ])
        .unwrap();
        let t = m.transpose();
        assert_eq!(t.get(0, 1).coeff(0), 3);
        assert_eq!(t.get(1, 0).coeff(0), 2);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_non_square_matrix_rejected() {
        let rows = vec![PolyVec::new(vec![poly(&[1], 16)]), PolyVec::new(vec![poly(&[1], 16)])];
        assert!(PolyMatrix::new(rows).is_err());
    }

    #[test]
    fn test_matrix_vector_mul() {
        let m = PolyMatrix::new(vec![
            PolyVec::new(vec![poly(&[1, 2], 16), poly(&[3, 4], 16)]),
            PolyVec::new(vec![poly(&[5, 6], 16), poly(&[7, 8], 16)]),
        ])
        .unwrap();
        let v = PolyVec::new(vec![poly(&[1, 1], 16), poly(&[2, 3], 16)]);

        let r = matrix_vector_mul(&m, &v, 16).unwrap();
        // row 0: [1*1 + 3*2, 2*1 + 4*3] = [7, 14]
        assert_eq!(&r.polys()[0].coeffs()[..2], &[7, 14]);
        // row 1: [5 + 14, 6 + 24] mod 16 = [3, 14]
        assert_eq!(&r.polys()[1].coeffs()[..2], &[3, 14]);
    }

    #[test]
    fn test_inner_prod_length_mismatch() {
        let a = PolyVec::new(vec![poly(&[1], 16); 2]);
        let b = PolyVec::new(vec![poly(&[1], 16); 3]);
        assert!(inner_prod(&a, &b, 16).is_err());
    }

    #[test]
    fn test_inner_prod_mismatched_moduli() {
        let a = PolyVec::new(vec![poly(&[3], 8192); 2]);
        let b = PolyVec::new(vec![poly(&[3], 1024); 2]);
        assert!(inner_prod(&a, &b, 1024).is_err());
    }

    #[test]
    fn test_bs2polvec_entry_order() {
        // two width-1 chunks: the second chunk becomes entry 0
        let mut bytes = vec![0u8; 64];
        bytes[32] = 0x80;
        let v = bs2polvec(&bytes, 2).unwrap();
        assert_eq!(v.polys()[0].coeff(255), 1);
        assert!(v.polys()[1].coeffs().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_bs2polvec_rejects_bad_lengths() {
        assert!(bs2polvec(&[0u8; 96], 2).is_err());
        assert!(bs2polvec(&[0u8; 64], 0).is_err());
        assert!(bs2polvec(&[], 2).is_err());
    }

    proptest! {
        #[test]
        fn polvec_roundtrip(l in 2usize..=4, k in 1usize..=13, seed in any::<u8>()) {
            let bytes: Vec<u8> = (0..32 * k * l).map(|i| (i as u8).wrapping_mul(31) ^ seed).collect();
            let v = bs2polvec(&bytes, l).unwrap();
            prop_assert_eq!(v.len(), l);
            prop_assert_eq!(polvec2bs(&v, 1 << k).unwrap(), bytes);
        }
    }
}
