//! polynomial.rs - ring elements with a runtime modulus

use alloc::vec;
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};

/// Ring dimension: every element has exactly this many coefficients
pub const N: usize = 256;

/// An element of Z_modulus[x]/(x^256 + 1)
///
/// Coefficients are stored in ascending order of the power of x and are
/// always in `[0, modulus)`. Every operation returns a new element.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Polynomial {
    coeffs: Vec<u32>,
    modulus: u32,
}

fn check_modulus(modulus: u32) -> Result<()> {
    validate::parameter(modulus >= 2, "modulus", "ring modulus must be at least 2")
}

impl Polynomial {
    /// Construct from signed coefficients of any length
    ///
    /// Terms of degree `d >= 256` fold onto degree `d % 256` with sign
    /// `(-1)^(d / 256)` (x^256 = -1), then every coefficient is reduced
    /// into `[0, modulus)`.
    pub fn new(coeffs: &[i64], modulus: u32) -> Result<Self> {
        check_modulus(modulus)?;

        let mut acc = [0i128; N];
        for (degree, &c) in coeffs.iter().enumerate() {
            fold_term(&mut acc, degree, c);
        }
        Ok(Self::from_accumulator(&acc, modulus))
    }

    /// Construct from `(degree, coefficient)` pairs
    ///
    /// Degrees may repeat; their coefficients accumulate.
    pub fn from_sparse_terms(terms: &[(usize, i64)], modulus: u32) -> Result<Self> {
        check_modulus(modulus)?;

        let mut acc = [0i128; N];
        for &(degree, c) in terms {
            fold_term(&mut acc, degree, c);
        }
        Ok(Self::from_accumulator(&acc, modulus))
    }

    /// The zero element
    pub fn zero(modulus: u32) -> Result<Self> {
        check_modulus(modulus)?;
        Ok(Self {
            coeffs: vec![0; N],
            modulus,
        })
    }

    /// Element with every coefficient equal to `value`
    pub fn filled(value: i64, modulus: u32) -> Result<Self> {
        Self::new(&[value; N], modulus)
    }

    /// Wrap coefficients that are already in `[0, modulus)`
    pub(crate) fn from_reduced(coeffs: Vec<u32>, modulus: u32) -> Self {
        debug_assert_eq!(coeffs.len(), N);
        debug_assert!(coeffs.iter().all(|&c| c < modulus));
        Self { coeffs, modulus }
    }

    fn from_accumulator(acc: &[i128; N], modulus: u32) -> Self {
        let m = modulus as i128;
        let coeffs = acc.iter().map(|&c| c.rem_euclid(m) as u32).collect();
        Self { coeffs, modulus }
    }

    /// The coefficient modulus N
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Coefficients in ascending order of degree
    pub fn coeffs(&self) -> &[u32] {
        &self.coeffs
    }

    /// Coefficient of x^index
    ///
    /// # Panics
    /// Panics if `index >= 256`.
    pub fn coeff(&self, index: usize) -> u32 {
        self.coeffs[index]
    }

    fn check_same_ring(&self, other: &Self, operation: &'static str) -> Result<()> {
        if self.modulus != other.modulus {
            return Err(Error::Processing {
                operation,
                details: "operands belong to rings with different moduli",
            });
        }
        Ok(())
    }

    /// Ring addition; both operands must share the modulus
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.check_same_ring(other, "Polynomial::add")?;
        let m = self.modulus as u64;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(&a, &b)| ((a as u64 + b as u64) % m) as u32)
            .collect();
        Ok(Self::from_reduced(coeffs, self.modulus))
    }

    /// Ring subtraction; both operands must share the modulus
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.check_same_ring(other, "Polynomial::sub")?;
        let m = self.modulus as u64;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(&a, &b)| ((a as u64 + m - b as u64) % m) as u32)
            .collect();
        Ok(Self::from_reduced(coeffs, self.modulus))
    }

    /// Coefficient-wise product `a[i] * b[i]` reduced into the ring mod `modulus`
    ///
    /// This is not negacyclic convolution; the scheme's algebra is defined
    /// on the coefficient-wise product. Both operands must share the modulus.
    pub fn poly_mul(&self, other: &Self, modulus: u32) -> Result<Self> {
        self.check_same_ring(other, "Polynomial::poly_mul")?;
        check_modulus(modulus)?;
        let m = modulus as u64;
        let coeffs = self
            .coeffs
            .iter()
            .zip(&other.coeffs)
            .map(|(&a, &b)| ((a as u64 * b as u64) % m) as u32)
            .collect();
        Ok(Self::from_reduced(coeffs, modulus))
    }

    /// Shift every coefficient left by `s` bits, keeping the modulus
    pub fn shiftleft(&self, s: u32) -> Result<Self> {
        validate::parameter(s < 32, "shift", "shift amount must be below 32")?;
        let m = self.modulus as u64;
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| (((c as u64) << s) % m) as u32)
            .collect();
        Ok(Self::from_reduced(coeffs, self.modulus))
    }

    /// Shift every coefficient right by `s` bits, keeping the modulus
    pub fn shiftright(&self, s: u32) -> Result<Self> {
        validate::parameter(s < 32, "shift", "shift amount must be below 32")?;
        let coeffs = self.coeffs.iter().map(|&c| c >> s).collect();
        Ok(Self::from_reduced(coeffs, self.modulus))
    }

    /// Re-wrap the coefficients under a new modulus
    pub fn reduce_mod(&self, modulus: u32) -> Result<Self> {
        check_modulus(modulus)?;
        let coeffs = self.coeffs.iter().map(|&c| c % modulus).collect();
        Ok(Self::from_reduced(coeffs, modulus))
    }
}

#[inline]
fn fold_term(acc: &mut [i128; N], degree: usize, c: i64) {
    let slot = degree % N;
    if (degree / N) % 2 == 0 {
        acc[slot] += c as i128;
    } else {
        acc[slot] -= c as i128;
    }
}
