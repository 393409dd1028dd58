//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of
/// different lengths compare unequal without inspecting the contents.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
///
/// The length check comes first; lengths are public, contents are not.
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Constant-time byte-wise selection between two equal-length slices
///
/// Writes `a` into `dst` when `choice` is 0 and `b` when `choice` is 1.
/// Every byte of both inputs is read regardless of `choice`.
///
/// # Panics
/// Panics if the three slices differ in length.
pub fn ct_select_bytes(dst: &mut [u8], a: &[u8], b: &[u8], choice: Choice) {
    assert_eq!(dst.len(), a.len());
    assert_eq!(a.len(), b.len());

    for ((d, x), y) in dst.iter_mut().zip(a.iter()).zip(b.iter()) {
        *d = u8::conditional_select(x, y, choice);
    }
}
