//! Validation utilities for primitive operations

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Length {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a non-zero multiple of `unit`
///
/// On failure `expected` carries the next multiple of `unit` at or above
/// `actual` (or `unit` itself for empty input).
#[inline(always)]
pub fn multiple_of(context: &'static str, actual: usize, unit: usize) -> Result<()> {
    if actual == 0 || unit == 0 || actual % unit != 0 {
        let expected = if unit == 0 {
            0
        } else {
            actual.div_ceil(unit).max(1) * unit
        };
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}
