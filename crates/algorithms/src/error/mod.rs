//! Error handling for the primitive layer

use alloc::borrow::Cow;

#[cfg(feature = "std")]
use std::fmt;

#[cfg(not(feature = "std"))]
use core::fmt;

use saber_api::{Error as CoreError, Result as CoreResult};

/// The error type for primitive operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Processing error during a primitive operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// Fallback for other errors
    Other(&'static str),
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type for hash and XOF operations
pub type HashResult<T> = Result<T>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
            Error::Other(msg) => write!(f, "{}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "primitive parameter",
                },
                #[cfg(feature = "std")]
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
            Error::Other(msg) => CoreError::Other {
                context: "primitives",
                #[cfg(feature = "std")]
                message: msg.to_string(),
            },
        }
    }
}

/// Convert a primitives result to a public result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub mod validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let err = Error::param("modulus", "must be a power of two");
        match CoreError::from(err) {
            CoreError::InvalidParameter { context, .. } => assert_eq!(context, "modulus"),
            other => panic!("Expected InvalidParameter error, got {:?}", other),
        }

        let err = Error::Length {
            context: "bs2pol",
            expected: 64,
            actual: 33,
        };
        match CoreError::from(err) {
            CoreError::InvalidLength {
                context,
                expected,
                actual,
            } => {
                assert_eq!(context, "bs2pol");
                assert_eq!(expected, 64);
                assert_eq!(actual, 33);
            }
            other => panic!("Expected InvalidLength error, got {:?}", other),
        }
    }

    #[test]
    fn test_validation_functions() {
        assert!(validate::parameter(true, "mu", "should pass").is_ok());
        match validate::parameter(false, "mu", "must be even").unwrap_err() {
            Error::Parameter { name, reason } => {
                assert_eq!(name, "mu");
                assert_eq!(reason, "must be even");
            }
            other => panic!("Expected Parameter error, got {:?}", other),
        }

        assert!(validate::length("message", 32, 32).is_ok());
        assert!(validate::length("message", 31, 32).is_err());
        assert!(validate::min_length("seed", 32, 16).is_ok());
        assert!(validate::min_length("seed", 8, 16).is_err());
        assert!(validate::multiple_of("bytes", 64, 32).is_ok());
        assert!(validate::multiple_of("bytes", 0, 32).is_err());
        assert!(validate::multiple_of("bytes", 33, 32).is_err());
    }

    #[test]
    fn test_display() {
        let err = Error::Length {
            context: "ciphertext",
            expected: 736,
            actual: 735,
        };
        assert_eq!(
            err.to_string(),
            "Invalid length for ciphertext: expected 736, got 735"
        );
    }
}
