//! Error handling for KEM operations

use core::fmt;
use saber_algorithms::error::Error as PrimitiveError;
use saber_api::error::Error as CoreError;
use saber_params::ParamError;

/// Error type for KEM operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Primitive error
    Primitive(PrimitiveError),

    /// Parameter set rejected
    Params(ParamError),

    /// Key generation failed
    KeyGeneration {
        /// Scheme name
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// Encapsulation failed
    Encapsulation {
        /// Scheme name
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// Decapsulation failed
    Decapsulation {
        /// Scheme name
        algorithm: &'static str,
        /// What went wrong
        details: &'static str,
    },

    /// Invalid key format
    InvalidKey {
        /// Which key
        key_type: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Invalid ciphertext format
    InvalidCiphertext {
        /// Scheme name
        algorithm: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Serialization/deserialization errors
    Serialization {
        /// Where it happened
        context: &'static str,
        /// What went wrong
        details: &'static str,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "Primitive error: {}", e),
            Error::Params(e) => write!(f, "Parameter error: {}", e),
            Error::KeyGeneration { algorithm, details } => {
                write!(f, "Key generation error for {}: {}", algorithm, details)
            }
            Error::Encapsulation { algorithm, details } => {
                write!(f, "Encapsulation error for {}: {}", algorithm, details)
            }
            Error::Decapsulation { algorithm, details } => {
                write!(f, "Decapsulation error for {}: {}", algorithm, details)
            }
            Error::InvalidKey { key_type, reason } => {
                write!(f, "Invalid {} key: {}", key_type, reason)
            }
            Error::InvalidCiphertext { algorithm, reason } => {
                write!(f, "Invalid {} ciphertext: {}", algorithm, reason)
            }
            Error::Serialization { context, details } => {
                write!(f, "Serialization error in {}: {}", context, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Params(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<ParamError> for Error {
    fn from(err: ParamError) -> Self {
        Error::Params(err)
    }
}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Params(_e) => CoreError::InvalidParameter {
                context: "saber parameters",
                #[cfg(feature = "std")]
                message: _e.to_string(),
            },
            Error::KeyGeneration { algorithm, details } => CoreError::Other {
                context: algorithm,
                #[cfg(feature = "std")]
                message: format!("key generation failed: {}", details),
            },
            Error::Encapsulation { algorithm, details } => CoreError::Other {
                context: algorithm,
                #[cfg(feature = "std")]
                message: format!("encapsulation failed: {}", details),
            },
            Error::Decapsulation { algorithm, details } => CoreError::DecryptionFailed {
                context: algorithm,
                #[cfg(feature = "std")]
                message: format!("decapsulation failed: {}", details),
            },
            Error::InvalidKey { key_type, reason } => CoreError::InvalidKey {
                context: key_type,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::InvalidCiphertext { algorithm, reason } => CoreError::InvalidCiphertext {
                context: algorithm,
                #[cfg(feature = "std")]
                message: reason.to_string(),
            },
            Error::Serialization { context, details } => CoreError::SerializationError {
                context,
                #[cfg(feature = "std")]
                message: details.to_string(),
            },
        }
    }
}

pub mod validate;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_to_core() {
        let err = Error::InvalidCiphertext {
            algorithm: "LightSaber",
            reason: "wrong length",
        };
        match CoreError::from(err) {
            CoreError::InvalidCiphertext { context, .. } => assert_eq!(context, "LightSaber"),
            other => panic!("unexpected {:?}", other),
        }

        let err = Error::from(PrimitiveError::Length {
            context: "message",
            expected: 32,
            actual: 31,
        });
        assert!(matches!(
            CoreError::from(err),
            CoreError::InvalidLength { expected: 32, actual: 31, .. }
        ));

        let err = Error::from(ParamError::UnknownVariant);
        assert!(matches!(
            CoreError::from(err),
            CoreError::InvalidParameter { context: "saber parameters", .. }
        ));
    }

    #[test]
    fn test_display_has_no_payload() {
        let err = Error::InvalidKey {
            key_type: "Saber secret",
            reason: "wrong length",
        };
        assert_eq!(err.to_string(), "Invalid Saber secret key: wrong length");
    }
}
