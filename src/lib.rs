//! # saber
//!
//! The SABER post-quantum key encapsulation mechanism: LightSaber, Saber
//! and FireSaber, built on module learning with rounding.
//!
//! ## Usage
//!
//! ```
//! use saber::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let (pk, sk) = LightSaber::keypair(&mut OsRng).unwrap();
//! let (ct, key1) = LightSaber::encapsulate(&mut OsRng, &pk).unwrap();
//! let key2 = LightSaber::decapsulate(&sk, &ct).unwrap();
//! assert_eq!(key1, key2);
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `cli` (default): the `saber` command-line binary
//! - `serde`: serde derives on the parameter table
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`saber-api`]: public traits (`Kem`, `Pke`, `Serialize`) and the error type
//! - [`saber-params`]: the parameter table
//! - [`saber-algorithms`]: ring arithmetic, bit packing, SHA3 and SHAKE
//! - [`saber-kem`]: the CPA encryption scheme and the CCA KEM

#![cfg_attr(not(feature = "std"), no_std)]

pub use saber_algorithms as algorithms;
pub use saber_api as api;
pub use saber_internal as internal;
pub use saber_kem as kem;
pub use saber_params as params;

/// Common imports for saber users
pub mod prelude {
    // Error types
    pub use crate::api::{Error, Result};

    // Core traits
    pub use crate::api::{Kem, Pke, Serialize, SerializeSecret};

    // Schemes
    pub use crate::kem::{
        DefaultSaberPke, FireSaber, FireSaberPke, LightSaber, LightSaberPke, Saber, SaberCpaPke,
        SaberKem,
    };

    // Key types
    pub use crate::kem::{SaberCiphertext, SaberPublicKey, SaberSecretKey, SaberSharedSecret};

    // Parameters
    pub use crate::params::{ParameterSet, Variant, FIRESABER, LIGHTSABER, SABER};
}
