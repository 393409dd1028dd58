//! Key Encapsulation Mechanisms (KEM)
//!
//! This crate implements the SABER family of post-quantum key encapsulation
//! mechanisms (LightSaber, Saber, FireSaber) together with the CPA-secure
//! encryption scheme they are built from.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod saber;

// Re-exports
pub use error::{Error, Result};
pub use saber::{
    FireSaber, FireSaberPke, LightSaber, LightSaberPke, Saber, SaberCiphertext, SaberCpaPke,
    SaberKem, SaberPublicKey, SaberSecretKey, SaberSharedSecret, DefaultSaberPke,
};
