// kem/src/saber/mod.rs

//! SABER key encapsulation mechanism.
//!
//! A module-learning-with-rounding construction: a CPA-secure encryption
//! scheme over Z_q[x]/(x^256+1) lifted to an IND-CCA2 KEM by a
//! Fujisaki-Okamoto transform with implicit rejection. Three security levels
//! differ only in module rank and ciphertext modulus.

mod cpa_pke;
mod ind_cca;
mod kem;
mod params;
mod pke;
pub mod polyvec;
pub mod sampling;

pub use self::kem::{
    SaberCiphertext, SaberKem, SaberPublicKey, SaberScheme, SaberSecretKey, SaberSharedSecret,
};
pub use self::params::{
    FireSaberParamsImpl, LightSaberParamsImpl, SaberParams, SaberParamsImpl, SABER_SS_BYTES,
};
pub use self::pke::{
    SaberCpaPke, SaberPke, SaberPkeCiphertext, SaberPkePublicKey, SaberPkeSecretKey,
};

/// LightSaber KEM (module rank 2), implementing `api::Kem`.
pub type LightSaber = SaberScheme<LightSaberParamsImpl>;

/// Saber KEM (module rank 3), implementing `api::Kem`.
pub type Saber = SaberScheme<SaberParamsImpl>;

/// FireSaber KEM (module rank 4), implementing `api::Kem`.
pub type FireSaber = SaberScheme<FireSaberParamsImpl>;

/// LightSaber CPA encryption, implementing `api::Pke`.
pub type LightSaberPke = SaberPke<LightSaberParamsImpl>;

/// Saber CPA encryption, implementing `api::Pke`.
pub type DefaultSaberPke = SaberPke<SaberParamsImpl>;

/// FireSaber CPA encryption, implementing `api::Pke`.
pub type FireSaberPke = SaberPke<FireSaberParamsImpl>;

#[cfg(test)]
mod tests;
