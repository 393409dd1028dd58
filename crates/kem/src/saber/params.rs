// kem/src/saber/params.rs

//! Type-level SABER variants.
//!
//! Each marker pins one constant `ParameterSet` so that the static
//! `api::Kem` and `api::Pke` impls can be written once, generically.

use saber_params::pqc::saber as global_params;
use saber_params::ParameterSet;

/// Shared secret size for all SABER variants.
pub const SABER_SS_BYTES: usize = global_params::SABER_KEYBYTES;

/// Trait defining parameters for a specific SABER variant.
pub trait SaberParams: Send + Sync + 'static {
    /// The full parameter set.
    const PARAMS: ParameterSet;

    /// Algorithm name string.
    const NAME: &'static str = Self::PARAMS.name();
}

/// LightSaber marker (module rank 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightSaberParamsImpl;
impl SaberParams for LightSaberParamsImpl {
    const PARAMS: ParameterSet = global_params::LIGHTSABER;
}

/// Saber marker (module rank 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaberParamsImpl;
impl SaberParams for SaberParamsImpl {
    const PARAMS: ParameterSet = global_params::SABER;
}

/// FireSaber marker (module rank 4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireSaberParamsImpl;
impl SaberParams for FireSaberParamsImpl {
    const PARAMS: ParameterSet = global_params::FIRESABER;
}
