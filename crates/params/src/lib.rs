//! Parameter table for the SABER key encapsulation mechanism
//!
//! Everything in this crate is a `const`: the three canonical parameter
//! sets, their derived byte lengths and the output sizes of the hash
//! primitives the scheme is built on. The crate is always `no_std`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod pqc;
pub mod utils;

pub use pqc::saber::{ParamError, ParameterSet, Variant, FIRESABER, LIGHTSABER, SABER};
