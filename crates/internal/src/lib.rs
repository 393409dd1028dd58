//! Internal utilities for the saber workspace
//!
//! Not part of the public API; shared by the api and kem crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
