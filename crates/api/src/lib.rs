//! Public API traits and types for the saber workspace
//!
//! This crate provides the public API surface shared by every member crate:
//! the `Kem` and `Pke` trait definitions, the serialization contracts for
//! public and secret byte types, and the public error type.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::SecretBytes;

pub use traits::{Kem, Pke, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{kem, pke, serialize};
