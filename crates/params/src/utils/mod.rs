//! Constant values shared across the workspace

pub mod hash;
