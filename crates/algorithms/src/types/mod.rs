//! Fixed-size value types shared by the primitive layer

pub mod digest;

pub use digest::Digest;
