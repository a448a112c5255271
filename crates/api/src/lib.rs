//! Public API traits and types for the gf2ecdh library
//!
//! This crate provides the public API surface shared by the gf2ecdh crates:
//! the error type, validation helpers and the key-agreement trait.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};
pub use traits::KeyAgreement;
