//! Key agreement over binary elliptic curves
//!
//! This crate wraps the typed primitives of `gf2ecdh-algorithms` into an
//! [`Ecdh`] context that speaks bytes: SEC 1 encoded public keys, big-endian
//! private scalars and x-coordinate shared secrets.

#![forbid(unsafe_code)]

pub mod ecdh;

// Re-exports
pub use ecdh::{Ecdh, EcdhPublicKey, EcdhSecretKey, EcdhSharedSecret};
