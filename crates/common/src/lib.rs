//! Common implementations and shared functionality for the gf2ecdh library
//!
//! This crate provides the zeroizing containers used for private keys and
//! shared secrets across the gf2ecdh crates.

#![forbid(unsafe_code)]

pub mod security;

// Re-export core security types
pub use security::{SecretVec, ZeroizeGuard};
