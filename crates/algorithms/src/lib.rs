//! Binary-field elliptic curve primitives
//!
//! This crate provides the arithmetic behind ECDH on curves
//! y² + xy = x³ + ax² + b over GF(2^m):
//!
//! - field elements as fixed-width limb arrays with carry-less multiplication
//! - affine point addition and doubling with an explicit point at infinity
//! - double-and-add scalar multiplication using masked selection
//! - keypair generation and shared-secret derivation with public-key validation
//!
//! Curve parameters come from `gf2ecdh-params`; errors convert into
//! `gf2ecdh_api::Error` at the crate boundary.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Elliptic curve implementations
pub mod ec;
pub use ec::binary::{
    compute_shared_secret, generate_keypair, generate_keypair_with_rng, BinaryCurve,
    BinaryField, FieldElement, KeyPair, Point, PointFormat, Scalar,
};
