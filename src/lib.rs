//! # gf2ecdh
//!
//! Elliptic-Curve Diffie-Hellman over binary fields GF(2^m).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gf2ecdh = "0.1"
//! ```
//!
//! ```
//! use gf2ecdh::prelude::*;
//! use rand::rngs::OsRng;
//!
//! let ecdh = Ecdh::sect163r2()?;
//! let (alice_pk, alice_sk) = ecdh.keypair(&mut OsRng)?;
//! let (bob_pk, bob_sk) = ecdh.keypair(&mut OsRng)?;
//!
//! let alice_ss = ecdh.shared_secret(&alice_sk, &bob_pk)?;
//! let bob_ss = ecdh.shared_secret(&bob_sk, &alice_pk)?;
//! assert_eq!(alice_ss, bob_ss);
//! # Ok::<(), gf2ecdh::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `serde`: `Serialize`/`Deserialize` for public keys
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`gf2ecdh-api`]: Error type and the `KeyAgreement` trait
//! - [`gf2ecdh-common`]: Zeroizing secret containers
//! - [`gf2ecdh-params`]: Curve parameter tables
//! - [`gf2ecdh-algorithms`]: Field, point and scalar arithmetic
//! - [`gf2ecdh-exchange`]: Byte-level ECDH
//!
//! `rand`, `subtle` and `zeroize` are re-exported so callers can name the
//! RNG, constant-time and zeroization traits without matching versions.

// Core re-exports
pub use gf2ecdh_algorithms as algorithms;
pub use gf2ecdh_api as api;
pub use gf2ecdh_common as common;
pub use gf2ecdh_exchange as exchange;
pub use gf2ecdh_params as params;

// Dependencies that appear in public signatures
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for gf2ecdh users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::KeyAgreement;

    // Re-export security types
    pub use crate::common::{SecretVec, ZeroizeGuard};

    // Key agreement
    pub use crate::exchange::{Ecdh, EcdhPublicKey, EcdhSecretKey, EcdhSharedSecret};

    // Typed primitives
    pub use crate::algorithms::ec::binary::{
        compute_shared_secret, generate_keypair, generate_keypair_with_rng, BinaryCurve,
        FieldElement, KeyPair, Point, PointFormat, Scalar,
    };

    // Curve tables
    pub use crate::params::traditional::ecdh::{
        BinaryCurveParams, BINARY_CURVES, SECT163K1, SECT163R2, SECT283K1,
    };
}
