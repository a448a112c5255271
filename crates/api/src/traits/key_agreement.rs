//! Trait definition for Diffie-Hellman style key agreement
//!
//! An implementor is an immutable context (for ECDH: a selected curve) that is
//! built once and can then be shared freely between threads.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for two-party key agreement with domain-specific key types.
///
/// # Security Design
///
/// Secret material is always `Zeroize`; public keys are plain bytes that must
/// be validated by `shared_secret` before use.
pub trait KeyAgreement {
    /// Encoded public key sent to the peer.
    type PublicKey: Clone + AsRef<[u8]>;

    /// Secret key kept by its owner.
    ///
    /// # Security Note
    /// Implements `Zeroize` for secure memory cleanup.
    type SecretKey: Zeroize + Clone + AsRef<[u8]>;

    /// Agreed secret; should be fed to a KDF immediately.
    type SharedSecret: Zeroize + Clone + AsRef<[u8]>;

    /// Returns the algorithm name.
    fn name(&self) -> &'static str;

    /// Generate a new keypair.
    ///
    /// # Security Requirements
    /// - Must use the provided CSPRNG for all randomness.
    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> Result<(Self::PublicKey, Self::SecretKey)>;

    /// Recompute the public key belonging to a secret key.
    fn public_key(&self, secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;

    /// Derive the shared secret from our secret key and the peer's public key.
    ///
    /// # Security Requirements
    /// - Must validate the peer public key and refuse invalid input.
    /// - Must never return a partial or default secret.
    fn shared_secret(
        &self,
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> Result<Self::SharedSecret>;
}
