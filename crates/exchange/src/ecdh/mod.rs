//! ECDH over binary curves (sect163k1, sect163r2, sect283k1)
//!
//! An [`Ecdh`] value selects a curve once and is then used for any number of
//! exchanges. Public keys travel as SEC 1 encoded points (compressed by
//! default); the shared secret is the big-endian x-coordinate of k·Q and
//! should be passed through a KDF before use.

use gf2ecdh_algorithms::ec::binary::{self as ec, BinaryCurve, PointFormat};
use gf2ecdh_api::error::validate;
use gf2ecdh_api::{KeyAgreement, Result as ApiResult, ResultExt};
use gf2ecdh_common::SecretVec;
use gf2ecdh_params::traditional::ecdh::BinaryCurveParams;
use rand::{CryptoRng, RngCore};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// ECDH context bound to one binary curve
#[derive(Clone, Debug)]
pub struct Ecdh {
    curve: BinaryCurve,
    format: PointFormat,
    full_validation: bool,
}

/// Public key for ECDH (SEC 1 encoded point)
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EcdhPublicKey(Vec<u8>);

/// Secret key for ECDH (big-endian scalar)
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EcdhSecretKey(SecretVec);

/// Shared secret from ECDH (x-coordinate of the shared point)
#[derive(Clone, Debug, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct EcdhSharedSecret(SecretVec);

impl EcdhPublicKey {
    /// Wrap an encoded point received from a peer; validated on use
    pub fn from_bytes(bytes: &[u8]) -> Self {
        EcdhPublicKey(bytes.to_vec())
    }

    /// Encoded point bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.clone()
    }
}

impl EcdhSecretKey {
    /// Wrap a big-endian scalar; range-checked on use
    pub fn from_bytes(bytes: &[u8]) -> Self {
        EcdhSecretKey(SecretVec::from_slice(bytes))
    }
}

impl EcdhSharedSecret {
    /// Length of the secret in bytes (the curve's field element size)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the secret is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ConstantTimeEq for EcdhSharedSecret {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

// AsRef implementations
impl AsRef<[u8]> for EcdhPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
impl AsRef<[u8]> for EcdhSecretKey {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}
impl AsRef<[u8]> for EcdhSharedSecret {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl Ecdh {
    /// Create a context for the given curve parameters.
    ///
    /// Fails with `InvalidParameter` if the table does not describe a valid
    /// curve.
    pub fn new(params: &'static BinaryCurveParams) -> ApiResult<Self> {
        let curve = BinaryCurve::from_params(params).with_context("ECDH curve parameters")?;
        Ok(Ecdh {
            curve,
            format: PointFormat::default(),
            full_validation: false,
        })
    }

    /// ECDH on NIST K-163
    pub fn sect163k1() -> ApiResult<Self> {
        Self::new(&gf2ecdh_params::traditional::ecdh::SECT163K1)
    }

    /// ECDH on NIST B-163
    pub fn sect163r2() -> ApiResult<Self> {
        Self::new(&gf2ecdh_params::traditional::ecdh::SECT163R2)
    }

    /// ECDH on NIST K-283
    pub fn sect283k1() -> ApiResult<Self> {
        Self::new(&gf2ecdh_params::traditional::ecdh::SECT283K1)
    }

    /// Encoding used for public keys produced by this context
    pub fn with_point_format(mut self, format: PointFormat) -> Self {
        self.format = format;
        self
    }

    /// Also check n·Q = O for peer keys (one extra scalar multiplication)
    pub fn with_full_validation(mut self, enabled: bool) -> Self {
        self.full_validation = enabled;
        self
    }

    /// The selected curve
    pub fn curve(&self) -> &BinaryCurve {
        &self.curve
    }

    /// Encoding used for public keys
    pub fn point_format(&self) -> PointFormat {
        self.format
    }

    /// Derive a keypair from `scalar_bytes` of caller-supplied randomness.
    ///
    /// Fails with `InvalidPrivateKey` when the bytes decode to zero or to a
    /// value not below the group order; the caller should draw again.
    pub fn keypair_from_bytes(
        &self,
        random_bytes: &[u8],
    ) -> ApiResult<(EcdhPublicKey, EcdhSecretKey)> {
        let keypair =
            ec::generate_keypair(&self.curve, random_bytes).with_context("ECDH keypair")?;
        Ok(self.export_keypair(&keypair))
    }

    fn export_keypair(&self, keypair: &ec::KeyPair) -> (EcdhPublicKey, EcdhSecretKey) {
        let public_key = EcdhPublicKey(
            self.curve
                .encode_point(keypair.public_point(), self.format),
        );
        let secret_key = EcdhSecretKey(self.curve.scalar_to_bytes(keypair.private_scalar()));
        (public_key, secret_key)
    }
}

impl KeyAgreement for Ecdh {
    type PublicKey = EcdhPublicKey;
    type SecretKey = EcdhSecretKey;
    type SharedSecret = EcdhSharedSecret;

    fn name(&self) -> &'static str {
        self.curve.name()
    }

    fn keypair<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
    ) -> ApiResult<(Self::PublicKey, Self::SecretKey)> {
        let keypair =
            ec::generate_keypair_with_rng(&self.curve, rng).with_context("ECDH keypair")?;
        Ok(self.export_keypair(&keypair))
    }

    fn public_key(&self, secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
        let k = self
            .curve
            .scalar_from_bytes(secret_key.as_ref())
            .with_context("ECDH public key")?;
        let point = self.curve.mul_base(&k);
        Ok(EcdhPublicKey(self.curve.encode_point(&point, self.format)))
    }

    fn shared_secret(
        &self,
        secret_key: &Self::SecretKey,
        peer_public_key: &Self::PublicKey,
    ) -> ApiResult<Self::SharedSecret> {
        validate::public_key(
            !peer_public_key.as_ref().is_empty(),
            "ECDH peer public key",
            "empty encoding",
        )?;

        let k = self
            .curve
            .scalar_from_bytes(secret_key.as_ref())
            .with_context("ECDH secret key")?;
        let q = self
            .curve
            .decode_point(peer_public_key.as_ref())
            .with_context("ECDH peer public key")?;
        if self.full_validation {
            ec::validate_public_key_full(&self.curve, &q).with_context("ECDH peer public key")?;
        }

        let mut x = ec::compute_shared_secret(&self.curve, &k, &q)
            .with_context("ECDH shared secret")?;
        let secret = EcdhSharedSecret(SecretVec::new(self.curve.field().to_bytes(&x)));
        x.zeroize();
        Ok(secret)
    }
}

#[cfg(test)]
mod tests;
