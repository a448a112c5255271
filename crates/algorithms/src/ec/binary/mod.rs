//! ECDH over binary elliptic curves
//!
//! Curves have the form y² + xy = x³ + ax² + b over GF(2^m), with m up to
//! 319 and a trinomial or pentanomial reduction polynomial. Parameters come
//! from `gf2ecdh-params` and are validated once in [`BinaryCurve::from_params`].
//!
//! Layering, bottom-up:
//! - [`BinaryField`] / [`FieldElement`]: XOR addition, carry-less multiply with
//!   masked reduction, extended-Euclid inversion, square root, (half-)trace
//! - [`Point`] and the group law on [`BinaryCurve`]
//! - [`BinaryCurve::mul`]: double-and-add with a masked select per bit
//! - the key-agreement functions in this module

mod curve;
mod field;
mod mul;
mod point;
mod scalar;

pub use curve::{BinaryCurve, PointFormat};
pub use field::{BinaryField, FieldElement, MAX_DEGREE, NLIMBS};
pub use point::Point;
pub use scalar::{Scalar, SCALAR_BITS};

use crate::error::{Error, Result};
use gf2ecdh_common::ZeroizeGuard;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Upper bound on random draws in [`generate_keypair_with_rng`].
///
/// Each draw is accepted with probability above 1/2, so hitting the bound
/// means the generator is broken.
const MAX_KEYGEN_ATTEMPTS: usize = 64;

/// Private scalar and matching public point, with `public == private·G`
#[derive(Clone, Debug)]
pub struct KeyPair {
    private: Scalar,
    public: Point,
}

impl KeyPair {
    /// The private scalar
    pub fn private_scalar(&self) -> &Scalar {
        &self.private
    }

    /// The public point
    pub fn public_point(&self) -> &Point {
        &self.public
    }

    /// Split into `(private, public)`
    pub fn into_parts(self) -> (Scalar, Point) {
        let KeyPair { private, public } = self;
        (private, public)
    }
}

/// Derive a keypair from caller-supplied randomness.
///
/// `random_bytes` must be exactly `scalar_bytes` long and decode (big-endian)
/// to a scalar in [1, n-1]; otherwise `InvalidPrivateKey` (or `Length`) is
/// returned and the caller should draw fresh bytes.
pub fn generate_keypair(curve: &BinaryCurve, random_bytes: &[u8]) -> Result<KeyPair> {
    let private = curve.scalar_from_bytes(random_bytes)?;
    let public = curve.mul_base(&private);
    Ok(KeyPair { private, public })
}

/// Generate a keypair from a cryptographically secure RNG.
///
/// Bits at and above bits(n) are cleared before the range check, so a draw
/// is rejected at most about half the time.
pub fn generate_keypair_with_rng<R: CryptoRng + RngCore>(
    curve: &BinaryCurve,
    rng: &mut R,
) -> Result<KeyPair> {
    let mut buf = vec![0u8; curve.scalar_bytes()];
    let mut bytes = ZeroizeGuard::new(&mut buf);

    for _ in 0..MAX_KEYGEN_ATTEMPTS {
        rng.fill_bytes(bytes.as_mut_slice());
        curve.mask_scalar_bytes(bytes.as_mut_slice());
        match generate_keypair(curve, bytes.as_slice()) {
            Ok(keypair) => return Ok(keypair),
            Err(Error::InvalidPrivateKey { .. }) => continue,
            Err(e) => return Err(e),
        }
    }

    Err(Error::InvalidPrivateKey {
        reason: "random generator did not produce a valid scalar",
    })
}

/// Compute the ECDH shared secret: the x-coordinate of k·Q.
///
/// The peer point is validated first (see [`validate_public_key`]). A result
/// at infinity means Q lies in a small subgroup and is reported as
/// `InvalidPublicKey`; no partial secret is ever returned.
pub fn compute_shared_secret(
    curve: &BinaryCurve,
    private: &Scalar,
    peer_public: &Point,
) -> Result<FieldElement> {
    if private.is_zero() || !bool::from(private.ct_lt(curve.order())) {
        return Err(Error::InvalidPrivateKey {
            reason: "scalar is zero or not below the group order",
        });
    }
    validate_public_key(curve, peer_public)?;

    let mut shared = curve.mul(private, peer_public);
    let result = match shared.x() {
        Some(x) => Ok(*x),
        None => Err(Error::InvalidPublicKey {
            reason: "shared point is the identity",
        }),
    };
    shared.zeroize();
    result
}

/// Partial public-key validation: not the identity, on the curve, and not
/// the order-2 point with x = 0.
pub fn validate_public_key(curve: &BinaryCurve, point: &Point) -> Result<()> {
    let x = match point.x() {
        Some(x) => x,
        None => {
            return Err(Error::InvalidPublicKey {
                reason: "point at infinity",
            })
        }
    };
    if !curve.is_on_curve(point) {
        return Err(Error::InvalidPublicKey {
            reason: "point is not on the curve",
        });
    }
    if x.is_zero() {
        return Err(Error::InvalidPublicKey {
            reason: "point has order 2",
        });
    }
    Ok(())
}

/// Full public-key validation: [`validate_public_key`] plus n·Q = O.
///
/// Costs one extra scalar multiplication.
pub fn validate_public_key_full(curve: &BinaryCurve, point: &Point) -> Result<()> {
    validate_public_key(curve, point)?;
    if !curve.mul(curve.order(), point).is_identity() {
        return Err(Error::InvalidPublicKey {
            reason: "point is not in the prime-order subgroup",
        });
    }
    Ok(())
}

/// General scalar multiplication: compute k·P
pub fn scalar_mult(curve: &BinaryCurve, k: &Scalar, point: &Point) -> Point {
    curve.mul(k, point)
}

/// Scalar multiplication with the base point: k·G
pub fn scalar_mult_base_g(curve: &BinaryCurve, k: &Scalar) -> Point {
    curve.mul_base(k)
}
