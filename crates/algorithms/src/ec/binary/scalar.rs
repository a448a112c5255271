//! Private scalars for binary-curve scalar multiplication

use crate::ec::binary::field::NLIMBS;
use crate::error::{validate, Result};
use core::fmt;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of bits the scalar multiplier walks, independent of the curve
pub const SCALAR_BITS: usize = NLIMBS * 64;

/// Unsigned integer multiplier stored as little-endian 64-bit limbs
///
/// Range checks against a group order live on `BinaryCurve`, which knows n.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct Scalar([u64; NLIMBS]);

impl Scalar {
    /// The zero scalar
    pub fn zero() -> Self {
        Scalar([0u64; NLIMBS])
    }

    /// Create a scalar from a small integer
    pub fn from_u64(v: u64) -> Self {
        let mut limbs = [0u64; NLIMBS];
        limbs[0] = v;
        Scalar(limbs)
    }

    /// Decode big-endian bytes without any range check.
    ///
    /// Accepts up to 40 bytes; shorter input is zero-extended.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        validate::max_length("scalar", bytes.len(), NLIMBS * 8)?;
        let mut limbs = [0u64; NLIMBS];
        let len = bytes.len();
        for (i, &byte) in bytes.iter().enumerate() {
            let j = len - 1 - i;
            limbs[j / 8] |= (byte as u64) << (8 * (j % 8));
        }
        Ok(Scalar(limbs))
    }

    /// Encode as `len` big-endian bytes, dropping anything above 8·len bits
    pub fn to_be_bytes(&self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        for (i, byte) in out.iter_mut().enumerate() {
            let j = len - 1 - i;
            if j < NLIMBS * 8 {
                *byte = (self.0[j / 8] >> (8 * (j % 8))) as u8;
            }
        }
        out
    }

    /// Bit i of the scalar as a `Choice`
    #[inline]
    pub fn bit(&self, i: usize) -> Choice {
        Choice::from(((self.0[i / 64] >> (i % 64)) & 1) as u8)
    }

    /// Check if this scalar is zero.
    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Self::zero()).into()
    }

    /// Constant-time `self < other`, from the borrow out of `self - other`
    pub fn ct_lt(&self, other: &Self) -> Choice {
        let mut borrow = 0u64;
        for i in 0..NLIMBS {
            let (d, b1) = self.0[i].overflowing_sub(other.0[i]);
            let (_, b2) = d.overflowing_sub(borrow);
            borrow = (b1 | b2) as u64;
        }
        Choice::from(borrow as u8)
    }

    /// Position of the highest set bit plus one.
    ///
    /// Not constant time; only meant for public values such as a group order.
    pub(crate) fn bit_length(&self) -> usize {
        for i in (0..NLIMBS).rev() {
            if self.0[i] != 0 {
                return i * 64 + (64 - self.0[i].leading_zeros() as usize);
            }
        }
        0
    }
}

impl ConstantTimeEq for Scalar {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Scalar {}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Scalar([REDACTED])")
    }
}
