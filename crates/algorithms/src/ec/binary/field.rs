//! GF(2^m) field arithmetic
//!
//! Elements are polynomials over GF(2) of degree < m, stored as little-endian
//! 64-bit limbs. Addition is XOR; multiplication is a carry-less product
//! followed by reduction modulo the curve's trinomial or pentanomial.

use crate::error::{validate, Error, Result};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use zeroize::Zeroize;

/// Number of 64-bit limbs in a field element (320 bits)
pub const NLIMBS: usize = 5;

/// Largest supported field degree.
///
/// Inversion keeps the unreduced modulus (degree m) in a `FieldElement`,
/// so bit m must still fit in the limbs.
pub const MAX_DEGREE: usize = NLIMBS * 64 - 1;

/// Limbs of an unreduced product (degree up to 2m - 2)
const NWIDE: usize = 2 * NLIMBS;

/// Element of GF(2^m), kept in reduced form by every `BinaryField` operation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Zeroize)]
pub struct FieldElement(pub(crate) [u64; NLIMBS]);

impl FieldElement {
    /// The additive identity: 0
    #[inline]
    pub const fn zero() -> Self {
        FieldElement([0u64; NLIMBS])
    }

    /// The multiplicative identity: 1
    #[inline]
    pub const fn one() -> Self {
        Self::from_u64(1)
    }

    /// Raw element from a polynomial of degree < 64 (bit i = coefficient of z^i).
    ///
    /// Not checked against any field degree; see [`BinaryField::element_from_u64`].
    #[inline]
    pub(crate) const fn from_u64(v: u64) -> Self {
        let mut limbs = [0u64; NLIMBS];
        limbs[0] = v;
        FieldElement(limbs)
    }

    /// Check if element is zero
    pub fn is_zero(&self) -> bool {
        self.ct_eq(&Self::zero()).into()
    }

    /// Check if element is one
    pub fn is_one(&self) -> bool {
        self.ct_eq(&Self::one()).into()
    }

    /// Field addition (and subtraction): bitwise XOR
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        let mut out = [0u64; NLIMBS];
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = self.0[i] ^ other.0[i];
        }
        FieldElement(out)
    }

    /// Coefficient of z^i (0 or 1)
    #[inline]
    pub fn bit(&self, i: usize) -> u64 {
        (self.0[i / 64] >> (i % 64)) & 1
    }

    /// Index of the highest set coefficient plus one; 0 for the zero polynomial
    pub(crate) fn bit_length(&self) -> usize {
        for i in (0..NLIMBS).rev() {
            if self.0[i] != 0 {
                return i * 64 + (64 - self.0[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Multiply by z^n, dropping bits shifted past the limb capacity
    pub(crate) fn shl(&self, n: usize) -> Self {
        let words = n / 64;
        let bits = n % 64;
        let mut out = [0u64; NLIMBS];
        for i in (words..NLIMBS).rev() {
            let src = i - words;
            out[i] = self.0[src] << bits;
            if bits != 0 && src > 0 {
                out[i] |= self.0[src - 1] >> (64 - bits);
            }
        }
        FieldElement(out)
    }

    #[inline]
    fn set_bit(&mut self, i: usize) {
        self.0[i / 64] |= 1u64 << (i % 64);
    }
}

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0u64; NLIMBS];
        for (i, limb) in out.iter_mut().enumerate() {
            *limb = u64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        FieldElement(out)
    }
}

impl ConstantTimeEq for FieldElement {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

/// Carry-less 64×64 → 128-bit multiplication without data-dependent branches
#[inline(always)]
fn clmul64(a: u64, b: u64) -> (u64, u64) {
    let mut lo = 0u64;
    let mut hi = 0u64;
    for i in 0..64 {
        let mask = 0u64.wrapping_sub((b >> i) & 1);
        lo ^= (a << i) & mask;
        // (a >> 1) >> (63 - i) == a >> (64 - i), and is 0 for i == 0
        hi ^= ((a >> 1) >> (63 - i)) & mask;
    }
    (lo, hi)
}

/// Interleave zero bits: bit i of `x` moves to bit 2i
#[inline(always)]
fn spread32(x: u32) -> u64 {
    let mut x = x as u64;
    x = (x | (x << 16)) & 0x0000_FFFF_0000_FFFF;
    x = (x | (x << 8)) & 0x00FF_00FF_00FF_00FF;
    x = (x | (x << 4)) & 0x0F0F_0F0F_0F0F_0F0F;
    x = (x | (x << 2)) & 0x3333_3333_3333_3333;
    x = (x | (x << 1)) & 0x5555_5555_5555_5555;
    x
}

fn is_prime(n: usize) -> bool {
    n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
}

/// Descriptor of GF(2^m) = GF(2)[z] / f(z)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryField {
    degree: usize,
    /// Exponents of f below m, strictly decreasing and ending in 0
    reduction: &'static [usize],
    /// f(z) itself, including the z^m term (not a reduced element)
    modulus: FieldElement,
}

impl BinaryField {
    /// Create the field GF(2^degree) reduced by z^degree + Σ z^e for e in `reduction`.
    ///
    /// The polynomial is checked for a constant term, an odd number of terms
    /// (no factor z + 1) and z^(2^m) ≡ z (mod f). Since m must be prime, any
    /// factor of f would have degree 1 or m, so these checks prove irreducibility.
    pub fn new(degree: usize, reduction: &'static [usize]) -> Result<Self> {
        validate::parameter(
            (2..=MAX_DEGREE).contains(&degree),
            "field degree",
            "must be between 2 and 319",
        )?;
        validate::parameter(is_prime(degree), "field degree", "must be prime")?;
        validate::parameter(
            reduction.last() == Some(&0),
            "reduction polynomial",
            "constant term must be 1",
        )?;
        validate::parameter(
            reduction.windows(2).all(|w| w[0] > w[1]),
            "reduction polynomial",
            "exponents must be strictly decreasing",
        )?;
        validate::parameter(
            reduction[0] < degree,
            "reduction polynomial",
            "exponents must be below the field degree",
        )?;
        validate::parameter(
            reduction.len() % 2 == 0,
            "reduction polynomial",
            "an even number of terms is divisible by z + 1",
        )?;

        let mut modulus = FieldElement::zero();
        modulus.set_bit(degree);
        for &e in reduction {
            modulus.set_bit(e);
        }

        let field = BinaryField {
            degree,
            reduction,
            modulus,
        };

        let z = FieldElement::from_u64(0b10);
        let mut t = z;
        for _ in 0..degree {
            t = field.square(&t);
        }
        if t != z {
            return Err(Error::param(
                "reduction polynomial",
                "polynomial is not irreducible",
            ));
        }

        Ok(field)
    }

    /// Field degree m
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Encoded size of an element in bytes: ceil(m / 8)
    pub fn byte_len(&self) -> usize {
        (self.degree + 7) / 8
    }

    /// Check that `a` has degree < m
    pub fn is_reduced(&self, a: &FieldElement) -> bool {
        a.bit_length() <= self.degree
    }

    /// Build an element from a polynomial of degree < 64, rejecting values of
    /// degree >= m
    pub fn element_from_u64(&self, v: u64) -> Result<FieldElement> {
        let fe = FieldElement::from_u64(v);
        if !self.is_reduced(&fe) {
            return Err(Error::param(
                "field element",
                "value has degree >= field degree",
            ));
        }
        Ok(fe)
    }

    /// Field multiplication: carry-less product reduced modulo f
    pub fn mul(&self, a: &FieldElement, b: &FieldElement) -> FieldElement {
        let mut t = [0u64; NWIDE];
        for i in 0..NLIMBS {
            for j in 0..NLIMBS {
                let (lo, hi) = clmul64(a.0[i], b.0[j]);
                t[i + j] ^= lo;
                t[i + j + 1] ^= hi;
            }
        }
        self.reduce(t)
    }

    /// Field squaring by bit spreading; same result as `mul(a, a)`
    pub fn square(&self, a: &FieldElement) -> FieldElement {
        let mut t = [0u64; NWIDE];
        for i in 0..NLIMBS {
            t[2 * i] = spread32(a.0[i] as u32);
            t[2 * i + 1] = spread32((a.0[i] >> 32) as u32);
        }
        self.reduce(t)
    }

    /// Multiplicative inverse by the extended Euclidean algorithm over GF(2)[z].
    ///
    /// Returns `DivisionByZero` for the zero element. Running time depends on
    /// the value of `a`.
    pub fn invert(&self, a: &FieldElement) -> Result<FieldElement> {
        if a.is_zero() {
            return Err(Error::DivisionByZero {
                context: "GF(2^m) inversion",
            });
        }

        // Invariants: g1·a ≡ u and g2·a ≡ v (mod f)
        let mut u = *a;
        let mut v = self.modulus;
        let mut g1 = FieldElement::one();
        let mut g2 = FieldElement::zero();

        while !u.is_one() {
            let du = u.bit_length();
            let dv = v.bit_length();
            if du < dv {
                core::mem::swap(&mut u, &mut v);
                core::mem::swap(&mut g1, &mut g2);
            }
            if v.is_zero() {
                // gcd(a, f) = u != 1; only possible for a reducible f
                return Err(Error::param(
                    "reduction polynomial",
                    "element has no inverse",
                ));
            }
            let j = du.abs_diff(dv);
            u = u.add(&v.shl(j));
            g1 = g1.add(&g2.shl(j));
        }

        Ok(g1)
    }

    /// Field division a / b
    pub fn div(&self, a: &FieldElement, b: &FieldElement) -> Result<FieldElement> {
        Ok(self.mul(a, &self.invert(b)?))
    }

    /// Square root: a^(2^(m-1))
    pub fn sqrt(&self, a: &FieldElement) -> FieldElement {
        let mut r = *a;
        for _ in 1..self.degree {
            r = self.square(&r);
        }
        r
    }

    /// Absolute trace Tr(a) = Σ a^(2^i), i = 0..m-1; always 0 or 1
    pub fn trace(&self, a: &FieldElement) -> u8 {
        let mut t = *a;
        let mut acc = *a;
        for _ in 1..self.degree {
            t = self.square(&t);
            acc = acc.add(&t);
        }
        (acc.0[0] & 1) as u8
    }

    /// Half-trace H(a) = Σ a^(2^(2i)), i = 0..(m-1)/2, defined for odd m.
    ///
    /// When Tr(a) = 0, z = H(a) solves z² + z = a.
    pub fn half_trace(&self, a: &FieldElement) -> Result<FieldElement> {
        validate::parameter(
            self.degree % 2 == 1,
            "half-trace",
            "only defined for odd field degree",
        )?;
        let mut h = *a;
        for _ in 0..(self.degree - 1) / 2 {
            h = self.square(&self.square(&h)).add(a);
        }
        Ok(h)
    }

    /// Decode a big-endian element of exactly `byte_len()` bytes
    pub fn from_bytes(&self, bytes: &[u8]) -> Result<FieldElement> {
        let len = self.byte_len();
        validate::length("field element", bytes.len(), len)?;

        let mut fe = FieldElement::zero();
        for (i, &byte) in bytes.iter().enumerate() {
            let j = len - 1 - i;
            fe.0[j / 8] |= (byte as u64) << (8 * (j % 8));
        }

        if !self.is_reduced(&fe) {
            return Err(Error::param(
                "field element",
                "value has degree >= field degree",
            ));
        }
        Ok(fe)
    }

    /// Encode an element as `byte_len()` big-endian bytes
    pub fn to_bytes(&self, a: &FieldElement) -> Vec<u8> {
        let len = self.byte_len();
        let mut out = vec![0u8; len];
        for (i, byte) in out.iter_mut().enumerate() {
            let j = len - 1 - i;
            *byte = (a.0[j / 8] >> (8 * (j % 8))) as u8;
        }
        out
    }

    /// Reduce a product of degree <= 2m - 2 modulo f.
    ///
    /// Walks the high bits top-down and folds each one onto the lower
    /// exponents of f under a mask, so the sequence of memory accesses does
    /// not depend on the value.
    fn reduce(&self, mut t: [u64; NWIDE]) -> FieldElement {
        let m = self.degree;
        for i in (m..=2 * m - 2).rev() {
            let bit = (t[i / 64] >> (i % 64)) & 1;
            t[i / 64] ^= bit << (i % 64);
            let base = i - m;
            for &e in self.reduction {
                let k = base + e;
                t[k / 64] ^= bit << (k % 64);
            }
        }

        let mut out = [0u64; NLIMBS];
        out.copy_from_slice(&t[..NLIMBS]);
        FieldElement(out)
    }
}
