//! Binary curve descriptor and SEC 1 point encoding

use crate::ec::binary::field::{BinaryField, FieldElement};
use crate::ec::binary::point::Point;
use crate::ec::binary::scalar::Scalar;
use crate::error::{validate, Error, Result};
use core::fmt;
use gf2ecdh_common::SecretVec;
use gf2ecdh_params::traditional::ecdh::{
    point_compressed_size, point_uncompressed_size, BinaryCurveParams, SECT163K1, SECT163R2,
    SECT283K1,
};

/// Format of a serialized elliptic curve point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointFormat {
    /// Uncompressed format: 0x04 || x || y
    Uncompressed,
    /// Compressed format: 0x02/0x03 || x
    #[default]
    Compressed,
}

/// Validated curve y² + xy = x³ + ax² + b over GF(2^m) with base point G
///
/// Built once from a static parameter table and read-only afterwards; all
/// arithmetic takes `&self`.
#[derive(Clone)]
pub struct BinaryCurve {
    name: &'static str,
    field: BinaryField,
    a: FieldElement,
    b: FieldElement,
    g: Point,
    order: Scalar,
    order_bits: usize,
    cofactor: u32,
    scalar_bytes: usize,
}

impl fmt::Debug for BinaryCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryCurve")
            .field("name", &self.name)
            .field("degree", &self.field.degree())
            .field("order_bits", &self.order_bits)
            .field("cofactor", &self.cofactor)
            .finish_non_exhaustive()
    }
}

impl BinaryCurve {
    /// Build a curve from a parameter table, validating every entry.
    pub fn from_params(params: &'static BinaryCurveParams) -> Result<Self> {
        let field = BinaryField::new(params.degree, params.reduction)?;
        validate::parameter(
            params.field_bytes == field.byte_len(),
            "field_bytes",
            "must equal ceil(degree / 8)",
        )?;

        let a = field.from_bytes(params.a)?;
        let b = field.from_bytes(params.b)?;
        validate::parameter(!b.is_zero(), "b", "curve is singular when b = 0")?;

        validate::length("group order", params.order.len(), params.scalar_bytes)?;
        let order = Scalar::from_be_bytes(params.order)?;
        let order_bits = order.bit_length();
        validate::parameter(order_bits > 1, "group order", "must be greater than 1")?;
        validate::parameter(
            params.scalar_bytes == (order_bits + 7) / 8,
            "scalar_bytes",
            "must equal ceil(bits(order) / 8)",
        )?;
        validate::parameter(params.cofactor != 0, "cofactor", "must be non-zero")?;

        let g = Point::Affine {
            x: field.from_bytes(params.g_x)?,
            y: field.from_bytes(params.g_y)?,
        };

        let curve = BinaryCurve {
            name: params.name,
            field,
            a,
            b,
            g,
            order,
            order_bits,
            cofactor: params.cofactor,
            scalar_bytes: params.scalar_bytes,
        };
        validate::parameter(
            curve.is_on_curve(&curve.g),
            "base point",
            "does not satisfy the curve equation",
        )?;
        Ok(curve)
    }

    /// NIST K-163
    pub fn sect163k1() -> Result<Self> {
        Self::from_params(&SECT163K1)
    }

    /// NIST B-163
    pub fn sect163r2() -> Result<Self> {
        Self::from_params(&SECT163R2)
    }

    /// NIST K-283
    pub fn sect283k1() -> Result<Self> {
        Self::from_params(&SECT283K1)
    }

    /// SECG name of the curve
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The underlying field GF(2^m)
    pub fn field(&self) -> &BinaryField {
        &self.field
    }

    /// Curve coefficient a
    pub fn a(&self) -> &FieldElement {
        &self.a
    }

    /// Curve coefficient b
    pub fn b(&self) -> &FieldElement {
        &self.b
    }

    /// Base point G
    pub fn generator(&self) -> &Point {
        &self.g
    }

    /// Prime order n of G
    pub fn order(&self) -> &Scalar {
        &self.order
    }

    /// Bit length of n
    pub fn order_bits(&self) -> usize {
        self.order_bits
    }

    /// Cofactor h
    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }

    /// Encoded size of a field element
    pub fn field_bytes(&self) -> usize {
        self.field.byte_len()
    }

    /// Encoded size of a private scalar
    pub fn scalar_bytes(&self) -> usize {
        self.scalar_bytes
    }

    /// Encoded size of a point in the given format (excluding the identity)
    pub fn point_size(&self, format: PointFormat) -> usize {
        match format {
            PointFormat::Uncompressed => point_uncompressed_size(self.field_bytes()),
            PointFormat::Compressed => point_compressed_size(self.field_bytes()),
        }
    }

    /// Decode a private scalar of exactly `scalar_bytes` big-endian bytes.
    ///
    /// Zero and values not below n are rejected; no clamping is applied.
    pub fn scalar_from_bytes(&self, bytes: &[u8]) -> Result<Scalar> {
        validate::length("private scalar", bytes.len(), self.scalar_bytes)?;
        let k = Scalar::from_be_bytes(bytes)?;
        if k.is_zero() {
            return Err(Error::InvalidPrivateKey {
                reason: "scalar is zero",
            });
        }
        if !bool::from(k.ct_lt(&self.order)) {
            return Err(Error::InvalidPrivateKey {
                reason: "scalar is not below the group order",
            });
        }
        Ok(k)
    }

    /// Encode a scalar as `scalar_bytes` big-endian bytes
    pub fn scalar_to_bytes(&self, k: &Scalar) -> SecretVec {
        SecretVec::new(k.to_be_bytes(self.scalar_bytes))
    }

    /// Clear the bits of a raw scalar buffer at and above bits(n)
    pub(crate) fn mask_scalar_bytes(&self, bytes: &mut [u8]) {
        let excess = self.scalar_bytes * 8 - self.order_bits;
        if let Some(top) = bytes.first_mut() {
            *top &= 0xFF >> excess;
        }
    }

    /// Serialize a point (SEC 1 §2.3.3).
    ///
    /// The identity encodes as the single byte 0x00. The compressed flag is
    /// bit 0 of y·x⁻¹, or 0 when x = 0.
    pub fn encode_point(&self, p: &Point, format: PointFormat) -> Vec<u8> {
        let (x, y) = match p {
            Point::Infinity => return vec![0x00],
            Point::Affine { x, y } => (x, y),
        };

        let mut out = Vec::with_capacity(self.point_size(format));
        match format {
            PointFormat::Uncompressed => {
                out.push(0x04);
                out.extend_from_slice(&self.field.to_bytes(x));
                out.extend_from_slice(&self.field.to_bytes(y));
            }
            PointFormat::Compressed => {
                let y_tilde = match self.field.invert(x) {
                    Ok(inv_x) => self.field.mul(y, &inv_x).bit(0) as u8,
                    Err(_) => 0,
                };
                out.push(0x02 | y_tilde);
                out.extend_from_slice(&self.field.to_bytes(x));
            }
        }
        out
    }

    /// Deserialize a point (SEC 1 §2.3.4), checking that it lies on the curve.
    ///
    /// A compressed point is recovered by solving z² + z = x + a + b/x² with
    /// the half-trace and setting y = x·z.
    pub fn decode_point(&self, bytes: &[u8]) -> Result<Point> {
        let fb = self.field_bytes();
        let tag = match bytes.first() {
            Some(&tag) => tag,
            None => {
                return Err(Error::Length {
                    context: "encoded point",
                    expected: point_compressed_size(fb),
                    actual: 0,
                })
            }
        };

        match tag {
            0x00 => {
                validate::length("encoded identity", bytes.len(), 1)?;
                Ok(Point::Infinity)
            }
            0x04 => {
                validate::length("uncompressed point", bytes.len(), point_uncompressed_size(fb))?;
                let x = self.coordinate(&bytes[1..1 + fb])?;
                let y = self.coordinate(&bytes[1 + fb..])?;
                let p = Point::Affine { x, y };
                if !self.is_on_curve(&p) {
                    return Err(Error::InvalidPublicKey {
                        reason: "point is not on the curve",
                    });
                }
                Ok(p)
            }
            0x02 | 0x03 => {
                validate::length("compressed point", bytes.len(), point_compressed_size(fb))?;
                let x = self.coordinate(&bytes[1..])?;
                let y = self.decompress_y(&x, (tag & 1) as u64)?;
                Ok(Point::Affine { x, y })
            }
            _ => Err(Error::InvalidPublicKey {
                reason: "unknown point encoding tag",
            }),
        }
    }

    fn coordinate(&self, bytes: &[u8]) -> Result<FieldElement> {
        self.field
            .from_bytes(bytes)
            .map_err(|_| Error::InvalidPublicKey {
                reason: "coordinate is not a field element",
            })
    }

    fn decompress_y(&self, x: &FieldElement, y_tilde: u64) -> Result<FieldElement> {
        let f = &self.field;
        if x.is_zero() {
            return Ok(f.sqrt(&self.b));
        }

        let x_sq = f.square(x);
        let beta = x.add(&self.a).add(&f.div(&self.b, &x_sq)?);
        if f.trace(&beta) != 0 {
            return Err(Error::InvalidPublicKey {
                reason: "x-coordinate has no point on the curve",
            });
        }

        let mut z = f.half_trace(&beta)?;
        if z.bit(0) != y_tilde {
            z = z.add(&FieldElement::one());
        }
        Ok(f.mul(x, &z))
    }
}
