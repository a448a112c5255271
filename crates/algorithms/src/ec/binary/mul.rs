//! Double-and-add scalar multiplication

use crate::ec::binary::curve::BinaryCurve;
use crate::ec::binary::point::Point;
use crate::ec::binary::scalar::{Scalar, SCALAR_BITS};
use subtle::ConditionallySelectable;

impl BinaryCurve {
    /// Scalar multiplication: compute k·P.
    ///
    /// Walks every bit of the scalar container from the top, always computing
    /// `acc + P` and keeping it through a masked select, so the sequence of
    /// group operations does not depend on k. The affine formulas still invert
    /// field elements in variable time.
    pub fn mul(&self, k: &Scalar, p: &Point) -> Point {
        if p.is_identity() {
            return Point::Infinity;
        }

        let mut acc = Point::Infinity;
        for i in (0..SCALAR_BITS).rev() {
            acc = self.double(&acc);
            let sum = self.add(&acc, p);
            acc = Point::conditional_select(&acc, &sum, k.bit(i));
        }
        acc
    }

    /// Scalar multiplication with the base point: k·G
    pub fn mul_base(&self, k: &Scalar) -> Point {
        self.mul(k, self.generator())
    }
}
