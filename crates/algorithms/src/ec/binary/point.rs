//! Affine point arithmetic on y² + xy = x³ + ax² + b

use crate::ec::binary::curve::BinaryCurve;
use crate::ec::binary::field::FieldElement;
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

/// A point on a binary curve
///
/// The identity is its own variant, so an all-zero coordinate pair is never
/// mistaken for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Point {
    /// The point at infinity (group identity)
    Infinity,
    /// Affine point (x, y)
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

impl Point {
    /// Check if this point is the identity element.
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    /// x-coordinate, or `None` for the point at infinity
    pub fn x(&self) -> Option<&FieldElement> {
        match self {
            Point::Infinity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the point at infinity
    pub fn y(&self) -> Option<&FieldElement> {
        match self {
            Point::Infinity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    fn parts(&self) -> (u8, FieldElement, FieldElement) {
        match self {
            Point::Infinity => (1, FieldElement::zero(), FieldElement::zero()),
            Point::Affine { x, y } => (0, *x, *y),
        }
    }
}

// Coordinates are selected under a mask, but rebuilding the enum branches on
// the selected tag; in `mul` this reveals how many leading scalar bits are zero.
impl ConditionallySelectable for Point {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let (a_inf, ax, ay) = a.parts();
        let (b_inf, bx, by) = b.parts();
        let inf = u8::conditional_select(&a_inf, &b_inf, choice);
        let x = FieldElement::conditional_select(&ax, &bx, choice);
        let y = FieldElement::conditional_select(&ay, &by, choice);
        if inf == 1 {
            Point::Infinity
        } else {
            Point::Affine { x, y }
        }
    }
}

impl Zeroize for Point {
    fn zeroize(&mut self) {
        if let Point::Affine { x, y } = self {
            x.zeroize();
            y.zeroize();
        }
        *self = Point::Infinity;
    }
}

impl BinaryCurve {
    /// Check the curve equation y² + xy = x³ + ax² + b.
    ///
    /// The point at infinity is the group identity and counts as on the curve.
    pub fn is_on_curve(&self, p: &Point) -> bool {
        let (x, y) = match p {
            Point::Infinity => return true,
            Point::Affine { x, y } => (x, y),
        };
        let f = self.field();
        if !f.is_reduced(x) || !f.is_reduced(y) {
            return false;
        }

        let lhs = f.square(y).add(&f.mul(x, y));
        // (x + a)·x² + b = x³ + ax² + b
        let rhs = f.mul(&x.add(self.a()), &f.square(x)).add(self.b());
        lhs == rhs
    }

    /// Point negation: -(x, y) = (x, x + y)
    pub fn negate(&self, p: &Point) -> Point {
        match p {
            Point::Infinity => Point::Infinity,
            Point::Affine { x, y } => Point::Affine { x: *x, y: x.add(y) },
        }
    }

    /// Double a point (add it to itself).
    ///
    /// Points with x = 0 have order 2 and double to the identity.
    pub fn double(&self, p: &Point) -> Point {
        let (x, y) = match p {
            Point::Infinity => return Point::Infinity,
            Point::Affine { x, y } => (x, y),
        };
        let f = self.field();
        let inv_x = match f.invert(x) {
            Ok(inv) => inv,
            Err(_) => return Point::Infinity,
        };

        // λ = x + y/x
        let lambda = x.add(&f.mul(y, &inv_x));
        let x3 = f.square(&lambda).add(&lambda).add(self.a());
        let y3 = f
            .square(x)
            .add(&f.mul(&lambda.add(&FieldElement::one()), &x3));
        Point::Affine { x: x3, y: y3 }
    }

    /// Add two points using the group law for binary elliptic curves.
    pub fn add(&self, p: &Point, q: &Point) -> Point {
        let (x1, y1) = match p {
            Point::Infinity => return *q,
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match q {
            Point::Infinity => return *p,
            Point::Affine { x, y } => (x, y),
        };

        if x1 == x2 {
            if y1 == y2 {
                return self.double(p);
            }
            // same x, different y: q = -p
            return Point::Infinity;
        }

        let f = self.field();
        let lambda = match f.div(&y1.add(y2), &x1.add(x2)) {
            Ok(l) => l,
            Err(_) => return Point::Infinity,
        };
        let x3 = f
            .square(&lambda)
            .add(&lambda)
            .add(x1)
            .add(x2)
            .add(self.a());
        let y3 = f.mul(&lambda, &x1.add(&x3)).add(&x3).add(y1);
        Point::Affine { x: x3, y: y3 }
    }
}
