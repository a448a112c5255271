//! Elliptic Curve Primitives
//!
//! Binary-field curves only; prime-field curves are not supported.

pub mod binary;

pub use binary::{
    BinaryCurve, FieldElement as BinaryFieldElement, Point as BinaryPoint,
    Scalar as BinaryScalar,
};
