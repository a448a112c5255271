//! Domain parameters for ECDH over binary fields GF(2^m)
//!
//! Every curve here has the form y² + xy = x³ + ax² + b. Values are taken
//! from SEC 2 v2 and FIPS 186. All byte strings are big-endian and exactly
//! `field_bytes` (coordinates, coefficients) or `scalar_bytes` (order) long.

/// Domain parameters of a binary elliptic curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryCurveParams {
    /// SECG name of the curve
    pub name: &'static str,
    /// Field degree m
    pub degree: usize,
    /// Exponents of the reduction polynomial below `degree`, e.g. `[7, 6, 3, 0]`
    /// for z^163 + z^7 + z^6 + z^3 + 1
    pub reduction: &'static [usize],
    /// Curve coefficient a
    pub a: &'static [u8],
    /// Curve coefficient b
    pub b: &'static [u8],
    /// x-coordinate of the base point G
    pub g_x: &'static [u8],
    /// y-coordinate of the base point G
    pub g_y: &'static [u8],
    /// Prime order n of G
    pub order: &'static [u8],
    /// Cofactor h = #E / n
    pub cofactor: u32,
    /// Encoded size of a field element in bytes
    pub field_bytes: usize,
    /// Encoded size of a scalar in bytes
    pub scalar_bytes: usize,
}

/// Size of a sect163k1 / sect163r2 field element in bytes (163 bits -> 21 bytes)
pub const SECT163_FIELD_ELEMENT_SIZE: usize = 21;

/// Size of a sect163k1 / sect163r2 scalar in bytes
pub const SECT163_SCALAR_SIZE: usize = 21;

/// Size of a sect283k1 field element in bytes (283 bits -> 36 bytes)
pub const SECT283_FIELD_ELEMENT_SIZE: usize = 36;

/// Size of a sect283k1 scalar in bytes
pub const SECT283_SCALAR_SIZE: usize = 36;

/// Uncompressed point size: 0x04 || x || y
pub const fn point_uncompressed_size(field_bytes: usize) -> usize {
    1 + 2 * field_bytes
}

/// Compressed point size: 0x02/0x03 || x
pub const fn point_compressed_size(field_bytes: usize) -> usize {
    1 + field_bytes
}

const SECT163_ONE: [u8; SECT163_FIELD_ELEMENT_SIZE] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
];

const SECT163_REDUCTION: [usize; 4] = [7, 6, 3, 0];

/// NIST K-163: Koblitz curve with a = 1, b = 1
pub const SECT163K1: BinaryCurveParams = BinaryCurveParams {
    name: "sect163k1",
    degree: 163,
    reduction: &SECT163_REDUCTION,
    a: &SECT163_ONE,
    b: &SECT163_ONE,
    g_x: &[
        0x02, 0xFE, 0x13, 0xC0, 0x53, 0x7B, 0xBC, 0x11, 0xAC, 0xAA, 0x07, 0xD7,
        0x93, 0xDE, 0x4E, 0x6D, 0x5E, 0x5C, 0x94, 0xEE, 0xE8,
    ],
    g_y: &[
        0x02, 0x89, 0x07, 0x0F, 0xB0, 0x5D, 0x38, 0xFF, 0x58, 0x32, 0x1F, 0x2E,
        0x80, 0x05, 0x36, 0xD5, 0x38, 0xCC, 0xDA, 0xA3, 0xD9,
    ],
    order: &[
        0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x01,
        0x08, 0xA2, 0xE0, 0xCC, 0x0D, 0x99, 0xF8, 0xA5, 0xEF,
    ],
    cofactor: 2,
    field_bytes: SECT163_FIELD_ELEMENT_SIZE,
    scalar_bytes: SECT163_SCALAR_SIZE,
};

/// NIST B-163: pseudo-random curve with a = 1
pub const SECT163R2: BinaryCurveParams = BinaryCurveParams {
    name: "sect163r2",
    degree: 163,
    reduction: &SECT163_REDUCTION,
    a: &SECT163_ONE,
    b: &[
        0x02, 0x0A, 0x60, 0x19, 0x07, 0xB8, 0xC9, 0x53, 0xCA, 0x14, 0x81, 0xEB,
        0x10, 0x51, 0x2F, 0x78, 0x74, 0x4A, 0x32, 0x05, 0xFD,
    ],
    g_x: &[
        0x03, 0xF0, 0xEB, 0xA1, 0x62, 0x86, 0xA2, 0xD5, 0x7E, 0xA0, 0x99, 0x11,
        0x68, 0xD4, 0x99, 0x46, 0x37, 0xE8, 0x34, 0x3E, 0x36,
    ],
    g_y: &[
        0x00, 0xD5, 0x1F, 0xBC, 0x6C, 0x71, 0xA0, 0x09, 0x4F, 0xA2, 0xCD, 0xD5,
        0x45, 0xB1, 0x1C, 0x5C, 0x0C, 0x79, 0x73, 0x24, 0xF1,
    ],
    order: &[
        0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x92,
        0xFE, 0x77, 0xE7, 0x0C, 0x12, 0xA4, 0x23, 0x4C, 0x33,
    ],
    cofactor: 2,
    field_bytes: SECT163_FIELD_ELEMENT_SIZE,
    scalar_bytes: SECT163_SCALAR_SIZE,
};

const SECT283_ZERO: [u8; SECT283_FIELD_ELEMENT_SIZE] = [0u8; SECT283_FIELD_ELEMENT_SIZE];

const SECT283_ONE: [u8; SECT283_FIELD_ELEMENT_SIZE] = {
    let mut one = [0u8; SECT283_FIELD_ELEMENT_SIZE];
    one[SECT283_FIELD_ELEMENT_SIZE - 1] = 1;
    one
};

/// NIST K-283: Koblitz curve with a = 0, b = 1 over z^283 + z^12 + z^7 + z^5 + 1
pub const SECT283K1: BinaryCurveParams = BinaryCurveParams {
    name: "sect283k1",
    degree: 283,
    reduction: &[12, 7, 5, 0],
    a: &SECT283_ZERO,
    b: &SECT283_ONE,
    g_x: &[
        0x05, 0x03, 0x21, 0x3F, 0x78, 0xCA, 0x44, 0x88, 0x3F, 0x1A, 0x3B, 0x81,
        0x62, 0xF1, 0x88, 0xE5, 0x53, 0xCD, 0x26, 0x5F, 0x23, 0xC1, 0x56, 0x7A,
        0x16, 0x87, 0x69, 0x13, 0xB0, 0xC2, 0xAC, 0x24, 0x58, 0x49, 0x28, 0x36,
    ],
    g_y: &[
        0x01, 0xCC, 0xDA, 0x38, 0x0F, 0x1C, 0x9E, 0x31, 0x8D, 0x90, 0xF9, 0x5D,
        0x07, 0xE5, 0x42, 0x6F, 0xE8, 0x7E, 0x45, 0xC0, 0xE8, 0x18, 0x46, 0x98,
        0xE4, 0x59, 0x62, 0x36, 0x4E, 0x34, 0x11, 0x61, 0x77, 0xDD, 0x22, 0x59,
    ],
    order: &[
        0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xE9, 0xAE, 0x2E, 0xD0, 0x75, 0x77,
        0x26, 0x5D, 0xFF, 0x7F, 0x94, 0x45, 0x1E, 0x06, 0x1E, 0x16, 0x3C, 0x61,
    ],
    cofactor: 4,
    field_bytes: SECT283_FIELD_ELEMENT_SIZE,
    scalar_bytes: SECT283_SCALAR_SIZE,
};

/// All curves shipped with the library
pub const BINARY_CURVES: [&BinaryCurveParams; 3] = [&SECT163K1, &SECT163R2, &SECT283K1];
