//! Secret data types with guaranteed zeroization

use core::fmt;
use core::ops::{Deref, DerefMut};
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Variable-size secret vector that guarantees zeroization
///
/// Key sizes depend on the selected curve, so private scalars and shared
/// secrets are carried in this type rather than in fixed arrays.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

impl SecretVec {
    /// Create a new secret vector with the given data
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Create a secret vector from a slice
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Get the length of the vector
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the vector is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a reference to the inner data
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl AsMut<[u8]> for SecretVec {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl From<Vec<u8>> for SecretVec {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl ConstantTimeEq for SecretVec {
    fn ct_eq(&self, other: &Self) -> Choice {
        // Lengths are public (they follow from the curve)
        if self.data.len() != other.data.len() {
            return Choice::from(0);
        }
        self.data.as_slice().ct_eq(other.data.as_slice())
    }
}

impl PartialEq for SecretVec {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretVec {}

impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}

/// Guard type that ensures a value is zeroized when dropped
///
/// Used for scratch buffers (e.g. raw random bytes) that are filled, parsed
/// and then discarded, including on early returns.
pub struct ZeroizeGuard<'a, T: Zeroize> {
    value: &'a mut T,
}

impl<'a, T: Zeroize> ZeroizeGuard<'a, T> {
    /// Create a new zeroize guard for the given value
    pub fn new(value: &'a mut T) -> Self {
        Self { value }
    }
}

impl<T: Zeroize> Drop for ZeroizeGuard<'_, T> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl<T: Zeroize> Deref for ZeroizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl<T: Zeroize> DerefMut for ZeroizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_vec_redacted_debug() {
        let secret = SecretVec::from_slice(&[0xAA; 21]);
        assert_eq!(format!("{:?}", secret), "SecretVec(len=21, [REDACTED])");
    }

    #[test]
    fn test_secret_vec_constant_time_eq() {
        let a = SecretVec::new(vec![1, 2, 3]);
        let b = SecretVec::from_slice(&[1, 2, 3]);
        let c = SecretVec::from_slice(&[1, 2, 4]);
        let d = SecretVec::from_slice(&[1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_secret_vec_zeroize() {
        let mut secret = SecretVec::from_slice(&[0x55; 8]);
        secret.zeroize();
        assert!(secret.is_empty());
    }

    #[test]
    fn test_zeroize_guard_clears_on_drop() {
        let mut buffer = [0xFFu8; 16];
        {
            let mut guard = ZeroizeGuard::new(&mut buffer);
            guard[0] = 0x01;
            assert_eq!(guard[0], 0x01);
        }
        assert_eq!(buffer, [0u8; 16]);
    }
}
