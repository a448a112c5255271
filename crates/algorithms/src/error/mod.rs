//! Error handling for binary-field curve primitives

use std::borrow::Cow;

use gf2ecdh_api::Error as CoreError;
use thiserror::Error as ThisError;

/// The error type for curve primitives
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Inversion of the zero field element
    #[error("Division by zero in {context}")]
    DivisionByZero {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// Scalar is zero or not below the group order
    #[error("Invalid private key: {reason}")]
    InvalidPrivateKey {
        /// Why the scalar was rejected
        reason: &'static str,
    },

    /// Point is the identity, off the curve, or of small order
    #[error("Invalid public key: {reason}")]
    InvalidPublicKey {
        /// Why the point was rejected
        reason: &'static str,
    },

    /// Parameter validation error
    #[error("Invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    #[error("Invalid length for {context}: expected {expected}, got {actual}")]
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<R: Into<Cow<'static, str>>>(name: &'static str, reason: R) -> Self {
        Error::Parameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for curve primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::DivisionByZero { context } => CoreError::DivisionByZero { context },
            Error::InvalidPrivateKey { reason } => CoreError::InvalidPrivateKey {
                context: "private key",
                message: reason.to_string(),
            },
            Error::InvalidPublicKey { reason } => CoreError::InvalidPublicKey {
                context: "public key",
                message: reason.to_string(),
            },
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: name,
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
        }
    }
}

pub mod validate;
