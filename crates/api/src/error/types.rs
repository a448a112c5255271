//! Error type definitions for key-agreement operations

use thiserror::Error as ThisError;

/// Primary error type for gf2ecdh operations
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Inversion of the zero field element
    ///
    /// Signals a programming error or a degenerate point; never retried.
    #[error("Division by zero: {context}")]
    DivisionByZero { context: &'static str },

    /// Private-key material decodes to zero or to a scalar not below the group order
    ///
    /// The caller must supply fresh randomness.
    #[error("Invalid private key: {context}: {message}")]
    InvalidPrivateKey {
        context: &'static str,
        message: String,
    },

    /// Peer public key is the identity, off the curve, or of small order
    ///
    /// The caller must abort the exchange.
    #[error("Invalid public key: {context}: {message}")]
    InvalidPublicKey {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for gf2ecdh operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its kind and details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::InvalidPrivateKey { message, .. } => Self::InvalidPrivateKey { context, message },
            Self::InvalidPublicKey { message, .. } => Self::InvalidPublicKey { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }

    /// Returns the context label attached to this error
    pub fn context(&self) -> &'static str {
        match self {
            Self::DivisionByZero { context }
            | Self::InvalidPrivateKey { context, .. }
            | Self::InvalidPublicKey { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::InvalidParameter { context, .. } => context,
        }
    }
}
