//! Trait definitions for the public API

pub mod key_agreement;

pub use key_agreement::KeyAgreement;
