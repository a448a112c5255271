//! Constant values for the gf2ecdh library
//!
//! Curve domain parameters are plain data: a table is picked once when the
//! curve is constructed and never changes afterwards.

#![no_std]

pub mod traditional;
