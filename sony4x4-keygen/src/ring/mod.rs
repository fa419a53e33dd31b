//! # Ring Module
//!
//! Provides the [`Ring`] struct for modular arithmetic over `u64`
//! moduli, together with the Euclidean helpers used to derive modular
//! inverses.

pub mod helper;
pub mod math;

pub use helper::{extended_gcd, gcd, modinv};
pub use math::Ring;
