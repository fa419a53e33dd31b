//! Recovery of Sony 4x4 BIOS unlock passwords.
//!
//! The BIOS displays a 16-character challenge code over a 16-symbol
//! alphabet. The code carries a 64-bit RSA ciphertext whose private key
//! factors are fixed for the whole device family, so the matching
//! 8-digit master password can be computed offline: decode the code
//! into bytes, CRT-decrypt them, and re-encode the low plaintext word
//! through the password alphabet.

pub mod codec;
pub mod errors;
pub mod keypair;
pub mod preset;
pub mod ring;
pub mod rsa;
pub mod solver;

pub use solver::{decode_password, solve};
