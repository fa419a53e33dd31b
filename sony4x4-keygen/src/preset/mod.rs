//! Fixed key material for the Sony 4x4 device family.

use crate::keypair::KeyMaterial;

use lazy_static::lazy_static;

/// First prime factor of the device modulus.
pub const SONY_4X4_P: u64 = 2_795_287_379;
/// Second prime factor of the device modulus.
pub const SONY_4X4_Q: u64 = 3_544_934_711;
/// Public exponent the firmware encrypts with.
pub const SONY_4X4_E: u64 = 41;

lazy_static! {
    /// The CRT private key shared by the whole Sony 4x4 family,
    /// derived once and shared read-only across calls.
    pub static ref SONY_4X4: KeyMaterial =
        KeyMaterial::try_with(SONY_4X4_P, SONY_4X4_Q, SONY_4X4_E)
            .expect("the fixed Sony 4x4 constants form a valid CRT key");
}
