//! RSA key material with precomputed CRT parameters.

use crate::errors::KeygenError;
use crate::ring::Ring;

use serde::{Deserialize, Serialize};

/// An RSA private key in CRT form, derived once from the prime factors
/// and the public exponent.
///
/// Every field is immutable after construction; a shared reference can
/// be used from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMaterial {
    /// First prime factor.
    pub p: u64,
    /// Second prime factor.
    pub q: u64,
    /// Public exponent.
    pub e: u64,
    /// Private exponent, `e^-1 mod (p-1)(q-1)`.
    pub d: u64,
    /// `d mod (p-1)`.
    pub dp: u64,
    /// `d mod (q-1)`.
    pub dq: u64,
    /// CRT coefficient, `q^-1 mod p`.
    pub qinv: u64,
}

impl KeyMaterial {
    /// Derives the full CRT key from `(p, q, e)`.
    ///
    /// # Errors
    ///
    /// Returns `KeygenError::InvalidParameters` when either factor is
    /// below 2, the factors are equal, or `p*q` overflows 64 bits (the
    /// CRT recombination relies on the modulus fitting a `u64`).
    /// Returns `KeygenError::NoInverse` when `gcd(e, (p-1)(q-1)) != 1`
    /// or `gcd(q, p) != 1` — unreachable with the fixed device
    /// constants, but kept so a misconfigured key fails loudly instead
    /// of producing garbage.
    pub fn try_with(p: u64, q: u64, e: u64) -> Result<Self, KeygenError> {
        if p < 2 || q < 2 {
            return Err(KeygenError::InvalidParameters(format!(
                "Prime factors must be at least 2, got p={}, q={}",
                p, q
            )));
        }

        if p == q {
            return Err(KeygenError::InvalidParameters(
                "Prime factors must be distinct".to_string(),
            ));
        }

        if p.checked_mul(q).is_none() {
            return Err(KeygenError::InvalidParameters(format!(
                "Modulus p*q must fit 64 bits, got p={}, q={}",
                p, q
            )));
        }

        // p*q fits, so (p-1)(q-1) does too
        let phi = (p - 1) * (q - 1);

        let d = Ring::try_with(phi)?.inv(e)?;
        let dp = d % (p - 1);
        let dq = d % (q - 1);
        let qinv = Ring::try_with(p)?.inv(q)?;

        Ok(Self {
            p,
            q,
            e,
            d,
            dp,
            dq,
            qinv,
        })
    }

    /// The public modulus `p * q`.
    pub fn modulus(&self) -> u64 {
        self.p * self.q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SONY_P: u64 = 2_795_287_379;
    const SONY_Q: u64 = 3_544_934_711;
    const SONY_E: u64 = 41;

    #[test]
    fn test_sony_key_derivation() -> Result<(), KeygenError> {
        let key = KeyMaterial::try_with(SONY_P, SONY_Q, SONY_E)?;

        assert_eq!(key.d, 2_900_227_683_130_855_721);
        assert_eq!(key.dp, 954_488_373);
        assert_eq!(key.dq, 432_309_111);
        assert_eq!(key.qinv, 1_795_521_665);
        assert_eq!(key.modulus(), 9_909_111_257_037_312_469);
        Ok(())
    }

    #[test]
    fn test_private_exponent_inverts_public() -> Result<(), KeygenError> {
        let key = KeyMaterial::try_with(SONY_P, SONY_Q, SONY_E)?;

        let phi = (key.p - 1) * (key.q - 1);
        assert_eq!((key.e as u128 * key.d as u128) % phi as u128, 1);
        Ok(())
    }

    #[test]
    fn test_rejects_degenerate_factors() {
        assert!(matches!(
            KeyMaterial::try_with(1, 7, 3),
            Err(KeygenError::InvalidParameters(_))
        ));
        assert!(matches!(
            KeyMaterial::try_with(7, 7, 3),
            Err(KeygenError::InvalidParameters(_))
        ));
        assert!(matches!(
            KeyMaterial::try_with(u64::MAX, u64::MAX - 2, 3),
            Err(KeygenError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_rejects_exponent_sharing_factor_with_phi() {
        // phi = 4 * 6 = 24, gcd(4, 24) != 1
        assert!(matches!(
            KeyMaterial::try_with(5, 7, 4),
            Err(KeygenError::NoInverse(_))
        ));
    }

    #[test]
    fn test_key_survives_json_round_trip() -> Result<(), KeygenError> {
        let key = KeyMaterial::try_with(SONY_P, SONY_Q, SONY_E)?;

        let encoded = serde_json::to_string(&key).unwrap();
        let decoded: KeyMaterial = serde_json::from_str(&encoded).unwrap();
        assert_eq!(key, decoded);
        Ok(())
    }
}
