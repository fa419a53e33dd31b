//! Implementation of modular arithmetic over a fixed `u64` modulus.

use crate::errors::KeygenError;

use super::modinv;

use serde::{Deserialize, Serialize};

/// Represents the residue ring Z_m for a `u64` modulus.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub modulus: u64,
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be non-zero. A modulus of 1 is allowed: every
    /// operation in Z_1 collapses to 0.
    pub fn try_with(modulus: u64) -> Result<Self, KeygenError> {
        if modulus == 0 {
            return Err(KeygenError::InvalidModulus(
                "Modulus must be non-zero".to_string(),
            ));
        }

        Ok(Ring { modulus })
    }

    /// Returns the modulus of the ring.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Handles negative values correctly by adding the modulus.
    ///
    /// # Example
    ///
    /// ```
    /// # use sony4x4_keygen::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.normalize(15), 5);
    /// assert_eq!(ring.normalize(-3), 7);
    /// assert_eq!(ring.normalize(10), 0);
    /// ```
    pub fn normalize(&self, value: i128) -> u64 {
        let m = self.modulus as i128;

        let rem = value % m;
        if rem < 0 {
            return (rem + m) as u64;
        }

        rem as u64
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `u128` internally to prevent overflow during multiplication
    /// before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use sony4x4_keygen::ring::Ring;
    /// let ring = Ring::try_with(10).unwrap();
    /// assert_eq!(ring.mul(7, 5), 5); // 35 mod 10 = 5
    /// assert_eq!(ring.mul(4, 5), 0); // 20 mod 10 = 0
    /// ```
    pub fn mul(&self, a: u64, b: u64) -> u64 {
        (a as u128 * b as u128 % self.modulus as u128) as u64
    }

    /// Computes `base^exponent mod modulus` by the right-to-left binary
    /// method.
    ///
    /// Returns 0 immediately when the modulus is 1. The result is
    /// always in `[0, modulus)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use sony4x4_keygen::ring::Ring;
    /// let ring = Ring::try_with(1000).unwrap();
    /// assert_eq!(ring.pow(2, 10), 24); // 1024 mod 1000
    /// assert_eq!(ring.pow(5, 0), 1);
    /// assert_eq!(Ring::try_with(1).unwrap().pow(7, 3), 0);
    /// ```
    pub fn pow(&self, base: u64, mut exponent: u64) -> u64 {
        if self.modulus == 1 {
            return 0;
        }

        let m = self.modulus as u128;
        let mut base = base as u128 % m;
        let mut result: u128 = 1;

        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result * base % m;
            }
            exponent >>= 1;
            base = base * base % m;
        }

        result as u64
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `KeygenError::NoInverse` if the inverse does not exist
    /// (i.e., `gcd(a, modulus) != 1`), or if `a` reduces to 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use sony4x4_keygen::ring::Ring;
    /// let ring = Ring::try_with(11).unwrap();
    /// assert_eq!(ring.inv(5).unwrap(), 9); // 5 * 9 = 45 = 1 mod 11
    /// assert!(Ring::try_with(10).unwrap().inv(2).is_err()); // gcd(2, 10) = 2
    /// assert!(ring.inv(0).is_err());
    /// ```
    pub fn inv(&self, a: u64) -> Result<u64, KeygenError> {
        let a_norm = a % self.modulus;
        if a_norm == 0 {
            return Err(KeygenError::NoInverse(format!(
                "Cannot invert 0 in mod {}",
                self.modulus
            )));
        }

        modinv(a_norm, self.modulus).ok_or_else(|| {
            KeygenError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {}",
                a_norm, self.modulus
            ))
        })
    }
}
