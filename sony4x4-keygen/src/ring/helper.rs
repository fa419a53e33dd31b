/// Computes the greatest common divisor of two numbers.
pub fn gcd(mut a: i128, mut b: i128) -> i128 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
///
/// Runs over `i128`: the Sony 4x4 totient (p-1)(q-1) is close to
/// 2^63.1 and does not fit a signed 64-bit accumulator.
pub fn extended_gcd(a: i128, b: i128) -> (i128, i128, i128) {
    if a == 0 {
        if b.is_negative() {
            return (-b, 0, -1);
        }

        return (b, 0, 1);
    }

    let (g, x1, y1) = extended_gcd(b % a, a);
    let x = y1 - (b / a) * x1;
    let y = x1;
    (g, x, y)
}

/// Modular inverse of a mod m, if it exists.
pub fn modinv(a: u64, m: u64) -> Option<u64> {
    if m == 0 {
        return None;
    }

    let (g, x, _) = extended_gcd(a as i128, m as i128);
    if g != 1 {
        None
    } else {
        // x·a ≡ 1 (mod m); the remainder may come back negative
        let m = m as i128;
        Some(((x % m + m) % m) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    #[test]
    fn test_simple_gcd() {
        assert_eq!(gcd(1, 6), 1);
        assert_eq!(gcd(5, 6), 1);
        assert_eq!(gcd(2, 6), 2);
        assert_eq!(gcd(4, 6), 2);
        assert_eq!(gcd(6, 6), 6);
        assert_eq!(gcd(10, 0), 10);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(54, 24), 6);
    }

    #[test]
    fn test_equivalence_with_extended_gcd() {
        let (g, _, _) = extended_gcd(12, 8);
        assert_eq!(g, gcd(12, 8));
    }

    #[test]
    fn test_extended_gcd_basic() {
        let (g, x, y) = extended_gcd(12, 8);
        assert_eq!(g, 4);
        assert_eq!(12 * x + 8 * y, g);

        let (g, x, y) = extended_gcd(17, 13);
        assert_eq!(g, 1);
        assert_eq!(17 * x + 13 * y, g);
    }

    #[test]
    fn test_extended_gcd_zero() {
        let (g, x, y) = extended_gcd(0, 15);
        assert_eq!(g, 15);
        assert_eq!(x, 0);
        assert_eq!(y, 1);

        let (g, x, _y) = extended_gcd(15, 0);
        assert_eq!(g, 15);
        assert_eq!(15 * x, g);
    }

    #[test]
    fn test_extended_gcd_beyond_i64() {
        // (p-1)(q-1) for the Sony 4x4 primes, larger than i64::MAX
        let phi: i128 = 9_909_111_250_697_090_380;
        let (g, x, y) = extended_gcd(41, phi);
        assert_eq!(g, 1);
        assert_eq!(41 * x + phi * y, g);
    }

    #[test]
    fn test_modinv_small() {
        assert_eq!(modinv(3, 10), Some(7));
        assert_eq!(modinv(7, 10), Some(3));
        assert_eq!(modinv(2, 10), None);
        assert_eq!(modinv(0, 10), None);
        assert_eq!(modinv(5, 0), None);
    }

    #[test]
    fn test_modinv_sony_totient() {
        let phi = 9_909_111_250_697_090_380u64;
        assert_eq!(modinv(41, phi), Some(2_900_227_683_130_855_721));
    }

    quickcheck! {
        fn prop_modinv_multiplies_to_one(a: u64, m: u64) -> TestResult {
            let m = m % 1_000_003 + 2;
            let a = a % m;
            if gcd(a as i128, m as i128) != 1 {
                return TestResult::discard();
            }

            match modinv(a, m) {
                Some(x) => {
                    if x >= m {
                        return TestResult::error(format!(
                            "inverse {} not reduced mod {}",
                            x, m
                        ));
                    }
                    TestResult::from_bool((a as u128 * x as u128) % m as u128 == 1)
                }
                None => TestResult::error(format!(
                    "no inverse for {} mod {} despite gcd 1",
                    a, m
                )),
            }
        }
    }
}
