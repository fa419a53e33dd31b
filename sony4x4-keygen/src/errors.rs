#[derive(thiserror::Error, Debug)]
pub enum KeygenError {
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (m == 0).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when a challenge code fails length or alphabet validation.
    #[error("InvalidCode: {0}")]
    InvalidCode(String),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
}
