//! The public solver surface: input cleaning, validation, and the
//! code-to-password pipeline.

use crate::codec::{CODE_CHAR_TO_INDEX_MAP, CODE_LEN, decode_code, encode_password};
use crate::errors::KeygenError;
use crate::preset::SONY_4X4;
use crate::rsa::decrypt_block;

/// Registry name of this solver.
pub const NAME: &str = "sony4x4";
/// Human-readable description.
pub const DESCRIPTION: &str = "Sony 4x4";
/// Known-good challenge codes, as the BIOS displays them.
pub const EXAMPLE_CODES: &[&str] = &["73KR-3FP9-PVKH-K29R"];

/// Normalizes raw user input: trims, strips `-` separators and inner
/// whitespace, and uppercases.
pub fn clean_input(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|ch| *ch != '-' && !ch.is_whitespace())
        .map(|ch| ch.to_ascii_uppercase())
        .collect()
}

/// Whether a cleaned code is exactly 16 characters of the code alphabet.
pub fn is_valid_code(code: &str) -> bool {
    code.chars().count() == CODE_LEN
        && code.chars().all(|ch| CODE_CHAR_TO_INDEX_MAP.contains_key(&ch))
}

/// Computes the master password for a validated 16-character code.
///
/// # Errors
///
/// Returns `KeygenError::InvalidCode` for inputs that slipped past the
/// caller's validation. The internal `NoInverse` path cannot trigger
/// with the fixed device key.
pub fn decode_password(code: &str) -> Result<String, KeygenError> {
    let block = decode_code(code)?;
    let plain = decrypt_block(&block, &SONY_4X4)?;
    let password = encode_password(&plain);

    tracing::debug!(code, %password, "challenge code solved");

    Ok(password)
}

/// Cleans and validates raw input, then solves it.
///
/// Invalid input yields an empty candidate list rather than an error,
/// matching the solver-harness contract of "no answers for this code".
pub fn solve(input: &str) -> Result<Vec<String>, KeygenError> {
    let code = clean_input(input);
    if !is_valid_code(&code) {
        return Ok(Vec::new());
    }

    Ok(vec![decode_password(&code)?])
}
