//! Byte-level encoding of Sony 4x4 challenge codes and passwords.
//!
//! A challenge code is 16 characters over [`CODE_ALPHABET`]; each
//! 2-character group is one base-16 digit pair, and the groups are laid
//! down in reverse, so the last pair of the code becomes byte 0 of the
//! ciphertext block. The password side maps 3-bit fields of the low
//! plaintext word through [`PASSWORD_ALPHABET`].

use crate::errors::KeygenError;

use itertools::Itertools;
use lazy_static::lazy_static;

use std::collections::HashMap;

/// The 16-symbol alphabet the BIOS uses to display challenge codes.
pub const CODE_ALPHABET: &str = "9DPK7V2F3RT6HX8J";
/// The 8-symbol alphabet master passwords are drawn from.
pub const PASSWORD_ALPHABET: &str = "47592836";

/// Length of a challenge code after separators are stripped.
pub const CODE_LEN: usize = 16;
/// Length in bytes of the ciphertext/plaintext block.
pub const BLOCK_LEN: usize = 8;

lazy_static! {
    /// A static HashMap mapping each challenge-code character to its
    /// base-16 digit value (its index within [`CODE_ALPHABET`]).
    pub static ref CODE_CHAR_TO_INDEX_MAP: HashMap<char, u8> = {
        let mut map = HashMap::new();

        for (index, ch) in CODE_ALPHABET.chars().enumerate() {
            map.insert(ch, index as u8);
        }

        map
    };
}

/// Packs 4 bytes into a `u32` using little-endian byte order.
pub fn word_from_bytes(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Splits a `u32` into 4 bytes using little-endian byte order.
pub fn word_to_bytes(word: u32) -> [u8; 4] {
    word.to_le_bytes()
}

/// Decodes a 16-character challenge code into the 8-byte ciphertext block.
///
/// Character pairs are read left to right; the byte for a pair is
/// `index(hi) * 16 + index(lo)`. Pairs fill the block from the last
/// position down, so the final pair of the code decodes to byte 0.
/// That reversal is a protocol detail of the device encoding and must
/// not be simplified away.
///
/// # Errors
///
/// Returns `KeygenError::InvalidCode` when the input is not exactly
/// [`CODE_LEN`] characters or contains a character outside
/// [`CODE_ALPHABET`].
pub fn decode_code(code: &str) -> Result<[u8; BLOCK_LEN], KeygenError> {
    if code.chars().count() != CODE_LEN {
        return Err(KeygenError::InvalidCode(format!(
            "Code must be exactly {} characters, got {}",
            CODE_LEN,
            code.chars().count()
        )));
    }

    let digit = |ch: char| -> Result<u8, KeygenError> {
        CODE_CHAR_TO_INDEX_MAP.get(&ch).copied().ok_or_else(|| {
            KeygenError::InvalidCode(format!("Character '{}' is not in the code alphabet", ch))
        })
    };

    let mut block = [0u8; BLOCK_LEN];
    for (slot, (hi, lo)) in block.iter_mut().rev().zip(code.chars().tuples()) {
        *slot = digit(hi)? * 16 + digit(lo)?;
    }

    Ok(block)
}

/// Encodes the decrypted plaintext block into the 8-character password.
///
/// Only the low 32-bit word (bytes 0-3, little endian) is consulted:
/// for each output position `i`, the 3-bit field at shift `21 - i*3`
/// selects a symbol of [`PASSWORD_ALPHABET`]. Total for any input
/// block, since every 3-bit value is a valid alphabet index.
pub fn encode_password(block: &[u8; BLOCK_LEN]) -> String {
    let n = word_from_bytes(&block[..4]);

    (0..8)
        .map(|i| PASSWORD_ALPHABET.as_bytes()[((n >> (21 - i * 3)) & 0x7) as usize] as char)
        .collect()
}
