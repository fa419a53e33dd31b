//! CRT decryption of one 8-byte ciphertext block.

use crate::codec::{BLOCK_LEN, word_from_bytes, word_to_bytes};
use crate::errors::KeygenError;
use crate::keypair::KeyMaterial;
use crate::ring::Ring;

/// Decrypts an 8-byte ciphertext block with the given CRT key.
///
/// The block packs two little-endian `u32` words; the full ciphertext
/// is `C = high << 32 | low`. Decryption runs as two half-sized
/// exponentiations `m1 = C^dp mod p` and `m2 = C^dq mod q`, recombined
/// through the CRT coefficient. When `m1 < m2` the difference is
/// lifted by `p` before reduction so no intermediate goes negative.
///
/// The recombined plaintext `h*q + m2` is strictly below `p*q`, which
/// [`KeyMaterial::try_with`] guarantees fits a `u64`, so the output
/// words are plain unsigned halves of `M`.
pub fn decrypt_block(
    block: &[u8; BLOCK_LEN],
    key: &KeyMaterial,
) -> Result<[u8; BLOCK_LEN], KeygenError> {
    let low = word_from_bytes(&block[..4]);
    let high = word_from_bytes(&block[4..]);
    let c = (high as u64) << 32 | low as u64;

    let mod_p = Ring::try_with(key.p)?;
    let mod_q = Ring::try_with(key.q)?;

    let m1 = mod_p.pow(c, key.dp);
    let m2 = mod_q.pow(c, key.dq);

    let h = if m1 < m2 {
        mod_p.mul(m1 + key.p - m2, key.qinv)
    } else {
        mod_p.mul(m1 - m2, key.qinv)
    };

    // h < p and m2 < q, so h*q + m2 < p*q <= u64::MAX
    let m = h * key.q + m2;

    tracing::debug!(ciphertext = c, plaintext = m, "block decrypted");

    let mut plain = [0u8; BLOCK_LEN];
    plain[..4].copy_from_slice(&word_to_bytes((m & 0xFFFF_FFFF) as u32));
    plain[4..].copy_from_slice(&word_to_bytes((m >> 32) as u32));

    Ok(plain)
}
