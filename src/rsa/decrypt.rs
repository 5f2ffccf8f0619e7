// RSA Decryption Implementation
// Parses decimal ciphertext, reverses the modexp, decodes UTF-8

use std::str::FromStr;

use num_traits::Zero;

use super::bigint::{mod_pow, to_bytes, RsaBigInt};
use super::error::{RsaError, RsaResult};
use super::keygen::PrivateKey;

/// Decrypt a decimal ciphertext string with a private key.
/// Computes M = C^d mod n, writes M as big-endian bytes of minimal
/// length and decodes them as UTF-8.
///
/// Known limitation: the recovered byte length is derived from the bit
/// length of M, so a plaintext whose first byte is 0x00 comes back one
/// byte short. Carrying length metadata would fix this but change the
/// wire contract, so the textbook behavior is kept.
pub fn decrypt(private_key: &PrivateKey, ciphertext: &str) -> RsaResult<String> {
    let c = RsaBigInt::from_str(ciphertext.trim()).map_err(RsaError::CiphertextFormat)?;

    let m = mod_pow(&c, &private_key.d, &private_key.n);

    // Zero has bit length 0 and so decodes to no bytes at all;
    // to_bytes_be would emit [0] instead
    if m.is_zero() {
        return Ok(String::new());
    }

    // For nonzero M, to_bytes_be emits the minimal (bits(M)+7)/8 bytes
    let recovered = to_bytes(&m);
    String::from_utf8(recovered).map_err(RsaError::Decryption)
}
