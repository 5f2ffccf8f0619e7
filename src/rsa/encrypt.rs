// RSA Encryption Implementation
// Raw textbook RSA: no padding, deterministic, malleable by design

use super::bigint::{from_bytes, mod_pow};
use super::error::{RsaError, RsaResult};
use super::keygen::PublicKey;

/// Encrypt a text message with a public key.
/// The UTF-8 bytes of `plaintext` are read as a single big-endian
/// integer M and raised to e mod n; the ciphertext is returned as the
/// decimal string of the result, safe to embed in non-binary transport.
///
/// Fails with `PlaintextTooLarge` when M does not fit below the
/// modulus. Without padding the same plaintext and key always produce
/// the same ciphertext.
pub fn encrypt(public_key: &PublicKey, plaintext: &str) -> RsaResult<String> {
    let m = from_bytes(plaintext.as_bytes());

    if m >= public_key.n {
        return Err(RsaError::PlaintextTooLarge {
            message_bits: m.bits(),
            modulus_bits: public_key.n.bits(),
        });
    }

    let c = mod_pow(&m, &public_key.e, &public_key.n);
    Ok(c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::keygen::generate_keys;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn test_ciphertext_is_decimal() {
        let mut rng = rng();
        let (public, _) = generate_keys(64, &mut rng).unwrap();
        let c = encrypt(&public, "hi").unwrap();
        assert!(!c.is_empty());
        assert!(c.chars().all(|ch| ch.is_ascii_digit()));
    }

    #[test]
    fn test_deterministic_without_padding() {
        let mut rng = rng();
        let (public, _) = generate_keys(64, &mut rng).unwrap();
        let a = encrypt(&public, "same message").unwrap();
        let b = encrypt(&public, "same message").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_plaintext_too_large() {
        let mut rng = rng();
        // 64-bit primes give a ~128-bit modulus; 32 bytes of text cannot fit
        let (public, _) = generate_keys(64, &mut rng).unwrap();
        let err = encrypt(&public, "this message is far too long to fit").unwrap_err();
        assert!(matches!(err, RsaError::PlaintextTooLarge { .. }));
    }

    #[test]
    fn test_known_small_key() {
        // e = 17, n = 3233 (p = 61, q = 53): "A" = 65, 65^17 mod 3233 = 2790
        let public = PublicKey {
            e: crate::rsa::bigint::from_u64(17),
            n: crate::rsa::bigint::from_u64(3233),
        };
        assert_eq!(encrypt(&public, "A").unwrap(), "2790");
    }
}
