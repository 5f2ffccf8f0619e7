// Error types for the RSA core
// Every failure is local to one keygen/encrypt/decrypt call

use std::string::FromUtf8Error;

/// Result type for RSA operations
pub type RsaResult<T> = Result<T, RsaError>;

/// Errors surfaced by key generation, encryption and decryption
#[derive(Debug, thiserror::Error)]
pub enum RsaError {
    /// The extended Euclidean algorithm found gcd(e, phi) != 1 while
    /// computing the private exponent. The coprimality loop in key
    /// generation should make this unreachable; if it fires, the current
    /// key-generation attempt is abandoned, not retried.
    #[error("e and phi(n) are not coprime, no modular inverse exists")]
    KeyDerivation,

    /// A wire-format key string did not parse as two comma-separated
    /// decimal integers.
    #[error("invalid key string {input:?}: expected \"d,n\" as two comma-separated decimal integers")]
    KeyFormat { input: String },

    /// The ciphertext string is not a decimal integer.
    #[error("ciphertext is not a decimal integer")]
    CiphertextFormat(#[source] num_bigint::ParseBigIntError),

    /// Decryption recovered bytes that are not valid UTF-8. Happens with
    /// a wrong key, a corrupted ciphertext, or a plaintext whose leading
    /// byte was 0x00 (see `decrypt`). The raw bytes stay available
    /// through `recovered_bytes`.
    #[error("decrypted bytes are not valid UTF-8")]
    Decryption(#[source] FromUtf8Error),

    /// The plaintext, read as a big-endian integer, is not smaller than
    /// the modulus. The reference implementation silently produces an
    /// unrecoverable ciphertext here; failing fast is a deliberate
    /// strengthening.
    #[error("plaintext too large: {message_bits}-bit message does not fit a {modulus_bits}-bit modulus")]
    PlaintextTooLarge {
        message_bits: u64,
        modulus_bits: u64,
    },

    /// The requested prime width cannot produce a prime candidate.
    /// Widths below 2 bits either underflow the top-bit shift or pin
    /// the candidate at the constant 1.
    #[error("prime bit length must be at least 2, got {bits}")]
    InvalidBitLength { bits: u64 },

    /// A bounded prime search hit its attempt cap without finding a
    /// prime. Only produced by `generate_prime_bounded`; the default
    /// search retries until success.
    #[error("prime search exhausted after {attempts} attempts")]
    PrimeSearchExhausted { attempts: u64 },
}

impl RsaError {
    /// Raw bytes recovered by a failed decryption, when available.
    pub fn recovered_bytes(&self) -> Option<&[u8]> {
        match self {
            RsaError::Decryption(e) => Some(e.as_bytes()),
            _ => None,
        }
    }
}
