// RSA Key Generation
// Implements RSA key pair generation (public and private keys)

use std::fmt;
use std::str::FromStr;

use log::debug;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

use super::bigint::{from_u64, gcd, random_in_range, RsaBigInt};
use super::error::{RsaError, RsaResult};
use super::prime::generate_prime;

/// Default prime size in bits. Each prime is 128 bits, giving a 256-bit
/// modulus. Far too small to be secure; kept for parity with the
/// original textbook behavior.
pub const DEFAULT_PRIME_BITS: u64 = 128;

/// The conventional fixed public exponent tried first
const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub e: RsaBigInt, // Public exponent
    pub n: RsaBigInt, // Modulus
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub d: RsaBigInt, // Private exponent
    pub n: RsaBigInt, // Modulus (same as public)
}

impl PublicKey {
    /// Bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Encrypt a message using this public key
    pub fn encrypt(&self, plaintext: &str) -> RsaResult<String> {
        super::encrypt::encrypt(self, plaintext)
    }
}

impl PrivateKey {
    /// Bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt a decimal ciphertext string using this private key
    pub fn decrypt(&self, ciphertext: &str) -> RsaResult<String> {
        super::decrypt::decrypt(self, ciphertext)
    }
}

// Wire form used when a key crosses a boundary such as a form field:
// two decimal integers separated by a comma, exponent first.
// Whitespace around either integer is accepted, matching how the
// original form handler parsed the field.

fn parse_wire_pair(s: &str) -> RsaResult<(RsaBigInt, RsaBigInt)> {
    let err = || RsaError::KeyFormat {
        input: s.to_string(),
    };
    let (exp, n) = s.split_once(',').ok_or_else(err)?;
    if n.contains(',') {
        return Err(err());
    }
    let exp = RsaBigInt::from_str(exp.trim()).map_err(|_| err())?;
    let n = RsaBigInt::from_str(n.trim()).map_err(|_| err())?;
    Ok((exp, n))
}

impl FromStr for PublicKey {
    type Err = RsaError;

    fn from_str(s: &str) -> RsaResult<Self> {
        let (e, n) = parse_wire_pair(s)?;
        Ok(PublicKey { e, n })
    }
}

impl FromStr for PrivateKey {
    type Err = RsaError;

    fn from_str(s: &str) -> RsaResult<Self> {
        let (d, n) = parse_wire_pair(s)?;
        Ok(PrivateKey { d, n })
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.e, self.n)
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.d, self.n)
    }
}

/// Compute the modular inverse of e mod phi with the iterative extended
/// Euclidean algorithm. Intermediate coefficients go negative, so the
/// loop runs on signed integers and the result is normalized back into
/// [0, phi) at the end.
fn mod_inverse(e: &RsaBigInt, phi: &RsaBigInt) -> RsaResult<RsaBigInt> {
    let original_phi = BigInt::from(phi.clone());
    let mut phi = original_phi.clone();
    let mut e = BigInt::from(e.clone());

    let (mut x0, mut x1) = (BigInt::zero(), BigInt::one());
    let (mut y0, mut y1) = (BigInt::one(), BigInt::zero());

    while e > BigInt::zero() {
        let (q, r) = phi.div_rem(&e);
        phi = e;
        e = r;

        let next_x0 = &x1 - &q * &x0;
        x1 = x0;
        x0 = next_x0;

        let next_y0 = &y1 - &q * &y0;
        y1 = y0;
        y0 = next_y0;
    }

    // Final remainder is gcd(e, phi); anything but 1 means no inverse
    if !phi.is_one() {
        return Err(RsaError::KeyDerivation);
    }

    let d = if y1 < BigInt::zero() {
        y1 + &original_phi
    } else {
        y1
    };
    d.to_biguint().ok_or(RsaError::KeyDerivation)
}

/// Derive a key pair from two already-generated primes.
/// Split out from `generate_keys` so a harness can capture p and q and
/// verify e*d = 1 (mod (p-1)(q-1)) independently.
pub fn keys_from_primes<R: Rng + ?Sized>(
    p: &RsaBigInt,
    q: &RsaBigInt,
    rng: &mut R,
) -> RsaResult<(PublicKey, PrivateKey)> {
    let n = p * q;
    let one = RsaBigInt::one();
    let phi = (p - &one) * (q - &one);

    // 65537 is almost always coprime to phi; fall back to random
    // exponents in [2, phi) on the rare collision
    let mut e = from_u64(DEFAULT_PUBLIC_EXPONENT);
    let two = from_u64(2);
    while !gcd(&e, &phi).is_one() {
        e = random_in_range(&two, &phi, rng);
    }

    let d = mod_inverse(&e, &phi)?;
    debug!("derived key pair with {}-bit modulus", n.bits());

    Ok((PublicKey { e, n: n.clone() }, PrivateKey { d, n }))
}

/// Generate an RSA key pair from two fresh primes of `bit_length` bits
/// each. The two primes are drawn independently; a p = q collision is
/// not checked for, matching the textbook construction.
pub fn generate_keys<R: Rng + ?Sized>(
    bit_length: u64,
    rng: &mut R,
) -> RsaResult<(PublicKey, PrivateKey)> {
    if bit_length < 2 {
        return Err(RsaError::InvalidBitLength { bits: bit_length });
    }
    let p = generate_prime(bit_length, rng);
    let q = generate_prime(bit_length, rng);
    keys_from_primes(&p, &q, rng)
}

/// Generate a key pair with the default prime size and the thread-local RNG
pub fn generate_default_keys() -> RsaResult<(PublicKey, PrivateKey)> {
    generate_keys(DEFAULT_PRIME_BITS, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1)
    }

    #[test]
    fn test_mod_inverse_small() {
        // 3 * 5 = 15 = 1 mod 7
        let inv = mod_inverse(&from_u64(3), &from_u64(7)).unwrap();
        assert_eq!(inv, from_u64(5));

        // The classic worked example: e = 17, phi = 3120, d = 2753
        let inv = mod_inverse(&from_u64(17), &from_u64(3120)).unwrap();
        assert_eq!(inv, from_u64(2753));
    }

    #[test]
    fn test_mod_inverse_not_coprime() {
        let err = mod_inverse(&from_u64(2), &from_u64(4)).unwrap_err();
        assert!(matches!(err, RsaError::KeyDerivation));
    }

    #[test]
    fn test_key_validity() {
        let mut rng = rng();
        let p = super::super::prime::generate_prime(64, &mut rng);
        let q = super::super::prime::generate_prime(64, &mut rng);
        let (public, private) = keys_from_primes(&p, &q, &mut rng).unwrap();

        // Recompute phi from the captured primes
        let one = RsaBigInt::one();
        let phi = (&p - &one) * (&q - &one);
        assert_eq!((&public.e * &private.d) % &phi, one);
        assert_eq!(public.n, &p * &q);
        assert_eq!(public.n, private.n);
    }

    #[test]
    fn test_degenerate_bit_lengths_rejected() {
        // 0 bits would underflow the top-bit shift; 1 bit pins the
        // candidate at the constant 1 and never terminates
        let mut rng = rng();
        for bits in [0u64, 1] {
            let err = generate_keys(bits, &mut rng).unwrap_err();
            assert!(matches!(err, RsaError::InvalidBitLength { .. }), "bits {}", bits);
        }
    }

    #[test]
    fn test_default_exponent_used() {
        let mut rng = rng();
        let (public, _) = generate_keys(64, &mut rng).unwrap();
        assert_eq!(public.e, from_u64(65537));
    }

    #[test]
    fn test_modulus_width() {
        let mut rng = rng();
        let (public, _) = generate_keys(128, &mut rng).unwrap();
        // Two 128-bit primes with forced top bits multiply to 255 or 256 bits
        assert!(public.modulus_bits() == 255 || public.modulus_bits() == 256);
    }

    #[test]
    fn test_wire_roundtrip() {
        let key = PrivateKey {
            d: from_u64(2753),
            n: from_u64(3233),
        };
        let parsed: PrivateKey = key.to_string().parse().unwrap();
        assert_eq!(parsed, key);

        let public: PublicKey = "17,3233".parse().unwrap();
        assert_eq!(public.e, from_u64(17));
        assert_eq!(public.n, from_u64(3233));
    }

    #[test]
    fn test_wire_accepts_whitespace() {
        let parsed: PrivateKey = "2753, 3233".parse().unwrap();
        assert_eq!(parsed.d, from_u64(2753));
    }

    #[test]
    fn test_malformed_wire_key() {
        for bad in ["notanumber,123", "123", "1,2,3", "", ",", "12,-3"] {
            let err = bad.parse::<PrivateKey>().unwrap_err();
            assert!(matches!(err, RsaError::KeyFormat { .. }), "input {:?}", bad);
        }
    }
}
