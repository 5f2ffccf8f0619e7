// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to bytes (big-endian)
pub fn to_bytes(n: &RsaBigInt) -> Vec<u8> {
    n.to_bytes_be()
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}

/// Draw a random odd integer of exactly `bit_length` bits.
/// The top bit is forced to 1 to fix the width and the bottom bit is
/// forced to 1 so the candidate is odd.
pub fn random_odd_candidate<R: Rng + ?Sized>(bit_length: u64, rng: &mut R) -> RsaBigInt {
    let mut candidate = rng.gen_biguint(bit_length);
    candidate |= RsaBigInt::one() << (bit_length - 1);
    candidate |= RsaBigInt::one();
    candidate
}

/// Draw a uniform random big integer in [low, high)
pub fn random_in_range<R: Rng + ?Sized>(
    low: &RsaBigInt,
    high: &RsaBigInt,
    rng: &mut R,
) -> RsaBigInt {
    rng.gen_biguint_range(low, high)
}
