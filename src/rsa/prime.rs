// Prime testing and generation
// Miller-Rabin probabilistic primality test and random prime search

use log::debug;
use rand::Rng;

use super::bigint::{from_u64, mod_pow, random_in_range, random_odd_candidate, RsaBigInt};
use super::error::{RsaError, RsaResult};
use num_integer::Integer;
use num_traits::One;

/// Miller-Rabin rounds used by key generation. The false-positive
/// probability is at most 4^(-rounds), negligible but not zero.
pub const DEFAULT_MILLER_RABIN_ROUNDS: u32 = 128;

/// Miller-Rabin primality test
/// Returns true if n is probably prime after `rounds` witness rounds.
/// Never errors; compositeness is definite, primality is probabilistic.
pub fn is_prime<R: Rng + ?Sized>(n: &RsaBigInt, rounds: u32, rng: &mut R) -> bool {
    let one = RsaBigInt::one();
    if n <= &one || n == &from_u64(4) {
        return false;
    }
    if n <= &from_u64(3) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as 2^r * d with d odd
    let n_minus_one = n - &one;
    let mut d = n_minus_one.clone();
    let mut r = 0u32;
    while d.is_even() {
        d >>= 1;
        r += 1;
    }

    let two = from_u64(2);
    for _ in 0..rounds {
        // Random witness a in [2, n-2]
        let a = random_in_range(&two, &n_minus_one, rng);
        let mut x = mod_pow(&a, &d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        let mut witnessed = false;
        for _ in 1..r {
            x = (&x * &x) % n;
            if x == n_minus_one {
                witnessed = true;
                break;
            }
        }

        if !witnessed {
            // Definitely composite
            return false;
        }
    }

    true
}

/// Generate a random prime of exactly `bit_length` bits.
/// Draws odd fixed-width candidates until one passes Miller-Rabin with
/// 128 rounds. Unbounded retry; termination relies on prime density.
///
/// `bit_length` must be at least 2: the candidate generator forces the
/// top and bottom bits, so narrower widths have no candidates to draw.
/// Callers that take the width from user input go through
/// `generate_keys` or `generate_prime_bounded`, which validate it.
pub fn generate_prime<R: Rng + ?Sized>(bit_length: u64, rng: &mut R) -> RsaBigInt {
    let mut attempts = 0u64;
    loop {
        attempts += 1;
        let candidate = random_odd_candidate(bit_length, rng);
        if is_prime(&candidate, DEFAULT_MILLER_RABIN_ROUNDS, rng) {
            debug!(
                "found {}-bit prime after {} candidate(s)",
                bit_length, attempts
            );
            return candidate;
        }
    }
}

/// Bounded variant of `generate_prime` for callers that need an upper
/// bound on latency. Fails with `PrimeSearchExhausted` once
/// `max_attempts` candidates have been rejected.
pub fn generate_prime_bounded<R: Rng + ?Sized>(
    bit_length: u64,
    max_attempts: u64,
    rng: &mut R,
) -> RsaResult<RsaBigInt> {
    if bit_length < 2 {
        return Err(RsaError::InvalidBitLength { bits: bit_length });
    }
    for attempts in 1..=max_attempts {
        let candidate = random_odd_candidate(bit_length, rng);
        if is_prime(&candidate, DEFAULT_MILLER_RABIN_ROUNDS, rng) {
            debug!(
                "found {}-bit prime after {} candidate(s)",
                bit_length, attempts
            );
            return Ok(candidate);
        }
    }
    Err(RsaError::PrimeSearchExhausted {
        attempts: max_attempts,
    })
}
