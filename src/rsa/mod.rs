// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod prime;

pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use error::{RsaError, RsaResult};
pub use keygen::{
    generate_default_keys, generate_keys, keys_from_primes, PrivateKey, PublicKey,
    DEFAULT_PRIME_BITS,
};
pub use prime::{generate_prime, generate_prime_bounded, is_prime, DEFAULT_MILLER_RABIN_ROUNDS};
